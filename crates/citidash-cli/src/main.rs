mod cli;

use citidash_core::interrupt;

/// Process exit code for a failed run: 130 after Ctrl+C, 1 otherwise.
fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<interrupt::InterruptedError>().is_some() {
        130
    } else {
        1
    }
}

fn main() {
    if let Err(e) = cli::run() {
        let code = exit_code(&e);
        if code == 130 {
            eprintln!("Interrupted");
        } else {
            eprintln!("{e:#}"); // pretty anyhow chain
        }
        std::process::exit(code);
    }
}
