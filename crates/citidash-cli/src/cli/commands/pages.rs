//! `citidash pages`.

use citidash_core::catalog::PageCatalog;

/// Prints the catalog, one numbered title per line.
pub fn list() {
    for (i, page) in PageCatalog::default().iter().enumerate() {
        println!("{:>2}. {}", i + 1, page.title());
    }
}
