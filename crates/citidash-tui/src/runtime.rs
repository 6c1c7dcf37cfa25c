//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use citidash_core::config::Config;
use citidash_core::data::DatasetBundle;
use citidash_core::interrupt;
use crossterm::event;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, DashboardTerminal};
use crate::{render, update};

/// Full-screen dashboard runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop, on
/// panic, and after Ctrl+C.
pub struct TuiRuntime {
    terminal: DashboardTerminal,
    pub state: AppState,
    tick_interval: Duration,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Enters the alternate screen and builds the initial state.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(config: &Config, bundle: Arc<DatasetBundle>) -> Result<Self> {
        // Panic hook goes in before the alternate screen.
        terminal::install_panic_hook();
        interrupt::reset();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state: AppState::new(bundle, config),
            tick_interval: config.tick(),
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until quit.
    ///
    /// # Errors
    /// Returns an error if drawing or reading terminal input fails.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            if interrupt::is_interrupted() {
                tracing::info!("interrupted, leaving dashboard");
                self.state.should_quit = true;
                break;
            }

            let mut events = self.collect_events()?;
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                dirty |= marks_dirty(&event);
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();
        let poll_duration = self.tick_interval.saturating_sub(self.last_tick.elapsed());

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= self.tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }
        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::OpenMapDocument { path } => {
                tracing::info!(path = %path.display(), "opening map document");
                let result = open::that(&path)
                    .map(|()| path.display().to_string())
                    .map_err(|err| format!("{}: {err}", path.display()));
                self.dispatch_event(UiEvent::MapOpened { result });
            }
        }
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        if !effects.is_empty() {
            self.execute_effects(effects);
        }
    }
}

/// Whether `event` can change what is on screen.
///
/// `Frame` is sent every loop; a real resize arrives as a terminal event.
fn marks_dirty(event: &UiEvent) -> bool {
    !matches!(event, UiEvent::Frame { .. })
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
