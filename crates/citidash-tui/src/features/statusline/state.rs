//! Status line state types.

/// Ticks a flash message stays visible.
pub const FLASH_TICKS: u16 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub text: String,
    pub level: FlashLevel,
    ticks_left: u16,
}

#[derive(Debug, Default)]
pub struct StatusState {
    flash: Option<Flash>,
}

impl StatusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    pub fn flash_info(&mut self, text: impl Into<String>) {
        self.set(text.into(), FlashLevel::Info);
    }

    pub fn flash_error(&mut self, text: impl Into<String>) {
        self.set(text.into(), FlashLevel::Error);
    }

    fn set(&mut self, text: String, level: FlashLevel) {
        self.flash = Some(Flash {
            text,
            level,
            ticks_left: FLASH_TICKS,
        });
    }

    /// Counts the flash down; clears it when it runs out.
    pub fn on_tick(&mut self) {
        if let Some(flash) = &mut self.flash {
            flash.ticks_left = flash.ticks_left.saturating_sub(1);
            if flash.ticks_left == 0 {
                self.flash = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_expires_after_ticks() {
        let mut status = StatusState::new();
        status.flash_error("unknown page: 'Nope'");
        for _ in 0..FLASH_TICKS - 1 {
            status.on_tick();
        }
        assert_eq!(status.flash().map(|f| f.level), Some(FlashLevel::Error));
        status.on_tick();
        assert!(status.flash().is_none());
    }

    #[test]
    fn test_new_flash_replaces_old() {
        let mut status = StatusState::new();
        status.flash_error("first");
        status.flash_info("second");
        let flash = status.flash().unwrap();
        assert_eq!(flash.text, "second");
        assert_eq!(flash.level, FlashLevel::Info);
    }
}
