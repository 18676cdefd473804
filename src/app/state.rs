use crate::app::counter::{Control, CounterState};
use crate::config::AppConfig;
use ratatui::layout::Rect;

/// How many ticks a control stays highlighted after it is activated.
pub const FLASH_TICKS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash {
    pub control: Control,
    pub ticks_left: u8,
}

pub struct AppState {
    pub config: AppConfig,
    pub counter: CounterState,
    pub focus: Control,
    pub flash: Option<Flash>,
    /// Last known terminal size, used to hit-test mouse clicks.
    pub viewport: Rect,
    pub should_quit: bool,
    /// Set when the loop has to stop because of a host failure.
    pub fatal_error: Option<String>,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, viewport: Rect) -> Self {
        Self {
            config,
            counter: CounterState::new(),
            focus: Control::Increment,
            flash: None,
            viewport,
            should_quit: false,
            fatal_error: None,
            dirty: true,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.toggled();
        self.dirty = true;
    }

    pub fn start_flash(&mut self, control: Control) {
        self.flash = Some(Flash {
            control,
            ticks_left: FLASH_TICKS,
        });
        self.dirty = true;
    }

    pub fn is_flashing(&self, control: Control) -> bool {
        self.flash.is_some_and(|f| f.control == control)
    }

    pub fn show_greeting(&self) -> bool {
        self.config.greeting.enabled
    }

    pub fn status_line(&self) -> String {
        format!("value {}", self.counter.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_new_state() {
        let s = state();
        assert_eq!(s.counter.value(), 0);
        assert_eq!(s.focus, Control::Increment);
        assert!(s.flash.is_none());
        assert!(s.dirty);
        assert!(!s.should_quit);
        assert!(s.fatal_error.is_none());
    }

    #[test]
    fn test_cycle_focus_marks_dirty() {
        let mut s = state();
        s.dirty = false;
        s.cycle_focus();
        assert_eq!(s.focus, Control::Decrement);
        assert!(s.dirty);
        s.cycle_focus();
        assert_eq!(s.focus, Control::Increment);
    }

    #[test]
    fn test_flash_tracks_one_control() {
        let mut s = state();
        s.start_flash(Control::Decrement);
        assert!(s.is_flashing(Control::Decrement));
        assert!(!s.is_flashing(Control::Increment));
        s.start_flash(Control::Increment);
        assert!(s.is_flashing(Control::Increment));
        assert!(!s.is_flashing(Control::Decrement));
    }
}
