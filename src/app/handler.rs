use crate::app::action::Action;
use crate::app::counter::Control;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::InputError(error) => {
            state.fatal_error = Some(error);
            vec![Action::Quit]
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

/// Apply an action to the state. Counter changes leave the view dirty.
pub fn apply_action(state: &mut AppState, action: Action) {
    let control = match action {
        Action::Increment => Control::Increment,
        Action::Decrement => Control::Decrement,
        Action::Quit => {
            state.should_quit = true;
            return;
        }
    };
    state.counter.activate(control);
    state.start_flash(control);
    debug!(
        control = control.name(),
        value = state.counter.value(),
        "counter changed"
    );
}

fn handle_tick(state: &mut AppState) {
    let Some(flash) = state.flash.as_mut() else {
        return;
    };
    flash.ticks_left = flash.ticks_left.saturating_sub(1);
    if flash.ticks_left == 0 {
        state.flash = None;
    }
    state.dirty = true;
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up => {
            vec![Action::Increment]
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Char('j') | KeyCode::Down => {
            vec![Action::Decrement]
        }
        KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Char('h')
        | KeyCode::Char('l') => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => vec![Action::from(state.focus)],
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }

    let app_layout = layout::compute_layout(state.viewport, state.show_greeting());
    let panel = layout::counter_layout(app_layout.counter);
    let pos = Position::new(mouse.column, mouse.row);

    let hit = if panel.plus.contains(pos) {
        Control::Increment
    } else if panel.minus.contains(pos) {
        Control::Decrement
    } else {
        return vec![];
    };

    state.focus = hit;
    state.dirty = true;
    vec![Action::from(hit)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyEventState;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), Rect::new(0, 0, 80, 24))
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn click(column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn run(state: &mut AppState, event: AppEvent) {
        for action in handle_event(state, event) {
            apply_action(state, action);
        }
    }

    #[test]
    fn test_key_bindings() {
        let mut s = state();
        assert_eq!(handle_event(&mut s, key(KeyCode::Char('+'))), vec![Action::Increment]);
        assert_eq!(handle_event(&mut s, key(KeyCode::Up)), vec![Action::Increment]);
        assert_eq!(handle_event(&mut s, key(KeyCode::Char('-'))), vec![Action::Decrement]);
        assert_eq!(handle_event(&mut s, key(KeyCode::Char('j'))), vec![Action::Decrement]);
        assert_eq!(handle_event(&mut s, key(KeyCode::Char('q'))), vec![Action::Quit]);
        assert_eq!(handle_event(&mut s, key(KeyCode::Esc)), vec![Action::Quit]);
        assert!(handle_event(&mut s, key(KeyCode::Char('x'))).is_empty());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut s = state();
        let event = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        run(&mut s, event);
        assert!(s.should_quit);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut s = state();
        let release = KeyEvent {
            code: KeyCode::Char('+'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(handle_event(&mut s, AppEvent::Terminal(CEvent::Key(release))).is_empty());
    }

    #[test]
    fn test_key_repeat_counts_as_press() {
        let mut s = state();
        let repeat = KeyEvent {
            code: KeyCode::Char('+'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        assert_eq!(
            handle_event(&mut s, AppEvent::Terminal(CEvent::Key(repeat))),
            vec![Action::Increment]
        );
    }

    #[test]
    fn test_input_error_stops_the_loop() {
        let mut s = state();
        run(&mut s, AppEvent::InputError("stdin closed".to_string()));
        assert!(s.should_quit);
        assert_eq!(s.fatal_error.as_deref(), Some("stdin closed"));

        // Ticks that arrive afterwards leave the failure in place
        run(&mut s, AppEvent::Tick);
        assert!(s.should_quit);
        assert!(s.fatal_error.is_some());
    }

    #[test]
    fn test_scenario_three_up_one_down() {
        let mut s = state();
        for _ in 0..3 {
            run(&mut s, key(KeyCode::Char('+')));
        }
        run(&mut s, key(KeyCode::Char('-')));
        assert_eq!(s.counter.value(), 2);
    }

    #[test]
    fn test_enter_activates_focused_control() {
        let mut s = state();
        run(&mut s, key(KeyCode::Enter));
        assert_eq!(s.counter.value(), 1);

        run(&mut s, key(KeyCode::Tab));
        assert_eq!(s.focus, Control::Decrement);
        run(&mut s, key(KeyCode::Char(' ')));
        run(&mut s, key(KeyCode::Enter));
        assert_eq!(s.counter.value(), -1);
    }

    #[test]
    fn test_click_on_controls() {
        let mut s = state();
        let panel = layout::counter_layout(layout::compute_layout(s.viewport, true).counter);

        run(&mut s, click(panel.minus.x, panel.minus.y));
        assert_eq!(s.counter.value(), -1);
        assert_eq!(s.focus, Control::Decrement);

        run(&mut s, click(panel.plus.x + 1, panel.plus.y));
        run(&mut s, click(panel.plus.x + 1, panel.plus.y));
        assert_eq!(s.counter.value(), 1);
        assert_eq!(s.focus, Control::Increment);
    }

    #[test]
    fn test_click_outside_controls_ignored() {
        let mut s = state();
        assert!(handle_event(&mut s, click(0, 0)).is_empty());
        assert_eq!(s.counter.value(), 0);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut s = state();
        s.dirty = false;
        handle_event(&mut s, AppEvent::Terminal(CEvent::Resize(120, 40)));
        assert_eq!(s.viewport, Rect::new(0, 0, 120, 40));
        assert!(s.dirty);
    }

    #[test]
    fn test_flash_expires_after_ticks() {
        let mut s = state();
        run(&mut s, key(KeyCode::Char('+')));
        assert!(s.is_flashing(Control::Increment));
        for _ in 0..FLASH_TICKS - 1 {
            handle_event(&mut s, AppEvent::Tick);
            assert!(s.flash.is_some());
        }
        handle_event(&mut s, AppEvent::Tick);
        assert!(s.flash.is_none());

        s.dirty = false;
        handle_event(&mut s, AppEvent::Tick);
        assert!(!s.dirty);
    }
}
