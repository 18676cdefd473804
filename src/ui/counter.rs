use crate::app::counter::Control;
use crate::app::state::AppState;
use crate::ui::layout::counter_layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::bordered()
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    frame.render_widget(block, area);

    let panel = counter_layout(area);

    let heading = Paragraph::new("Counter")
        .style(Theme::heading())
        .alignment(Alignment::Center);
    frame.render_widget(heading, panel.heading);

    let value = Paragraph::new(state.counter.value().to_string())
        .style(Theme::value())
        .alignment(Alignment::Center);
    frame.render_widget(value, panel.value);

    render_button(frame, panel.plus, state, Control::Increment);
    render_button(frame, panel.minus, state, Control::Decrement);
}

fn render_button(frame: &mut Frame, area: Rect, state: &AppState, control: Control) {
    let style = if state.is_flashing(control) {
        Theme::button_flash()
    } else if state.focus == control {
        Theme::button_focused()
    } else {
        Theme::button()
    };
    frame.render_widget(Paragraph::new(control.label()).style(style), area);
}
