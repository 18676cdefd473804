use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn greeting_text(name: &str) -> String {
    format!("Hello, {}!", name)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let paragraph = Paragraph::new(greeting_text(&state.config.greeting.name))
        .style(Theme::greeting())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
