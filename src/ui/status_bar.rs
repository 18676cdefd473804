use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HINTS: &str = "+/- adjust  tab focus  enter press  q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![
        Span::styled(
            " tally ",
            Style::default().fg(Color::Black).bg(Theme::ACCENT_TEAL),
        ),
        Span::styled(format!(" {} ", state.status_line()), Theme::status_bar()),
        Span::styled(
            format!("| {} ", HINTS),
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        ),
    ];

    // Focus indicator, right-aligned
    let focus_name = state.focus.name();
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
