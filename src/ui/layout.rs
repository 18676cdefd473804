use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;

pub const PANEL_WIDTH: u16 = 28;
pub const PANEL_HEIGHT: u16 = 7;

pub struct AppLayout {
    pub greeting: Option<Rect>,
    pub counter: Rect,
    pub status_bar: Rect,
}

/// Rows inside the counter panel. Shared by rendering and mouse hit-testing.
pub struct CounterLayout {
    pub heading: Rect,
    pub value: Rect,
    pub plus: Rect,
    pub minus: Rect,
}

pub fn compute_layout(area: Rect, with_greeting: bool) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    let (greeting, body) = if with_greeting {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Greeting
                Constraint::Min(0),    // Counter panel
            ])
            .split(content);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, content)
    };

    AppLayout {
        greeting,
        counter: centered(body, PANEL_WIDTH, PANEL_HEIGHT),
        status_bar,
    }
}

pub fn counter_layout(panel: Rect) -> CounterLayout {
    let inner = Block::bordered().inner(panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(1),
            Constraint::Length(1), // Value
            Constraint::Length(1),
            Constraint::Length(1), // Controls
        ])
        .split(inner);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(5), // [ + ]
            Constraint::Length(3),
            Constraint::Length(5), // [ - ]
            Constraint::Fill(1),
        ])
        .split(rows[4]);

    CounterLayout {
        heading: rows[0],
        value: rows[2],
        plus: buttons[1],
        minus: buttons[3],
    }
}

/// Center a `width`×`height` box in `area`, shrinking it if the area is smaller.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
