mod counter;
mod greeting;
pub mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.show_greeting());

    if let Some(greeting_area) = app_layout.greeting {
        greeting::render(frame, greeting_area, state);
    }
    counter::render(frame, app_layout.counter, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
