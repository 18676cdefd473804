use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The terminal input stream failed or closed; the app cannot take input anymore
    InputError(String),

    /// Tick for UI refresh
    Tick,
}
