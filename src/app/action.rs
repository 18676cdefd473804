use crate::app::counter::Control;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increment,
    Decrement,
    Quit,
}

impl From<Control> for Action {
    fn from(control: Control) -> Self {
        match control {
            Control::Increment => Action::Increment,
            Control::Decrement => Action::Decrement,
        }
    }
}
