//! The counter widget's state.
//!
//! A single signed integer that starts at zero and moves by exactly one per
//! activation. Only [`CounterState::increment`] and
//! [`CounterState::decrement`] can change it.

/// The two controls the counter exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Increment,
    Decrement,
}

impl Control {
    /// The other control. Focus only ever moves between these two.
    pub fn toggled(self) -> Self {
        match self {
            Control::Increment => Control::Decrement,
            Control::Decrement => Control::Increment,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::Increment => "[ + ]",
            Control::Decrement => "[ - ]",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Control::Increment => "PLUS",
            Control::Decrement => "MINUS",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CounterState {
    number: i64,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i64 {
        self.number
    }

    pub fn increment(&mut self) {
        self.number = self.number.wrapping_add(1);
    }

    /// No floor: the value happily goes negative.
    pub fn decrement(&mut self) {
        self.number = self.number.wrapping_sub(1);
    }

    /// Run whichever operation `control` is bound to.
    pub fn activate(&mut self, control: Control) {
        match control {
            Control::Increment => self.increment(),
            Control::Decrement => self.decrement(),
        }
    }
}
