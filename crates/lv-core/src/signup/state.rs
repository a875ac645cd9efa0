use serde::{Deserialize, Serialize};

/// Wizard flow state.
///
/// `Step(i)` means step `i` is collecting input; `Complete` is terminal
/// and accepts no further advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardState {
    Step(usize),
    Complete,
}

impl WizardState {
    pub fn is_complete(&self) -> bool {
        matches!(self, WizardState::Complete)
    }

    /// Index of the step currently collecting input, if any.
    pub fn step(&self) -> Option<usize> {
        match self {
            WizardState::Step(i) => Some(*i),
            WizardState::Complete => None,
        }
    }
}
