//! Wizard step catalog and navigation state.

mod catalog;
mod progress;
mod state;

pub use catalog::Step;
pub use progress::ProgressBand;
pub use state::WizardState;
