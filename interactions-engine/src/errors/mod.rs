//! Error types surfaced by the engine.

mod ledger;
mod transition;

pub use ledger::LedgerError;
pub use transition::TransitionError;
