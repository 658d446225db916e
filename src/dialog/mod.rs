//! Dialog state machine: step order, retry escalation, and turn handling.

pub mod session;
pub mod step;

pub use session::{Reply, Session, Turn, TurnEffect};
pub use step::DialogStep;
