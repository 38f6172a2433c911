//! Quiz domain: the question bank, random selection, the session state
//! machine, and the per-option display classification.

pub mod bank;
pub mod display;
pub mod question;
pub mod select;
pub mod session;
