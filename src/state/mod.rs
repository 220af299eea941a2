//! State Management
//!
//! Process-wide session state shared by every view.

pub mod session;

pub use session::*;
