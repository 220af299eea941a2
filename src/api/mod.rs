//! Identity Provider API
//!
//! Client for the external auth service. No other backend exists; every
//! remote call in this app goes through here.

pub mod auth;

pub use auth::*;
