//! Store-backed operations behind the HTTP handlers.

pub mod attendance;
pub mod employee;
