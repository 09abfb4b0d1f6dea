//! Data models for the MovieLab client.
//!
//! These models match the server's JSON wire format exactly, field widths
//! included.

mod movie;
mod person;

pub use movie::*;
pub use person::*;
