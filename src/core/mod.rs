//! Core inspection logic for bearer credentials.
//!
//! This module contains the domain logic separated from CLI concerns.
//! Everything here is pure: no I/O, no clock access, no mutable state,
//! so all of it is testable without the CLI layer.

pub mod inspector;
pub mod redact;
