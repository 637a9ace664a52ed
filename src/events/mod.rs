//! Event handling module.
//!
//! This module contains the handler for terminal events: user input and
//! terminal interactions.

pub mod terminal;
