//! Contact directory domain module.
//!
//! This module contains the core domain types for the directory, including:
//! - The `Contact` record accepted into the directory
//! - Field definitions and commit-time validation rules

mod contact;
mod validation;

pub use contact::Contact;
pub use validation::{validate, Field};
