//! Widget helper module.

pub mod styling;
