mod directory;
mod footer;
mod log;
mod root;

use super::*;

pub use root::root as render;
