//! Utility functions core

pub mod dateformat;
pub mod duration;
pub mod humanize;
pub mod mask;
pub mod tokens;

pub use dateformat::*;
pub use duration::*;
pub use humanize::*;
pub use mask::*;
pub use tokens::{CharClass, DateUnit, TOKENS, TokenSpec, lookup};
