//! Utility modules for the static site generator.

pub mod date;
pub mod slug;
pub mod xml;
