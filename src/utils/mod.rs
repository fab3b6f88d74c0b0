//! Utility modules

pub mod error;
pub mod identity;
