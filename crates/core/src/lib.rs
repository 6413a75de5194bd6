//! Core data layer for the Shelfware library viewer
//!
//! This crate contains:
//! - Canonical game and dashboard models plus the wire shapes they decode from
//! - Normalization of mixed-convention payloads into canonical records
//! - Library statistics, badge progress, and playtime formatting
//! - Steam ID validation
//! - Error types

pub mod error;
pub mod format;
pub mod models;
pub mod normalize;
pub mod stats;
pub mod validate;

pub use error::*;
pub use format::*;
pub use models::*;
pub use normalize::*;
pub use stats::*;
pub use validate::*;
