//! Request extractors and HTTP layers

pub mod cors;
pub mod json;
pub mod panic;
