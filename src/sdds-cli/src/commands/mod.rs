//! Command handlers

pub mod configure;
pub mod decode;
pub mod schema;
