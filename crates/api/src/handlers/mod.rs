//! HTTP handlers owned by the API crate

pub mod session;
