//! Domain entities for the Artifacts domain

pub mod entities;
