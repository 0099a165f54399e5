//! Terminal presentation layer.

pub mod scene;
