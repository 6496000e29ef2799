//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing shares and drafts
//! - `ports`: Trait definitions for the backend, clipboard and view

pub mod entities;
pub mod ports;
