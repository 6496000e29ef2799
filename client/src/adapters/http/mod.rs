//! HTTP adapter
//!
//! reqwest implementation of the share store.

pub mod client;

pub use client::HttpShareStore;
