//! Error types for the clipshare client
//!
//! This module defines error types for each layer:
//! - `ShareApiError`: share backend HTTP errors
//! - `ClipboardError`: clipboard adapter errors
//! - `DraftError`: errors preparing a draft (file selection)
//! - `AppError`: application layer errors surfaced to the terminal session

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::ShareId;

/// Share backend API errors
#[derive(Debug, Error)]
pub enum ShareApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Clipboard errors
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("No clipboard tool available")]
    Unavailable,

    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to stage clipboard text: {0}")]
    Staging(#[source] std::io::Error),

    #[error("{program} exited with {status}")]
    Failed { program: String, status: String },
}

/// Draft preparation errors
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not an image: {0}")]
    NotAnImage(PathBuf),

    #[error("File is empty: {0}")]
    Empty(PathBuf),
}

/// Application layer errors - reported back to the terminal session
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Share API error: {0}")]
    Api(#[from] ShareApiError),

    #[error("Draft error: {0}")]
    Draft(#[from] DraftError),

    #[error("No entry [{0}] in the feed")]
    NoSuchEntry(usize),

    #[error("No share #{0} in the feed")]
    NoSuchShare(ShareId),

    #[error("Share #{0} is not an image")]
    NotAnImage(ShareId),

    #[error("Invalid image payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse error for terminal input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),

    #[error("Invalid index: {0}")]
    InvalidIndex(String),
}
