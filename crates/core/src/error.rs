// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Chart errors.
use thiserror::Error;

/// Chart result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Chart errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The chart data doesn't match the 13x13 cells layout.
    #[error("Malformed chart data: {0}")]
    MalformedSaveData(String),
    /// A color string that cannot be parsed.
    #[error("Invalid color '{0}'")]
    InvalidColor(String),
    /// A hand label that cannot be parsed.
    #[error("Invalid hand '{0}'")]
    InvalidHand(String),
    /// An I/O error while reading or writing chart data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
