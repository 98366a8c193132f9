// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rendering errors.
use thiserror::Error;

/// Rendering result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Rendering errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested image size is too small for the minimum cell size.
    #[error("Image size {size}px gives {cell}px cells, minimum is {min}px: use a larger image")]
    Layout {
        /// The requested size.
        size: u32,
        /// The cell size for the requested size.
        cell: i64,
        /// The minimum cell size.
        min: u32,
    },
    /// A font that cannot be loaded.
    #[error("Invalid font: {0}")]
    Font(String),
    /// An I/O error writing the image.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// An image encoding error.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
