//! Pagedown Core
//!
//! This crate provides the document model and error definitions
//! shared by the pagedown parser, renderer and packager.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Block`] - A parsed block-level node
//! - [`StyledRun`] - A span of inline-formatted text
//! - [`BlockKind`], [`RunStyle`] - Tag enums
//! - [`PagedownError`] - Error types

pub mod enums;
pub mod error;
pub mod types;

pub use enums::{BlockKind, RunStyle};
pub use error::{PagedownError, Result};
pub use types::{Block, StyledRun};
