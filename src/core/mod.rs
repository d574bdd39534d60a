//! The library's operations.
//!
//! This module provides:
//! - [`element`] factories for elements, scripts, stylesheets and pixels
//! - [`tree`] attribute, class and parent/child manipulation
//! - [`query`] query-string reading and rewriting
//! - [`text`] linkification and tag stripping
//! - [`device`] user-agent sniffing
//! - [`Registry`] the export table and namespace mixin

pub mod device;
pub mod element;
pub mod error;
pub mod query;
mod registry;
pub mod text;
pub mod tree;

pub use registry::{Export, Exports, Registry};
