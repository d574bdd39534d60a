//! Host access helpers.
//!
//! Provides:
//! - [`dom`] - window, document, head, body and navigator accessors
//! - [`events`] - listener registration and single-shot load completion

pub mod dom;
pub mod events;
