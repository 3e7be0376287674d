//! Domain logic independent of any infrastructure
//!
//! - [`tagline`] - prompt construction and response parsing
//! - [`editor`] - editor snapshot primitives

pub mod editor;
pub mod tagline;
