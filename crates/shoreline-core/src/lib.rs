//! Shoreline Core: shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the search
//! context, the data loaders and the client all depend on. It contains no
//! infrastructure code and performs no I/O.

pub mod coastline;
pub mod error;
pub mod rng;
pub mod source;
