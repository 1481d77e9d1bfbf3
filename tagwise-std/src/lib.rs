//! # tagwise-std
//!
//! Ready-made tags and handlers for the tagwise dispatch mechanism.
//!
//! This crate provides:
//! - **Sequence operations**: [`Sort`], [`Dedup`], [`Reverse`]
//! - **Per-element dispatch**: [`ForEach`]
//! - **I/O operations**: [`Lines`], [`Print`]
//! - **Tuple access**: [`Get`]
//!
//! Every tag here is declared through the same traits user code uses, so a
//! downstream crate can narrow any of them with a more specific handler for
//! its own types.
//!
//! [`Sort`]: algs::Sort
//! [`Dedup`]: algs::Dedup
//! [`Reverse`]: algs::Reverse
//! [`ForEach`]: each::ForEach
//! [`Lines`]: io::Lines
//! [`Print`]: io::Print
//! [`Get`]: tuple::Get

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use tagwise_core;

// Modules
pub mod algs;
pub mod each;
pub mod io;
pub mod tuple;
