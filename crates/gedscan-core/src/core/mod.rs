//! # Core Module
//!
//! The stateless foundation of gedscan: the genealogical record model and the
//! readers and writers that move it in and out of the library.
//!
//! ## Architecture
//!
//! - **Record Model** ([`models`]) - Individuals, families, and the tree that owns them
//! - **File I/O** ([`io`]) - Tolerant GEDCOM reading and tabular report sinks
//!
//! Nothing in this module resolves relationships or decides what a report
//! contains; that belongs to [`crate::engine`] and [`crate::workflows`].

pub mod io;
pub mod models;
