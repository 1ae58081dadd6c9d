//! Provides input/output functionality for genealogical data.
//!
//! Reading is built around the [`traits::GenealogyFile`] trait with a tolerant
//! GEDCOM implementation in [`gedcom`]. Reports leave the library as ordered rows
//! handed to a [`report::TabularSink`], with CSV and in-memory sinks provided.

pub mod gedcom;
pub mod report;
pub mod tags;
pub mod traits;
