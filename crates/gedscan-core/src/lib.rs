//! # gedscan Core Library
//!
//! A tolerant GEDCOM reader with parentage resolution and two tabular reports:
//! a full dump of every individual, and a surname search listing individuals
//! whose parentage is incomplete.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** The record model (`FamilyTree`, `Individual`,
//!   `Family`) plus GEDCOM reading and report sinks.
//!
//! - **[`engine`]: The Logic Core.** Relationship resolution, run configuration,
//!   progress events and the error type shared by workflows.
//!
//! - **[`workflows`]: The Public API.** Report generators and the end-to-end
//!   pipeline that reads a file, resolves parentage and writes a report.

pub mod core;
pub mod engine;
pub mod workflows;
