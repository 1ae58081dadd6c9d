//! # Engine Module
//!
//! The stateful layer between the record model and the reports.
//!
//! - [`resolver`] - Derives parentage and sibling counts from family records
//! - [`config`] - Run configuration and its builder
//! - [`progress`] - Phase events for front ends that want to display progress
//! - [`error`] - The error type returned by workflows

pub mod config;
pub mod error;
pub mod progress;
pub mod resolver;
