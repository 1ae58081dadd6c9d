//! # Workflows Module
//!
//! The public entry points of gedscan. Each workflow walks a parsed and resolved
//! [`FamilyTree`](crate::core::models::tree::FamilyTree) and produces typed rows.
//!
//! - **Full dump** ([`dump`]) - Every individual with parent names and sibling count
//! - **Surname search** ([`search`]) - Individuals of one surname with incomplete parentage
//! - **Report pipeline** ([`report`]) - Read, resolve, report and write in one call

pub mod dump;
pub mod report;
pub mod search;
