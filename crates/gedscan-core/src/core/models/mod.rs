//! # Core Models Module
//!
//! Plain data types for the genealogical record graph read from a GEDCOM source.
//!
//! ## Key Components
//!
//! - [`individual`] - A person record with its raw name, birth date and derived parentage
//! - [`family`] - A family record linking partners and an ordered list of children
//! - [`tree`] - The container owning both record kinds, with identifier lookups
//! - [`ids`] - Arena keys for individuals and families
//!
//! Records never hold references to one another; every relation is a
//! cross-reference identifier looked up through [`tree::FamilyTree`].
//!
//! ```ignore
//! use gedscan::core::models::tree::FamilyTree;
//!
//! let mut tree = FamilyTree::new();
//! let key = tree.start_individual("@I1@");
//! tree.individual_mut(key).unwrap().name = "John /Smith/".to_string();
//! assert_eq!(tree.individual(key).unwrap().surname(), "Smith");
//! ```

pub mod family;
pub mod ids;
pub mod individual;
pub mod tree;
