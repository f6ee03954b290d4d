//! iamgraph organisation front end
//!
//! Turns an organisation export (units, collaborations, services, groups and
//! memberships) into an [`iamgraph::OrgGraph`].
//!
//! This crate provides:
//!
//! - **Document types**: serde model of the export, with up-front checks for required fields
//! - **User aggregation**: one record per user across all collaborations
//! - **OrgGraphBuilder**: organisation, units, collaborations, then users
//! - **Statistics**: per-unit and per-collaboration counts
//!
//! # Example
//!
//! ```rust
//! use iamgraph_org::{OrgExport, OrgGraphBuilder};
//!
//! let export = OrgExport::from_json_str(r#"{
//!     "name": "FederFlow", "short_name": "federflow", "units": ["A"],
//!     "collaborations": [{"name": "C1", "short_name": "c1", "units": ["A"],
//!                         "services": [], "groups": [], "created_by": "u1"}]
//! }"#).unwrap();
//!
//! let graph = OrgGraphBuilder::new(&export).build();
//! assert!(graph.has_edge("A", "C1"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod builder;
pub mod document;
pub mod errors;
pub mod stats;
pub mod users;


// Re-export commonly used types
pub use builder::{build_annotated, OrgGraphBuilder};
pub use document::{Collaboration, Group, MemberUser, Membership, OrgExport, Role, Service};
pub use errors::{OrgError, OrgResult};
pub use stats::OrgStats;
pub use users::{UserDirectory, UserRecord};
