//! Statistics summary of an organisation export.
//!
//! Serializes as
//!
//! ```json
//! {
//!   "units": {"names": ["A"], "A": {"collaborations": 1, "users": 2}},
//!   "collaborations": {"names": ["C1"], "C1": {"users": 2, "groups": 0, "admins": 1}},
//!   "users": 2
//! }
//! ```

use crate::document::OrgExport;
use crate::errors::OrgResult;
use crate::users::UserDirectory;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

/// Counts for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitCounts {
    /// Collaborations belonging to the unit
    pub collaborations: usize,
    /// Distinct members across those collaborations
    pub users: usize,
}

/// Counts for one collaboration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollaborationCounts {
    /// Memberships listed for the collaboration
    pub users: usize,
    /// Groups inside the collaboration
    pub groups: usize,
    /// Users administering the collaboration
    pub admins: usize,
}

/// Unit names followed by one entry per unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitStats {
    /// Unit names in export order
    pub names: Vec<String>,
    /// Counts keyed by unit name
    #[serde(flatten)]
    pub per_unit: IndexMap<String, UnitCounts>,
}

/// Collaboration names followed by one entry per collaboration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollaborationStats {
    /// Collaboration names in export order
    pub names: Vec<String>,
    /// Counts keyed by collaboration name
    #[serde(flatten)]
    pub per_collaboration: IndexMap<String, CollaborationCounts>,
}

/// Summary of an export, for dashboards next to the rendered graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgStats {
    /// Per-unit counts
    pub units: UnitStats,
    /// Per-collaboration counts
    pub collaborations: CollaborationStats,
    /// Distinct members across all collaborations
    pub users: usize,
}

impl OrgStats {
    /// Compute the summary of an export.
    ///
    /// `users` must be the directory aggregated from the same export; it
    /// supplies the admin counts.
    pub fn from_export(export: &OrgExport, users: &UserDirectory) -> Self {
        let per_unit = export
            .units
            .iter()
            .map(|unit| {
                let collaborations: Vec<_> = export
                    .collaborations
                    .iter()
                    .filter(|coll| coll.units.contains(unit))
                    .collect();
                let members: HashSet<&str> = collaborations
                    .iter()
                    .flat_map(|coll| coll.member_uids())
                    .collect();
                let counts = UnitCounts {
                    collaborations: collaborations.len(),
                    users: members.len(),
                };
                (unit.clone(), counts)
            })
            .collect();

        let per_collaboration = export
            .collaborations
            .iter()
            .map(|coll| {
                let counts = CollaborationCounts {
                    users: coll.member_uids().count(),
                    groups: coll.groups.len(),
                    admins: users
                        .iter()
                        .filter(|(_, record)| record.admin_of.contains(&coll.name))
                        .count(),
                };
                (coll.name.clone(), counts)
            })
            .collect();

        let members: HashSet<&str> = export
            .collaborations
            .iter()
            .flat_map(|coll| coll.member_uids())
            .collect();

        Self {
            units: UnitStats {
                names: export.units.clone(),
                per_unit,
            },
            collaborations: CollaborationStats {
                names: export.collaborations.iter().map(|c| c.name.clone()).collect(),
                per_collaboration,
            },
            users: members.len(),
        }
    }

    /// Pretty-printed JSON, keys in the order shown in the module docs.
    ///
    /// # Errors
    ///
    /// Returns [`crate::OrgError::Parse`] if serialization fails.
    pub fn to_json_pretty(&self) -> OrgResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
