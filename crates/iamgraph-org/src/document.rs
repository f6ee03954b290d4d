//! Serde model of an organisation export.
//!
//! ```json
//! {
//!   "name": "FederFlow",
//!   "short_name": "federflow",
//!   "units": ["Research"],
//!   "collaborations": [{
//!     "name": "C1", "short_name": "c1", "units": ["Research"],
//!     "services": [{"name": "Wiki"}], "groups": [{"name": "ops"}],
//!     "created_by": "u1",
//!     "collaboration_memberships": [
//!       {"user": {"uid": "u1", "username": "alice"}, "role": "admin"}
//!     ]
//!   }]
//! }
//! ```

use crate::errors::{OrgError, OrgResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level fields every export must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "short_name", "units", "collaborations"];

/// The root organisation document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgExport {
    /// Organisation name, used as the root node key
    pub name: String,
    /// Short name, used as the root node label
    pub short_name: String,
    /// Unit names
    pub units: Vec<String>,
    /// Collaborations of the organisation
    pub collaborations: Vec<Collaboration>,
}

impl OrgExport {
    /// Parse an export from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`OrgError::Parse`] for malformed JSON and
    /// [`OrgError::MissingField`] when a required field is absent.
    pub fn from_json_str(source: &str) -> OrgResult<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    /// Convert an already parsed JSON value.
    ///
    /// Required fields are checked before deserializing, so a missing field
    /// is reported by name rather than as a generic shape error.
    ///
    /// # Errors
    ///
    /// Returns [`OrgError::MissingField`] when a required field is absent or
    /// `null`, and [`OrgError::Parse`] when a field has the wrong shape.
    pub fn from_value(value: Value) -> OrgResult<Self> {
        if let Some(field) = REQUIRED_FIELDS
            .iter()
            .find(|field| value.get(**field).map_or(true, Value::is_null))
        {
            return Err(OrgError::MissingField {
                field: (*field).to_string(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// A collaboration and everything it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaboration {
    /// Unique name, used as the node key
    pub name: String,
    /// Short name, used as the node label
    pub short_name: String,
    /// Units the collaboration belongs to
    #[serde(default)]
    pub units: Vec<String>,
    /// Services offered to the collaboration
    #[serde(default)]
    pub services: Vec<Service>,
    /// Groups inside the collaboration
    #[serde(default)]
    pub groups: Vec<Group>,
    /// uid of the user who created the collaboration
    pub created_by: String,
    /// Member list; absent when the export carries no user data
    #[serde(default)]
    pub collaboration_memberships: Option<Vec<Membership>>,
}

impl Collaboration {
    /// Node key of one of this collaboration's groups.
    pub fn group_key(&self, group: &Group) -> String {
        format!("{}_{}", self.name, group.name)
    }

    /// uids of every member, in export order.
    pub fn member_uids(&self) -> impl Iterator<Item = &str> {
        self.collaboration_memberships
            .iter()
            .flatten()
            .map(|membership| membership.user.uid.as_str())
    }
}

/// A service (application) offered to a collaboration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Service name, used as the node key
    pub name: String,
}

/// A group inside a collaboration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group name, unique within its collaboration
    pub name: String,
}

/// Membership of one user in a collaboration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// The member
    pub user: MemberUser,
    /// Role within the collaboration
    pub role: Role,
    /// uid of the user who invited this member
    #[serde(default)]
    pub created_by: Option<String>,
}

/// User identity as it appears in a membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberUser {
    /// Stable user id, used as the node key
    pub uid: String,
    /// Display name
    pub username: String,
}

/// Role of a collaboration member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Collaboration administrator
    Admin,
    /// Regular member
    Member,
}
