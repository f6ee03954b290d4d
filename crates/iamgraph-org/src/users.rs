//! Aggregation of user records across collaborations.

use crate::document::{OrgExport, Role};
use indexmap::IndexMap;
use log::{debug, info};

/// Everything known about one user after scanning every collaboration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    /// Username from the first membership that named this user
    pub label: Option<String>,
    /// uid of the inviting user, from the first membership that named one
    pub created_by: Option<String>,
    /// Collaborations this user created
    pub create: Vec<String>,
    /// Collaborations this user administers
    pub admin_of: Vec<String>,
}

impl UserRecord {
    /// Whether the user administers at least one collaboration.
    pub fn is_admin(&self) -> bool {
        !self.admin_of.is_empty()
    }
}

fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|existing| existing == item) {
        list.push(item.to_string());
    }
}

/// User records keyed by uid, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    users: IndexMap<String, UserRecord>,
}

impl UserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan every collaboration of an export.
    ///
    /// Creators are recorded even when they are not members.
    pub fn from_export(export: &OrgExport) -> Self {
        let mut directory = Self::new();

        for collaboration in &export.collaborations {
            directory.record_creator(&collaboration.created_by, &collaboration.name);

            match &collaboration.collaboration_memberships {
                Some(memberships) => {
                    for membership in memberships {
                        directory.record_membership(
                            &membership.user.uid,
                            &membership.user.username,
                            membership.created_by.as_deref(),
                            membership.role,
                            &collaboration.name,
                        );
                    }
                }
                None => info!(
                    "No user info, 'collaboration_memberships' not in {}",
                    collaboration.name
                ),
            }
        }

        debug!("Aggregated {} users", directory.len());
        directory
    }

    /// Note that `uid` created `collaboration`.
    pub fn record_creator(&mut self, uid: &str, collaboration: &str) {
        let record = self.users.entry(uid.to_string()).or_default();
        push_unique(&mut record.create, collaboration);
    }

    /// Note a membership of `uid` in `collaboration`.
    ///
    /// The first label and inviter seen for a user are kept.
    pub fn record_membership(
        &mut self,
        uid: &str,
        username: &str,
        created_by: Option<&str>,
        role: Role,
        collaboration: &str,
    ) {
        let record = self.users.entry(uid.to_string()).or_default();
        if record.label.is_none() {
            record.label = Some(username.to_string());
        }
        if record.created_by.is_none() {
            record.created_by = created_by.map(str::to_string);
        }
        if role == Role::Admin {
            push_unique(&mut record.admin_of, collaboration);
        }
    }

    /// Look up one user.
    pub fn get(&self, uid: &str) -> Option<&UserRecord> {
        self.users.get(uid)
    }

    /// All users in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UserRecord)> {
        self.users.iter().map(|(uid, record)| (uid.as_str(), record))
    }

    /// Number of distinct users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no user was seen.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
