//! Care roles, the role selector control, and the tab that is shown for the selected roles.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Seeker,
    Giver,
}

impl Role {
    /// Canonical order; also the tab order when both roles are selected.
    pub const ALL: [Role; 2] = [Role::Seeker, Role::Giver];

    pub fn value(self) -> &'static str {
        match self {
            Role::Seeker => "seeker",
            Role::Giver => "giver",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Role::Seeker => "role-seeker",
            Role::Giver => "role-giver",
        }
    }

    pub fn description_key(self) -> &'static str {
        match self {
            Role::Seeker => "role-seeker-description",
            Role::Giver => "role-giver-description",
        }
    }
}

/// Value of the role `<select>`: one role, both, or nothing chosen yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleSelection {
    #[default]
    None,
    Seeker,
    Giver,
    Both,
}

impl RoleSelection {
    /// Options offered by the selector (the empty placeholder is rendered separately).
    pub const OPTIONS: [RoleSelection; 3] = [
        RoleSelection::Seeker,
        RoleSelection::Giver,
        RoleSelection::Both,
    ];

    pub fn value(self) -> &'static str {
        match self {
            RoleSelection::None => "",
            RoleSelection::Seeker => "seeker",
            RoleSelection::Giver => "giver",
            RoleSelection::Both => "both",
        }
    }

    /// Unknown or empty values clear the selection.
    pub fn from_value(value: &str) -> Self {
        match value {
            "seeker" => RoleSelection::Seeker,
            "giver" => RoleSelection::Giver,
            "both" => RoleSelection::Both,
            _ => RoleSelection::None,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            RoleSelection::None => "signup-role-placeholder",
            RoleSelection::Seeker => "role-seeker",
            RoleSelection::Giver => "role-giver",
            RoleSelection::Both => "role-both",
        }
    }

    pub fn roles(self) -> RoleSet {
        let roles = match self {
            RoleSelection::None => Vec::new(),
            RoleSelection::Seeker => vec![Role::Seeker],
            RoleSelection::Giver => vec![Role::Giver],
            RoleSelection::Both => Role::ALL.to_vec(),
        };
        RoleSet { roles }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("role `{}` listed more than once", .0.value())]
pub struct DuplicateRole(pub Role);

/// Zero, one, or both roles. Serialized as a plain array (`["seeker", "giver"]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Role>", into = "Vec<Role>")]
pub struct RoleSet {
    roles: Vec<Role>,
}

impl RoleSet {
    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn first(&self) -> Option<Role> {
        self.roles.first().copied()
    }

    pub fn as_slice(&self) -> &[Role] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// The selector value that produces this set.
    pub fn selection(&self) -> RoleSelection {
        match self.roles.as_slice() {
            [] => RoleSelection::None,
            [Role::Seeker] => RoleSelection::Seeker,
            [Role::Giver] => RoleSelection::Giver,
            _ => RoleSelection::Both,
        }
    }
}

impl TryFrom<Vec<Role>> for RoleSet {
    type Error = DuplicateRole;

    fn try_from(roles: Vec<Role>) -> Result<Self, Self::Error> {
        let mut normalized = Vec::with_capacity(roles.len());
        for role in roles {
            if normalized.contains(&role) {
                return Err(DuplicateRole(role));
            }
            normalized.push(role);
        }
        // Both roles always come back in canonical order.
        normalized.sort_by_key(|role| Role::ALL.iter().position(|r| r == role));
        Ok(Self { roles: normalized })
    }
}

impl From<RoleSet> for Vec<Role> {
    fn from(set: RoleSet) -> Self {
        set.roles
    }
}

/// Role set plus the tab currently shown for it.
///
/// The active tab is always a member of the role set, or `None` when the set is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSelector {
    roles: RoleSet,
    active: Option<Role>,
}

impl RoleSelector {
    pub fn select(&mut self, selection: RoleSelection) {
        self.roles = selection.roles();
        let still_visible = self.active.is_some_and(|role| self.roles.contains(role));
        if !still_visible {
            self.active = self.roles.first();
        }
    }

    /// Switch the visible tab. Roles outside the current set are ignored.
    pub fn activate(&mut self, role: Role) -> bool {
        if self.roles.contains(role) {
            self.active = Some(role);
            true
        } else {
            false
        }
    }

    pub fn roles(&self) -> &RoleSet {
        &self.roles
    }

    pub fn selection(&self) -> RoleSelection {
        self.roles.selection()
    }

    pub fn active(&self) -> Option<Role> {
        self.active
    }

    pub fn tabs(&self) -> &[Role] {
        self.roles.as_slice()
    }
}
