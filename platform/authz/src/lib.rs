//! Authorization primitives for the back-office admin surface.
//!
//! A [`PermissionMap`] is static per-resource configuration: each staff role
//! maps to either a wildcard grant or an explicit action set. Resolution is
//! pure and fail-closed: whatever cannot be resolved to an explicit grant
//! denies.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel used by the serialized form of [`Grant::All`].
pub const ALL_SENTINEL: &str = "__all__";

/// Staff roles. A closed set: anything else cannot hold permissions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Operator,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Operator => "operator",
        }
    }
}

/// A named capability checked by the admin surface.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Add,
    Change,
    Delete,
    Module,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Add => "add",
            Action::Change => "change",
            Action::Delete => "delete",
            Action::Module => "module",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("unknown action `{0}`")]
pub struct UnknownAction(String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "view" => Ok(Action::View),
            "add" => Ok(Action::Add),
            "change" => Ok(Action::Change),
            "delete" => Ok(Action::Delete),
            "module" => Ok(Action::Module),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// What a role is granted on a resource: everything, or an explicit set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Grant {
    All,
    Actions(BTreeSet<Action>),
}

impl Grant {
    pub fn actions<I>(actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        Grant::Actions(actions.into_iter().collect())
    }

    pub fn permits(&self, action: Action) -> bool {
        match self {
            Grant::All => true,
            Grant::Actions(set) => set.contains(&action),
        }
    }
}

impl Serialize for Grant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Grant::All => serializer.serialize_str(ALL_SENTINEL),
            Grant::Actions(set) => set.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Grant {
    /// Accepts the wildcard sentinel or a list of action names. Unknown
    /// sentinels become an empty action set and unknown action names are
    /// dropped: a malformed grant denies, it never errors and never grants.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Sentinel(String),
            Names(Vec<String>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Sentinel(s) if s == ALL_SENTINEL => Ok(Grant::All),
            Raw::Sentinel(_) => Ok(Grant::Actions(BTreeSet::new())),
            Raw::Names(names) => Ok(Grant::Actions(
                names.iter().filter_map(|name| name.parse().ok()).collect(),
            )),
        }
    }
}

/// The requesting actor. `Anonymous` denies everywhere; roles that a real
/// account cannot hold are unrepresentable.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Principal {
    Anonymous,
    User { role: Role, is_superuser: bool },
}

impl Principal {
    pub fn user(role: Role) -> Self {
        Principal::User {
            role,
            is_superuser: false,
        }
    }

    pub fn superuser(role: Role) -> Self {
        Principal::User {
            role,
            is_superuser: true,
        }
    }
}

/// Per-resource mapping from role to grant. Built once as static
/// configuration and consulted on every authorization decision.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PermissionMap {
    grants: BTreeMap<Role, Grant>,
}

impl PermissionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(mut self, role: Role, grant: Grant) -> Self {
        self.grants.insert(role, grant);
        self
    }

    pub fn grant_all(self, role: Role) -> Self {
        self.grant(role, Grant::All)
    }

    pub fn grant_actions<I>(self, role: Role, actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        self.grant(role, Grant::actions(actions))
    }

    pub fn grant_for(&self, role: Role) -> Option<&Grant> {
        self.grants.get(&role)
    }

    /// The core resolution rule: superusers pass unconditionally, anonymous
    /// principals never pass, otherwise the role's grant decides.
    pub fn is_allowed(&self, principal: &Principal, action: Action) -> bool {
        match principal {
            Principal::Anonymous => false,
            Principal::User {
                is_superuser: true, ..
            } => true,
            Principal::User { role, .. } => self
                .grants
                .get(role)
                .map(|grant| grant.permits(action))
                .unwrap_or(false),
        }
    }

    /// True if any one of the candidate actions would be allowed.
    pub fn is_allowed_any(&self, principal: &Principal, actions: &[Action]) -> bool {
        actions
            .iter()
            .any(|action| self.is_allowed(principal, *action))
    }

    pub fn can_view(&self, principal: &Principal) -> bool {
        self.is_allowed(principal, Action::View)
    }

    pub fn can_add(&self, principal: &Principal) -> bool {
        self.is_allowed(principal, Action::Add)
    }

    pub fn can_change(&self, principal: &Principal) -> bool {
        self.is_allowed(principal, Action::Change)
    }

    pub fn can_delete(&self, principal: &Principal) -> bool {
        self.is_allowed(principal, Action::Delete)
    }

    pub fn can_module(&self, principal: &Principal) -> bool {
        self.is_allowed(principal, Action::Module)
    }

    pub fn can_view_or_change(&self, principal: &Principal) -> bool {
        self.is_allowed_any(principal, &[Action::View, Action::Change])
    }
}

impl FromIterator<(Role, Grant)> for PermissionMap {
    fn from_iter<I: IntoIterator<Item = (Role, Grant)>>(iter: I) -> Self {
        Self {
            grants: iter.into_iter().collect(),
        }
    }
}
