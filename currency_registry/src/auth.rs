//! Role-based authorization check.
//!
//! Built once from configuration and passed by reference to the registry.
//! No global state.

use currency_common::identity::{Identity, Role};
use std::collections::HashMap;

/// Tells whether an identity holds the top-level administrative role.
pub trait AuthorizationCheck {
    /// Returns true if `identity` is the top-level admin.
    fn is_top_level_admin(&self, identity: &Identity) -> bool;
}

/// Identity → role table.
#[derive(Debug, Clone, Default)]
pub struct RoleTable {
    roles: HashMap<Identity, Role>,
}

impl RoleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table whose only entry is the top-level admin.
    pub fn with_admin(admin: Identity) -> Self {
        let mut table = Self::new();
        table.grant(admin, Role::TopLevelAdmin);
        table
    }

    /// Assign a role, returning the role it replaces.
    pub fn grant(&mut self, identity: Identity, role: Role) -> Option<Role> {
        self.roles.insert(identity, role)
    }

    /// Role held by an identity.
    pub fn role_of(&self, identity: &Identity) -> Option<Role> {
        self.roles.get(identity).copied()
    }

    /// Number of identities with a role.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns true if no identity has a role.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl AuthorizationCheck for RoleTable {
    fn is_top_level_admin(&self, identity: &Identity) -> bool {
        self.role_of(identity)
            .is_some_and(|role| role.is_top_level_admin())
    }
}
