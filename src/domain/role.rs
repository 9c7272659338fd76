//! Role descriptors and the role-implication graph
//!
//! Roles form a small directed implication graph (an admit counts as an
//! attendee and a hacker). The transitive closure is computed once at first
//! use rather than re-derived per request.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Registration roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Hacker,
    Attendee,
    Admit,
}

/// Static description of a role
#[derive(Debug, Clone, Copy)]
pub struct RoleDescriptor {
    pub role: Role,
    /// Whether this role can be chosen on the public registration form
    pub registrable: bool,
    /// Whether an account with this role owns a participant profile
    pub has_profile: bool,
    /// Roles directly implied by holding this one
    pub implies: &'static [Role],
}

/// The role table. Admits are created by organizers, not self-registration.
static ROLE_TABLE: &[RoleDescriptor] = &[
    RoleDescriptor {
        role: Role::Hacker,
        registrable: true,
        has_profile: true,
        implies: &[],
    },
    RoleDescriptor {
        role: Role::Attendee,
        registrable: false,
        has_profile: false,
        implies: &[],
    },
    RoleDescriptor {
        role: Role::Admit,
        registrable: false,
        has_profile: true,
        implies: &[Role::Attendee, Role::Hacker],
    },
];

/// Transitive closure of the implication graph, including the role itself.
static ROLE_CLOSURE: Lazy<HashMap<Role, HashSet<Role>>> = Lazy::new(|| {
    let mut closure = HashMap::new();

    for descriptor in ROLE_TABLE {
        let mut reachable = HashSet::new();
        let mut stack = vec![descriptor.role];

        while let Some(role) = stack.pop() {
            if reachable.insert(role) {
                stack.extend(descriptor_for(role).implies.iter().copied());
            }
        }

        closure.insert(descriptor.role, reachable);
    }

    closure
});

fn descriptor_for(role: Role) -> &'static RoleDescriptor {
    ROLE_TABLE
        .iter()
        .find(|d| d.role == role)
        .expect("every Role variant has a table entry")
}

impl Role {
    pub fn descriptor(self) -> &'static RoleDescriptor {
        descriptor_for(self)
    }

    pub fn is_registrable(self) -> bool {
        self.descriptor().registrable
    }

    pub fn has_profile(self) -> bool {
        self.descriptor().has_profile
    }

    /// Whether holding this role grants `other`, directly or transitively.
    pub fn grants(self, other: Role) -> bool {
        ROLE_CLOSURE
            .get(&self)
            .map(|set| set.contains(&other))
            .unwrap_or(false)
    }
}
