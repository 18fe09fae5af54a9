//! Department domain model.
//!
//! # Responsibility
//! - Define the named grouping record and its membership list.
//! - Keep membership helpers idempotent so repository moves stay simple.
//!
//! # Invariants
//! - `team` preserves insertion order and contains no duplicate ids.
//! - Serialized documents carry member ids (`team_ids`), never employee
//!   bodies; resolution happens at repository construction.

use crate::model::employee::EmployeeId;
use serde::{Deserialize, Serialize};

/// Named grouping of employee records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique name, case-sensitive exact match.
    pub name: String,
    /// Member employee ids in insertion order.
    #[serde(rename = "team_ids")]
    pub team: Vec<EmployeeId>,
}

impl Department {
    /// Creates an empty department.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: Vec::new(),
        }
    }

    /// Adds one member id. Re-adding a present member is a no-op.
    pub fn add_member(&mut self, id: EmployeeId) {
        if !self.team.contains(&id) {
            self.team.push(id);
        }
    }

    /// Removes one member id. Removing an absent member is a no-op.
    pub fn remove_member(&mut self, id: EmployeeId) {
        self.team.retain(|member| *member != id);
    }

    /// Returns whether the id is currently a member.
    pub fn has_member(&self, id: EmployeeId) -> bool {
        self.team.contains(&id)
    }
}
