//! Role records and the ordered in-memory role store.

use serde::{Deserialize, Serialize};

/// Identifier for a role, unique within a list and stable across reorders.
pub type RoleId = u32;

/// Fallback gradient stop used when adding a role to an empty list.
pub const DEFAULT_ROLE_COLOR: &str = "#2ecc71";

/// Suggested picker palette, matching the stock role colors of the chat
/// client being previewed.
pub const SUGGESTED_COLORS: [&str; 20] = [
    "#1abc9c", "#2ecc71", "#3498db", "#9b59b6", "#e91e63", "#f1c40f", "#e67e22", "#e74d3c",
    "#95a5a6", "#607d8b", "#11806a", "#1f8b4c", "#206694", "#71368a", "#ad1457", "#c27c0e",
    "#a84300", "#992d22", "#979c9f", "#546e7a",
];

/// Which of a role's two gradient stops a picker interaction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    One,
    Two,
}

/// A named role with a two-stop gradient color.
///
/// The color fields are raw strings and are never validated here; whatever
/// the user typed flows through to the rendering layer unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub color_one: String,
    pub color_two: String,
}

impl Role {
    pub fn color(&self, slot: ColorSlot) -> &str {
        match slot {
            ColorSlot::One => &self.color_one,
            ColorSlot::Two => &self.color_two,
        }
    }
}

/// Partial update applied to a role; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePatch {
    pub name: Option<String>,
    pub color_one: Option<String>,
    pub color_two: Option<String>,
}

impl RolePatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn color(slot: ColorSlot, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match slot {
            ColorSlot::One => Self {
                color_one: value,
                ..Self::default()
            },
            ColorSlot::Two => Self {
                color_two: value,
                ..Self::default()
            },
        }
    }
}

/// Ordered, in-memory role collection. The sole owner of role state; the
/// editor and the previews only ever see snapshots of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleList {
    roles: Vec<Role>,
}

impl RoleList {
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    /// The startup list shown before any editing.
    pub fn starter() -> Self {
        Self::new(vec![
            Role {
                id: 1,
                name: "Example 1".to_string(),
                color_one: "#4cadd0".to_string(),
                color_two: "#b2f9ff".to_string(),
            },
            Role {
                id: 2,
                name: "Example 2".to_string(),
                color_one: "#9e6bff".to_string(),
                color_two: "#9fc1ff".to_string(),
            },
        ])
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn get(&self, id: RoleId) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    pub fn position(&self, id: RoleId) -> Option<usize> {
        self.roles.iter().position(|r| r.id == id)
    }

    /// Append a new role.
    ///
    /// The id is one past the largest id ever present in the current list,
    /// the name numbers the role after the new length, and both stops copy
    /// the previous last role's first stop (or [`DEFAULT_ROLE_COLOR`]).
    pub fn add(&mut self) -> &Role {
        let id = self.roles.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let color = self
            .roles
            .last()
            .map(|r| r.color_one.clone())
            .unwrap_or_else(|| DEFAULT_ROLE_COLOR.to_string());
        let role = Role {
            id,
            name: format!("Role {}", self.roles.len() + 1),
            color_one: color.clone(),
            color_two: color,
        };
        tracing::debug!(id, "added role");
        self.roles.push(role);
        self.roles.last().expect("list cannot be empty after push")
    }

    /// Remove the role matching `id`. Unknown ids are a silent no-op.
    ///
    /// The interactive confirmation gate lives in the UI layer; by the time
    /// this runs the deletion has been confirmed.
    pub fn delete(&mut self, id: RoleId) {
        if let Some(idx) = self.position(id) {
            tracing::debug!(id, "deleted role");
            self.roles.remove(idx);
        }
    }

    /// Merge the `Some` fields of `patch` into the role matching `id`.
    /// Unknown ids are a silent no-op; nothing is validated.
    pub fn update(&mut self, id: RoleId, patch: RolePatch) {
        let Some(role) = self.roles.iter_mut().find(|r| r.id == id) else {
            return;
        };
        if let Some(name) = patch.name {
            role.name = name;
        }
        if let Some(color) = patch.color_one {
            role.color_one = color;
        }
        if let Some(color) = patch.color_two {
            role.color_two = color;
        }
    }

    /// Move the element at `from` so it ends up at `to`, shifting the
    /// elements in between. Out-of-bounds indices are a silent no-op even
    /// though the editor only produces indices from the rendered list.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from >= self.roles.len() || to >= self.roles.len() || from == to {
            return;
        }
        let role = self.roles.remove(from);
        self.roles.insert(to, role);
    }
}
