//! Role management over a fixed permission catalog.
//!
//! Roles are labels with a list of permission ids. Nothing in the app checks
//! them; admin access is decided by `UserRole::Admin` alone.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use time::{Date, OffsetDateTime};

use super::{EditTarget, next_id};
use crate::mock;
use crate::state::listing::{matches_search, toggle_selection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionCategory {
    Users,
    Projects,
    Content,
    System,
}

impl PermissionCategory {
    pub const ALL: [Self; 4] = [Self::Users, Self::Projects, Self::Content, Self::System];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Projects => "Projects",
            Self::Content => "Content",
            Self::System => "System",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permission {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: PermissionCategory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
    pub users: u32,
    pub created_at: Date,
    pub updated_at: Date,
}

/// Fields of the create/edit role modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleDraft {
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

impl RoleDraft {
    #[must_use]
    pub fn from_role(role: &Role) -> Self {
        Self { name: role.name.clone(), description: role.description.clone(), permissions: role.permissions.clone() }
    }

    pub fn toggle_permission(&mut self, id: &str) {
        toggle_selection(&mut self.permissions, id);
    }

    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.permissions.iter().any(|p| p == id)
    }

    /// # Errors
    ///
    /// Returns a message when the name is blank.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Role name is required");
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleManagement {
    pub permissions: Vec<Permission>,
    pub roles: Vec<Role>,
    pub search: String,
    pub modal: Option<EditTarget>,
}

impl Default for RoleManagement {
    fn default() -> Self {
        Self { permissions: mock::admin::permissions(), roles: mock::admin::roles(), search: String::new(), modal: None }
    }
}

impl RoleManagement {
    #[must_use]
    pub fn filtered(&self) -> Vec<Role> {
        self.roles.iter().filter(|r| matches_search(&self.search, &[&r.name, &r.description])).cloned().collect()
    }

    /// Permissions grouped by category, in catalog order. Empty groups are skipped.
    #[must_use]
    pub fn grouped_permissions(&self) -> Vec<(PermissionCategory, Vec<Permission>)> {
        PermissionCategory::ALL
            .into_iter()
            .map(|cat| (cat, self.permissions.iter().filter(|p| p.category == cat).cloned().collect::<Vec<_>>()))
            .filter(|(_, perms)| !perms.is_empty())
            .collect()
    }

    /// Display name for a permission id, falling back to the id itself.
    #[must_use]
    pub fn permission_name<'a>(&self, id: &'a str) -> &'a str {
        self.permissions.iter().find(|p| p.id == id).map_or(id, |p| p.name)
    }

    #[must_use]
    pub fn role(&self, id: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    /// Draft for the open modal: the edited role's values, or blank.
    #[must_use]
    pub fn modal_draft(&self) -> RoleDraft {
        match &self.modal {
            Some(EditTarget::Edit(id)) => self.role(id).map(RoleDraft::from_role).unwrap_or_default(),
            _ => RoleDraft::default(),
        }
    }

    /// Update the role `existing` names, or append a new role with no users.
    ///
    /// # Errors
    ///
    /// Returns the validation message, or `"Role not found"` for an unknown id.
    pub fn save(&mut self, existing: Option<&str>, draft: &RoleDraft) -> Result<String, &'static str> {
        draft.validate()?;
        let today = OffsetDateTime::now_utc().date();

        if let Some(id) = existing {
            let role = self.roles.iter_mut().find(|r| r.id == id).ok_or("Role not found")?;
            role.name = draft.name.trim().to_owned();
            role.description = draft.description.trim().to_owned();
            role.permissions.clone_from(&draft.permissions);
            role.updated_at = today;
            log::info!("updated role {id}");
            return Ok(id.to_owned());
        }

        let id = next_id(self.roles.iter().map(|r| r.id.as_str()));
        self.roles.push(Role {
            id: id.clone(),
            name: draft.name.trim().to_owned(),
            description: draft.description.trim().to_owned(),
            permissions: draft.permissions.clone(),
            users: 0,
            created_at: today,
            updated_at: today,
        });
        log::info!("created role {id}");
        Ok(id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.roles.len();
        self.roles.retain(|r| r.id != id);
        self.roles.len() != before
    }
}
