//! User management: account table, verification review and role changes.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use time::{Date, OffsetDateTime};

use crate::mock;
use crate::net::types::UserRole;
use crate::state::listing::matches_search;
use crate::state::moderation::{self, DocumentStatus, UserStatus, count_with_status, impl_moderated};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationDocument {
    pub name: String,
    pub status: DocumentStatus,
    pub submitted_at: Date,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Verification {
    pub id_card: bool,
    pub linkedin: bool,
    pub documents: Vec<VerificationDocument>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccountStats {
    pub projects: u32,
    pub discussions: u32,
    pub connections: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountEventKind {
    Login,
    Project,
    Discussion,
    Report,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountEvent {
    pub kind: AccountEventKind,
    pub description: String,
    pub timestamp: OffsetDateTime,
}

/// One row of the user table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub joined_at: Date,
    pub location: String,
    pub skills: Vec<String>,
    pub verified: bool,
    pub verification: Option<Verification>,
    pub stats: AccountStats,
    pub activity: Vec<AccountEvent>,
}

impl_moderated!(ManagedUser, UserStatus);

impl ManagedUser {
    /// Moderators and admins.
    #[must_use]
    pub fn is_staff(&self) -> bool {
        matches!(self.role, UserRole::Mod | UserRole::Admin)
    }
}

/// Tabs of the user detail modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserDetailTab {
    #[default]
    Profile,
    Verification,
    Activity,
}

impl UserDetailTab {
    pub const ALL: [Self; 3] = [Self::Profile, Self::Verification, Self::Activity];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Verification => "Verification",
            Self::Activity => "Activity",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: String,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    #[must_use]
    pub fn matches(&self, user: &ManagedUser) -> bool {
        matches_search(&self.search, &[&user.name, &user.email])
            && self.role.is_none_or(|r| r == user.role)
            && self.status.is_none_or(|s| s == user.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserManagement {
    pub users: Vec<ManagedUser>,
    pub filter: UserFilter,
    pub selected: Option<String>,
}

impl Default for UserManagement {
    fn default() -> Self {
        Self { users: mock::admin::users(), filter: UserFilter::default(), selected: None }
    }
}

impl UserManagement {
    #[must_use]
    pub fn filtered(&self) -> Vec<ManagedUser> {
        self.users.iter().filter(|u| self.filter.matches(u)).cloned().collect()
    }

    #[must_use]
    pub fn selected_user(&self) -> Option<&ManagedUser> {
        let id = self.selected.as_deref()?;
        self.users.iter().find(|u| u.id == id)
    }

    pub fn update_status(&mut self, id: &str, status: UserStatus) -> bool {
        moderation::update_status(&mut self.users, id, status)
    }

    /// Replace one user's role. Returns whether the user exists.
    pub fn update_role(&mut self, id: &str, role: UserRole) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                log::info!("role of {id} set to {}", role.as_str());
                user.role = role;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn verified_count(&self) -> usize {
        self.users.iter().filter(|u| u.verified).count()
    }

    #[must_use]
    pub fn staff_count(&self) -> usize {
        self.users.iter().filter(|u| u.is_staff()).count()
    }

    #[must_use]
    pub fn banned_count(&self) -> usize {
        count_with_status(&self.users, UserStatus::Banned)
    }
}
