//! Moderation status labels for back-office records.
//!
//! DESIGN
//! ======
//! Each entity kind gets its own status enum so a content row can never carry
//! a course status. Assignment is unconditional: any status may replace any
//! other, and no history is kept.

#[cfg(test)]
#[path = "moderation_test.rs"]
mod moderation_test;

/// A `<select>` value that names no status of the expected kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} status: {value}")]
pub struct UnknownStatus {
    pub kind: &'static str,
    pub value: String,
}

/// A closed set of values that render as `<select>` options and badges.
pub trait Labeled: Copy + PartialEq + Send + Sync + 'static {
    const VALUES: &'static [Self];

    fn value(self) -> &'static str;
    fn label(self) -> &'static str;

    /// Inverse of `value`.
    fn from_value(value: &str) -> Option<Self> {
        Self::VALUES.iter().copied().find(|v| v.value() == value)
    }
}

impl Labeled for crate::net::types::UserRole {
    const VALUES: &'static [Self] = &Self::ALL;

    fn value(self) -> &'static str {
        self.as_str()
    }

    fn label(self) -> &'static str {
        Self::label(self)
    }
}

macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $str:literal, $label:literal;)+ }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }

            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl $crate::state::moderation::Labeled for $name {
            const VALUES: &'static [Self] = Self::ALL;

            fn value(self) -> &'static str {
                self.as_str()
            }

            fn label(self) -> &'static str {
                Self::label(self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::state::moderation::UnknownStatus;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::state::moderation::UnknownStatus { kind: $kind, value: s.to_owned() }),
                }
            }
        }
    };
}

status_enum!(
    /// Posts, comments and discussions.
    ContentStatus, "content" {
        Active => "active", "Active";
        Flagged => "flagged", "Flagged";
        Removed => "removed", "Removed";
        Locked => "locked", "Locked";
    }
);

status_enum!(
    ProjectStatus, "project" {
        Active => "active", "Active";
        Pending => "pending", "Pending";
        Archived => "archived", "Archived";
        Reported => "reported", "Reported";
    }
);

status_enum!(
    CourseStatus, "course" {
        Active => "active", "Active";
        Pending => "pending", "Pending";
        Archived => "archived", "Archived";
    }
);

status_enum!(
    /// Direct-message threads.
    ThreadStatus, "thread" {
        Active => "active", "Active";
        Reported => "reported", "Reported";
        Blocked => "blocked", "Blocked";
    }
);

status_enum!(
    UserStatus, "user" {
        Active => "active", "Active";
        Banned => "banned", "Banned";
        Pending => "pending", "Pending";
    }
);

status_enum!(
    /// Review state of a single abuse report.
    ReportStatus, "report" {
        Pending => "pending", "Pending";
        Resolved => "resolved", "Resolved";
        Dismissed => "dismissed", "Dismissed";
    }
);

status_enum!(
    /// Review state of an identity document.
    DocumentStatus, "document" {
        Pending => "pending", "Pending";
        Approved => "approved", "Approved";
        Rejected => "rejected", "Rejected";
    }
);

/// A back-office record with an id and an admin-assigned status.
pub trait Moderated {
    type Status: Copy + PartialEq;

    fn id(&self) -> &str;
    fn status(&self) -> Self::Status;
    fn set_status(&mut self, status: Self::Status);
}

/// Replace the status of the item whose id is `id`. Every other field, and
/// every other item, is left untouched. Returns whether an item matched.
pub fn update_status<T: Moderated>(items: &mut [T], id: &str, status: T::Status) -> bool {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            log::info!("status of {id} set");
            item.set_status(status);
            true
        }
        None => false,
    }
}

#[must_use]
pub fn count_with_status<T: Moderated>(items: &[T], status: T::Status) -> usize {
    items.iter().filter(|item| item.status() == status).count()
}

/// Delete the item whose id is `id`. Returns whether an item was removed.
pub fn remove_by_id<T: Moderated>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Implement `Moderated` for a struct with `id: String` and `status` fields.
macro_rules! impl_moderated {
    ($ty:ty, $status:ty) => {
        impl $crate::state::moderation::Moderated for $ty {
            type Status = $status;

            fn id(&self) -> &str {
                &self.id
            }

            fn status(&self) -> Self::Status {
                self.status
            }

            fn set_status(&mut self, status: Self::Status) {
                self.status = status;
            }
        }
    };
}

pub(crate) use impl_moderated;
