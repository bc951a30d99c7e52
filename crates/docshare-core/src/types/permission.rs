//! Share permission levels granted on documents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Permission level carried by a document grant.
///
/// Ordered by privilege: `Admin > Write > Read`. The wire and database
/// representation is upper case (`"READ"`, `"WRITE"`, `"ADMIN"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "share_permission", rename_all = "UPPERCASE")
)]
#[serde(rename_all = "UPPERCASE")]
pub enum SharePermission {
    /// View the document.
    Read,
    /// View and edit the document, and share it onward.
    Write,
    /// Everything `Write` allows, plus deletion and grant revocation.
    Admin,
}

impl SharePermission {
    /// Check if this level grants at least `required`.
    pub fn has_at_least(&self, required: SharePermission) -> bool {
        *self >= required
    }

    /// Check if this level allows editing (and therefore sharing).
    pub fn can_edit(&self) -> bool {
        self.has_at_least(Self::Write)
    }

    /// Check if this level allows deleting the document and revoking grants.
    pub fn can_manage(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for SharePermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SharePermission {
    type Err = AppError;

    /// Parse the exact wire representation. Lower-case input is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "READ" => Ok(Self::Read),
            "WRITE" => Ok(Self::Write),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(AppError::validation(format!(
                "Invalid permission: '{s}'. Expected one of: READ, WRITE, ADMIN"
            ))),
        }
    }
}
