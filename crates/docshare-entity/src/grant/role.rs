//! The role a user holds on a document.

use chrono::{DateTime, Utc};

use docshare_core::types::{SharePermission, UserId};

use crate::document::Document;
use crate::grant::DocumentGrant;

/// How a user relates to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    /// The document owner; holds every right.
    Owner,
    /// A user with an active grant.
    Grantee(SharePermission),
}

impl DocumentRole {
    /// Resolve the role of `user_id` on `document`, given the user's grant
    /// (if any). Expired grants resolve to `None`.
    pub fn resolve(
        document: &Document,
        user_id: UserId,
        grant: Option<&DocumentGrant>,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        if document.is_owned_by(user_id) {
            return Some(Self::Owner);
        }
        grant
            .filter(|g| g.user_id == user_id && g.document_id == document.id)
            .filter(|g| !g.is_expired_at(now))
            .map(|g| Self::Grantee(g.permission))
    }

    /// Read the document.
    pub fn can_view(&self) -> bool {
        true
    }

    /// Modify or share the document.
    pub fn can_edit(&self) -> bool {
        match self {
            Self::Owner => true,
            Self::Grantee(p) => p.can_edit(),
        }
    }

    /// Delete the document or revoke grants.
    pub fn can_manage(&self) -> bool {
        match self {
            Self::Owner => true,
            Self::Grantee(p) => p.can_manage(),
        }
    }

    /// The highest level this role may hand out when sharing.
    pub fn grantable_permission(&self) -> SharePermission {
        match self {
            Self::Owner => SharePermission::Admin,
            Self::Grantee(p) => *p,
        }
    }
}
