//! Session identity and role resolution.
//!
//! Authentication itself is the identity provider's job; the core only
//! reacts to the session it is handed. The admin capability is an exact,
//! case-sensitive match of a signed-in session's uid against the single
//! configured admin identity - no role hierarchy, no revocation beyond
//! changing the configured value.

use serde::{Deserialize, Serialize};

use leafline_core::SessionId;

use crate::config::StoreConfig;

/// An authenticated (possibly anonymous) session from the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque identity token assigned by the provider.
    pub uid: SessionId,
    /// Whether this session came from the anonymous bootstrap.
    pub anonymous: bool,
}

impl Session {
    /// A signed-in session for a known identity.
    #[must_use]
    pub fn signed_in(uid: impl Into<SessionId>) -> Self {
        Self {
            uid: uid.into(),
            anonymous: false,
        }
    }

    /// The anonymous fallback session.
    #[must_use]
    pub fn anonymous(uid: impl Into<SessionId>) -> Self {
        Self {
            uid: uid.into(),
            anonymous: true,
        }
    }
}

/// Resolve the admin capability for the current session, if any.
///
/// Absent and anonymous sessions are never admin.
#[must_use]
pub fn is_admin(session: Option<&Session>, config: &StoreConfig) -> bool {
    session.is_some_and(|s| !s.anonymous && s.uid.as_str() == config.admin_identity())
}
