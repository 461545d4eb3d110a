//! Caller identities.

use crate::Tier;
use serde::{Deserialize, Serialize};

/// The identity attached to an incoming request.
///
/// Identity resolution (credential to user id and tier) happens upstream in
/// the auth layer; a failed or absent authentication arrives here as
/// [`Identity::Guest`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Identity {
    /// Authenticated account with a resolved subscription tier.
    User {
        /// Stable user identifier from the auth layer.
        id: String,
        /// Subscription tier resolved from the user's profile.
        tier: Tier,
    },
    /// Unauthenticated visitor, identified only by a client session id.
    Guest {
        /// Client-generated session identifier.
        session_id: String,
    },
}

impl Identity {
    /// An authenticated identity.
    pub fn user(id: impl Into<String>, tier: Tier) -> Self {
        Identity::User {
            id: id.into(),
            tier,
        }
    }

    /// An unauthenticated identity.
    pub fn guest(session_id: impl Into<String>) -> Self {
        Identity::Guest {
            session_id: session_id.into(),
        }
    }

    /// The subscription tier this identity resolves to.
    pub fn tier(&self) -> Tier {
        match self {
            Identity::User { tier, .. } => *tier,
            Identity::Guest { .. } => Tier::Guest,
        }
    }

    /// Stable key scoping this identity's usage window.
    pub fn quota_key(&self) -> String {
        match self {
            Identity::User { id, .. } => format!("user:{}", id),
            Identity::Guest { session_id } => format!("guest:{}", session_id),
        }
    }
}
