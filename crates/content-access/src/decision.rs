//! Outcome of an access decision, with the branch that produced it.

use std::fmt;

/// Why an access decision came out the way it did.
///
/// [`AccessDecision::is_granted`] is the boolean that
/// [`AccessDecisionEngine::has_access`](crate::AccessDecisionEngine::has_access)
/// returns for the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessDecision {
    /// Fine-grained access control is off for the item's content type.
    TypeDisabled,
    /// The actor holds the global grant permission.
    GlobalGrant,
    /// The actor holds the own-content grant and owns the item.
    OwnContentGrant,
    /// Access control is on, but the actor holds no applicable grant.
    NoGrant,
}

impl AccessDecision {
    /// Returns `true` if access is granted.
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::GlobalGrant | Self::OwnContentGrant)
    }

    /// Short machine-friendly reason string.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::TypeDisabled => "type_disabled",
            Self::GlobalGrant => "global_grant",
            Self::OwnContentGrant => "own_content_grant",
            Self::NoGrant => "no_grant",
        }
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_granted() { "granted" } else { "denied" };
        write!(f, "{verdict} ({})", self.reason())
    }
}
