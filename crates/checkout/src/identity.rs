//! Identity collaborator.
//!
//! Authentication lives with an external provider; checkout only needs to know
//! who (if anyone) is signed in, to prefill the shipping form.

/// The signed-in user, as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurrentUser {
    pub display_name: Option<String>,
    pub email: Option<String>,
}

pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<CurrentUser>;
}

/// Nobody is signed in.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnonymousIdentity;

impl IdentityProvider for AnonymousIdentity {
    fn current_user(&self) -> Option<CurrentUser> {
        None
    }
}

/// Always reports the same user.
#[derive(Debug, Clone)]
pub struct StaticIdentity(pub CurrentUser);

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<CurrentUser> {
        Some(self.0.clone())
    }
}
