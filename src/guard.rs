//! Screen access control, decided before a screen runs.
//!
//! Pure function of the screen's access level and the current session.
//! Public-only screens (login, signup, landing) turn a signed-in visitor back
//! to their role home; gated screens send anonymous visitors to login and
//! wrong-role visitors to their own home.

use crate::models::Role;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Only sensible when signed out (login, signup, landing).
    Public,
    /// Any signed-in role.
    RequiresAuth,
    /// Ordinary users only.
    UserOnly,
    /// Admins only.
    AdminOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Render,
    RedirectLogin,
    RedirectHome(Role),
}

pub fn resolve(access: Access, session: Option<&Session>) -> Outcome {
    match (access, session) {
        (Access::Public, None) => Outcome::Render,
        (Access::Public, Some(s)) => Outcome::RedirectHome(s.role),
        (_, None) => Outcome::RedirectLogin,
        (Access::AdminOnly, Some(s)) if s.role != Role::Admin => Outcome::RedirectHome(s.role),
        (Access::UserOnly, Some(s)) if s.role == Role::Admin => Outcome::RedirectHome(s.role),
        (_, Some(_)) => Outcome::Render,
    }
}

/// Default landing screen per role.
pub fn role_home(role: Role) -> &'static str {
    match role {
        Role::User => "dashboard",
        Role::Admin => "admin dashboard",
    }
}
