use nutridb::guard::{Access, Outcome, resolve, role_home};
use nutridb::models::Role;
use nutridb::session::Session;

fn session(role: Role) -> Session {
    Session { token: "tok".into(), user_id: 7, role }
}

#[test]
fn test_public_signed_out_renders() {
    assert_eq!(resolve(Access::Public, None), Outcome::Render);
}

#[test]
fn test_public_signed_in_user_goes_home() {
    let s = session(Role::User);
    assert_eq!(resolve(Access::Public, Some(&s)), Outcome::RedirectHome(Role::User));
}

#[test]
fn test_public_signed_in_admin_goes_home() {
    let s = session(Role::Admin);
    assert_eq!(resolve(Access::Public, Some(&s)), Outcome::RedirectHome(Role::Admin));
}

#[test]
fn test_requires_auth_signed_out_redirects_login() {
    assert_eq!(resolve(Access::RequiresAuth, None), Outcome::RedirectLogin);
}

#[test]
fn test_requires_auth_user_renders() {
    let s = session(Role::User);
    assert_eq!(resolve(Access::RequiresAuth, Some(&s)), Outcome::Render);
}

#[test]
fn test_requires_auth_admin_renders() {
    let s = session(Role::Admin);
    assert_eq!(resolve(Access::RequiresAuth, Some(&s)), Outcome::Render);
}

#[test]
fn test_user_only_signed_out_redirects_login() {
    assert_eq!(resolve(Access::UserOnly, None), Outcome::RedirectLogin);
}

#[test]
fn test_user_only_user_renders() {
    let s = session(Role::User);
    assert_eq!(resolve(Access::UserOnly, Some(&s)), Outcome::Render);
}

#[test]
fn test_user_only_admin_goes_to_admin_home() {
    let s = session(Role::Admin);
    assert_eq!(resolve(Access::UserOnly, Some(&s)), Outcome::RedirectHome(Role::Admin));
}

#[test]
fn test_admin_only_signed_out_redirects_login() {
    assert_eq!(resolve(Access::AdminOnly, None), Outcome::RedirectLogin);
}

#[test]
fn test_admin_only_user_goes_to_user_home() {
    let s = session(Role::User);
    assert_eq!(resolve(Access::AdminOnly, Some(&s)), Outcome::RedirectHome(Role::User));
}

#[test]
fn test_admin_only_admin_renders() {
    let s = session(Role::Admin);
    assert_eq!(resolve(Access::AdminOnly, Some(&s)), Outcome::Render);
}

#[test]
fn test_signed_out_never_sent_home() {
    for access in [Access::RequiresAuth, Access::UserOnly, Access::AdminOnly] {
        assert_eq!(resolve(access, None), Outcome::RedirectLogin);
    }
}

#[test]
fn test_wrong_role_lands_on_own_home_not_login() {
    let admin = session(Role::Admin);
    let user = session(Role::User);
    assert_eq!(resolve(Access::UserOnly, Some(&admin)), Outcome::RedirectHome(Role::Admin));
    assert_eq!(resolve(Access::AdminOnly, Some(&user)), Outcome::RedirectHome(Role::User));
}

#[test]
fn test_role_home_labels() {
    assert_eq!(role_home(Role::User), "dashboard");
    assert_eq!(role_home(Role::Admin), "admin dashboard");
}
