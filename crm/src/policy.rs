//! Per-resource permission maps consulted by the admin surface.
//!
//! Managers hold the wildcard everywhere; operators get the narrower grants
//! (they work the contact log but cannot reshape the registry or touch
//! accounts).

use entity::user;
use once_cell::sync::Lazy;
use platform_authz::{Action, PermissionMap, Principal, Role};

fn staff_all() -> PermissionMap {
    PermissionMap::new()
        .grant_all(Role::Manager)
        .grant_all(Role::Operator)
}

pub static COMPANY: Lazy<PermissionMap> = Lazy::new(|| {
    PermissionMap::new()
        .grant_all(Role::Manager)
        .grant_actions(Role::Operator, [Action::Change, Action::View, Action::Module])
});

pub static CANTON: Lazy<PermissionMap> = Lazy::new(|| {
    PermissionMap::new()
        .grant_all(Role::Manager)
        .grant_actions(Role::Operator, [Action::View])
});

pub static COMPANY_TYPE: Lazy<PermissionMap> = Lazy::new(staff_all);
pub static LEGAL_FORM: Lazy<PermissionMap> = Lazy::new(staff_all);
pub static LEGAL_SEAT: Lazy<PermissionMap> = Lazy::new(staff_all);
pub static CONTACT_RECORD: Lazy<PermissionMap> = Lazy::new(staff_all);
pub static COMPANY_NOTE: Lazy<PermissionMap> = Lazy::new(staff_all);

pub static USER_ADMIN: Lazy<PermissionMap> =
    Lazy::new(|| PermissionMap::new().grant_all(Role::Manager));

/// The principal a stored account resolves to. Inactive accounts fall back
/// to `Anonymous` so every check denies.
pub fn principal_for(account: &user::Model) -> Principal {
    if !account.is_active {
        return Principal::Anonymous;
    }
    let role = match account.role {
        user::Role::Manager => Role::Manager,
        user::Role::Operator => Role::Operator,
    };
    Principal::User {
        role,
        is_superuser: account.is_superuser,
    }
}
