use crate::domain::user::{User, UserRole};
use crate::forms::auth::LoginForm;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Upsert the user identified by the external identity and record the
/// sign-in.
///
/// When the identity matches the configured owner identity the account is
/// promoted to admin.
pub fn login<R>(repo: &R, form: LoginForm, admin_open_id: Option<&str>) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    let mut upsert = form
        .into_upsert_user()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if let Some(admin) = admin_open_id
        && admin == upsert.open_id
    {
        upsert = upsert.with_role(UserRole::Admin);
    }

    repo.upsert_user(&upsert).map_err(ServiceError::from)
}

/// Load the signed-in user's record.
pub fn current_user<R>(repo: &R, user_id: i32) -> ServiceResult<Option<User>>
where
    R: UserReader + ?Sized,
{
    repo.get_user_by_id(user_id).map_err(ServiceError::from)
}
