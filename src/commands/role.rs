//! Role Requests

use super::{encode_segment, ApiError, HttpClient};
use crate::models::UserRoles;

const USER_ROLES_URL: &str = "/profile/get-user-roles";

pub async fn get_user_roles(client: &HttpClient) -> Result<UserRoles, ApiError> {
    client.get_json(USER_ROLES_URL).await
}

/// Page the browser is sent to when switching roles
pub fn switch_role_url(role_name: &str) -> String {
    format!("/profile/switch-role/{}", encode_segment(role_name))
}
