use crate::client::PetAdoptClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{AdminStats, RoleChange, User};

const STATS: &str = "/admin/stats";
const ROLE: &str = "/admin/users/:id/role";

impl PetAdoptClient {
    pub fn build_admin_stats(&self) -> HttpRequest {
        self.request(HttpMethod::Get, STATS, &[])
    }

    pub fn build_set_user_admin(&self, user_id: &str, is_admin: bool) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Patch, ROLE, &[user_id], &RoleChange { is_admin })
    }

    /// Dashboard counters.
    pub fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.gateway().call(self.build_admin_stats())
    }

    /// Grant or revoke admin rights.
    pub fn set_user_admin(&self, user_id: &str, is_admin: bool) -> Result<User, ApiError> {
        self.gateway().call(self.build_set_user_admin(user_id, is_admin)?)
    }
}
