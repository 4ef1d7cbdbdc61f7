use crate::client::PetAdoptClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{User, UserUpdate};

const USERS: &str = "/users";
const USER: &str = "/users/:id";

impl PetAdoptClient {
    pub fn build_list_users(&self) -> HttpRequest {
        self.request(HttpMethod::Get, USERS, &[])
    }

    pub fn build_get_user(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, USER, &[id])
    }

    pub fn build_update_user(&self, id: &str, update: &UserUpdate) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, USER, &[id], update)
    }

    pub fn build_delete_user(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, USER, &[id])
    }

    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.gateway().call(self.build_list_users())
    }

    pub fn get_user(&self, id: &str) -> Result<User, ApiError> {
        self.gateway().call(self.build_get_user(id))
    }

    pub fn update_user(&self, id: &str, update: &UserUpdate) -> Result<User, ApiError> {
        self.gateway().call(self.build_update_user(id, update)?)
    }

    pub fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.gateway().call_unit(self.build_delete_user(id))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::*;
    use crate::http::HttpMethod;
    use crate::types::UserUpdate;

    #[test]
    fn user_requests() {
        let c = client();
        assert_eq!(c.build_list_users().url, format!("{BASE_URL}/users"));
        assert_eq!(c.build_get_user("u1").endpoint_key(), "GET /users/:id");
        assert_eq!(c.build_delete_user("u1").method, HttpMethod::Delete);

        let req = c
            .build_update_user(
                "u1",
                &UserUpdate {
                    name: Some("Grace".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(req.url, format!("{BASE_URL}/users/u1"));
        assert_eq!(body_json(&req), serde_json::json!({"name": "Grace"}));
    }
}
