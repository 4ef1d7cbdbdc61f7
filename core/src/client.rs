//! Resource-level client for the pet-adoption backend.
//!
//! # Design
//! Every operation comes in two halves: a pure `build_*` method that returns
//! the `HttpRequest` (route template, URL, headers, body) and a calling method
//! that sends it through the `Gateway` and decodes the payload. The build half
//! is what the unit tests pin down; the gateway supplies rate limiting,
//! credentials and error normalization uniformly.
//!
//! The operations themselves live in `crate::resources`, one file per backend
//! resource.

use std::sync::Arc;

use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::gateway::{json_body, Gateway};
use crate::http::{resolve_url, HttpMethod, HttpRequest};
use crate::navigation::Navigator;
use crate::session::{Session, SessionStore};

#[derive(Debug, Clone)]
pub struct PetAdoptClient {
    gateway: Gateway,
}

impl PetAdoptClient {
    /// Client with default collaborators: real transport, in-memory session
    /// store and navigator.
    pub fn new(config: ClientConfig) -> Self {
        Self::from_gateway(Gateway::new(config))
    }

    /// Client configured from the environment.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// Client with a host-provided session store and navigator.
    pub fn with_host(
        config: ClientConfig,
        sessions: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::from_gateway(
            Gateway::builder(config)
                .session_store(sessions)
                .navigator(navigator)
                .build(),
        )
    }

    pub fn from_gateway(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Requests left for an endpoint, for "N requests remaining" hints.
    pub fn remaining(&self, method: HttpMethod, route: &str) -> u32 {
        self.gateway.remaining(method, route)
    }

    pub fn current_session(&self) -> Option<Session> {
        self.gateway.current_session()
    }

    pub fn save_session(&self, session: &Session) -> Result<(), ApiError> {
        self.gateway.save_session(session)
    }

    /// Request for `route`, its `:param` segments filled from `params`.
    pub(crate) fn request(&self, method: HttpMethod, route: &str, params: &[&str]) -> HttpRequest {
        let url = resolve_url(&self.gateway.config().base_url, route, params);
        HttpRequest::new(method, route, url)
    }

    pub(crate) fn json_request<T: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        route: &str,
        params: &[&str],
        body: &T,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self.request(method, route, params).with_body(json_body(body)?))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub const BASE_URL: &str = "http://localhost:5000/api";

    pub fn client() -> PetAdoptClient {
        PetAdoptClient::new(ClientConfig::default().with_base_url(BASE_URL))
    }

    /// Decode a JSON request body for assertions.
    pub fn body_json(req: &HttpRequest) -> serde_json::Value {
        let bytes = req.body.as_ref().expect("request has a body").as_bytes();
        serde_json::from_slice(bytes).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::navigation::MemoryNavigator;
    use crate::session::MemorySessionStore;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PetAdoptClient::new(ClientConfig::default().with_base_url("http://localhost:5000/api/"));
        let req = client.request(HttpMethod::Get, "/pets", &[]);
        assert_eq!(req.url, "http://localhost:5000/api/pets");
    }

    #[test]
    fn json_request_sets_body_and_content_type() {
        let req = client()
            .json_request(HttpMethod::Post, "/contact", &[], &serde_json::json!({"a": 1}))
            .unwrap();
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(body_json(&req)["a"], 1);
    }

    #[test]
    fn host_collaborators_are_used() {
        let sessions = Arc::new(MemorySessionStore::new());
        let client = PetAdoptClient::with_host(
            ClientConfig::default(),
            sessions.clone(),
            Arc::new(MemoryNavigator::default()),
        );
        let session = Session {
            token: "t".to_string(),
            user_id: "u".to_string(),
            is_admin: false,
            name: None,
            email: None,
        };
        client.save_session(&session).unwrap();
        assert!(sessions.get(crate::session::SESSION_KEY).is_some());
        assert_eq!(client.current_session(), Some(session));
    }

    #[test]
    fn fresh_endpoint_has_full_budget() {
        assert_eq!(client().remaining(HttpMethod::Get, "/pets"), 30);
    }
}
