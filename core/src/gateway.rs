//! The single HTTP entry point every resource call funnels through.
//!
//! # Design
//! A call passes two stages around one transport round-trip:
//!
//! - **outbound**: derive the endpoint key, ask the rate limiter, attach the
//!   bearer credential. A limiter refusal ends the call here with
//!   `RATE_LIMIT_EXCEEDED`; nothing is sent.
//! - **inbound**: 2xx responses pass through untouched. Everything else is
//!   normalized into `ApiError`. A 401 additionally clears the stored session
//!   and sends the user to the login route.
//!
//! There are no retries at this layer.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::clock::SystemClock;
use crate::config::ClientConfig;
use crate::error::{ApiError, TransportError};
use crate::http::{endpoint_key, resolve_url, Body, HttpMethod, HttpRequest, HttpResponse, AUTHORIZATION};
use crate::navigation::{MemoryNavigator, Navigator};
use crate::rate_limit::RateLimiter;
use crate::session::{self, MemorySessionStore, Session, SessionStore};
use crate::transport::{Transport, UreqTransport};

#[derive(Debug, Clone)]
pub struct Gateway {
    config: ClientConfig,
    limiter: RateLimiter,
    transport: Arc<dyn Transport>,
    sessions: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

/// Assembles a `Gateway`; every collaborator has a working default.
#[derive(Debug)]
pub struct GatewayBuilder {
    config: ClientConfig,
    limiter: Option<RateLimiter>,
    transport: Option<Arc<dyn Transport>>,
    sessions: Option<Arc<dyn SessionStore>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl GatewayBuilder {
    pub fn limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = Some(limiter);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn session_store(mut self, sessions: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn build(self) -> Gateway {
        let config = self.config;
        let limiter = self
            .limiter
            .unwrap_or_else(|| RateLimiter::new(Arc::new(SystemClock), config.rate_limit));
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(UreqTransport::new(config.timeout)));
        Gateway {
            limiter,
            transport,
            sessions: self.sessions.unwrap_or_else(|| Arc::new(MemorySessionStore::new())),
            navigator: self.navigator.unwrap_or_else(|| Arc::new(MemoryNavigator::default())),
            config,
        }
    }
}

impl Gateway {
    pub fn builder(config: ClientConfig) -> GatewayBuilder {
        GatewayBuilder {
            config,
            limiter: None,
            transport: None,
            sessions: None,
            navigator: None,
        }
    }

    pub fn new(config: ClientConfig) -> Self {
        Self::builder(config).build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Absolute URL for a parameterless backend route.
    pub fn url(&self, route: &str) -> String {
        resolve_url(&self.config.base_url, route, &[])
    }

    /// Requests left for an endpoint in the current window.
    pub fn remaining(&self, method: HttpMethod, route: &str) -> u32 {
        self.limiter
            .remaining_with(&endpoint_key(method, route), self.config.rate_limit)
    }

    /// Run `request` and return the raw successful response.
    pub fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let request = self.outbound(request)?;
        let outcome = self.transport.execute(&request);
        self.inbound(&request, outcome)
    }

    /// Run `request` and decode the JSON payload.
    ///
    /// An empty body decodes as `null`, so `()` and `Option<_>` targets accept
    /// 204-style responses.
    pub fn call<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        let response = self.send(request)?;
        let body = response.body.trim();
        let body = if body.is_empty() { "null" } else { body };
        serde_json::from_str(body).map_err(|e| {
            warn!(status = response.status, error = %e, "undecodable success payload");
            ApiError::invalid_response(response.status, e)
        })
    }

    /// Run `request`, discarding any payload.
    pub fn call_unit(&self, request: HttpRequest) -> Result<(), ApiError> {
        self.send(request).map(|_| ())
    }

    /// Stored credential, if one is present and readable.
    pub fn current_session(&self) -> Option<Session> {
        session::load(&*self.sessions, &self.config.session_key).ok().flatten()
    }

    pub fn save_session(&self, session: &Session) -> Result<(), ApiError> {
        session::save(&*self.sessions, &self.config.session_key, session).map_err(ApiError::invalid_request)
    }

    pub fn clear_session(&self) {
        if let Err(e) = self.sessions.remove(&self.config.session_key) {
            warn!(error = %e, "failed to remove session credential");
        }
    }

    fn outbound(&self, mut request: HttpRequest) -> Result<HttpRequest, ApiError> {
        let key = request.endpoint_key();
        if !self.limiter.is_allowed(&key, self.config.rate_limit) {
            let remaining = self.limiter.remaining_with(&key, self.config.rate_limit);
            warn!(endpoint = %key, remaining, "rejected by client rate limit");
            return Err(ApiError::rate_limited(remaining));
        }

        match session::load(&*self.sessions, &self.config.session_key) {
            Ok(Some(session)) => {
                if let Some(token) = session.bearer() {
                    request.set_header(AUTHORIZATION, &format!("Bearer {token}"));
                }
            }
            Ok(None) => {}
            Err(e) => debug!(error = %e, "sending unauthenticated; stored session unreadable"),
        }

        debug!(endpoint = %key, url = %request.url, "request admitted");
        Ok(request)
    }

    fn inbound(
        &self,
        request: &HttpRequest,
        outcome: Result<HttpResponse, TransportError>,
    ) -> Result<HttpResponse, ApiError> {
        let key = request.endpoint_key();
        match outcome {
            Ok(response) if response.is_success() => {
                debug!(endpoint = %key, status = response.status, "request succeeded");
                Ok(response)
            }
            Ok(response) => {
                let err = ApiError::from_response(&response);
                warn!(endpoint = %key, status = err.status, code = %err.code, "request failed");
                if err.is_unauthorized() {
                    self.expire_session();
                }
                Err(err)
            }
            Err(failure) => {
                warn!(endpoint = %key, error = %failure, "no response");
                Err(failure.into())
            }
        }
    }

    fn expire_session(&self) {
        info!("session rejected by server; signing out");
        self.clear_session();
        let login = self.config.login_path.as_str();
        let here = self.navigator.current_path();
        if !at_route(&here, login) {
            self.navigator.navigate_to(login);
        }
    }
}

fn at_route(location: &str, route: &str) -> bool {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    path.trim_end_matches('/') == route.trim_end_matches('/')
}

/// Encode `value` as a JSON body.
pub fn json_body<T: Serialize + ?Sized>(value: &T) -> Result<Body, ApiError> {
    serde_json::to_string(value)
        .map(Body::Json)
        .map_err(ApiError::invalid_request)
}
