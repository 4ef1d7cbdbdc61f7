use crate::client::PetAdoptClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{AuthResponse, Credentials, Signup, User, UserUpdate};

impl PetAdoptClient {
    pub fn build_login(&self, credentials: &Credentials) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/auth/login", &[], credentials)
    }

    pub fn build_signup(&self, signup: &Signup) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/auth/signup", &[], signup)
    }

    pub fn build_me(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/auth/me", &[])
    }

    pub fn build_update_profile(&self, update: &UserUpdate) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, "/auth/profile", &[], update)
    }

    /// Exchange credentials for a token. The session is not stored; see
    /// `sign_in` for that.
    pub fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.gateway().call(self.build_login(credentials)?)
    }

    pub fn signup(&self, signup: &Signup) -> Result<AuthResponse, ApiError> {
        self.gateway().call(self.build_signup(signup)?)
    }

    /// Log in and persist the resulting session credential.
    pub fn sign_in(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let auth = self.login(credentials)?;
        self.save_session(&auth.session())?;
        Ok(auth)
    }

    /// Register and persist the resulting session credential.
    pub fn register(&self, signup: &Signup) -> Result<AuthResponse, ApiError> {
        let auth = self.signup(signup)?;
        self.save_session(&auth.session())?;
        Ok(auth)
    }

    pub fn me(&self) -> Result<User, ApiError> {
        self.gateway().call(self.build_me())
    }

    pub fn update_profile(&self, update: &UserUpdate) -> Result<User, ApiError> {
        self.gateway().call(self.build_update_profile(update)?)
    }

    /// Drop the stored credential. Purely local; the backend keeps no session.
    pub fn logout(&self) {
        self.gateway().clear_session();
    }
}
