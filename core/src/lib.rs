//! Blocking API client for the pet-adoption backend.
//!
//! # Overview
//! Every resource call funnels through one `Gateway`, which
//! - keeps a per-endpoint sliding-window request budget (`RateLimiter`),
//! - attaches the stored bearer credential, and
//! - turns every failure into one `ApiError {message, code, status, data}`.
//!
//! # Design
//! - Operations are split into `build_*` (pure, produces an `HttpRequest`)
//!   and a calling method that runs the request through the gateway.
//! - Host concerns sit behind traits: `Transport` (network), `SessionStore`
//!   (credential storage), `Navigator` (login redirect) and `Clock` (window
//!   bookkeeping). Each has an in-memory implementation for tests.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod navigation;
pub mod rate_limit;
mod resources;
pub mod session;
pub mod transport;
pub mod types;

pub use client::PetAdoptClient;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ClientConfig;
pub use error::{ApiError, ErrorCode, TransportError};
pub use gateway::{Gateway, GatewayBuilder};
pub use http::{Body, FormData, HttpMethod, HttpRequest, HttpResponse};
pub use navigation::{MemoryNavigator, Navigator};
pub use rate_limit::{RateLimitConfig, RateLimiter};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore, SESSION_KEY};
pub use transport::{Transport, UreqTransport};
pub use types::*;
