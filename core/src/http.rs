//! HTTP requests and responses as plain data.
//!
//! # Design
//! Resource functions build `HttpRequest` values without touching the network;
//! the gateway runs them through a `Transport` and gets an `HttpResponse`
//! back. Every request remembers the route template it was built from so the
//! rate limiter can partition on the logical endpoint rather than on concrete
//! ids.

use std::fmt;

use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

pub const CONTENT_TYPE: &str = "content-type";
pub const AUTHORIZATION: &str = "authorization";
pub const JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Json(String),
    Multipart { boundary: String, bytes: Vec<u8> },
}

impl Body {
    pub fn content_type(&self) -> String {
        match self {
            Body::Json(_) => JSON.to_string(),
            Body::Multipart { boundary, .. } => format!("multipart/form-data; boundary={boundary}"),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Body::Json(text) => text.as_bytes(),
            Body::Multipart { bytes, .. } => bytes,
        }
    }
}

/// An outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Path template such as `/pets/:id`.
    pub route: String,
    /// Absolute URL including any query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Body>,
}

impl HttpRequest {
    /// New request carrying the default `content-type: application/json`.
    pub fn new(method: HttpMethod, route: &str, url: String) -> Self {
        Self {
            method,
            route: route.to_string(),
            url,
            headers: vec![(CONTENT_TYPE.to_string(), JSON.to_string())],
            body: None,
        }
    }

    /// Attach a body and replace the content type with the body's own.
    pub fn with_body(mut self, body: Body) -> Self {
        self.set_header(CONTENT_TYPE, &body.content_type());
        self.body = Some(body);
        self
    }

    /// Rate-limit partition key: method plus route template.
    pub fn endpoint_key(&self) -> String {
        endpoint_key(self.method, &self.route)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Replace any existing header of the same name.
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_ascii_lowercase(), value.to_string()));
    }
}

pub fn endpoint_key(method: HttpMethod, route: &str) -> String {
    format!("{method} {route}")
}

/// A response as returned by the transport, any status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Builder for `multipart/form-data` payloads such as photo uploads.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    parts: Vec<Part>,
}

#[derive(Debug, Clone)]
enum Part {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl ToString) -> Self {
        self.parts.push(Part::Text {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Add `value` as a text field when present.
    pub fn opt_text(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        self.parts.push(Part::File {
            name: name.to_string(),
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            bytes,
        });
        self
    }

    /// Encode with a fresh random boundary.
    pub fn into_body(self) -> Body {
        let boundary = format!("----petadopt{}", Uuid::new_v4().simple());
        self.encode(boundary)
    }

    fn encode(self, boundary: String) -> Body {
        let mut out = Vec::new();
        for part in self.parts {
            out.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            match part {
                Part::Text { name, value } => {
                    out.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", escape_quoted(&name))
                            .as_bytes(),
                    );
                    out.extend_from_slice(value.as_bytes());
                }
                Part::File {
                    name,
                    filename,
                    content_type,
                    bytes,
                } => {
                    out.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {content_type}\r\n\r\n",
                            escape_quoted(&name),
                            escape_quoted(&filename),
                        )
                        .as_bytes(),
                    );
                    out.extend_from_slice(&bytes);
                }
            }
            out.extend_from_slice(b"\r\n");
        }
        out.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        Body::Multipart { boundary, bytes: out }
    }
}

fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"").replace(['\r', '\n'], " ")
}

/// Absolute URL for `route` under `base`.
///
/// Each `:param` segment of the template takes the next value of `params`;
/// every segment is escaped, so an id containing `/` stays one segment.
pub fn resolve_url(base: &str, route: &str, params: &[&str]) -> String {
    let mut params = params.iter();
    let segments: Vec<&str> = route
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| match s.strip_prefix(':') {
            Some(_) => params.next().copied().unwrap_or(s),
            None => s,
        })
        .collect();

    match Url::parse(base) {
        Ok(mut url) => {
            if let Ok(mut path) = url.path_segments_mut() {
                path.pop_if_empty().extend(&segments);
            }
            url.into()
        }
        Err(e) => {
            debug!(base, error = %e, "base URL does not parse; joining verbatim");
            format!("{base}/{}", segments.join("/"))
        }
    }
}

/// Append `pairs` to `url` as a form-encoded query string.
pub fn with_query(url: String, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return url;
    }
    match Url::parse(&url) {
        Ok(mut parsed) => {
            parsed.query_pairs_mut().extend_pairs(pairs);
            parsed.into()
        }
        Err(e) => {
            warn!(url = %url, error = %e, "dropping query on unparseable URL");
            url
        }
    }
}
