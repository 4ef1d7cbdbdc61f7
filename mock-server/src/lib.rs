//! In-memory stand-in for the pet-adoption backend.
//!
//! Serves the same routes as the real API with JSON documents kept in a
//! `RwLock`ed map. Tokens are opaque UUIDs; an unknown token gets the same
//! `401 {"message": "Token expired"}` the real backend sends for a stale
//! session. One admin account is seeded at startup.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub const ADMIN_EMAIL: &str = "admin@petadopt.test";
pub const ADMIN_PASSWORD: &str = "admin123";

const COLLECTIONS: &[&str] = &[
    "pets",
    "adoptions",
    "surrenders",
    "bookings",
    "users",
    "stories",
    "volunteers",
    "donations",
    "contact",
    "blog",
];

/// Listing these requires an admin; owners reach their own via `/mine`.
const PRIVATE: &[&str] = &["adoptions", "surrenders", "bookings", "users", "volunteers", "donations", "contact"];

/// Anyone may create these without logging in.
const PUBLIC_WRITES: &[&str] = &["volunteers", "donations", "contact"];

/// Only admins may create, edit or delete these.
const ADMIN_WRITES: &[&str] = &["pets", "blog"];

/// Documents that start life awaiting review.
const REVIEWED: &[&str] = &["adoptions", "surrenders", "bookings", "volunteers"];

#[derive(Debug, Default)]
pub struct Store {
    collections: HashMap<String, Vec<Value>>,
    /// email -> account
    accounts: HashMap<String, Account>,
    /// token -> user id
    tokens: HashMap<String, String>,
}

#[derive(Debug, Clone)]
struct Account {
    user_id: String,
    password: String,
}

impl Store {
    fn seeded() -> Self {
        let mut store = Self::default();
        let admin = json!({
            "_id": Uuid::new_v4().to_string(),
            "name": "Shelter Admin",
            "email": ADMIN_EMAIL,
            "isAdmin": true,
            "createdAt": now(),
        });
        store.add_account(admin, ADMIN_PASSWORD);
        store
    }

    fn add_account(&mut self, user: Value, password: &str) {
        let email = text(&user, "email").unwrap_or_default().to_string();
        let user_id = text(&user, "_id").unwrap_or_default().to_string();
        self.accounts.insert(
            email,
            Account {
                user_id,
                password: password.to_string(),
            },
        );
        self.docs_mut("users").push(user);
    }

    fn issue_token(&mut self, user_id: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.insert(token.clone(), user_id.to_string());
        token
    }

    fn docs(&self, collection: &str) -> &[Value] {
        self.collections.get(collection).map(Vec::as_slice).unwrap_or_default()
    }

    fn docs_mut(&mut self, collection: &str) -> &mut Vec<Value> {
        self.collections.entry(collection.to_string()).or_default()
    }

    fn find(&self, collection: &str, id: &str) -> Option<&Value> {
        self.docs(collection).iter().find(|d| text(d, "_id") == Some(id))
    }

    fn find_mut(&mut self, collection: &str, id: &str) -> Option<&mut Value> {
        self.docs_mut(collection).iter_mut().find(|d| text(d, "_id") == Some(id))
    }

    fn user(&self, id: &str) -> Option<&Value> {
        self.find("users", id)
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .route("/auth/profile", put(update_profile))
        .route("/admin/stats", get(admin_stats))
        .route("/admin/users/{id}/role", patch(set_role))
        .route("/pets", get(list_pets).post(create_pet))
        .route("/surrenders", get(list_surrenders).post(create_surrender))
        .route("/{collection}", get(list).post(create))
        .route("/{collection}/{id}", get(fetch).put(update).delete(remove))
        .route("/{collection}/{id}/status", patch(set_status))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

/// All routes mounted under `/api`, the prefix the client defaults to.
pub fn api_app() -> Router {
    Router::new().nest("/api", app())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, api_app()).await
}

// ---------------------------------------------------------------------------
// Errors & auth
// ---------------------------------------------------------------------------

/// Error response carrying `{"message": ...}` plus optional detail.
#[derive(Debug)]
pub struct Failure {
    status: StatusCode,
    body: Value,
}

impl Failure {
    fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: json!({ "message": message }),
        }
    }

    fn validation(missing: &[&str]) -> Self {
        let errors: Map<String, Value> = missing
            .iter()
            .map(|f| (f.to_string(), Value::String(format!("{f} is required"))))
            .collect();
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: json!({ "message": "Validation failed", "errors": errors }),
        }
    }

    fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found")
    }

    fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN, "Admin access required")
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

type ApiResult<T> = Result<T, Failure>;

#[derive(Debug, Clone)]
struct Caller {
    id: String,
    is_admin: bool,
}

fn caller(store: &Store, headers: &HeaderMap) -> ApiResult<Caller> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| Failure::new(StatusCode::UNAUTHORIZED, "Authentication required"))?;
    let user = store
        .tokens
        .get(token)
        .and_then(|id| store.user(id))
        .ok_or_else(|| Failure::new(StatusCode::UNAUTHORIZED, "Token expired"))?;
    Ok(Caller {
        id: text(user, "_id").unwrap_or_default().to_string(),
        is_admin: user.get("isAdmin").and_then(Value::as_bool).unwrap_or(false),
    })
}

fn admin(store: &Store, headers: &HeaderMap) -> ApiResult<Caller> {
    let who = caller(store, headers)?;
    if who.is_admin {
        Ok(who)
    } else {
        Err(Failure::forbidden())
    }
}

fn owner<'a>(collection: &str, doc: &'a Value) -> Option<&'a str> {
    if collection == "users" {
        text(doc, "_id")
    } else {
        text(doc, "user")
    }
}

fn may_touch(who: &Caller, collection: &str, doc: &Value) -> bool {
    who.is_admin || owner(collection, doc) == Some(who.id.as_str())
}

fn known(collection: &str) -> ApiResult<()> {
    if COLLECTIONS.contains(&collection) {
        Ok(())
    } else {
        Err(Failure::not_found())
    }
}

// ---------------------------------------------------------------------------
// Auth routes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SignupBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

async fn signup(State(db): State<Db>, Json(input): Json<SignupBody>) -> ApiResult<(StatusCode, Json<Value>)> {
    let missing: Vec<&str> = [("name", &input.name), ("email", &input.email), ("password", &input.password)]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect();
    if !missing.is_empty() {
        return Err(Failure::validation(&missing));
    }

    let mut store = db.write().await;
    if store.accounts.contains_key(&input.email) {
        return Err(Failure::new(StatusCode::CONFLICT, "Email already registered"));
    }
    let mut user = json!({
        "_id": Uuid::new_v4().to_string(),
        "name": input.name,
        "email": input.email,
        "isAdmin": false,
        "createdAt": now(),
    });
    if let Some(phone) = input.phone {
        user["phone"] = Value::String(phone);
    }
    let user_id = text(&user, "_id").unwrap_or_default().to_string();
    store.add_account(user.clone(), &input.password);
    let token = store.issue_token(&user_id);
    Ok((StatusCode::CREATED, Json(json!({ "token": token, "user": user }))))
}

async fn login(State(db): State<Db>, Json(input): Json<LoginBody>) -> ApiResult<Json<Value>> {
    let mut store = db.write().await;
    let account = store
        .accounts
        .get(&input.email)
        .filter(|a| a.password == input.password)
        .cloned()
        .ok_or_else(|| Failure::new(StatusCode::BAD_REQUEST, "Invalid email or password"))?;
    let user = store.user(&account.user_id).cloned().ok_or_else(Failure::not_found)?;
    let token = store.issue_token(&account.user_id);
    Ok(Json(json!({ "token": token, "user": user })))
}

async fn me(State(db): State<Db>, headers: HeaderMap) -> ApiResult<Json<Value>> {
    let store = db.read().await;
    let who = caller(&store, &headers)?;
    store.user(&who.id).cloned().map(Json).ok_or_else(Failure::not_found)
}

async fn update_profile(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<Value>,
) -> ApiResult<Json<Value>> {
    let mut store = db.write().await;
    let who = caller(&store, &headers)?;
    apply_user_update(&mut store, &who.id, &input)
}

fn apply_user_update(store: &mut Store, user_id: &str, input: &Value) -> ApiResult<Json<Value>> {
    if let Some(password) = text(input, "password") {
        if let Some(account) = store.accounts.values_mut().find(|a| a.user_id == user_id) {
            account.password = password.to_string();
        }
    }
    let old_email = store.user(user_id).and_then(|u| text(u, "email")).map(str::to_string);
    let user = store.find_mut("users", user_id).ok_or_else(Failure::not_found)?;
    for field in ["name", "email", "phone"] {
        if let Some(value) = input.get(field).filter(|v| v.is_string()) {
            user[field] = value.clone();
        }
    }
    let updated = user.clone();
    if let (Some(old), Some(new)) = (old_email, text(&updated, "email")) {
        if old != new {
            if let Some(account) = store.accounts.remove(&old) {
                store.accounts.insert(new.to_string(), account);
            }
        }
    }
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// Admin routes
// ---------------------------------------------------------------------------

async fn admin_stats(State(db): State<Db>, headers: HeaderMap) -> ApiResult<Json<Value>> {
    let store = db.read().await;
    admin(&store, &headers)?;
    let pending = store
        .docs("adoptions")
        .iter()
        .filter(|d| text(d, "status") == Some("pending"))
        .count();
    Ok(Json(json!({
        "users": store.docs("users").len(),
        "pets": store.docs("pets").len(),
        "adoptions": store.docs("adoptions").len(),
        "pendingAdoptions": pending,
        "surrenders": store.docs("surrenders").len(),
        "bookings": store.docs("bookings").len(),
        "donations": store.docs("donations").len(),
    })))
}

async fn set_role(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(input): Json<Value>,
) -> ApiResult<Json<Value>> {
    let mut store = db.write().await;
    admin(&store, &headers)?;
    let is_admin = input
        .get("isAdmin")
        .and_then(Value::as_bool)
        .ok_or_else(|| Failure::validation(&["isAdmin"]))?;
    let user = store.find_mut("users", &id).ok_or_else(Failure::not_found)?;
    user["isAdmin"] = Value::Bool(is_admin);
    Ok(Json(user.clone()))
}

// ---------------------------------------------------------------------------
// Collection routes
// ---------------------------------------------------------------------------

async fn list_pets(
    state: State<Db>,
    query: Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<Value>>> {
    list(state, Path("pets".to_string()), query, headers).await
}

async fn list_surrenders(
    state: State<Db>,
    query: Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<Value>>> {
    list(state, Path("surrenders".to_string()), query, headers).await
}

async fn list(
    State(db): State<Db>,
    Path(collection): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<Value>>> {
    known(&collection)?;
    let store = db.read().await;
    if PRIVATE.contains(&collection.as_str()) {
        admin(&store, &headers)?;
    }
    Ok(Json(filter_docs(store.docs(&collection), &query)))
}

/// Equality filters on any field, `search` over name/title, `page`/`limit`.
pub fn filter_docs(docs: &[Value], query: &HashMap<String, String>) -> Vec<Value> {
    let search = query.get("search").map(|s| s.to_lowercase());
    let matches = docs.iter().filter(|doc| {
        let fields_match = query
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), "search" | "page" | "limit"))
            .all(|(k, v)| doc.get(k).map(scalar) == Some(v.clone()));
        let search_match = search.as_ref().map_or(true, |term| {
            ["name", "title"]
                .iter()
                .filter_map(|f| text(doc, f))
                .any(|t| t.to_lowercase().contains(term))
        });
        fields_match && search_match
    });

    let limit = query.get("limit").and_then(|l| l.parse::<usize>().ok()).filter(|l| *l > 0);
    match limit {
        Some(limit) => {
            let page = query.get("page").and_then(|p| p.parse::<usize>().ok()).unwrap_or(1).max(1);
            matches.skip((page - 1).saturating_mul(limit)).take(limit).cloned().collect()
        }
        None => matches.cloned().collect(),
    }
}

async fn fetch(
    State(db): State<Db>,
    Path((collection, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    known(&collection)?;
    let store = db.read().await;
    if id == "mine" {
        let who = caller(&store, &headers)?;
        let mine: Vec<Value> = store
            .docs(&collection)
            .iter()
            .filter(|d| owner(&collection, d) == Some(who.id.as_str()))
            .cloned()
            .collect();
        return Ok(Json(mine).into_response());
    }

    let doc = store.find(&collection, &id).ok_or_else(Failure::not_found)?;
    if PRIVATE.contains(&collection.as_str()) {
        let who = caller(&store, &headers)?;
        if !may_touch(&who, &collection, doc) {
            return Err(Failure::forbidden());
        }
    }
    Ok(Json(doc.clone()).into_response())
}

async fn create(
    State(db): State<Db>,
    Path(collection): Path<String>,
    headers: HeaderMap,
    Json(input): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    known(&collection)?;
    insert(&db, &collection, &headers, input).await
}

async fn create_pet(
    State(db): State<Db>,
    headers: HeaderMap,
    multipart: Multipart,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let input = read_form(multipart).await?;
    insert(&db, "pets", &headers, input).await
}

async fn create_surrender(
    State(db): State<Db>,
    headers: HeaderMap,
    multipart: Multipart,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let input = read_form(multipart).await?;
    insert(&db, "surrenders", &headers, input).await
}

/// Form fields stored as numbers; every other text part stays a string.
const NUMERIC_FIELDS: &[&str] = &["age"];

/// Text parts become string fields, `NUMERIC_FIELDS` numbers when they
/// parse; a file part becomes an `image` URL.
async fn read_form(mut multipart: Multipart) -> ApiResult<Value> {
    let bad = |_| Failure::new(StatusCode::BAD_REQUEST, "Malformed form data");
    let mut doc = Map::new();
    while let Some(field) = multipart.next_field().await.map_err(bad)? {
        let name = field.name().unwrap_or_default().to_string();
        if let Some(filename) = field.file_name().map(str::to_string) {
            field.bytes().await.map_err(bad)?;
            doc.insert("image".to_string(), Value::String(format!("/uploads/{filename}")));
        } else {
            let value = field.text().await.map_err(bad)?;
            let value = match value.parse::<u64>() {
                Ok(n) if NUMERIC_FIELDS.contains(&name.as_str()) => Value::from(n),
                _ => Value::String(value),
            };
            doc.insert(name, value);
        }
    }
    Ok(Value::Object(doc))
}

fn required(collection: &str) -> &'static [&'static str] {
    match collection {
        "pets" => &["name", "species"],
        "adoptions" => &["petId"],
        "surrenders" => &["petName", "reason"],
        "bookings" => &["service", "date"],
        "stories" | "blog" => &["title", "content"],
        "volunteers" => &["name", "email"],
        "donations" => &["amount"],
        "contact" => &["name", "email", "message"],
        _ => &[],
    }
}

async fn insert(db: &Db, collection: &str, headers: &HeaderMap, input: Value) -> ApiResult<(StatusCode, Json<Value>)> {
    let Value::Object(mut doc) = input else {
        return Err(Failure::new(StatusCode::BAD_REQUEST, "Expected a JSON object"));
    };
    if collection == "users" {
        return Err(Failure::new(StatusCode::BAD_REQUEST, "Use /auth/signup"));
    }

    let mut store = db.write().await;
    let who = if PUBLIC_WRITES.contains(&collection) {
        caller(&store, headers).ok()
    } else {
        Some(caller(&store, headers)?)
    };
    if ADMIN_WRITES.contains(&collection) && !who.as_ref().is_some_and(|w| w.is_admin) {
        return Err(Failure::forbidden());
    }

    let missing: Vec<&str> = required(collection)
        .iter()
        .copied()
        .filter(|f| doc.get(*f).map_or(true, is_blank))
        .collect();
    if !missing.is_empty() {
        return Err(Failure::validation(&missing));
    }
    if collection == "adoptions" {
        let pet_id = doc.get("petId").and_then(Value::as_str).unwrap_or_default();
        if store.find("pets", pet_id).is_none() {
            return Err(Failure::new(StatusCode::NOT_FOUND, "Pet not found"));
        }
    }

    doc.insert("_id".to_string(), Value::String(Uuid::new_v4().to_string()));
    doc.insert("createdAt".to_string(), Value::String(now()));
    if let Some(who) = &who {
        doc.insert("user".to_string(), Value::String(who.id.clone()));
    }
    if REVIEWED.contains(&collection) {
        doc.entry("status").or_insert_with(|| Value::String("pending".to_string()));
    }
    if collection == "pets" {
        doc.entry("status").or_insert_with(|| Value::String("available".to_string()));
    }

    let doc = Value::Object(doc);
    store.docs_mut(collection).push(doc.clone());
    Ok((StatusCode::CREATED, Json(doc)))
}

async fn update(
    State(db): State<Db>,
    Path((collection, id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(input): Json<Value>,
) -> ApiResult<Json<Value>> {
    known(&collection)?;
    let mut store = db.write().await;
    let who = caller(&store, &headers)?;
    if ADMIN_WRITES.contains(&collection.as_str()) && !who.is_admin {
        return Err(Failure::forbidden());
    }
    let doc = store.find(&collection, &id).ok_or_else(Failure::not_found)?;
    if !may_touch(&who, &collection, doc) {
        return Err(Failure::forbidden());
    }
    if collection == "users" {
        return apply_user_update(&mut store, &id, &input);
    }

    let doc = store.find_mut(&collection, &id).ok_or_else(Failure::not_found)?;
    if let (Value::Object(target), Value::Object(changes)) = (doc, input) {
        for (k, v) in changes {
            if !matches!(k.as_str(), "_id" | "user" | "createdAt") {
                target.insert(k, v);
            }
        }
    }
    store.find(&collection, &id).cloned().map(Json).ok_or_else(Failure::not_found)
}

async fn set_status(
    State(db): State<Db>,
    Path((collection, id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(input): Json<Value>,
) -> ApiResult<Json<Value>> {
    known(&collection)?;
    let mut store = db.write().await;
    admin(&store, &headers)?;
    let status = text(&input, "status")
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| Failure::validation(&["status"]))?
        .to_string();
    let doc = store.find_mut(&collection, &id).ok_or_else(Failure::not_found)?;
    doc["status"] = Value::String(status);
    Ok(Json(doc.clone()))
}

async fn remove(
    State(db): State<Db>,
    Path((collection, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    known(&collection)?;
    let mut store = db.write().await;
    let who = caller(&store, &headers)?;
    let doc = store.find(&collection, &id).ok_or_else(Failure::not_found)?;
    let allowed = if collection == "users" || ADMIN_WRITES.contains(&collection.as_str()) {
        who.is_admin
    } else {
        may_touch(&who, &collection, doc)
    };
    if !allowed {
        return Err(Failure::forbidden());
    }

    store.docs_mut(&collection).retain(|d| text(d, "_id") != Some(id.as_str()));
    if collection == "users" {
        store.accounts.retain(|_, a| a.user_id != id);
        store.tokens.retain(|_, user_id| *user_id != id);
    }
    Ok(Json(json!({ "message": "Deleted" })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn text<'a>(doc: &'a Value, field: &str) -> Option<&'a str> {
    doc.get(field).and_then(Value::as_str)
}

/// Query-comparable rendering of a scalar field.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn now() -> String {
    let secs = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
    secs.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pets() -> Vec<Value> {
        vec![
            json!({"_id": "1", "name": "Rex", "species": "dog", "age": 3}),
            json!({"_id": "2", "name": "Mittens", "species": "cat", "age": 2}),
            json!({"_id": "3", "name": "Rexina", "species": "dog", "age": 5}),
        ]
    }

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn filter_by_field_equality() {
        let out = filter_docs(&pets(), &query(&[("species", "dog")]));
        assert_eq!(out.len(), 2);
        let out = filter_docs(&pets(), &query(&[("age", "2")]));
        assert_eq!(out[0]["name"], "Mittens");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let out = filter_docs(&pets(), &query(&[("search", "REX")]));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn pagination() {
        let out = filter_docs(&pets(), &query(&[("page", "2"), ("limit", "2")]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["_id"], "3");
    }

    #[test]
    fn huge_page_is_empty_not_a_panic() {
        let page = usize::MAX.to_string();
        let out = filter_docs(&pets(), &query(&[("page", page.as_str()), ("limit", "2")]));
        assert!(out.is_empty());
    }

    #[test]
    fn seeded_store_has_admin() {
        let store = Store::seeded();
        let account = store.accounts.get(ADMIN_EMAIL).unwrap();
        let user = store.user(&account.user_id).unwrap();
        assert_eq!(user["isAdmin"], true);
    }

    #[test]
    fn validation_failure_lists_fields() {
        let failure = Failure::validation(&["name"]);
        assert_eq!(failure.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(failure.body["errors"]["name"], "name is required");
    }

    #[test]
    fn blank_values() {
        assert!(is_blank(&Value::Null));
        assert!(is_blank(&json!("  ")));
        assert!(!is_blank(&json!(0)));
    }
}
