//! Wire DTOs for the pet-adoption backend.
//!
//! # Design
//! Documents come back with a Mongo-style `_id`; `id` is accepted as well so
//! the types also read payloads from backends that rename it. Request payloads
//! skip absent optional fields so partial updates only touch what was set.

use serde::{Deserialize, Serialize};

use crate::http::FormData;
use crate::session::Session;

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// Review state shared by adoption and surrender requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Image attached to a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Plain `{ "message": ... }` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct StatusChange<T> {
    pub status: T,
}

// ---------------------------------------------------------------------------
// Auth & users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl AuthResponse {
    /// The credential the login flow persists.
    pub fn session(&self) -> Session {
        Session {
            token: self.token.clone(),
            user_id: self.user.id.clone(),
            is_admin: self.user.is_admin,
            name: Some(self.user.name.clone()),
            email: Some(self.user.email.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminStats {
    pub users: u64,
    pub pets: u64,
    pub adoptions: u64,
    pub pending_adoptions: u64,
    pub surrenders: u64,
    pub bookings: u64,
    pub donations: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoleChange {
    pub is_admin: bool,
}

// ---------------------------------------------------------------------------
// Pets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub species: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "available")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn available() -> String {
    "available".to_string()
}

/// New listing; sent as multipart so a photo can ride along.
#[derive(Debug, Clone, Default)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub size: Option<String>,
    pub description: Option<String>,
    pub photo: Option<Photo>,
}

impl NewPet {
    pub fn to_form(&self) -> FormData {
        let form = FormData::new()
            .text("name", &self.name)
            .text("species", &self.species)
            .opt_text("breed", self.breed.as_ref())
            .opt_text("age", self.age)
            .opt_text("gender", self.gender.as_ref())
            .opt_text("size", self.size.as_ref())
            .opt_text("description", self.description.as_ref());
        attach(form, "image", self.photo.as_ref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Search filters for the pet listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetFilter {
    pub species: Option<String>,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub size: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PetFilter {
    pub fn species(mut self, species: &str) -> Self {
        self.species = Some(species.to_string());
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn search(mut self, term: &str) -> Self {
        self.search = Some(term.to_string());
        self
    }

    pub fn page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Query pairs in a stable order; unset filters are left out.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("species", &self.species),
            ("breed", &self.breed),
            ("gender", &self.gender),
            ("size", &self.size),
            ("status", &self.status),
            ("search", &self.search),
        ];
        let numbers = [("page", self.page), ("limit", self.limit)];
        text.into_iter()
            .filter_map(|(k, v)| v.clone().map(|v| (k, v)))
            .chain(numbers.into_iter().filter_map(|(k, v)| v.map(|v| (k, v.to_string()))))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Adoptions & surrenders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adoption {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub pet_id: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdoption {
    pub pet_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surrender {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub pet_name: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewSurrender {
    pub pet_name: String,
    pub species: String,
    pub reason: String,
    pub age: Option<u32>,
    pub photo: Option<Photo>,
}

impl NewSurrender {
    pub fn to_form(&self) -> FormData {
        let form = FormData::new()
            .text("petName", &self.pet_name)
            .text("species", &self.species)
            .text("reason", &self.reason)
            .opt_text("age", self.age);
        attach(form, "image", self.photo.as_ref())
    }
}

fn attach(form: FormData, field: &str, photo: Option<&Photo>) -> FormData {
    match photo {
        Some(p) => form.file(field, &p.filename, &p.content_type, p.bytes.clone()),
        None => form,
    }
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub service: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<String>,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub service: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Community: stories, volunteers, donations, contact, blog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStory {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default)]
    pub status: RequestStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerApplication {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogPostInput {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogPostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_reads_mongo_and_plain_ids() {
        let a: Pet = serde_json::from_str(r#"{"_id":"p1","name":"Rex","species":"dog"}"#).unwrap();
        let b: Pet = serde_json::from_str(r#"{"id":"p1","name":"Rex","species":"dog"}"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.status, "available");
    }

    #[test]
    fn pet_update_only_sends_set_fields() {
        let update = PetUpdate {
            status: Some("adopted".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"status":"adopted"}"#);
    }

    #[test]
    fn filter_query_skips_unset_fields() {
        let filter = PetFilter::default().species("cat").search("tabby").page(2, 20);
        assert_eq!(
            filter.query(),
            vec![
                ("species", "cat".to_string()),
                ("search", "tabby".to_string()),
                ("page", "2".to_string()),
                ("limit", "20".to_string()),
            ]
        );
        assert!(PetFilter::default().query().is_empty());
    }

    #[test]
    fn statuses_are_lowercase_on_the_wire() {
        assert_eq!(serde_json::to_string(&RequestStatus::Approved).unwrap(), r#""approved""#);
        assert_eq!(serde_json::to_string(&BookingStatus::Cancelled).unwrap(), r#""cancelled""#);
        let adoption: Adoption =
            serde_json::from_str(r#"{"_id":"a1","petId":"p1","status":"rejected"}"#).unwrap();
        assert_eq!(adoption.status, RequestStatus::Rejected);
    }

    #[test]
    fn auth_response_becomes_session() {
        let auth: AuthResponse = serde_json::from_str(
            r#"{"token":"t","user":{"_id":"u1","name":"Ada","email":"ada@x.org","isAdmin":true}}"#,
        )
        .unwrap();
        let session = auth.session();
        assert_eq!(session.token, "t");
        assert_eq!(session.user_id, "u1");
        assert!(session.is_admin);
        assert_eq!(session.email.as_deref(), Some("ada@x.org"));
    }

    #[test]
    fn admin_stats_tolerates_missing_counters() {
        let stats: AdminStats = serde_json::from_str(r#"{"users":4,"pendingAdoptions":1}"#).unwrap();
        assert_eq!(stats.users, 4);
        assert_eq!(stats.pending_adoptions, 1);
        assert_eq!(stats.pets, 0);
    }

    #[test]
    fn new_pet_form_includes_photo_part() {
        let pet = NewPet {
            name: "Rex".to_string(),
            species: "dog".to_string(),
            age: Some(3),
            photo: Some(Photo {
                filename: "rex.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![1, 2, 3],
            }),
            ..Default::default()
        };
        let body = pet.to_form().into_body();
        let text = String::from_utf8_lossy(body.as_bytes()).into_owned();
        assert!(text.contains("name=\"name\"\r\n\r\nRex\r\n"));
        assert!(text.contains("name=\"age\"\r\n\r\n3\r\n"));
        assert!(text.contains("filename=\"rex.png\"\r\nContent-Type: image/png"));
        assert!(!text.contains("name=\"breed\""));
    }
}
