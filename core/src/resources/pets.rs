use crate::client::PetAdoptClient;
use crate::error::ApiError;
use crate::http::{with_query, HttpMethod, HttpRequest};
use crate::types::{NewPet, Pet, PetFilter, PetUpdate};

const PETS: &str = "/pets";
const PET: &str = "/pets/:id";

impl PetAdoptClient {
    pub fn build_list_pets(&self, filter: &PetFilter) -> HttpRequest {
        let mut req = self.request(HttpMethod::Get, PETS, &[]);
        req.url = with_query(req.url, &filter.query());
        req
    }

    pub fn build_get_pet(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, PET, &[id])
    }

    /// Multipart, so the listing photo uploads in the same request.
    pub fn build_create_pet(&self, pet: &NewPet) -> HttpRequest {
        self.request(HttpMethod::Post, PETS, &[])
            .with_body(pet.to_form().into_body())
    }

    pub fn build_update_pet(&self, id: &str, update: &PetUpdate) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, PET, &[id], update)
    }

    pub fn build_delete_pet(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, PET, &[id])
    }

    pub fn list_pets(&self, filter: &PetFilter) -> Result<Vec<Pet>, ApiError> {
        self.gateway().call(self.build_list_pets(filter))
    }

    pub fn get_pet(&self, id: &str) -> Result<Pet, ApiError> {
        self.gateway().call(self.build_get_pet(id))
    }

    pub fn create_pet(&self, pet: &NewPet) -> Result<Pet, ApiError> {
        self.gateway().call(self.build_create_pet(pet))
    }

    pub fn update_pet(&self, id: &str, update: &PetUpdate) -> Result<Pet, ApiError> {
        self.gateway().call(self.build_update_pet(id, update)?)
    }

    pub fn delete_pet(&self, id: &str) -> Result<(), ApiError> {
        self.gateway().call_unit(self.build_delete_pet(id))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::*;
    use crate::http::HttpMethod;
    use crate::types::{NewPet, PetFilter, PetUpdate};

    #[test]
    fn build_list_pets_without_filter() {
        let req = client().build_list_pets(&PetFilter::default());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, format!("{BASE_URL}/pets"));
        assert!(req.body.is_none());
    }

    #[test]
    fn build_list_pets_with_filter() {
        let req = client().build_list_pets(&PetFilter::default().species("dog").status("available"));
        assert_eq!(req.url, format!("{BASE_URL}/pets?species=dog&status=available"));
        assert_eq!(req.endpoint_key(), "GET /pets");
    }

    #[test]
    fn build_get_pet_uses_item_template() {
        let req = client().build_get_pet("64f0c2");
        assert_eq!(req.url, format!("{BASE_URL}/pets/64f0c2"));
        assert_eq!(req.endpoint_key(), "GET /pets/:id");
    }

    #[test]
    fn ids_and_search_terms_are_escaped() {
        let c = client();
        let req = c.build_get_pet("a/b c");
        assert_eq!(req.url, format!("{BASE_URL}/pets/a%2Fb%20c"));
        assert_eq!(req.endpoint_key(), "GET /pets/:id");

        let req = c.build_list_pets(&PetFilter::default().search("golden retriever&co"));
        assert_eq!(req.url, format!("{BASE_URL}/pets?search=golden+retriever%26co"));
    }

    #[test]
    fn build_create_pet_is_multipart() {
        let req = client().build_create_pet(&NewPet {
            name: "Rex".to_string(),
            species: "dog".to_string(),
            ..Default::default()
        });
        assert_eq!(req.method, HttpMethod::Post);
        assert!(req
            .header("content-type")
            .unwrap()
            .starts_with("multipart/form-data; boundary="));
        let text = String::from_utf8_lossy(req.body.as_ref().unwrap().as_bytes()).into_owned();
        assert!(text.contains("Rex"));
    }

    #[test]
    fn build_update_pet_sends_only_changes() {
        let req = client()
            .build_update_pet(
                "p1",
                &PetUpdate {
                    age: Some(4),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.endpoint_key(), "PUT /pets/:id");
        assert_eq!(body_json(&req), serde_json::json!({"age": 4}));
    }

    #[test]
    fn build_delete_pet() {
        let req = client().build_delete_pet("p1");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, format!("{BASE_URL}/pets/p1"));
        assert!(req.body.is_none());
    }
}
