use crate::client::PetAdoptClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{Adoption, NewAdoption, RequestStatus, StatusChange};

const ADOPTIONS: &str = "/adoptions";
const MINE: &str = "/adoptions/mine";
const ADOPTION: &str = "/adoptions/:id";
const STATUS: &str = "/adoptions/:id/status";

impl PetAdoptClient {
    /// Every application; admin only on the backend.
    pub fn build_list_adoptions(&self) -> HttpRequest {
        self.request(HttpMethod::Get, ADOPTIONS, &[])
    }

    pub fn build_my_adoptions(&self) -> HttpRequest {
        self.request(HttpMethod::Get, MINE, &[])
    }

    pub fn build_get_adoption(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, ADOPTION, &[id])
    }

    pub fn build_create_adoption(&self, adoption: &NewAdoption) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, ADOPTIONS, &[], adoption)
    }

    pub fn build_update_adoption_status(&self, id: &str, status: RequestStatus) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Patch, STATUS, &[id], &StatusChange { status })
    }

    pub fn build_delete_adoption(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, ADOPTION, &[id])
    }

    pub fn list_adoptions(&self) -> Result<Vec<Adoption>, ApiError> {
        self.gateway().call(self.build_list_adoptions())
    }

    pub fn my_adoptions(&self) -> Result<Vec<Adoption>, ApiError> {
        self.gateway().call(self.build_my_adoptions())
    }

    pub fn get_adoption(&self, id: &str) -> Result<Adoption, ApiError> {
        self.gateway().call(self.build_get_adoption(id))
    }

    pub fn create_adoption(&self, adoption: &NewAdoption) -> Result<Adoption, ApiError> {
        self.gateway().call(self.build_create_adoption(adoption)?)
    }

    pub fn update_adoption_status(&self, id: &str, status: RequestStatus) -> Result<Adoption, ApiError> {
        self.gateway().call(self.build_update_adoption_status(id, status)?)
    }

    pub fn delete_adoption(&self, id: &str) -> Result<(), ApiError> {
        self.gateway().call_unit(self.build_delete_adoption(id))
    }
}
