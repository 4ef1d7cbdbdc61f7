use crate::client::PetAdoptClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{NewSurrender, RequestStatus, StatusChange, Surrender};

const SURRENDERS: &str = "/surrenders";
const MINE: &str = "/surrenders/mine";
const SURRENDER: &str = "/surrenders/:id";
const STATUS: &str = "/surrenders/:id/status";

impl PetAdoptClient {
    pub fn build_list_surrenders(&self) -> HttpRequest {
        self.request(HttpMethod::Get, SURRENDERS, &[])
    }

    pub fn build_my_surrenders(&self) -> HttpRequest {
        self.request(HttpMethod::Get, MINE, &[])
    }

    pub fn build_create_surrender(&self, surrender: &NewSurrender) -> HttpRequest {
        self.request(HttpMethod::Post, SURRENDERS, &[])
            .with_body(surrender.to_form().into_body())
    }

    pub fn build_update_surrender_status(&self, id: &str, status: RequestStatus) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Patch, STATUS, &[id], &StatusChange { status })
    }

    pub fn build_delete_surrender(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, SURRENDER, &[id])
    }

    pub fn list_surrenders(&self) -> Result<Vec<Surrender>, ApiError> {
        self.gateway().call(self.build_list_surrenders())
    }

    pub fn my_surrenders(&self) -> Result<Vec<Surrender>, ApiError> {
        self.gateway().call(self.build_my_surrenders())
    }

    pub fn create_surrender(&self, surrender: &NewSurrender) -> Result<Surrender, ApiError> {
        self.gateway().call(self.build_create_surrender(surrender))
    }

    pub fn update_surrender_status(&self, id: &str, status: RequestStatus) -> Result<Surrender, ApiError> {
        self.gateway().call(self.build_update_surrender_status(id, status)?)
    }

    pub fn delete_surrender(&self, id: &str) -> Result<(), ApiError> {
        self.gateway().call_unit(self.build_delete_surrender(id))
    }
}
