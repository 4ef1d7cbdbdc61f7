//! Stories, volunteering, donations and the contact form.

use crate::client::PetAdoptClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{
    Acknowledgement, ContactMessage, Donation, NewDonation, NewStory, Story, Volunteer, VolunteerApplication,
};

const STORIES: &str = "/stories";
const VOLUNTEERS: &str = "/volunteers";
const DONATIONS: &str = "/donations";
const CONTACT: &str = "/contact";

impl PetAdoptClient {
    pub fn build_list_stories(&self) -> HttpRequest {
        self.request(HttpMethod::Get, STORIES, &[])
    }

    pub fn build_create_story(&self, story: &NewStory) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, STORIES, &[], story)
    }

    pub fn build_list_volunteers(&self) -> HttpRequest {
        self.request(HttpMethod::Get, VOLUNTEERS, &[])
    }

    pub fn build_apply_volunteer(&self, application: &VolunteerApplication) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, VOLUNTEERS, &[], application)
    }

    pub fn build_list_donations(&self) -> HttpRequest {
        self.request(HttpMethod::Get, DONATIONS, &[])
    }

    pub fn build_create_donation(&self, donation: &NewDonation) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, DONATIONS, &[], donation)
    }

    pub fn build_send_contact_message(&self, message: &ContactMessage) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, CONTACT, &[], message)
    }

    pub fn list_stories(&self) -> Result<Vec<Story>, ApiError> {
        self.gateway().call(self.build_list_stories())
    }

    pub fn create_story(&self, story: &NewStory) -> Result<Story, ApiError> {
        self.gateway().call(self.build_create_story(story)?)
    }

    pub fn list_volunteers(&self) -> Result<Vec<Volunteer>, ApiError> {
        self.gateway().call(self.build_list_volunteers())
    }

    pub fn apply_volunteer(&self, application: &VolunteerApplication) -> Result<Volunteer, ApiError> {
        self.gateway().call(self.build_apply_volunteer(application)?)
    }

    pub fn list_donations(&self) -> Result<Vec<Donation>, ApiError> {
        self.gateway().call(self.build_list_donations())
    }

    pub fn create_donation(&self, donation: &NewDonation) -> Result<Donation, ApiError> {
        self.gateway().call(self.build_create_donation(donation)?)
    }

    pub fn send_contact_message(&self, message: &ContactMessage) -> Result<Acknowledgement, ApiError> {
        self.gateway().call(self.build_send_contact_message(message)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::*;
    use crate::http::HttpMethod;
    use crate::types::{ContactMessage, NewDonation, NewStory, VolunteerApplication};

    #[test]
    fn build_create_story() {
        let req = client()
            .build_create_story(&NewStory {
                title: "Rex found a home".to_string(),
                content: "...".to_string(),
                pet_name: Some("Rex".to_string()),
            })
            .unwrap();
        assert_eq!(req.url, format!("{BASE_URL}/stories"));
        assert_eq!(body_json(&req)["petName"], "Rex");
    }

    #[test]
    fn build_apply_volunteer() {
        let req = client()
            .build_apply_volunteer(&VolunteerApplication {
                name: "Sam".to_string(),
                email: "sam@example.org".to_string(),
                phone: None,
                availability: Some("weekends".to_string()),
                message: None,
            })
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            body_json(&req),
            serde_json::json!({"name": "Sam", "email": "sam@example.org", "availability": "weekends"})
        );
    }

    #[test]
    fn build_create_donation() {
        let req = client()
            .build_create_donation(&NewDonation {
                amount: 25.5,
                name: None,
                email: None,
                message: Some("For the cats".to_string()),
            })
            .unwrap();
        assert_eq!(req.endpoint_key(), "POST /donations");
        assert_eq!(body_json(&req)["amount"], 25.5);
    }

    #[test]
    fn build_send_contact_message() {
        let req = client()
            .build_send_contact_message(&ContactMessage {
                name: "Lee".to_string(),
                email: "lee@example.org".to_string(),
                subject: None,
                message: "Opening hours?".to_string(),
            })
            .unwrap();
        assert_eq!(req.url, format!("{BASE_URL}/contact"));
        assert!(body_json(&req).get("subject").is_none());
    }

    #[test]
    fn listings_are_plain_gets() {
        let c = client();
        for req in [c.build_list_stories(), c.build_list_volunteers(), c.build_list_donations()] {
            assert_eq!(req.method, HttpMethod::Get);
            assert!(req.body.is_none());
        }
    }
}
