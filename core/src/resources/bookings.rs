use crate::client::PetAdoptClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{Booking, BookingUpdate, NewBooking};

const BOOKINGS: &str = "/bookings";
const MINE: &str = "/bookings/mine";
const BOOKING: &str = "/bookings/:id";

impl PetAdoptClient {
    pub fn build_list_bookings(&self) -> HttpRequest {
        self.request(HttpMethod::Get, BOOKINGS, &[])
    }

    pub fn build_my_bookings(&self) -> HttpRequest {
        self.request(HttpMethod::Get, MINE, &[])
    }

    pub fn build_create_booking(&self, booking: &NewBooking) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, BOOKINGS, &[], booking)
    }

    pub fn build_update_booking(&self, id: &str, update: &BookingUpdate) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, BOOKING, &[id], update)
    }

    pub fn build_cancel_booking(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, BOOKING, &[id])
    }

    pub fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.gateway().call(self.build_list_bookings())
    }

    pub fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.gateway().call(self.build_my_bookings())
    }

    pub fn create_booking(&self, booking: &NewBooking) -> Result<Booking, ApiError> {
        self.gateway().call(self.build_create_booking(booking)?)
    }

    pub fn update_booking(&self, id: &str, update: &BookingUpdate) -> Result<Booking, ApiError> {
        self.gateway().call(self.build_update_booking(id, update)?)
    }

    pub fn cancel_booking(&self, id: &str) -> Result<(), ApiError> {
        self.gateway().call_unit(self.build_cancel_booking(id))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::*;
    use crate::http::HttpMethod;
    use crate::types::{BookingStatus, BookingUpdate, NewBooking};

    #[test]
    fn build_create_booking() {
        let req = client()
            .build_create_booking(&NewBooking {
                service: "grooming".to_string(),
                date: "2026-11-02".to_string(),
                time_slot: Some("10:00".to_string()),
                pet_id: None,
                notes: None,
            })
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, format!("{BASE_URL}/bookings"));
        assert_eq!(
            body_json(&req),
            serde_json::json!({"service": "grooming", "date": "2026-11-02", "timeSlot": "10:00"})
        );
    }

    #[test]
    fn build_update_booking_sends_status() {
        let req = client()
            .build_update_booking(
                "b1",
                &BookingUpdate {
                    status: Some(BookingStatus::Confirmed),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.endpoint_key(), "PUT /bookings/:id");
        assert_eq!(body_json(&req), serde_json::json!({"status": "confirmed"}));
    }

    #[test]
    fn build_cancel_booking_deletes() {
        let req = client().build_cancel_booking("b1");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, format!("{BASE_URL}/bookings/b1"));
        assert_eq!(client().build_my_bookings().url, format!("{BASE_URL}/bookings/mine"));
    }
}
