// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! In-process double of the booking service contract
//!
//! Implements the documented behavior the tests rely on: POST echoes the
//! submitted booking under a fresh id, GET by id returns the stored object
//! or 404, PUT/DELETE require the auth cookie and answer 403 without it,
//! and /auth trades the admin credentials for a token (bad credentials get
//! HTTP 200 with a `reason` body, like the real service).

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Token issued by the mock /auth endpoint
pub const TOKEN: &str = "abc123";

/// Credentials the mock /auth endpoint accepts
pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "password123";

/// Shared in-memory booking store backing the mock endpoints
#[derive(Clone, Default)]
pub struct BookingStore {
    bookings: Arc<Mutex<HashMap<i64, Value>>>,
    next_id: Arc<AtomicI64>,
}

impl BookingStore {
    fn insert(&self, booking: Value) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.bookings.lock().unwrap().insert(id, booking);
        id
    }

    fn get(&self, id: i64) -> Option<Value> {
        self.bookings.lock().unwrap().get(&id).cloned()
    }

    fn replace(&self, id: i64, booking: Value) -> bool {
        let mut bookings = self.bookings.lock().unwrap();
        if bookings.contains_key(&id) {
            bookings.insert(id, booking);
            true
        } else {
            false
        }
    }

    fn remove(&self, id: i64) -> bool {
        self.bookings.lock().unwrap().remove(&id).is_some()
    }

    fn ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.bookings.lock().unwrap().keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

fn path_id(request: &Request) -> Option<i64> {
    request.url.path().rsplit('/').next()?.parse().ok()
}

struct CreateBooking(BookingStore);

impl Respond for CreateBooking {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match serde_json::from_slice::<Value>(&request.body) {
            Ok(booking) => {
                let id = self.0.insert(booking.clone());
                ResponseTemplate::new(200)
                    .set_body_json(json!({"bookingid": id, "booking": booking}))
            }
            Err(_) => ResponseTemplate::new(400).set_body_string("Bad Request"),
        }
    }
}

struct ListBookings(BookingStore);

impl Respond for ListBookings {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let entries: Vec<Value> = self
            .0
            .ids()
            .into_iter()
            .map(|id| json!({"bookingid": id}))
            .collect();
        ResponseTemplate::new(200).set_body_json(Value::Array(entries))
    }
}

struct GetBooking(BookingStore);

impl Respond for GetBooking {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match path_id(request).and_then(|id| self.0.get(id)) {
            Some(booking) => ResponseTemplate::new(200).set_body_json(booking),
            None => ResponseTemplate::new(404).set_body_string("Not Found"),
        }
    }
}

struct UpdateBooking(BookingStore);

impl Respond for UpdateBooking {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Some(id) = path_id(request) else {
            return ResponseTemplate::new(404).set_body_string("Not Found");
        };
        match serde_json::from_slice::<Value>(&request.body) {
            Ok(booking) if self.0.replace(id, booking.clone()) => {
                ResponseTemplate::new(200).set_body_json(booking)
            }
            Ok(_) => ResponseTemplate::new(404).set_body_string("Not Found"),
            Err(_) => ResponseTemplate::new(400).set_body_string("Bad Request"),
        }
    }
}

struct DeleteBooking(BookingStore);

impl Respond for DeleteBooking {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match path_id(request) {
            // The real service answers DELETE with 201.
            Some(id) if self.0.remove(id) => ResponseTemplate::new(201).set_body_string("Created"),
            _ => ResponseTemplate::new(404).set_body_string("Not Found"),
        }
    }
}

struct IssueToken;

impl Respond for IssueToken {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        if body["username"] == USERNAME && body["password"] == PASSWORD {
            ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN}))
        } else {
            // Bad credentials come back as 200 with a reason, like the real service.
            ResponseTemplate::new(200).set_body_json(json!({"reason": "Bad credentials"}))
        }
    }
}

/// Start a mock booking service honoring the documented contract
pub async fn mock_booking_service() -> MockServer {
    let server = MockServer::start().await;
    let store = BookingStore::default();
    let id_path = r"^/booking/\d+$";
    let auth_cookie = format!("token={TOKEN}");

    Mock::given(method("POST"))
        .and(path("/booking"))
        .respond_with(CreateBooking(store.clone()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/booking"))
        .respond_with(ListBookings(store.clone()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(id_path))
        .respond_with(GetBooking(store.clone()))
        .mount(&server)
        .await;

    // Cookie-guarded mocks are mounted before the 403 fallbacks so an
    // authorized request matches them first.
    Mock::given(method("PUT"))
        .and(path_regex(id_path))
        .and(header("cookie", auth_cookie.as_str()))
        .respond_with(UpdateBooking(store.clone()))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path_regex(id_path))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path_regex(id_path))
        .and(header("cookie", auth_cookie.as_str()))
        .respond_with(DeleteBooking(store))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path_regex(id_path))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(IssueToken)
        .mount(&server)
        .await;

    server
}

/// Booking service client bound to a mock server
pub fn service_for(server: &MockServer) -> tern::BookingService {
    let config = tern::EndpointConfig::for_base_url(server.uri()).unwrap();
    tern::BookingService::with_config(config).unwrap()
}
