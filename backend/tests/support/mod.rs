//! Shared helpers for the HTTP integration suites.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{Method, StatusCode};
use actix_web::{App, test, web};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use mockable::Clock;
use serde_json::Value;

use filmorate::inbound::http::health::HealthState;
use filmorate::inbound::http::state::HttpState;
use filmorate::outbound::memory::{InMemoryFilmRepository, InMemoryUserRepository};
use filmorate::server::build_app;

/// The deterministic "today" every test app runs with: 2024-05-15.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 15).expect("valid calendar date")
}

/// Clock pinned to midnight UTC of a fixed date.
struct FixedClock(NaiveDate);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }
}

/// A full application with fresh in-memory stores and the fixed clock.
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    let http_state = web::Data::new(HttpState::new(
        Arc::new(InMemoryFilmRepository::default()),
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(FixedClock(today())),
    ));
    build_app(health_state, http_state)
}

/// Send a JSON body and decode the JSON response.
pub async fn send_json<S, B>(
    app: &S,
    method: Method,
    path: &str,
    payload: &Value,
) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = test::TestRequest::with_uri(path)
        .method(method)
        .set_json(payload)
        .to_request();
    let response = test::call_service(app, request).await;
    let status = response.status();
    let body = test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON response body");
    (status, value)
}

/// Fetch a path and decode the JSON response.
pub async fn get_json<S, B>(app: &S, path: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = test::TestRequest::get().uri(path).to_request();
    let response = test::call_service(app, request).await;
    let status = response.status();
    let body = test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON response body");
    (status, value)
}
