#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use wiremock::MockServer;

use boat_waiver::config::{get_configuration, WebhookSettings};
use boat_waiver::domain::NewBooking;
use boat_waiver::storage::{BookingStore, StoreError};
use boat_waiver::telemetry::{get_subscriber, init_subscriber};
use boat_waiver::webhook::WebhookClient;

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::stdout))
            .expect("Failed to install test subscriber");
    } else {
        init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::sink))
            .expect("Failed to install test subscriber");
    }
});

/// Stands in for the bookings table. Rows are kept in memory, or every insert
/// is rejected when built with `failing`.
#[derive(Default)]
pub struct InMemoryStore {
    rows: Mutex<Vec<NewBooking>>,
    reject: bool,
}

impl InMemoryStore {
    pub fn failing() -> Self {
        Self {
            reject: true,
            ..Default::default()
        }
    }

    pub fn rows(&self) -> Vec<NewBooking> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookingStore for InMemoryStore {
    async fn insert(&self, booking: &NewBooking) -> Result<(), StoreError> {
        if self.reject {
            return Err(sqlx::Error::Protocol("relation \"bookings\" is unavailable".into()).into());
        }
        self.rows.lock().unwrap().push(booking.clone());
        Ok(())
    }
}

pub struct TestApp {
    pub addr: String,
    pub store: Arc<InMemoryStore>,
    pub webhook_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_bookings(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/bookings", &self.addr))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw_bookings(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/bookings", &self.addr))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

impl TestApp {
    /// Sends `body` as is, with `content_type` as the only header, if any.
    pub async fn post_bookings_with_content_type(
        &self,
        body: String,
        content_type: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self
            .api_client
            .post(&format!("{}/api/bookings", &self.addr))
            .body(body);
        if let Some(content_type) = content_type {
            request = request.header("Content-Type", content_type);
        }
        request.send().await.expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_store(InMemoryStore::default()).await
}

pub async fn spawn_app_with_store(store: InMemoryStore) -> TestApp {
    Lazy::force(&TRACING);

    let configuration = get_configuration().expect("should load configuration");
    let webhook_server = MockServer::start().await;

    let relay = WebhookClient::new(WebhookSettings {
        url: format!("{}/hooks/bookings", webhook_server.uri()),
        timeout_ms: None,
    })
    .expect("should build webhook client");

    let listener = TcpListener::bind(format!("{}:0", configuration.app.host))
        .expect("failed to bind to random port");
    let port = listener.local_addr().unwrap().port();

    let store = Arc::new(store);
    let server = boat_waiver::run::run(listener, store.clone(), Arc::new(relay))
        .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        addr: format!("http://{}:{}", configuration.app.host, port),
        store,
        webhook_server,
        api_client: reqwest::Client::new(),
    }
}

pub fn jane_doe() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "5125551234",
        "bookingTime": "2025-06-01T13:00",
    })
}
