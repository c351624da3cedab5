#![allow(dead_code)]

use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::path::PathBuf;
use submission_api::AppState;
use submission_store::SubmissionStore;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Running server plus a client pointed at it.
pub struct TestApp {
    pub client: TestClient,
    pub db_path: Option<PathBuf>,
    _dir: Option<TempDir>,
}

impl TestApp {
    /// Server backed by a fresh JSON file in a temp directory.
    pub async fn spawn() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = dir.path().join("db.json");
        let state = AppState::open(&db_path)
            .await
            .expect("Failed to open store");

        let client = serve(state).await;
        Self {
            client,
            db_path: Some(db_path),
            _dir: Some(dir),
        }
    }

    /// Server backed by a fresh JSON file with the given raw contents.
    pub async fn spawn_with_file_contents(contents: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = dir.path().join("db.json");
        std::fs::write(&db_path, contents).expect("Failed to seed store file");
        let state = AppState::open(&db_path)
            .await
            .expect("Failed to open store");

        let client = serve(state).await;
        Self {
            client,
            db_path: Some(db_path),
            _dir: Some(dir),
        }
    }

    /// Server backed by an arbitrary store implementation.
    pub async fn spawn_with_store(store: impl SubmissionStore + 'static) -> Self {
        let client = serve(AppState::new(store)).await;
        Self {
            client,
            db_path: None,
            _dir: None,
        }
    }

    pub fn file_contents(&self) -> String {
        let path = self.db_path.as_ref().expect("App is not file-backed");
        std::fs::read_to_string(path).expect("Failed to read store file")
    }
}

async fn serve(state: AppState) -> TestClient {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("Failed to bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("Failed to read local addr");
    let app = submission_api::app(state);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    TestClient::new(format!("http://{}", addr))
}

/// Test client wrapper with convenience methods
pub struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn raw(&self) -> &Client {
        &self.client
    }

    pub async fn ping(&self) -> Response {
        self.client
            .get(self.url("/ping"))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn submit(&self, body: &Value) -> Response {
        self.client
            .post(self.url("/submit"))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    /// `/read` with the index passed through verbatim.
    pub async fn read(&self, index: &str) -> Response {
        self.client
            .get(self.url("/read"))
            .query(&[("index", index)])
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn update(&self, index: &str, body: &Value) -> Response {
        self.client
            .put(self.url(&format!("/update/{}", index)))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn delete(&self, index: &str) -> Response {
        self.client
            .delete(self.url(&format!("/delete/{}", index)))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn search(&self, email: &str) -> Response {
        self.client
            .get(self.url("/search"))
            .query(&[("email", email)])
            .send()
            .await
            .expect("Failed to send request")
    }

    /// Submit and expect success
    pub async fn submit_expect_success(&self, body: &Value) {
        let response = self.submit(body).await;
        assert_eq!(
            response.status(),
            StatusCode::OK,
            "Expected 200 OK from /submit, got {}",
            response.status()
        );
        let body: Value = response.json().await.expect("Failed to parse JSON response");
        assert_eq!(body, json!({ "message": "Submission saved successfully" }));
    }

    /// Read and expect success, returning the record
    pub async fn read_expect_success(&self, index: usize) -> Value {
        let response = self.read(&index.to_string()).await;
        assert_eq!(
            response.status(),
            StatusCode::OK,
            "Expected 200 OK from /read?index={}, got {}",
            index,
            response.status()
        );
        response.json().await.expect("Failed to parse JSON response")
    }
}

/// Assert a status code and an `{"error": ...}` body.
pub async fn assert_error(response: Response, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let body: Value = response.json().await.expect("Failed to parse JSON response");
    assert_eq!(body, json!({ "error": message }));
}

/// Test data generators
pub struct TestData;

impl TestData {
    pub fn submission(name: &str, email: &str) -> Value {
        json!({
            "name": name,
            "email": email,
            "phone": "123",
            "github_link": format!("https://github.com/{}", name.to_lowercase()),
            "stopwatch_time": "00:01:00"
        })
    }

    pub fn scenario_submission() -> Value {
        json!({
            "name": "A",
            "email": "a@x.com",
            "phone": "123",
            "github_link": "http://g",
            "stopwatch_time": "00:01:00"
        })
    }
}
