//! Shared test helpers: a recording mock transport and catalog fixtures.

#![allow(dead_code)]

use fair_audit::error::{AuditError, Result};
use fair_audit::transport::{HttpResponse, HttpTransport};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

pub const PAGE_URL: &str = "https://catalog.data.gov/dataset/street-names";
pub const DATA_JSON_URL: &str = "https://catalog.data.gov/harvest/object/5f1e2d/data.json";
pub const CSV_URL: &str = "https://data.example.gov/api/views/streets/rows.csv";
pub const JSON_URL: &str = "https://data.example.gov/api/views/streets/rows.json";
pub const VALIDATION_URL: &str = "https://validator.test/shacl";

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

pub fn fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).expect("fixture exists")
}

/// Transport answering from a route table and recording every call.
///
/// Unknown URLs answer 404. POSTs answer from a queue of statuses, then 200.
#[derive(Default)]
pub struct MockTransport {
    routes: HashMap<String, HttpResponse>,
    broken: Vec<String>,
    post_statuses: Mutex<VecDeque<u16>>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The street-names catalog page with its `data.json` and both resources.
    pub fn street_names() -> Self {
        Self::new()
            .route(
                PAGE_URL,
                HttpResponse::new(200, fixture("catalog/street-names.html"))
                    .with_content_type("text/html; charset=utf-8"),
            )
            .route(
                DATA_JSON_URL,
                HttpResponse::new(200, fixture("catalog/street-names.data.json"))
                    .with_content_type("application/json"),
            )
            .route(
                CSV_URL,
                HttpResponse::new(200, fixture("catalog/streets.csv")).with_content_type("text/csv"),
            )
            .route(
                JSON_URL,
                HttpResponse::new(200, br#"[{"name": "Main Street"}]"#.to_vec())
                    .with_content_type("application/json"),
            )
    }

    pub fn route(mut self, url: &str, response: HttpResponse) -> Self {
        self.routes.insert(url.to_string(), response);
        self
    }

    /// Make every call to `url` fail at the transport level.
    pub fn broken(mut self, url: &str) -> Self {
        self.routes.remove(url);
        self.broken.push(url.to_string());
        self
    }

    pub fn post_statuses(self, statuses: &[u16]) -> Self {
        self.post_statuses
            .lock()
            .unwrap()
            .extend(statuses.iter().copied());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls starting with `prefix`, e.g. `"POST "`.
    pub fn count(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn answer(&self, url: &str) -> Result<HttpResponse> {
        if self.broken.iter().any(|u| u == url) {
            return Err(AuditError::network(url, "connection reset"));
        }
        Ok(self
            .routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| HttpResponse::new(404, Vec::new())))
    }
}

impl HttpTransport for MockTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        self.record(format!("GET {url}"));
        self.answer(url)
    }

    fn head(&self, url: &str) -> Result<HttpResponse> {
        self.record(format!("HEAD {url}"));
        self.answer(url).map(|mut r| {
            r.body.clear();
            r
        })
    }

    fn post(&self, url: &str, content_type: &str, _body: &[u8]) -> Result<HttpResponse> {
        self.record(format!("POST {url} {content_type}"));
        let status = self.post_statuses.lock().unwrap().pop_front().unwrap_or(200);
        Ok(HttpResponse::new(status, b"report".to_vec()))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
