//! In-memory [`Transport`] that serves canned JSON and records requests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::transport::Transport;
use crate::error::{DevOpsError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Segments joined with `/`, used for route lookup
    pub path: String,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
}

#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, Value>,
    failure: Option<u16>,
    calls: Mutex<Vec<Call>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(path.to_string(), body);
        self
    }

    /// Answer every request with this status.
    pub fn fail_with(mut self, status: u16) -> Self {
        self.failure = Some(status);
        self
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Value> {
        let path = segments.join("/");
        self.calls.lock().unwrap().push(Call {
            path: path.clone(),
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        if let Some(status) = self.failure {
            return Err(DevOpsError::Status {
                status,
                url: path.clone(),
                body: String::new(),
            });
        }

        self.routes
            .get(&path)
            .cloned()
            .ok_or_else(|| DevOpsError::Status {
                status: 404,
                url: path,
                body: String::new(),
            })
    }
}
