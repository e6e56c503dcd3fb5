//! Common test utilities for server tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use flatstore::{Executor, FileStore, Resource, ResourcePaths};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// Router under `/api` over a scratch directory seeded with `files`
pub fn app(files: &[(Resource, Value)]) -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    let paths = ResourcePaths::in_dir(dir.path());
    for (resource, contents) in files {
        std::fs::write(paths.get(*resource), contents.to_string()).unwrap();
    }
    let executor = Executor::new(Arc::new(FileStore::new(paths)));
    (dir, flatstore::server::router(executor, "/api"))
}

/// A response reduced to what the tests look at
pub struct Reply {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl Reply {
    /// Body parsed as JSON
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({}): {:?}", e, self.body))
    }
}

/// Send one request through the router
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Reply {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header("content-type", "application/json");
            Body::from(text.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    Reply { status, body }
}

/// GET shorthand
pub async fn get(app: &Router, uri: &str) -> Reply {
    send(app, "GET", uri, None).await
}
