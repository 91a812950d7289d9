//! In-memory `CenterStore` and request helpers shared by router tests.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use centers_api::{app, AppState, Center, CenterStore, NewCenter, StoreError};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Center>>,
    next_id: Mutex<i32>,
    failing: AtomicBool,
    /// Number of store calls made, to prove validation short-circuits.
    pub calls: AtomicUsize,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl CenterStore for MemoryStore {
    async fn list_centers(&self) -> Result<Vec<Center>, StoreError> {
        self.enter()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert_center(&self, center: &NewCenter) -> Result<i32, StoreError> {
        self.enter()?;
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let id = *next;
        self.rows.lock().unwrap().push(center.clone().into_center(id));
        Ok(id)
    }

    async fn delete_center(&self, id: &str) -> Result<u64, StoreError> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id.to_string() != id);
        Ok((before - rows.len()) as u64)
    }

    async fn delete_all_centers(&self) -> Result<u64, StoreError> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        let n = rows.len() as u64;
        rows.clear();
        Ok(n)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.enter()
    }
}

pub fn test_app(strict_status: bool) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState::new(store.clone(), strict_status);
    (app(state), store)
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
