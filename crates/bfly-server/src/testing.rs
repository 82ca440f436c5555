//! Router harness shared by the handler tests.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use bfly_store::{Document, DocumentStore, StoreCell};
use bfly_types::{Butterfly, Rating, SequenceIdGenerator, User};
use serde_json::Value;
use tower::util::ServiceExt;

use crate::router::build_router;
use crate::state::AppState;

pub(crate) struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed JSON body, `Value::Null` when empty.
    pub body: Value,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION).and_then(|v| v.to_str().ok())
    }
}

pub(crate) struct TestApp {
    pub router: Router,
    pub store: Arc<DocumentStore>,
    pub ids: Arc<SequenceIdGenerator>,
}

/// Two butterflies, three users (the third without ratings), two ratings
/// of `qwertyuio`.
pub(crate) fn fixture() -> Document {
    Document {
        butterflies: vec![
            Butterfly {
                id: "wxyz9876".into(),
                common_name: "test-butterfly".into(),
                species: "Testium butterflius".into(),
                article: "https://example.com/testium_butterflius".into(),
            },
            Butterfly {
                id: "qwertyuio".into(),
                common_name: "test-butterfly-2".into(),
                species: "Testium butterflius redux".into(),
                article: "https://example.com/testium_butterflius_redux".into(),
            },
        ],
        users: vec![
            User { id: "abcd1234".into(), username: "test-user".into() },
            User { id: "test-user-2".into(), username: "test-user-2".into() },
            User { id: "test-user-3".into(), username: "test-user-3".into() },
        ],
        ratings: vec![
            Rating {
                id: "9981xwsi".into(),
                user_id: "abcd1234".into(),
                butterfly_id: "qwertyuio".into(),
                rating: 2.into(),
            },
            Rating {
                id: "9981xwsy".into(),
                user_id: "test-user-2".into(),
                butterfly_id: "qwertyuio".into(),
                rating: 4.into(),
            },
        ],
        extra: Default::default(),
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_document(fixture())
    }

    pub fn with_document(document: Document) -> Self {
        let store = Arc::new(DocumentStore::in_memory(document));
        let ids = Arc::new(SequenceIdGenerator::default());
        let state = AppState::new(Arc::new(StoreCell::from_store(Arc::clone(&store))))
            .with_ids(ids.clone());
        Self {
            router: build_router(state),
            store,
            ids,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };
        self.request(request).await
    }

    /// Send a body verbatim, e.g. to check malformed JSON handling.
    pub async fn send_raw(&self, method: Method, uri: &str, body: &'static str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse { status, headers, body }
    }
}
