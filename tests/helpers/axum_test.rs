// ABOUTME: Axum HTTP testing utilities for integration tests
// ABOUTME: Drives a Router in-process through tower's oneshot and captures the response

use axum::{
    body::{to_bytes, Body},
    http::{header, request::Builder, HeaderMap, Method, Request},
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower::ServiceExt;

/// One request against an Axum router
pub struct AxumTestRequest {
    builder: Builder,
    body: Body,
}

impl AxumTestRequest {
    fn new(method: Method, uri: &str) -> Self {
        Self {
            builder: Request::builder().method(method).uri(uri),
            body: Body::empty(),
        }
    }

    /// GET `uri`
    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    /// POST `uri`
    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    /// PUT `uri`
    #[allow(dead_code)]
    pub fn put(uri: &str) -> Self {
        Self::new(Method::PUT, uri)
    }

    /// DELETE `uri`
    #[allow(dead_code)]
    pub fn delete(uri: &str) -> Self {
        Self::new(Method::DELETE, uri)
    }

    /// Add a request header
    #[allow(dead_code)]
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Serialize `data` as the body and mark it `application/json`
    pub fn json<T: Serialize>(mut self, data: &T) -> Self {
        let encoded = serde_json::to_vec(data).expect("Failed to serialize JSON");
        self.builder = self
            .builder
            .header(header::CONTENT_TYPE, "application/json");
        self.body = Body::from(encoded);
        self
    }

    /// Use `body` verbatim; the content type is whatever `header` set
    #[allow(dead_code)]
    pub fn raw_body(mut self, body: &str) -> Self {
        self.body = Body::from(body.to_owned());
        self
    }

    /// Run the request to completion
    pub async fn send(self, app: Router) -> AxumTestResponse {
        let request = self
            .builder
            .body(self.body)
            .expect("Failed to build request");
        let response = app
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec();

        AxumTestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Status, headers and fully buffered body of a response
pub struct AxumTestResponse {
    status: u16,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl AxumTestResponse {
    /// Numeric status code
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// A response header as text
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Raw body bytes
    #[allow(dead_code)]
    pub fn bytes(self) -> Vec<u8> {
        self.body
    }

    /// Body decoded as JSON
    pub fn json<T: DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to deserialize JSON response")
    }
}
