//! Stateless HTTP request builder and response parser for the records API.
//!
//! # Design
//! `RecordsClient` holds only a `base_url` and carries no mutable state
//! between calls. Each API operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the client deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Address, AddressInput, Country, Language, Person, PersonPayload};

/// Base URL of the records service as deployed alongside the reference UI.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Synchronous, stateless client for the records API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct RecordsClient {
    base_url: String,
}

impl RecordsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_persons(&self) -> HttpRequest {
        get(format!("{}/persons", self.base_url))
    }

    pub fn build_list_languages(&self) -> HttpRequest {
        get(format!("{}/languages", self.base_url))
    }

    pub fn build_list_countries(&self) -> HttpRequest {
        get(format!("{}/countries", self.base_url))
    }

    pub fn build_create_address(&self, input: &AddressInput) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, format!("{}/addresses", self.base_url), input)
    }

    pub fn build_update_address(&self, id: i64, input: &AddressInput) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, format!("{}/addresses/{id}", self.base_url), input)
    }

    pub fn build_create_person(&self, payload: &PersonPayload) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, format!("{}/persons", self.base_url), payload)
    }

    pub fn build_update_person(&self, id: i64, payload: &PersonPayload) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, format!("{}/persons/{id}", self.base_url), payload)
    }

    pub fn build_delete_person(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/persons/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// `format` is passed through unvalidated; the server decides which
    /// export formats exist.
    pub fn build_export_persons(&self, format: &str) -> HttpRequest {
        get(format!("{}/export/{format}", self.base_url))
    }

    pub fn parse_list_persons(&self, response: HttpResponse) -> Result<Vec<Person>, ApiError> {
        check_status(&response, 200)?;
        parse_json(&response)
    }

    pub fn parse_list_languages(&self, response: HttpResponse) -> Result<Vec<Language>, ApiError> {
        check_status(&response, 200)?;
        parse_json(&response)
    }

    pub fn parse_list_countries(&self, response: HttpResponse) -> Result<Vec<Country>, ApiError> {
        check_status(&response, 200)?;
        parse_json(&response)
    }

    pub fn parse_create_address(&self, response: HttpResponse) -> Result<Address, ApiError> {
        check_status(&response, 201)?;
        parse_json(&response)
    }

    /// The update-address response body is discarded; only the status matters.
    pub fn parse_update_address(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)
    }

    pub fn parse_create_person(&self, response: HttpResponse) -> Result<Person, ApiError> {
        check_status(&response, 201)?;
        parse_json(&response)
    }

    pub fn parse_update_person(&self, response: HttpResponse) -> Result<Person, ApiError> {
        check_status(&response, 200)?;
        parse_json(&response)
    }

    pub fn parse_delete_person(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    /// The export payload is opaque to the client: raw bytes, any format.
    pub fn parse_export_persons(&self, response: HttpResponse) -> Result<Vec<u8>, ApiError> {
        check_status(&response, 200)?;
        Ok(response.body)
    }
}

fn get(path: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn json_request<T: serde::Serialize>(
    method: HttpMethod,
    path: String,
    payload: &T,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_slice(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    })
}
