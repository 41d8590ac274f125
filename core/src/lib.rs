//! Client core for the personal-records service.
//!
//! # Overview
//! Mirrors the server-held collections (persons, languages, countries) in an
//! in-memory [`RecordStore`] and issues HTTP requests to create, update,
//! delete, and export person records. Builds `HttpRequest` values and parses
//! `HttpResponse` values without touching the network (host-does-IO pattern);
//! the actual round-trip goes through the [`Transport`] seam.
//!
//! # Design
//! - `RecordsClient` is stateless — it holds only `base_url`.
//! - Each API operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `RecordStore` owns the three collections and composes client + transport
//!   into whole operations: build, execute, parse, commit.
//! - File downloads go through the [`DownloadSink`] capability so the store
//!   stays free of environment-specific UI concerns.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod download;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::RecordsClient;
pub use download::{DirectoryDownloadSink, DownloadSink};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use store::RecordStore;
pub use types::{Address, AddressInput, Country, CreatePerson, Language, Person, PersonPayload, UpdatePerson};
