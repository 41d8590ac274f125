//! Domain DTOs for the personal-records API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently;
//! integration tests catch any drift between the two crates. Wire JSON uses
//! camelCase for compound names (`addressId`, `languageIds`, `countryId`).
//! Ids are server-assigned sequential integers. `birthdate` is an opaque
//! string — the client stores and submits it without interpretation.

use serde::{Deserialize, Serialize};

/// A person record as returned by the API. `address_id`, `language_ids`,
/// and `country_id` are foreign keys into the supporting collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub birthdate: String,
    pub email: String,
    pub phone: String,
    pub address_id: i64,
    pub language_ids: Vec<i64>,
    pub country_id: i64,
}

/// A language from the read-only vocabulary. Fetched in bulk, never mutated
/// locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    pub id: i64,
    pub name: String,
}

/// A country from the read-only vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub id: i64,
    pub name: String,
}

/// An address as echoed by the create endpoint. Only `id` is consumed; the
/// address is referenced from [`Person`] by foreign key and never held in a
/// top-level collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

/// Request shape for address create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressInput {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

/// Form data for adding a person. `languages` carries human-readable names;
/// the store resolves them to ids against its loaded [`Language`] collection
/// before submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePerson {
    pub name: String,
    pub surname: String,
    pub birthdate: String,
    pub email: String,
    pub phone: String,
    pub address: AddressInput,
    pub languages: Vec<String>,
    pub country_id: i64,
}

/// Form data for updating a person. Carries the person's `id` and the
/// existing `address_id` — the address is updated in place, never recreated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePerson {
    pub id: i64,
    pub address_id: i64,
    pub name: String,
    pub surname: String,
    pub birthdate: String,
    pub email: String,
    pub phone: String,
    pub address: AddressInput,
    pub languages: Vec<String>,
    pub country_id: i64,
}

/// Assembled wire payload for person create and update: form fields plus the
/// resolved foreign keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonPayload {
    pub name: String,
    pub surname: String,
    pub birthdate: String,
    pub email: String,
    pub phone: String,
    pub address_id: i64,
    pub language_ids: Vec<i64>,
    pub country_id: i64,
}
