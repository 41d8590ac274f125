//! In-memory mirror of the server-held record collections.
//!
//! # Design
//! `RecordStore` owns the three ordered collections and composes a
//! [`RecordsClient`] with an injected [`Transport`] into whole operations:
//! build the request, execute it, parse the response, commit the result
//! locally. Collections hold whatever order the server returned; the store
//! never re-sorts, deduplicates, or caches across sessions.
//!
//! All methods take `&mut self` and run to completion on the caller's
//! thread. There is no locking and no conflict detection: when a caller
//! interleaves operations on the same record, the last commit wins.

use tracing::{error, warn};

use crate::client::RecordsClient;
use crate::download::DownloadSink;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{Country, CreatePerson, Language, Person, PersonPayload, UpdatePerson};

/// Client-side state store for the personal-records service.
pub struct RecordStore<T: Transport> {
    client: RecordsClient,
    transport: T,
    persons: Vec<Person>,
    languages: Vec<Language>,
    countries: Vec<Country>,
}

impl<T: Transport> RecordStore<T> {
    /// Create an empty store. Collections populate on the first `fetch_*`.
    pub fn new(client: RecordsClient, transport: T) -> Self {
        Self {
            client,
            transport,
            persons: Vec::new(),
            languages: Vec::new(),
            countries: Vec::new(),
        }
    }

    /// Replace the persons collection with the server's current list.
    /// Failures propagate and leave the collection unchanged.
    pub fn fetch_persons(&mut self) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_list_persons())?;
        self.persons = self.client.parse_list_persons(response)?;
        Ok(())
    }

    /// Replace the languages collection with the server's current list.
    /// Failures propagate and leave the collection unchanged.
    pub fn fetch_languages(&mut self) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_list_languages())?;
        self.languages = self.client.parse_list_languages(response)?;
        Ok(())
    }

    /// Replace the countries collection with the server's current list.
    ///
    /// Unlike the other fetches, failures are logged and swallowed: the
    /// caller sees `Ok(())` and the collection stays as it was. The
    /// reference client shipped with this asymmetry and callers may rely
    /// on countries degrading silently, so it is preserved rather than
    /// unified with the propagate policy.
    pub fn fetch_countries(&mut self) -> Result<(), ApiError> {
        let result = self
            .transport
            .execute(self.client.build_list_countries())
            .and_then(|response| self.client.parse_list_countries(response));
        match result {
            Ok(countries) => self.countries = countries,
            Err(err) => warn!(%err, "failed to fetch countries, keeping current list"),
        }
        Ok(())
    }

    /// Create a person: POST the nested address first, then POST the person
    /// with the new address id and the resolved language ids. The
    /// server-echoed person is appended to the local collection.
    ///
    /// If the person request fails after the address request succeeded, the
    /// address is left behind on the server — the API exposes no
    /// address-delete endpoint to compensate with.
    pub fn add_person(&mut self, form: &CreatePerson) -> Result<(), ApiError> {
        let request = self.client.build_create_address(&form.address)?;
        let response = self.transport.execute(request)?;
        let address = self.client.parse_create_address(response)?;

        let payload = PersonPayload {
            name: form.name.clone(),
            surname: form.surname.clone(),
            birthdate: form.birthdate.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            address_id: address.id,
            language_ids: self.resolve_language_ids(&form.languages),
            country_id: form.country_id,
        };
        let request = self.client.build_create_person(&payload)?;
        let response = self.transport.execute(request)?;
        let person = self.client.parse_create_person(response)?;
        self.persons.push(person);
        Ok(())
    }

    /// Update a person: PUT the existing address in place, then PUT the
    /// person. The local entry matching the echoed id is replaced; if no
    /// entry matches, the collection is left untouched.
    pub fn update_person(&mut self, form: &UpdatePerson) -> Result<(), ApiError> {
        let request = self.client.build_update_address(form.address_id, &form.address)?;
        let response = self.transport.execute(request)?;
        self.client.parse_update_address(response)?;

        let payload = PersonPayload {
            name: form.name.clone(),
            surname: form.surname.clone(),
            birthdate: form.birthdate.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            address_id: form.address_id,
            language_ids: self.resolve_language_ids(&form.languages),
            country_id: form.country_id,
        };
        let request = self.client.build_update_person(form.id, &payload)?;
        let response = self.transport.execute(request)?;
        let person = self.client.parse_update_person(response)?;
        if let Some(existing) = self.persons.iter_mut().find(|p| p.id == person.id) {
            *existing = person;
        }
        Ok(())
    }

    /// Delete a person server-side, then drop every local entry with that
    /// id. A filter rather than a lookup: duplicate ids are all removed,
    /// and a missing id is a no-op.
    pub fn delete_person(&mut self, id: i64) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_delete_person(id))?;
        self.client.parse_delete_person(response)?;
        self.persons.retain(|p| p.id != id);
        Ok(())
    }

    /// Fetch the export payload for `format` and hand it to `sink` as
    /// `persons.{format}`. Failures are logged, then returned to the caller.
    pub fn export_persons(&self, format: &str, sink: &mut dyn DownloadSink) -> Result<(), ApiError> {
        let result = self
            .transport
            .execute(self.client.build_export_persons(format))
            .and_then(|response| self.client.parse_export_persons(response))
            .and_then(|bytes| {
                sink.deliver(&format!("persons.{format}"), &bytes)
                    .map_err(|e| ApiError::Download(e.to_string()))
            });
        if let Err(err) = &result {
            error!(%err, format, "failed to export persons");
        }
        result
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Translate language names into ids using the loaded vocabulary.
    /// Result order follows the Language collection, not the input; names
    /// with no loaded match are dropped without error.
    fn resolve_language_ids(&self, names: &[String]) -> Vec<i64> {
        self.languages
            .iter()
            .filter(|lang| names.iter().any(|n| n == &lang.name))
            .map(|lang| lang.id)
            .collect()
    }
}
