use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInput {
    pub name: String,
    pub surname: String,
    pub birthdate: String,
    pub email: String,
    pub phone: String,
    pub address_id: i64,
    pub language_ids: Vec<i64>,
    pub country_id: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

#[derive(Deserialize)]
pub struct AddressInput {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Language {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
}

/// In-memory backing state. Persons keep insertion order because the client
/// treats server order as canonical.
pub struct Db {
    persons: Vec<Person>,
    addresses: HashMap<i64, Address>,
    languages: Vec<Language>,
    countries: Vec<Country>,
    next_person_id: i64,
    next_address_id: i64,
}

impl Db {
    pub fn seeded() -> Self {
        let vocab = |names: &[&str]| -> Vec<(i64, String)> {
            names
                .iter()
                .enumerate()
                .map(|(i, n)| (i as i64 + 1, n.to_string()))
                .collect()
        };
        Self {
            persons: Vec::new(),
            addresses: HashMap::new(),
            languages: vocab(&["English", "French", "German", "Spanish"])
                .into_iter()
                .map(|(id, name)| Language { id, name })
                .collect(),
            countries: vocab(&["Spain", "France", "Germany", "United Kingdom"])
                .into_iter()
                .map(|(id, name)| Country { id, name })
                .collect(),
            next_person_id: 1,
            next_address_id: 1,
        }
    }
}

pub type SharedDb = Arc<RwLock<Db>>;

pub fn app() -> Router {
    let db: SharedDb = Arc::new(RwLock::new(Db::seeded()));
    let api = Router::new()
        .route("/persons", get(list_persons).post(create_person))
        .route("/persons/{id}", put(update_person).delete(delete_person))
        .route("/languages", get(list_languages))
        .route("/countries", get(list_countries))
        .route("/addresses", post(create_address))
        .route("/addresses/{id}", put(update_address))
        .route("/export/{format}", get(export_persons))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_persons(State(db): State<SharedDb>) -> Json<Vec<Person>> {
    Json(db.read().await.persons.clone())
}

async fn create_person(
    State(db): State<SharedDb>,
    Json(input): Json<PersonInput>,
) -> (StatusCode, Json<Person>) {
    let mut db = db.write().await;
    let person = Person {
        id: db.next_person_id,
        name: input.name,
        surname: input.surname,
        birthdate: input.birthdate,
        email: input.email,
        phone: input.phone,
        address_id: input.address_id,
        language_ids: input.language_ids,
        country_id: input.country_id,
    };
    db.next_person_id += 1;
    db.persons.push(person.clone());
    (StatusCode::CREATED, Json(person))
}

async fn update_person(
    State(db): State<SharedDb>,
    Path(id): Path<i64>,
    Json(input): Json<PersonInput>,
) -> Result<Json<Person>, StatusCode> {
    let mut db = db.write().await;
    let person = db
        .persons
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    person.name = input.name;
    person.surname = input.surname;
    person.birthdate = input.birthdate;
    person.email = input.email;
    person.phone = input.phone;
    person.address_id = input.address_id;
    person.language_ids = input.language_ids;
    person.country_id = input.country_id;
    Ok(Json(person.clone()))
}

async fn delete_person(
    State(db): State<SharedDb>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut db = db.write().await;
    let before = db.persons.len();
    db.persons.retain(|p| p.id != id);
    if db.persons.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn list_languages(State(db): State<SharedDb>) -> Json<Vec<Language>> {
    Json(db.read().await.languages.clone())
}

async fn list_countries(State(db): State<SharedDb>) -> Json<Vec<Country>> {
    Json(db.read().await.countries.clone())
}

async fn create_address(
    State(db): State<SharedDb>,
    Json(input): Json<AddressInput>,
) -> (StatusCode, Json<Address>) {
    let mut db = db.write().await;
    let address = Address {
        id: db.next_address_id,
        street: input.street,
        city: input.city,
        state: input.state,
        zipcode: input.zipcode,
    };
    db.next_address_id += 1;
    db.addresses.insert(address.id, address.clone());
    (StatusCode::CREATED, Json(address))
}

async fn update_address(
    State(db): State<SharedDb>,
    Path(id): Path<i64>,
    Json(input): Json<AddressInput>,
) -> Result<Json<Address>, StatusCode> {
    let mut db = db.write().await;
    let address = db.addresses.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    address.street = input.street;
    address.city = input.city;
    address.state = input.state;
    address.zipcode = input.zipcode;
    Ok(Json(address.clone()))
}

async fn export_persons(State(db): State<SharedDb>, Path(format): Path<String>) -> Response {
    let db = db.read().await;
    match format.as_str() {
        "json" => match serde_json::to_vec(&db.persons) {
            Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
            Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        },
        "csv" => {
            let mut out = String::from("id,name,surname,birthdate,email,phone\n");
            for p in &db.persons {
                out.push_str(&format!(
                    "{},{},{},{},{},{}\n",
                    p.id, p.name, p.surname, p.birthdate, p.email, p.phone
                ));
            }
            ([(header::CONTENT_TYPE, "text/csv")], out.into_bytes()).into_response()
        }
        _ => StatusCode::BAD_REQUEST.into_response(),
    }
}
