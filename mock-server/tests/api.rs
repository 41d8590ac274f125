use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Address, Country, Language, Person};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

const PERSON_BODY: &str = r#"{"name":"Ada","surname":"Lovelace","birthdate":"1815-12-10","email":"ada@example.com","phone":"555-0100","addressId":1,"languageIds":[1,2],"countryId":3}"#;

// --- vocabularies ---

#[tokio::test]
async fn languages_are_seeded() {
    let resp = app().oneshot(get_request("/api/languages")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let languages: Vec<Language> = body_json(resp).await;
    assert_eq!(languages.len(), 4);
    assert_eq!(languages[0].name, "English");
    assert_eq!(languages[1].id, 2);
}

#[tokio::test]
async fn countries_are_seeded() {
    let resp = app().oneshot(get_request("/api/countries")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let countries: Vec<Country> = body_json(resp).await;
    assert_eq!(countries.len(), 4);
    assert_eq!(countries[0].name, "Spain");
}

// --- persons ---

#[tokio::test]
async fn list_persons_empty() {
    let resp = app().oneshot(get_request("/api/persons")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let persons: Vec<Person> = body_json(resp).await;
    assert!(persons.is_empty());
}

#[tokio::test]
async fn create_person_returns_201_with_assigned_id() {
    let resp = app()
        .oneshot(json_request("POST", "/api/persons", PERSON_BODY))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let person: Person = body_json(resp).await;
    assert_eq!(person.id, 1);
    assert_eq!(person.surname, "Lovelace");
    assert_eq!(person.language_ids, vec![1, 2]);
}

#[tokio::test]
async fn create_person_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/persons", r#"{"name":"only"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_person_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/api/persons/99", PERSON_BODY))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_person_not_found() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/persons/99")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- addresses ---

#[tokio::test]
async fn create_address_returns_201_with_assigned_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/addresses",
            r#"{"street":"12 Main St","city":"Springfield","state":"IL","zipcode":"62701"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let address: Address = body_json(resp).await;
    assert_eq!(address.id, 1);
    assert_eq!(address.city, "Springfield");
}

#[tokio::test]
async fn update_address_not_found() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/api/addresses/99",
            r#"{"street":"1 Other St","city":"Shelbyville","state":"IL","zipcode":"62565"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- export ---

#[tokio::test]
async fn export_unknown_format_returns_400() {
    let resp = app().oneshot(get_request("/api/export/xlsx")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn export_csv_has_header() {
    let resp = app().oneshot(get_request("/api/export/csv")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"id,name,surname,birthdate,email,phone\n");
}

#[tokio::test]
async fn export_json_empty_list() {
    let resp = app().oneshot(get_request("/api/export/json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"[]");
}

// --- full lifecycle ---

#[tokio::test]
async fn person_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create an address for the person to reference
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/addresses",
            r#"{"street":"12 Main St","city":"Springfield","state":"IL","zipcode":"62701"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let address: Address = body_json(resp).await;

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/persons", PERSON_BODY))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Person = body_json(resp).await;
    let id = created.id;

    // list — one person, insertion order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/persons"))
        .await
        .unwrap();
    let persons: Vec<Person> = body_json(resp).await;
    assert_eq!(persons.len(), 1);
    assert_eq!(persons[0].id, id);

    // update the address in place
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/addresses/{}", address.id),
            r#"{"street":"1 Other St","city":"Shelbyville","state":"IL","zipcode":"62565"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // update the person
    let updated_body = PERSON_BODY.replace("Lovelace", "Byron");
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PUT", &format!("/api/persons/{id}"), &updated_body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Person = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.surname, "Byron");

    // export reflects the update
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/export/csv"))
        .await
        .unwrap();
    let body = body_bytes(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("Byron"));

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/api/persons/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    // list after delete — empty
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/persons"))
        .await
        .unwrap();
    let persons: Vec<Person> = body_json(resp).await;
    assert!(persons.is_empty());
}
