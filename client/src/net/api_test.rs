use super::*;
use crate::net::types::TransactionKind;
use crate::state::session::SessionState;
use crate::test_support::api;
use serde_json::json;
use wiremock::matchers::{body_json, body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// helpers
// =============================================================================

#[test]
fn transaction_endpoint_formats_expected_path() {
    assert_eq!(transaction_endpoint(42), "/api/transaction/42");
}

#[test]
fn daily_quantity_endpoint_formats_expected_path() {
    assert_eq!(daily_quantity_endpoint("CW8.PA"), "/api/transaction/ticker/daily-quantity/CW8.PA");
}

#[test]
fn date_param_is_iso_date() {
    assert_eq!(date_param(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()), "2025-03-04");
}

#[test]
fn transaction_query_page_carries_row_offset() {
    let query = TransactionQuery { user_id: Some(1), page_index: 2, page_size: 20 };
    assert_eq!(query.offset(), 40);
    assert_eq!(
        query.to_query(),
        vec![
            ("user_id".to_owned(), "1".to_owned()),
            ("page_size".to_owned(), "20".to_owned()),
            ("page".to_owned(), "40".to_owned()),
        ]
    );
}

#[test]
fn transaction_query_omits_missing_user() {
    let query = TransactionQuery::default();
    assert_eq!(query.to_query().len(), 2);
    assert_eq!(query.offset(), 0);
}

// =============================================================================
// auth
// =============================================================================

#[tokio::test]
async fn login_posts_form_and_stores_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(body_string("username=alice&password=pw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "jwt-1", "token_type": "bearer" })))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api(&server.uri(), None);
    let token = api.login("alice", "pw").await.unwrap();

    assert_eq!(token.access_token, "jwt-1");
    assert_eq!(api.gateway().session().get().as_deref(), Some("jwt-1"));
    assert_eq!(api.gateway().session().state(), SessionState::Authenticated);
}

#[tokio::test]
async fn failed_login_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "Incorrect username or password" })))
        .mount(&server)
        .await;

    let (api, navigator) = api(&server.uri(), None);
    let err = api.login("alice", "wrong").await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(matches!(err, ApiError::Api { .. }));
    assert_eq!(api.gateway().session().get(), None);
    assert!(navigator.routes().is_empty());
}

#[tokio::test]
async fn register_sends_json_and_surfaces_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REGISTER_PATH))
        .and(body_json(json!({ "username": "bob", "email": "bob@x.fr", "password": "pw" })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "detail": "Username already registered" })))
        .mount(&server)
        .await;

    let (api, _) = api(&server.uri(), None);
    let request = RegisterRequest { username: "bob".into(), email: "bob@x.fr".into(), password: "pw".into() };
    let err = api.register(&request).await.unwrap_err();
    assert_eq!(err.user_message(), "Username already registered");
}

#[tokio::test]
async fn register_success_returns_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REGISTER_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "User created", "id": 12 })))
        .mount(&server)
        .await;

    let (api, _) = api(&server.uri(), None);
    let request = RegisterRequest { username: "c".into(), email: "c@x.fr".into(), password: "pw".into() };
    assert_eq!(api.register(&request).await.unwrap().id, Some(12));
}

#[test]
fn logout_clears_session_and_navigates_to_login() {
    let (api, navigator) = api("http://127.0.0.1:9", Some("tok"));
    api.logout().unwrap();

    assert_eq!(api.gateway().session().state(), SessionState::Anonymous);
    assert_eq!(navigator.routes(), vec![Route::Login]);
}

#[tokio::test]
async fn cached_profile_is_not_served_after_logout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ME_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "username": "alice", "email": "a@x.fr" })))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api(&server.uri(), Some("tok"));
    assert_eq!(api.me().await.unwrap().username, "alice");
    api.logout().unwrap();

    assert!(matches!(api.me().await.unwrap_err(), ApiError::Unauthenticated));
}

// =============================================================================
// reads
// =============================================================================

#[tokio::test]
async fn transactions_sends_offset_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TRANSACTIONS_PATH))
        .and(query_param("page_size", "10"))
        .and(query_param("page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 11, "type": "vente", "ticker": "CW8.PA", "quantity": 1,
            "price": 500.0, "date_of": "2025-02-01", "user_id": 1
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api(&server.uri(), Some("tok"));
    let rows = api
        .transactions(TransactionQuery { user_id: None, page_index: 1, page_size: 10 })
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, TransactionKind::Sell);
}

#[tokio::test]
async fn total_passes_date_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOTAL_PATH))
        .and(query_param("date_param", "2025-03-13"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(900.0)))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api(&server.uri(), Some("tok"));
    let total = api.total(NaiveDate::from_ymd_opt(2025, 3, 13)).await.unwrap();
    assert_eq!(total, 900.0);
}

#[tokio::test]
async fn total_history_passes_period() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOTAL_HISTORY_PATH))
        .and(query_param("period", "3m"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "date": "2025-01-01", "value": 10.0 },
            { "date": "2025-01-02", "value": 12.0 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api(&server.uri(), Some("tok"));
    let points = api.total_history(Period::ThreeMonths).await.unwrap();
    assert_eq!(points.len(), 2);
}

#[tokio::test]
async fn subscription_accepts_plain_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SUBSCRIPTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("premium")))
        .mount(&server)
        .await;

    let (api, _) = api(&server.uri(), Some("tok"));
    assert_eq!(api.subscription().await.unwrap(), "premium");
}

#[tokio::test]
async fn create_transaction_surfaces_invalid_ticker() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRANSACTIONS_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "detail": "Ticker invalide" })))
        .mount(&server)
        .await;

    let (api, _) = api(&server.uri(), Some("tok"));
    let payload = NewTransaction {
        kind: TransactionKind::Buy,
        ticker: "NOPE".into(),
        quantity: 1,
        price: 1.0,
        date_of: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    };
    let err = api.create_transaction(&payload).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message(), "Ticker invalide");
}
