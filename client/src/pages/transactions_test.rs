use super::*;
use crate::net::api::{TICKER_DIRECTORY_PATH, TRANSACTIONS_PATH};
use crate::test_support::api;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn directory_failure_yields_empty_directory() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TICKER_DIRECTORY_PATH))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let (api, _) = api(&server.uri(), Some("tok"));
    assert!(load_directory(&api).await.is_empty());
}

#[tokio::test]
async fn table_failure_stays_loading() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TRANSACTIONS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (api, _) = api(&server.uri(), Some("tok"));
    assert!(load_table(&api, TableState::default()).await.is_loading());
}

#[tokio::test]
async fn invalid_form_is_not_submitted() {
    let server = MockServer::start().await;
    let (api, _) = api(&server.uri(), Some("tok"));
    let form = TransactionForm { kind: "achat".into(), ..TransactionForm::default() };

    let err = add_transaction(&api, &form, &TickerDirectory::new(), &TableState::default())
        .await
        .unwrap_err();
    assert!(err.is_local());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn add_reloads_from_first_page() {
    let server = MockServer::start().await;
    let row = json!({
        "id": 9, "type": "achat", "ticker": "CW8.PA", "quantity": 1,
        "price": 10.0, "date_of": "2025-05-01", "user_id": 1
    });
    Mock::given(method("POST"))
        .and(path(TRANSACTIONS_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(row.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(TRANSACTIONS_PATH))
        .and(wiremock::matchers::query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([row])))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api(&server.uri(), Some("tok"));
    let form = TransactionForm {
        kind: "achat".into(),
        ticker: "CW8.PA".into(),
        quantity: "1".into(),
        price: "10".into(),
        date_of: "2025-05-01".into(),
    };
    let mut state = TableState::default();
    state.page_index = 4;
    let (created, page) = add_transaction(&api, &form, &TickerDirectory::new(), &state).await.unwrap();

    assert_eq!(created.id, 9);
    assert_eq!(page.state.page_index, 0);
    assert_eq!(page.visible()[0].id, 9);
}

#[tokio::test]
async fn add_keeps_selected_page_size() {
    let server = MockServer::start().await;
    let row = json!({
        "id": 11, "type": "vente", "ticker": "PAEEM.PA", "quantity": 2,
        "price": 24.5, "date_of": "2025-06-02", "user_id": 1
    });
    Mock::given(method("POST"))
        .and(path(TRANSACTIONS_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(row.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(TRANSACTIONS_PATH))
        .and(wiremock::matchers::query_param("page_size", "50"))
        .and(wiremock::matchers::query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([row])))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api(&server.uri(), Some("tok"));
    let form = TransactionForm {
        kind: "vente".into(),
        ticker: "PAEEM.PA".into(),
        quantity: "2".into(),
        price: "24,5".into(),
        date_of: "2025-06-02".into(),
    };
    let mut state = TableState::default();
    assert!(state.set_page_size(50));
    state.page_index = 2;
    state.filter = "paeem".into();

    let (_, page) = add_transaction(&api, &form, &TickerDirectory::new(), &state).await.unwrap();

    assert_eq!(page.state.page_size(), 50);
    assert_eq!(page.state.page_index, 0);
    assert_eq!(page.state.filter, "paeem");
    assert_eq!(page.visible().len(), 1);
}
