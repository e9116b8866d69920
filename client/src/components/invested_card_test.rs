use super::*;
use crate::net::api::{TOTAL_INVESTED_PATH, TOTAL_PATH};
use crate::test_support::api;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn variation_is_relative_to_invested() {
    let card = InvestedCard::compute(1000.0, 800.0, 900.0, ZeroDivisionPolicy::Zero);
    assert_eq!(card.variation.to_string(), "25.00 %");
    assert_eq!(card.gains, 200.0);
    assert_eq!(card.day_change, 100.0);
}

#[test]
fn nothing_invested_gives_zero_variation() {
    let card = InvestedCard::compute(1000.0, 0.0, 1000.0, ZeroDivisionPolicy::Zero);
    assert_eq!(card.variation, Percent::Value(0.0));
}

#[test]
fn nothing_invested_can_report_not_available() {
    let card = InvestedCard::compute(1000.0, 0.0, 1000.0, ZeroDivisionPolicy::NotAvailable);
    assert_eq!(card.variation.to_string(), "N/A");
}

#[test]
fn headline_shows_signed_day_change() {
    let card = InvestedCard::compute(1000.0, 800.0, 900.0, ZeroDivisionPolicy::Zero);
    assert_eq!(card.headline(), "1\u{202f}000,00\u{a0}€ (+100,00\u{a0}€)");
    assert_eq!(card.invested_text(), "800,00\u{a0}€ invested");
    assert_eq!(card.gains_text(), "200,00\u{a0}€ gained since the start");
}

#[tokio::test]
async fn load_reads_yesterday_total_by_date() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOTAL_PATH))
        .and(query_param("date_param", "2025-03-13"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(900.0)))
        .expect(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(TOTAL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(1000.0)))
        .with_priority(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(TOTAL_INVESTED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(800.0)))
        .mount(&server)
        .await;

    let (api, _) = api(&server.uri(), Some("tok"));
    let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    let card = load(&api, today, ZeroDivisionPolicy::Zero).await.unwrap();

    assert_eq!(card.total, 1000.0);
    assert_eq!(card.yesterday_total, 900.0);
    assert_eq!(card.day_change, 100.0);
}
