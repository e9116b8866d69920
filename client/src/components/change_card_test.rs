use super::*;

#[test]
fn rise_is_signed_and_trending_up() {
    let card = ChangeCard::compute(1000.0, 900.0, ZeroDivisionPolicy::Zero);
    assert_eq!(card.difference_text(), "+100,00\u{a0}€");
    assert_eq!(card.trend, Trend::Up);
    assert_eq!(card.percent.to_string(), "11.11 %");
}

#[test]
fn equal_totals_are_neutral() {
    let card = ChangeCard::compute(1000.0, 1000.0, ZeroDivisionPolicy::Zero);
    assert_eq!(card.trend, Trend::Flat);
    assert_eq!(card.trend.glyph(), "=");
    assert_eq!(card.difference_text(), "0,00\u{a0}€");
}

#[test]
fn fall_is_trending_down() {
    let card = ChangeCard::compute(850.0, 1000.0, ZeroDivisionPolicy::Zero);
    assert_eq!(card.trend, Trend::Down);
    assert_eq!(card.difference_text(), "-150,00\u{a0}€");
    assert_eq!(card.percent.to_string(), "-15.00 %");
}

#[test]
fn no_value_yesterday_follows_policy() {
    let zero = ChangeCard::compute(500.0, 0.0, ZeroDivisionPolicy::Zero);
    assert_eq!(zero.percent.to_string(), "0.00 %");
    let na = ChangeCard::compute(500.0, 0.0, ZeroDivisionPolicy::NotAvailable);
    assert_eq!(na.percent.to_string(), "N/A");
}
