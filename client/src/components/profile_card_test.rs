use super::*;

#[test]
fn initials_take_first_two_characters_uppercased() {
    assert_eq!(initials(Some("alice")), "AL");
    assert_eq!(initials(Some("é")), "É");
}

#[test]
fn initials_fall_back_when_unknown() {
    assert_eq!(initials(None), "UN");
    assert_eq!(initials(Some("")), "UN");
}

#[test]
fn card_without_profile_shows_placeholders() {
    let card = ProfileCard::default();
    assert_eq!(card.initials(), "UN");
    assert_eq!(card.email(), "No email");
    assert_eq!(card.username(), "");
}

#[test]
fn card_with_profile() {
    let card = ProfileCard::new(Some(UserProfile { username: "bob".into(), email: "bob@x.fr".into() }));
    assert_eq!(card.initials(), "BO");
    assert_eq!(card.email(), "bob@x.fr");
}
