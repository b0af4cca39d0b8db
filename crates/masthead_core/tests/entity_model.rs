use masthead_core::{Article, Author, Magazine, ValidationError};
use uuid::Uuid;

#[test]
fn author_keeps_name_from_construction() {
    let author = Author::new("Carmen Ortiz").unwrap();

    assert!(!author.id().is_nil());
    assert_eq!(author.name(), "Carmen Ortiz");
}

#[test]
fn author_rejects_empty_name() {
    let err = Author::new("").unwrap_err();
    assert_eq!(err, ValidationError::EmptyAuthorName);
}

#[test]
fn author_rename_is_silently_ignored() {
    let mut author = Author::new("Carmen Ortiz").unwrap();

    let applied = author.try_rename("Someone Else");

    assert!(!applied);
    assert_eq!(author.name(), "Carmen Ortiz");
}

#[test]
fn magazine_name_length_is_bounded_inclusive() {
    assert!(Magazine::new("AB", "Tech").is_ok());
    assert!(Magazine::new("ExactlySixteenCh", "Tech").is_ok());

    let too_short = Magazine::new("A", "Tech").unwrap_err();
    assert_eq!(too_short, ValidationError::MagazineNameLength(1));

    let too_long = Magazine::new("ThisNameIsWayTooLong", "Tech").unwrap_err();
    assert_eq!(too_long, ValidationError::MagazineNameLength(20));
}

#[test]
fn magazine_rejects_empty_category() {
    let err = Magazine::new("Wired", "").unwrap_err();
    assert_eq!(err, ValidationError::EmptyMagazineCategory);
}

#[test]
fn magazine_try_set_keeps_prior_value_on_invalid_input() {
    let mut magazine = Magazine::new("Wired", "Tech").unwrap();

    assert!(!magazine.try_set_name("x"));
    assert_eq!(magazine.name(), "Wired");

    assert!(!magazine.try_set_category(""));
    assert_eq!(magazine.category(), "Tech");
}

#[test]
fn magazine_try_set_applies_valid_input() {
    let mut magazine = Magazine::new("Wired", "Tech").unwrap();

    assert!(magazine.try_set_name("Ars Technica"));
    assert_eq!(magazine.name(), "Ars Technica");

    assert!(magazine.try_set_category("Science"));
    assert_eq!(magazine.category(), "Science");
}

#[test]
fn article_requires_non_empty_title() {
    let author = Author::new("Carmen Ortiz").unwrap();
    let magazine = Magazine::new("Wired", "Tech").unwrap();

    let err = Article::new(author.id(), magazine.id(), "").unwrap_err();
    assert_eq!(err, ValidationError::EmptyArticleTitle);

    let article = Article::new(author.id(), magazine.id(), "Rust in Prod").unwrap();
    assert_eq!(article.title(), "Rust in Prod");
    assert_eq!(article.author(), author.id());
    assert_eq!(article.magazine(), magazine.id());
}

#[test]
fn entities_serialize_with_expected_wire_fields() {
    let author_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let magazine_id = Uuid::parse_str("11111111-2222-4333-8444-666666666666").unwrap();
    let article_id = Uuid::parse_str("11111111-2222-4333-8444-777777777777").unwrap();

    let magazine = Magazine::with_id(magazine_id, "Wired", "Tech").unwrap();
    let json = serde_json::to_value(&magazine).unwrap();
    assert_eq!(json["id"], magazine_id.to_string());
    assert_eq!(json["name"], "Wired");
    assert_eq!(json["category"], "Tech");

    let decoded: Magazine = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, magazine);

    let article = Article::with_id(article_id, author_id, magazine_id, "Rust in Prod").unwrap();
    let json = serde_json::to_value(&article).unwrap();
    assert_eq!(json["author"], author_id.to_string());
    assert_eq!(json["magazine"], magazine_id.to_string());
    assert_eq!(json["title"], "Rust in Prod");
}
