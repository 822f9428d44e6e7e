use super::*;
use crate::error::MatchError;

#[test]
fn test_parse_lines_one_person_per_line() {
    let roster = parse_roster_lines("Ada\nGrace\nKatherine").unwrap();

    let names: Vec<&str> = roster.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Grace", "Katherine"]);
}

#[test]
fn test_parse_lines_trailing_newline_accepted() {
    let roster = parse_roster_lines("Ada\nGrace\n").unwrap();

    assert_eq!(roster.len(), 2);
}

#[test]
fn test_parse_lines_trims_entries() {
    let roster = parse_roster_lines("  Ada \nGrace\r\n").unwrap();

    assert_eq!(roster[0].name, "Ada");
    assert_eq!(roster[1].name, "Grace");
}

#[test]
fn test_parse_lines_blank_interior_line_rejected() {
    let err = parse_roster_lines("Ada\n\nGrace").unwrap_err();

    match err {
        MatchError::InvalidArgument(message) => assert!(message.contains("line 2")),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn test_parse_lines_empty_input() {
    assert!(parse_roster_lines("").unwrap().is_empty());
    assert!(parse_roster_lines("\n").unwrap().is_empty());
}

#[test]
fn test_parse_lines_defaults_to_blank_interests() {
    let roster = parse_roster_lines("Ada").unwrap();

    // Present but blank, so annotation works without a MissingField error
    assert_eq!(roster[0].interests.as_deref(), Some(""));
}

#[test]
fn test_parse_json_records() {
    let json = r#"[
        {"name": "Ada", "interests": "chess,math", "school": "MIT"},
        {"name": "Grace", "interests": "sailing"}
    ]"#;

    let roster = parse_roster_json(json).unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].name, "Ada");
    assert_eq!(roster[0].interests.as_deref(), Some("chess,math"));
    assert_eq!(roster[0].attrs.get("school").map(String::as_str), Some("MIT"));
    assert!(roster[1].attrs.is_empty());
}

#[test]
fn test_parse_json_missing_interests_is_none() {
    let roster = parse_roster_json(r#"[{"name": "Ada"}]"#).unwrap();

    assert!(roster[0].interests.is_none());
}

#[test]
fn test_parse_json_blank_name_rejected() {
    let err = parse_roster_json(r#"[{"name": "  "}]"#).unwrap_err();

    let match_err = err.downcast_ref::<MatchError>().expect("MatchError");
    assert!(matches!(match_err, MatchError::InvalidArgument(_)));
}

#[test]
fn test_person_serialization_omits_absent_interests() {
    let person = Person {
        name: "Ada".to_string(),
        interests: None,
        attrs: Default::default(),
    };

    let value = serde_json::to_value(&person).unwrap();
    assert!(value.get("interests").is_none());
}

#[test]
fn test_scalar_fields_include_name_and_attrs() {
    let mut person = Person::named("Ada");
    person.attrs.insert("school".to_string(), "MIT".to_string());

    let fields: Vec<(&str, &str)> = person.scalar_fields().collect();
    assert_eq!(fields, vec![("name", "Ada"), ("school", "MIT")]);
}
