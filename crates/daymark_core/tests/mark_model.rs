use chrono::NaiveDate;
use daymark_core::{DateMark, SelectionKind, ThemeMode};

fn date(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

#[test]
fn date_mark_serialization_uses_persisted_wire_names() {
    let mark = DateMark::new(date("2024-01-05"), SelectionKind::Type2);

    let json = serde_json::to_value(mark).unwrap();
    assert_eq!(json["date"], "2024-01-05");
    assert_eq!(json["type"], "TYPE_2");

    let decoded: DateMark = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, mark);
}

#[test]
fn primary_constructor_uses_the_ui_driven_kind() {
    let mark = DateMark::primary(date("2024-02-29"));
    assert_eq!(mark.kind, SelectionKind::Primary);
    assert_eq!(mark.date, date("2024-02-29"));
}

#[test]
fn selection_kind_names_are_stable() {
    assert_eq!(SelectionKind::Primary.as_str(), "PRIMARY");
    assert_eq!(SelectionKind::Type15.as_str(), "TYPE_15");
    assert_eq!(SelectionKind::ALL.len(), 15);
}

#[test]
fn selection_kind_decode_is_explicit_about_unknown_names() {
    assert_eq!(
        SelectionKind::decode("TYPE_3"),
        Ok(SelectionKind::Type3)
    );
    let err = SelectionKind::decode("primary").unwrap_err();
    assert!(err.to_string().contains("primary"));
}

#[test]
fn theme_mode_round_trips_through_its_wire_names() {
    for mode in [ThemeMode::Bright, ThemeMode::Dark, ThemeMode::FollowSystem] {
        assert_eq!(ThemeMode::decode(mode.as_str()), Ok(mode));
        let json = serde_json::to_value(mode).unwrap();
        assert_eq!(json, mode.as_str());
    }
    assert!(ThemeMode::decode("BRIGHTISH").is_err());
}

#[test]
fn theme_mode_defaults_to_follow_system() {
    assert_eq!(ThemeMode::default(), ThemeMode::FollowSystem);
}
