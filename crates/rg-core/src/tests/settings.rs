use crate::{
    DEFAULT_MISSION, DEFAULT_SENDER_EMAIL, DEFAULT_SENDER_NAME, Settings, SettingsDocument,
};

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq};

#[test]
fn default_settings_are_fully_populated() {
    let settings = Settings::default();

    assert_that!(settings.mission.as_str(), eq(DEFAULT_MISSION));
    assert_that!(settings.sender_name.as_str(), eq(DEFAULT_SENDER_NAME));
    assert_that!(settings.sender_email.as_str(), eq(DEFAULT_SENDER_EMAIL));
    assert!(!settings.mission.is_empty());
    assert_that!(settings.mission.as_str(), contains_substring("DPP"));
}

#[test]
fn sender_line_formats_name_and_email() {
    let settings = Settings {
        mission: String::from("We sell widgets."),
        sender_name: String::from("Widget Team"),
        sender_email: String::from("hello@widgets.example"),
    };

    assert_that!(
        settings.sender_line().as_str(),
        eq("Widget Team <hello@widgets.example>")
    );
}

#[test]
fn document_serializes_with_camel_case_field_names() {
    let doc = SettingsDocument::from(Settings::default());
    let json = serde_json::to_value(&doc).unwrap();

    assert!(json.get("senderName").is_some());
    assert!(json.get("senderEmail").is_some());
    assert!(json.get("mission").is_some());
    assert!(json.get("sender_name").is_none());
}
