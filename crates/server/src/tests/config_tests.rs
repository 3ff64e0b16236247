use super::*;

use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_listen_on_8080_with_registered_ids() {
    let settings = Settings::default();
    assert_eq!(settings.bind_addr().expect("addr").port(), 8080);
    assert_eq!(settings.command_ids, CommandIds::default());
    assert!(settings.command_table().is_ok());
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    settings
        .apply_file(
            r#"
bind_addr = "127.0.0.1:9000"
max_body_bytes = 1024
ascii_command_id = 33
"#,
        )
        .expect("parse");
    assert_eq!(settings.server_bind, "127.0.0.1:9000");
    assert_eq!(settings.max_body_bytes, 1024);
    assert_eq!(settings.command_ids.ascii, CommandId(33));
    assert_eq!(settings.command_ids.drink, CommandId(2));
}

#[test]
fn malformed_file_is_reported() {
    let mut settings = Settings::default();
    assert!(settings.apply_file("max_body_bytes = [1, 2").is_err());
}

#[test]
fn file_accepts_quoted_numbers() {
    let mut settings = Settings::default();
    settings
        .apply_file(
            r#"
max_body_bytes = "1024"
drink_command_id = "22"
"#,
        )
        .expect("parse");
    assert_eq!(settings.max_body_bytes, 1024);
    assert_eq!(settings.command_ids.drink, CommandId(22));
}

#[test]
fn unparsable_file_numbers_keep_previous_values() {
    let mut settings = Settings::default();
    settings
        .apply_file("max_body_bytes = \"lots\"\nascii_command_id = \"three\"")
        .expect("parse");
    assert_eq!(settings, Settings::default());
}

#[test]
fn env_overrides_file_and_prefers_app_prefix() {
    let mut settings = Settings::default();
    settings
        .apply_file("bind_addr = \"127.0.0.1:9000\"")
        .expect("parse");
    settings.apply_env(env_from(&[
        ("CHATBOT_BIND", "127.0.0.1:9100"),
        ("APP__BIND_ADDR", "127.0.0.1:9200"),
        ("APP__LOG_FILTER", "debug"),
        ("APP__DRINK_COMMAND_ID", " 12 "),
    ]));
    assert_eq!(settings.server_bind, "127.0.0.1:9200");
    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.command_ids.drink, CommandId(12));
}

#[test]
fn port_variable_sets_wildcard_bind() {
    let mut settings = Settings::default();
    settings.apply_env(env_from(&[("PORT", "3000")]));
    assert_eq!(settings.server_bind, "0.0.0.0:3000");
}

#[test]
fn unparsable_numbers_keep_previous_values() {
    let mut settings = Settings::default();
    settings.apply_env(env_from(&[
        ("APP__MAX_BODY_BYTES", "huge"),
        ("APP__ASCII_COMMAND_ID", "three"),
        ("PORT", "http"),
    ]));
    assert_eq!(settings, Settings::default());
}

#[test]
fn invalid_bind_address_is_rejected() {
    let settings = Settings {
        server_bind: "not-an-address".into(),
        ..Settings::default()
    };
    let err = settings.bind_addr().expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidBindAddress { .. }));
}

#[test]
fn duplicate_command_ids_fail_table_build() {
    let mut settings = Settings::default();
    settings.apply_env(env_from(&[("APP__ASCII_COMMAND_ID", "1")]));
    assert!(matches!(
        settings.command_table(),
        Err(ConfigError::DuplicateCommandId { .. })
    ));
}
