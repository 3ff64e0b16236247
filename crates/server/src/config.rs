use std::{fs, net::SocketAddr};

use responder::{CommandIds, CommandTable};
use serde::Deserialize;
use shared::{domain::CommandId, error::ConfigError};

pub const SETTINGS_FILE: &str = "chatbot.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub max_body_bytes: usize,
    pub log_filter: String,
    pub command_ids: CommandIds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "0.0.0.0:8080".into(),
            max_body_bytes: 64 * 1024,
            log_filter: "info".into(),
            command_ids: CommandIds::default(),
        }
    }
}

/// Optional keys of `chatbot.toml`. Values may be quoted or bare numbers.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    bind_addr: Option<FileValue>,
    max_body_bytes: Option<FileValue>,
    log_filter: Option<FileValue>,
    holdmybeer_command_id: Option<FileValue>,
    drink_command_id: Option<FileValue>,
    ascii_command_id: Option<FileValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FileValue {
    Integer(i64),
    Text(String),
}

impl FileValue {
    fn into_string(self) -> String {
        match self {
            FileValue::Integer(v) => v.to_string(),
            FileValue::Text(v) => v,
        }
    }

    fn into_command_id(self) -> Option<CommandId> {
        parse_command_id(Some(self.into_string()))
    }
}

impl Settings {
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server_bind
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidBindAddress {
                addr: self.server_bind.clone(),
                reason: e.to_string(),
            })
    }

    pub fn command_table(&self) -> Result<CommandTable, ConfigError> {
        CommandTable::from_ids(self.command_ids)
    }

    fn apply_file(&mut self, raw: &str) -> Result<(), toml::de::Error> {
        let file_cfg: FileSettings = toml::from_str(raw)?;
        if let Some(v) = file_cfg.bind_addr {
            self.server_bind = v.into_string();
        }
        if let Some(v) = file_cfg.max_body_bytes {
            if let Ok(parsed) = v.into_string().trim().parse::<usize>() {
                self.max_body_bytes = parsed;
            }
        }
        if let Some(v) = file_cfg.log_filter {
            self.log_filter = v.into_string();
        }
        if let Some(id) = file_cfg.holdmybeer_command_id.and_then(FileValue::into_command_id) {
            self.command_ids.hold_my_beer = id;
        }
        if let Some(id) = file_cfg.drink_command_id.and_then(FileValue::into_command_id) {
            self.command_ids.drink = id;
        }
        if let Some(id) = file_cfg.ascii_command_id.and_then(FileValue::into_command_id) {
            self.command_ids.ascii = id;
        }
        Ok(())
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(port) = var("PORT") {
            if let Ok(port) = port.parse::<u16>() {
                self.server_bind = format!("0.0.0.0:{port}");
            }
        }
        if let Some(v) = var("CHATBOT_BIND") {
            self.server_bind = v;
        }
        if let Some(v) = var("APP__BIND_ADDR") {
            self.server_bind = v;
        }

        if let Some(v) = var("APP__MAX_BODY_BYTES") {
            if let Ok(parsed) = v.parse::<usize>() {
                self.max_body_bytes = parsed;
            }
        }

        if let Some(v) = var("APP__LOG_FILTER") {
            self.log_filter = v;
        }

        if let Some(id) = parse_command_id(var("APP__HOLDMYBEER_COMMAND_ID")) {
            self.command_ids.hold_my_beer = id;
        }
        if let Some(id) = parse_command_id(var("APP__DRINK_COMMAND_ID")) {
            self.command_ids.drink = id;
        }
        if let Some(id) = parse_command_id(var("APP__ASCII_COMMAND_ID")) {
            self.command_ids.ascii = id;
        }
    }
}

fn parse_command_id(raw: Option<String>) -> Option<CommandId> {
    raw?.trim().parse::<i64>().ok().map(CommandId)
}

/// Defaults, then `chatbot.toml` in the working directory, then environment.
/// A missing file is fine; one that does not parse is an error.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        settings
            .apply_file(&raw)
            .map_err(|e| ConfigError::InvalidFile {
                path: SETTINGS_FILE.into(),
                reason: e.to_string(),
            })?;
    }

    settings.apply_env(|key| std::env::var(key).ok());
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
