use shared::{
    error::ResponderError,
    protocol::{Card, OutboundResponse},
};

use crate::commands::Command;

pub const GREETING_TITLE: &str = "Hello! Nice to meet you!";
pub const INVALID_REQUEST_TITLE: &str = "Invalid Request";

/// Fallback card advertising every command.
pub fn greeting() -> OutboundResponse {
    let mut text = String::from("Here is what I can help with");
    for command in Command::ALL {
        text.push_str(&format!(
            "<br><b>/{}</b> - {}",
            command.slash_name(),
            command.description()
        ));
    }
    OutboundResponse::card(Card::titled(GREETING_TITLE).with_paragraph(text))
}

pub fn invalid_request(error: &ResponderError) -> OutboundResponse {
    OutboundResponse::card(Card::titled(INVALID_REQUEST_TITLE).with_paragraph(error.to_string()))
}
