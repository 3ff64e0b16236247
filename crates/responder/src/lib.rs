//! Command responder for the chat bot webhook.
//!
//! Everything here is a pure function of the request body: decode the event,
//! look the slash command up in the [`CommandTable`], build a text or card
//! reply and encode it. Transport lives in the server crate.

pub mod art;
pub mod banner;
pub mod cards;
pub mod commands;

use serde::Serialize;
use shared::{
    error::ResponderError,
    protocol::{InboundEvent, OutboundResponse},
};
use tracing::{debug, error, info, warn};

pub use banner::{BannerRenderer, FigletRenderer};
pub use commands::{Command, CommandIds, CommandTable};

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";
pub const INTERNAL_ERROR_BODY: &str = "internal error";

/// Status and encoded body to write back to the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    fn json(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: CONTENT_TYPE_JSON,
            body,
        }
    }

    fn internal_error() -> Self {
        Self {
            status: 500,
            content_type: CONTENT_TYPE_TEXT,
            body: INTERNAL_ERROR_BODY.as_bytes().to_vec(),
        }
    }
}

pub struct Responder {
    commands: CommandTable,
    banners: Box<dyn BannerRenderer>,
}

impl Responder {
    pub fn new(commands: CommandTable, banners: Box<dyn BannerRenderer>) -> Self {
        Self { commands, banners }
    }

    /// Default command ids with the standard FIGlet font.
    pub fn standard() -> Result<Self, ResponderError> {
        Ok(Self::new(
            CommandTable::default(),
            Box::new(FigletRenderer::standard()?),
        ))
    }

    /// Handles one webhook request body. Malformed input still gets a 200 with
    /// an explanatory card; only a failure to encode the reply is a 500.
    pub fn handle(&self, raw_body: &[u8]) -> Reply {
        let response = match decode_event(raw_body) {
            Ok(event) => self.respond(&event),
            Err(error) => {
                warn!(%error, body_len = raw_body.len(), "rejecting malformed event");
                cards::invalid_request(&error)
            }
        };
        encode_reply(&response)
    }

    /// Picks the reply for a decoded event: a canned reply for a known slash
    /// command, otherwise the greeting card.
    pub fn respond(&self, event: &InboundEvent) -> OutboundResponse {
        self.command_reply(event).unwrap_or_else(cards::greeting)
    }

    fn command_reply(&self, event: &InboundEvent) -> Option<OutboundResponse> {
        let command_id = event.slash_command()?;
        let Some(command) = self.commands.lookup(command_id) else {
            debug!(%command_id, "no command registered for id");
            return None;
        };
        info!(
            %command_id,
            command = command.slash_name(),
            sender = %event.message.sender.name,
            "dispatching slash command"
        );

        let text = match command {
            Command::HoldMyBeer => art::HOLD_MY_BEER.to_string(),
            Command::Drink => art::DRINK.to_string(),
            Command::Ascii => format!(
                "<{}> says:\n{}",
                event.message.sender.name,
                banner::render_words(self.banners.as_ref(), &event.message.argument_text)
            ),
        };
        Some(OutboundResponse::text(text))
    }
}

pub fn decode_event(raw_body: &[u8]) -> Result<InboundEvent, ResponderError> {
    serde_json::from_slice(raw_body).map_err(ResponderError::malformed)
}

pub fn encode_response<T: Serialize + ?Sized>(response: &T) -> Result<Vec<u8>, ResponderError> {
    serde_json::to_vec(response).map_err(ResponderError::serialization)
}

/// Encodes `response` as a 200 JSON reply, or the fixed 500 if that fails.
pub fn encode_reply<T: Serialize + ?Sized>(response: &T) -> Reply {
    match encode_response(response) {
        Ok(body) => Reply::json(body),
        Err(error) => {
            error!(%error, "failed to encode reply");
            Reply::internal_error()
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
