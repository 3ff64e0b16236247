//! Wire types shared by the responder, the webhook server and the tools.
//!
//! `domain` holds the small value types, `protocol` the inbound event and
//! outbound card/text payloads in the chat platform's JSON layout.

pub mod domain;
pub mod error;
pub mod protocol;
