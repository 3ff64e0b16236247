use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use responder::{banner::render_words, FigletRenderer, Responder};
use shared::{
    domain::{CommandId, EventType},
    protocol::{InboundEvent, Message, SlashCommand, User},
};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the responder on a synthetic event and print the reply.
    Render {
        #[arg(long)]
        command_id: Option<i64>,
        #[arg(long, default_value = "")]
        text: String,
        #[arg(long, default_value = "users/local")]
        sender: String,
        #[arg(long, value_enum, default_value_t = Kind::Message)]
        event_type: Kind,
        /// Print the event JSON that would be posted instead of the reply.
        #[arg(long)]
        show_event: bool,
    },
    /// Print the banner block for the given words.
    Banner { words: Vec<String> },
    /// Feed a raw request body through the responder (`-` reads stdin).
    Replay { path: PathBuf },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Message,
    AddedToSpace,
    RemovedFromSpace,
}

impl From<Kind> for EventType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Message => EventType::Message,
            Kind::AddedToSpace => EventType::AddedToSpace,
            Kind::RemovedFromSpace => EventType::RemovedFromSpace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let responder = Responder::standard()?;

    match cli.command {
        Command::Render {
            command_id,
            text,
            sender,
            event_type,
            show_event,
        } => {
            let event = InboundEvent {
                event_type: event_type.into(),
                message: Message {
                    sender: User {
                        name: sender,
                        ..User::default()
                    },
                    slash_command: command_id.map(|id| SlashCommand {
                        command_id: CommandId(id),
                    }),
                    argument_text: text,
                    ..Message::default()
                },
            };
            if show_event {
                println!("{}", serde_json::to_string_pretty(&event)?);
                return Ok(());
            }
            let body = serde_json::to_vec(&event)?;
            print_reply(&responder, &body)?;
        }
        Command::Banner { words } => {
            let renderer = FigletRenderer::standard()?;
            println!("{}", render_words(&renderer, &words.join(" ")));
        }
        Command::Replay { path } => {
            let body = if path.as_os_str() == "-" {
                let mut buf = Vec::new();
                io::stdin()
                    .read_to_end(&mut buf)
                    .context("failed to read stdin")?;
                buf
            } else {
                fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?
            };
            print_reply(&responder, &body)?;
        }
    }

    Ok(())
}

fn print_reply(responder: &Responder, body: &[u8]) -> Result<()> {
    let reply = responder.handle(body);
    println!("status={} content-type={}", reply.status, reply.content_type);
    match serde_json::from_slice::<serde_json::Value>(&reply.body) {
        Ok(json) => {
            if let Some(text) = json.get("text").and_then(|t| t.as_str()) {
                println!("{text}");
            } else {
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
        }
        Err(_) => println!("{}", String::from_utf8_lossy(&reply.body)),
    }
    Ok(())
}
