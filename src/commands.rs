//! Command tree and runners.
//!
//! Each runner talks to the API through [`CardClient`] and writes pretty JSON
//! (or a bare link) to the given output, so runs can be captured in tests.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::io::Write;
use std::path::PathBuf;

use cards::routes::{self, DEFAULT_API_BASE};
use cards::{
    Card, CardStats, DrawingPatch, ItemId, ItemKind, MessagePatch, NewCard, NewDrawing, NewMessage, WrappedData,
    note_html,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

use crate::client::CardClient;
use crate::config::{Config, DEFAULT_APP_ORIGIN};
use crate::error::CliError;
use crate::payload;

#[derive(Parser, Debug)]
#[command(name = "scribl", about = "Scribl card API CLI")]
pub struct Cli {
    #[arg(long, env = "SCRIBL_API_URL", default_value = DEFAULT_API_BASE)]
    pub base_url: String,

    #[arg(long, env = "SCRIBL_APP_ORIGIN", default_value = DEFAULT_APP_ORIGIN)]
    pub app_origin: String,

    /// Contributor id stamped on added items; a fresh one per run if unset.
    #[arg(long, env = "SCRIBL_USER_ID")]
    pub user_id: Option<String>,

    #[arg(long, env = "SCRIBL_USER_NAME")]
    pub user_name: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            api_url: self.base_url.clone(),
            app_origin: self.app_origin.clone(),
            user_id: self.user_id.clone().unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            user_name: self.user_name.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Card(CardCommand),
    Message(MessageCommand),
    Drawing(DrawingCommand),
    Wrapped(WrappedCommand),
}

#[derive(Args, Debug)]
pub struct CardCommand {
    #[command(subcommand)]
    pub command: CardSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CardSubcommand {
    /// Create a card, or back-fill the recipient of an existing one.
    Create {
        #[arg(long)]
        recipient: String,
        /// Custom link text; a random id when absent.
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        creator: Option<String>,
    },
    Get {
        card_id: String,
    },
    Stats {
        card_id: String,
    },
    /// Invite and gift links for sharing.
    Links {
        card_id: String,
    },
}

#[derive(Args, Debug)]
pub struct MessageCommand {
    #[command(subcommand)]
    pub command: MessageSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MessageSubcommand {
    Add {
        card_id: String,
        /// Message text; HTML is escaped and newlines become line breaks.
        #[arg(long)]
        text: String,
        #[arg(long, default_value_t = 50.0)]
        x: f64,
        #[arg(long, default_value_t = 50.0)]
        y: f64,
        /// Recipient name, so the backend can create a missing card.
        #[arg(long)]
        recipient: Option<String>,
    },
    Update {
        card_id: String,
        message_id: ItemId,
        #[arg(long)]
        text: Option<String>,
        #[command(flatten)]
        placement: PlacementArgs,
    },
    Delete {
        card_id: String,
        message_id: ItemId,
    },
}

#[derive(Args, Debug)]
pub struct DrawingCommand {
    #[command(subcommand)]
    pub command: DrawingSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DrawingSubcommand {
    Add {
        card_id: String,
        /// Image file uploaded as the rasterized drawing.
        #[arg(long)]
        image: PathBuf,
        /// Saved scene (`{elements, paths}` or a legacy element array).
        #[arg(long)]
        scene: Option<PathBuf>,
        #[arg(long, default_value_t = 50.0)]
        x: f64,
        #[arg(long, default_value_t = 50.0)]
        y: f64,
        #[arg(long)]
        recipient: Option<String>,
    },
    Update {
        card_id: String,
        drawing_id: ItemId,
        #[arg(long)]
        image: Option<PathBuf>,
        #[arg(long)]
        scene: Option<PathBuf>,
        #[command(flatten)]
        placement: PlacementArgs,
    },
    Delete {
        card_id: String,
        drawing_id: ItemId,
    },
    /// Where the saved scene would be cropped on export.
    Bounds {
        card_id: String,
        drawing_id: ItemId,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
    },
}

#[derive(Args, Debug)]
pub struct WrappedCommand {
    #[command(subcommand)]
    pub command: WrappedSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum WrappedSubcommand {
    /// The card's wrapped blob merged over defaults.
    Show { card_id: String },
    /// Replace the wrapped blob from a JSON file.
    Set {
        card_id: String,
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Args, Debug, Default, Clone, Copy)]
pub struct PlacementArgs {
    #[arg(long)]
    pub x: Option<f64>,
    #[arg(long)]
    pub y: Option<f64>,
    #[arg(long)]
    pub width: Option<f64>,
    #[arg(long)]
    pub rotation: Option<f64>,
}

/// Sparse message update from flags; `None` when nothing was given.
#[must_use]
pub fn message_patch(text: Option<&str>, placement: PlacementArgs) -> Option<MessagePatch> {
    let patch = MessagePatch {
        content: text.map(note_html),
        x: placement.x,
        y: placement.y,
        width: placement.width,
        rotation: placement.rotation,
        ..MessagePatch::default()
    };
    (!patch.is_empty()).then_some(patch)
}

fn print_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

async fn fetch_card(client: &CardClient, card_id: &str) -> Result<Card, CliError> {
    client.get_card(card_id).await?.ok_or_else(|| CliError::CardNotFound(card_id.to_owned()))
}

/// # Errors
///
/// Returns the first API, file or output failure.
pub async fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let config = cli.config();
    let client = CardClient::new(config.api_url.clone())?;
    match cli.command {
        Command::Card(card) => run_card(&client, &config, card.command, out).await,
        Command::Message(message) => run_message(&client, &config, message.command, out).await,
        Command::Drawing(drawing) => run_drawing(&client, &config, drawing.command, out).await,
        Command::Wrapped(wrapped) => run_wrapped(&client, wrapped.command, out).await,
    }
}

async fn run_card(
    client: &CardClient,
    config: &Config,
    command: CardSubcommand,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        CardSubcommand::Create { recipient, id, creator } => {
            let recipient = recipient.trim();
            if recipient.is_empty() {
                return Err(CliError::BlankRecipient);
            }
            let id = match id.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
                Some(custom) => routes::card_id_for(custom),
                None => routes::random_card_id(),
            };
            let body = NewCard {
                id,
                creator_name: creator.unwrap_or_else(|| config.author().to_owned()),
                recipient_name: recipient.to_owned(),
            };
            let card = client.create_card(&body).await?;
            tracing::info!(card_id = %card.id, "card created");
            print_json(out, &json!({
                "card": card,
                "inviteLink": config.invite_link(&card.id, Some(recipient)),
                "giftLink": config.gift_link(&card.id),
            }))
        }
        CardSubcommand::Get { card_id } => print_json(out, &fetch_card(client, &card_id).await?),
        CardSubcommand::Stats { card_id } => print_json(out, &CardStats::of(&fetch_card(client, &card_id).await?)),
        CardSubcommand::Links { card_id } => {
            let card = client.get_card(&card_id).await?;
            let recipient = card.as_ref().and_then(|c| c.recipient_name.as_deref());
            print_json(out, &json!({
                "inviteLink": config.invite_link(&card_id, recipient),
                "giftLink": config.gift_link(&card_id),
                "giftEditLink": config.gift_edit_link(&card_id),
            }))
        }
    }
}

async fn run_message(
    client: &CardClient,
    config: &Config,
    command: MessageSubcommand,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        MessageSubcommand::Add { card_id, text, x, y, recipient } => {
            let content = note_html(&text);
            if content.is_empty() {
                return Err(CliError::BlankMessage);
            }
            let body = NewMessage {
                content,
                author_name: Some(config.author().to_owned()),
                user_id: Some(config.user_id.clone()),
                x,
                y,
                rotation: 0.0,
                width: None,
                font_family: None,
            };
            let message = client.add_message(&card_id, &body, recipient.as_deref()).await?;
            print_json(out, &message)
        }
        MessageSubcommand::Update { card_id, message_id, text, placement } => {
            let patch = message_patch(text.as_deref(), placement).ok_or(CliError::EmptyPatch)?;
            client.update_message(&card_id, message_id, &patch).await?;
            print_json(out, &patch)
        }
        MessageSubcommand::Delete { card_id, message_id } => {
            client.delete_item(&card_id, ItemKind::Message, message_id).await?;
            writeln!(out, "deleted message {message_id}")?;
            Ok(())
        }
    }
}

async fn run_drawing(
    client: &CardClient,
    config: &Config,
    command: DrawingSubcommand,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        DrawingSubcommand::Add { card_id, image, scene, x, y, recipient } => {
            let body = NewDrawing {
                image_data: payload::image_data_url(&image)?,
                content_json: payload::scene_json(scene.as_deref())?,
                user_id: Some(config.user_id.clone()),
                author_name: Some(config.author().to_owned()),
                x,
                y,
            };
            let drawing = client.add_drawing(&card_id, &body, recipient.as_deref()).await?;
            tracing::info!(%card_id, drawing_id = drawing.id, "drawing added");
            print_json(out, &json!({ "id": drawing.id, "x": drawing.x, "y": drawing.y }))
        }
        DrawingSubcommand::Update { card_id, drawing_id, image, scene, placement } => {
            let patch = DrawingPatch {
                image_data: image.as_deref().map(payload::image_data_url).transpose()?,
                content_json: scene.as_deref().map(|p| payload::scene_json(Some(p))).transpose()?,
                x: placement.x,
                y: placement.y,
                width: placement.width,
                rotation: placement.rotation,
                ..DrawingPatch::default()
            };
            if patch.is_empty() {
                return Err(CliError::EmptyPatch);
            }
            client.update_drawing(&card_id, drawing_id, &patch).await?;
            writeln!(out, "updated drawing {drawing_id}")?;
            Ok(())
        }
        DrawingSubcommand::Delete { card_id, drawing_id } => {
            client.delete_item(&card_id, ItemKind::Drawing, drawing_id).await?;
            writeln!(out, "deleted drawing {drawing_id}")?;
            Ok(())
        }
        DrawingSubcommand::Bounds { card_id, drawing_id, width, height } => {
            let card = fetch_card(client, &card_id).await?;
            let drawing = card.drawing(drawing_id).ok_or_else(|| CliError::ItemNotFound {
                card: card_id.clone(),
                kind: ItemKind::Drawing.as_str(),
                id: drawing_id,
            })?;
            let scene = drawing.content_json.as_deref().ok_or(CliError::NoScene(drawing_id))?;
            print_json(out, &payload::scene_bounds(scene, width, height)?)
        }
    }
}

async fn run_wrapped(client: &CardClient, command: WrappedSubcommand, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        WrappedSubcommand::Show { card_id } => {
            let card = fetch_card(client, &card_id).await?;
            print_json(out, &WrappedData::from_card(&card))
        }
        WrappedSubcommand::Set { card_id, file } => {
            let wrapped = payload::wrapped_data(&file)?;
            client.update_wrapped(&card_id, &wrapped).await?;
            print_json(out, &wrapped)
        }
    }
}
