mod client;
mod commands;
mod page;
mod render;
mod utils;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use guestlist_core::user::DEFAULT_GUEST_NAME;
use guestlist_core::{RsvpStatus, Session, UserIdentity};

use crate::client::Client;

#[derive(Parser)]
#[command(name = "guestlist")]
#[command(about = "View an event and manage your RSVP")]
struct Cli {
    /// Defaults to `view` when no command is given.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct TargetArgs {
    /// Event to operate on (defaults to the remembered demo event)
    event_id: Option<String>,

    /// Act as this user id instead of the saved guest identity
    #[arg(long)]
    user_id: Option<String>,

    /// Display name to go with --user-id
    #[arg(long)]
    user_name: Option<String>,
}

impl TargetArgs {
    fn user(&self) -> Option<UserIdentity> {
        self.user_id.as_ref().map(|id| UserIdentity {
            id: id.clone(),
            name: self
                .user_name
                .clone()
                .unwrap_or_else(|| DEFAULT_GUEST_NAME.to_string()),
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the event page
    View(TargetArgs),
    /// Toggle your RSVP
    Attend(TargetArgs),
    /// RSVP as going (does nothing if you already are)
    Going(TargetArgs),
    /// RSVP as not going (does nothing if you already are)
    NotGoing(TargetArgs),
    /// Clear the saved event and guest identity
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let client = Client::from_env();
    let session_dir = Session::default_dir()?;

    match cli.command {
        None => commands::view::run(&client, &session_dir, None, None).await,
        Some(Commands::View(args)) => {
            let user = args.user();
            commands::view::run(&client, &session_dir, args.event_id, user).await
        }
        Some(Commands::Attend(args)) => {
            let user = args.user();
            commands::attend::run(&client, &session_dir, args.event_id, user, None).await
        }
        Some(Commands::Going(args)) => {
            let user = args.user();
            commands::attend::run(
                &client,
                &session_dir,
                args.event_id,
                user,
                Some(RsvpStatus::Going),
            )
            .await
        }
        Some(Commands::NotGoing(args)) => {
            let user = args.user();
            commands::attend::run(
                &client,
                &session_dir,
                args.event_id,
                user,
                Some(RsvpStatus::NotGoing),
            )
            .await
        }
        Some(Commands::Reset) => commands::reset::run(&session_dir),
    }
}
