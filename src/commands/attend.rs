use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use guestlist_core::{RsvpStatus, Session, UserIdentity};

use crate::client::Client;
use crate::page::{self, PageState};
use crate::render;
use crate::utils::tui::create_spinner;

/// Toggle the user's RSVP for the event.
///
/// `requested` carries the quick-toggle target: the toggle is skipped
/// when the recorded status already matches it. The toggle itself always
/// computes its own target from the current status.
pub async fn run(
    client: &Client,
    session_dir: &Path,
    event_id: Option<String>,
    user: Option<UserIdentity>,
    requested: Option<RsvpStatus>,
) -> Result<()> {
    let mut session = Session::load(session_dir)?;

    let Some(event_id) = event_id.or_else(|| session.demo_event_id.clone()) else {
        anyhow::bail!(
            "No event yet.\n\n\
            Run `guestlist view` first to set one up."
        );
    };

    let user = page::resolve_user(user, &mut session, session_dir)?;

    let spinner = create_spinner("Loading event…".to_string());
    let (state, outcomes) = page::load(client, &event_id, &user).await;
    spinner.finish_and_clear();
    page::report_failures(&outcomes);

    let mut data = match state {
        PageState::NotFound => {
            println!("{}", render::render_not_found());
            return Ok(());
        }
        PageState::Loaded(data) => data,
    };

    if let Some(target) = requested {
        if data.my_status == Some(target) {
            println!(
                "{}",
                format!("Already {}", render::status_label(target)).dimmed()
            );
            return Ok(());
        }
    }

    let spinner = create_spinner("Updating…".to_string());
    page::toggle(client, &event_id, &user, &mut data).await;
    spinner.finish_and_clear();

    println!("{}", render::render_page(&data));

    Ok(())
}
