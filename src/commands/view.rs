use std::path::Path;

use anyhow::Result;

use guestlist_core::{Session, UserIdentity};

use crate::client::Client;
use crate::page::{self, PageState};
use crate::render;
use crate::utils::tui::create_spinner;

pub async fn run(
    client: &Client,
    session_dir: &Path,
    event_id: Option<String>,
    user: Option<UserIdentity>,
) -> Result<()> {
    let mut session = Session::load(session_dir)?;

    // An explicit id bypasses the bootstrap entirely.
    let event_id = match event_id {
        Some(id) => Some(id),
        None => {
            let spinner = create_spinner("Preparing your event…".to_string());
            let resolved = page::ensure_event_id(client, &mut session, session_dir).await?;
            match &resolved {
                Some(_) => spinner.finish_and_clear(),
                // Creation failed: the preparing message stays as the
                // final output.
                None => spinner.abandon(),
            }
            resolved
        }
    };

    let Some(event_id) = event_id else {
        return Ok(());
    };

    let user = page::resolve_user(user, &mut session, session_dir)?;

    let spinner = create_spinner("Loading event…".to_string());
    let (state, outcomes) = page::load(client, &event_id, &user).await;
    spinner.finish_and_clear();
    page::report_failures(&outcomes);

    match state {
        PageState::NotFound => println!("{}", render::render_not_found()),
        PageState::Loaded(data) => println!("{}", render::render_page(&data)),
    }

    Ok(())
}
