//! The event page flow: bootstrap, concurrent fetches, and the RSVP
//! toggle with its optimistic count update.

use std::path::Path;

use anyhow::Result;
use chrono::{Duration, Utc};
use owo_colors::OwoColorize;

use guestlist_core::{
    toggle_target, AttendanceCounts, CountsView, Event, RsvpStatus, Session, UserIdentity,
};

use crate::client::{Client, CreateEventRequest};

/// What the page shows once the fetch phase has settled.
pub enum PageState {
    NotFound,
    Loaded(PageData),
}

pub struct PageData {
    pub event: Event,
    pub counts: CountsView,
    pub my_status: Option<RsvpStatus>,
}

/// Per-resource outcome of the parallel fetch phase.
pub struct FetchOutcome {
    pub resource: &'static str,
    pub error: Option<String>,
}

impl FetchOutcome {
    fn ok(resource: &'static str) -> Self {
        FetchOutcome {
            resource,
            error: None,
        }
    }

    fn failed(resource: &'static str, err: &anyhow::Error) -> Self {
        FetchOutcome {
            resource,
            error: Some(err.to_string()),
        }
    }
}

/// Log failed fetches to stderr without disturbing the page.
pub fn report_failures(outcomes: &[FetchOutcome]) {
    for outcome in outcomes {
        if let Some(err) = &outcome.error {
            eprintln!(
                "{}",
                format!("warning: {} fetch failed: {}", outcome.resource, err).dimmed()
            );
        }
    }
}

/// The demo event posted on first run so there is something to view.
fn demo_event() -> CreateEventRequest {
    CreateEventRequest {
        title: "Community Beach Cleanup".to_string(),
        description: "Join us for a fun and impactful morning cleaning our local shoreline. \
                      Bags, gloves, and refreshments provided. Families welcome! 🧤🌊"
            .to_string(),
        date_iso: (Utc::now() + Duration::days(3)).to_rfc3339(),
        location: "Ocean View Park, Santa Monica".to_string(),
        cover_image_url:
            "https://images.unsplash.com/photo-1520975922284-9e0ce8273a06?q=80&w=1600&auto=format&fit=crop"
                .to_string(),
    }
}

/// Resolve the event to show: the remembered demo event, or a freshly
/// created one on first run.
///
/// Creation issues at most one request per profile; once an id is
/// remembered no further creation call is made. `None` means creation
/// failed and the caller should stay in the preparing state.
pub async fn ensure_event_id(
    client: &Client,
    session: &mut Session,
    session_dir: &Path,
) -> Result<Option<String>> {
    if let Some(id) = &session.demo_event_id {
        return Ok(Some(id.clone()));
    }

    match client.create_event(&demo_event()).await {
        Ok(Some(id)) => {
            session.demo_event_id = Some(id.clone());
            session.save(session_dir)?;
            Ok(Some(id))
        }
        Ok(None) => {
            eprintln!("{}", "Event creation returned no id".red());
            Ok(None)
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            Ok(None)
        }
    }
}

/// Resolve the acting user: a supplied identity wins, else the persisted
/// guest, else a freshly generated guest persisted for next time.
///
/// A supplied identity is used for this invocation only and never
/// written to the session.
pub fn resolve_user(
    supplied: Option<UserIdentity>,
    session: &mut Session,
    session_dir: &Path,
) -> Result<UserIdentity> {
    if let Some(user) = supplied {
        return Ok(user);
    }

    if let Some(guest) = &session.guest {
        return Ok(guest.clone());
    }

    let guest = UserIdentity::generate();
    session.guest = Some(guest.clone());
    session.save(session_dir)?;
    Ok(guest)
}

/// Fetch event metadata, attendance counts, and own status concurrently.
///
/// Each fetch is isolated: a failure becomes an outcome and falls back
/// to the default value for that resource. The join is the only barrier;
/// the page settles only once all three have.
pub async fn load(
    client: &Client,
    event_id: &str,
    user: &UserIdentity,
) -> (PageState, Vec<FetchOutcome>) {
    let (event, counts, status) = tokio::join!(
        client.get_event(event_id),
        client.get_counts(event_id),
        client.get_rsvp(event_id, &user.id),
    );

    let mut outcomes = Vec::new();

    let event = match event {
        Ok(event) => {
            outcomes.push(FetchOutcome::ok("event"));
            event
        }
        Err(e) => {
            outcomes.push(FetchOutcome::failed("event", &e));
            None
        }
    };

    let counts = match counts {
        Ok(counts) => {
            outcomes.push(FetchOutcome::ok("counts"));
            counts
        }
        Err(e) => {
            outcomes.push(FetchOutcome::failed("counts", &e));
            AttendanceCounts::default()
        }
    };

    let my_status = match status {
        Ok(status) => {
            outcomes.push(FetchOutcome::ok("rsvp"));
            status
        }
        Err(e) => {
            outcomes.push(FetchOutcome::failed("rsvp", &e));
            None
        }
    };

    let state = match event {
        Some(event) => PageState::Loaded(PageData {
            event,
            counts: CountsView::new(counts),
            my_status,
        }),
        None => PageState::NotFound,
    };

    (state, outcomes)
}

/// Run the toggle sequence against `data` in place: POST the opposite
/// status, apply the optimistic delta, then reconcile the counts with
/// the authoritative server value.
pub async fn toggle(client: &Client, event_id: &str, user: &UserIdentity, data: &mut PageData) {
    let target = toggle_target(data.my_status);

    // A transport failure aborts here: no optimistic update, nothing to
    // reconcile. A non-success HTTP status does not.
    if let Err(e) = client.set_rsvp(event_id, user, target).await {
        eprintln!("{}", e.to_string().red());
        return;
    }

    data.my_status = Some(target);
    data.counts.apply_optimistic(target);

    match client.get_counts(event_id).await {
        Ok(authoritative) => data.counts.reconcile(authoritative),
        // The provisional estimate stays visible, still tagged.
        Err(e) => eprintln!(
            "{}",
            format!("warning: count refresh failed: {}", e).dimmed()
        ),
    }
}
