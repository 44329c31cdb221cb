//! Terminal rendering for the event page.

use owo_colors::OwoColorize;

use guestlist_core::{CountsView, RsvpStatus};

use crate::page::PageData;

/// Parse an RFC 3339 timestamp and render it like "Thu, Mar 20, 3:00 PM".
///
/// The timestamp keeps its own offset. An unparseable value is shown
/// verbatim.
pub fn format_date(date_iso: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(date_iso) {
        Ok(dt) => dt.format("%a, %b %-d, %-I:%M %p").to_string(),
        Err(_) => date_iso.to_string(),
    }
}

/// Human label for a status, as used in chip and no-op messages.
pub fn status_label(status: RsvpStatus) -> &'static str {
    match status {
        RsvpStatus::Going => "going",
        RsvpStatus::NotGoing => "not going",
    }
}

/// Render the loaded event page.
pub fn render_page(data: &PageData) -> String {
    let mut lines = Vec::new();

    lines.push(data.event.title.bold().to_string());
    if let Some(url) = &data.event.cover_image_url {
        lines.push(url.dimmed().to_string());
    }
    lines.push(format_date(&data.event.date_iso));
    if let Some(location) = &data.event.location {
        lines.push(location.clone());
    }

    lines.push(String::new());
    lines.push(render_status_line(data.my_status));
    lines.push(render_chips(&data.counts));

    if let Some(description) = &data.event.description {
        lines.push(String::new());
        lines.push(description.clone());
    }

    lines.join("\n")
}

pub fn render_not_found() -> String {
    format!(
        "{}\n{}",
        "Event not found",
        "Run `guestlist reset` to start over with a fresh demo event".dimmed()
    )
}

fn render_status_line(status: Option<RsvpStatus>) -> String {
    match status {
        Some(RsvpStatus::Going) => "You are going ✓".green().to_string(),
        Some(RsvpStatus::NotGoing) => "You are not going".red().to_string(),
        None => "No RSVP yet".dimmed().to_string(),
    }
}

/// The two status chips with live counts. Provisional counts stay marked
/// until the reconciling fetch lands.
fn render_chips(counts: &CountsView) -> String {
    let marker = if counts.provisional {
        format!(" {}", "(updating)".dimmed())
    } else {
        String::new()
    };

    format!(
        "{} {} going   {} {} not going{}",
        "●".green(),
        counts.counts.going,
        "●".red(),
        counts.counts.not_going,
        marker,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use guestlist_core::{AttendanceCounts, Event};

    fn sample_data() -> PageData {
        PageData {
            event: Event {
                id: "evt-1".to_string(),
                title: "Community Beach Cleanup".to_string(),
                description: Some("Bags and gloves provided".to_string()),
                date_iso: "2025-03-20T15:00:00Z".to_string(),
                location: Some("Ocean View Park".to_string()),
                cover_image_url: None,
            },
            counts: CountsView::new(AttendanceCounts {
                going: 7,
                not_going: 2,
            }),
            my_status: None,
        }
    }

    #[test]
    fn formats_rfc3339_dates() {
        assert_eq!(format_date("2025-03-20T15:00:00Z"), "Thu, Mar 20, 3:00 PM");
    }

    #[test]
    fn keeps_the_timestamp_offset() {
        assert_eq!(
            format_date("2025-03-20T15:00:00+02:00"),
            "Thu, Mar 20, 3:00 PM"
        );
    }

    #[test]
    fn formats_early_morning_as_twelve_hour() {
        assert_eq!(format_date("2025-01-01T00:05:00Z"), "Wed, Jan 1, 12:05 AM");
    }

    #[test]
    fn unparseable_dates_render_verbatim() {
        assert_eq!(format_date("next friday"), "next friday");
    }

    #[test]
    fn page_shows_title_date_counts_and_description() {
        let out = render_page(&sample_data());

        assert!(out.contains("Community Beach Cleanup"));
        assert!(out.contains("Thu, Mar 20, 3:00 PM"));
        assert!(out.contains("Ocean View Park"));
        assert!(out.contains("7 going"));
        assert!(out.contains("2 not going"));
        assert!(out.contains("Bags and gloves provided"));
    }

    #[test]
    fn provisional_counts_are_marked() {
        let mut data = sample_data();
        data.counts.apply_optimistic(RsvpStatus::Going);

        let out = render_page(&data);
        assert!(out.contains("updating"));
        assert!(out.contains("8 going"));
        assert!(out.contains("1 not going"));
    }

    #[test]
    fn reconciled_counts_drop_the_marker() {
        let mut data = sample_data();
        data.counts.apply_optimistic(RsvpStatus::Going);
        data.counts.reconcile(AttendanceCounts {
            going: 8,
            not_going: 2,
        });

        let out = render_page(&data);
        assert!(!out.contains("updating"));
        assert!(out.contains("8 going"));
    }

    #[test]
    fn not_found_points_at_reset() {
        let out = render_not_found();
        assert!(out.contains("Event not found"));
        assert!(out.contains("guestlist reset"));
    }
}
