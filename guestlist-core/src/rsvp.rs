//! Attendance status and count handling.

use serde::{Deserialize, Serialize};

/// A user's recorded intention to attend an event.
///
/// "No RSVP recorded" is a valid initial server state and is modeled as
/// `Option<RsvpStatus>::None` throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    Going,
    NotGoing,
}

/// The status a toggle moves to from `current`.
///
/// Absent maps to `Going`: a first toggle always opts in.
pub fn toggle_target(current: Option<RsvpStatus>) -> RsvpStatus {
    match current {
        Some(RsvpStatus::Going) => RsvpStatus::NotGoing,
        _ => RsvpStatus::Going,
    }
}

/// Aggregate attendance counts as served by the backend.
///
/// The buckets are signed: the optimistic delta is applied even when the
/// prior status was absent, which can transiently drive a bucket below
/// zero until the reconciling fetch lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceCounts {
    pub going: i64,
    pub not_going: i64,
}

/// The locally displayed counts, tagged while they hold an optimistic
/// estimate rather than an authoritative server value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountsView {
    pub counts: AttendanceCounts,
    pub provisional: bool,
}

impl CountsView {
    pub fn new(counts: AttendanceCounts) -> Self {
        CountsView {
            counts,
            provisional: false,
        }
    }

    /// Apply the local estimate for a toggle to `target`: one head moves
    /// from the other bucket into the target bucket.
    pub fn apply_optimistic(&mut self, target: RsvpStatus) {
        match target {
            RsvpStatus::Going => {
                self.counts.going += 1;
                self.counts.not_going -= 1;
            }
            RsvpStatus::NotGoing => {
                self.counts.not_going += 1;
                self.counts.going -= 1;
            }
        }
        self.provisional = true;
    }

    /// Replace the view with the authoritative server value.
    pub fn reconcile(&mut self, authoritative: AttendanceCounts) {
        self.counts = authoritative;
        self.provisional = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_from_absent_opts_in() {
        assert_eq!(toggle_target(None), RsvpStatus::Going);
    }

    #[test]
    fn toggle_flips_recorded_status() {
        assert_eq!(toggle_target(Some(RsvpStatus::Going)), RsvpStatus::NotGoing);
        assert_eq!(toggle_target(Some(RsvpStatus::NotGoing)), RsvpStatus::Going);
    }

    #[test]
    fn double_toggle_round_trips() {
        for start in [RsvpStatus::Going, RsvpStatus::NotGoing] {
            let once = toggle_target(Some(start));
            let twice = toggle_target(Some(once));
            assert_eq!(twice, start);
        }
    }

    #[test]
    fn status_wire_format_is_snake_case() {
        assert_eq!(
            serde_json::to_string(&RsvpStatus::NotGoing).unwrap(),
            "\"not_going\""
        );
        let status: RsvpStatus = serde_json::from_str("\"going\"").unwrap();
        assert_eq!(status, RsvpStatus::Going);
    }

    #[test]
    fn optimistic_delta_from_absent_can_go_negative() {
        let mut view = CountsView::new(AttendanceCounts {
            going: 0,
            not_going: 0,
        });
        view.apply_optimistic(RsvpStatus::Going);

        assert_eq!(view.counts.going, 1);
        assert_eq!(view.counts.not_going, -1);
        assert!(view.provisional);
    }

    #[test]
    fn optimistic_delta_moves_one_head_between_buckets() {
        let mut view = CountsView::new(AttendanceCounts {
            going: 4,
            not_going: 2,
        });
        view.apply_optimistic(RsvpStatus::NotGoing);

        assert_eq!(view.counts.going, 3);
        assert_eq!(view.counts.not_going, 3);
    }

    #[test]
    fn reconcile_overwrites_and_clears_provisional() {
        let mut view = CountsView::new(AttendanceCounts {
            going: 4,
            not_going: 2,
        });
        view.apply_optimistic(RsvpStatus::Going);

        let authoritative = AttendanceCounts {
            going: 5,
            not_going: 2,
        };
        view.reconcile(authoritative);

        assert_eq!(view.counts, authoritative);
        assert!(!view.provisional);
    }
}
