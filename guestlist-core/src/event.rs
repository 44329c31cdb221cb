//! Backend-owned event metadata.
//!
//! Events are created and owned by the backend; the client only reads
//! them and submits RSVPs against them.

use serde::{Deserialize, Serialize};

/// An event as served by the backend.
///
/// `date_iso` is kept verbatim as received so that a timestamp the
/// client cannot parse can still be shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub date_iso: String,
    pub location: Option<String>,
    pub cover_image_url: Option<String>,
}
