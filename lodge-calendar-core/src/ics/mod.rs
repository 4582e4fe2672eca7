//! ICS export of a generated calendar.
//!
//! Output follows RFC 5545 with CRLF line endings, written through the
//! icalendar crate.

mod generate;

pub use generate::{PRODID, UID_DOMAIN, ics_filename, to_ics, to_ics_at};
