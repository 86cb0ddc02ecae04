//! Calendar-query REPORT bodies.
//!
//! Both supported queries share the same skeleton: a `d:prop` block asking
//! for `getetag` and `calendar-data`, and a `c:filter` whose outer
//! `comp-filter` selects `VCALENDAR`. Only the innermost clause differs.
//!
//! # Common Use Cases
//!
//! ## Events in a time window
//! ```
//! use caldav_request::{CalendarQuery, DavRequest};
//!
//! # fn main() -> anyhow::Result<()> {
//! let body = CalendarQuery::events("20240115T000000", "20240116T000000").to_xml()?;
//! assert!(body.contains(r#"<c:time-range start="20240115T000000Z" end="20240116T000000Z"/>"#));
//! # Ok(())
//! # }
//! ```
//!
//! ## Every to-do in a collection
//! ```
//! use caldav_request::{CalendarQuery, DavRequest};
//!
//! # fn main() -> anyhow::Result<()> {
//! let body = CalendarQuery::todos().to_xml()?;
//! assert!(body.contains(r#"<c:comp-filter name="VTODO"/>"#));
//! # Ok(())
//! # }
//! ```
//!
//! ## Using chrono values
//! ```
//! use caldav_request::{CalendarQuery, DavRequest, TimeRange};
//! use chrono::{TimeZone, Utc};
//!
//! # fn main() -> anyhow::Result<()> {
//! let range = TimeRange::from_utc(
//!     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
//! );
//! let body = CalendarQuery::new(range.into()).to_xml()?;
//! assert!(body.contains(r#"start="20240101T000000Z""#));
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};

use crate::common::document::XmlDocument;
use crate::common::error::{BuildError, Result};
use crate::common::namespace::{CALDAV_NAMESPACES, Prefix};
use crate::common::request::DavRequest;
use crate::webdav::types::Depth;

const UTC_BASIC_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Start and end of a `c:time-range`, without the trailing `Z`.
///
/// Values are interpolated as given and suffixed with `Z`; no timezone
/// conversion happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    start: String,
    end: String,
}

impl TimeRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Format both bounds in the basic UTC form, e.g. `20240101T000000`.
    pub fn from_utc(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::new(
            start.format(UTC_BASIC_FORMAT).to_string(),
            end.format(UTC_BASIC_FORMAT).to_string(),
        )
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    fn validate(&self) -> Result<()> {
        for (bound, value) in [("start", &self.start), ("end", &self.end)] {
            if value.trim().is_empty() {
                return Err(BuildError::invalid(format!("time-range {bound} is empty")));
            }
            if value.ends_with(['Z', 'z']) {
                return Err(BuildError::invalid(format!(
                    "time-range {bound} `{value}` already carries a UTC designator"
                )));
            }
        }
        Ok(())
    }
}

/// Innermost clause of the calendar-query filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentFilter {
    /// `VEVENT` components overlapping the range.
    Events(TimeRange),
    /// Every `VTODO` component, unconditionally.
    Todos,
}

impl ComponentFilter {
    pub fn component(&self) -> &'static str {
        match self {
            ComponentFilter::Events(_) => "VEVENT",
            ComponentFilter::Todos => "VTODO",
        }
    }

    fn write(&self, doc: &mut XmlDocument) -> Result<()> {
        let name = [("name", self.component())];
        match self {
            ComponentFilter::Events(range) => {
                range.validate()?;
                let start = format!("{}Z", range.start);
                let end = format!("{}Z", range.end);

                doc.open_with_attrs(Prefix::CalDav, "comp-filter", &name)?;
                doc.empty_with_attrs(
                    Prefix::CalDav,
                    "time-range",
                    &[("start", start.as_str()), ("end", end.as_str())],
                )?;
                doc.close()
            }
            ComponentFilter::Todos => doc.empty_with_attrs(Prefix::CalDav, "comp-filter", &name),
        }
    }
}

impl From<TimeRange> for ComponentFilter {
    fn from(range: TimeRange) -> Self {
        ComponentFilter::Events(range)
    }
}

/// A `c:calendar-query` REPORT body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarQuery {
    filter: ComponentFilter,
}

impl CalendarQuery {
    pub fn new(filter: ComponentFilter) -> Self {
        Self { filter }
    }

    /// Events between `start` and `end`, e.g. `2023-01-01T00:00:00`.
    pub fn events(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::new(ComponentFilter::Events(TimeRange::new(start, end)))
    }

    pub fn todos() -> Self {
        Self::new(ComponentFilter::Todos)
    }

    pub fn filter(&self) -> &ComponentFilter {
        &self.filter
    }
}

impl DavRequest for CalendarQuery {
    fn method(&self) -> &'static str {
        "REPORT"
    }

    fn depth(&self) -> Option<Depth> {
        Some(Depth::One)
    }

    fn write_body(&self, doc: &mut XmlDocument) -> Result<()> {
        doc.open_root(Prefix::CalDav, "calendar-query", &CALDAV_NAMESPACES)?;

        doc.open(Prefix::Dav, "prop")?;
        doc.empty(Prefix::Dav, "getetag")?;
        doc.empty(Prefix::CalDav, "calendar-data")?;
        doc.close()?;

        doc.open(Prefix::CalDav, "filter")?;
        doc.open_with_attrs(Prefix::CalDav, "comp-filter", &[("name", "VCALENDAR")])?;
        self.filter.write(doc)?;
        doc.close()?;
        doc.close()?;

        doc.close()
    }
}
