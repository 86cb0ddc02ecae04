//! CalDAV request body builders.
//!
//! This library serializes the XML bodies a CalDAV client sends: PROPFIND
//! property queries, calendar-query REPORTs, MKCALENDAR and CalendarServer
//! sharing invitations. Transport, authentication and response parsing are
//! left to the HTTP client that consumes the documents.
//!
//! # Features
//!
//! - Namespace-checked elements (`d:` DAV, `c:` CalDAV, `cs:` CalendarServer)
//! - Closed PROPFIND vocabulary with a descriptive error on unknown properties
//! - Escaped text and attribute values via quick-xml
//! - Deterministic output: the same builder always yields the same bytes
//! - Pretty (default) or compact layout
//!
//! # Examples
//!
//! ## Collection properties
//!
//! ```
//! use caldav_request::{Depth, DavRequest, PropfindRequest};
//!
//! # fn main() -> anyhow::Result<()> {
//! let request = PropfindRequest::new(["displayname", "getctag", "sync_token"]);
//! let body = request.to_xml()?;
//!
//! assert_eq!(request.method(), "PROPFIND");
//! assert_eq!(request.depth(), Some(Depth::Zero));
//! assert!(body.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
//! assert!(body.contains("<d:sync-token/>"));
//! # Ok(())
//! # }
//! ```
//!
//! Unknown properties are rejected with the list of supported ones:
//!
//! ```
//! use caldav_request::{BuildError, DavRequest, PropfindRequest};
//!
//! let err = PropfindRequest::new(["colour"]).to_xml().unwrap_err();
//! assert!(matches!(err, BuildError::UnsupportedProperty { .. }));
//! ```
//!
//! ## Creating a calendar
//!
//! ```
//! use caldav_request::{DavRequest, DocumentFormat, MkCalendar};
//!
//! # fn main() -> anyhow::Result<()> {
//! let body = MkCalendar::new()
//!     .displayname("Work")
//!     .description("Meetings & deadlines")
//!     .to_xml_with(DocumentFormat::Compact)?;
//!
//! assert!(body.contains("<d:displayname>Work</d:displayname>"));
//! assert!(body.contains(
//!     r#"<c:calendar-description xml:lang="en">Meetings &amp; deadlines</c:calendar-description>"#
//! ));
//! # Ok(())
//! # }
//! ```
//!
//! ## Handing a body to a transport
//!
//! Every builder implements [`DavRequest`], so a client can send any of them
//! with the right method and `Depth` header:
//!
//! ```
//! use bytes::Bytes;
//! use caldav_request::{CalendarQuery, DavRequest};
//!
//! fn prepare(request: &impl DavRequest) -> caldav_request::Result<(&'static str, Option<&'static str>, Bytes)> {
//!     Ok((request.method(), request.depth().map(|d| d.as_str()), request.to_bytes()?))
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let (method, depth, body) = prepare(&CalendarQuery::todos())?;
//! assert_eq!(method, "REPORT");
//! assert_eq!(depth, Some("1"));
//! assert!(!body.is_empty());
//! # Ok(())
//! # }
//! ```
pub mod caldav;
pub mod common;
pub mod webdav;

pub use caldav::{
    CalendarQuery, ComponentFilter, MkCalendar, ShareInvitation, SharePrivilege, TimeRange,
};
pub use common::{
    BuildError, CALDAV_NAMESPACES, CALENDARSERVER_NAMESPACES, DavRequest, DocumentFormat,
    NamespaceSet, Prefix, Result, XmlDocument,
};
pub use webdav::{Depth, Property, PropfindRequest};
