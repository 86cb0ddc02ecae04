pub mod document;
pub mod error;
pub mod namespace;
pub mod request;

pub use document::{DocumentFormat, XmlDocument};
pub use error::{BuildError, Result};
pub use namespace::{
    CALDAV_NAMESPACES, CALDAV_URI, CALENDARSERVER_NAMESPACES, CALENDARSERVER_URI, DAV_URI,
    NamespaceSet, Prefix,
};
pub use request::DavRequest;
