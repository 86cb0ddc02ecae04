//! PROPFIND request bodies restricted to a closed property vocabulary.

use std::fmt;
use std::str::FromStr;

use crate::common::document::XmlDocument;
use crate::common::error::{BuildError, Result};
use crate::common::namespace::{CALENDARSERVER_NAMESPACES, Prefix};
use crate::common::request::DavRequest;
use crate::webdav::types::Depth;

/// Properties a PROPFIND body may request.
///
/// Identifiers use underscores; the emitted element names use hyphens
/// (`sync_token` becomes `<d:sync-token/>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    DisplayName,
    GetCtag,
    SyncToken,
    GetEtag,
    ResourceType,
    CurrentUserPrincipal,
    Owner,
}

impl Property {
    pub const ALL: [Property; 7] = [
        Property::DisplayName,
        Property::GetCtag,
        Property::SyncToken,
        Property::GetEtag,
        Property::ResourceType,
        Property::CurrentUserPrincipal,
        Property::Owner,
    ];

    pub fn identifier(self) -> &'static str {
        match self {
            Property::DisplayName => "displayname",
            Property::GetCtag => "getctag",
            Property::SyncToken => "sync_token",
            Property::GetEtag => "getetag",
            Property::ResourceType => "resourcetype",
            Property::CurrentUserPrincipal => "current_user_principal",
            Property::Owner => "owner",
        }
    }

    pub fn prefix(self) -> Prefix {
        match self {
            Property::GetCtag => Prefix::CalendarServer,
            _ => Prefix::Dav,
        }
    }

    /// Local element name, `identifier()` with `_` replaced by `-`.
    pub fn element_name(self) -> String {
        self.identifier().replace('_', "-")
    }

    /// Exact, case-sensitive lookup in the vocabulary.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|property| property.identifier() == identifier)
    }

    pub fn supported_identifiers() -> Vec<&'static str> {
        Self::ALL.iter().map(|property| property.identifier()).collect()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Property {
    type Err = BuildError;

    fn from_str(identifier: &str) -> Result<Self> {
        Property::from_identifier(identifier).ok_or_else(|| {
            tracing::warn!(property = identifier, "unsupported PROPFIND property");
            BuildError::UnsupportedProperty {
                property: identifier.to_string(),
                supported: Property::supported_identifiers(),
            }
        })
    }
}

/// `<d:propfind><d:prop>…</d:prop></d:propfind>` body.
///
/// ```
/// use caldav_request::{DavRequest, PropfindRequest};
///
/// # fn main() -> anyhow::Result<()> {
/// let body = PropfindRequest::new(["displayname", "getctag"]).to_xml()?;
/// assert!(body.contains("<cs:getctag/>"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropfindRequest {
    properties: Vec<String>,
}

impl PropfindRequest {
    /// Identifiers are validated when the body is built, in the order given.
    pub fn new<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_properties<I>(properties: I) -> Self
    where
        I: IntoIterator<Item = Property>,
    {
        Self::new(properties.into_iter().map(Property::identifier))
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Resolve every identifier before anything is written.
    fn resolve(&self) -> Result<Vec<Property>> {
        if self.properties.is_empty() {
            return Err(BuildError::invalid(
                "PROPFIND needs at least one property",
            ));
        }
        self.properties.iter().map(|p| p.parse::<Property>()).collect()
    }
}

impl DavRequest for PropfindRequest {
    fn method(&self) -> &'static str {
        "PROPFIND"
    }

    fn depth(&self) -> Option<Depth> {
        Some(Depth::Zero)
    }

    fn write_body(&self, doc: &mut XmlDocument) -> Result<()> {
        let properties = self.resolve()?;

        doc.open_root(Prefix::Dav, "propfind", &CALENDARSERVER_NAMESPACES)?;
        doc.open(Prefix::Dav, "prop")?;
        for property in properties {
            doc.empty(property.prefix(), &property.element_name())?;
        }
        doc.close()?;
        doc.close()
    }
}
