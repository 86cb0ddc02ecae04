//! CalendarServer sharing invitations (`POST` with a `cs:share` body).

use std::fmt;

use crate::common::document::XmlDocument;
use crate::common::error::{BuildError, Result};
use crate::common::namespace::{CALENDARSERVER_NAMESPACES, Prefix};
use crate::common::request::DavRequest;

/// Access level granted to every invitee of a `cs:set`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SharePrivilege {
    #[default]
    Read,
    ReadWrite,
    /// Server-specific token, emitted verbatim as `cs:<token>`.
    Raw(String),
}

impl SharePrivilege {
    pub fn token(&self) -> &str {
        match self {
            SharePrivilege::Read => "read",
            SharePrivilege::ReadWrite => "read-write",
            SharePrivilege::Raw(token) => token.as_str(),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            SharePrivilege::Raw(token) if !is_ncname(token) => Err(BuildError::invalid(format!(
                "privilege `{token}` is not a valid element name"
            ))),
            _ => Ok(()),
        }
    }
}

impl From<&str> for SharePrivilege {
    fn from(token: &str) -> Self {
        match token {
            "read" => SharePrivilege::Read,
            "read-write" => SharePrivilege::ReadWrite,
            other => SharePrivilege::Raw(other.to_string()),
        }
    }
}

impl fmt::Display for SharePrivilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// Unprefixed XML name: a letter or `_`, then letters, digits, `-`, `_` or `.`.
fn is_ncname(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Invite and/or uninvite sharees of a calendar collection.
///
/// Each invitee produces its own `cs:set` carrying the summary, common name
/// and privilege; each removal produces a `cs:remove`.
///
/// ```
/// use caldav_request::{DavRequest, SharePrivilege, ShareInvitation};
///
/// # fn main() -> anyhow::Result<()> {
/// let body = ShareInvitation::new()
///     .invite("alice@example.com")
///     .summary("Team calendar")
///     .privilege(SharePrivilege::ReadWrite)
///     .uninvite("bob@example.com")
///     .to_xml()?;
/// assert!(body.contains("<d:href>mailto:alice@example.com</d:href>"));
/// assert!(body.contains("<cs:read-write/>"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareInvitation {
    adds: Vec<String>,
    removes: Vec<String>,
    summary: Option<String>,
    common_name: Option<String>,
    privilege: SharePrivilege,
}

impl ShareInvitation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invite(mut self, invitee: impl Into<String>) -> Self {
        self.adds.push(invitee.into());
        self
    }

    pub fn invite_all<I, S>(mut self, invitees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.adds.extend(invitees.into_iter().map(Into::into));
        self
    }

    pub fn uninvite(mut self, invitee: impl Into<String>) -> Self {
        self.removes.push(invitee.into());
        self
    }

    pub fn uninvite_all<I, S>(mut self, invitees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.removes.extend(invitees.into_iter().map(Into::into));
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn common_name(mut self, common_name: impl Into<String>) -> Self {
        self.common_name = Some(common_name.into());
        self
    }

    pub fn privilege(mut self, privilege: impl Into<SharePrivilege>) -> Self {
        self.privilege = privilege.into();
        self
    }

    pub fn adds(&self) -> &[String] {
        &self.adds
    }

    pub fn removes(&self) -> &[String] {
        &self.removes
    }

    pub fn privilege_level(&self) -> &SharePrivilege {
        &self.privilege
    }

    fn validate(&self) -> Result<()> {
        if let Some(blank) = self
            .adds
            .iter()
            .chain(self.removes.iter())
            .find(|invitee| invitee.trim().is_empty())
        {
            return Err(BuildError::invalid(format!(
                "invitee identifier {blank:?} is empty"
            )));
        }
        self.privilege.validate()
    }
}

fn mailto(invitee: &str) -> String {
    format!("mailto:{invitee}")
}

impl DavRequest for ShareInvitation {
    fn method(&self) -> &'static str {
        "POST"
    }

    fn write_body(&self, doc: &mut XmlDocument) -> Result<()> {
        self.validate()?;

        doc.open_root(Prefix::CalendarServer, "share", &CALENDARSERVER_NAMESPACES)?;
        for invitee in &self.adds {
            doc.open(Prefix::CalendarServer, "set")?;
            doc.text_element(Prefix::Dav, "href", &mailto(invitee))?;
            if let Some(summary) = &self.summary {
                doc.text_element(Prefix::CalendarServer, "summary", summary)?;
            }
            if let Some(common_name) = &self.common_name {
                doc.text_element(Prefix::CalendarServer, "common-name", common_name)?;
            }
            doc.empty(Prefix::CalendarServer, self.privilege.token())?;
            doc.close()?;
        }
        for invitee in &self.removes {
            doc.open(Prefix::CalendarServer, "remove")?;
            doc.text_element(Prefix::Dav, "href", &mailto(invitee))?;
            doc.close()?;
        }
        doc.close()
    }
}
