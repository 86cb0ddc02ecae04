//! Fixed namespace tables attached to the root element of every request.

pub const DAV_URI: &str = "DAV:";
pub const CALDAV_URI: &str = "urn:ietf:params:xml:ns:caldav";
pub const CALENDARSERVER_URI: &str = "http://calendarserver.org/ns/";

/// Namespace prefix of an emitted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// `d:` (DAV:)
    Dav,
    /// `c:` (urn:ietf:params:xml:ns:caldav)
    CalDav,
    /// `cs:` (http://calendarserver.org/ns/)
    CalendarServer,
}

impl Prefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::Dav => "d",
            Prefix::CalDav => "c",
            Prefix::CalendarServer => "cs",
        }
    }

    pub fn uri(self) -> &'static str {
        match self {
            Prefix::Dav => DAV_URI,
            Prefix::CalDav => CALDAV_URI,
            Prefix::CalendarServer => CALENDARSERVER_URI,
        }
    }

    /// Attribute name declaring this prefix, e.g. `xmlns:cs`.
    pub fn xmlns_attribute(self) -> &'static str {
        match self {
            Prefix::Dav => "xmlns:d",
            Prefix::CalDav => "xmlns:c",
            Prefix::CalendarServer => "xmlns:cs",
        }
    }

    /// Qualified element name, e.g. `c:calendar-query`.
    pub fn qualify(self, local: &str) -> String {
        let prefix = self.as_str();
        let mut name = String::with_capacity(prefix.len() + 1 + local.len());
        name.push_str(prefix);
        name.push(':');
        name.push_str(local);
        name
    }
}

/// Ordered set of namespace declarations placed on a document root.
#[derive(Debug, PartialEq, Eq)]
pub struct NamespaceSet {
    prefixes: &'static [Prefix],
}

/// DAV + CalDAV, used by MKCALENDAR and calendar-query.
pub static CALDAV_NAMESPACES: NamespaceSet = NamespaceSet {
    prefixes: &[Prefix::Dav, Prefix::CalDav],
};

/// DAV + CalendarServer, used by PROPFIND and sharing.
pub static CALENDARSERVER_NAMESPACES: NamespaceSet = NamespaceSet {
    prefixes: &[Prefix::Dav, Prefix::CalendarServer],
};

impl NamespaceSet {
    pub fn prefixes(&self) -> &'static [Prefix] {
        self.prefixes
    }

    pub fn declares(&self, prefix: Prefix) -> bool {
        self.prefixes.contains(&prefix)
    }

    /// `(xmlns:x, uri)` pairs in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.prefixes
            .iter()
            .map(|prefix| (prefix.xmlns_attribute(), prefix.uri()))
    }
}
