use crate::common::document::XmlDocument;
use crate::common::error::Result;
use crate::common::namespace::{CALDAV_NAMESPACES, Prefix};
use crate::common::request::DavRequest;

/// `MKCALENDAR` body with an optional display name and description.
///
/// Empty strings are treated like absent values. With neither set the body is
/// the bare `d:set`/`d:prop` shell, which servers accept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MkCalendar {
    displayname: Option<String>,
    description: Option<String>,
}

impl MkCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayname(mut self, displayname: impl Into<String>) -> Self {
        self.displayname = Some(displayname.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl DavRequest for MkCalendar {
    fn method(&self) -> &'static str {
        "MKCALENDAR"
    }

    fn write_body(&self, doc: &mut XmlDocument) -> Result<()> {
        doc.open_root(Prefix::CalDav, "mkcalendar", &CALDAV_NAMESPACES)?;
        doc.open(Prefix::Dav, "set")?;
        doc.open(Prefix::Dav, "prop")?;
        if let Some(displayname) = non_empty(&self.displayname) {
            doc.text_element(Prefix::Dav, "displayname", displayname)?;
        }
        if let Some(description) = non_empty(&self.description) {
            doc.text_element_with_attrs(
                Prefix::CalDav,
                "calendar-description",
                &[("xml:lang", "en")],
                description,
            )?;
        }
        doc.close()?;
        doc.close()?;
        doc.close()
    }
}
