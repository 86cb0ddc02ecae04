use bytes::Bytes;
use tracing::debug;

use crate::common::document::{DocumentFormat, XmlDocument};
use crate::common::error::Result;
use crate::webdav::types::Depth;

/// A request whose body can be serialized and handed to an HTTP transport.
///
/// Implementors only write their body; the declaration, formatting and
/// finalization are shared.
pub trait DavRequest {
    /// HTTP method the body belongs to, e.g. `PROPFIND` or `REPORT`.
    fn method(&self) -> &'static str;

    /// `Depth` header to send alongside the body, if the method takes one.
    fn depth(&self) -> Option<Depth> {
        None
    }

    /// Write the root element and its content into `doc`.
    fn write_body(&self, doc: &mut XmlDocument) -> Result<()>;

    /// Serialize with the default (two-space indented) layout.
    fn to_xml(&self) -> Result<String> {
        self.to_xml_with(DocumentFormat::default())
    }

    fn to_xml_with(&self, format: DocumentFormat) -> Result<String> {
        let mut doc = XmlDocument::new(format)?;
        self.write_body(&mut doc)?;
        let xml = doc.finish()?;
        debug!(
            method = self.method(),
            depth = self.depth().map(Depth::as_str),
            bytes = xml.len(),
            "serialized request body"
        );
        Ok(xml)
    }

    /// Serialize into a buffer suitable as an HTTP request body.
    fn to_bytes(&self) -> Result<Bytes> {
        self.to_xml().map(Bytes::from)
    }
}
