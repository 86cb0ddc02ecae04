use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::common::error::{BuildError, Result};
use crate::common::namespace::{NamespaceSet, Prefix};

/// Output layout of a serialized document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// One element per line, nested elements indented by `indent` spaces.
    Pretty { indent: usize },
    /// No whitespace between elements.
    Compact,
}

impl Default for DocumentFormat {
    fn default() -> Self {
        DocumentFormat::Pretty { indent: 2 }
    }
}

/// XML sink shared by every request builder.
///
/// The declaration is written on construction, so it always precedes the root
/// element. Open elements are tracked on a stack and closed in reverse order.
pub struct XmlDocument {
    writer: Writer<Vec<u8>>,
    open: Vec<String>,
    namespaces: Option<&'static NamespaceSet>,
}

impl XmlDocument {
    pub fn new(format: DocumentFormat) -> Result<Self> {
        let mut writer = match format {
            DocumentFormat::Pretty { indent } => {
                Writer::new_with_indent(Vec::with_capacity(512), b' ', indent)
            }
            DocumentFormat::Compact => Writer::new(Vec::with_capacity(512)),
        };
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        Ok(Self {
            writer,
            open: Vec::with_capacity(8),
            namespaces: None,
        })
    }

    /// Open the root element and declare `namespaces` on it.
    pub fn open_root(
        &mut self,
        prefix: Prefix,
        name: &str,
        namespaces: &'static NamespaceSet,
    ) -> Result<()> {
        debug_assert!(self.namespaces.is_none(), "root element already written");
        self.namespaces = Some(namespaces);
        let mut start = self.start(prefix, name);
        start.extend_attributes(namespaces.attributes());
        self.push(start)
    }

    pub fn open(&mut self, prefix: Prefix, name: &str) -> Result<()> {
        let start = self.start(prefix, name);
        self.push(start)
    }

    pub fn open_with_attrs(&mut self, prefix: Prefix, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        check_attrs(attrs)?;
        let mut start = self.start(prefix, name);
        start.extend_attributes(attrs.iter().copied());
        self.push(start)
    }

    /// Close the innermost open element.
    pub fn close(&mut self) -> Result<()> {
        let name = self.open.pop();
        debug_assert!(name.is_some(), "close() without a matching open element");
        if let Some(name) = name {
            self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        Ok(())
    }

    pub fn empty(&mut self, prefix: Prefix, name: &str) -> Result<()> {
        let start = self.start(prefix, name);
        self.writer.write_event(Event::Empty(start))?;
        Ok(())
    }

    pub fn empty_with_attrs(&mut self, prefix: Prefix, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        check_attrs(attrs)?;
        let mut start = self.start(prefix, name);
        start.extend_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Empty(start))?;
        Ok(())
    }

    /// Write `<prefix:name>text</prefix:name>`, escaping `text`.
    ///
    /// Escaping cannot express characters outside the XML 1.0 `Char` range
    /// (most C0 controls, U+FFFE, U+FFFF), so such text is rejected.
    pub fn text_element(&mut self, prefix: Prefix, name: &str, text: &str) -> Result<()> {
        self.text_element_with_attrs(prefix, name, &[], text)
    }

    pub fn text_element_with_attrs(
        &mut self,
        prefix: Prefix,
        name: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> Result<()> {
        check_attrs(attrs)?;
        check_chars(name, text)?;
        let mut start = self.start(prefix, name);
        start.extend_attributes(attrs.iter().copied());
        let end = BytesEnd::new(prefix.qualify(name));

        self.writer.write_event(Event::Start(start))?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.writer.write_event(Event::End(end))?;
        Ok(())
    }

    /// Close whatever is still open and return the serialized document.
    pub fn finish(mut self) -> Result<String> {
        while !self.open.is_empty() {
            self.close()?;
        }
        Ok(String::from_utf8(self.writer.into_inner())?)
    }

    fn start(&self, prefix: Prefix, name: &str) -> BytesStart<'static> {
        debug_assert!(
            self.namespaces.is_none_or(|ns| ns.declares(prefix)),
            "prefix `{}` is not declared on the document root",
            prefix.as_str()
        );
        BytesStart::new(prefix.qualify(name))
    }

    fn push(&mut self, start: BytesStart<'static>) -> Result<()> {
        self.open
            .push(String::from_utf8_lossy(start.name().as_ref()).into_owned());
        self.writer.write_event(Event::Start(start))?;
        Ok(())
    }
}

fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{FFFE}' | '\u{FFFF}' => false,
        c => c >= '\u{20}',
    }
}

fn check_chars(field: &str, value: &str) -> Result<()> {
    match value.chars().find(|c| !is_xml_char(*c)) {
        Some(bad) => Err(BuildError::invalid(format!(
            "`{field}` contains U+{:04X}, which XML 1.0 cannot represent",
            u32::from(bad)
        ))),
        None => Ok(()),
    }
}

fn check_attrs(attrs: &[(&str, &str)]) -> Result<()> {
    attrs
        .iter()
        .try_for_each(|(key, value)| check_chars(key, value))
}
