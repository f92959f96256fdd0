//! XML plumbing shared by the XML based adapters.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use regex::{Captures, Regex};
use roxmltree::{Document, Node, ParsingOptions};

use crate::error::GeoFormatError;

lazy_static! {
    static ref CDATA: Regex = Regex::new(r"(?s)<!\[cdata\[.*?\]\]>").expect("invalid regex");
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").expect("invalid regex");
    static ref PROLOG: Regex =
        Regex::new(r"(?si)\A(?:\s+|<\?.*?\?>|<!doctype[^\[>]*(?:\[.*?\])?\s*>)*")
            .expect("invalid regex");
    static ref DTD_KEYWORD: Regex = Regex::new(
        r"<!(?:doctype|entity|element|attlist|notation)\b|#(?:pcdata|required|implied|fixed)\b|\b(?:system|public|ndata|empty|any|cdata|idrefs?|id|nmtokens?|entities)\b"
    )
    .expect("invalid regex");
    static ref DECLARED_PREFIX: Regex =
        Regex::new(r"\sxmlns:([a-z_][a-z0-9_.\-]*)\s*=").expect("invalid regex");
    static ref NAME: Regex = Regex::new(r"\A[A-Za-z_][A-Za-z0-9_.\-]*\z").expect("invalid regex");
    static ref ELEMENT_PREFIX: Regex =
        Regex::new(r"</?([a-z_][a-z0-9_.\-]*):[a-z_]").expect("invalid regex");
    static ref ATTRIBUTE_PREFIX: Regex =
        Regex::new(r"\s([a-z_][a-z0-9_.\-]*):[a-z_][a-z0-9_.\-]*\s*=").expect("invalid regex");
    static ref ROOT_START: Regex = Regex::new(r"<[a-z_][^\s/>]*").expect("invalid regex");
}

/// Prepares the input text for structural parsing: lowercases it, strips CDATA blocks and comments and declares
/// namespace prefixes that are used but never bound, so that fragments like `<kml:point>` can be parsed.
pub(crate) fn prepare(text: &str) -> String {
    let lowercase = text.to_lowercase();
    let without_cdata = CDATA.replace_all(&lowercase, "");
    let stripped = COMMENT.replace_all(&without_cdata, "");
    declare_prefixes(&restore_dtd_keywords(&stripped))
}

/// XML keywords are case-sensitive, so the DOCTYPE keywords lowercased along with the rest of the text are turned
/// back to upper case.
fn restore_dtd_keywords(text: &str) -> String {
    let (prolog, body) = text.split_at(prolog_end(text));
    let prolog = DTD_KEYWORD.replace_all(prolog, |captures: &Captures| captures[0].to_uppercase());
    format!("{prolog}{body}")
}

fn prolog_end(text: &str) -> usize {
    PROLOG.find(text).map_or(0, |prolog| prolog.end())
}

fn declare_prefixes(text: &str) -> String {
    let declared: BTreeSet<&str> = DECLARED_PREFIX
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|prefix| prefix.as_str())
        .collect();

    let undeclared: BTreeSet<&str> = ELEMENT_PREFIX
        .captures_iter(text)
        .chain(ATTRIBUTE_PREFIX.captures_iter(text))
        .filter_map(|captures| captures.get(1))
        .map(|prefix| prefix.as_str())
        .filter(|prefix| *prefix != "xml" && *prefix != "xmlns")
        .filter(|prefix| !declared.contains(prefix))
        .collect();

    // Declarations go into the root start tag, after any XML declaration, processing instructions and DOCTYPE.
    let Some(root) = ROOT_START.find_at(text, prolog_end(text)) else {
        return text.to_string();
    };

    if undeclared.is_empty() {
        return text.to_string();
    }

    log::debug!("Declaring unbound namespace prefixes: {undeclared:?}");

    let declarations: String = undeclared
        .iter()
        .map(|prefix| format!(" xmlns:{prefix}=\"urn:geoxchange:{prefix}\""))
        .collect();

    let mut result = String::with_capacity(text.len() + declarations.len());
    result.push_str(&text[..root.end()]);
    result.push_str(&declarations);
    result.push_str(&text[root.end()..]);
    result
}

/// Parses a prepared document.
pub(crate) fn parse(text: &str) -> Result<Document<'_>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(text, options)
}

/// Direct child elements of the node with the given local name.
pub(crate) fn child_elements<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}

/// All elements of the document with the given local name, in document order.
pub(crate) fn descendant_elements<'a, 'input>(
    document: &'a Document<'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    document
        .descendants()
        .filter(move |node| node.is_element() && node.tag_name().name() == name)
}

/// Text of all the text nodes inside the node, joined with spaces.
pub(crate) fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writer of element trees with an optional namespace prefix applied to every element name.
pub(crate) struct XmlWriter<'ns> {
    writer: quick_xml::Writer<Vec<u8>>,
    namespace: Option<&'ns str>,
}

impl<'ns> XmlWriter<'ns> {
    /// Fails if the namespace prefix is not a valid XML name without colons.
    pub(crate) fn new(namespace: Option<&'ns str>) -> Result<Self, GeoFormatError> {
        if let Some(namespace) = namespace {
            if !NAME.is_match(namespace) {
                return Err(GeoFormatError::Write(format!(
                    "invalid namespace prefix: '{namespace}'"
                )));
            }
        }

        Ok(Self {
            writer: quick_xml::Writer::new(Vec::new()),
            namespace,
        })
    }

    fn qualified(&self, name: &str) -> String {
        match self.namespace {
            Some(namespace) => format!("{namespace}:{name}"),
            None => name.to_string(),
        }
    }

    pub(crate) fn start(&mut self, name: &str) -> Result<(), GeoFormatError> {
        let name = self.qualified(name);
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        Ok(())
    }

    pub(crate) fn end(&mut self, name: &str) -> Result<(), GeoFormatError> {
        let name = self.qualified(name);
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub(crate) fn text(&mut self, text: &str) -> Result<(), GeoFormatError> {
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    pub(crate) fn text_element(&mut self, name: &str, text: &str) -> Result<(), GeoFormatError> {
        self.start(name)?;
        self.text(text)?;
        self.end(name)
    }

    pub(crate) fn finish(self) -> Result<String, GeoFormatError> {
        String::from_utf8(self.writer.into_inner())
            .map_err(|err| GeoFormatError::Write(err.to_string()))
    }
}
