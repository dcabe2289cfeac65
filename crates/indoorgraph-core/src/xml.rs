//! Element/attribute lookup helpers over `roxmltree`.
//!
//! IndoorGML documents reference GML and XLink names by their conventional prefixes (`gml:id`,
//! `gml:name`, `xlink:href`). roxmltree resolves prefixes to namespace URIs, so a qualified name
//! matches either by the well-known URI or, failing that, when the document binds the literal
//! prefix to the node's namespace.
//!
//! Documents that use a prefix without declaring it are still well-formed XML. roxmltree rejects
//! them, so such prefixes get bound to a placeholder namespace on the root element and the
//! document is parsed again; the literal-prefix rule then finds `gml:id` and friends as written.

use quick_xml::Reader;
use quick_xml::events::Event;
use roxmltree::{Document, Node, ParsingOptions};
use std::borrow::Cow;

const GML_NS: &str = "http://www.opengis.net/gml";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const UNDECLARED_NS: &str = "urn:indoorgraph:undeclared-prefix:";

fn parse(text: &str) -> Result<Document<'_>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(text, options)
}

/// Parses `text` and hands the tree to `f`, binding undeclared prefixes as needed.
pub(crate) fn with_document<R>(
    text: &str,
    f: impl FnOnce(&Document<'_>) -> R,
) -> Result<R, roxmltree::Error> {
    let mut source = Cow::Borrowed(text);
    let mut bound: Vec<String> = Vec::new();
    loop {
        let err = match parse(&source) {
            Ok(doc) => return Ok(f(&doc)),
            Err(err) => err,
        };
        let roxmltree::Error::UnknownNamespace(prefix, _) = &err else {
            return Err(err);
        };
        if bound.iter().any(|p| p == prefix) {
            return Err(err);
        }
        let Some(patched) = bind_prefix_on_root(&source, prefix) else {
            return Err(err);
        };
        tracing::debug!(prefix = %prefix, "binding undeclared namespace prefix literally");
        bound.push(prefix.clone());
        source = Cow::Owned(patched);
    }
}

/// Inserts `xmlns:{prefix}="..."` right after the root element's name.
fn bind_prefix_on_root(text: &str, prefix: &str) -> Option<String> {
    let mut reader = Reader::from_str(text);
    loop {
        let before = reader.buffer_position() as usize;
        match reader.read_event().ok()? {
            Event::Start(tag) | Event::Empty(tag) => {
                let open = before + text.get(before..)?.find('<')?;
                let insert_at = open + 1 + tag.name().as_ref().len();
                let decl = format!(r#" xmlns:{prefix}="{UNDECLARED_NS}{prefix}""#);
                let mut out = String::with_capacity(text.len() + decl.len());
                out.push_str(text.get(..insert_at)?);
                out.push_str(&decl);
                out.push_str(text.get(insert_at..)?);
                return Some(out);
            }
            Event::Eof => return None,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct QualifiedName {
    prefix: &'static str,
    local: &'static str,
    well_known: fn(&str) -> bool,
}

pub(crate) const GML_ID: QualifiedName = QualifiedName {
    prefix: "gml",
    local: "id",
    well_known: is_gml_namespace,
};

pub(crate) const GML_NAME: QualifiedName = QualifiedName {
    prefix: "gml",
    local: "name",
    well_known: is_gml_namespace,
};

pub(crate) const XLINK_HREF: QualifiedName = QualifiedName {
    prefix: "xlink",
    local: "href",
    well_known: is_xlink_namespace,
};

/// `http://www.opengis.net/gml` itself or any versioned form such as `.../gml/3.2`.
fn is_gml_namespace(uri: &str) -> bool {
    uri.strip_prefix(GML_NS)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

fn is_xlink_namespace(uri: &str) -> bool {
    uri == XLINK_NS
}

impl QualifiedName {
    fn namespace_matches(&self, scope: Node<'_, '_>, namespace: Option<&str>) -> bool {
        let Some(uri) = namespace else {
            return false;
        };
        (self.well_known)(uri) || scope.lookup_namespace_uri(Some(self.prefix)) == Some(uri)
    }

    /// Value of this attribute on `node`, if present.
    pub(crate) fn attribute<'a>(&self, node: Node<'a, '_>) -> Option<&'a str> {
        node.attributes()
            .find(|attr| {
                attr.name() == self.local && self.namespace_matches(node, attr.namespace())
            })
            .map(|attr| attr.value())
    }

    pub(crate) fn is_element(&self, node: Node<'_, '_>) -> bool {
        if !node.is_element() {
            return false;
        }
        let tag = node.tag_name();
        tag.name() == self.local && self.namespace_matches(node, tag.namespace())
    }
}

/// Elements named `local` (in any namespace) below `root`, in document order. `root` itself is
/// not included.
pub(crate) fn descendants_named<'a, 'input: 'a>(
    root: Node<'a, 'input>,
    local: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    root.descendants()
        .skip(1)
        .filter(move |n| n.is_element() && n.tag_name().name() == local)
}

/// Concatenated text of every text node below `node`.
pub(crate) fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
