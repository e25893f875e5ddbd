//! DOM Adapter
//!
//! Parses HTML with `dom_query` and turns `<a>` elements into the [`Anchor`]
//! model the extractor works on. The extractor needs to tell a text child
//! apart from a nested element, so children keep that distinction.

pub use dom_query::{Document, NodeRef, Selection};

/// One child node of an anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorNode {
    /// Character data.
    Text(String),
    /// A nested element, by tag name.
    Element(String),
    /// Anything else (comments, processing instructions). Carries no text.
    Other,
}

impl AnchorNode {
    /// Text of a text node.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) | Self::Other => None,
        }
    }
}

/// A hyperlink as seen by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchor {
    /// `href` attribute, if present (an empty value still counts as present).
    pub href: Option<String>,
    /// `title` attribute, if present.
    pub title: Option<String>,
    /// Direct children in document order.
    pub children: Vec<AnchorNode>,
}

impl Anchor {
    /// Anchor pointing at `href` with no children.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(AnchorNode::Text(text.into()));
        self
    }

    #[must_use]
    pub fn with_element(mut self, tag: impl Into<String>) -> Self {
        self.children.push(AnchorNode::Element(tag.into()));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: AnchorNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Parse an HTML document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Serialized markup of the whole document.
#[inline]
#[must_use]
pub fn render(doc: &Document) -> String {
    doc.html().to_string()
}

/// Every `<a>` element of the document, in document order.
#[must_use]
pub fn anchors(doc: &Document) -> Vec<Anchor> {
    doc.select("a").nodes().iter().map(anchor_from_node).collect()
}

/// Convert one element node into an [`Anchor`].
#[must_use]
pub fn anchor_from_node(node: &NodeRef) -> Anchor {
    Anchor {
        href: node.attr("href").map(|s| s.to_string()),
        title: node.attr("title").map(|s| s.to_string()),
        children: node.children().iter().map(child_node).collect(),
    }
}

fn child_node(node: &NodeRef) -> AnchorNode {
    if node.is_text() {
        AnchorNode::Text(node.text().to_string())
    } else if node.is_element() {
        let tag = node.node_name().map(|t| t.to_string()).unwrap_or_default();
        AnchorNode::Element(tag)
    } else {
        AnchorNode::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors_in_document_order() {
        let doc = parse(
            r#"<p><a href="/1">one</a> <a href="/2">two</a></p><div><a href="/3">three</a></div>"#,
        );
        let hrefs: Vec<_> = anchors(&doc).into_iter().filter_map(|a| a.href).collect();
        assert_eq!(hrefs, ["/1", "/2", "/3"]);
    }

    #[test]
    fn test_missing_attributes_are_none() {
        let doc = parse(r#"<a name="top">Top</a>"#);
        let found = anchors(&doc);

        assert_eq!(found.len(), 1);
        assert!(found[0].href.is_none());
        assert!(found[0].title.is_none());
    }

    #[test]
    fn test_empty_href_is_present() {
        let doc = parse(r#"<a href="">here</a>"#);
        assert_eq!(anchors(&doc)[0].href.as_deref(), Some(""));
    }

    #[test]
    fn test_title_attribute() {
        let doc = parse(r#"<a href="/x" title="Full Name">short</a>"#);
        assert_eq!(anchors(&doc)[0].title.as_deref(), Some("Full Name"));
    }

    #[test]
    fn test_children_kinds() {
        let doc = parse(r#"<a href="/x">lead<b>bold</b><!-- note -->tail</a>"#);
        let anchor = &anchors(&doc)[0];

        assert_eq!(
            anchor.children,
            vec![
                AnchorNode::Text("lead".to_string()),
                AnchorNode::Element("b".to_string()),
                AnchorNode::Other,
                AnchorNode::Text("tail".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_children() {
        let doc = parse(r#"<a href="/x"></a>"#);
        assert!(anchors(&doc)[0].children.is_empty());
    }

    #[test]
    fn test_entities_are_decoded() {
        let doc = parse(r#"<a href="/x?a=1&amp;b=2">Tom &amp; Jerry</a>"#);
        let anchor = &anchors(&doc)[0];

        assert_eq!(anchor.href.as_deref(), Some("/x?a=1&b=2"));
        assert_eq!(anchor.children[0].text(), Some("Tom & Jerry"));
    }

    #[test]
    fn test_builder_matches_parsed() {
        let doc = parse(r#"<a href="/x" title="T">text</a>"#);
        let built = Anchor::new("/x").with_title("T").with_text("text");
        assert_eq!(anchors(&doc)[0], built);
    }

    #[test]
    fn test_render_contains_markup() {
        let doc = parse(r#"<a href="/x">text</a>"#);
        let html = render(&doc);
        assert!(html.contains(r#"<a href="/x">text</a>"#));
    }
}
