// File: crates/chart-core/src/container.rs
// Summary: DOM-like container that hosts rendered graphics next to other content.

use crate::chart::Graphic;
use crate::svg::escape_text;
use crate::theme::Theme;

/// Anything a chart can be mounted on.
pub trait Surface {
    fn attach(&mut self, node: Node);
}

/// Plain content element (heading, button, list item...).
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: String,
    pub class: Option<String>,
    pub text: String,
    /// Navigation target when the element is activated.
    pub href: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self { tag: tag.into(), class: None, text: text.into(), href: None }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    fn to_html(&self) -> String {
        let class = self
            .class
            .as_deref()
            .map(|c| format!(" class=\"{}\"", escape_text(c)))
            .unwrap_or_default();
        let text = escape_text(&self.text);
        let body = match &self.href {
            Some(href) => format!("<a href=\"{}\">{text}</a>", escape_text(href)),
            None => text,
        };
        format!("<{tag}{class}>{body}</{tag}>", tag = self.tag)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Graphic(Graphic),
}

/// Ordered children under an identifier. The caller owns mounting and clearing;
/// renderers only ever append.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Container {
    id: String,
    children: Vec<Node>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), children: Vec::new() }
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn children(&self) -> &[Node] { &self.children }

    pub fn append(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn graphics(&self) -> impl Iterator<Item = &Graphic> {
        self.children.iter().filter_map(|n| match n {
            Node::Graphic(g) => Some(g),
            Node::Element(_) => None,
        })
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Graphic(_) => None,
        })
    }

    /// HTML fragment: a `div` carrying the container id, children in order.
    pub fn to_html(&self) -> String {
        let mut out = format!("<div id=\"{}\">", escape_text(&self.id));
        for child in &self.children {
            match child {
                Node::Element(e) => out.push_str(&e.to_html()),
                Node::Graphic(g) => out.push_str(&g.to_svg()),
            }
        }
        out.push_str("</div>");
        out
    }

    /// Complete HTML document with the theme's CSS variables.
    pub fn to_page(&self, title: &str, theme: &Theme) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            escape_text(title),
            theme.css_variables(),
            self.to_html(),
        )
    }
}

impl Surface for Container {
    fn attach(&mut self, node: Node) {
        self.children.push(node);
    }
}
