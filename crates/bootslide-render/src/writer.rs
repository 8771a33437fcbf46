//! Scoped HTML writer.
//!
//! Elements can only be opened through [`HtmlWriter::element`] and
//! [`HtmlWriter::void_element`], which close what they open before returning. A rendered
//! fragment therefore always has balanced tags, whatever branch the caller takes.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Normal,
    Void,
}

#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
    open: Vec<(&'static str, Kind)>,
    start_tag_open: bool,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `<name ...>...</name>`; `f` adds attributes first, then content.
    pub fn element(&mut self, name: &'static str, f: impl FnOnce(&mut Self)) {
        self.start(name, Kind::Normal);
        f(self);
        self.end();
    }

    /// Writes a self-closing element such as `<input ... />`; `f` may only add attributes.
    pub fn void_element(&mut self, name: &'static str, f: impl FnOnce(&mut Self)) {
        self.start(name, Kind::Void);
        f(self);
        self.end();
    }

    /// Adds an attribute to the element whose start tag is still open.
    pub fn attr(&mut self, name: &str, value: impl Display) {
        debug_assert!(
            self.start_tag_open,
            "attribute `{name}` written after element content"
        );
        if !self.start_tag_open {
            return;
        }
        let value = value.to_string();
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        self.out.push_str(&htmlize::escape_attribute(value.as_str()));
        self.out.push('"');
    }

    /// Writes escaped text content.
    pub fn text(&mut self, text: &str) {
        self.finish_start_tag();
        self.out.push_str(&htmlize::escape_text(text));
    }

    /// Writes content verbatim. Used for script bodies.
    pub fn raw(&mut self, raw: &str) {
        self.finish_start_tag();
        self.out.push_str(raw);
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn start(&mut self, name: &'static str, kind: Kind) {
        self.finish_start_tag();
        debug_assert!(
            !matches!(self.open.last(), Some((_, Kind::Void))),
            "`{name}` nested inside a void element"
        );
        self.out.push('<');
        self.out.push_str(name);
        self.open.push((name, kind));
        self.start_tag_open = true;
    }

    fn end(&mut self) {
        let Some((name, kind)) = self.open.pop() else {
            return;
        };
        match (kind, self.start_tag_open) {
            (Kind::Void, _) => self.out.push_str(" />"),
            (Kind::Normal, true) => {
                self.out.push_str("></");
                self.out.push_str(name);
                self.out.push('>');
            }
            (Kind::Normal, false) => {
                self.out.push_str("</");
                self.out.push_str(name);
                self.out.push('>');
            }
        }
        self.start_tag_open = false;
    }

    fn finish_start_tag(&mut self) {
        if self.start_tag_open {
            self.out.push('>');
            self.start_tag_open = false;
        }
    }
}
