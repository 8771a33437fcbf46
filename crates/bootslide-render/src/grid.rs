use crate::writer::HtmlWriter;
use std::fmt::Write as _;

/// Column spans and offsets per breakpoint (Bootstrap 3 naming).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSpec {
    pub xs: u8,
    pub sm: u8,
    pub md: u8,
    pub lg: u8,
    pub offset_xs: u8,
    pub offset_sm: u8,
    pub offset_md: u8,
    pub offset_lg: u8,
    pub style: Option<String>,
    pub style_class: Option<String>,
}

impl ColumnSpec {
    /// The same span on every breakpoint, no offsets.
    pub fn uniform(span: u8) -> Self {
        Self {
            xs: span,
            sm: span,
            md: span,
            lg: span,
            ..Self::default()
        }
    }
}

/// Grid column layout collaborator.
pub trait GridLayout {
    /// Wraps `content` in a column sized by `spec`.
    fn column(
        &self,
        out: &mut HtmlWriter,
        spec: &ColumnSpec,
        content: &mut dyn FnMut(&mut HtmlWriter),
    );
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapGrid;

impl BootstrapGrid {
    pub fn column_class(spec: &ColumnSpec) -> String {
        let mut class = String::new();
        for (prefix, span) in [
            ("xs", spec.xs),
            ("sm", spec.sm),
            ("md", spec.md),
            ("lg", spec.lg),
        ] {
            if span > 0 {
                push_class(&mut class, format_args!("col-{prefix}-{span}"));
            }
        }
        for (prefix, offset) in [
            ("xs", spec.offset_xs),
            ("sm", spec.offset_sm),
            ("md", spec.offset_md),
            ("lg", spec.offset_lg),
        ] {
            if offset > 0 {
                push_class(&mut class, format_args!("col-{prefix}-offset-{offset}"));
            }
        }
        if let Some(extra) = spec.style_class.as_deref().filter(|c| !c.is_empty()) {
            push_class(&mut class, format_args!("{extra}"));
        }
        class
    }
}

fn push_class(class: &mut String, item: std::fmt::Arguments<'_>) {
    if !class.is_empty() {
        class.push(' ');
    }
    let _ = class.write_fmt(item);
}

impl GridLayout for BootstrapGrid {
    fn column(
        &self,
        out: &mut HtmlWriter,
        spec: &ColumnSpec,
        content: &mut dyn FnMut(&mut HtmlWriter),
    ) {
        out.element("div", |w| {
            w.attr("class", Self::column_class(spec));
            if let Some(style) = spec.style.as_deref() {
                w.attr("style", style);
            }
            content(w);
        });
    }
}
