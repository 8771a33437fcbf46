use crate::writer::HtmlWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeSpec<'a> {
    pub id: &'a str,
    pub value: &'a str,
    pub style_class: Option<&'a str>,
    pub style: Option<&'a str>,
}

/// Badge rendering collaborator.
pub trait BadgeRenderer {
    fn badge(&self, out: &mut HtmlWriter, badge: &BadgeSpec<'_>);
}

/// `<span class="badge">` as styled by Bootstrap.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapBadge;

impl BadgeRenderer for BootstrapBadge {
    fn badge(&self, out: &mut HtmlWriter, badge: &BadgeSpec<'_>) {
        out.element("span", |w| {
            w.attr("id", badge.id);
            match badge.style_class.filter(|c| !c.is_empty()) {
                Some(extra) => w.attr("class", format_args!("badge {extra}")),
                None => w.attr("class", "badge"),
            }
            if let Some(style) = badge.style {
                w.attr("style", style);
            }
            w.text(badge.value);
        });
    }
}
