use crate::render::escape_html;

/// A page element the view layer can toggle and fill
pub trait Region {
    fn show(&mut self);

    fn hide(&mut self);

    fn is_visible(&self) -> bool;

    /// Replace contents with plain text (escaped on output)
    fn set_text(&mut self, text: &str);

    /// Replace contents with trusted markup
    fn set_html(&mut self, html: String);
}

/// In-memory element identified by its `id` attribute
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlRegion {
    id: String,
    visible: bool,
    inner_html: String,
}

impl HtmlRegion {
    /// Create a hidden, empty region
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            visible: false,
            inner_html: String::new(),
        }
    }

    /// Start with fixed markup (static page copy)
    pub fn with_html(id: &str, html: &str) -> Self {
        Self {
            inner_html: html.to_string(),
            ..Self::new(id)
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Serialize as a `<div>`; hidden regions carry the `hidden` attribute
    pub fn to_html(&self) -> String {
        self.to_html_with("")
    }

    /// Serialize with nested child markup appended after the contents
    pub fn to_html_with(&self, children: &str) -> String {
        let hidden = if self.visible { "" } else { " hidden" };
        format!(
            "<div id=\"{}\"{}>{}{}</div>",
            escape_html(&self.id),
            hidden,
            self.inner_html,
            children
        )
    }
}

impl Region for HtmlRegion {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_text(&mut self, text: &str) {
        self.inner_html = escape_html(text);
    }

    fn set_html(&mut self, html: String) {
        self.inner_html = html;
    }
}
