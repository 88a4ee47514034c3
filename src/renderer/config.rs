//! Output options for the SVG renderer

/// How [`render_svg`](super::render_svg) writes its document
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Margin added on every side of the map's bounds
    pub padding: f64,

    /// Emit the XML declaration so the output stands alone as a `.svg` file
    pub standalone: bool,

    /// Spaces per nesting level; `None` writes the document on one line
    pub indent: Option<usize>,

    /// Prepended to every class name, e.g. `om-` gives `om-node`
    pub class_prefix: String,

    /// Draw each node's boundary circle
    pub show_boundaries: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            padding: 40.0,
            standalone: true,
            indent: Some(2),
            class_prefix: "om-".to_string(),
            show_boundaries: true,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// No indentation or line breaks
    pub fn compact(mut self) -> Self {
        self.indent = None;
        self
    }

    /// An empty prefix leaves class names bare
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn with_boundaries(mut self, show: bool) -> Self {
        self.show_boundaries = show;
        self
    }

    /// Full class name for one of the renderer's element kinds
    pub(crate) fn class(&self, name: &str) -> String {
        format!("{}{}", self.class_prefix, name)
    }

    /// Leading whitespace for an element `depth` levels deep
    pub(crate) fn indentation(&self, depth: usize) -> String {
        self.indent
            .map(|width| " ".repeat(width * depth))
            .unwrap_or_default()
    }

    pub(crate) fn line_break(&self) -> &'static str {
        if self.indent.is_some() {
            "\n"
        } else {
            ""
        }
    }
}
