//! SVG generation for a mind map session

use crate::config::Theme;
use crate::layout::{BoundingBox, Edge, MindMap, Node};

use super::path::to_svg_d;
use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    connectors: Vec<String>,
    nodes: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            connectors: vec![],
            nodes: vec![],
            indent: 1,
        }
    }

    /// Add CSS for the theme colors
    pub fn add_theme(&mut self, theme: &Theme) {
        let c = &self.config;
        self.styles.push(format!(
            ".{} {{ fill: {}; }} .{} {{ fill: {}; stroke: {}; }} .{} {{ fill: {}; font-weight: 600; }}",
            c.class("background"),
            theme.background,
            c.class("chip"),
            theme.chip_fill,
            theme.chip_stroke,
            c.class("label"),
            theme.text,
        ));
    }

    fn indent_str(&self) -> String {
        self.config.indentation(self.indent)
    }

    /// Add a connector path
    pub fn add_connector(&mut self, edge: &Edge, stroke: &str) {
        self.connectors.push(format!(
            r#"{}<path class="{}" data-from="{}" data-to="{}" d="{}" fill="none" stroke="{}" stroke-width="2.2"/>"#,
            self.indent_str(),
            self.config.class("connector"),
            escape_xml(edge.from.as_str()),
            escape_xml(edge.to.as_str()),
            to_svg_d(&edge.route.path()),
            stroke
        ));
    }

    /// Add a node: boundary circle plus centered label
    pub fn add_node(&mut self, node: &Node, hub: bool) {
        let kind = if hub { "hub" } else { "node" };
        self.nodes.push(format!(
            r#"{}<g id="{}" class="{}">"#,
            self.indent_str(),
            escape_xml(node.id.as_str()),
            self.config.class(kind)
        ));
        self.indent += 1;

        if self.config.show_boundaries {
            self.nodes.push(format!(
                r#"{}<circle class="{}" cx="{}" cy="{}" r="{}"/>"#,
                self.indent_str(),
                self.config.class("chip"),
                node.position.x,
                node.position.y,
                node.boundary_radius
            ));
        }
        self.nodes.push(format!(
            r#"{}<text class="{}" x="{}" y="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            self.indent_str(),
            self.config.class("label"),
            node.position.x,
            node.position.y,
            escape_xml(&node.visual.display_text())
        ));

        self.indent = self.indent.saturating_sub(1);
        self.nodes.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: BoundingBox) -> String {
        let padding = self.config.padding;
        let vb_x = viewbox.x - padding;
        let vb_y = viewbox.y - padding;
        let vb_w = viewbox.width + 2.0 * padding;
        let vb_h = viewbox.height + 2.0 * padding;

        let nl = self.config.line_break();
        let level1 = self.config.indentation(1);
        let level2 = self.config.indentation(2);

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            vb_x, vb_y, vb_w, vb_h
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str(&format!("{}<style>", level1));
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str(&level2);
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str(&format!("{}</style>", level1));
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"{}<rect class="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
            level1,
            self.config.class("background"),
            vb_x,
            vb_y,
            vb_w,
            vb_h
        ));
        svg.push_str(nl);

        // Connectors sit below the nodes
        for conn in &self.connectors {
            svg.push_str(conn);
            svg.push_str(nl);
        }

        for node in &self.nodes {
            svg.push_str(node);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a map session to an SVG string
pub fn render_svg(map: &MindMap, theme: &Theme, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_theme(theme);

    let edges = map.edges();
    for edge in &edges {
        let stroke = edge.color.as_deref().unwrap_or(&theme.connector);
        builder.add_connector(edge, stroke);
    }

    builder.add_node(map.center(), true);
    for node in map.nodes() {
        builder.add_node(node, false);
    }

    builder.build(map_bounds(map, &edges))
}

/// Box containing every node footprint and connector control point
fn map_bounds(map: &MindMap, edges: &[Edge]) -> BoundingBox {
    let center = map.center();
    let mut bounds = BoundingBox::around_circle(center.position, center.boundary_radius);

    for node in map.nodes() {
        bounds = bounds.union(&BoundingBox::around_circle(
            node.position,
            node.boundary_radius,
        ));
    }
    for edge in edges {
        for point in edge.route.path().points() {
            bounds = bounds.expand_to_include(point);
        }
    }
    bounds
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;

    fn default_map() -> (MindMap, MapConfig) {
        let config = MapConfig::default();
        (MindMap::new(&config).unwrap(), config)
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("Assets & Provisioning"), "Assets &amp; Provisioning");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_render_default_map() {
        let (map, config) = default_map();
        let svg = render_svg(&map, &config.theme, &SvgConfig::default());

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("om-connector").count(), 4);
        assert_eq!(svg.matches(r#"class="om-node""#).count(), 4);
        assert_eq!(svg.matches(r#"class="om-hub""#).count(), 1);
        assert!(svg.contains("Assets &amp; Provisioning"));
        assert!(svg.contains(r##"stroke="#7B8CFF""##));
    }

    #[test]
    fn test_render_compact_without_boundaries() {
        let (map, config) = default_map();
        let svg_config = SvgConfig::new()
            .with_standalone(false)
            .compact()
            .with_boundaries(false)
            .with_class_prefix("");
        let svg = render_svg(&map, &config.theme, &svg_config);

        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains('\n'));
        assert!(!svg.contains("  <"));
        assert!(!svg.contains("<circle"));
        assert!(svg.contains(r#"class="connector""#));
    }

    #[test]
    fn test_bounds_cover_all_nodes() {
        let (map, _) = default_map();
        let bounds = map_bounds(&map, &map.edges());
        for node in map.nodes() {
            assert!(node.position.x - node.boundary_radius >= bounds.x - 1e-9);
            assert!(node.position.x + node.boundary_radius <= bounds.right() + 1e-9);
            assert!(node.position.y - node.boundary_radius >= bounds.y - 1e-9);
            assert!(node.position.y + node.boundary_radius <= bounds.bottom() + 1e-9);
        }
    }
}
