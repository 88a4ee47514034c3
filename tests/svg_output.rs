//! Rendered SVG for whole maps

use orbit_map::layout::{MindMap, Point, PositionOverride};
use orbit_map::persistence::NullStore;
use orbit_map::{render, render_svg, MapConfig, SvgConfig};

const MAP: &str = r##"
[metadata]
name = "Test map"

[layout]
orbit_radius = 100.0
orbit_offset = 0.0
center_radius = 10.0
node_radius = 10.0

[center]
id = "core"
label = "Core"

[[nodes]]
id = "east"
label = "East"
color = "#ff0000"

[[nodes]]
id = "west"
label = "West <b>"
"##;

#[test]
fn test_render_from_toml() {
    let svg = render(MAP).unwrap();

    assert!(svg.contains(r#"id="core""#));
    assert!(svg.contains(r#"id="east""#));
    assert!(svg.contains(r#"id="west""#));
    assert!(svg.contains("West &lt;b&gt;"));
    // east sits at (100, 0): the connector runs from x=10 to x=90
    assert!(svg.contains(r#"d="M10.00 0.00 Q50.00 17.60 90.00 0.00""#));
    assert!(svg.contains(r##"stroke="#ff0000""##));
}

#[test]
fn test_uncolored_nodes_use_theme_connector() {
    let svg = render(MAP).unwrap();
    let config = MapConfig::from_toml(MAP).unwrap();
    assert!(svg.contains(&format!(r#"stroke="{}""#, config.theme.connector)));
}

#[test]
fn test_dragged_node_moves_connector() {
    let config = MapConfig::from_toml(MAP).unwrap();
    let mut map = MindMap::new(&config).unwrap();
    map.apply(
        PositionOverride::new("east", Point::new(0.0, 100.0)),
        &mut NullStore,
    )
    .unwrap();

    let svg = render_svg(&map, &config.theme, &SvgConfig::default());
    assert!(svg.contains(r#"cx="0" cy="100""#));
    assert!(!svg.contains(r#"d="M10.00 0.00 Q50.00 17.60 90.00 0.00""#));
}
