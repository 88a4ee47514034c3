//! SVG renderer for map sessions
//!
//! This module takes a MindMap and produces an SVG string with appropriate
//! CSS classes for styling.

pub mod config;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use path::to_svg_d;
pub use svg::render_svg;
