//! Printable view of what a host currently shows

use super::demo::DemoHost;
use crate::model::{LayoutAttribute, Size};
use serde::Serialize;

/// Visible layout of a host at one scroll offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    /// Viewport size.
    pub viewport: Size,
    /// Scroll offset the report was taken at.
    pub offset_y: f64,
    /// Total scrollable extent.
    pub content_size: Size,
    /// Attributes on screen, header stretched.
    pub attributes: Vec<LayoutAttribute>,
}

impl LayoutReport {
    /// Capture what `host` shows right now.
    pub fn capture(host: &DemoHost) -> Self {
        Self {
            viewport: host.viewport(),
            offset_y: host.offset_y(),
            content_size: host.layout().content_size(),
            attributes: host.visible_attributes(),
        }
    }

    /// One line per attribute, preceded by a summary line.
    pub fn render_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.attributes.len() + 1);
        lines.push(format!(
            "viewport {} offset {} content {}",
            self.viewport, self.offset_y, self.content_size
        ));
        lines.extend(self.attributes.iter().map(ToString::to_string));
        lines.join("\n")
    }
}
