use crate::core::geometry::FaceGeometry;
use crate::core::{Catalog, DisplayState, Frame, Renderer, Result};
use crate::domain::palette::Palette;

const LABEL_FONT: &str = "Open Sans, sans-serif";

#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: u32,
    height: u32,
    palette: Palette,
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32, palette: Palette) -> Self {
        Self {
            width,
            height,
            palette,
        }
    }
}

fn num(value: f64) -> String {
    format!("{}", (value * 100.0).round() / 100.0)
}

impl Renderer for SvgRenderer {
    fn render(&self, catalog: &Catalog, frame: &Frame, display: &DisplayState) -> Result<String> {
        let geometry = FaceGeometry::compute(
            catalog,
            f64::from(self.width),
            f64::from(self.height),
            display.constrain,
        );
        let stroke = self.palette.border.to_css();
        let stroke_width = num(geometry.border_width());

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        svg.push('\n');

        for instruction in &frame.instructions {
            let Some(site) = catalog.get(instruction.site) else {
                tracing::warn!("No site {} in catalog, skipping", instruction.site);
                continue;
            };
            let rect = geometry.site_rect(site);

            svg.push_str(&format!(
                r#"  <rect id="site-{}" x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                site.id,
                num(rect.x),
                num(rect.y),
                num(rect.width),
                num(rect.height),
                self.palette.fill(instruction.color).to_css(),
                stroke,
                stroke_width
            ));
            svg.push('\n');

            if instruction.center_marker {
                let marker = geometry.marker(site);
                svg.push_str(&format!(
                    r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                    num(marker.cx),
                    num(marker.cy),
                    num(marker.radius),
                    self.palette.marker.to_css()
                ));
                svg.push('\n');
            }

            if let Some(label) = instruction.label {
                let (x, y) = geometry.label_anchor(site);
                svg.push_str(&format!(
                    r#"  <text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
                    num(x),
                    num(y),
                    LABEL_FONT,
                    num(geometry.label_font_size()),
                    self.palette.label.to_css(),
                    label
                ));
                svg.push('\n');
            }
        }

        svg.push_str("</svg>");
        Ok(svg)
    }
}
