use crate::domain::model::{Catalog, Site};

// Fractions of the average unit size.
pub const BORDER_WIDTH: f64 = 0.03;
pub const MARKER_RADIUS: f64 = 0.1;
pub const LABEL_FONT_SIZE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// Placement of the layout on a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    pub face_width: f64,
    pub face_height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub unit_width: f64,
    pub unit_height: f64,
}

impl FaceGeometry {
    /// With `constrain`, the face is the largest rectangle of the layout's
    /// aspect ratio that fits the surface, centred. Otherwise it stretches to
    /// fill the surface.
    pub fn compute(catalog: &Catalog, width: f64, height: f64, constrain: bool) -> Self {
        let width_units = f64::from(catalog.width_units());
        let height_units = f64::from(catalog.height_units());

        let (face_width, face_height) = if constrain {
            let ratio = height_units / width_units;
            if height < width * ratio {
                (height / ratio, height)
            } else {
                (width, width * ratio)
            }
        } else {
            (width, height)
        };

        Self {
            face_width,
            face_height,
            offset_x: (width - face_width) / 2.0,
            offset_y: (height - face_height) / 2.0,
            unit_width: face_width / width_units,
            unit_height: face_height / height_units,
        }
    }

    pub fn unit_average(&self) -> f64 {
        (self.unit_width + self.unit_height) / 2.0
    }

    pub fn site_rect(&self, site: &Site) -> Rect {
        let size = f64::from(site.size);
        Rect {
            x: f64::from(site.x) * self.unit_width + self.offset_x,
            y: f64::from(site.y) * self.unit_height + self.offset_y,
            width: size * self.unit_width,
            height: size * self.unit_height,
        }
    }

    pub fn marker(&self, site: &Site) -> Circle {
        let (cx, cy) = self.site_rect(site).center();
        Circle {
            cx,
            cy,
            radius: MARKER_RADIUS * self.unit_average(),
        }
    }

    pub fn border_width(&self) -> f64 {
        BORDER_WIDTH * self.unit_average()
    }

    pub fn label_font_size(&self) -> f64 {
        LABEL_FONT_SIZE * self.unit_average()
    }

    /// Baseline origin of a site's label.
    pub fn label_anchor(&self, site: &Site) -> (f64, f64) {
        let rect = self.site_rect(site);
        let font = self.label_font_size();
        (rect.x + font / 4.0, rect.y + font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SiteId;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_exact_aspect_surface() {
        let catalog = Catalog::standard();
        let geometry = FaceGeometry::compute(&catalog, 800.0, 500.0, true);
        assert!(approx(geometry.unit_width, 100.0));
        assert!(approx(geometry.unit_height, 100.0));
        assert!(approx(geometry.offset_x, 0.0));
        assert!(approx(geometry.offset_y, 0.0));
    }

    #[test]
    fn test_wide_surface_is_centred_horizontally() {
        let catalog = Catalog::standard();
        let geometry = FaceGeometry::compute(&catalog, 1000.0, 500.0, true);
        assert!(approx(geometry.face_width, 800.0));
        assert!(approx(geometry.offset_x, 100.0));
        assert!(approx(geometry.offset_y, 0.0));
    }

    #[test]
    fn test_tall_surface_is_centred_vertically() {
        let catalog = Catalog::standard();
        let geometry = FaceGeometry::compute(&catalog, 800.0, 900.0, true);
        assert!(approx(geometry.face_height, 500.0));
        assert!(approx(geometry.offset_y, 200.0));
    }

    #[test]
    fn test_unconstrained_fills_surface() {
        let catalog = Catalog::standard();
        let geometry = FaceGeometry::compute(&catalog, 1000.0, 500.0, false);
        assert!(approx(geometry.unit_width, 125.0));
        assert!(approx(geometry.unit_height, 100.0));
        assert!(approx(geometry.offset_x, 0.0));
    }

    #[test]
    fn test_site_decorations() {
        let catalog = Catalog::standard();
        let geometry = FaceGeometry::compute(&catalog, 800.0, 500.0, true);
        let e = catalog.get(SiteId('e')).unwrap();

        let rect = geometry.site_rect(e);
        assert_eq!(
            rect,
            Rect {
                x: 300.0,
                y: 0.0,
                width: 500.0,
                height: 500.0
            }
        );

        let marker = geometry.marker(e);
        assert!(approx(marker.cx, 550.0));
        assert!(approx(marker.cy, 250.0));
        assert!(approx(marker.radius, 10.0));
        assert!(approx(geometry.border_width(), 3.0));

        let (lx, ly) = geometry.label_anchor(e);
        assert!(approx(lx, 307.5));
        assert!(approx(ly, 30.0));
    }
}
