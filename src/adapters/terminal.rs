use crate::core::geometry::FaceGeometry;
use crate::core::{Catalog, DisplayState, Frame, Renderer, Result, SiteColor};
use crate::domain::palette::Palette;

// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;
const RESET: &str = "\x1b[0m";

/// Draws the face as a grid of `cols` x `rows` character cells.
///
/// In colour mode each cell gets a 24-bit ANSI background. Plain mode spells
/// the colours out instead: `.` empty, `H` hour, `M` minute, `B` both.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    cols: usize,
    rows: usize,
    palette: Palette,
    color: bool,
}

impl TerminalRenderer {
    pub fn new(cols: usize, rows: usize, palette: Palette) -> Self {
        Self {
            cols,
            rows,
            palette,
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn fill_char(&self, color: SiteColor) -> char {
        if self.color {
            return ' ';
        }
        match color {
            SiteColor::Empty => '.',
            SiteColor::Hour => 'H',
            SiteColor::Minute => 'M',
            SiteColor::HourAndMinute => 'B',
        }
    }

    fn marker_char(&self) -> char {
        if self.color {
            '●'
        } else {
            '*'
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&self, catalog: &Catalog, frame: &Frame, display: &DisplayState) -> Result<String> {
        let geometry = FaceGeometry::compute(
            catalog,
            self.cols as f64,
            self.rows as f64 * CELL_ASPECT,
            display.constrain,
        );

        let rects: Vec<_> = frame
            .instructions
            .iter()
            .map(|instruction| catalog.get(instruction.site).map(|site| geometry.site_rect(site)))
            .collect();

        // Index into frame.instructions of the site covering each cell.
        let mut owner: Vec<Vec<Option<usize>>> = vec![vec![None; self.cols]; self.rows];
        for (row, cells) in owner.iter_mut().enumerate() {
            let py = (row as f64 + 0.5) * CELL_ASPECT;
            for (col, cell) in cells.iter_mut().enumerate() {
                let px = col as f64 + 0.5;
                *cell = rects
                    .iter()
                    .position(|rect| rect.is_some_and(|rect| rect.contains(px, py)));
            }
        }

        let mut glyphs: Vec<Vec<Option<char>>> = vec![vec![None; self.cols]; self.rows];
        for (index, instruction) in frame.instructions.iter().enumerate() {
            let Some(rect) = rects[index] else {
                continue;
            };

            if instruction.center_marker {
                let (cx, cy) = rect.center();
                let (col, row) = (cx.floor() as usize, (cy / CELL_ASPECT).floor() as usize);
                if row < self.rows && col < self.cols && owner[row][col] == Some(index) {
                    glyphs[row][col] = Some(self.marker_char());
                }
            }

            if let Some(label) = instruction.label {
                let first = owner.iter().enumerate().find_map(|(row, cells)| {
                    cells
                        .iter()
                        .position(|cell| *cell == Some(index))
                        .map(|col| (row, col))
                });
                if let Some((row, col)) = first {
                    for (offset, digit) in label.to_string().chars().enumerate() {
                        let col = col + offset;
                        if col < self.cols && owner[row][col] == Some(index) {
                            glyphs[row][col] = Some(digit);
                        }
                    }
                }
            }
        }

        let mut lines = Vec::with_capacity(self.rows);
        for (row, cells) in owner.iter().enumerate() {
            let mut line = String::new();
            for (col, cell) in cells.iter().enumerate() {
                let Some(index) = *cell else {
                    if self.color {
                        line.push_str(RESET);
                    }
                    line.push(' ');
                    continue;
                };

                let color = frame.instructions[index].color;
                let glyph = glyphs[row][col];
                if self.color {
                    line.push_str(&self.palette.fill(color).ansi_background());
                    if glyph.is_some() {
                        line.push_str(&self.palette.label.ansi_foreground());
                    }
                }
                line.push(glyph.unwrap_or_else(|| self.fill_char(color)));
            }
            if self.color {
                line.push_str(RESET);
            }
            lines.push(line);
        }

        Ok(lines.join("\n"))
    }
}
