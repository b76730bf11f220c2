//! Cell grid the views draw into and the renderer flushes.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const TEXT: Rgb = Rgb::new(220, 220, 220);
    pub const WALL: Rgb = Rgb::new(140, 140, 150);
    pub const PLAYER: Rgb = Rgb::new(80, 220, 120);
    pub const BOT: Rgb = Rgb::new(220, 90, 90);
    pub const BALL: Rgb = Rgb::new(255, 255, 255);
    pub const CLOCK: Rgb = Rgb::new(120, 220, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::TEXT,
            bg: Rgb::BLACK,
            bold: false,
        }
    }
}

impl CellStyle {
    /// Default background with the given foreground.
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::BLACK,
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: CellStyle::fg(Rgb::TEXT),
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of styled cells.
///
/// Drawing takes signed coordinates and silently clips anything off the
/// grid, so callers can draw a paddle or ball that is partly outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let in_x = (0..i32::from(self.width)).contains(&x);
        let in_y = (0..i32::from(self.height)).contains(&y);
        (in_x && in_y).then(|| y as usize * usize::from(self.width) + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(i32::from(x), i32::from(y)).map(|i| self.cells[i])
    }

    /// Reset every cell to blank.
    pub fn wipe(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    pub fn plot(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = style.into_cell(ch);
        }
    }

    /// A vertical run of `len` cells starting at row `top`.
    pub fn column(&mut self, x: i32, top: i32, len: i32, ch: char, style: CellStyle) {
        for y in top..top + len {
            self.plot(x, y, ch, style);
        }
    }

    /// Left-aligned text on row `y`, clipped at the right edge.
    pub fn text(&mut self, x: i32, y: i32, s: &str, style: CellStyle) {
        for (cx, ch) in (x..).zip(s.chars()) {
            if cx >= i32::from(self.width) {
                break;
            }
            self.plot(cx, y, ch, style);
        }
    }

    /// Characters of row `y` without styling.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_grid_plots_are_clipped() {
        let mut fb = FrameBuffer::new(3, 2);
        let style = CellStyle::default();
        fb.plot(3, 0, 'x', style);
        fb.plot(-1, 1, 'x', style);
        fb.plot(0, 2, 'x', style);
        assert_eq!(fb.row_text(0), "   ");
        assert_eq!(fb.row_text(1), "   ");
        assert_eq!(fb.get(3, 0), None);
    }

    #[test]
    fn test_column_partly_outside() {
        let mut fb = FrameBuffer::new(1, 3);
        fb.column(0, 1, 3, '#', CellStyle::default());
        assert_eq!(fb.row_text(0), " ");
        assert_eq!(fb.row_text(1), "#");
        assert_eq!(fb.row_text(2), "#");
    }

    #[test]
    fn test_text_clips_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.text(1, 0, "hello", CellStyle::default());
        assert_eq!(fb.row_text(0), " hel");
    }

    #[test]
    fn test_wipe_restores_blank() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.text(0, 0, "ab", CellStyle::fg(Rgb::BALL).bold());
        fb.wipe();
        assert_eq!(fb.get(0, 0), Some(Cell::BLANK));
    }
}
