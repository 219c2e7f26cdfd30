use crate::CellCoord;
use crate::GridSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::grey(0);
    pub const WHITE: Self = Self::grey(255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn grey(v: u8) -> Self {
        Self::rgb(v, v, v)
    }
}

/// Something that can be drawn on one pixel at a time.
///
/// Coordinates are in grid space, one pixel per cell.
pub trait Surface {
    /// Paint every pixel
    fn fill(&mut self, color: Color);

    /// Paint the pixel at `(x, y)`. Pixels off the surface are ignored.
    fn set(&mut self, x: CellCoord, y: CellCoord, color: Color);
}

/// An in-memory [`Surface`]
pub struct Framebuffer {
    /// Pixels, row by row
    px: Vec<Color>,

    /// Width of the framebuffer
    w: GridSize,

    /// Height of the framebuffer
    h: GridSize,
}

impl Framebuffer {
    pub fn new(w: GridSize, h: GridSize) -> Self {
        Self {
            px: vec![Color::WHITE; w as usize * h as usize],
            w,
            h,
        }
    }

    pub fn width(&self) -> GridSize {
        self.w
    }

    pub fn height(&self) -> GridSize {
        self.h
    }

    pub fn pixel(&self, x: CellCoord, y: CellCoord) -> Option<Color> {
        self.xy_from(x, y).map(|i| self.px[i])
    }

    /// One row of pixels
    pub fn row(&self, y: GridSize) -> &[Color] {
        let w = self.w as usize;
        let start = y as usize * w;

        &self.px[start..start + w]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.px.chunks(self.w.max(1) as usize)
    }

    fn xy_from(&self, x: CellCoord, y: CellCoord) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.w as CellCoord || y >= self.h as CellCoord {
            return None;
        }

        Some(y as usize * self.w as usize + x as usize)
    }
}

impl Surface for Framebuffer {
    fn fill(&mut self, color: Color) {
        self.px.fill(color);
    }

    fn set(&mut self, x: CellCoord, y: CellCoord, color: Color) {
        if let Some(i) = self.xy_from(x, y) {
            self.px[i] = color;
        }
    }
}
