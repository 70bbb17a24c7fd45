//! Pixel buffer drawn to the terminal with half-block characters
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as the
//! foreground of `▀`, the lower one as the background.

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Fixed-size pixel grid
#[derive(Debug, Clone)]
pub struct Canvas {
    w: usize,
    h: usize,
    px: Vec<Rgb>,
}

impl Canvas {
    /// `h` should be even; the last odd row is never shown
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![Rgb::BLACK; w * h],
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn fill(&mut self, c: Rgb) {
        self.px.fill(c);
    }

    /// Out-of-bounds writes are dropped
    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, c: Rgb) {
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.set(cx + dx, cy + dy, c);
                }
            }
        }
    }

    /// Number of terminal rows needed
    pub fn cell_rows(&self) -> usize {
        self.h / 2
    }

    /// (upper, lower) pixel pair shown in terminal cell (`col`, `row`)
    pub fn cell(&self, col: usize, row: usize) -> (Rgb, Rgb) {
        (self.get(col, row * 2), self.get(col, row * 2 + 1))
    }
}
