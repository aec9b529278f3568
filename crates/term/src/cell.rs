//! Terminal cell grid: two vertically stacked pixels per character cell.

use tui_frogger_gfx::FrameBuffer;
use tui_frogger_types::{FB_H, FB_W};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Terminal colours for the 16 palette indices.
pub const PALETTE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),       // transparent / void
    Rgb::new(16, 16, 20),    // near-black
    Rgb::new(80, 220, 70),   // frog green
    Rgb::new(30, 120, 40),   // leaf
    Rgb::new(240, 210, 60),  // yellow
    Rgb::new(240, 140, 40),  // orange
    Rgb::new(120, 255, 80),  // lime
    Rgb::new(70, 70, 80),    // road
    Rgb::new(45, 45, 55),    // slate
    Rgb::new(150, 100, 50),  // wood
    Rgb::new(220, 60, 50),   // red
    Rgb::new(100, 65, 30),   // bark
    Rgb::new(30, 60, 160),   // water
    Rgb::new(110, 170, 255), // sky
    Rgb::new(235, 235, 235), // white
    Rgb::new(110, 140, 60),  // olive
];

/// One terminal cell: the palette indices of its upper and lower pixel.
/// Rendered as '▀' with the foreground colouring the upper half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub upper: u8,
    pub lower: u8,
}

/// Cell grid covering the logical screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: Vec<Cell>,
}

impl CellGrid {
    pub const WIDTH: i32 = FB_W;
    pub const HEIGHT: i32 = FB_H / 2;

    pub fn new() -> Self {
        Self {
            cells: vec![Cell::default(); (Self::WIDTH * Self::HEIGHT) as usize],
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.cells[(y * Self::WIDTH + x) as usize]
    }

    /// Fold a pixel framebuffer into cells, two rows at a time.
    pub fn load(&mut self, fb: &FrameBuffer) {
        for cy in 0..Self::HEIGHT {
            for cx in 0..Self::WIDTH {
                self.cells[(cy * Self::WIDTH + cx) as usize] = Cell {
                    upper: fb.get(cx, cy * 2).unwrap_or(0),
                    lower: fb.get(cx, cy * 2 + 1).unwrap_or(0),
                };
            }
        }
    }
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new()
    }
}
