//! Visual styling for chart series.

use egui::Color32;
use egui_plot::LineStyle;

/// The visual presentation of one series (color, line width, style).
#[derive(Debug, Clone)]
pub struct SeriesLook {
    pub color: Color32,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for SeriesLook {
    fn default() -> Self {
        Self {
            color: Color32::GRAY,
            width: 2.0,
            style: LineStyle::Solid,
        }
    }
}

impl SeriesLook {
    /// Create a look with a color allocated from the palette by position.
    pub fn new(index: usize) -> Self {
        Self {
            color: Self::alloc_color(index),
            ..Default::default()
        }
    }

    /// Allocate a distinct color for the given series position. The palette
    /// cycles when more series are shown than it has entries.
    pub fn alloc_color(index: usize) -> Color32 {
        const PALETTE: [Color32; 12] = [
            Color32::from_rgb(0xf7, 0x25, 0x85),
            Color32::from_rgb(0x06, 0xd6, 0xa0),
            Color32::from_rgb(0x3b, 0x82, 0xf6),
            Color32::from_rgb(0xff, 0xd1, 0x66),
            Color32::from_rgb(0xa8, 0x55, 0xf7),
            Color32::from_rgb(0xff, 0x6b, 0x35),
            Color32::from_rgb(0x00, 0xb4, 0xd8),
            Color32::from_rgb(0x95, 0xd5, 0xb2),
            Color32::from_rgb(0xe6, 0x39, 0x46),
            Color32::from_rgb(0x45, 0x7b, 0x9d),
            Color32::from_rgb(0x2e, 0xc4, 0xb6),
            Color32::from_rgb(0xff, 0x9f, 0x1c),
        ];
        PALETTE[index % PALETTE.len()]
    }
}
