use serde::{Deserialize, Serialize};

use crate::render::primitives::{Color, RectPrimitive, TextHAlign, TextPrimitive};
use crate::render::scene::PlotArea;

/// Page layout for the static vector-export surface.
///
/// Defaults describe a landscape A3 page in points with a 3x2 chart grid in
/// the upper ~55% of the usable area and the summary table below. Cell
/// interiors reserve room for the title above and the axis labels on the
/// left and bottom, mirroring the interactive surface's margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorPageLayout {
    pub page_width: f64,
    pub page_height: f64,
    pub margin: f64,
    pub columns: usize,
    pub rows: usize,
    pub h_gap: f64,
    pub v_gap: f64,
    pub charts_area_ratio: f64,
    pub legend_height: f64,
}

impl Default for VectorPageLayout {
    fn default() -> Self {
        Self {
            page_width: 1190.55,
            page_height: 841.89,
            margin: 30.0,
            columns: 3,
            rows: 2,
            h_gap: 24.0,
            v_gap: 8.0,
            charts_area_ratio: 0.55,
            legend_height: 40.0,
        }
    }
}

impl VectorPageLayout {
    #[must_use]
    pub fn charts_top(&self) -> f64 {
        self.margin + self.legend_height
    }

    #[must_use]
    pub fn charts_area_height(&self) -> f64 {
        (self.page_height - self.margin * 2.0) * self.charts_area_ratio
    }

    /// Top edge of the summary table region, under the chart grid.
    #[must_use]
    pub fn table_top(&self) -> f64 {
        self.charts_top() + self.charts_area_height() + 10.0
    }

    #[must_use]
    pub fn cell_width(&self) -> f64 {
        let charts_width = self.page_width - self.margin * 2.0;
        (charts_width - self.h_gap * (self.columns as f64 - 1.0)) / self.columns as f64
    }

    #[must_use]
    pub fn cell_height(&self) -> f64 {
        (self.charts_area_height() - self.v_gap * (self.rows as f64 - 1.0)) / self.rows as f64
    }

    /// Plot area for the chart at grid slot `index` (row-major), `None` once
    /// the grid is full.
    #[must_use]
    pub fn plot_area_for_slot(&self, index: usize) -> Option<PlotArea> {
        let col = index % self.columns;
        let row = index / self.columns;
        if row >= self.rows {
            return None;
        }
        let cell_x = self.margin + col as f64 * (self.cell_width() + self.h_gap);
        let cell_y = self.charts_top() + row as f64 * (self.cell_height() + self.v_gap);
        Some(PlotArea {
            left: cell_x + 40.0,
            top: cell_y + 24.0,
            right: cell_x + self.cell_width() - 10.0,
            bottom: cell_y + self.cell_height() - 24.0,
        })
    }

    #[must_use]
    pub fn max_charts(&self) -> usize {
        self.columns * self.rows
    }
}

/// Builds the legend row primitives: one color swatch plus label per
/// scenario, flowing left to right under the page title.
#[must_use]
pub fn legend_primitives(
    entries: &[(String, Color)],
    layout: &VectorPageLayout,
) -> (Vec<RectPrimitive>, Vec<TextPrimitive>) {
    const SWATCH_WIDTH: f64 = 14.0;
    const SWATCH_HEIGHT: f64 = 6.0;
    const ITEM_GAP: f64 = 40.0;
    const LABEL_FONT_SIZE: f64 = 10.0;
    // Rough advance width per glyph; surfaces without font metrics share it.
    const GLYPH_WIDTH: f64 = 5.4;

    let legend_y = layout.margin + 18.0;
    let mut x = layout.margin;
    let mut rects = Vec::with_capacity(entries.len());
    let mut texts = Vec::with_capacity(entries.len());

    for (label, color) in entries {
        let label_width = label.chars().count() as f64 * GLYPH_WIDTH;
        let item_width = SWATCH_WIDTH + 6.0 + label_width;
        if x + item_width > layout.page_width - layout.margin {
            x = layout.margin;
        }
        rects.push(RectPrimitive::new(
            x,
            legend_y - SWATCH_HEIGHT + 2.0,
            SWATCH_WIDTH,
            SWATCH_HEIGHT,
            *color,
        ));
        texts.push(TextPrimitive::new(
            label.clone(),
            x + SWATCH_WIDTH + 6.0,
            legend_y,
            LABEL_FONT_SIZE,
            Color::BLACK,
            TextHAlign::Left,
        ));
        x += item_width + ITEM_GAP;
    }

    (rects, texts)
}

#[cfg(test)]
mod tests {
    use super::VectorPageLayout;

    #[test]
    fn grid_yields_exactly_six_slots() {
        let layout = VectorPageLayout::default();
        assert_eq!(layout.max_charts(), 6);
        for slot in 0..6 {
            let area = layout.plot_area_for_slot(slot).expect("slot in grid");
            assert!(area.width() > 0.0);
            assert!(area.height() > 0.0);
        }
        assert!(layout.plot_area_for_slot(6).is_none());
    }

    #[test]
    fn table_region_starts_below_the_chart_grid() {
        let layout = VectorPageLayout::default();
        let last = layout.plot_area_for_slot(5).expect("slot in grid");
        assert!(layout.table_top() > last.bottom);
    }

    #[test]
    fn cells_do_not_overlap_horizontally() {
        let layout = VectorPageLayout::default();
        let a = layout.plot_area_for_slot(0).expect("slot 0");
        let b = layout.plot_area_for_slot(1).expect("slot 1");
        assert!(b.left > a.right);
    }
}
