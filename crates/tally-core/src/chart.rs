// File: crates/tally-core/src/chart.rs
// Summary: Chart state (datasets, config, painter, scrubber) and the two-layer draw/invalidate cycle.

use std::time::Duration;

use tracing::debug;

use crate::axis::XRange;
use crate::canvas::DrawSurface;
use crate::config::ChartConfig;
use crate::error::Result;
use crate::layout::{compute_layout, Layout};
use crate::paint::{BarPainter, ChartPainter, Highlight, LinePainter};
use crate::scale::XMapping;
use crate::scrub::{PointerEvent, Scrubber};
use crate::text::TextMeasure;
use crate::types::{CanvasSize, Dataset, SelectedValue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    pub fn x_mapping(self) -> XMapping {
        match self {
            ChartKind::Line => XMapping::Point,
            ChartKind::Bar => XMapping::BarCenter,
        }
    }

    /// Gap between the y axis (and the right margin) and the plot area, in dp.
    pub fn axis_to_graph_margin(self, config: &ChartConfig) -> f32 {
        match self {
            ChartKind::Line => 0.0,
            ChartKind::Bar => config.bar.horizontal_margin / 2.0,
        }
    }
}

/// A line or bar chart bound to a host surface.
///
/// Drawing is split into a base layer (axes, gridlines, labels, data) and an
/// overlay (highlight). Pointer input only dirties the overlay; data, size and
/// config changes dirty both.
pub struct Chart {
    datasets: Vec<Dataset>,
    kind: ChartKind,
    config: ChartConfig,
    painter: Box<dyn ChartPainter>,
    scrubber: Scrubber,
    size: Option<CanvasSize>,
    layout: Option<Layout>,
    base_dirty: bool,
    overlay_dirty: bool,
}

impl Chart {
    pub fn new(kind: ChartKind, datasets: Vec<Dataset>) -> Self {
        let config = ChartConfig::default();
        let painter: Box<dyn ChartPainter> = match kind {
            ChartKind::Line => Box::new(LinePainter::default()),
            ChartKind::Bar => Box::new(BarPainter),
        };
        let mut chart = Self {
            datasets: Vec::new(),
            kind,
            scrubber: Scrubber::new(config.scrubbing, config.reset_delay),
            config,
            painter,
            size: None,
            layout: None,
            base_dirty: true,
            overlay_dirty: true,
        };
        chart.set_datasets(datasets);
        chart
    }

    pub fn line(datasets: Vec<Dataset>) -> Self {
        Self::new(ChartKind::Line, datasets)
    }

    pub fn bar(datasets: Vec<Dataset>) -> Self {
        Self::new(ChartKind::Bar, datasets)
    }

    pub fn with_config(mut self, config: ChartConfig) -> Result<Self> {
        self.set_config(config)?;
        Ok(self)
    }

    pub fn with_painter(mut self, painter: impl ChartPainter + 'static) -> Self {
        self.painter = Box::new(painter);
        self.invalidate();
        self
    }

    pub fn with_size(mut self, size: CanvasSize) -> Self {
        self.resize(size);
        self
    }

    /// Called whenever the selected value or its highlight flag changes.
    pub fn on_selected_value(mut self, f: impl FnMut(SelectedValue) + 'static) -> Self {
        self.scrubber.on_selected_value(f);
        self
    }

    /// Called with `true` while the pointer is down and `false` on release.
    pub fn on_dragging(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.scrubber.on_dragging(f);
        self
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn scrubber(&self) -> &Scrubber {
        &self.scrubber
    }

    pub fn set_config(&mut self, config: ChartConfig) -> Result<()> {
        config.validate()?;
        self.scrubber.set_behavior(config.scrubbing, config.reset_delay);
        self.config = config;
        self.reset_selection();
        self.discard_layout();
        Ok(())
    }

    /// Replace the data; the selection returns to its default end.
    ///
    /// Pointer input is ignored until the next base draw lays out the new data.
    pub fn set_datasets(&mut self, datasets: Vec<Dataset>) {
        self.datasets = datasets;
        self.reset_selection();
        self.discard_layout();
    }

    pub fn resize(&mut self, size: CanvasSize) {
        if self.size != Some(size) {
            self.size = Some(size);
            self.discard_layout();
        }
    }

    /// Mark both layers for redraw, e.g. after the host's font metrics change.
    pub fn invalidate(&mut self) {
        self.base_dirty = true;
        self.overlay_dirty = true;
    }

    pub fn needs_base_redraw(&self) -> bool {
        self.base_dirty
    }

    pub fn needs_overlay_redraw(&self) -> bool {
        self.overlay_dirty
    }

    /// Layout from the last base draw; `None` after data, config or size changes until the next one.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn selected_value(&self) -> Option<SelectedValue> {
        self.scrubber.selected()
    }

    /// Current highlight, when the selection is highlighted and has a position.
    pub fn highlight(&self) -> Option<Highlight> {
        let selected = self.scrubber.selected().filter(|s| s.is_highlighted)?;
        self.layout.as_ref()?.highlight_at(&self.datasets, selected.x_value)
    }

    /// Draw axes, gridlines, labels and data, recomputing the layout if it is stale.
    /// Draws nothing when there is no size or no data.
    pub fn draw_base(&mut self, surface: &mut dyn DrawSurface, measure: &dyn TextMeasure) -> Result<()> {
        if self.base_dirty || self.layout.is_none() {
            self.relayout(measure)?;
        }
        let Some(layout) = self.layout.as_ref() else {
            return Ok(());
        };
        let painter = self.painter.as_ref();
        if let Some(y) = layout.x_axis {
            painter.draw_x_axis(surface, layout, y);
        }
        painter.draw_y_axis(surface, layout);
        for line in &layout.gridlines {
            painter.draw_grid_line(surface, layout, line);
            if let Some(label) = &line.label {
                painter.draw_label(surface, label);
            }
        }
        for label in &layout.x_labels {
            painter.draw_label(surface, label);
        }
        painter.draw_points(surface, layout);
        Ok(())
    }

    /// Draw the highlight layer; nothing when no value is highlighted.
    pub fn draw_overlay(&mut self, surface: &mut dyn DrawSurface) {
        self.overlay_dirty = false;
        let (Some(highlight), Some(layout)) = (self.highlight(), self.layout.as_ref()) else {
            return;
        };
        self.painter.draw_highlight(surface, layout, &highlight);
    }

    /// Draw both layers onto one surface.
    pub fn render(&mut self, surface: &mut dyn DrawSurface, measure: &dyn TextMeasure) -> Result<()> {
        self.draw_base(surface, measure)?;
        self.draw_overlay(surface);
        Ok(())
    }

    /// Feed a pointer event at host time `now`. Returns true when the overlay needs a redraw.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Duration) -> bool {
        let Some(layout) = self.layout.as_ref() else {
            return false;
        };
        let changed = self.scrubber.handle(event, &layout.position_map, now);
        self.overlay_dirty |= changed;
        changed
    }

    /// Advance host time; fires a due selection reset. Returns true when the overlay needs a redraw.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(layout) = self.layout.as_ref() else {
            return false;
        };
        let fired = self.scrubber.tick(now, &layout.position_map);
        self.overlay_dirty |= fired;
        fired
    }

    /// The old geometry no longer matches the chart state.
    fn discard_layout(&mut self) {
        self.layout = None;
        self.invalidate();
    }

    fn reset_selection(&mut self) {
        let x_bounds = XRange::of_points(self.datasets.iter().flat_map(|d| d.points.iter().map(|p| p.x)))
            .map(|r| (r.min, r.max));
        self.scrubber.reset_for_data(x_bounds);
    }

    fn relayout(&mut self, measure: &dyn TextMeasure) -> Result<()> {
        let Some(size) = self.size else {
            self.layout = None;
            return Ok(());
        };
        self.overlay_dirty = true;
        self.layout = None;
        let layout = compute_layout(&self.datasets, self.kind, &self.config, size, measure)?;
        self.base_dirty = false;
        match &layout {
            Some(l) => {
                debug!(values = l.position_map.len(), "position map rebuilt");
                self.scrubber.sync_positions(&l.position_map);
            }
            None => debug!(kind = ?self.kind, "no data to lay out"),
        }
        self.layout = layout;
        Ok(())
    }
}
