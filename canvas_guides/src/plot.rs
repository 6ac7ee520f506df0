// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The plotting engine as seen from the guide renderer.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use log::debug;

use crate::axis::Axis;
use crate::legend::LegendEntry;
use crate::options::PlotOptions;

/// Where the plot area sits on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlotGeometry {
    /// Top-left corner of the plot area.
    pub offset: Point,
    /// Plot area size.
    pub size: Size,
}

impl PlotGeometry {
    /// Creates a geometry from the plot offset and size.
    pub fn new(offset: Point, size: Size) -> Self {
        Self { offset, size }
    }

    /// The plot area as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.offset, self.size)
    }
}

/// Markup-based labels a host may have created before canvas drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkupLabels {
    /// Tick labels.
    Ticks,
    /// The legend.
    Legend,
}

/// What the renderer needs from the plotting engine.
pub trait PlotHost {
    /// Plot-wide options.
    fn options(&self) -> &PlotOptions;

    /// All axes, with labeled ticks and the pixel extent set.
    fn axes(&self) -> &[Axis];

    /// Series in legend order.
    fn legend_entries(&self) -> &[LegendEntry];

    /// Plot area placement.
    fn geometry(&self) -> PlotGeometry;

    /// Removes markup labels of `kind` that canvas drawing replaces.
    fn remove_markup_labels(&mut self, kind: MarkupLabels);
}

/// An in-memory [`PlotHost`].
#[derive(Clone, Debug, Default)]
pub struct Plot {
    options: PlotOptions,
    geometry: PlotGeometry,
    axes: Vec<Axis>,
    entries: Vec<LegendEntry>,
    removed: Vec<MarkupLabels>,
}

impl Plot {
    /// An empty plot.
    pub fn new(options: PlotOptions, geometry: PlotGeometry) -> Self {
        Self {
            options,
            geometry,
            ..Self::default()
        }
    }

    /// Adds an axis, fitting its extent to the plot area.
    pub fn with_axis(mut self, mut axis: Axis) -> Self {
        let extent = if axis.side.is_horizontal() {
            self.geometry.size.width
        } else {
            self.geometry.size.height
        };
        axis.set_extent(extent);
        self.axes.push(axis);
        self
    }

    /// Adds a series.
    pub fn with_entry(mut self, entry: LegendEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Regenerates and labels the ticks of every axis.
    pub fn label_ticks(&mut self) {
        for axis in &mut self.axes {
            axis.label_ticks();
        }
        debug!("labeled ticks on {} axes", self.axes.len());
    }

    /// Markup label kinds removed so far, in order.
    pub fn removed_markup(&self) -> &[MarkupLabels] {
        &self.removed
    }

    /// Mutable access to the options.
    pub fn options_mut(&mut self) -> &mut PlotOptions {
        &mut self.options
    }
}

impl PlotHost for Plot {
    fn options(&self) -> &PlotOptions {
        &self.options
    }

    fn axes(&self) -> &[Axis] {
        &self.axes
    }

    fn legend_entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    fn geometry(&self) -> PlotGeometry {
        self.geometry
    }

    fn remove_markup_labels(&mut self, kind: MarkupLabels) {
        self.removed.push(kind);
    }
}
