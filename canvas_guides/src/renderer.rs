// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draws tick labels and the legend onto a [`Canvas`].
//!
//! [`CanvasTextRenderer::draw`] is meant to run once per completed plot
//! draw. It replaces markup labels with canvas text: unrotated labels are
//! centered under (or right-aligned beside) their tick, rotated labels are
//! positioned through the rotated-label geometry in [`crate::rotation`].

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use canvas_guides_text::{TextStyle, parse_css_font};
use kurbo::{Point, Size};
use log::{debug, trace, warn};
use smallvec::SmallVec;

use crate::axis::{Axis, AxisSide};
use crate::environment::RenderEnvironment;
use crate::legend::{draw_legend, layout_legend};
use crate::options::{GridOptions, LABEL_COLOR};
use crate::plot::{MarkupLabels, PlotGeometry, PlotHost};
use crate::rotation::{AngleSign, placement_offset, rotated_bounds};
use crate::surface::{Canvas, TextAlign, TextBaseline};

/// Draws canvas guides for a [`PlotHost`].
///
/// The render environment is probed from the first canvas drawn to and kept
/// for the renderer's lifetime, unless one is given up front.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanvasTextRenderer {
    environment: Option<RenderEnvironment>,
}

impl CanvasTextRenderer {
    /// A renderer that probes the environment on first draw.
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer using `environment` without probing.
    pub fn with_environment(environment: RenderEnvironment) -> Self {
        Self {
            environment: Some(environment),
        }
    }

    /// The environment in use, once known.
    pub fn environment(&self) -> Option<RenderEnvironment> {
        self.environment
    }

    /// Runs one draw pass.
    ///
    /// Does nothing unless canvas text is enabled. Tick labels are drawn only
    /// when the grid is shown; the legend is drawn whenever it has rows.
    pub fn draw<H, C>(&mut self, host: &mut H, canvas: &mut C)
    where
        H: PlotHost + ?Sized,
        C: Canvas + ?Sized,
    {
        let env = *self
            .environment
            .get_or_insert_with(|| RenderEnvironment::probe(&*canvas));

        let grid = &host.options().grid;
        if !grid.canvas_text.show {
            return;
        }
        let grid_show = grid.show;
        let style = parse_css_font(&grid.canvas_text.font).unwrap_or_else(|err| {
            warn!("invalid canvas text font {:?}: {err}", grid.canvas_text.font);
            TextStyle::default()
        });
        canvas.set_font(&style);

        if grid_show {
            host.remove_markup_labels(MarkupLabels::Ticks);
            canvas.set_fill_color(LABEL_COLOR);
            let geometry = host.geometry();
            let grid = &host.options().grid;
            for axis in host.axes() {
                draw_axis_labels(canvas, axis, &geometry, grid, &style, env);
            }
        }

        host.remove_markup_labels(MarkupLabels::Legend);
        let options = host.options();
        if let Some(layout) = layout_legend(
            host.legend_entries(),
            &options.legend,
            &options.grid,
            &host.geometry(),
            &style,
            &*canvas,
        ) {
            draw_legend(canvas, &layout, &options.legend, &options.grid, &style);
        }

        debug!(
            "drew canvas guides for {} axes ({:?} rotation)",
            host.axes().len(),
            env.backend()
        );
    }
}

fn draw_axis_labels<C: Canvas + ?Sized>(
    canvas: &mut C,
    axis: &Axis,
    geometry: &PlotGeometry,
    grid: &GridOptions,
    style: &TextStyle,
    env: RenderEnvironment,
) {
    if AngleSign::of(axis.label_angle()).is_some() {
        draw_rotated_labels(canvas, axis, geometry, style, env);
        return;
    }

    let margin = grid.label_offset();
    let ascent = style.ascent();
    let breaks = grid.canvas_text.line_breaks;
    let offset = geometry.offset;
    let size = geometry.size;

    for (value, label) in axis.drawable_ticks() {
        match axis.side {
            AxisSide::Bottom | AxisSide::Top => {
                let lines: SmallVec<[&str; 4]> = if breaks.show {
                    label.split_whitespace().collect()
                } else {
                    SmallVec::from_slice(&[label])
                };
                let center = offset.x + axis.p2c(value);

                if axis.side == AxisSide::Bottom {
                    let mut y = offset.y + size.height + margin;
                    if lines.len() > 1 {
                        y -= breaks.margin_bottom;
                    }
                    for line in lines {
                        let x = centered_x(&*canvas, line, style, center);
                        y += ascent;
                        canvas.fill_text(
                            line,
                            Point::new(x, y),
                            TextAlign::Left,
                            TextBaseline::Alphabetic,
                        );
                        y += breaks.line_spacing;
                    }
                } else {
                    let mut y = offset.y - margin;
                    if lines.len() > 1 {
                        y += breaks.margin_top;
                    }
                    for line in lines.into_iter().rev() {
                        let x = centered_x(&*canvas, line, style, center);
                        canvas.fill_text(
                            line,
                            Point::new(x, y),
                            TextAlign::Left,
                            TextBaseline::Alphabetic,
                        );
                        y -= ascent + breaks.line_spacing;
                    }
                }
            }
            AxisSide::Left | AxisSide::Right => {
                let width = canvas.measure(label, style).advance_width.round();
                let x = if axis.side == AxisSide::Left {
                    offset.x - margin - width
                } else {
                    offset.x + size.width + margin
                };
                let y = (offset.y + axis.p2c(value) - ascent / 2.0).round() + ascent;
                canvas.fill_text(
                    label,
                    Point::new(x, y),
                    TextAlign::Left,
                    TextBaseline::Alphabetic,
                );
            }
        }
    }
}

fn centered_x<C: Canvas + ?Sized>(canvas: &C, line: &str, style: &TextStyle, center: f64) -> f64 {
    (center - canvas.measure(line, style).advance_width / 2.0).round()
}

fn draw_rotated_labels<C: Canvas + ?Sized>(
    canvas: &mut C,
    axis: &Axis,
    geometry: &PlotGeometry,
    style: &TextStyle,
    env: RenderEnvironment,
) {
    let angle = axis.label_angle();
    let label_box = axis.options.label_box.unwrap_or_else(|| {
        let widest = axis
            .drawable_ticks()
            .map(|(_, label)| canvas.measure(label, style).advance_width)
            .fold(0.0_f64, f64::max);
        Size::new(widest, style.ascent())
    });
    let rotated = rotated_bounds(label_box.width, label_box.height, angle);
    let placement = placement_offset(axis.side, angle, &rotated, env.backend());
    trace!(
        "{:?} axis labels at {angle}deg: box {rotated:?}, placement {placement:?}",
        axis.side
    );

    let b = axis.layout_box;
    let offset = geometry.offset;
    for (value, label) in axis.drawable_ticks() {
        let anchor = match axis.side {
            AxisSide::Bottom => Point::new(offset.x + axis.p2c(value), b.top + b.padding),
            AxisSide::Top => Point::new(
                offset.x + axis.p2c(value),
                b.top + b.height - b.padding - rotated.height,
            ),
            AxisSide::Left => Point::new(b.left + b.width - b.padding, offset.y + axis.p2c(value)),
            AxisSide::Right => Point::new(b.left + b.padding, offset.y + axis.p2c(value)),
        };
        let origin = anchor + placement.translation();

        canvas.save();
        canvas.translate(origin.to_vec2());
        env.apply_rotation(canvas, angle);
        canvas.fill_text(label, Point::ZERO, placement.text_align, TextBaseline::Top);
        canvas.restore();
    }
}
