// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a sample plot's canvas guides to SVG, once per rotation backend.
//!
//! Usage: `canvas_guides_demo [OUT_DIR]`. Logging follows `RUST_LOG`.

mod svg;

use std::path::PathBuf;

use anyhow::Context as _;
use canvas_guides::{
    Axis, AxisBox, AxisOptions, AxisSide, Canvas, CanvasTextOptions, CanvasTextRenderer,
    GridOptions, LabelPos, LegendEntry, LegendOptions, LegendPosition, LineBreaks, Plot,
    PlotGeometry, PlotHost, PlotOptions, RenderEnvironment, TimeUnit,
};
use kurbo::{Point, Rect, Size, Vec2};
use log::info;
use peniko::Color;
use peniko::color::palette::css;

use crate::svg::SvgCanvas;

const CANVAS_SIZE: Size = Size::new(680.0, 460.0);
const AXIS_THICKNESS: f64 = 60.0;
const AXIS_PADDING: f64 = 4.0;

const SERIES: [(&str, Color, [f64; 8]); 3] = [
    ("requests", css::STEEL_BLUE, [12., 18., 27., 31., 22., 40., 46., 38.]),
    ("errors", css::CRIMSON, [1., 3., 2., 6., 4., 2., 7., 5.]),
    ("retries", css::DARK_ORANGE, [4., 6., 9., 8., 11., 7., 10., 12.]),
];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for (name, env) in [
        ("native", RenderEnvironment::native()),
        ("emulated", RenderEnvironment::emulated()),
    ] {
        let mut plot = sample_plot();
        let mut canvas = SvgCanvas::new(CANVAS_SIZE, env.native_rotation_supported());
        draw_series(&plot, &mut canvas);
        CanvasTextRenderer::with_environment(env).draw(&mut plot, &mut canvas);

        let path = out_dir.join(format!("canvas_guides_{name}.svg"));
        std::fs::write(&path, canvas.to_svg_string())
            .with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn sample_plot() -> Plot {
    let geometry = PlotGeometry::new(Point::new(90.0, 80.0), Size::new(460.0, 280.0));
    let plot_rect = geometry.rect();
    let layout_box = |side| AxisBox::adjacent(side, plot_rect, AXIS_THICKNESS, AXIS_PADDING);

    let canvas_text = CanvasTextOptions::enabled()
        .with_font("italic 11px serif")
        .with_line_breaks(LineBreaks {
            show: true,
            ..LineBreaks::default()
        });
    let grid = GridOptions::default()
        .with_background_color(css::WHITE)
        .with_canvas_text(canvas_text);
    let legend = LegendOptions::default()
        .with_position(LegendPosition::NorthWest)
        .with_margin(Vec2::new(8.0, 8.0))
        .with_background_color(css::LIGHT_GRAY)
        .with_label_formatter(|label, _entry| label.to_uppercase());

    let hour = TimeUnit::Hour.millis();
    let bottom = AxisOptions::default()
        .with_min(0.0)
        .with_max(7.0)
        .with_title("Sample index")
        .with_label_angle(-40.0);
    let top = AxisOptions::default()
        .with_time_mode()
        .with_twelve_hour_clock(true)
        .with_label_angle(30.0);
    let left = AxisOptions::default()
        .with_autoscale_margin(0.02)
        .with_title("Count")
        .with_label_pos(LabelPos::High);
    let right = AxisOptions::default()
        .with_min(0.0)
        .with_max(1.0)
        .with_tick_decimals(2)
        .with_title("Share")
        .with_label_pos(LabelPos::Low)
        .with_label_angle(90.0);

    let options = PlotOptions::default().with_grid(grid).with_legend(legend);
    let axes = [
        Axis::new(AxisSide::Bottom, 0.0, 7.0, bottom),
        Axis::new(AxisSide::Top, 8.0 * hour, 16.0 * hour, top),
        Axis::new(AxisSide::Left, 1.0, 46.0, left),
        Axis::new(AxisSide::Right, 0.0, 1.0, right),
    ];

    let mut plot = Plot::new(options, geometry);
    for axis in axes {
        let side = axis.side;
        plot = plot.with_axis(axis.with_layout_box(layout_box(side)));
    }
    for (label, color, _) in SERIES {
        plot = plot.with_entry(LegendEntry::new(label, color));
    }
    plot = plot.with_entry(LegendEntry::unlabeled(css::GRAY));
    plot.label_ticks();
    plot
}

/// Draws the series as grouped bars so the guides have something to frame.
fn draw_series(plot: &Plot, canvas: &mut SvgCanvas) {
    let rect = plot.geometry().rect();
    canvas.set_fill_color(css::WHITE_SMOKE);
    canvas.fill_rect(rect);

    let Some(y_axis) = plot.axes().iter().find(|a| a.side == AxisSide::Left) else {
        return;
    };
    let slot = rect.width() / 8.0;
    let bar = slot / (SERIES.len() as f64 + 1.0);
    for (s, (_, color, values)) in SERIES.iter().enumerate() {
        canvas.set_fill_color(*color);
        for (i, v) in values.iter().enumerate() {
            let x0 = rect.x0 + slot * i as f64 + bar * (s as f64 + 0.5);
            let y0 = rect.y0 + y_axis.p2c(*v);
            canvas.fill_rect(Rect::new(x0, y0, x0 + bar, rect.y1));
        }
    }
}
