// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draws a pair of axes with the chosen text backend and writes them out as SVG.

mod svg;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use kurbo::Rect;
use xyplot_charts::{Axis, AxisSampler, DrawContext, Item, XyScale};
use xyplot_core::RecordingSurface;
use xyplot_text::{MinimalTextBackend, TextEngine};
use xyplot_text_parley::ParleyTextBackend;

const PLOT_SIZE: f64 = 400.0;
const MARGIN: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Built-in surface text with fixed metrics
    Minimal,
    /// Parley shaping
    Parley,
}

#[derive(Parser, Debug)]
#[command(about = "Render xyplot axes to SVG")]
struct Args {
    /// Text backend used for labels
    #[arg(long, value_enum, default_value_t = Backend::Minimal)]
    backend: Backend,
    /// Font description, e.g. "Sans" or "Serif Bold Italic"
    #[arg(long, default_value = "Sans")]
    font: String,
    /// Font size in points
    #[arg(long, default_value_t = 10.0)]
    font_size: f64,
    /// Start of the data range on both axes
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    min: f64,
    /// End of the data range on both axes
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    max: f64,
    /// Approximate number of tick intervals
    #[arg(long, default_value_t = 5)]
    ticks: usize,
    /// Decimals in tick labels (derived from the tick step when omitted)
    #[arg(long)]
    precision: Option<usize>,
    /// Draw the horizontal axis in its selected color
    #[arg(long)]
    selected: bool,
    /// Output file
    #[arg(long, short, default_value = "xyplot_demo.svg")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if !args.min.is_finite() || !args.max.is_finite() {
        bail!("the data range {}..{} is not finite", args.min, args.max);
    }

    let engine = match args.backend {
        Backend::Minimal => TextEngine::new(MinimalTextBackend::new()),
        Backend::Parley => TextEngine::new(ParleyTextBackend::new()),
    };
    let font = engine.create(&args.font, args.font_size);

    let figure = Rect::new(MARGIN, MARGIN, MARGIN + PLOT_SIZE, MARGIN + PLOT_SIZE);
    let domain = (args.min, args.max);
    let scale = XyScale::new(domain, domain, figure);

    let mut sampler = AxisSampler::new().with_hint(args.ticks);
    if let Some(precision) = args.precision {
        sampler = sampler.with_precision(precision);
    }
    let mut x_axis = Axis::horizontal().with_sampler(sampler);
    x_axis.set_position(args.min, args.max, args.min);
    x_axis.set_selected(args.selected);

    let mut y_axis = Axis::vertical();
    y_axis.set_position(args.min, args.max, args.min);

    let mut surface = RecordingSurface::new();
    let mut cx = DrawContext::new(&mut surface, &scale, &font);
    x_axis.draw(&mut cx);
    y_axis.draw(&mut cx);
    log::info!(
        "{} backend recorded {} draw commands",
        engine.backend_name(),
        surface.commands().len()
    );

    let svg = svg::to_svg_string(surface.commands(), figure.inflate(MARGIN, MARGIN));
    std::fs::write(&args.output, svg)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("wrote {}", args.output.display());

    font.destroy();
    Ok(())
}
