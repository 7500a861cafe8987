// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error-bar plots for fetched light curves.
//!
//! Purely presentational: everything here draws what the fetchers and
//! filters produced, with the plotters library doing the actual work.

mod error;

pub use error::DrawError;

use std::path::Path;

use plotters::{
    coord::{types::RangedCoordf64, Shift},
    prelude::*,
    style::{Color, RGBAColor},
};
use strum::IntoEnumIterator;

use crate::archive::{
    maxi::{Band, MaxiLightCurve},
    swift::SwiftLightCurve,
};

/// The number of X pixels on the plots.
const X_PIXELS: u32 = 1600;
/// The number of Y pixels on the MAXI (four-panel) plots.
const MAXI_Y_PIXELS: u32 = 1200;
/// The number of Y pixels on the Swift (single-panel) plots.
const SWIFT_Y_PIXELS: u32 = 900;

/// Headroom multiplier above the largest value on a panel's y-axis.
const Y_HEADROOM: f64 = 1.1;

fn band_colour(band: Band) -> RGBAColor {
    match band {
        Band::Soft => BLUE.mix(1.0),
        Band::Medium => RGBColor(230, 120, 0).mix(1.0),
        Band::Hard => GREEN.mix(1.0),
        Band::Full => RED.mix(1.0),
    }
}

/// Plot a MAXI light curve: one panel per energy band, stacked, sharing the
/// x-axis, with the MJD labels only on the bottom panel.
pub fn plot_maxi(lc: &MaxiLightCurve, source_name: &str, output: &Path) -> Result<(), DrawError> {
    let root = BitMapBackend::new(output, (X_PIXELS, MAXI_Y_PIXELS)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| DrawError::Plotters(e.to_string()))?;
    let root = root
        .titled(
            &format!("MAXI light curve for {source_name}"),
            ("sans-serif", 40),
        )
        .map_err(|e| DrawError::Plotters(e.to_string()))?;

    let num_bands = Band::iter().count();
    let panels = root.split_evenly((num_bands, 1));
    let x_range = padded_mjd_range(lc.rows.iter().map(|r| r.mjd));

    for (i, (band, panel)) in Band::iter().zip(panels.iter()).enumerate() {
        let is_bottom = i + 1 == num_bands;
        draw_band_panel(panel, lc, band, x_range, is_bottom)?;
    }

    root.present()
        .map_err(|e| DrawError::Plotters(e.to_string()))?;
    Ok(())
}

/// For a single drawing area, plot one MAXI energy band.
fn draw_band_panel<DB: DrawingBackend>(
    panel: &DrawingArea<DB, Shift>,
    lc: &MaxiLightCurve,
    band: Band,
    x_range: (f64, f64),
    is_bottom: bool,
) -> Result<(), DrawError> {
    let samples: Vec<(f64, f64, f64)> = lc
        .rows
        .iter()
        .map(|r| {
            let s = r.band(band);
            (r.mjd, s.flux, s.err)
        })
        .filter(|(_, flux, err)| flux.is_finite() && err.is_finite())
        .collect();

    let y_min = samples
        .iter()
        .map(|(_, flux, err)| flux - err)
        .fold(0.0, f64::min);
    let y_max = headroom(
        samples
            .iter()
            .map(|(_, flux, err)| flux + err)
            .fold(0.0, f64::max),
    );

    let colour = band_colour(band);
    let mut chart = ChartBuilder::on(panel)
        .margin_right(30)
        .x_label_area_size(if is_bottom { 50 } else { 0 })
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.0..x_range.1, y_min..y_max)
        .map_err(|e| DrawError::Plotters(e.to_string()))?;

    let mut mesh = chart.configure_mesh();
    mesh.y_desc(format!("{band} [ph/cm²/s]"))
        .light_line_style(WHITE);
    if is_bottom {
        mesh.x_desc("MJD");
    }
    mesh.draw().map_err(|e| DrawError::Plotters(e.to_string()))?;

    draw_error_bar_series(&mut chart, &samples, colour)
}

/// Plot a (filtered) Swift/BAT light curve: a single panel whose x-axis is
/// exactly the supplied time window.
pub fn plot_swift(
    lc: &SwiftLightCurve,
    source_name: &str,
    window: (f64, f64),
    output: &Path,
) -> Result<(), DrawError> {
    let root = BitMapBackend::new(output, (X_PIXELS, SWIFT_Y_PIXELS)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| DrawError::Plotters(e.to_string()))?;
    let root = root
        .titled(
            &format!("Swift/BAT light curve for {source_name}"),
            ("sans-serif", 40),
        )
        .map_err(|e| DrawError::Plotters(e.to_string()))?;

    let samples: Vec<(f64, f64, f64)> = lc.rows.iter().map(|r| (r.mjd, r.rate, r.err)).collect();
    // Lower-bounded at zero; filtering has already removed non-positive
    // rates.
    let y_max = headroom(
        samples
            .iter()
            .map(|(_, rate, err)| rate + err)
            .fold(0.0, f64::max),
    );

    let mut chart = ChartBuilder::on(&root)
        .margin_right(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(window.0..window.1, 0.0..y_max)
        .map_err(|e| DrawError::Plotters(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("MJD")
        .y_desc("Count rate (15-50 keV) [counts/cm²/s]")
        .light_line_style(WHITE)
        .draw()
        .map_err(|e| DrawError::Plotters(e.to_string()))?;

    draw_error_bar_series(&mut chart, &samples, RED.mix(1.0))?;

    root.present()
        .map_err(|e| DrawError::Plotters(e.to_string()))?;
    Ok(())
}

/// Draw (mjd, value, error) triples as half-opacity error bars under solid
/// points.
fn draw_error_bar_series<'a, DB: DrawingBackend + 'a>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    samples: &[(f64, f64, f64)],
    colour: RGBAColor,
) -> Result<(), DrawError> {
    chart
        .draw_series(samples.iter().map(|&(mjd, value, err)| {
            ErrorBar::new_vertical(
                mjd,
                value - err,
                value,
                value + err,
                colour.mix(0.5).stroke_width(1),
                2,
            )
        }))
        .map_err(|e| DrawError::Plotters(e.to_string()))?;
    chart
        .draw_series(
            samples
                .iter()
                .map(|&(mjd, value, _)| Circle::new((mjd, value), 2, colour.filled())),
        )
        .map_err(|e| DrawError::Plotters(e.to_string()))?;
    Ok(())
}

/// An x-range covering the data, widened a little so single-day series
/// still produce a drawable axis.
fn padded_mjd_range(mjds: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = mjds.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), m| {
        (lo.min(m), hi.max(m))
    });
    if max - min < 1.0 {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

/// A sensible y-axis top: the data maximum plus headroom, or 1.0 if the
/// data never rises above zero.
fn headroom(max: f64) -> f64 {
    if max <= 0.0 {
        1.0
    } else {
        max * Y_HEADROOM
    }
}
