//! Comparison plot rendering
//!
//! Overlays the adaptive trace, the fixed-step companion, and the exact
//! cosine on one chart and saves it as both PNG and SVG. The first legend
//! entry encodes the tolerance the adaptive run used.

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

/// The three displacement curves of one comparison run.
///
/// Each curve is a `(times, displacements)` pair; the series need not
/// share a grid.
pub struct ComparisonData {
    /// Error tolerance the adaptive run used (shown in the legend)
    pub tol: f64,
    /// Adaptive substep trace
    pub adaptive: (Vec<f64>, Vec<f64>),
    /// Fixed-step central-difference curve
    pub fixed: (Vec<f64>, Vec<f64>),
    /// Exact solution on a dense grid
    pub exact: (Vec<f64>, Vec<f64>),
}

impl ComparisonData {
    /// Joint (t, u) bounds over all three curves, with a small margin on u
    fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut t_min = f64::INFINITY;
        let mut t_max = f64::NEG_INFINITY;
        let mut u_min = f64::INFINITY;
        let mut u_max = f64::NEG_INFINITY;

        for (t, u) in [&self.adaptive, &self.fixed, &self.exact] {
            for &ti in t {
                t_min = t_min.min(ti);
                t_max = t_max.max(ti);
            }
            for &ui in u {
                u_min = u_min.min(ui);
                u_max = u_max.max(ui);
            }
        }

        let pad = 0.05 * (u_max - u_min).max(f64::MIN_POSITIVE);
        (t_min, t_max, u_min - pad, u_max + pad)
    }
}

/// Render the comparison chart and save it as `<stem>.png` and `<stem>.svg`.
///
/// Returns the two paths written.
pub fn save_comparison(
    data: &ComparisonData,
    stem: &str,
) -> Result<(std::path::PathBuf, std::path::PathBuf), Box<dyn Error + Send + Sync>> {
    let png = Path::new(stem).with_extension("png");
    let svg = Path::new(stem).with_extension("svg");

    {
        let root = BitMapBackend::new(&png, (800, 600)).into_drawing_area();
        draw(&root, data)?;
    }
    {
        let root = SVGBackend::new(&svg, (800, 600)).into_drawing_area();
        draw(&root, data)?;
    }

    Ok((png, svg))
}

/// Draw the three-curve overlay onto an arbitrary backend
fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ComparisonData,
) -> Result<(), Box<dyn Error + Send + Sync>>
where
    DB::ErrorType: 'static,
{
    let (t_min, t_max, u_min, u_max) = data.bounds();

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(t_min..t_max, u_min..u_max)?;

    chart.configure_mesh().x_desc("t").y_desc("u").draw()?;

    let series = |curve: &(Vec<f64>, Vec<f64>)| -> Vec<(f64, f64)> {
        curve.0.iter().copied().zip(curve.1.iter().copied()).collect()
    };

    chart
        .draw_series(LineSeries::new(series(&data.adaptive), &BLACK))?
        .label(format!("tol={:.0E}", data.tol))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    chart
        .draw_series(LineSeries::new(series(&data.fixed), &RED))?
        .label("u simple")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .draw_series(LineSeries::new(series(&data.exact), &BLUE))?
        .label("exact")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
