/// One-step-ahead trend forecasting.
///
/// Fits an ordinary least-squares line over a parameter's full history,
/// with the 0-based chronological row index as the independent variable,
/// and evaluates it at the position immediately after the last observed
/// row. The series is short and noisy; a linear trend is the cheapest
/// model that still signals direction rather than echoing the last value.
/// No windowing, no outlier removal, no interpolation of missing cells.

use crate::ingest::sheet::HistorySnapshot;
use crate::model::Forecast;
use crate::parameters::Parameter;

/// Minimum historical rows before a trend is considered estimable.
/// One point fixes no slope and two fix it exactly; three is the smallest
/// count where the fit is more than a restatement of the data.
pub const MIN_HISTORY_POINTS: usize = 3;

/// Forecasts the next-cycle value of `parameter` from the snapshot.
///
/// Returns `Forecast::InsufficientHistory` when the column is absent, when
/// fewer than `MIN_HISTORY_POINTS` rows carry a value, or when the fit is
/// degenerate. Never fails otherwise; the estimate is rounded to 2
/// decimals.
pub fn forecast(snapshot: &HistorySnapshot, parameter: Parameter) -> Forecast {
    if snapshot.len() < MIN_HISTORY_POINTS {
        return Forecast::InsufficientHistory;
    }

    let Some(cells) = snapshot.column(parameter.as_str()) else {
        return Forecast::InsufficientHistory;
    };

    // Row index is x, present cells contribute (i, y_i); absent cells are
    // skipped, not interpolated.
    let points: Vec<(f64, f64)> = cells
        .iter()
        .enumerate()
        .filter_map(|(i, cell)| cell.map(|y| (i as f64, y)))
        .collect();

    if points.len() < MIN_HISTORY_POINTS {
        return Forecast::InsufficientHistory;
    }

    match ols_fit(&points) {
        Some((slope, intercept)) => {
            let next_x = snapshot.len() as f64;
            Forecast::Estimate(round2(slope * next_x + intercept))
        }
        None => Forecast::InsufficientHistory,
    }
}

/// Least-squares slope and intercept for `y = slope * x + intercept`.
///
/// Returns `None` when the x variance is (numerically) zero. The index
/// construction makes that unreachable from `forecast`, but the guard
/// keeps this total for any input.
fn ols_fit(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in points {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }

    if sxx.abs() < f64::EPSILON {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    if slope.is_finite() && intercept.is_finite() {
        Some((slope, intercept))
    } else {
        None
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
