/// Report assembly.
///
/// `build_report` is the engine's single entry point: a pure function of
/// (live reading, historical snapshot) that stitches together the trend
/// forecasts, the tier classification, the safety flag, and the refined
/// remedy into one immutable aggregate for the operator. No new rules live
/// here — only composition.
///
/// Classification runs on forecast-or-live-fallback values: when a
/// parameter's forecast is defined it stands in for the live value, so the
/// verdict reflects where the water is heading; when history is too thin,
/// the live value keeps the system able to answer with what it has.

use serde::Serialize;
use std::fmt;

use crate::analysis::{classify, remedy, trend};
use crate::ingest::sheet::HistorySnapshot;
use crate::model::{Classification, Forecast, Reading};
use crate::parameters::Parameter;

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// One forecast per recognized parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterForecasts {
    pub ph: Forecast,
    pub tds: Forecast,
    pub turbidity: Forecast,
    pub temperature: Forecast,
}

impl ParameterForecasts {
    pub fn get(&self, parameter: Parameter) -> Forecast {
        match parameter {
            Parameter::Ph => self.ph,
            Parameter::Tds => self.tds,
            Parameter::Turbidity => self.turbidity,
            Parameter::Temperature => self.temperature,
        }
    }
}

/// Status banner shown when the live reading passes the safety flag.
pub const STATUS_SAFE: &str = "SAFE FOR USE";
/// Status banner shown otherwise.
pub const STATUS_UNSAFE: &str = "POOR / UNHEALTHY";

/// The complete verdict for one submitted reading.
///
/// Immutable once built; owned by the display layer. The safety flag and
/// the tier classification are independent outputs and may disagree —
/// both are carried, never collapsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub is_safe: bool,
    pub status_label: &'static str,
    pub forecasts: ParameterForecasts,
    pub classification: Classification,
    pub final_remedy: String,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builds the report for one live reading against one history snapshot.
pub fn build_report(live: &Reading, snapshot: &HistorySnapshot) -> Report {
    let forecasts = ParameterForecasts {
        ph: trend::forecast(snapshot, Parameter::Ph),
        tds: trend::forecast(snapshot, Parameter::Tds),
        turbidity: trend::forecast(snapshot, Parameter::Turbidity),
        temperature: trend::forecast(snapshot, Parameter::Temperature),
    };

    // Forecast-or-live-fallback inputs for the tier ladder.
    let ph = forecasts.ph.value().unwrap_or(live.ph);
    let tds = forecasts.tds.value().unwrap_or(live.tds);
    let turbidity = forecasts.turbidity.value().unwrap_or(live.turbidity);
    let classification = classify::classify(ph, tds, turbidity);

    // Safety flag and remedy overrides always use the live reading.
    let is_safe = classify::is_safe(live.ph, live.tds, live.turbidity);
    let final_remedy = remedy::refine_remedy(live.ph, live.tds, classification.remedy);

    Report {
        is_safe,
        status_label: if is_safe { STATUS_SAFE } else { STATUS_UNSAFE },
        forecasts,
        classification,
        final_remedy,
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status: {}", self.status_label)?;
        writeln!(f, "Usage tier: {} — {}", self.classification.tier, self.classification.precaution)?;
        writeln!(f, "Next-cycle outlook:")?;
        for parameter in Parameter::ALL {
            match self.forecasts.get(parameter) {
                Forecast::Estimate(v) => {
                    writeln!(f, "  {:<12} {:.2} {}", parameter.as_str(), v, parameter.unit())?
                }
                Forecast::InsufficientHistory => {
                    writeln!(f, "  {:<12} not enough historical data", parameter.as_str())?
                }
            }
        }
        write!(f, "Recommended action: {}", self.final_remedy)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
