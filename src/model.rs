/// Core data types for the water quality monitoring service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic and no I/O — only types, plus serde derives on the
/// wire-facing ones.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// A single sensor observation, as submitted by the operator or produced by
/// the telemetry simulator.
///
/// A reading has no identity beyond its position in the historical series
/// and is never mutated after construction. Serialized with the canonical
/// field names when pushed to the remote store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub ph: f64,
    pub tds: f64,         // total dissolved solids, ppm
    pub turbidity: f64,   // NTU
    pub temperature: f64, // °C
}

// ---------------------------------------------------------------------------
// Forecast
// ---------------------------------------------------------------------------

/// One-step-ahead forecast for a single parameter.
///
/// Produced by `analysis::trend::forecast`. Insufficient history is an
/// ordinary, expected state — not an error — so it is a variant here rather
/// than an `Err`, and callers pattern-match on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Forecast {
    /// Fitted-trend estimate for the next cycle, rounded to 2 decimals.
    Estimate(f64),
    /// Column absent from history, fewer than 3 usable points, or a
    /// degenerate fit. Classification falls back to the live value.
    InsufficientHistory,
}

impl Forecast {
    /// The forecast value, if one could be computed.
    pub fn value(&self) -> Option<f64> {
        match self {
            Forecast::Estimate(v) => Some(*v),
            Forecast::InsufficientHistory => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Forecast::Estimate(_))
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Usage tiers, in descending order of safety. Exactly one tier holds for
/// any finite (ph, tds, turbidity) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Drinking,
    Domestic,
    Agriculture,
    Unsafe,
}

impl Tier {
    /// Operator-facing precaution text for this tier.
    pub fn precaution(&self) -> &'static str {
        match self {
            Tier::Drinking => "safe for daily consumption",
            Tier::Domestic => "avoid direct drinking",
            Tier::Agriculture => "not suitable for household usage",
            Tier::Unsafe => "health risk detected",
        }
    }

    /// Baseline remedy for this tier, before live-value overrides.
    pub fn remedy(&self) -> &'static str {
        match self {
            Tier::Drinking => "regular monitoring only",
            Tier::Domestic => "use filtration before drinking",
            Tier::Agriculture => "sediment filtration recommended",
            Tier::Unsafe => "immediate multi-stage treatment required",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Drinking => write!(f, "DRINKING"),
            Tier::Domestic => write!(f, "DOMESTIC"),
            Tier::Agriculture => write!(f, "AGRICULTURE"),
            Tier::Unsafe => write!(f, "UNSAFE"),
        }
    }
}

/// Result of the tiered usage classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub tier: Tier,
    pub precaution: &'static str,
    pub remedy: &'static str,
}

impl Classification {
    pub fn for_tier(tier: Tier) -> Self {
        Classification {
            tier,
            precaution: tier.precaution(),
            remedy: tier.remedy(),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or parsing the historical snapshot.
///
/// None of these are fatal to an evaluation: callers substitute an empty
/// snapshot, log a warning, and every forecast degrades to
/// `InsufficientHistory`.
#[derive(Debug, PartialEq)]
pub enum SnapshotError {
    /// Non-2xx HTTP response from the sheet export endpoint.
    Http(u16),
    /// The request could not be completed (DNS, connect, timeout).
    Transport(String),
    /// The body could not be interpreted as tabular data at all.
    Malformed(String),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Http(code) => write!(f, "HTTP error: {}", code),
            SnapshotError::Transport(msg) => write!(f, "Transport error: {}", msg),
            SnapshotError::Malformed(msg) => write!(f, "Malformed snapshot: {}", msg),
        }
    }
}

impl std::error::Error for SnapshotError {}

/// A live reading argument that could not be coerced to a finite number.
///
/// This is the only condition that aborts an evaluation, and it is raised
/// before any computation begins. Values that parse but are physically odd
/// (negative TDS, pH above 14) flow through the tier math unvalidated.
#[derive(Debug, PartialEq)]
pub enum ReadingError {
    Invalid(String),
}

impl std::fmt::Display for ReadingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadingError::Invalid(msg) => write!(f, "Invalid reading: {}", msg),
        }
    }
}

impl std::error::Error for ReadingError {}
