/// Usage-tier classification and the binary safety flag.
///
/// The tier ladder is evaluated first-match-wins, top tier first. Below
/// drinking grade, TDS alone drives the tier: once water fails the drinking
/// criteria, dissolved solids are what separate household use from
/// irrigation from unusable.
///
/// The binary safety flag is a separate, independent output with its own
/// TDS bound — "acceptable for use" (500 ppm) is a looser notion than
/// "drinking-grade" (300 ppm). The two may disagree, and both are
/// surfaced.

use crate::model::{Classification, Tier};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// pH band accepted for both the DRINKING tier and the safety flag.
pub const PH_SAFE_MIN: f64 = 6.5;
pub const PH_SAFE_MAX: f64 = 8.5;

/// Drinking-grade TDS bound, ppm. Used only by the tier ladder.
pub const TDS_DRINKING_MAX_PPM: f64 = 300.0;

/// General-acceptability TDS bound, ppm. Used only by the safety flag —
/// intentionally looser than drinking-grade; do not unify the two.
pub const TDS_ACCEPTABLE_MAX_PPM: f64 = 500.0;

/// TDS bound for household (non-drinking) use, ppm.
pub const TDS_DOMESTIC_MAX_PPM: f64 = 600.0;

/// TDS bound for irrigation use, ppm.
pub const TDS_AGRICULTURE_MAX_PPM: f64 = 1200.0;

/// Turbidity bound shared by the DRINKING tier and the safety flag, NTU.
pub const TURBIDITY_SAFE_MAX_NTU: f64 = 5.0;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classifies a (pH, TDS, turbidity) triple into exactly one usage tier.
///
/// Bounds are inclusive: a reading sitting exactly on a tier's limit
/// belongs to that tier. pH is only consulted for the top tier.
pub fn classify(ph: f64, tds: f64, turbidity: f64) -> Classification {
    let tier = if (PH_SAFE_MIN..=PH_SAFE_MAX).contains(&ph)
        && tds <= TDS_DRINKING_MAX_PPM
        && turbidity <= TURBIDITY_SAFE_MAX_NTU
    {
        Tier::Drinking
    } else if tds <= TDS_DOMESTIC_MAX_PPM {
        Tier::Domestic
    } else if tds <= TDS_AGRICULTURE_MAX_PPM {
        Tier::Agriculture
    } else {
        Tier::Unsafe
    };

    Classification::for_tier(tier)
}

/// Binary acceptability of the live reading.
///
/// Computed independently of the tier ladder and always from live values,
/// never from forecasts.
pub fn is_safe(ph: f64, tds: f64, turbidity: f64) -> bool {
    (PH_SAFE_MIN..=PH_SAFE_MAX).contains(&ph)
        && tds <= TDS_ACCEPTABLE_MAX_PPM
        && turbidity <= TURBIDITY_SAFE_MAX_NTU
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
