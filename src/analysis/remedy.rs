/// Live-value remediation overrides.
///
/// The tier ladder may have been evaluated against forecasts, so an acute
/// excursion in the live reading — acidity, a dissolved-solids spike —
/// needs its own immediate action text. These rules short-circuit in
/// order; when neither fires, the classifier's baseline remedy stands.

use crate::analysis::classify::{PH_SAFE_MIN, TDS_ACCEPTABLE_MAX_PPM};

/// Action for acidic live water.
pub const REMEDY_ACIDIC: &str = "Deploy calcite neutralizing filter.";

/// Action for a live dissolved-solids spike.
pub const REMEDY_TDS_SPIKE: &str = "Activate reverse-osmosis treatment.";

/// Refines the classifier's baseline remedy with live boundary conditions.
///
/// Acidity wins over the TDS rule when both trigger.
pub fn refine_remedy(ph: f64, tds: f64, base_remedy: &str) -> String {
    if ph < PH_SAFE_MIN {
        REMEDY_ACIDIC.to_string()
    } else if tds > TDS_ACCEPTABLE_MAX_PPM {
        REMEDY_TDS_SPIKE.to_string()
    } else {
        base_remedy.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acidic_water_overrides_base_remedy() {
        assert_eq!(refine_remedy(6.0, 200.0, "base"), REMEDY_ACIDIC);
    }

    #[test]
    fn test_tds_spike_overrides_base_remedy() {
        assert_eq!(refine_remedy(7.0, 600.0, "base"), REMEDY_TDS_SPIKE);
    }

    #[test]
    fn test_acidity_rule_wins_when_both_trigger() {
        assert_eq!(
            refine_remedy(6.0, 600.0, "base"),
            REMEDY_ACIDIC,
            "acidity is checked before the TDS spike rule"
        );
    }

    #[test]
    fn test_nominal_water_keeps_base_remedy() {
        assert_eq!(refine_remedy(7.2, 250.0, "regular monitoring only"), "regular monitoring only");
    }

    #[test]
    fn test_boundary_values_do_not_trigger_overrides() {
        // ph == 6.5 is not acidic (< is strict); tds == 500 is not a spike
        // (> is strict).
        assert_eq!(refine_remedy(6.5, 500.0, "base"), "base");
    }
}
