/// Parameter registry for the water quality monitoring service.
///
/// Defines the canonical set of sensor parameters this service interprets,
/// along with their units, descriptions, and plausible sensor ranges. This
/// is the single source of truth for parameter names — all other modules
/// should reference parameters from here rather than hardcoding column
/// labels. Columns outside this set are carried through the snapshot
/// untouched but never interpreted.

// ---------------------------------------------------------------------------
// Parameter enum
// ---------------------------------------------------------------------------

/// The four recognized sensor parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Ph,
    Tds,
    Turbidity,
    Temperature,
}

impl Parameter {
    /// All recognized parameters, in display order.
    pub const ALL: [Parameter; 4] = [
        Parameter::Ph,
        Parameter::Tds,
        Parameter::Turbidity,
        Parameter::Temperature,
    ];

    /// Canonical column label: already trimmed and lower-cased, so it
    /// matches normalized snapshot headers directly.
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Ph => "ph",
            Parameter::Tds => "tds",
            Parameter::Turbidity => "turbidity",
            Parameter::Temperature => "temperature",
        }
    }

    /// Measurement unit, for report rendering.
    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Tds => "ppm",
            Parameter::Turbidity => "NTU",
            Parameter::Temperature => "°C",
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Parameter metadata
// ---------------------------------------------------------------------------

/// Metadata for a single recognized parameter.
pub struct ParameterSpec {
    pub parameter: Parameter,
    /// Human-readable description of what the sensor measures.
    pub description: &'static str,
    /// Plausible sensor output range `(lo, hi)`, used by the telemetry
    /// simulator to generate synthetic readings. These are generator
    /// bounds, not safety thresholds — safety lives in `analysis::classify`.
    pub plausible_range: (f64, f64),
}

/// All recognized parameters with their metadata.
///
/// Simulator ranges reproduce the reference telemetry generator: slightly
/// acidic-to-neutral pH, clear-to-lightly-turbid water, and a TDS span wide
/// enough to exercise every usage tier below AGRICULTURE.
pub static PARAMETER_REGISTRY: &[ParameterSpec] = &[
    ParameterSpec {
        parameter: Parameter::Ph,
        description: "Acidity/alkalinity of the sample on the 0-14 pH scale.",
        plausible_range: (6.0, 7.5),
    },
    ParameterSpec {
        parameter: Parameter::Tds,
        description: "Total dissolved solids concentration in parts per million.",
        plausible_range: (180.0, 1000.0),
    },
    ParameterSpec {
        parameter: Parameter::Turbidity,
        description: "Water cloudiness in Nephelometric Turbidity Units.",
        plausible_range: (1.2, 3.8),
    },
    ParameterSpec {
        parameter: Parameter::Temperature,
        description: "Sample temperature in degrees Celsius.",
        plausible_range: (24.5, 25.5),
    },
];

/// Looks up registry metadata for a parameter.
pub fn spec_for(parameter: Parameter) -> &'static ParameterSpec {
    // ALL and the registry cover the same closed enum, so this cannot miss.
    PARAMETER_REGISTRY
        .iter()
        .find(|s| s.parameter == parameter)
        .unwrap_or(&PARAMETER_REGISTRY[0])
}

/// Resolves a normalized column label to a recognized parameter.
/// Returns `None` for unrecognized columns, which are preserved opaquely
/// in the snapshot but never interpreted.
pub fn parameter_for_label(label: &str) -> Option<Parameter> {
    Parameter::ALL.iter().copied().find(|p| p.as_str() == label)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_labels_are_already_normalized() {
        // Snapshot headers are trimmed and lower-cased before matching.
        // If a canonical label had uppercase or padding it would never
        // match any normalized column.
        for spec in PARAMETER_REGISTRY {
            let label = spec.parameter.as_str();
            assert_eq!(
                label,
                label.trim().to_lowercase(),
                "canonical label '{}' must be trimmed and lower-cased",
                label
            );
        }
    }

    #[test]
    fn test_registry_covers_every_parameter_exactly_once() {
        assert_eq!(PARAMETER_REGISTRY.len(), Parameter::ALL.len());
        let mut seen = std::collections::HashSet::new();
        for spec in PARAMETER_REGISTRY {
            assert!(
                seen.insert(spec.parameter.as_str()),
                "duplicate parameter '{}' in PARAMETER_REGISTRY",
                spec.parameter
            );
        }
    }

    #[test]
    fn test_plausible_ranges_are_ordered() {
        for spec in PARAMETER_REGISTRY {
            let (lo, hi) = spec.plausible_range;
            assert!(
                lo < hi,
                "plausible range for '{}' must have lo < hi, got ({}, {})",
                spec.parameter,
                lo,
                hi
            );
        }
    }

    #[test]
    fn test_parameter_for_label_resolves_canonical_names() {
        assert_eq!(parameter_for_label("ph"), Some(Parameter::Ph));
        assert_eq!(parameter_for_label("tds"), Some(Parameter::Tds));
        assert_eq!(parameter_for_label("turbidity"), Some(Parameter::Turbidity));
        assert_eq!(parameter_for_label("temperature"), Some(Parameter::Temperature));
    }

    #[test]
    fn test_parameter_for_label_rejects_unknown_and_unnormalized() {
        assert_eq!(parameter_for_label("conductivity"), None);
        // Normalization happens in the ingest layer; this lookup is exact.
        assert_eq!(parameter_for_label("pH"), None);
        assert_eq!(parameter_for_label(" tds "), None);
    }

    #[test]
    fn test_spec_for_returns_matching_entry() {
        let spec = spec_for(Parameter::Turbidity);
        assert_eq!(spec.parameter, Parameter::Turbidity);
        assert!(spec.description.contains("Turbidity") || spec.description.contains("cloudiness"));
    }
}
