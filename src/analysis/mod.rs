/// Analysis engine for the water quality monitoring service.
///
/// Pure functions of (live reading, historical snapshot) — no I/O, no
/// shared state. Blocking fetch/push belongs to the adapter modules and
/// must complete before these run.
///
/// Submodules:
/// - `trend` — one-step-ahead linear forecast per parameter.
/// - `classify` — tiered usage classification and the binary safety flag.
/// - `remedy` — live-value remediation overrides.

pub mod classify;
pub mod remedy;
pub mod trend;
