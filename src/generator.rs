//! Synthetic telemetry standing in for the live device feed.
//!
//! The dashboard refreshes its reading from a [`ReadingSource`], which today
//! is a random generator biased per source type. Swapping in a real
//! implementation (e.g. polling the ESP32 fleet) only requires another
//! `ReadingSource` impl; none of the consumers change.

use chrono::Local;
use rand::Rng;

use crate::WaterData;

// ---

/// Ideal bands used by the derived health score.
const TDS_POTABLE_PPM: (f32, f32) = (50.0, 300.0);
const TEMP_MODERATE_C: (f32, f32) = (10.0, 25.0);
const PH_NEUTRAL: (f32, f32) = (6.5, 7.5);

/// Relative weight of each metric in the health score.
const W_TDS: f32 = 0.35;
const W_TURBIDITY: f32 = 0.30;
const W_PH: f32 = 0.25;
const W_TEMP: f32 = 0.10;

// ---

/// Produces one reading for a source. Never fails and must not mutate any
/// shared state; the controller decides when and for which source to call it.
pub trait ReadingSource: Send + Sync {
    fn generate(&self, source_id: &str) -> WaterData;
}

/// Random generator sampling uniformly within per-archetype ranges.
pub struct MockReadingSource;

impl ReadingSource for MockReadingSource {
    fn generate(&self, source_id: &str) -> WaterData {
        // ---
        let ranges = SourceArchetype::of(source_id).ranges();
        let mut rng = rand::thread_rng();

        let tds = rng.gen_range(ranges.tds.0..ranges.tds.1);
        let turbidity = rng.gen_range(ranges.turbidity.0..ranges.turbidity.1);
        let temperature = rng.gen_range(ranges.temperature.0..ranges.temperature.1);
        let estimated_ph = rng.gen_range(ranges.ph.0..ranges.ph.1);

        WaterData {
            tds,
            turbidity,
            temperature,
            estimated_ph,
            health_score: health_score(tds, turbidity, temperature, estimated_ph),
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

// ---

/// Sampling profile for a class of physical source.
///
/// Different source types genuinely read differently (a borewell runs much
/// higher TDS than a roof tank), so the generator keys its ranges off the
/// source id instead of using one universal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceArchetype {
    OverheadTank,
    Borewell,
    General,
}

/// Per-metric sampling bounds, all inside the sensors' semantic ranges
/// (TDS 0-2000 ppm, turbidity 0-100 NTU, temperature 0-50 C, pH 0-14).
struct MetricRanges {
    tds: (f32, f32),
    turbidity: (f32, f32),
    temperature: (f32, f32),
    ph: (f32, f32),
}

impl SourceArchetype {
    /// Classify a source id. Ids are free-form slugs ("overhead-tank",
    /// "borewell", ...), so this matches on the obvious substrings and falls
    /// back to a general profile.
    pub fn of(source_id: &str) -> Self {
        // ---
        let id = source_id.to_ascii_lowercase();
        if id.contains("bore") {
            SourceArchetype::Borewell
        } else if id.contains("tank") {
            SourceArchetype::OverheadTank
        } else {
            SourceArchetype::General
        }
    }

    fn ranges(&self) -> MetricRanges {
        // ---
        match self {
            SourceArchetype::OverheadTank => MetricRanges {
                tds: (80.0, 420.0),
                turbidity: (0.5, 8.0),
                temperature: (18.0, 32.0),
                ph: (6.4, 8.2),
            },
            SourceArchetype::Borewell => MetricRanges {
                tds: (350.0, 1300.0),
                turbidity: (1.0, 18.0),
                temperature: (16.0, 28.0),
                ph: (6.0, 7.8),
            },
            SourceArchetype::General => MetricRanges {
                tds: (50.0, 600.0),
                turbidity: (0.0, 12.0),
                temperature: (10.0, 35.0),
                ph: (6.0, 8.5),
            },
        }
    }
}

// ---

/// Derive the 0-100 health score from the four raw metrics.
///
/// Each metric contributes a normalized distance from its ideal band,
/// saturating at 1.0 well before the sensor's physical limit so that badly
/// out-of-range water bottoms out near zero. Deterministic; the result is
/// always finite and clamped to [0, 100].
pub fn health_score(tds: f32, turbidity: f32, temperature: f32, ph: f32) -> f32 {
    // ---
    let d_tds = band_distance(tds, TDS_POTABLE_PPM, 50.0, 1200.0);
    let d_turbidity = (turbidity / 80.0).clamp(0.0, 1.0);
    let d_temp = band_distance(temperature, TEMP_MODERATE_C, 10.0, 20.0);
    let d_ph = band_distance(ph, PH_NEUTRAL, 4.5, 4.5);

    let penalty = W_TDS * d_tds + W_TURBIDITY * d_turbidity + W_TEMP * d_temp + W_PH * d_ph;

    // max/min rather than clamp: maps a NaN from pathological input to 0.0
    (100.0 * (1.0 - penalty)).round().max(0.0).min(100.0)
}

/// Normalized distance from a band: 0 inside, growing linearly to 1 over
/// `below_span` under the low edge or `above_span` past the high edge.
fn band_distance(value: f32, band: (f32, f32), below_span: f32, above_span: f32) -> f32 {
    // ---
    let (low, high) = band;
    if value < low {
        ((low - value) / below_span).clamp(0.0, 1.0)
    } else if value > high {
        ((value - high) / above_span).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
