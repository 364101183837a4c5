//! Decoded statistics for one state and month

use serde::Serialize;

use super::decode::{decode_decimal, decode_int64_be, DecodeError};
use crate::store::StatsRow;

/// Stored column qualifiers
pub mod columns {
    /// Number of recorded earthquakes, 8-byte big-endian i64
    pub const QUAKE_COUNT: &str = "s:quake_count";
    /// Largest recorded magnitude, decimal text
    pub const MAX_MAG: &str = "s:max_mag";
    /// `1` if a magnitude 4+ quake occurred, decimal text
    pub const LABEL_QUAKE_GE_4: &str = "s:label_quake_ge_4";
    /// Predicted probability of a magnitude 4+ quake, decimal text in 0..=1
    pub const PRED_PROB_GE_4: &str = "s:pred_prob_ge_4";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuakeRecord {
    pub quake_count: i64,
    pub max_mag: f64,
    pub quake_occurred: bool,
    pub pred_prob: f64,
}

impl QuakeRecord {
    /// Decode the known columns of a row; unknown columns are ignored
    ///
    /// The occurrence label is true only when it reads as exactly `1`;
    /// an unreadable label counts as no occurrence.
    pub fn from_row(row: &StatsRow) -> Result<Self, DecodeError> {
        let quake_count = decode_int64_be(row.get(columns::QUAKE_COUNT))?;
        let max_mag = decode_decimal(row.get(columns::MAX_MAG))?;
        let pred_prob = decode_decimal(row.get(columns::PRED_PROB_GE_4))?;
        let quake_occurred = decode_decimal(row.get(columns::LABEL_QUAKE_GE_4))
            .map(|label| label == 1.0)
            .unwrap_or(false);

        Ok(Self {
            quake_count,
            max_mag,
            quake_occurred,
            pred_prob,
        })
    }

    /// Magnitude with two decimals, e.g. `4.30`
    pub fn max_mag_display(&self) -> String {
        fixed_2(self.max_mag)
    }

    /// `Yes` or `No`
    pub fn quake_occurred_display(&self) -> &'static str {
        if self.quake_occurred {
            "Yes"
        } else {
            "No"
        }
    }

    /// Probability as a percentage with two decimals, e.g. `87.65 %`
    pub fn pred_prob_percent(&self) -> String {
        format!("{} %", fixed_2(self.pred_prob * 100.0))
    }
}

/// Two decimals, exact halves rounded away from zero (`4.125` -> `4.13`)
///
/// `{:.2}` alone rounds exact halves to even.
fn fixed_2(value: f64) -> String {
    // Only odd multiples of 1/8 end in an exact 5 at the third decimal.
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}
