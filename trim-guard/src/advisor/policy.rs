//! Skewness bands and the trim policy table.
//!
//! A policy is an ordered list of [`TrimBand`]s. Classification scans the list
//! and picks the first band whose exclusive upper bound exceeds `|g|`; the
//! final band is unbounded. The sign of `g` only selects the direction word in
//! the interpretation, not how much is trimmed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TrimError, TrimResult};
use crate::trim::MAX_TAIL_FRACTION;

/// `|g|` below this is treated as approximately symmetric.
pub const SYMMETRIC_SKEW_LIMIT: f64 = 0.2;
/// Upper bound (exclusive) of the mild-skew band.
pub const MILD_SKEW_LIMIT: f64 = 0.5;
/// Upper bound (exclusive) of the moderate-skew band.
pub const MODERATE_SKEW_LIMIT: f64 = 1.0;

/// Trim fraction per tail for a mildly skewed sample.
pub const MILD_TRIM: f64 = 0.025;
/// Trim fraction per tail for a moderately skewed sample.
pub const MODERATE_TRIM: f64 = 0.05;
/// Trim fraction per tail for a strongly skewed sample.
pub const STRONG_TRIM: f64 = 0.10;

/// The standard band table.
pub const STANDARD_BANDS: [TrimBand; 4] = [
    TrimBand {
        upper: Some(SYMMETRIC_SKEW_LIMIT),
        trim: 0.0,
        strength: SkewStrength::Negligible,
    },
    TrimBand {
        upper: Some(MILD_SKEW_LIMIT),
        trim: MILD_TRIM,
        strength: SkewStrength::Mild,
    },
    TrimBand {
        upper: Some(MODERATE_SKEW_LIMIT),
        trim: MODERATE_TRIM,
        strength: SkewStrength::Moderate,
    },
    TrimBand {
        upper: None,
        trim: STRONG_TRIM,
        strength: SkewStrength::Strong,
    },
];

/// How pronounced the asymmetry of a sample is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkewStrength {
    Negligible,
    Mild,
    Moderate,
    Strong,
}

/// Which tail is heavier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkewDirection {
    /// Negative skewness: the lower tail is longer.
    Left,
    /// Positive skewness: the upper tail is longer.
    Right,
}

impl SkewDirection {
    /// Direction implied by the sign of a skewness value.
    pub fn from_skewness(skewness: f64) -> Self {
        if skewness < 0.0 {
            SkewDirection::Left
        } else {
            SkewDirection::Right
        }
    }
}

impl fmt::Display for SkewDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkewDirection::Left => write!(f, "left"),
            SkewDirection::Right => write!(f, "right"),
        }
    }
}

/// Qualitative reading of a skewness value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "strength", content = "direction", rename_all = "snake_case")]
pub enum Interpretation {
    ApproximatelySymmetric,
    MildlySkewed(SkewDirection),
    ModeratelySkewed(SkewDirection),
    StronglySkewed(SkewDirection),
}

impl Interpretation {
    /// Builds the interpretation for a band strength and skewness sign.
    pub fn new(strength: SkewStrength, skewness: f64) -> Self {
        let direction = SkewDirection::from_skewness(skewness);
        match strength {
            SkewStrength::Negligible => Interpretation::ApproximatelySymmetric,
            SkewStrength::Mild => Interpretation::MildlySkewed(direction),
            SkewStrength::Moderate => Interpretation::ModeratelySkewed(direction),
            SkewStrength::Strong => Interpretation::StronglySkewed(direction),
        }
    }

    /// Returns the strength component.
    pub fn strength(&self) -> SkewStrength {
        match self {
            Interpretation::ApproximatelySymmetric => SkewStrength::Negligible,
            Interpretation::MildlySkewed(_) => SkewStrength::Mild,
            Interpretation::ModeratelySkewed(_) => SkewStrength::Moderate,
            Interpretation::StronglySkewed(_) => SkewStrength::Strong,
        }
    }

    /// Returns the direction, or `None` for an approximately symmetric sample.
    pub fn direction(&self) -> Option<SkewDirection> {
        match self {
            Interpretation::ApproximatelySymmetric => None,
            Interpretation::MildlySkewed(d)
            | Interpretation::ModeratelySkewed(d)
            | Interpretation::StronglySkewed(d) => Some(*d),
        }
    }

    /// Human-readable label, e.g. `"moderately right-skewed"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpretation::ApproximatelySymmetric => write!(f, "approximately symmetric"),
            Interpretation::MildlySkewed(d) => write!(f, "mildly {d}-skewed"),
            Interpretation::ModeratelySkewed(d) => write!(f, "moderately {d}-skewed"),
            Interpretation::StronglySkewed(d) => write!(f, "strongly {d}-skewed"),
        }
    }
}

/// One row of the policy table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrimBand {
    /// Exclusive upper bound on `|g|`; `None` for the final, unbounded band.
    pub upper: Option<f64>,
    /// Fraction trimmed from each tail.
    pub trim: f64,
    /// Strength reported for samples in this band.
    pub strength: SkewStrength,
}

impl TrimBand {
    /// Returns true if `|g|` falls in this band (lower bound is the previous band's upper).
    fn admits(&self, abs_skewness: f64) -> bool {
        match self.upper {
            Some(upper) => abs_skewness < upper,
            None => true,
        }
    }
}

/// The band table mapping skewness to a recommended trim.
///
/// # Examples
///
/// ```rust
/// use trim_guard::advisor::{SkewStrength, TrimPolicy};
///
/// let policy = TrimPolicy::standard();
/// let band = policy.classify(0.7);
/// assert_eq!(band.strength, SkewStrength::Moderate);
/// assert_eq!(band.trim, 0.05);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrimPolicy {
    bands: Vec<TrimBand>,
}

impl TrimPolicy {
    /// The standard policy built from [`STANDARD_BANDS`].
    pub fn standard() -> Self {
        Self {
            bands: STANDARD_BANDS.to_vec(),
        }
    }

    /// Creates a policy from a custom band table.
    ///
    /// Upper bounds must be positive and strictly ascending, only the last band
    /// may (and must) be unbounded, and every trim must lie in `[0, 0.5)`.
    pub fn new(bands: Vec<TrimBand>) -> TrimResult<Self> {
        let Some((last, leading)) = bands.split_last() else {
            return Err(TrimError::invalid_policy("at least one band is required"));
        };

        if last.upper.is_some() {
            return Err(TrimError::invalid_policy("the last band must be unbounded"));
        }

        let mut previous = 0.0;
        for (index, band) in leading.iter().enumerate() {
            let upper = band.upper.ok_or_else(|| {
                TrimError::invalid_policy(format!("band {index} is unbounded but not last"))
            })?;
            if !upper.is_finite() || upper <= previous {
                return Err(TrimError::invalid_policy(format!(
                    "band {index} upper bound {upper} must be finite and greater than {previous}"
                )));
            }
            previous = upper;
        }

        if let Some((index, band)) = bands
            .iter()
            .enumerate()
            .find(|(_, b)| !(0.0..MAX_TAIL_FRACTION).contains(&b.trim))
        {
            return Err(TrimError::invalid_policy(format!(
                "band {index} trim {} must lie in [0, 0.5)",
                band.trim
            )));
        }

        Ok(Self { bands })
    }

    /// Loads and validates a policy from JSON.
    ///
    /// Accepts the policy's own serialized form, e.g.
    /// `{"bands": [{"upper": 0.5, "trim": 0.0, "strength": "negligible"},
    ///   {"upper": null, "trim": 0.1, "strength": "strong"}]}`.
    pub fn from_json(json: &str) -> TrimResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| TrimError::invalid_policy(format!("failed to parse policy: {e}")))
    }

    /// Returns the band table.
    pub fn bands(&self) -> &[TrimBand] {
        &self.bands
    }

    /// Finds the band for a skewness value by linear scan on `|g|`.
    pub fn classify(&self, skewness: f64) -> &TrimBand {
        let abs_skewness = skewness.abs();
        self.bands
            .iter()
            .find(|band| band.admits(abs_skewness))
            .unwrap_or(&self.bands[self.bands.len() - 1])
    }
}

impl Default for TrimPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'de> Deserialize<'de> for TrimPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            bands: Vec<TrimBand>,
        }

        let raw = Raw::deserialize(deserializer)?;
        TrimPolicy::new(raw.bands).map_err(serde::de::Error::custom)
    }
}
