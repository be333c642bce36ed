//! Decision Thresholds
//!
//! Two calibrated cut points split the anomaly score into three risk tiers.
//! Bands are half-open: a score equal to a threshold belongs to the upper tier.

use serde::{Deserialize, Serialize};

/// Score at which the risk indicator saturates at 100
const RISK_SCALE: f64 = 20.0;
const RISK_CAP: f64 = 100.0;

/// Primary classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Normal,
    Suspicious,
    Attack,
}

/// Confidence tier attached to each decision band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Threshold pair `T1` / `T2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub t1: f64,
    pub t2: f64,
}

impl Thresholds {
    pub fn new(t1: f64, t2: f64) -> Self {
        Self { t1, t2 }
    }

    /// True when the pair is in the expected ascending order
    pub fn is_ordered(&self) -> bool {
        self.t1 < self.t2
    }

    /// Map a score onto its band, checked in ascending order
    pub fn classify(&self, score: f64) -> (Decision, Confidence) {
        if score < self.t1 {
            (Decision::Normal, Confidence::Low)
        } else if score < self.t2 {
            (Decision::Suspicious, Confidence::Medium)
        } else {
            (Decision::Attack, Confidence::High)
        }
    }
}

/// Bounded integer risk indicator in [0, 100]
pub fn risk_score(score: f64) -> u8 {
    (score * RISK_SCALE).min(RISK_CAP).max(0.0).floor() as u8
}

/// Round to 4 decimal places for display
///
/// The exact binary value is rounded once, the same as decimal formatting.
pub fn round_score(score: f64) -> f64 {
    format!("{:.4}", score).parse().unwrap_or(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bands() {
        let t = Thresholds::new(1.0, 2.0);

        assert_eq!(t.classify(0.0), (Decision::Normal, Confidence::Low));
        assert_eq!(t.classify(0.999), (Decision::Normal, Confidence::Low));
        assert_eq!(t.classify(1.5), (Decision::Suspicious, Confidence::Medium));
        assert_eq!(t.classify(7.0), (Decision::Attack, Confidence::High));
    }

    #[test]
    fn test_boundaries_go_to_upper_tier() {
        let t = Thresholds::new(1.0, 2.0);

        assert_eq!(t.classify(1.0), (Decision::Suspicious, Confidence::Medium));
        assert_eq!(t.classify(2.0), (Decision::Attack, Confidence::High));
    }

    #[test]
    fn test_unordered_thresholds_still_classify() {
        // T1 >= T2 is tolerated; the middle band is simply empty
        let t = Thresholds::new(2.0, 1.0);
        assert!(!t.is_ordered());

        assert_eq!(t.classify(0.5), (Decision::Normal, Confidence::Low));
        assert_eq!(t.classify(1.5), (Decision::Attack, Confidence::High));
    }

    #[test]
    fn test_risk_score_scaling() {
        assert_eq!(risk_score(0.0), 0);
        assert_eq!(risk_score(1.0), 20);
        assert_eq!(risk_score(2.5), 50);
        assert_eq!(risk_score(0.049), 0);
        assert_eq!(risk_score(3.26), 65);
    }

    #[test]
    fn test_risk_score_saturates() {
        assert_eq!(risk_score(5.0), 100);
        assert_eq!(risk_score(12.0), 100);
        assert_eq!(risk_score(f64::INFINITY), 100);
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(1.0), 1.0);
        assert_eq!(round_score(0.123456), 0.1235);
        assert_eq!(round_score(2.00004), 2.0);
    }

    #[test]
    fn test_round_score_uses_exact_binary_value() {
        // 2.00005 is stored as 2.0000499999..., 1.00005 as 1.0000500000...1
        assert_eq!(round_score(2.00005), 2.0);
        assert_eq!(round_score(1.00005), 1.0001);
        assert_eq!(round_score(0.00005), 0.0001);
    }

    #[test]
    fn test_labels_serialize_uppercase() {
        assert_eq!(serde_json::to_string(&Decision::Suspicious).unwrap(), "\"SUSPICIOUS\"");
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"HIGH\"");
    }
}
