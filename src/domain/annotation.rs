// Trust annotation domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trust annotation attached to a single reading by the annotator pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub kind: String,
    pub host: String,
    pub signature: String,
    pub is_satisfied: bool,
    pub timestamp: DateTime<Utc>,
}

impl Annotation {
    pub fn new(
        kind: String,
        host: String,
        signature: String,
        is_satisfied: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            host,
            signature,
            is_satisfied,
            timestamp,
        }
    }

    /// Contribution of this annotation to the reading's trust score.
    /// Unsatisfied or unknown kinds contribute nothing.
    pub fn trust_weight(&self) -> f32 {
        if !self.is_satisfied {
            return 0.0;
        }
        match self.kind.as_str() {
            "threshold" => 3.33333 / 10.0,
            "source" => 1.33333 / 10.0,
            "tls" => 2.00000 / 10.0,
            "pki" => 3.333333 / 10.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(kind: &str, satisfied: bool) -> Annotation {
        Annotation::new(
            kind.to_string(),
            "host-1".to_string(),
            "sig".to_string(),
            satisfied,
            Utc::now(),
        )
    }

    #[test]
    fn test_unsatisfied_weight_is_zero() {
        assert_eq!(annotation("pki", false).trust_weight(), 0.0);
    }

    #[test]
    fn test_unknown_kind_weight_is_zero() {
        assert_eq!(annotation("provenance", true).trust_weight(), 0.0);
    }

    #[test]
    fn test_all_kinds_sum_to_full_confidence() {
        let total: f32 = ["threshold", "source", "tls", "pki"]
            .iter()
            .map(|k| annotation(k, true).trust_weight())
            .sum();
        assert!((total - 1.0).abs() < 1e-4);
    }
}
