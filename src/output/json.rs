//! JSON serialization for comparison results.
//!
//! Posterior samples are not included; only probabilities, names and metadata.

use crate::result::ComparisonResult;

/// Serialize a ComparisonResult to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (a non-finite float, for example).
pub fn to_json(result: &ComparisonResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a ComparisonResult to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty(result: &ComparisonResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Model;
    use crate::result::Metadata;
    use crate::types::{PosteriorSamples, Probabilities, Region};

    fn make_result() -> ComparisonResult {
        ComparisonResult {
            probabilities: Probabilities::from_array([0.0, 0.25, 0.75]),
            names: ("C1".to_string(), "C2".to_string()),
            metadata: Metadata {
                model: Model::SignTest,
                n_observations: 5,
                rope: 0.05,
                prior_strength: 1.0,
                prior_place: Region::Rope,
                samples: 4,
                seed: None,
                runtime_secs: 0.01,
            },
            samples: PosteriorSamples::from_rows(vec![[0.0, 0.1, 0.9]; 4]),
        }
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&make_result()).unwrap();
        assert!(json.contains("\"right\":0.75"));
        assert!(json.contains("\"model\":\"sign_test\""));
        assert!(json.contains("\"prior_place\":\"rope\""));
        assert!(!json.contains("samples\":["));
    }

    #[test]
    fn test_round_trip_drops_samples() {
        let json = to_json_pretty(&make_result()).unwrap();
        assert!(json.contains('\n'));
        let back: ComparisonResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.probabilities, make_result().probabilities);
        assert!(back.samples.is_empty());
    }
}
