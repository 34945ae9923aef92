//! Deterministic keyword classifier used when the model is unavailable.

use crate::base::types::{Severity, TriageResult};

/// A severity tier and the phrases that select it.
struct Tier {
    severity: Severity,
    keywords: &'static [&'static str],
    advice: &'static str,
    recommendation: &'static str,
}

/// Tiers in priority order, most severe first.
const TIERS: [Tier; 3] = [
    Tier {
        severity: Severity::Critical,
        keywords: &["douleur poitrine", "difficulté respirer", "perte connaissance", "douleur thoracique", "essoufflement sévère"],
        advice: "seek emergency care immediately",
        recommendation: "immediate emergency consultation required",
    },
    Tier {
        severity: Severity::High,
        keywords: &["fièvre élevée", "vomissements", "saignement", "fièvre persistante", "vomissements répétés"],
        advice: "see a doctor within hours; monitor closely",
        recommendation: "consultation recommended within 2–4 hours",
    },
    Tier {
        severity: Severity::Medium,
        keywords: &["maux tête", "fatigue", "nausée", "maux de tête", "fatigue importante"],
        advice: "monitor symptoms, rest and hydrate; consult if symptoms persist",
        recommendation: "consultation recommended within 24–48h if symptoms persist",
    },
];

const LOW_ADVICE: &str = "symptoms appear mild; rest, hydrate, monitor progression";
const LOW_RECOMMENDATION: &str = "home monitoring recommended; consult if worsening";

/// Classify symptoms by keyword membership.
///
/// The first tier with any phrase contained in the lower-cased input wins; no
/// match yields `Low`. Total over all inputs.
pub fn classify_by_keywords(symptoms: &str) -> TriageResult {
    let symptoms = symptoms.to_lowercase();

    let (severity, advice, recommendation) = TIERS
        .iter()
        .find(|tier| tier.keywords.iter().any(|keyword| symptoms.contains(keyword)))
        .map(|tier| (tier.severity, tier.advice, tier.recommendation))
        .unwrap_or((Severity::Low, LOW_ADVICE, LOW_RECOMMENDATION));

    TriageResult {
        severity,
        advice: advice.to_string(),
        recommendation: recommendation.to_string(),
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chest_pain_is_critical() {
        let result = classify_by_keywords("douleur poitrine");

        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(result.advice, "seek emergency care immediately");
        assert_eq!(result.recommendation, "immediate emergency consultation required");
    }

    #[test]
    fn test_headache_is_medium() {
        let result = classify_by_keywords("maux tête");

        assert_eq!(result.severity, Severity::Medium);
        assert_eq!(result.advice, "monitor symptoms, rest and hydrate; consult if symptoms persist");
        assert_eq!(result.recommendation, "consultation recommended within 24–48h if symptoms persist");
    }

    #[test]
    fn test_high_tier() {
        let result = classify_by_keywords("J'ai des vomissements depuis hier");

        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.advice, "see a doctor within hours; monitor closely");
        assert_eq!(result.recommendation, "consultation recommended within 2–4 hours");
    }

    #[test]
    fn test_no_match_is_low() {
        for input in ["je me sens bien", "", "胸が少し痛い", "a".repeat(100_000).as_str()] {
            let result = classify_by_keywords(input);

            assert_eq!(result.severity, Severity::Low);
            assert_eq!(result.advice, LOW_ADVICE);
            assert_eq!(result.recommendation, LOW_RECOMMENDATION);
        }
    }

    #[test]
    fn test_highest_tier_wins() {
        let result = classify_by_keywords("fatigue, nausée et douleur thoracique");
        assert_eq!(result.severity, Severity::Critical);

        let result = classify_by_keywords("maux de tête avec fièvre élevée");
        assert_eq!(result.severity, Severity::High);
    }

    #[test]
    fn test_matching_ignores_case() {
        assert_eq!(classify_by_keywords("DOULEUR POITRINE").severity, Severity::Critical);
        assert_eq!(classify_by_keywords("Fièvre Élevée").severity, Severity::High);
    }

    #[test]
    fn test_is_deterministic() {
        let input = "saignement du nez";

        assert_eq!(classify_by_keywords(input), classify_by_keywords(input));
    }
}
