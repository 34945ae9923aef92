//! Prompt templates for the triage model.

/// System directive prepended to every triage prompt.
pub const TRIAGE_SYSTEM_DIRECTIVE: &str = r#####"
You are a medical triage assistant. You provide triage assessments, always as strict JSON.

Answer in the language the patient used to describe their symptoms.
"#####;

/// Instructions describing the expected output.
pub const TRIAGE_INSTRUCTIONS: &str = r#####"
Analyze the symptoms above and provide a professional triage assessment.

Return a JSON object with the following fields:
- "severity": one of "low", "medium", "high", "critical"
- "advice": detailed medical advice (2-3 sentences)
- "recommendation": a specific recommendation on when to consult (1 sentence)

Severity criteria:
- "critical": vital emergencies (chest pain, severe difficulty breathing, loss of consciousness, etc.)
- "high": concerning symptoms requiring a rapid consultation (persistent high fever, repeated vomiting, bleeding, etc.)
- "medium": moderate symptoms to monitor (persistent headaches, significant fatigue, nausea, etc.)
- "low": mild symptoms (slight fatigue, passing headaches, etc.)

Respond ONLY with a valid JSON object, without any additional text.
"#####;

/// Build the full triage prompt for a symptom description.
pub fn build_triage_prompt(system_directive: &str, symptoms: &str) -> String {
    format!("{}\n\n## Described Symptoms\n\n{}\n\n{}", system_directive.trim(), symptoms, TRIAGE_INSTRUCTIONS.trim())
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_symptoms_and_shape() {
        let prompt = build_triage_prompt(TRIAGE_SYSTEM_DIRECTIVE, "douleur poitrine depuis ce matin");

        assert!(prompt.contains("douleur poitrine depuis ce matin"));
        assert!(prompt.starts_with("You are a medical triage assistant."));

        for field in ["\"severity\"", "\"advice\"", "\"recommendation\""] {
            assert!(prompt.contains(field), "missing {field}");
        }

        for severity in ["\"low\"", "\"medium\"", "\"high\"", "\"critical\""] {
            assert!(prompt.contains(severity), "missing {severity}");
        }
    }
}
