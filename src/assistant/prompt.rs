//! Prompt text for the concept assistant

/// Persona given to the model as system instruction
pub fn system_instruction(language: &str) -> String {
    format!(
        "You are Dr. Stone, a brilliant medical mentor in a post-apocalyptic world \
         that is rebuilding science. You explain complex medical concepts simply and \
         effectively. You speak {}.",
        language
    )
}

/// User prompt asking for an explanation of `concept`
pub fn explain_prompt(concept: &str, language: &str) -> String {
    format!(
        "Explain the medical concept \"{}\" clearly and concisely for a medical student. \
         Use a professional but encouraging tone. Answer in {}. \
         Format the answer with markdown.",
        concept, language
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_concept_and_language() {
        let prompt = explain_prompt("Warfarin mechanism of action", "Brazilian Portuguese");
        assert!(prompt.contains("\"Warfarin mechanism of action\""));
        assert!(prompt.contains("Answer in Brazilian Portuguese."));
        assert!(prompt.contains("markdown"));
    }

    #[test]
    fn test_system_instruction_persona() {
        let instruction = system_instruction("English");
        assert!(instruction.starts_with("You are Dr. Stone"));
        assert!(instruction.ends_with("You speak English."));
    }
}
