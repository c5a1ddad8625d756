pub mod dummy;
pub mod openai;

use crate::{Language, LLMError};

pub trait LLMBuilder {
    type Built: LLM;

    async fn build(&self, instruction: String) -> Result<Self::Built, LLMError>;
}

pub trait LLM {
    async fn translate(&self, source_text: &str) -> Result<String, LLMError>;
}

/// System prompt guiding the remote model for one request.
pub fn instruction_for(target_language: Language) -> String {
    format!(
        "You are a translator agent. Translate the input text from English to {}.",
        target_language
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn instruction_substitutes_language_exactly_once() {
        for language in Language::ALL {
            let instruction = instruction_for(language);
            assert_eq!(
                instruction,
                format!(
                    "You are a translator agent. Translate the input text from English to {}.",
                    language.name()
                )
            );
            assert_eq!(instruction.matches(language.name()).count(), 1);
        }
    }

    #[test]
    fn instruction_for_french() {
        assert_eq!(
            instruction_for(Language::French),
            "You are a translator agent. Translate the input text from English to French."
        );
    }
}
