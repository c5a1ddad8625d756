use super::{LLMBuilder, LLM};
use crate::LLMError;

pub struct DummyLLMBuilder;

impl LLMBuilder for DummyLLMBuilder {
    type Built = DummyLLM;

    async fn build(&self, _instruction: String) -> Result<Self::Built, LLMError> {
        Ok(DummyLLM)
    }
}

pub struct DummyLLM;

impl LLM for DummyLLM {
    async fn translate(&self, _source_text: &str) -> Result<String, LLMError> {
        Ok("Dummy output".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Language, LlmTranslationService, TranslationRequest, TranslationService};
    use pretty_assertions::assert_eq;

    #[test]
    fn wires_through_the_translation_service() {
        let service = LlmTranslationService {
            llm_builder: DummyLLMBuilder,
        };
        let result = service
            .translate(TranslationRequest {
                target_language: Language::Russian,
                source_text: "Hello".to_owned(),
            })
            .unwrap();
        assert_eq!(result.output_text, "Dummy output");
    }
}
