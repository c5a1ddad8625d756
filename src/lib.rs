pub mod bridge;
pub mod llm;
pub mod settings;
mod utils;

use crate::llm::{LLMBuilder, LLM};
use std::fmt::Display;

/// The closed set of target languages offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Urdu,
    French,
    Turkish,
    Spanish,
    Arabic,
    German,
    Chinese,
    Hindi,
    Russian,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::Urdu,
        Language::French,
        Language::Turkish,
        Language::Spanish,
        Language::Arabic,
        Language::German,
        Language::Chinese,
        Language::Hindi,
        Language::Russian,
        Language::Japanese,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::Urdu => "Urdu",
            Language::French => "French",
            Language::Turkish => "Turkish",
            Language::Spanish => "Spanish",
            Language::Arabic => "Arabic",
            Language::German => "German",
            Language::Chinese => "Chinese",
            Language::Hindi => "Hindi",
            Language::Russian => "Russian",
            Language::Japanese => "Japanese",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One user-triggered translation. Created on trigger, consumed immediately,
/// never stored.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub target_language: Language,
    pub source_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub output_text: String,
}

pub fn translate(
    request: TranslationRequest,
    llm_builder: llm::openai::OpenAiChatBuilder,
) -> Result<TranslationResult, TranslationError> {
    let translator = LlmTranslationService { llm_builder };
    translator.translate(request)
}

#[derive(Debug)]
pub enum LLMError {
    ConnectionError(anyhow::Error),
    ApiError(anyhow::Error),
    InteractionError(anyhow::Error),
    OtherError(anyhow::Error),
}

impl Display for LLMError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMError::ConnectionError(e) => {
                write!(f, "Connection error: {}", e)
            }
            LLMError::ApiError(e) => {
                write!(f, "API error: {}", e)
            }
            LLMError::InteractionError(e) => {
                write!(f, "Unexpected API interaction: {}", e)
            }
            LLMError::OtherError(e) => {
                write!(f, "Error: {}", e)
            }
        }
    }
}

#[derive(Debug)]
pub enum TranslationError {
    EmptyInput,
    IoError(std::io::Error),
    LlmError(LLMError),
}

impl Display for TranslationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationError::EmptyInput => {
                write!(f, "Input text is empty")
            }
            TranslationError::IoError(e) => {
                write!(f, "IO error: {}", e)
            }
            TranslationError::LlmError(e) => {
                write!(f, "Translation request failed: {}", e)
            }
        }
    }
}

#[derive(Debug)]
pub enum TranslationStatus {
    Started,
    Warning,
    Success {
        language: Language,
        result: TranslationResult,
    },
    Error(TranslationError),
}

pub trait TranslationService {
    fn translate(&self, request: TranslationRequest)
        -> Result<TranslationResult, TranslationError>;
}

pub struct LlmTranslationService<LB> {
    pub llm_builder: LB,
}

impl<LB> TranslationService for LlmTranslationService<LB>
where
    LB: LLMBuilder,
{
    fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        // Rejected before any network call; the original text is sent as-is.
        if request.source_text.trim().is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        let instruction = llm::instruction_for(request.target_language);

        bridge::execute(async {
            let llm = self
                .llm_builder
                .build(instruction)
                .await
                .map_err(TranslationError::LlmError)?;

            let output_text = llm
                .translate(&request.source_text)
                .await
                .map_err(TranslationError::LlmError)?;

            Ok(TranslationResult { output_text })
        })
        .map_err(TranslationError::IoError)?
    }
}
