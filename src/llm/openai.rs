use super::{LLMBuilder, LLM};
use crate::settings::Settings;
use crate::utils::substr_up_to_len;
use crate::LLMError;
use anyhow::anyhow;
use async_openai::config::OpenAIConfig;
use async_openai::error::OpenAIError;
use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use std::error::Error;

const LOG_PREVIEW_LEN: usize = 20;

/// Builder for OpenAI-compatible chat completion APIs
#[derive(Debug, Clone)]
pub struct OpenAiChatBuilder {
    model: String,
    base_url: String,
    api_key: String,
    temperature: f32,
    top_p: f32,
}

impl OpenAiChatBuilder {
    pub fn new(settings: &Settings) -> Self {
        OpenAiChatBuilder {
            model: settings.provider.model.clone(),
            base_url: settings.provider.base_url.clone(),
            api_key: settings.api_key.clone(),
            temperature: 1.0,
            top_p: 1.0,
        }
    }
}

impl LLMBuilder for OpenAiChatBuilder {
    type Built = OpenAiChat;

    async fn build(&self, instruction: String) -> Result<Self::Built, LLMError> {
        let config = OpenAIConfig::new()
            .with_api_key(&self.api_key)
            .with_api_base(&self.base_url);

        let client = Client::with_config(config);

        Ok(OpenAiChat {
            client,
            model: self.model.clone(),
            instruction,
            temperature: self.temperature,
            top_p: self.top_p,
        })
    }
}

pub struct OpenAiChat {
    client: Client<OpenAIConfig>,
    model: String,
    instruction: String,
    temperature: f32,
    top_p: f32,
}

impl LLM for OpenAiChat {
    async fn translate(&self, source_text: &str) -> Result<String, LLMError> {
        log::info!(r#"Sending message "{}...""#, {
            substr_up_to_len(source_text.lines().next().unwrap_or(""), LOG_PREVIEW_LEN)
        });

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .temperature(self.temperature)
            .top_p(self.top_p)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(self.instruction.as_str())
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(source_text)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LLMError::InteractionError(anyhow!("Response contained no choices")))?;

        choice.message.content.ok_or_else(|| {
            LLMError::InteractionError(anyhow!("Response message had no text content"))
        })
    }
}

impl From<OpenAIError> for LLMError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::Reqwest(e) => LLMError::ConnectionError(if let Some(e) = e.source() {
                anyhow!("{e}")
            } else {
                e.into()
            }),
            OpenAIError::ApiError(e) => LLMError::ApiError(anyhow!("{e}")),
            OpenAIError::JSONDeserialize(e) => LLMError::OtherError(e.into()),
            OpenAIError::FileSaveError(e) => LLMError::OtherError(anyhow!("{e}")),
            OpenAIError::FileReadError(e) => LLMError::OtherError(anyhow!("{e}")),
            OpenAIError::StreamError(e) => LLMError::ConnectionError(anyhow!("{e}")),
            OpenAIError::InvalidArgument(e) => LLMError::OtherError(anyhow!("{e}")),
        }
    }
}
