//! Framework Generation — orchestrates prompt → completion → normalization.
//!
//! A single completion attempt per request. The only failure that reaches the
//! caller is the completion call itself; normalization always succeeds.

use tracing::{info, instrument};

use crate::errors::AppError;
use crate::frameworks::catalog::Catalog;
use crate::frameworks::models::{FrameworkResult, GenerationRequest};
use crate::frameworks::normalizer::normalize_response;
use crate::frameworks::prompts::build_framework_prompt;
use crate::llm_client::prompts::FRAMEWORK_DESIGNER_SYSTEM;
use crate::llm_client::TextGenerator;

/// Generates and normalizes one framework.
#[instrument(skip_all, fields(framework_type = %request.kind))]
pub async fn generate_framework(
    catalog: &Catalog,
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<FrameworkResult, AppError> {
    let (kind, profile) = catalog.lookup(request.kind.key())?;

    let prompt = build_framework_prompt(request, profile);
    let raw = generator
        .complete(&prompt, FRAMEWORK_DESIGNER_SYSTEM)
        .await?;

    let result = normalize_response(&raw, kind, profile, &request.industry);
    info!(
        "Generated framework '{}' with {} elements",
        result.name,
        result.elements.len()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::frameworks::catalog::FrameworkType;
    use crate::frameworks::models::ElementEntry;
    use crate::llm_client::LlmError;

    /// Records the prompts it receives and replies with canned text.
    struct RecordingGenerator {
        reply: Option<String>,
        prompts: Mutex<Vec<(String, String)>>,
    }

    impl RecordingGenerator {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
            self.prompts
                .lock()
                .unwrap()
                .push((prompt.to_string(), system.to_string()));
            self.reply.clone().ok_or(LlmError::Api {
                status: 429,
                message: "Rate limit reached".to_string(),
            })
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            kind: FrameworkType::Cyclical,
            industry: "Coffee roasting".to_string(),
            purpose: "Improve batch consistency".to_string(),
            target_audience: "Head roasters".to_string(),
            complexity: "medium".to_string(),
        }
    }

    #[tokio::test]
    async fn test_sends_prompt_with_designer_system() {
        let catalog = Catalog::standard();
        let generator = RecordingGenerator::replying(r#"{"name": "Roast Loop"}"#);

        let result = generate_framework(&catalog, &generator, &request())
            .await
            .unwrap();
        assert_eq!(result.name, "Roast Loop");

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        let (prompt, system) = &prompts[0];
        assert!(prompt.contains("Create a Cyclical framework for Coffee roasting"));
        assert!(prompt.contains("Head roasters"));
        assert_eq!(system, FRAMEWORK_DESIGNER_SYSTEM);
    }

    #[tokio::test]
    async fn test_prose_reply_yields_placeholder() {
        let catalog = Catalog::standard();
        let generator = RecordingGenerator::replying("I could not produce JSON, sorry.");

        let result = generate_framework(&catalog, &generator, &request())
            .await
            .unwrap();
        assert_eq!(result.name, "Coffee roasting Cyclical Framework");
        assert_eq!(result.framework_type, "cyclical");
        assert_eq!(result.elements.len(), 4);
        assert!(matches!(result.elements[0], ElementEntry::Structured(_)));
    }

    #[tokio::test]
    async fn test_completion_failure_is_single_attempt_error() {
        let catalog = Catalog::standard();
        let generator = RecordingGenerator::failing();

        let err = generate_framework(&catalog, &generator, &request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::Api { status: 429, .. })));
        assert_eq!(generator.prompts.lock().unwrap().len(), 1);
    }
}
