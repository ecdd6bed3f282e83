//! End-to-end run: question → answer → extraction → validated payload.

use tracing::{debug, instrument};

use gander_shared::{OutputPayload, Result, RunConfig};

use crate::answer::{AnswerGenerator, AnswerRequest};
use crate::payload;

/// Run the full pipeline for one invocation.
///
/// 1. Generate the answer
/// 2. Extract URLs and mentions, classify sources
/// 3. Validate and assemble the payload
#[instrument(skip_all, fields(brand = %config.brand, generator = generator.name()))]
pub fn run(config: &RunConfig, generator: &dyn AnswerGenerator) -> Result<OutputPayload> {
    debug!(question = %config.question, "generating answer");
    let answer = generator.generate(&AnswerRequest::from(config))?;
    debug!(answer_len = answer.len(), "answer generated");

    payload::assemble(config, &answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::PlaceholderAnswer;
    use gander_shared::{AppConfig, GanderError};

    struct FixedAnswer(&'static str);

    impl AnswerGenerator for FixedAnswer {
        fn name(&self) -> &str {
            "fixed"
        }

        fn generate(&self, _request: &AnswerRequest<'_>) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingAnswer;

    impl AnswerGenerator for FailingAnswer {
        fn name(&self) -> &str {
            "failing"
        }

        fn generate(&self, _request: &AnswerRequest<'_>) -> Result<String> {
            Err(GanderError::config("no answer backend configured"))
        }
    }

    fn config() -> RunConfig {
        RunConfig::new(
            &AppConfig::default(),
            "Gander",
            "https://gandergeo.com",
            "What is Gander?",
        )
    }

    #[test]
    fn run_with_placeholder() {
        let payload = run(&config(), &PlaceholderAnswer).unwrap();
        assert_eq!(payload.citations.len(), 2);
        assert_eq!(payload.owned_sources.len(), 1);
        assert_eq!(payload.sources.len(), 1);
        assert_eq!(payload.mentions, vec!["Gander"]);
    }

    #[test]
    fn run_uses_generator_output() {
        let generator = FixedAnswer(
            "Gander docs: [here](https://docs.gandergeo.com/start). \
             Compare with https://rival.example and https://rival.example again.",
        );
        let payload = run(&config(), &generator).unwrap();
        assert_eq!(
            payload.citations,
            vec!["https://docs.gandergeo.com/start", "https://rival.example"]
        );
        assert_eq!(payload.owned_sources.len(), 1);
        assert_eq!(payload.sources.len(), 1);
    }

    #[test]
    fn generator_error_propagates() {
        let err = run(&config(), &FailingAnswer).unwrap_err();
        assert!(matches!(err, GanderError::Config { .. }));
    }
}
