//! Concept assistant ("Dr. Stone")
//!
//! Forwards a free-text medical question to a generative-language API and
//! hands back markdown. The boundary never fails: blank questions are not
//! sent, and every provider error becomes a fixed apologetic message.

mod error;
mod gemini;
mod prompt;

pub use error::AssistantError;
pub use gemini::GeminiClient;

use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::{error, info};

/// Shown when the provider call fails
pub const UNAVAILABLE_MESSAGE: &str =
    "The medical archives are unreachable right now. Please try again later.";

/// Shown when the provider answered with no text
pub const NO_EXPLANATION_MESSAGE: &str = "No explanation found.";

/// Something that can explain a medical concept
pub trait ConceptExplainer: Send + Sync {
    /// Return a markdown explanation of `concept`
    fn explain_concept(&self, concept: &str) -> Result<String, AssistantError>;
}

/// What the player sees after asking
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Markdown explanation
    Explanation(String),
    /// The provider could not be reached or failed
    Unavailable,
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Self::Explanation(text) => text,
            Self::Unavailable => UNAVAILABLE_MESSAGE,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// A question and its reply
#[derive(Debug, Clone)]
pub struct Exchange {
    pub query: String,
    pub reply: Reply,
    pub asked_at: DateTime<Local>,
}

/// Front-end facing wrapper around a [`ConceptExplainer`]
#[derive(Clone)]
pub struct Assistant {
    explainer: Arc<dyn ConceptExplainer>,
}

impl Assistant {
    pub fn new(explainer: impl ConceptExplainer + 'static) -> Self {
        Self {
            explainer: Arc::new(explainer),
        }
    }

    /// Ask about a concept.
    ///
    /// Returns `None` without calling the provider when `query` is blank.
    pub fn ask(&self, query: &str) -> Option<Exchange> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        info!(query_len = query.len(), "Asking concept assistant");
        let reply = match self.explainer.explain_concept(query) {
            Ok(text) if text.trim().is_empty() => {
                Reply::Explanation(NO_EXPLANATION_MESSAGE.to_string())
            }
            Ok(text) => Reply::Explanation(text),
            Err(e) => {
                error!(error = %e, "Concept assistant failed");
                Reply::Unavailable
            }
        };

        Some(Exchange {
            query: query.to_string(),
            reply,
            asked_at: Local::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed {
        answer: Result<&'static str, ()>,
        calls: Arc<AtomicUsize>,
    }

    impl ConceptExplainer for Fixed {
        fn explain_concept(&self, _concept: &str) -> Result<String, AssistantError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer
                .map(String::from)
                .map_err(|_| AssistantError::Transport("connection refused".into()))
        }
    }

    fn assistant(answer: Result<&'static str, ()>) -> (Assistant, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let assistant = Assistant::new(Fixed {
            answer,
            calls: Arc::clone(&calls),
        });
        (assistant, calls)
    }

    #[test]
    fn test_blank_query_is_not_sent() {
        let (assistant, calls) = assistant(Ok("text"));
        assert!(assistant.ask("").is_none());
        assert!(assistant.ask("   \n").is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_successful_reply() {
        let (assistant, calls) = assistant(Ok("**Warfarin** inhibits vitamin K epoxide reductase."));
        let exchange = assistant.ask("  Warfarin  ").unwrap();
        assert_eq!(exchange.query, "Warfarin");
        assert_eq!(
            exchange.reply,
            Reply::Explanation("**Warfarin** inhibits vitamin K epoxide reductase.".into())
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_becomes_fixed_message() {
        let (assistant, _) = assistant(Err(()));
        let exchange = assistant.ask("Warfarin").unwrap();
        assert!(exchange.reply.is_unavailable());
        assert_eq!(exchange.reply.text(), UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn test_empty_answer_gets_placeholder() {
        let (assistant, _) = assistant(Ok(""));
        let exchange = assistant.ask("Warfarin").unwrap();
        assert_eq!(exchange.reply.text(), NO_EXPLANATION_MESSAGE);
    }
}
