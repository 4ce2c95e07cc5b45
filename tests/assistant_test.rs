//! Concept assistant boundary with stand-in explainers

use std::sync::{Arc, Mutex};

use drstone::assistant::{
    Assistant, AssistantError, ConceptExplainer, GeminiClient, Reply, NO_EXPLANATION_MESSAGE,
    UNAVAILABLE_MESSAGE,
};
use drstone::config::AssistantSettings;

/// Records every concept it is asked about
#[derive(Clone, Default)]
struct Recorder {
    asked: Arc<Mutex<Vec<String>>>,
}

impl ConceptExplainer for Recorder {
    fn explain_concept(&self, concept: &str) -> Result<String, AssistantError> {
        self.asked.lock().unwrap().push(concept.to_string());
        Ok(format!("## {concept}\nExplained."))
    }
}

struct Failing(fn() -> AssistantError);

impl ConceptExplainer for Failing {
    fn explain_concept(&self, _concept: &str) -> Result<String, AssistantError> {
        Err((self.0)())
    }
}

#[test]
fn test_query_is_trimmed_before_sending() {
    let recorder = Recorder::default();
    let assistant = Assistant::new(recorder.clone());

    let exchange = assistant.ask("\tNephron \n").unwrap();
    assert_eq!(exchange.query, "Nephron");
    assert_eq!(exchange.reply, Reply::Explanation("## Nephron\nExplained.".into()));
    assert_eq!(*recorder.asked.lock().unwrap(), vec!["Nephron".to_string()]);
}

#[test]
fn test_blank_query_sends_nothing() {
    let recorder = Recorder::default();
    let assistant = Assistant::new(recorder.clone());

    assert!(assistant.ask("   ").is_none());
    assert!(recorder.asked.lock().unwrap().is_empty());
}

#[test]
fn test_every_error_kind_maps_to_unavailable() {
    let errors: [fn() -> AssistantError; 4] = [
        || AssistantError::MissingApiKey,
        || AssistantError::Http {
            status: 503,
            message: "overloaded".into(),
        },
        || AssistantError::Transport("dns failure".into()),
        || AssistantError::InvalidResponse("not json".into()),
    ];

    for make in errors {
        let exchange = Assistant::new(Failing(make)).ask("Warfarin").unwrap();
        assert_eq!(exchange.reply, Reply::Unavailable);
        assert_eq!(exchange.reply.text(), UNAVAILABLE_MESSAGE);
    }
}

#[test]
fn test_whitespace_answer_gets_placeholder() {
    struct Blank;
    impl ConceptExplainer for Blank {
        fn explain_concept(&self, _concept: &str) -> Result<String, AssistantError> {
            Ok("  \n".into())
        }
    }

    let exchange = Assistant::new(Blank).ask("Warfarin").unwrap();
    assert_eq!(exchange.reply.text(), NO_EXPLANATION_MESSAGE);
}

#[test]
fn test_client_without_key_is_unavailable() {
    let settings = AssistantSettings {
        api_key: Some(String::new()),
        base_url: "http://127.0.0.1:9".into(),
        ..AssistantSettings::default()
    };
    // Skip when the environment provides a key
    if settings.resolved_api_key().is_some() {
        return;
    }

    let client = GeminiClient::from_settings(&settings);
    assert!(matches!(
        client.explain_concept("Warfarin"),
        Err(AssistantError::MissingApiKey)
    ));

    let exchange = Assistant::new(client).ask("Warfarin").unwrap();
    assert!(exchange.reply.is_unavailable());
}
