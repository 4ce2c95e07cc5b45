//! Errors raised while loading or looking up content

/// Error type for the content catalog
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read content file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unsupported content file format: {0} (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(String),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Quiz '{0}' has no questions")]
    EmptyQuiz(String),

    #[error("Question '{question}' in quiz '{quiz}' needs at least two options")]
    TooFewOptions { quiz: String, question: String },

    #[error("Question '{question}' in quiz '{quiz}' marks option {index} as correct, but it only has {options}")]
    AnswerOutOfRange {
        quiz: String,
        question: String,
        index: usize,
        options: usize,
    },

    #[error("Quiz '{0}' must award a positive amount of XP and stones")]
    ZeroReward(String),

    #[error("Study module '{module}' has progress {progress}% (must be 0-100)")]
    InvalidProgress { module: String, progress: u8 },

    #[error("Quiz not found: {id}{}", did_you_mean(.suggestion))]
    QuizNotFound {
        id: String,
        suggestion: Option<String>,
    },

    #[error("Study module not found: {id}{}", did_you_mean(.suggestion))]
    ModuleNotFound {
        id: String,
        suggestion: Option<String>,
    },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}
