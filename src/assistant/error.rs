/// Failures of a concept explanation call
///
/// These never leave [`super::Assistant`]; they are logged and replaced by a
/// fixed message for the player.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("No API key configured (set assistant.api_key or GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("API returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}
