//! Default configuration file

/// Commented configuration written by `drstone init`.
///
/// Parses to `Config::default()`.
pub const DEFAULT_CONFIG: &str = r#"# DrStone Configuration
# =====================

# Optional study content replacing the built-in catalog (.yaml, .yml or .toml)
# content_path = "/path/to/content.yaml"

# ============================================================================
# ASSISTANT - "Dr. Stone", the concept mentor
# ============================================================================
#
# The key can also come from the GEMINI_API_KEY environment variable.
# Without a key the mentor answers that the archives are unreachable.

[assistant]
# api_key = ""
base_url = "https://generativelanguage.googleapis.com/v1beta"
model = "gemini-3-flash-preview"
# Language the mentor answers in
language = "English"
connect_timeout_secs = 5
timeout_secs = 60

# ============================================================================
# PROGRESSION - Starting values (nothing is saved between launches)
# ============================================================================

[progression]
level = 1
experience = 450
experience_to_next_level = 1000
currency = 120
streak_days = 5

# ============================================================================
# GUI
# ============================================================================

[gui]
window_width = 1100.0
window_height = 720.0
"#;
