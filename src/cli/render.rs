//! Plain-terminal rendering of assistant markdown

use once_cell::sync::Lazy;
use regex::Regex;

/// Inline markdown rewrites, applied in order
static INLINE_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        // **bold** / __bold__
        (r"\*\*(.+?)\*\*", "$1"),
        (r"__(.+?)__", "$1"),
        // *italic*
        (r"(^|[^*])\*([^*\s][^*]*?)\*", "$1$2"),
        // `code`
        (r"`([^`]+)`", "$1"),
        // [text](url)
        (r"\[([^\]]+)\]\(([^)]+)\)", "$1 <$2>"),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| {
        Regex::new(pattern).ok().map(|re| (re, replacement))
    })
    .collect()
});

static HEADING: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\s{0,3}(#{1,6})\s+(.*)$").ok());
static BULLET: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^(\s*)[-*+]\s+(.*)$").ok());

fn render_inline(line: &str) -> String {
    INLINE_RULES
        .iter()
        .fold(line.to_string(), |text, (re, replacement)| {
            re.replace_all(&text, *replacement).into_owned()
        })
}

/// Turn markdown into readable plain text: headings are underlined, bullets
/// become `•`, emphasis markers are dropped.
pub fn markdown_to_terminal(markdown: &str) -> String {
    let mut out = Vec::new();

    for line in markdown.lines() {
        if let Some(caps) = (*HEADING).as_ref().and_then(|re| re.captures(line)) {
            let title = render_inline(&caps[2]);
            let underline = if caps[1].len() == 1 { '═' } else { '─' };
            out.push(String::new());
            out.push(title.clone());
            out.push(underline.to_string().repeat(title.chars().count()));
            continue;
        }

        if let Some(caps) = (*BULLET).as_ref().and_then(|re| re.captures(line)) {
            out.push(format!("{}• {}", &caps[1], render_inline(&caps[2])));
            continue;
        }

        out.push(render_inline(line));
    }

    out.join("\n").trim().to_string()
}
