use once_cell::sync::Lazy;
use regex::Regex;

// Whitespace as browsers define it: Unicode `\s` plus U+FEFF, minus U+0085.
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^-a-zA-Z0-9,&[\s\x{FEFF}&&[^\x{85}]]]+").unwrap());
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x{FEFF}&&[^\x{85}]]").unwrap());

/// Transform a show title into a URL slug.
///
/// Characters other than ASCII letters, digits, `,`, `&`, `-` and whitespace
/// are dropped.  Dashes already present become underscores *before* each
/// whitespace character becomes a dash, so existing slugs keep their shape.
pub fn slugify(title: &str) -> String {
    let text = DISALLOWED.replace_all(title, "");
    let text = text.replace('-', "_");
    let text = WHITESPACE.replace_all(&text, "-");
    text.to_lowercase()
}
