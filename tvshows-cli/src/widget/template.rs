use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tvshows_core::show::Show;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*(id|slug|title)\s*\}\}").unwrap());

pub const DEFAULT_ROW_TEMPLATE: &str = "{{title}} ({{slug}})";

/// Row template with `{{id}}`, `{{slug}}` and `{{title}}` placeholders.
/// Anything else in the source is copied through untouched.
#[derive(Clone, Debug)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn render(&self, show: &Show) -> String {
        PLACEHOLDER
            .replace_all(&self.source, |caps: &Captures| match &caps[1] {
                "id" => show.id().to_string(),
                "slug" => show.slug().to_string(),
                _ => show.title().to_string(),
            })
            .into_owned()
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_TEMPLATE)
    }
}
