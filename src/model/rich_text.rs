use ammonia::Builder;
use maud::{Markup, PreEscaped, Render};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

/// Formatting tags a name or label may carry. Everything else is dropped.
const FORMATTING_TAGS: [&str; 10] = [
    "b", "i", "em", "strong", "br", "span", "u", "small", "sub", "sup",
];

/// Formatted text supplied already escaped by the competition engine.
///
/// The producer is the trust boundary: formatting markup such as `<b>` or
/// `<br>` is kept and rendered as-is. Construction runs the text through an
/// allowlist sanitizer, so script-bearing markup never reaches the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TrustedHtml(String);

fn sanitizer() -> &'static Builder<'static> {
    static CLEANER: OnceLock<Builder<'static>> = OnceLock::new();
    CLEANER.get_or_init(|| {
        let mut builder = Builder::default();
        builder
            .tags(FORMATTING_TAGS.into_iter().collect::<HashSet<_>>())
            .generic_attributes(HashSet::from(["class"]))
            .tag_attributes(HashMap::new())
            .url_schemes(HashSet::new())
            .strip_comments(true);
        builder
    })
}

impl TrustedHtml {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let cleaned = sanitizer().clean(raw).to_string();
        if cleaned != raw {
            log::debug!("rich text was sanitized: {raw:?} -> {cleaned:?}");
        }
        Self(cleaned)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for TrustedHtml {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for TrustedHtml {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<TrustedHtml> for String {
    fn from(html: TrustedHtml) -> Self {
        html.0
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Render for TrustedHtml {
    fn render(&self) -> Markup {
        PreEscaped(self.0.clone())
    }
}
