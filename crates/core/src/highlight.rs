//! Word based keyword highlighting for displayed cell values.

/// Markers placed around highlighted words.
///
/// Usually ANSI escape sequences, but any strings work, which keeps the
/// highlighter independent of the terminal backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightStyle {
    pub start: String,
    pub stop: String,
}

impl HighlightStyle {
    pub fn new(start: impl Into<String>, stop: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            stop: stop.into(),
        }
    }

    /// A style that leaves text as it is.
    #[must_use]
    pub fn plain() -> Self {
        Self::new("", "")
    }
}

/// Marks every word of `text` that equals one of `keywords`, ignoring case.
///
/// Words are separated by single spaces. Every unmatched word after the first
/// is preceded by `style.stop` so a highlight never bleeds into it, and a
/// trailing highlighted word is closed explicitly.
#[must_use]
pub fn highlight_keywords<S: AsRef<str>>(
    text: &str,
    keywords: &[S],
    style: &HighlightStyle,
) -> String {
    if keywords.is_empty() {
        return text.to_string();
    }

    let keywords: Vec<String> = keywords
        .iter()
        .map(|keyword| keyword.as_ref().to_lowercase())
        .collect();

    let mut highlighted = String::with_capacity(text.len());
    let mut previous_matched = false;

    for (index, word) in text.split(' ').enumerate() {
        let matched = keywords.contains(&word.to_lowercase());

        if index > 0 {
            if !matched || previous_matched {
                highlighted.push_str(&style.stop);
            }
            highlighted.push(' ');
        }

        if matched {
            highlighted.push_str(&style.start);
        }
        highlighted.push_str(word);

        previous_matched = matched;
    }

    if previous_matched {
        highlighted.push_str(&style.stop);
    }

    highlighted
}
