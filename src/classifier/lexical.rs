/// Lowercased alphanumeric tokens of a claim's context window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextTokens {
    tokens: Vec<String>,
}

impl ContextTokens {
    pub fn new(text: &str) -> Self {
        Self {
            tokens: tokenize(text),
        }
    }

    /// True when `phrase` occurs as a whole-word token sequence.
    /// `"TENS"` matches "tens therapy" but not "tensile"; `"nerve stimulation"`
    /// needs both words adjacent.
    pub fn mentions(&self, phrase: &str) -> bool {
        let needle = tokenize(phrase);
        if needle.is_empty() || needle.len() > self.tokens.len() {
            return false;
        }
        self.tokens
            .windows(needle.len())
            .any(|window| window == needle.as_slice())
    }

    pub fn mentions_any<S: AsRef<str>>(&self, phrases: &[S]) -> bool {
        phrases.iter().any(|p| self.mentions(p.as_ref()))
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}
