/// Token classification over source text.

/// The closed set of highlight categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    String,
    Comment,
    FunctionName,
    Number,
    /// Unclassified text. Rendered without a wrapping span.
    Plain,
}

impl TokenKind {
    /// The CSS class emitted for this kind, or `None` for plain text.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Self::Keyword => Some("keyword"),
            Self::String => Some("string"),
            Self::Comment => Some("comment"),
            Self::FunctionName => Some("function-name"),
            Self::Number => Some("number"),
            Self::Plain => None,
        }
    }
}

/// A contiguous classified span of source text, as byte offsets.
///
/// Tokens are derived, never persisted: the tokenizer recomputes the full
/// partition on every change. Within one partition, tokens are ordered,
/// non-overlapping, and gap-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl Token {
    /// The text this token covers.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(TokenKind::Keyword.class_name(), Some("keyword"));
        assert_eq!(TokenKind::String.class_name(), Some("string"));
        assert_eq!(TokenKind::Comment.class_name(), Some("comment"));
        assert_eq!(TokenKind::FunctionName.class_name(), Some("function-name"));
        assert_eq!(TokenKind::Number.class_name(), Some("number"));
        assert_eq!(TokenKind::Plain.class_name(), None);
    }

    #[test]
    fn test_slice() {
        let token = Token {
            kind: TokenKind::Number,
            start: 4,
            end: 6,
        };
        assert_eq!(token.slice("abc 42 def"), "42");
    }
}
