/// Language profile: the keyword set driving keyword classification.
use serde::{Deserialize, Serialize};

/// Reserved words of the default profile.
const DEFAULT_KEYWORDS: &[&str] = &[
    "void", "int", "double", "String", "bool", "var", "final", "const", "class", "return", "if",
    "else", "for", "while", "import", "show", "as",
];

/// A highlighting language profile.
///
/// Only the keyword set varies per language; string, comment, and number
/// grammars are fixed. Deserializable so hosts can supply a custom profile
/// as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    /// Display name of the profile.
    pub name: String,
    /// Words tagged as `keyword`. Matched whole-word only.
    pub keywords: Vec<String>,
}

impl Default for Language {
    fn default() -> Self {
        Self {
            name: "dart".to_string(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Language {
    /// Creates a profile from a name and keyword list.
    pub fn new<I, S>(name: &str, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `word` is a reserved word of this profile.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_keywords() {
        let lang = Language::default();
        assert_eq!(lang.name, "dart");
        assert!(lang.is_keyword("if"));
        assert!(lang.is_keyword("return"));
        assert!(lang.is_keyword("String"));
        assert!(!lang.is_keyword("string"));
        assert!(!lang.is_keyword("foo"));
    }

    #[test]
    fn test_custom_profile() {
        let lang = Language::new("rust", ["fn", "let", "match"]);
        assert!(lang.is_keyword("fn"));
        assert!(!lang.is_keyword("if"));
    }

    #[test]
    fn test_deserialize_from_json() {
        let lang: Language =
            serde_json::from_str(r#"{"name": "mini", "keywords": ["begin", "end"]}"#).unwrap();
        assert_eq!(lang.name, "mini");
        assert!(lang.is_keyword("begin"));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        // Missing fields fall back to the default profile's values.
        let lang: Language = serde_json::from_str("{}").unwrap();
        assert_eq!(lang, Language::default());
    }

    #[test]
    fn test_serialize_round_trip() {
        let lang = Language::new("mini", ["begin"]);
        let json = serde_json::to_string(&lang).unwrap();
        let parsed: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, lang);
    }
}
