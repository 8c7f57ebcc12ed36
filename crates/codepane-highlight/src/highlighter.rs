/// Single-pass tokenizer and markup renderer.
use std::collections::HashSet;

use anyhow::{Context, Result};
use regex::Regex;

use crate::escape::escape_html;
use crate::language::Language;
use crate::token::{Token, TokenKind};

/// Candidate token shapes, tried leftmost-first: line comments, quoted
/// strings (non-greedy, single line, no escape sequences), identifiers,
/// digit runs. Character classes are ASCII, matching the lexical grammar
/// the keyword profiles are written for.
const TOKEN_PATTERN: &str = concat!(
    r"(?P<comment>//[^\n]*)",
    r#"|(?P<string>"[^"\n]*"|'[^'\n]*')"#,
    r"|(?P<ident>[A-Za-z_][A-Za-z0-9_]*)",
    r"|(?P<number>[0-9]+)",
);

/// Converts source text into escaped, span-annotated markup.
///
/// Stateless after construction and total over its input: `highlight`
/// never fails, and malformed source (unterminated literals, stray
/// quotes) degrades to plain text rather than an error.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Regex,
    keywords: HashSet<String>,
}

impl Highlighter {
    /// Creates a highlighter for the default language profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the token pattern fails to compile.
    pub fn new() -> Result<Self> {
        Self::for_language(&Language::default())
    }

    /// Creates a highlighter for the given language profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the token pattern fails to compile.
    pub fn for_language(language: &Language) -> Result<Self> {
        let pattern = Regex::new(TOKEN_PATTERN).context("failed to compile token pattern")?;
        Ok(Self {
            pattern,
            keywords: language.keywords.iter().cloned().collect(),
        })
    }

    /// Highlights `text`, returning escaped markup with classified spans.
    pub fn highlight(&self, text: &str) -> String {
        render_markup(text, &self.tokenize(text))
    }

    /// Tokenizes `text` into an ordered, non-overlapping, gap-free
    /// partition. Concatenating the token slices reconstructs the input
    /// exactly; text no rule claims is covered by `Plain` tokens.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut cursor = 0;

        for caps in self.pattern.captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };

            let kind = if caps.name("comment").is_some() {
                TokenKind::Comment
            } else if caps.name("string").is_some() {
                TokenKind::String
            } else if caps.name("ident").is_some() {
                self.classify_identifier(m.as_str(), text, m.end())
            } else {
                classify_number(text, m.end())
            };

            if m.start() > cursor {
                push_token(&mut tokens, TokenKind::Plain, cursor, m.start());
            }
            push_token(&mut tokens, kind, m.start(), m.end());
            cursor = m.end();
        }

        if cursor < text.len() {
            push_token(&mut tokens, TokenKind::Plain, cursor, text.len());
        }

        tokens
    }

    /// Keywords win over function names, so `if(x)` tags `if` as a
    /// keyword. A function name must be immediately followed by `(`.
    fn classify_identifier(&self, word: &str, text: &str, end: usize) -> TokenKind {
        if self.keywords.contains(word) {
            TokenKind::Keyword
        } else if text[end..].starts_with('(') {
            TokenKind::FunctionName
        } else {
            TokenKind::Plain
        }
    }
}

/// A digit run is a number only whole-word: `123abc` stays plain. A run
/// preceded by an identifier character is unreachable here because the
/// identifier rule consumes it.
fn classify_number(text: &str, end: usize) -> TokenKind {
    match text.as_bytes().get(end) {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => TokenKind::Plain,
        _ => TokenKind::Number,
    }
}

/// Appends a token, coalescing runs of adjacent `Plain` spans.
fn push_token(tokens: &mut Vec<Token>, kind: TokenKind, start: usize, end: usize) {
    if kind == TokenKind::Plain {
        if let Some(last) = tokens.last_mut() {
            if last.kind == TokenKind::Plain && last.end == start {
                last.end = end;
                return;
            }
        }
    }
    tokens.push(Token { kind, start, end });
}

/// Renders a token partition of `text` as escaped, span-annotated markup.
///
/// Each slice is escaped before tagging, and spans never overlap, so
/// stripping the tags and unescaping the entities reconstructs `text`.
pub fn render_markup(text: &str, tokens: &[Token]) -> String {
    let mut markup = String::with_capacity(text.len());
    for token in tokens {
        let escaped = escape_html(token.slice(text));
        match token.kind.class_name() {
            Some(class) => {
                markup.push_str("<span class=\"");
                markup.push_str(class);
                markup.push_str("\">");
                markup.push_str(&escaped);
                markup.push_str("</span>");
            }
            None => markup.push_str(&escaped),
        }
    }
    markup
}
