//! Tokenizing syntax highlighter for the codepane editing surface.
//!
//! Pure and stateless: raw source text in, escaped span-annotated markup
//! out. Tokenization is pattern-based, not a full parse: a single pass
//! over the original text produces a non-overlapping token partition, and
//! a separate rendering pass escapes each slice and wraps classified
//! tokens in `<span>` tags.

pub mod escape;
pub mod highlighter;
pub mod language;
pub mod token;

pub use escape::escape_html;
pub use highlighter::{render_markup, Highlighter};
pub use language::Language;
pub use token::{Token, TokenKind};
