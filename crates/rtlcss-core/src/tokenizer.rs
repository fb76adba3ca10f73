//! Flat tokenizer for stylesheet source
//!
//! Comment stripping happens first, then the text is split into a stream of
//! structural tokens: `{`, `}`, `;`, and maximal runs of everything else.
//! Every input tokenizes successfully; malformed stylesheets simply yield a
//! best-effort stream for the tree builder to recover from.

use std::ops::Range;

/// Span of a token in the (comment-stripped) source
pub type Span = Range<usize>;

/// Structural token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    OpenBrace,
    CloseBrace,
    Semicolon,
    /// A maximal run of characters containing none of `{`, `}`, `;`
    Text,
}

/// A token with its kind, text, and span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }
}

/// Remove block comments (`/* ... */`, non-greedy, spanning newlines)
///
/// An unterminated comment runs to end of input, which is what every
/// forgiving stylesheet consumer does.
pub fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Split comment-stripped source into structural tokens
///
/// Whitespace-only text tokens are kept here and filtered by the tree
/// builder, matching the flat-stream contract.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut i = 0usize;

    while i < len {
        match bytes[i] {
            b'{' => {
                tokens.push(Token::new(TokenKind::OpenBrace, "{", i..i + 1));
                i += 1;
            }
            b'}' => {
                tokens.push(Token::new(TokenKind::CloseBrace, "}", i..i + 1));
                i += 1;
            }
            b';' => {
                tokens.push(Token::new(TokenKind::Semicolon, ";", i..i + 1));
                i += 1;
            }
            _ => {
                let start = i;
                while i < len && !matches!(bytes[i], b'{' | b'}' | b';') {
                    i += 1;
                }
                tokens.push(Token::new(TokenKind::Text, &input[start..i], start..i));
            }
        }
    }

    tokens
}
