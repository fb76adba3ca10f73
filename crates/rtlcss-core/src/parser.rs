//! Stack-based tree builder over the flat token stream
//!
//! Consumes the tokenizer's output and produces a [`Document`], supporting
//! arbitrary nesting (`@keyframes` steps and similar rule groups). A pending
//! text token is held until punctuation decides whether it is a selector
//! (at `{`) or a declaration (at `;` or `}`). Malformed declarations are
//! discarded silently; an unmatched `}` is a fatal parse error, while blocks
//! left open at end of input are attached best-effort.

use crate::document::{Block, Declaration, Document};
use crate::error::RtlcssError;
use crate::result::Result;
use crate::tokenizer::{self, Token, TokenKind};
use tracing::trace;

/// Parse stylesheet source into a document tree
///
/// Comments are stripped first; the resulting tree is not yet normalized
/// (callers run [`Document::normalize`] before mirroring).
pub fn parse_stylesheet(source: &str) -> Result<Document> {
    let stripped = tokenizer::strip_comments(source);
    let tokens = tokenizer::tokenize(&stripped);
    let mut builder = TreeBuilder::new();
    for token in &tokens {
        builder.process(token)?;
    }
    Ok(builder.finish())
}

/// Token stream consumer with an explicit stack of open blocks
struct TreeBuilder {
    document: Document,
    stack: Vec<Block>,
    pending: Option<String>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            document: Document::new(),
            stack: Vec::new(),
            pending: None,
        }
    }

    fn process(&mut self, token: &Token<'_>) -> Result<()> {
        match token.kind {
            TokenKind::OpenBrace => {
                let selector = self.pending.take().unwrap_or_default();
                self.stack.push(Block::new(selector));
            }
            TokenKind::CloseBrace => {
                self.flush_pending_declaration();
                let block = self
                    .stack
                    .pop()
                    .ok_or(RtlcssError::UnbalancedCloseBrace {
                        offset: token.span.start,
                    })?;
                self.attach(block);
            }
            TokenKind::Semicolon => {
                self.flush_pending_declaration();
            }
            TokenKind::Text => {
                let text = token.text.trim();
                if !text.is_empty() {
                    self.pending = Some(text.to_string());
                }
            }
        }
        Ok(())
    }

    /// Turn the pending token into a declaration on the current block
    ///
    /// A pending token without a `:`, or one appearing outside any block,
    /// is a malformed declaration and is dropped.
    fn flush_pending_declaration(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let Some((property, value)) = pending.split_once(':') else {
            trace!("discarding malformed declaration: {pending:?}");
            return;
        };
        if let Some(block) = self.stack.last_mut() {
            block.push_declaration(Declaration::new(property.trim(), value.trim()));
        } else {
            trace!("discarding top-level declaration: {pending:?}");
        }
    }

    fn attach(&mut self, block: Block) {
        match self.stack.last_mut() {
            Some(parent) => parent.push_block(block),
            None => self.document.push_block(block),
        }
    }

    /// Finish parsing: a trailing pending token is dropped, and any blocks
    /// still open at end of input are closed and attached.
    fn finish(mut self) -> Document {
        self.pending = None;
        while let Some(block) = self.stack.pop() {
            self.attach(block);
        }
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Node;

    #[test]
    fn test_parse_flat_rule() {
        let doc = parse_stylesheet(".a { float: left; clear: both }").unwrap();
        assert_eq!(doc.blocks().len(), 1);
        let block = &doc.blocks()[0];
        assert_eq!(block.selector.trim(), ".a");
        let decls: Vec<(&str, &str)> = block
            .declarations()
            .map(|d| (d.property.as_str(), d.value.as_str()))
            .collect();
        assert_eq!(decls, vec![("float", "left"), ("clear", "both")]);
    }

    #[test]
    fn test_parse_nested_keyframes() {
        let source = "@keyframes spin {\n 0% { transform: rotate(0deg); }\n 100% { transform: rotate(359deg); }\n}";
        let doc = parse_stylesheet(source).unwrap();
        assert_eq!(doc.blocks().len(), 1);
        let outer = &doc.blocks()[0];
        assert_eq!(outer.selector.trim(), "@keyframes spin");
        let steps: Vec<&str> = outer.blocks().map(|b| b.selector.trim()).collect();
        assert_eq!(steps, vec!["0%", "100%"]);
    }

    #[test]
    fn test_comments_are_stripped() {
        let doc = parse_stylesheet(".a { /* float: left; */ clear: right }").unwrap();
        let block = &doc.blocks()[0];
        assert_eq!(block.declarations().count(), 1);
        assert_eq!(block.declarations().next().unwrap().property, "clear");
    }

    #[test]
    fn test_malformed_declaration_discarded() {
        let doc = parse_stylesheet(".a { bogus ; float: left }").unwrap();
        let block = &doc.blocks()[0];
        let props: Vec<&str> = block.declarations().map(|d| d.property.as_str()).collect();
        assert_eq!(props, vec!["float"]);
    }

    #[test]
    fn test_unmatched_close_brace_is_fatal() {
        let err = parse_stylesheet(".a { float: left } }").unwrap_err();
        assert!(matches!(err, RtlcssError::UnbalancedCloseBrace { .. }));
    }

    #[test]
    fn test_unclosed_block_attached_at_eof() {
        let doc = parse_stylesheet(".a { float: left; ").unwrap();
        assert_eq!(doc.blocks().len(), 1);
        assert_eq!(doc.blocks()[0].declarations().next().unwrap().value, "left");
    }

    #[test]
    fn test_trailing_pending_token_dropped() {
        let doc = parse_stylesheet(".a { float: left } stray: token").unwrap();
        assert_eq!(doc.blocks().len(), 1);
        assert_eq!(doc.blocks()[0].children().len(), 1);
    }

    #[test]
    fn test_nested_block_declaration_order_preserved() {
        let source = ".a { margin: 1px; @media x { color: red } padding: 2px }";
        let doc = parse_stylesheet(source).unwrap();
        let block = &doc.blocks()[0];
        let kinds: Vec<bool> = block
            .children()
            .iter()
            .map(|n| matches!(n, Node::Block(_)))
            .collect();
        assert_eq!(kinds, vec![false, true, false]);
    }
}
