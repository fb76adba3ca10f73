//! Stylesheet rendering
//!
//! Blocks render as `selector{...}` with children joined by `;\n`; a final
//! text-level cleanup pass over the whole document collapses the punctuation
//! into compact one-rule-per-line output.

use crate::document::{Block, Declaration, Document, Node};
use std::fmt;

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.property, self.value)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Declaration(decl) => decl.fmt(f),
            Node::Block(block) => block.fmt(f),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .children()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";\n")
            // a nested block already ends the statement, drop the separator
            .replace("}\n;\n", "}\n");
        write!(f, "{}{{{}}}\n", self.selector, body)
    }
}

/// Render a whole document to stylesheet text
///
/// Top-level blocks are joined by newlines, then the cleanup chain collapses
/// `\n}` into `}`, puts every `}` on its own line end, and pulls statements
/// after `;` onto the same line.
pub fn render(document: &Document) -> String {
    document
        .blocks()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
        .replace("\n}", "}")
        .replace('}', "}\n")
        .replace(";\n", ";")
}
