//! Mirroring engine
//!
//! Walks a parsed document and derives an override tree containing only the
//! declarations whose directional meaning changes under right-to-left layout.
//! Each block is reduced to a "collected" view first: its direct declarations
//! plus every shorthand expansion, merged into an insertion-ordered map where
//! a later duplicate keeps the position of the first insertion.

use crate::document::{Block, Declaration, Document};
use crate::exclusions::ExclusionTable;
use crate::shorthand::{self, split_prefix};
use crate::values;
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::trace;

/// Mirror every top-level block of a document
///
/// The result contains one override block per source block that needed any
/// mirroring; it may be empty.
pub fn mirror_document(document: &Document, exclusions: &ExclusionTable) -> Document {
    let mut out = Document::new();
    for block in document.blocks() {
        if let Some(overrides) = mirror_block(block, exclusions) {
            out.push_block(overrides);
        }
    }
    out
}

/// Mirror a single block, returning `None` when nothing needed flipping
///
/// Nested blocks are mirrored recursively against the same exclusion table;
/// their selector text is carried over unmodified. A block with zero override
/// declarations and zero override children produces no output at all.
pub fn mirror_block(block: &Block, exclusions: &ExclusionTable) -> Option<Block> {
    let collected = collect(block);
    let mut done: HashSet<String> = HashSet::new();
    let mut overrides = Block::new(block.selector.clone());

    for (property, value) in &collected {
        let (property, value) = (property.as_str(), value.as_str());
        if done.contains(property) {
            continue;
        }
        done.insert(property.to_string());

        let (prefix, bare) = split_prefix(property);
        if exclusions.is_excluded(&block.selector, bare) {
            trace!("excluded {} for selector {}", bare, block.selector);
            continue;
        }

        match bare {
            "content" => {
                let flipped = flip_quote_entities(value);
                if flipped != value {
                    overrides.push_declaration(Declaration::new(property, flipped));
                }
            }
            "background-position" => {
                let Some((xpos, ypos)) = values::parse_xy_pos(value) else {
                    continue;
                };
                let Some(xpos) = mirror_xpos(&xpos) else {
                    continue;
                };
                overrides.push_declaration(Declaration::new(property, format!("{xpos} {ypos}")));
            }
            "clear" | "float" | "text-align" if value == "left" || value == "right" => {
                let opposite = if value == "left" { "right" } else { "left" };
                overrides.push_declaration(Declaration::new(property, opposite));
            }
            "left" | "right" => {
                let bare_counterpart = swap_left_right(bare);
                let counterpart = format!("{prefix}{bare_counterpart}");
                done.insert(counterpart.clone());
                // an excluded counterpart forbids the whole swap
                if exclusions.is_excluded(&block.selector, &bare_counterpart) {
                    continue;
                }
                let other_value = collected
                    .get(&counterpart)
                    .map(String::as_str)
                    .unwrap_or("auto");
                if other_value == value {
                    continue;
                }
                overrides.push_declaration(Declaration::new(property, other_value));
                overrides.push_declaration(Declaration::new(counterpart, value));
            }
            // Physical corner radii: border-top-left-radius and friends. The
            // bare border-radius shorthand is never mirrored directly; its
            // expansion already produced the corners.
            _ if bare.starts_with("border-") && bare.ends_with("-radius") && bare != "border-radius" => {
                let bare_counterpart = swap_left_right(bare);
                let counterpart = format!("{prefix}{bare_counterpart}");
                done.insert(counterpart.clone());
                if exclusions.is_excluded(&block.selector, &bare_counterpart) {
                    continue;
                }
                let other_value = collected
                    .get(&counterpart)
                    .map(String::as_str)
                    .unwrap_or("0");
                if other_value == value {
                    continue;
                }
                overrides.push_declaration(Declaration::new(property, other_value));
                overrides.push_declaration(Declaration::new(counterpart, value));
            }
            _ if bare.contains("-left") || bare.contains("-right") => {
                let bare_counterpart = swap_left_right(bare);
                let counterpart = format!("{prefix}{bare_counterpart}");
                done.insert(counterpart.clone());
                if exclusions.is_excluded(&block.selector, &bare_counterpart) {
                    continue;
                }
                let other_value = collected
                    .get(&counterpart)
                    .cloned()
                    .or_else(|| default_value(&bare_counterpart).map(str::to_string));
                if other_value.as_deref() == Some(value) {
                    continue;
                }
                if let Some(other_value) = other_value {
                    overrides.push_declaration(Declaration::new(property, other_value));
                }
                overrides.push_declaration(Declaration::new(counterpart, value));
            }
            _ => {}
        }
    }

    for child in block.blocks() {
        if let Some(nested) = mirror_block(child, exclusions) {
            overrides.push_block(nested);
        }
    }

    if overrides.is_empty() {
        None
    } else {
        Some(overrides)
    }
}

/// Build the collected property→value view for a block
///
/// Direct declarations seed the map in order; shorthand expansions follow in
/// declaration order. `IndexMap::insert` overwrites the value but keeps the
/// position of the first insertion, which is exactly the merge we need.
fn collect(block: &Block) -> IndexMap<String, String> {
    let mut collected = IndexMap::new();
    for decl in block.declarations() {
        collected.insert(decl.property.clone(), decl.value.clone());
        for expanded in shorthand::expand(decl) {
            collected.insert(expanded.property, expanded.value);
        }
    }
    collected
}

/// Mirror the x component of a background position
///
/// Keywords flip, percentages reflect around 50% (`20%` → `80%`), with the
/// endpoints mapped back to keywords. `None` means the mirrored position is
/// its own mirror and no override should be emitted.
fn mirror_xpos(xpos: &str) -> Option<String> {
    if xpos == "left" {
        return Some("right".to_string());
    }
    if xpos == "right" {
        return Some("left".to_string());
    }
    if let Some(pct) = xpos.strip_suffix('%') {
        let v: f64 = pct.parse().ok()?;
        let mirrored = 100.0 - v;
        if mirrored == 50.0 {
            return None;
        }
        if mirrored == 0.0 {
            return Some("left".to_string());
        }
        if mirrored == 100.0 {
            return Some("right".to_string());
        }
        return Some(format!("{mirrored}%"));
    }
    Some(xpos.to_string())
}

/// Exchange `left` and `right` in a property name
///
/// Goes through a placeholder so `right` produced by the first substitution
/// is not substituted again. The NUL placeholder cannot occur in a parsed
/// property name.
fn swap_left_right(name: &str) -> String {
    name.replace("right", "\u{0}")
        .replace("left", "right")
        .replace("\u{0}", "left")
}

/// Rotate the single-guillemet quote entities in a `content` value
///
/// Same placeholder scheme as [`swap_left_right`], so simultaneous
/// occurrences of both entities flip correctly.
fn flip_quote_entities(text: &str) -> String {
    text.replace("&rsaquo;", "\u{0}")
        .replace("&lsaquo;", "&rsaquo;")
        .replace("\u{0}", "&lsaquo;")
}

/// Static defaults used when only one side of a directional pair is declared
fn default_value(property: &str) -> Option<&'static str> {
    Some(match property {
        "left" | "right" => "auto",
        "margin"
        | "padding"
        | "margin-left"
        | "margin-right"
        | "padding-left"
        | "padding-right" => "0",
        "outline"
        | "border"
        | "outline-style"
        | "border-style"
        | "outline-left"
        | "outline-right"
        | "border-left"
        | "border-right"
        | "outline-left-style"
        | "outline-right-style"
        | "border-left-style"
        | "border-right-style" => "none",
        "outline-width"
        | "border-width"
        | "outline-left-width"
        | "outline-right-width"
        | "border-left-width"
        | "border-right-width" => "medium",
        _ => return None,
    })
}
