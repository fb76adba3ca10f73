//! Shorthand-to-longhand expansion
//!
//! Compound declarations such as `margin: 1px 2px` are expanded into the
//! directional longhands the mirroring engine reasons about. Expansion only
//! feeds the collected view; the original declaration stays in the tree
//! verbatim.

use crate::document::Declaration;
use crate::values;

/// Vendor prefixes and the legacy `*` engine hack recognized on properties
const PREFIXES: &[&str] = &["*", "-webkit-", "-moz-"];

/// Split a property into its recognized prefix (possibly empty) and bare name
pub fn split_prefix(property: &str) -> (&str, &str) {
    for prefix in PREFIXES {
        if let Some(bare) = property.strip_prefix(prefix) {
            return (prefix, bare);
        }
    }
    ("", property)
}

/// Shorthands whose value is a four-side group
const FOUR_SIDE_SHORTHANDS: &[&str] = &[
    "margin",
    "padding",
    "border-style",
    "border-color",
    "border-width",
    "outline-style",
    "outline-color",
    "outline-width",
];

/// Expand a declaration into its directional longhands, if it is a shorthand
///
/// The recognized prefix is re-applied to every emitted longhand. Properties
/// with no shorthand form expand to nothing.
pub fn expand(decl: &Declaration) -> Vec<Declaration> {
    let (prefix, bare) = split_prefix(&decl.property);

    if FOUR_SIDE_SHORTHANDS.contains(&bare) {
        let Some([_, right, _, left]) = values::parse_four_sides(&decl.value) else {
            return Vec::new();
        };
        // "border-style" becomes "border-left-style"; "margin" becomes
        // "margin-left".
        let (base, suffix) = match bare.split_once('-') {
            Some((base, suffix)) => (base, format!("-{suffix}")),
            None => (bare, String::new()),
        };
        return vec![
            Declaration::new(format!("{prefix}{base}-left{suffix}"), left),
            Declaration::new(format!("{prefix}{base}-right{suffix}"), right),
        ];
    }

    match bare {
        "border-radius" => {
            let Some([tl, tr, br, bl]) = values::parse_radius(&decl.value) else {
                return Vec::new();
            };
            vec![
                Declaration::new(format!("{prefix}border-top-left-radius"), tl),
                Declaration::new(format!("{prefix}border-top-right-radius"), tr),
                Declaration::new(format!("{prefix}border-bottom-right-radius"), br),
                Declaration::new(format!("{prefix}border-bottom-left-radius"), bl),
            ]
        }
        "border" => {
            let parts = values::parse_border(&decl.value);
            let mut out = Vec::new();
            if let Some(width) = parts.width {
                out.push(Declaration::new(format!("{prefix}border-left-width"), width));
                out.push(Declaration::new(
                    format!("{prefix}border-right-width"),
                    width,
                ));
            }
            if let Some(style) = parts.style {
                out.push(Declaration::new(format!("{prefix}border-left-style"), style));
                out.push(Declaration::new(
                    format!("{prefix}border-right-style"),
                    style,
                ));
            }
            if let Some(color) = parts.color {
                out.push(Declaration::new(format!("{prefix}border-left-color"), color));
                out.push(Declaration::new(
                    format!("{prefix}border-right-color"),
                    color,
                ));
            }
            out
        }
        "background" => match values::background_xy_pos(&decl.value) {
            Some((xpos, ypos)) => vec![Declaration::new(
                format!("{prefix}background-position"),
                format!("{xpos} {ypos}"),
            )],
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}
