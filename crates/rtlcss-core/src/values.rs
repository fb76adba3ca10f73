//! Pure value sub-grammar parsers
//!
//! Each helper decodes one small CSS value grammar and is total on its
//! domain: unparseable input yields `None` (or all-`None` fields), never an
//! error. The mirroring engine treats `None` as "do not emit an override for
//! this declaration".

use regex::Regex;
use std::sync::LazyLock;

/// Length units accepted in positions, widths, and zero-length detection
const UNITS: &str = "em|ex|px|in|cm|mm|pt|pc|%";

static ZERO_LENGTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:0+\.?0*|\.0+)(?:{UNITS})?$")).expect("zero-length pattern")
});

static BG_POS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:left|center|right|top|bottom|[.\d]+(?:{UNITS})?)\s+(?:left|center|right|top|bottom|[.\d]+(?:{UNITS})?)"
    ))
    .expect("background-position pattern")
});

static LENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^[.\d]+(?:{UNITS})$")).expect("length pattern"));

const BORDER_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
    "initial", "inherit",
];

/// Check whether a value denotes a zero length (`0`, `0.0`, `.0px`, `0%`, ...)
pub fn is_zero_length(value: &str) -> bool {
    ZERO_LENGTH_RE.is_match(value)
}

/// Parse a four-side shorthand value into `[top, right, bottom, left]`
///
/// Replication follows the CSS shorthand scheme: one token applies to all
/// four sides, two become `(a, b, a, b)`, three become `(a, b, c, b)`. Any
/// other token count is not a four-side value.
pub fn parse_four_sides(value: &str) -> Option<[&str; 4]> {
    let a: Vec<&str> = value.split_whitespace().collect();
    match a.as_slice() {
        &[v] => Some([v, v, v, v]),
        &[t, r] => Some([t, r, t, r]),
        &[t, r, b] => Some([t, r, b, r]),
        &[t, r, b, l] => Some([t, r, b, l]),
        _ => None,
    }
}

/// Parse a radius four-corner value into
/// `[top-left, top-right, bottom-right, bottom-left]`
///
/// Same replication scheme as [`parse_four_sides`], but the slots are
/// corners rather than sides.
pub fn parse_radius_four_corners(value: &str) -> Option<[&str; 4]> {
    parse_four_sides(value)
}

/// Parse a full `border-radius` value, including the optional `/` split into
/// horizontal and vertical components
///
/// Each corner combines its horizontal and vertical radius: equal values
/// collapse to one, unequal values are space-joined.
pub fn parse_radius(value: &str) -> Option<[String; 4]> {
    let (horizontal, vertical) = match value.split_once('/') {
        Some((h, v)) => (h, v),
        None => (value, value),
    };
    let h = parse_radius_four_corners(horizontal)?;
    let v = parse_radius_four_corners(vertical).unwrap_or(h);
    Some(std::array::from_fn(|i| {
        if h[i] == v[i] {
            h[i].to_string()
        } else {
            format!("{} {}", h[i], v[i])
        }
    }))
}

/// Parse a `background-position` pair into `(xpos, ypos)`
///
/// Axis order is normalized: a vertical keyword first or a horizontal
/// keyword second swaps the pair. A zero-length x-position is rewritten to
/// the keyword `left`.
pub fn parse_xy_pos(value: &str) -> Option<(String, String)> {
    let a: Vec<&str> = value.split_whitespace().collect();
    let [mut xpos, mut ypos] = match a.as_slice() {
        [x, y] => [*x, *y],
        _ => return None,
    };
    if xpos == "top" || xpos == "bottom" || ypos == "right" || ypos == "left" {
        std::mem::swap(&mut xpos, &mut ypos);
    }
    let xpos = if is_zero_length(xpos) {
        "left".to_string()
    } else {
        xpos.to_string()
    };
    Some((xpos, ypos.to_string()))
}

/// Find the position pair inside a `background` shorthand value
///
/// Scans for the first substring matching the background-position
/// sub-grammar (keyword or length, whitespace, keyword or length) and
/// delegates to [`parse_xy_pos`].
pub fn background_xy_pos(value: &str) -> Option<(String, String)> {
    let m = BG_POS_RE.find(value)?;
    parse_xy_pos(m.as_str())
}

/// Independent components of a `border` shorthand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderParts<'a> {
    pub width: Option<&'a str>,
    pub style: Option<&'a str>,
    pub color: Option<&'a str>,
}

impl BorderParts<'_> {
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.style.is_none() && self.color.is_none()
    }
}

/// Decompose a `border` shorthand into width, style, and color
///
/// Each whitespace-separated token is classified as a known border-style
/// keyword, a length, or a color; a later token of the same class wins.
pub fn parse_border(value: &str) -> BorderParts<'_> {
    let mut parts = BorderParts::default();
    for token in value.split_whitespace() {
        if BORDER_STYLES.contains(&token) {
            parts.style = Some(token);
        } else if LENGTH_RE.is_match(token) {
            parts.width = Some(token);
        } else {
            parts.color = Some(token);
        }
    }
    parts
}
