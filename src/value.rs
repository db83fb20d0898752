//! Token value kinds and CSS literal validation.
//!
//! Every token value in the table is a literal CSS string of one of five
//! kinds. The predicates here are syntactic: they catch malformed literals
//! early, while the external build tool stays the authority on full CSS
//! grammar.

/// The kind of CSS literal a token value must be.
///
/// Each category of the token table binds one kind; the scale layer uses it
/// to check values during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Hex color, `#rgb` or `#rrggbb`.
    Color,
    /// CSS length (`0.25rem`, `9999px`, `65ch`, ...) or bare `0`.
    Length,
    /// CSS time (`150ms`, `0.3s`).
    Duration,
    /// Composite shadow: `none` or comma-separated layers.
    Shadow,
    /// Unitless font weight, an integer in 1..=1000.
    Weight,
}

impl TokenKind {
    /// Returns `true` if the value is a well-formed literal of this kind.
    pub fn validates(self, value: &str) -> bool {
        match self {
            TokenKind::Color => is_hex_color(value),
            TokenKind::Length => is_css_length(value),
            TokenKind::Duration => is_css_time(value),
            TokenKind::Shadow => is_shadow(value),
            TokenKind::Weight => is_font_weight(value),
        }
    }

    /// Returns a human-readable name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Color => "color",
            TokenKind::Length => "length",
            TokenKind::Duration => "duration",
            TokenKind::Shadow => "shadow",
            TokenKind::Weight => "weight",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Length units accepted in token values.
const LENGTH_UNITS: &[&str] = &["rem", "em", "px", "ch", "vh", "vw", "%"];

/// Returns `true` for a `#rgb` or `#rrggbb` hex color.
///
/// # Example
///
/// ```rust
/// use mtz_tokens::value::is_hex_color;
///
/// assert!(is_hex_color("#2563eb"));
/// assert!(is_hex_color("#fff"));
/// assert!(!is_hex_color("2563eb"));
/// assert!(!is_hex_color("#25 63eb"));
/// ```
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Returns `true` for a CSS length: bare `0` or a decimal number followed
/// by a recognized unit. Negative lengths are accepted (shadow offsets).
///
/// # Example
///
/// ```rust
/// use mtz_tokens::value::is_css_length;
///
/// assert!(is_css_length("0.25rem"));
/// assert!(is_css_length("9999px"));
/// assert!(is_css_length("65ch"));
/// assert!(is_css_length("0"));
/// assert!(!is_css_length("none"));
/// assert!(!is_css_length("1rm"));
/// ```
pub fn is_css_length(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    if unsigned == "0" {
        return true;
    }
    LENGTH_UNITS
        .iter()
        .any(|unit| unsigned.strip_suffix(unit).is_some_and(is_decimal_number))
}

/// Returns `true` for a CSS time: a decimal number followed by `ms` or `s`.
///
/// # Example
///
/// ```rust
/// use mtz_tokens::value::is_css_time;
///
/// assert!(is_css_time("150ms"));
/// assert!(is_css_time("0.3s"));
/// assert!(!is_css_time("150"));
/// ```
pub fn is_css_time(value: &str) -> bool {
    ["ms", "s"]
        .iter()
        .any(|unit| value.strip_suffix(unit).is_some_and(is_decimal_number))
}

/// Returns `true` for a composite shadow: `none`, or one-or-more layers
/// separated by top-level commas. Each layer is 2 to 4 lengths, an optional
/// `inset` keyword, and an optional color (hex or `rgb`/`rgba` function).
pub fn is_shadow(value: &str) -> bool {
    if value == "none" {
        return true;
    }
    let layers = split_top_level(value, ',');
    !layers.is_empty() && layers.iter().all(|layer| is_shadow_layer(layer))
}

fn is_shadow_layer(layer: &str) -> bool {
    let parts = split_top_level(layer, ' ');
    let mut lengths = 0usize;
    let mut colors = 0usize;
    for part in parts {
        if part == "inset" {
            continue;
        }
        if is_css_length(part) {
            lengths += 1;
        } else if is_shadow_color(part) {
            colors += 1;
        } else {
            return false;
        }
    }
    (2..=4).contains(&lengths) && colors <= 1
}

fn is_shadow_color(part: &str) -> bool {
    if is_hex_color(part) {
        return true;
    }
    (part.starts_with("rgb(") || part.starts_with("rgba(")) && part.ends_with(')')
}

/// Splits on a separator, ignoring separators inside parentheses.
/// Empty segments are dropped so repeated whitespace is tolerated.
fn split_top_level(value: &str, separator: char) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                let segment = value[start..i].trim();
                if !segment.is_empty() {
                    segments.push(segment);
                }
                start = i + 1;
            }
            _ => {}
        }
    }
    let tail = value[start..].trim();
    if !tail.is_empty() {
        segments.push(tail);
    }
    segments
}

/// Returns `true` for a unitless integer font weight in 1..=1000.
///
/// # Example
///
/// ```rust
/// use mtz_tokens::value::is_font_weight;
///
/// assert!(is_font_weight("400"));
/// assert!(!is_font_weight("bold"));
/// assert!(!is_font_weight("1001"));
/// ```
pub fn is_font_weight(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| c.is_ascii_digit())
        && value.parse::<u32>().is_ok_and(|w| (1..=1000).contains(&w))
}

fn is_decimal_number(value: &str) -> bool {
    let mut parts = value.splitn(2, '.');
    let int = parts.next().unwrap_or("");
    let int_ok = !int.is_empty() && int.chars().all(|c| c.is_ascii_digit());
    match parts.next() {
        Some(frac) => int_ok && !frac.is_empty() && frac.chars().all(|c| c.is_ascii_digit()),
        None => int_ok,
    }
}

/// Returns `true` for a class name a safelist entry may carry: non-empty,
/// ASCII alphanumerics, hyphens, and `:` for variant prefixes like `hover:`.
///
/// # Example
///
/// ```rust
/// use mtz_tokens::value::is_valid_class_name;
///
/// assert!(is_valid_class_name("hover:bg-blue-700"));
/// assert!(is_valid_class_name("px-4"));
/// assert!(!is_valid_class_name(""));
/// assert!(!is_valid_class_name("p-[3px]"));
/// ```
pub fn is_valid_class_name(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with(':')
        && !value.ends_with(':')
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ':')
}
