//! Attribute parsing from product display names and SKUs.
//!
//! Each attribute has its own ordered rule list. Rules are tried top to
//! bottom and the first one whose pattern matches decides the result, so
//! priority lives in the list order rather than in one combined regex.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tpu_core::{AxleType, BoltPattern, BrakeType, Capacity, FitmentAttributes};

/// A pattern paired with the function that turns its captures into a value.
struct Rule<T> {
    pattern: Regex,
    extract: fn(&Captures<'_>) -> Option<T>,
}

impl<T> Rule<T> {
    fn new(pattern: &str, extract: fn(&Captures<'_>) -> Option<T>) -> Self {
        Rule {
            pattern: Regex::new(pattern).expect("valid fitment rule regex"),
            extract,
        }
    }
}

/// Runs `rules` in order; the first pattern that matches anywhere in `text`
/// decides the outcome, even if its extractor then yields `None`.
fn first_match<T>(rules: &[Rule<T>], text: &str) -> Option<Option<T>> {
    rules.iter().find_map(|rule| {
        rule.pattern
            .captures(text)
            .map(|caps| (rule.extract)(&caps))
    })
}

/// Literal-word rules: the first pattern present wins.
fn first_keyword<T: Copy>(rules: &[(Regex, T)], text: &str) -> Option<T> {
    rules
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, value)| *value)
}

fn keyword(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid fitment keyword regex")
}

// ---------------------------------------------------------------------------
// Rule tables
//
// Word boundaries are ASCII-only (`(?-u:\b)`): a digit next to a non-ASCII
// letter, as in "ñ7k", still starts a word.
// ---------------------------------------------------------------------------

/// Capacity rules yield a pound value; the catalog lookup happens afterwards.
static CAPACITY_RULES: LazyLock<[Rule<u32>; 2]> = LazyLock::new(|| {
    [
        // "7K", "7k"
        Rule::new(r"(?i)(?-u:\b)([0-9]{1,2})k(?-u:\b)", |caps| {
            caps[1].parse::<u32>().ok().map(|k| k * 1000)
        }),
        // "7000", "7,000", "7.000", "7000 lb", "7000lbs"
        Rule::new(
            r"(?i)(?-u:\b)([0-9]{1,2})[,.]?([0-9]{3})\s*(?:lb|lbs)?(?-u:\b)",
            |caps| format!("{}{}", &caps[1], &caps[2]).parse::<u32>().ok(),
        ),
    ]
});

static AXLE_RULES: LazyLock<[(Regex, AxleType); 3]> = LazyLock::new(|| {
    [
        (
            keyword(r"(?i)(?-u:\b)triple(?-u:\b)|(?-u:\b)3[- ]?axle(?-u:\b)"),
            AxleType::Triple,
        ),
        (
            keyword(
                r"(?i)(?-u:\b)tandem(?-u:\b)|(?-u:\b)dual(?-u:\b)|(?-u:\b)2[- ]?axle(?-u:\b)",
            ),
            AxleType::Tandem,
        ),
        (
            keyword(r"(?i)(?-u:\b)single(?-u:\b)|(?-u:\b)1[- ]?axle(?-u:\b)"),
            AxleType::Single,
        ),
    ]
});

fn bolt_from_caps(caps: &Captures<'_>) -> Option<BoltPattern> {
    Some(BoltPattern::from_parts(&caps[1], &caps[2]))
}

static BOLT_PATTERN_RULES: LazyLock<[Rule<BoltPattern>; 3]> = LazyLock::new(|| {
    [
        // "5 on 4.5"
        Rule::new(r"(?i)(?-u:\b)([0-9])[- x]on[- ]([0-9]+\.?[0-9]*)", bolt_from_caps),
        // "5-4.5", "5x4.5", "5 4.5"
        Rule::new(r"(?i)(?-u:\b)([0-9])[- x]([0-9]+\.?[0-9]*)", bolt_from_caps),
        // "5-lug 4.5", "5lug 4.5"
        Rule::new(r"(?i)(?-u:\b)([0-9])[- ]?lug[- ]([0-9]+\.?[0-9]*)", bolt_from_caps),
    ]
});

static BRAKE_RULES: LazyLock<[(Regex, BrakeType); 3]> = LazyLock::new(|| {
    [
        (keyword(r"(?i)(?-u:\b)electric(?-u:\b)"), BrakeType::Electric),
        (
            keyword(r"(?i)(?-u:\b)hydraulic(?-u:\b)|(?-u:\b)hydro(?-u:\b)"),
            BrakeType::Hydraulic,
        ),
        (
            keyword(r"(?i)(?-u:\b)idler(?-u:\b)|(?-u:\b)no[- ]?brake"),
            BrakeType::Idler,
        ),
    ]
});

// ---------------------------------------------------------------------------
// Public parsers
// ---------------------------------------------------------------------------

/// Reads capacity, axle type, bolt pattern and brake type out of a product's
/// display name and SKU.
///
/// Pure and deterministic. A pattern that does not match leaves its field
/// `None`; nothing here fails.
#[must_use]
pub fn parse_fitment_from_product(name: &str, sku: &str) -> FitmentAttributes {
    let text = format!("{name} {sku}").to_lowercase();

    FitmentAttributes {
        capacity: parse_capacity(&text),
        axle_type: parse_axle_type(&text),
        bolt_pattern: parse_bolt_pattern(&text),
        brake_type: parse_brake_type(&text),
    }
}

/// K-notation (`"7K"`) is tried before the long form (`"7,000 lb"`). Only the
/// first pattern that matches is used; if its pound value is not an exact
/// catalog rating the result is `None`.
#[must_use]
pub fn parse_capacity(text: &str) -> Option<Capacity> {
    first_match(&*CAPACITY_RULES, text)
        .flatten()
        .and_then(Capacity::from_pounds)
}

/// Triple is checked before tandem, tandem before single.
#[must_use]
pub fn parse_axle_type(text: &str) -> Option<AxleType> {
    first_keyword(&*AXLE_RULES, text)
}

/// Returns the catalog pattern when the lug/diameter pair is listed and a
/// [`BoltPattern::Freeform`] otherwise.
#[must_use]
pub fn parse_bolt_pattern(text: &str) -> Option<BoltPattern> {
    first_match(&*BOLT_PATTERN_RULES, text).flatten()
}

/// Electric, then hydraulic, then idler.
#[must_use]
pub fn parse_brake_type(text: &str) -> Option<BrakeType> {
    first_keyword(&*BRAKE_RULES, text)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
