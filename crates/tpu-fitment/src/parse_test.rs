use tpu_core::catalog::BOLT_PATTERN_OPTIONS;

use super::*;

fn capacity_label(text: &str) -> Option<&'static str> {
    parse_capacity(text).map(Capacity::short_label)
}

fn bolt_label(text: &str) -> Option<String> {
    parse_bolt_pattern(text).map(|bp| bp.label().into_owned())
}

// -----------------------------------------------------------------------
// parse_fitment_from_product
// -----------------------------------------------------------------------

#[test]
fn full_kit_title_parses_every_attribute() {
    let attrs = parse_fitment_from_product("7K Tandem Axle Kit 5-4.5 Electric Brakes", "TPU-7K-TAND");
    assert_eq!(attrs.capacity.map(Capacity::short_label), Some("7K"));
    assert_eq!(attrs.axle_type, Some(AxleType::Tandem));
    assert_eq!(
        attrs.bolt_pattern,
        Some(BoltPattern::Known(&BOLT_PATTERN_OPTIONS[0]))
    );
    assert_eq!(attrs.brake_type, Some(BrakeType::Electric));
    assert!(attrs.has_fitment_data());
}

#[test]
fn generic_title_has_no_fitment_data() {
    let attrs = parse_fitment_from_product("Generic Bearing Kit", "");
    assert_eq!(attrs, FitmentAttributes::default());
    assert!(!attrs.has_fitment_data());
}

#[test]
fn empty_inputs_yield_no_data() {
    assert!(!parse_fitment_from_product("", "").has_fitment_data());
}

#[test]
fn sku_contributes_to_parsing() {
    let attrs = parse_fitment_from_product("Axle Kit", "AK-10K-IDLER");
    assert_eq!(attrs.capacity.map(Capacity::short_label), Some("10K"));
    assert_eq!(attrs.brake_type, Some(BrakeType::Idler));
}

#[test]
fn parsing_is_case_insensitive() {
    let upper = parse_fitment_from_product("8K TRIPLE AXLE 8 ON 6.5 HYDRAULIC", "");
    let lower = parse_fitment_from_product("8k triple axle 8 on 6.5 hydraulic", "");
    assert_eq!(upper, lower);
    assert_eq!(upper.axle_type, Some(AxleType::Triple));
    assert_eq!(upper.brake_type, Some(BrakeType::Hydraulic));
}

// -----------------------------------------------------------------------
// parse_capacity
// -----------------------------------------------------------------------

#[test]
fn capacity_k_notation() {
    assert_eq!(capacity_label("7k axle"), Some("7K"));
    assert_eq!(capacity_label("12K"), Some("12K"));
}

#[test]
fn capacity_plain_pounds() {
    assert_eq!(capacity_label("7000"), Some("7K"));
    assert_eq!(capacity_label("3500 axle"), Some("3.5K"));
    assert_eq!(capacity_label("5200 lb"), Some("5.2K"));
}

#[test]
fn capacity_comma_and_unit_forms() {
    assert_eq!(capacity_label("7,000 lb"), Some("7K"));
    assert_eq!(capacity_label("10,000 lbs"), Some("10K"));
    assert_eq!(capacity_label("6000lbs"), Some("6K"));
}

#[test]
fn capacity_unlisted_rating_is_none() {
    assert_eq!(capacity_label("7500 lb"), None);
    assert_eq!(capacity_label("2k"), None);
}

#[test]
fn capacity_first_matching_pattern_decides() {
    // K-notation matches first; 2000 lb is not a catalog rating, and the
    // later 7000 lb is never consulted.
    assert_eq!(capacity_label("2k hub fits 7000 lb axle"), None);
}

#[test]
fn capacity_three_digit_k_is_ignored() {
    assert_eq!(capacity_label("100k"), None);
}

#[test]
fn capacity_absent() {
    assert_eq!(capacity_label("bearing kit"), None);
}

// -----------------------------------------------------------------------
// parse_axle_type
// -----------------------------------------------------------------------

#[test]
fn axle_words() {
    assert_eq!(parse_axle_type("single axle"), Some(AxleType::Single));
    assert_eq!(parse_axle_type("tandem kit"), Some(AxleType::Tandem));
    assert_eq!(parse_axle_type("dual axle"), Some(AxleType::Tandem));
    assert_eq!(parse_axle_type("triple axle"), Some(AxleType::Triple));
}

#[test]
fn axle_numeric_forms() {
    assert_eq!(parse_axle_type("3-axle"), Some(AxleType::Triple));
    assert_eq!(parse_axle_type("2 axle"), Some(AxleType::Tandem));
    assert_eq!(parse_axle_type("1axle"), Some(AxleType::Single));
}

#[test]
fn axle_priority_highest_count_wins() {
    assert_eq!(parse_axle_type("single or tandem"), Some(AxleType::Tandem));
    assert_eq!(parse_axle_type("single tandem triple"), Some(AxleType::Triple));
}

#[test]
fn axle_requires_whole_word() {
    assert_eq!(parse_axle_type("singles"), None);
    assert_eq!(parse_axle_type("dualist"), None);
}

// -----------------------------------------------------------------------
// parse_bolt_pattern
// -----------------------------------------------------------------------

#[test]
fn bolt_on_form() {
    assert_eq!(bolt_label("6 on 5.5 hub"), Some("6 on 5.5\"".to_owned()));
}

#[test]
fn bolt_dash_and_x_forms() {
    assert_eq!(bolt_label("5-4.75"), Some("5 on 4.75\"".to_owned()));
    assert_eq!(bolt_label("5x5 hub"), Some("5 on 5\"".to_owned()));
}

#[test]
fn bolt_lug_form() {
    assert_eq!(bolt_label("8-lug 6.5"), Some("8 on 6.5\"".to_owned()));
    assert_eq!(bolt_label("5lug 4.5"), Some("5 on 4.5\"".to_owned()));
}

#[test]
fn bolt_unlisted_pattern_is_freeform() {
    let bp = parse_bolt_pattern("4 on 4 hub").unwrap();
    assert!(!bp.is_known());
    assert_eq!(bp.label(), "4 on 4\"");
}

#[test]
fn bolt_known_pattern_carries_catalog_id() {
    let bp = parse_bolt_pattern("8 on 6.5").unwrap();
    assert_eq!(bp.id(), Some("8-6.5"));
}

#[test]
fn bolt_absent() {
    assert_eq!(bolt_label("7000 lb axle"), None);
}

// -----------------------------------------------------------------------
// parse_brake_type
// -----------------------------------------------------------------------

#[test]
fn brake_words() {
    assert_eq!(parse_brake_type("electric brakes"), Some(BrakeType::Electric));
    assert_eq!(parse_brake_type("hydraulic"), Some(BrakeType::Hydraulic));
    assert_eq!(parse_brake_type("hydro kit"), Some(BrakeType::Hydraulic));
    assert_eq!(parse_brake_type("idler axle"), Some(BrakeType::Idler));
}

#[test]
fn brake_no_brake_forms() {
    assert_eq!(parse_brake_type("no brakes"), Some(BrakeType::Idler));
    assert_eq!(parse_brake_type("no-brake hub"), Some(BrakeType::Idler));
    assert_eq!(parse_brake_type("nobrake"), Some(BrakeType::Idler));
}

#[test]
fn brake_priority_electric_first() {
    assert_eq!(
        parse_brake_type("electric over hydraulic"),
        Some(BrakeType::Electric)
    );
}

#[test]
fn brake_requires_whole_word() {
    assert_eq!(parse_brake_type("electrical connector"), None);
}

// -----------------------------------------------------------------------
// word boundaries
// -----------------------------------------------------------------------

#[test]
fn boundaries_treat_non_ascii_letters_as_separators() {
    assert_eq!(capacity_label("ñ7k"), Some("7K"));
    assert_eq!(parse_brake_type("éelectric"), Some(BrakeType::Electric));
    assert_eq!(parse_axle_type("ütandem"), Some(AxleType::Tandem));
    assert_eq!(
        parse_fitment_from_product("Eje ñ7K Tándem", "")
            .capacity
            .map(|c| c.short_label()),
        Some("7K")
    );
}
