//! Catalog-filter URL building.
//!
//! Selections hold internal option ids; the storefront's faceted search
//! expects public facet names with a `[]` suffix and display values. Query
//! strings use `application/x-www-form-urlencoded` encoding (spaces as `+`).

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tpu_core::{find_option, FitmentOption, FitmentSelection, ProductRecord, QuickPathChip, SelectionField};

/// Bytes left unescaped by form encoding: ASCII alphanumerics and `*-._`.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

fn form_encode(raw: &str) -> String {
    raw.split(' ')
        .map(|part| utf8_percent_encode(part, FORM_VALUE).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

fn form_decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Ordered `name=value` pairs serialized as a form-encoded query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| format!("{}={}", form_encode(name), form_encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `base?query`, or `base` unchanged when there are no parameters.
    #[must_use]
    pub fn apply_to(&self, base_url: &str) -> String {
        if self.is_empty() {
            base_url.to_string()
        } else {
            format!("{base_url}?{}", self.to_query_string())
        }
    }

    /// Decodes a query string (leading `?` optional). Pairs without `=` get
    /// an empty value; empty segments are skipped.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
                (form_decode(name), form_decode(value))
            })
            .collect();
        QueryParams { pairs }
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The facet value a catalog option contributes for `field`.
fn facet_value(field: SelectionField, selected_id: &str, option: &FitmentOption) -> String {
    match field {
        SelectionField::Capacity => format!("{} lb", option.value),
        SelectionField::AxleConfig => capitalize_first(selected_id),
        SelectionField::BoltPattern | SelectionField::BrakeType => option.label.to_string(),
    }
}

/// Facet parameters for a selection, in the fixed order Capacity, Axle Type,
/// Bolt Pattern, Brake Type.
///
/// Empty fields are skipped. An id with no catalog entry is skipped too.
#[must_use]
pub fn selection_params(selection: &FitmentSelection) -> QueryParams {
    let mut params = QueryParams::new();

    for field in SelectionField::ALL {
        let id = selection.get(field);
        if id.is_empty() {
            continue;
        }
        let Some(option) = find_option(field.catalog(), id) else {
            tracing::warn!(field = field.name(), id, "selection id not in catalog; omitting facet");
            continue;
        };
        params.append(field.facet_name(), facet_value(field, id, option));
    }

    params
}

/// Builds the catalog-filter URL for a fitment selection.
///
/// Returns `base_url` unchanged when nothing is selected.
#[must_use]
pub fn build_filter_url(selection: &FitmentSelection, base_url: &str) -> String {
    selection_params(selection).apply_to(base_url)
}

/// Builds the URL for a quick-path chip. Its parameters are appended
/// verbatim in declaration order.
#[must_use]
pub fn build_quick_path_url(chip: &QuickPathChip, base_url: &str) -> String {
    let mut params = QueryParams::new();
    for (name, value) in chip.filter_params {
        params.append(*name, *value);
    }
    params.apply_to(base_url)
}

/// Filter URL for the "show matching kits" action.
#[must_use]
pub fn build_matching_kits_url(selection: &FitmentSelection, kits_path: &str) -> String {
    build_filter_url(selection, kits_path)
}

/// Contact-page URL prefilled with the product and a fitment subject line.
#[must_use]
pub fn build_contact_url(product: &ProductRecord, contact_path: &str) -> String {
    let mut params = QueryParams::new();
    params.append("product", product.display_title());
    params.append("sku", product.sku());
    params.append("subject", "Fitment question");
    params.apply_to(contact_path)
}

/// Current filters from a query string, grouped by parameter name in
/// first-seen order. Repeated names collect every value.
#[must_use]
pub fn parse_current_filters(query: &str) -> Vec<(String, Vec<String>)> {
    let mut filters: Vec<(String, Vec<String>)> = Vec::new();
    for (name, value) in QueryParams::parse(query).pairs {
        match filters.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, values)) => values.push(value),
            None => filters.push((name, vec![value])),
        }
    }
    filters
}

#[must_use]
pub fn has_active_filters(query: &str) -> bool {
    !QueryParams::parse(query).is_empty()
}

/// The URL with its query string (and fragment) removed.
#[must_use]
pub fn clear_filters_url(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

#[cfg(test)]
mod tests {
    use tpu_core::QUICK_PATH_CHIPS;

    use super::*;

    fn selection(capacity: &str, axle: &str, bolt: &str, brake: &str) -> FitmentSelection {
        FitmentSelection {
            capacity: capacity.to_string(),
            axle_config: axle.to_string(),
            bolt_pattern: bolt.to_string(),
            brake_type: brake.to_string(),
        }
    }

    #[test]
    fn capacity_and_axle_exact_encoding() {
        let url = build_filter_url(&selection("7000", "tandem", "", ""), "/kits/");
        assert_eq!(url, "/kits/?Capacity%5B%5D=7000+lb&Axle+Type%5B%5D=Tandem");
    }

    #[test]
    fn empty_selection_returns_base_unchanged() {
        assert_eq!(
            build_filter_url(&FitmentSelection::default(), "/kits/"),
            "/kits/"
        );
    }

    #[test]
    fn params_follow_field_order() {
        let params = selection_params(&selection("12000", "triple", "8-6.5", "hydraulic"));
        let names: Vec<_> = params.pairs().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            ["Capacity[]", "Axle Type[]", "Bolt Pattern[]", "Brake Type[]"]
        );
        let values: Vec<_> = params.pairs().iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(
            values,
            ["12000 lb", "Triple", "8 on 6.5\"", "Hydraulic Brakes"]
        );
    }

    #[test]
    fn bolt_pattern_label_is_encoded() {
        let url = build_filter_url(&selection("", "", "5-4.5", ""), "/c/");
        assert_eq!(url, "/c/?Bolt+Pattern%5B%5D=5+on+4.5%22");
    }

    #[test]
    fn brake_label_with_parentheses_is_encoded() {
        let url = build_filter_url(&selection("", "", "", "idler"), "/c/");
        assert_eq!(url, "/c/?Brake+Type%5B%5D=No+Brakes+%28Idler%29");
    }

    #[test]
    fn unknown_ids_are_omitted() {
        let url = build_filter_url(&selection("9000", "quad", "4-4", "air"), "/kits/");
        assert_eq!(url, "/kits/");
        let url = build_filter_url(&selection("9000", "single", "", ""), "/kits/");
        assert_eq!(url, "/kits/?Axle+Type%5B%5D=Single");
    }

    #[test]
    fn quick_path_params_are_verbatim() {
        let chip = QUICK_PATH_CHIPS
            .iter()
            .find(|c| c.id == "heavy-duty-8lug")
            .unwrap();
        assert_eq!(
            build_quick_path_url(chip, "/axles/"),
            "/axles/?Bolt+Pattern%5B%5D=8+on+6.5"
        );
        let popular = &QUICK_PATH_CHIPS[0];
        assert_eq!(build_quick_path_url(popular, "/"), "/?sort=bestselling");
    }

    #[test]
    fn quick_path_without_params_returns_base() {
        let chip = QuickPathChip {
            id: "none",
            label: "None",
            sublabel: None,
            icon: "x",
            filter_params: &[],
            categories: &["all"],
        };
        assert_eq!(build_quick_path_url(&chip, "/axles/"), "/axles/");
    }

    #[test]
    fn matching_kits_url_uses_kits_path() {
        let url = build_matching_kits_url(&selection("", "single", "", ""), "/trailer-axle-kits/");
        assert_eq!(url, "/trailer-axle-kits/?Axle+Type%5B%5D=Single");
    }

    #[test]
    fn contact_url_prefills_product() {
        let product = ProductRecord {
            title: Some("7K Axle & Hub".to_string()),
            sku: Some("AX-7K".to_string()),
            ..ProductRecord::default()
        };
        assert_eq!(
            build_contact_url(&product, "/contact-us/"),
            "/contact-us/?product=7K+Axle+%26+Hub&sku=AX-7K&subject=Fitment+question"
        );
    }

    #[test]
    fn parse_current_filters_groups_repeated_names() {
        let filters =
            parse_current_filters("?Capacity%5B%5D=7000+lb&sort=new&Capacity%5B%5D=8000+lb");
        assert_eq!(
            filters,
            vec![
                (
                    "Capacity[]".to_string(),
                    vec!["7000 lb".to_string(), "8000 lb".to_string()]
                ),
                ("sort".to_string(), vec!["new".to_string()]),
            ]
        );
    }

    #[test]
    fn parse_handles_bare_names_and_empty_segments() {
        let params = QueryParams::parse("a&&b=1");
        assert_eq!(
            params.pairs(),
            [
                ("a".to_string(), String::new()),
                ("b".to_string(), "1".to_string())
            ]
        );
    }

    #[test]
    fn active_filters_detection() {
        assert!(!has_active_filters(""));
        assert!(!has_active_filters("?"));
        assert!(has_active_filters("?sort=bestselling"));
    }

    #[test]
    fn clear_filters_drops_query_and_fragment() {
        assert_eq!(clear_filters_url("/kits/?a=1#top"), "/kits/");
        assert_eq!(clear_filters_url("/kits/"), "/kits/");
    }

    #[test]
    fn query_round_trips_through_parse() {
        let params = selection_params(&selection("3500", "single", "5-4.75", "electric"));
        assert_eq!(QueryParams::parse(&params.to_query_string()), params);
    }
}
