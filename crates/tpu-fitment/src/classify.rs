//! Fitment confidence classification for a single product.
//!
//! Two sources feed the display tags: merchant-entered custom fields and the
//! attributes parsed from the title/SKU. Custom fields win per category; see
//! [`FitmentTags::merge`].

use serde::Serialize;
use tpu_core::{FitmentAttributes, FitmentState, ProductRecord};

use crate::parse::parse_fitment_from_product;

/// Display tags for the three counted categories. Axle type is deliberately
/// absent: it is parsed but never counted toward confidence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitmentTags {
    pub capacity: Option<String>,
    pub bolt_pattern: Option<String>,
    pub brake_type: Option<String>,
}

impl FitmentTags {
    /// Per-category merge: each field takes `primary` when set, else
    /// `fallback`, else `None`.
    #[must_use]
    pub fn merge(primary: FitmentTags, fallback: FitmentTags) -> FitmentTags {
        FitmentTags {
            capacity: primary.capacity.or(fallback.capacity),
            bolt_pattern: primary.bolt_pattern.or(fallback.bolt_pattern),
            brake_type: primary.brake_type.or(fallback.brake_type),
        }
    }

    /// Number of populated categories, always in `0..=3`.
    #[must_use]
    pub fn count(&self) -> usize {
        [&self.capacity, &self.bolt_pattern, &self.brake_type]
            .into_iter()
            .filter(|tag| tag.is_some())
            .count()
    }
}

impl From<&FitmentAttributes> for FitmentTags {
    fn from(attrs: &FitmentAttributes) -> Self {
        FitmentTags {
            capacity: attrs.capacity.map(|c| c.short_label().to_string()),
            bolt_pattern: attrs.bolt_pattern.as_ref().map(|bp| bp.label().into_owned()),
            brake_type: attrs.brake_type.map(|b| b.label().to_string()),
        }
    }
}

/// Result of classifying one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitmentAssessment {
    pub state: FitmentState,
    pub tags: FitmentTags,
    pub tag_count: usize,
}

/// Reads fitment tags from the product's custom fields.
///
/// A field whose lower-cased name contains `capacity` feeds the capacity
/// tag; one containing both `bolt` and `pattern` feeds the bolt pattern;
/// one containing both `brake` and `type` feeds the brake type. A field is
/// assigned to at most one category, checked in that order. The first
/// non-empty match per category wins.
#[must_use]
pub fn extract_fitment_from_custom_fields(product: &ProductRecord) -> FitmentTags {
    let mut tags = FitmentTags::default();

    for field in product.custom_fields.iter() {
        let name = field.name.as_deref().unwrap_or("").to_lowercase();
        let Some(value) = field.value.as_deref().filter(|v| !v.is_empty()) else {
            continue;
        };

        let slot = if name.contains("capacity") {
            &mut tags.capacity
        } else if name.contains("bolt") && name.contains("pattern") {
            &mut tags.bolt_pattern
        } else if name.contains("brake") && name.contains("type") {
            &mut tags.brake_type
        } else {
            continue;
        };

        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    tags
}

/// Classifies a product as verified, partial, or unverified fitment.
///
/// Never fails: a product with no usable data is simply unverified.
#[must_use]
pub fn determine_fitment_state(product: &ProductRecord) -> FitmentAssessment {
    let custom = extract_fitment_from_custom_fields(product);
    let parsed = parse_fitment_from_product(product.display_title(), product.sku());

    let tags = FitmentTags::merge(custom, FitmentTags::from(&parsed));
    let tag_count = tags.count();
    let state = FitmentState::from_tag_count(tag_count);

    tracing::debug!(
        title = product.display_title(),
        tag_count,
        state = %state,
        "classified product fitment"
    );

    FitmentAssessment {
        state,
        tags,
        tag_count,
    }
}

// ---------------------------------------------------------------------------
// Display configuration
// ---------------------------------------------------------------------------

/// Copy and styling for the fitment badge of one state.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitmentStateConfig {
    pub title: &'static str,
    pub variant: &'static str,
    pub icon: &'static str,
    pub cta_text: &'static str,
    pub description: &'static str,
}

static VERIFIED_CONFIG: FitmentStateConfig = FitmentStateConfig {
    title: "Fitment: Verified",
    variant: "success",
    icon: "check-circle",
    cta_text: "Double-check fitment",
    description: "This product fits your trailer specs",
};

static PARTIAL_CONFIG: FitmentStateConfig = FitmentStateConfig {
    title: "Fitment: Likely",
    variant: "warning",
    icon: "alert-circle",
    cta_text: "Confirm in 60 seconds",
    description: "Some specs match - confirm before ordering",
};

static UNVERIFIED_CONFIG: FitmentStateConfig = FitmentStateConfig {
    title: "Fitment: Confirm before ordering",
    variant: "default",
    icon: "help-circle",
    cta_text: "Confirm fitment",
    description: "Verify this fits your trailer",
};

#[must_use]
pub fn fitment_state_config(state: FitmentState) -> &'static FitmentStateConfig {
    match state {
        FitmentState::Verified => &VERIFIED_CONFIG,
        FitmentState::Partial => &PARTIAL_CONFIG,
        FitmentState::Unverified => &UNVERIFIED_CONFIG,
    }
}

/// Looks up the display configuration by state name. Unknown names get the
/// unverified configuration.
#[must_use]
pub fn fitment_state_config_by_name(name: &str) -> &'static FitmentStateConfig {
    fitment_state_config(FitmentState::from_name(name))
}
