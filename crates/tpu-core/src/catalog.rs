//! Fixed option catalogs for the fitment selectors and the quick-path chip
//! shortcuts.
//!
//! These tables are the single source of truth for every enumerated fitment
//! value. Nothing mutates them at runtime.

use serde::Serialize;

use crate::CoreError;

/// One selectable value in a fitment catalog.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitmentOption {
    /// Internal id stored in selections and durable storage.
    pub id: &'static str,
    /// Human-facing label, also used as the facet value for bolt patterns
    /// and brake types.
    pub label: &'static str,
    pub value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_label: Option<&'static str>,
}

pub static CAPACITY_OPTIONS: &[FitmentOption] = &[
    FitmentOption {
        id: "3500",
        label: "3,500 lb (3.5K)",
        value: "3500",
        short_label: Some("3.5K"),
    },
    FitmentOption {
        id: "5200",
        label: "5,200 lb (5.2K)",
        value: "5200",
        short_label: Some("5.2K"),
    },
    FitmentOption {
        id: "6000",
        label: "6,000 lb (6K)",
        value: "6000",
        short_label: Some("6K"),
    },
    FitmentOption {
        id: "7000",
        label: "7,000 lb (7K)",
        value: "7000",
        short_label: Some("7K"),
    },
    FitmentOption {
        id: "8000",
        label: "8,000 lb (8K)",
        value: "8000",
        short_label: Some("8K"),
    },
    FitmentOption {
        id: "10000",
        label: "10,000 lb (10K)",
        value: "10000",
        short_label: Some("10K"),
    },
    FitmentOption {
        id: "12000",
        label: "12,000 lb (12K)",
        value: "12000",
        short_label: Some("12K"),
    },
];

pub static AXLE_OPTIONS: &[FitmentOption] = &[
    FitmentOption {
        id: "single",
        label: "Single Axle",
        value: "single",
        short_label: Some("1 Axle"),
    },
    FitmentOption {
        id: "tandem",
        label: "Tandem Axle",
        value: "tandem",
        short_label: Some("2 Axle"),
    },
    FitmentOption {
        id: "triple",
        label: "Triple Axle",
        value: "triple",
        short_label: Some("3 Axle"),
    },
];

pub static BOLT_PATTERN_OPTIONS: &[FitmentOption] = &[
    FitmentOption {
        id: "5-4.5",
        label: "5 on 4.5\"",
        value: "5-4.5",
        short_label: None,
    },
    FitmentOption {
        id: "5-4.75",
        label: "5 on 4.75\"",
        value: "5-4.75",
        short_label: None,
    },
    FitmentOption {
        id: "5-5",
        label: "5 on 5\"",
        value: "5-5",
        short_label: None,
    },
    FitmentOption {
        id: "6-5.5",
        label: "6 on 5.5\"",
        value: "6-5.5",
        short_label: None,
    },
    FitmentOption {
        id: "8-6.5",
        label: "8 on 6.5\"",
        value: "8-6.5",
        short_label: None,
    },
];

pub static BRAKE_TYPE_OPTIONS: &[FitmentOption] = &[
    FitmentOption {
        id: "electric",
        label: "Electric Brakes",
        value: "electric",
        short_label: None,
    },
    FitmentOption {
        id: "hydraulic",
        label: "Hydraulic Brakes",
        value: "hydraulic",
        short_label: None,
    },
    FitmentOption {
        id: "idler",
        label: "No Brakes (Idler)",
        value: "idler",
        short_label: None,
    },
];

/// Returns the catalog entry with the given `id`, if any.
#[must_use]
pub fn find_option(catalog: &'static [FitmentOption], id: &str) -> Option<&'static FitmentOption> {
    catalog.iter().find(|opt| opt.id == id)
}

/// Like [`find_option`], but reports a miss as an error naming the catalog.
///
/// # Errors
///
/// Returns [`CoreError::UnknownOption`] when `id` is not in `catalog`.
pub fn require_option(
    catalog_name: &'static str,
    catalog: &'static [FitmentOption],
    id: &str,
) -> Result<&'static FitmentOption, CoreError> {
    find_option(catalog, id).ok_or_else(|| CoreError::UnknownOption {
        catalog: catalog_name,
        id: id.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Quick-path chips
// ---------------------------------------------------------------------------

/// A pre-configured filter shortcut surfaced on category pages.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickPathChip {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<&'static str>,
    pub icon: &'static str,
    /// Facet parameter name → value, appended verbatim and in order.
    pub filter_params: &'static [(&'static str, &'static str)],
    /// Category-name substrings this chip is relevant for, or `"all"`.
    pub categories: &'static [&'static str],
}

pub static QUICK_PATH_CHIPS: &[QuickPathChip] = &[
    QuickPathChip {
        id: "most-popular",
        label: "Most Popular",
        sublabel: None,
        icon: "star",
        filter_params: &[("sort", "bestselling")],
        categories: &["all"],
    },
    QuickPathChip {
        id: "boat-trailer",
        label: "Boat Trailer",
        sublabel: Some("Corrosion-resistant"),
        icon: "anchor",
        filter_params: &[("Finish[]", "Galvanized")],
        categories: &["axles", "single-axle", "tandem-axle"],
    },
    QuickPathChip {
        id: "rv-electric",
        label: "RV Electric",
        sublabel: Some("Electric brake kits"),
        icon: "zap",
        filter_params: &[("Brake Type[]", "Electric")],
        categories: &["axles", "tandem-axle", "triple-axle"],
    },
    QuickPathChip {
        id: "idler-kits",
        label: "No Brakes",
        sublabel: Some("Idler kits"),
        icon: "circle-off",
        filter_params: &[("Brake Type[]", "Idler")],
        categories: &["axles", "single-axle"],
    },
    QuickPathChip {
        id: "heavy-duty-8lug",
        label: "8-Lug Heavy Duty",
        sublabel: Some("10K-12K capacity"),
        icon: "shield",
        filter_params: &[("Bolt Pattern[]", "8 on 6.5")],
        categories: &["axles", "tandem-axle", "triple-axle"],
    },
];

// ---------------------------------------------------------------------------
// Kit includes
// ---------------------------------------------------------------------------

/// A standard component shipped in an axle kit.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct KitInclude {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static KIT_INCLUDES: &[KitInclude] = &[
    KitInclude {
        id: "hubs",
        label: "Hubs",
        icon: "circle",
    },
    KitInclude {
        id: "drums",
        label: "Drums",
        icon: "disc",
    },
    KitInclude {
        id: "bearings",
        label: "Bearings",
        icon: "cog",
    },
    KitInclude {
        id: "seals",
        label: "Seals",
        icon: "ring",
    },
    KitInclude {
        id: "hardware",
        label: "Hardware",
        icon: "wrench",
    },
];
