//! Product-page helpers: add-on bundles, kit contents, lighting detection,
//! purchase options, stock badges, and shipping copy.

use std::collections::HashMap;

use serde::Serialize;
use tpu_core::{KitInclude, OptionValue, ProductOption, ProductRecord, KIT_INCLUDES};

/// An add-on product suggested alongside the one being viewed.
#[derive(Debug, PartialEq, Serialize)]
pub struct Addon {
    pub sku: &'static str,
    pub name: &'static str,
    pub price: f64,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct BundleCategory {
    pub keyword: &'static str,
    pub label: &'static str,
    pub addons: &'static [Addon],
}

const BRAKE_ADDONS: &[Addon] = &[
    Addon {
        sku: "BRAKE-HW-KIT",
        name: "Brake Hardware Kit",
        price: 24.99,
    },
    Addon {
        sku: "BREAKAWAY-KIT",
        name: "Breakaway Kit",
        price: 49.99,
    },
    Addon {
        sku: "BEARING-GREASE-14OZ",
        name: "Wheel Bearing Grease (14oz)",
        price: 12.99,
    },
];

const HUB_ADDONS: &[Addon] = &[
    Addon {
        sku: "SEAL-2PACK",
        name: "Grease Seals (2-pack)",
        price: 8.99,
    },
    Addon {
        sku: "BEARING-GREASE-14OZ",
        name: "Wheel Bearing Grease (14oz)",
        price: 12.99,
    },
    Addon {
        sku: "DUST-CAP-PAIR",
        name: "Dust Caps (pair)",
        price: 6.99,
    },
];

const WIRING_ADDONS: &[Addon] = &[
    Addon {
        sku: "HEAT-SHRINK-KIT",
        name: "Heat Shrink Connector Kit",
        price: 14.99,
    },
    Addon {
        sku: "JUNCTION-BOX",
        name: "Waterproof Junction Box",
        price: 18.99,
    },
    Addon {
        sku: "WIRE-CLIPS-25",
        name: "Wire Clips (25-pack)",
        price: 5.99,
    },
];

const AXLE_ADDONS: &[Addon] = &[
    Addon {
        sku: "BEARING-BUDDY-PAIR",
        name: "Bearing Buddies (pair)",
        price: 29.99,
    },
    Addon {
        sku: "WHEEL-CHOCK-PAIR",
        name: "Wheel Chocks (pair)",
        price: 19.99,
    },
    Addon {
        sku: "TIE-DOWN-4PACK",
        name: "Tie-Down Straps (4-pack)",
        price: 24.99,
    },
];

/// Keyword → add-ons, searched in this order. More specific keywords come
/// first so `"hub-drum"` is found before `"hub"`.
pub static BUNDLE_CATEGORIES: &[BundleCategory] = &[
    BundleCategory {
        keyword: "brake",
        label: "Brake Products",
        addons: BRAKE_ADDONS,
    },
    BundleCategory {
        keyword: "hub-drum",
        label: "Hub/Drum Products",
        addons: BRAKE_ADDONS,
    },
    BundleCategory {
        keyword: "hub",
        label: "Hub Products",
        addons: HUB_ADDONS,
    },
    BundleCategory {
        keyword: "bearing",
        label: "Bearing Products",
        addons: HUB_ADDONS,
    },
    BundleCategory {
        keyword: "light",
        label: "Lighting Products",
        addons: WIRING_ADDONS,
    },
    BundleCategory {
        keyword: "wiring",
        label: "Wiring Products",
        addons: WIRING_ADDONS,
    },
    BundleCategory {
        keyword: "axle",
        label: "Axle Products",
        addons: AXLE_ADDONS,
    },
    BundleCategory {
        keyword: "kit",
        label: "Trailer Kits",
        addons: AXLE_ADDONS,
    },
];

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleRecommendation {
    pub addons: &'static [Addon],
    /// Matched keyword, or `"default"` when nothing matched.
    pub category_matched: &'static str,
}

/// Lower-cased categories and title, joined for keyword search.
fn search_text(product: &ProductRecord) -> String {
    format!(
        "{} {}",
        product.category_names().join(" "),
        product.display_title()
    )
    .to_lowercase()
}

/// Picks add-ons from the first bundle keyword found in the product's
/// categories or title. Falls back to the axle add-ons.
#[must_use]
pub fn bundle_recommendations(product: &ProductRecord) -> BundleRecommendation {
    let text = search_text(product);

    match BUNDLE_CATEGORIES
        .iter()
        .find(|bundle| text.contains(bundle.keyword))
    {
        Some(bundle) => BundleRecommendation {
            addons: bundle.addons,
            category_matched: bundle.keyword,
        },
        None => BundleRecommendation {
            addons: AXLE_ADDONS,
            category_matched: "default",
        },
    }
}

#[must_use]
pub fn bundle_total(addons: &[Addon]) -> f64 {
    addons.iter().map(|addon| addon.price).sum()
}

#[must_use]
pub fn kit_includes() -> &'static [KitInclude] {
    KIT_INCLUDES
}

/// Items listed in the first custom field whose name mentions `include`,
/// `kit`, or `contents`. The value is split on commas and newlines.
#[must_use]
pub fn whats_included(product: &ProductRecord) -> Vec<String> {
    let field = product.custom_fields.iter().find(|field| {
        let name = field.name.as_deref().unwrap_or("").to_lowercase();
        name.contains("include") || name.contains("kit") || name.contains("contents")
    });

    field
        .and_then(|f| f.value.as_deref())
        .map(|value| {
            value
                .split([',', '\n'])
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

const LIGHTING_KEYWORDS: &[&str] = &["light", "lamp", "led", "marker", "tail", "clearance"];

/// Whether the product looks like a lighting part (used to show the DOT
/// compliance notice).
#[must_use]
pub fn is_lighting_product(product: &ProductRecord) -> bool {
    let text = search_text(product);
    LIGHTING_KEYWORDS.iter().any(|kw| text.contains(kw))
}

// ---------------------------------------------------------------------------
// Purchase options
// ---------------------------------------------------------------------------

/// Whether every required option has a non-empty value in `selections`,
/// keyed by option id. Products without options are always ready.
#[must_use]
pub fn are_required_options_selected(
    options: &[ProductOption],
    selections: &HashMap<String, String>,
) -> bool {
    options
        .iter()
        .filter(|option| option.is_required())
        .all(|option| {
            selections
                .get(option.id.as_deref().unwrap_or(""))
                .is_some_and(|value| !value.is_empty())
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionRenderType {
    Select,
    Swatch,
    Radio,
    Text,
}

/// Widget for an option, from keywords in its platform type (or its display
/// name when the type is missing). Defaults to a select box.
#[must_use]
pub fn option_render_type(option: &ProductOption) -> OptionRenderType {
    let kind = [option.kind.as_deref(), option.display_name.as_deref()]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or("")
        .to_lowercase();

    if kind.contains("swatch") || kind.contains("color") {
        OptionRenderType::Swatch
    } else if kind.contains("radio") || kind.contains("rectangle") {
        OptionRenderType::Radio
    } else if kind.contains("text") || kind.contains("input") {
        OptionRenderType::Text
    } else {
        OptionRenderType::Select
    }
}

/// Display text for an option value: plain text as-is, otherwise its
/// `label`, then its `data`. Anything else renders empty.
#[must_use]
pub fn format_option_value(value: Option<&OptionValue>) -> String {
    match value {
        Some(OptionValue::Text(text)) => text.clone(),
        Some(OptionValue::Entry { label, data }) => [label.as_deref(), data.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("")
            .to_string(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Stock and shipping
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockStatus {
    pub in_stock: bool,
    pub label: String,
    pub variant: &'static str,
    pub show_level: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
}

/// Quantity at or below which the badge shows "Only N left".
const LOW_STOCK_THRESHOLD: i64 = 5;

#[must_use]
pub fn stock_status(product: &ProductRecord) -> StockStatus {
    let in_stock_badge = || StockStatus {
        in_stock: true,
        label: "In Stock".to_string(),
        variant: "success",
        show_level: false,
        level: None,
    };

    if product.inventory_tracking.as_deref() == Some("none") {
        return in_stock_badge();
    }

    let level = product.stock_quantity();
    if product.in_stock == Some(false) || level == Some(0) {
        return StockStatus {
            in_stock: false,
            label: "Out of Stock".to_string(),
            variant: "destructive",
            show_level: false,
            level: None,
        };
    }

    match level {
        Some(n) if n <= LOW_STOCK_THRESHOLD => StockStatus {
            in_stock: true,
            label: format!("Only {n} left"),
            variant: "warning",
            show_level: true,
            level: Some(n),
        },
        _ => in_stock_badge(),
    }
}

const SHIPS_FAST: &str = "Ships fast from US/Canada stock";

/// Shipping badge copy. Never promises a delivery date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDisplay {
    pub free_shipping: bool,
    pub label: &'static str,
    pub sublabel: Option<&'static str>,
}

/// Free shipping when the platform quotes a zero price or flags the product
/// as free; the generic fast-shipping copy otherwise.
#[must_use]
pub fn shipping_display(product: &ProductRecord) -> ShippingDisplay {
    let shipping = product.shipping.as_ref();
    let zero_price = shipping
        .and_then(|s| s.price.as_ref())
        .and_then(|price| price.value)
        .is_some_and(|value| value.abs() < f64::EPSILON);
    let flagged_free = shipping.and_then(|s| s.free).unwrap_or(false);

    if zero_price || flagged_free {
        ShippingDisplay {
            free_shipping: true,
            label: "Free Shipping",
            sublabel: Some(SHIPS_FAST),
        }
    } else {
        ShippingDisplay {
            free_shipping: false,
            label: SHIPS_FAST,
            sublabel: None,
        }
    }
}
