//! Which quick-path chips to show on a category page.

use tpu_core::{QuickPathChip, QUICK_PATH_CHIPS};

const ALL_CATEGORIES: &str = "all";

/// Lower-cases `category_name` and turns each whitespace run into a hyphen,
/// e.g. `"Single Axle Kits"` → `"single-axle-kits"`.
#[must_use]
pub fn normalize_category_name(category_name: &str) -> String {
    let mut normalized = String::with_capacity(category_name.len());
    let mut in_space = false;
    for c in category_name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                normalized.push('-');
            }
            in_space = true;
        } else {
            normalized.push(c);
            in_space = false;
        }
    }
    normalized
}

/// Whether `chip` applies to the category named `category_name`.
///
/// With no category, only chips tagged `"all"` apply. Otherwise a chip
/// applies if it is tagged `"all"` or if the normalized category name
/// contains any of its category tokens as a substring.
#[must_use]
pub fn is_chip_relevant_for_category(chip: &QuickPathChip, category_name: Option<&str>) -> bool {
    let Some(category_name) = category_name.filter(|c| !c.is_empty()) else {
        return chip.categories.contains(&ALL_CATEGORIES);
    };

    let normalized = normalize_category_name(category_name);
    chip.categories
        .iter()
        .any(|token| *token == ALL_CATEGORIES || normalized.contains(token))
}

/// The built-in chips relevant to `category_name`, in catalog order.
#[must_use]
pub fn relevant_chips(category_name: Option<&str>) -> Vec<&'static QuickPathChip> {
    QUICK_PATH_CHIPS
        .iter()
        .filter(|chip| is_chip_relevant_for_category(chip, category_name))
        .collect()
}
