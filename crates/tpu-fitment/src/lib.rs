//! Trailer-part fitment matching: attribute parsing, confidence
//! classification, saved selections, and catalog-filter URLs.

pub mod classify;
pub mod error;
pub mod filter_url;
pub mod parse;
pub mod product_page;
pub mod quick_path;
pub mod store;

pub use classify::{
    determine_fitment_state, extract_fitment_from_custom_fields, fitment_state_config,
    fitment_state_config_by_name, FitmentAssessment, FitmentStateConfig, FitmentTags,
};
pub use error::StoreError;
pub use filter_url::{
    build_contact_url, build_filter_url, build_matching_kits_url, build_quick_path_url,
    clear_filters_url, has_active_filters, parse_current_filters, selection_params, QueryParams,
};
pub use parse::parse_fitment_from_product;
pub use product_page::{
    are_required_options_selected, bundle_recommendations, bundle_total, format_option_value,
    is_lighting_product, kit_includes, option_render_type, shipping_display, stock_status,
    whats_included, BundleRecommendation, OptionRenderType, ShippingDisplay, StockStatus,
};
pub use quick_path::{is_chip_relevant_for_category, relevant_chips};
pub use store::{FileStorage, FitmentStore, MemoryStorage, SelectionStorage};
