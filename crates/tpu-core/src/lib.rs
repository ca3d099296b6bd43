pub mod app_config;
pub mod catalog;
pub mod config;
pub mod fitment;
pub mod product;

pub use app_config::{AppConfig, Environment};
pub use catalog::{
    find_option, require_option, FitmentOption, KitInclude, QuickPathChip, AXLE_OPTIONS,
    BOLT_PATTERN_OPTIONS, BRAKE_TYPE_OPTIONS, CAPACITY_OPTIONS, KIT_INCLUDES, QUICK_PATH_CHIPS,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use fitment::{
    AxleType, BoltPattern, BrakeType, Capacity, FitmentAttributes, FitmentSelection,
    FitmentSelectionPatch, FitmentState, SelectionField,
};
pub use product::{
    CustomField, CustomFields, OptionValue, ProductOption, ProductRecord, ShippingInfo,
    ShippingPrice,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown {catalog} option: {id:?}")]
    UnknownOption { catalog: &'static str, id: String },

    #[error("unknown fitment state: {0:?}")]
    UnknownState(String),

    #[error("unknown selection field: {0:?}")]
    UnknownField(String),
}
