//! Fitment value types: parsed product attributes, the shopper's selection,
//! and the three-level confidence state.

use std::borrow::Cow;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::catalog::{
    find_option, FitmentOption, AXLE_OPTIONS, BOLT_PATTERN_OPTIONS, BRAKE_TYPE_OPTIONS,
    CAPACITY_OPTIONS,
};
use crate::CoreError;

// ---------------------------------------------------------------------------
// Parsed attribute values
// ---------------------------------------------------------------------------

/// A load rating that exists in [`CAPACITY_OPTIONS`].
///
/// Only constructible through a catalog lookup, so an unlisted rating can
/// never be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity(&'static FitmentOption);

impl Capacity {
    /// Exact match on the catalog's numeric pound value.
    #[must_use]
    pub fn from_pounds(pounds: u32) -> Option<Self> {
        CAPACITY_OPTIONS
            .iter()
            .find(|opt| opt.value.parse::<u32>().ok() == Some(pounds))
            .map(Capacity)
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        find_option(CAPACITY_OPTIONS, id).map(Capacity)
    }

    #[must_use]
    pub fn option(self) -> &'static FitmentOption {
        self.0
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        self.0.id
    }

    /// Compact label such as `"7K"`.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        self.0.short_label.unwrap_or(self.0.label)
    }
}

impl Serialize for Capacity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.short_label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxleType {
    Single,
    Tandem,
    Triple,
}

impl AxleType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AxleType::Single => "Single",
            AxleType::Tandem => "Tandem",
            AxleType::Triple => "Triple",
        }
    }

    /// Selection id in [`AXLE_OPTIONS`].
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            AxleType::Single => "single",
            AxleType::Tandem => "tandem",
            AxleType::Triple => "triple",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "single" => Some(AxleType::Single),
            "tandem" => Some(AxleType::Tandem),
            "triple" => Some(AxleType::Triple),
            _ => None,
        }
    }

    #[must_use]
    pub fn option(self) -> Option<&'static FitmentOption> {
        find_option(AXLE_OPTIONS, self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrakeType {
    Electric,
    Hydraulic,
    Idler,
}

impl BrakeType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BrakeType::Electric => "Electric",
            BrakeType::Hydraulic => "Hydraulic",
            BrakeType::Idler => "Idler",
        }
    }

    /// Selection id in [`BRAKE_TYPE_OPTIONS`].
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            BrakeType::Electric => "electric",
            BrakeType::Hydraulic => "hydraulic",
            BrakeType::Idler => "idler",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "electric" => Some(BrakeType::Electric),
            "hydraulic" => Some(BrakeType::Hydraulic),
            "idler" => Some(BrakeType::Idler),
            _ => None,
        }
    }

    #[must_use]
    pub fn option(self) -> Option<&'static FitmentOption> {
        find_option(BRAKE_TYPE_OPTIONS, self.id())
    }
}

/// A hub bolt pattern: either a validated catalog entry or a best-guess
/// pattern read from free text that the catalog does not list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoltPattern {
    Known(&'static FitmentOption),
    Freeform { lugs: String, diameter: String },
}

impl BoltPattern {
    /// Resolves a lug count and bolt-circle diameter (both as written in the
    /// source text) against [`BOLT_PATTERN_OPTIONS`].
    #[must_use]
    pub fn from_parts(lugs: &str, diameter: &str) -> Self {
        let value = format!("{lugs}-{diameter}");
        match BOLT_PATTERN_OPTIONS.iter().find(|opt| opt.value == value) {
            Some(opt) => BoltPattern::Known(opt),
            None => BoltPattern::Freeform {
                lugs: lugs.to_string(),
                diameter: diameter.to_string(),
            },
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        find_option(BOLT_PATTERN_OPTIONS, id).map(BoltPattern::Known)
    }

    /// Display label, e.g. `5 on 4.5"`.
    #[must_use]
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            BoltPattern::Known(opt) => Cow::Borrowed(opt.label),
            BoltPattern::Freeform { lugs, diameter } => {
                Cow::Owned(format!("{lugs} on {diameter}\""))
            }
        }
    }

    /// Catalog id for known patterns.
    #[must_use]
    pub fn id(&self) -> Option<&'static str> {
        match self {
            BoltPattern::Known(opt) => Some(opt.id),
            BoltPattern::Freeform { .. } => None,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, BoltPattern::Known(_))
    }
}

impl Serialize for BoltPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BoltPattern::Known(opt) => {
                let mut s = serializer.serialize_struct("BoltPattern", 3)?;
                s.serialize_field("kind", "known")?;
                s.serialize_field("id", opt.id)?;
                s.serialize_field("label", opt.label)?;
                s.end()
            }
            BoltPattern::Freeform { .. } => {
                let mut s = serializer.serialize_struct("BoltPattern", 2)?;
                s.serialize_field("kind", "freeform")?;
                s.serialize_field("label", &self.label())?;
                s.end()
            }
        }
    }
}

/// Attributes read out of a product's name and SKU.
///
/// Every field is either a recognized value or `None`; only the bolt pattern
/// can carry a value the catalog does not list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FitmentAttributes {
    pub capacity: Option<Capacity>,
    pub axle_type: Option<AxleType>,
    pub bolt_pattern: Option<BoltPattern>,
    pub brake_type: Option<BrakeType>,
}

impl FitmentAttributes {
    /// `true` if at least one attribute was recognized.
    #[must_use]
    pub fn has_fitment_data(&self) -> bool {
        self.capacity.is_some()
            || self.axle_type.is_some()
            || self.bolt_pattern.is_some()
            || self.brake_type.is_some()
    }
}

impl Serialize for FitmentAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("FitmentAttributes", 5)?;
        s.serialize_field("capacity", &self.capacity)?;
        s.serialize_field("axleType", &self.axle_type)?;
        s.serialize_field("boltPattern", &self.bolt_pattern)?;
        s.serialize_field("brakeType", &self.brake_type)?;
        s.serialize_field("hasFitmentData", &self.has_fitment_data())?;
        s.end()
    }
}

// ---------------------------------------------------------------------------
// Shopper selection
// ---------------------------------------------------------------------------

/// One attribute category of a [`FitmentSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionField {
    Capacity,
    AxleConfig,
    BoltPattern,
    BrakeType,
}

impl SelectionField {
    /// All fields in facet-parameter order.
    pub const ALL: [SelectionField; 4] = [
        SelectionField::Capacity,
        SelectionField::AxleConfig,
        SelectionField::BoltPattern,
        SelectionField::BrakeType,
    ];

    /// Durable storage key holding the bare option id for this field.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            SelectionField::Capacity => "tpuCapacity",
            SelectionField::AxleConfig => "tpuAxleConfig",
            SelectionField::BoltPattern => "tpuBoltPattern",
            SelectionField::BrakeType => "tpuBrakeType",
        }
    }

    /// Catalog-filter facet parameter name.
    #[must_use]
    pub fn facet_name(self) -> &'static str {
        match self {
            SelectionField::Capacity => "Capacity[]",
            SelectionField::AxleConfig => "Axle Type[]",
            SelectionField::BoltPattern => "Bolt Pattern[]",
            SelectionField::BrakeType => "Brake Type[]",
        }
    }

    #[must_use]
    pub fn catalog(self) -> &'static [FitmentOption] {
        match self {
            SelectionField::Capacity => CAPACITY_OPTIONS,
            SelectionField::AxleConfig => AXLE_OPTIONS,
            SelectionField::BoltPattern => BOLT_PATTERN_OPTIONS,
            SelectionField::BrakeType => BRAKE_TYPE_OPTIONS,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SelectionField::Capacity => "capacity",
            SelectionField::AxleConfig => "axleConfig",
            SelectionField::BoltPattern => "boltPattern",
            SelectionField::BrakeType => "brakeType",
        }
    }
}

impl FromStr for SelectionField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "capacity" => Ok(SelectionField::Capacity),
            "axleConfig" | "axle-config" | "axle" => Ok(SelectionField::AxleConfig),
            "boltPattern" | "bolt-pattern" => Ok(SelectionField::BoltPattern),
            "brakeType" | "brake-type" | "brake" => Ok(SelectionField::BrakeType),
            other => Err(CoreError::UnknownField(other.to_string())),
        }
    }
}

/// The shopper's in-progress fitment choices, as catalog ids.
///
/// An empty string means "no choice" for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FitmentSelection {
    pub capacity: String,
    pub axle_config: String,
    pub bolt_pattern: String,
    pub brake_type: String,
}

impl FitmentSelection {
    #[must_use]
    pub fn get(&self, field: SelectionField) -> &str {
        match field {
            SelectionField::Capacity => &self.capacity,
            SelectionField::AxleConfig => &self.axle_config,
            SelectionField::BoltPattern => &self.bolt_pattern,
            SelectionField::BrakeType => &self.brake_type,
        }
    }

    pub fn set(&mut self, field: SelectionField, value: impl Into<String>) {
        let slot = match field {
            SelectionField::Capacity => &mut self.capacity,
            SelectionField::AxleConfig => &mut self.axle_config,
            SelectionField::BoltPattern => &mut self.bolt_pattern,
            SelectionField::BrakeType => &mut self.brake_type,
        };
        *slot = value.into();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        SelectionField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// A partial update to a saved selection. `None` leaves the stored value
/// untouched; `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitmentSelectionPatch {
    pub capacity: Option<String>,
    pub axle_config: Option<String>,
    pub bolt_pattern: Option<String>,
    pub brake_type: Option<String>,
}

impl FitmentSelectionPatch {
    #[must_use]
    pub fn with(mut self, field: SelectionField, value: impl Into<String>) -> Self {
        let slot = match field {
            SelectionField::Capacity => &mut self.capacity,
            SelectionField::AxleConfig => &mut self.axle_config,
            SelectionField::BoltPattern => &mut self.bolt_pattern,
            SelectionField::BrakeType => &mut self.brake_type,
        };
        *slot = Some(value.into());
        self
    }

    #[must_use]
    pub fn get(&self, field: SelectionField) -> Option<&str> {
        match field {
            SelectionField::Capacity => self.capacity.as_deref(),
            SelectionField::AxleConfig => self.axle_config.as_deref(),
            SelectionField::BoltPattern => self.bolt_pattern.as_deref(),
            SelectionField::BrakeType => self.brake_type.as_deref(),
        }
    }
}

impl From<FitmentSelection> for FitmentSelectionPatch {
    fn from(sel: FitmentSelection) -> Self {
        FitmentSelectionPatch {
            capacity: Some(sel.capacity),
            axle_config: Some(sel.axle_config),
            bolt_pattern: Some(sel.bolt_pattern),
            brake_type: Some(sel.brake_type),
        }
    }
}

// ---------------------------------------------------------------------------
// Confidence state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitmentState {
    Unverified,
    Partial,
    Verified,
}

impl FitmentState {
    /// 0 tags → unverified, 1–2 → partial, 3 or more → verified.
    #[must_use]
    pub fn from_tag_count(tag_count: usize) -> Self {
        match tag_count {
            0 => FitmentState::Unverified,
            1 | 2 => FitmentState::Partial,
            _ => FitmentState::Verified,
        }
    }

    /// Lenient parse: any unrecognized name is treated as unverified.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(FitmentState::Unverified)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FitmentState::Verified => "verified",
            FitmentState::Partial => "partial",
            FitmentState::Unverified => "unverified",
        }
    }
}

impl std::fmt::Display for FitmentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitmentState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verified" => Ok(FitmentState::Verified),
            "partial" => Ok(FitmentState::Partial),
            "unverified" => Ok(FitmentState::Unverified),
            other => Err(CoreError::UnknownState(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_from_pounds_requires_exact_catalog_value() {
        assert_eq!(Capacity::from_pounds(7000).map(Capacity::short_label), Some("7K"));
        assert_eq!(Capacity::from_pounds(3500).map(Capacity::short_label), Some("3.5K"));
        assert!(Capacity::from_pounds(7500).is_none());
        assert!(Capacity::from_pounds(2000).is_none());
    }

    #[test]
    fn capacity_serializes_as_short_label() {
        let cap = Capacity::from_id("10000").unwrap();
        assert_eq!(serde_json::to_value(cap).unwrap(), "10K");
    }

    #[test]
    fn axle_and_brake_ids_resolve_in_catalog() {
        for axle in [AxleType::Single, AxleType::Tandem, AxleType::Triple] {
            assert_eq!(axle.option().map(|o| o.id), Some(axle.id()));
            assert_eq!(AxleType::from_id(axle.id()), Some(axle));
        }
        for brake in [BrakeType::Electric, BrakeType::Hydraulic, BrakeType::Idler] {
            assert_eq!(brake.option().map(|o| o.id), Some(brake.id()));
            assert_eq!(BrakeType::from_id(brake.id()), Some(brake));
        }
    }

    #[test]
    fn bolt_pattern_known_uses_catalog_label() {
        let bp = BoltPattern::from_parts("5", "4.5");
        assert!(bp.is_known());
        assert_eq!(bp.id(), Some("5-4.5"));
        assert_eq!(bp.label(), "5 on 4.5\"");
    }

    #[test]
    fn bolt_pattern_unlisted_is_freeform() {
        let bp = BoltPattern::from_parts("4", "4");
        assert!(!bp.is_known());
        assert_eq!(bp.id(), None);
        assert_eq!(bp.label(), "4 on 4\"");
    }

    #[test]
    fn bolt_pattern_serializes_as_tagged_union() {
        let known = serde_json::to_value(BoltPattern::from_parts("8", "6.5")).unwrap();
        assert_eq!(known["kind"], "known");
        assert_eq!(known["id"], "8-6.5");
        let free = serde_json::to_value(BoltPattern::from_parts("6", "4.5")).unwrap();
        assert_eq!(free["kind"], "freeform");
        assert_eq!(free["label"], "6 on 4.5\"");
        assert!(free.get("id").is_none());
    }

    #[test]
    fn attributes_has_fitment_data() {
        let mut attrs = FitmentAttributes::default();
        assert!(!attrs.has_fitment_data());
        attrs.brake_type = Some(BrakeType::Idler);
        assert!(attrs.has_fitment_data());
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json["brakeType"], "Idler");
        assert_eq!(json["hasFitmentData"], true);
        assert!(json["capacity"].is_null());
    }

    #[test]
    fn selection_get_set_and_is_empty() {
        let mut sel = FitmentSelection::default();
        assert!(sel.is_empty());
        sel.set(SelectionField::AxleConfig, "tandem");
        assert_eq!(sel.get(SelectionField::AxleConfig), "tandem");
        assert!(!sel.is_empty());
    }

    #[test]
    fn selection_deserializes_camel_case_with_missing_fields() {
        let sel: FitmentSelection =
            serde_json::from_str(r#"{"axleConfig":"single","capacity":"7000"}"#).unwrap();
        assert_eq!(sel.axle_config, "single");
        assert_eq!(sel.capacity, "7000");
        assert_eq!(sel.bolt_pattern, "");
    }

    #[test]
    fn selection_field_parses_both_spellings() {
        assert_eq!(
            "bolt-pattern".parse::<SelectionField>().unwrap(),
            SelectionField::BoltPattern
        );
        assert_eq!(
            "axleConfig".parse::<SelectionField>().unwrap(),
            SelectionField::AxleConfig
        );
        assert!(matches!(
            "color".parse::<SelectionField>(),
            Err(CoreError::UnknownField(_))
        ));
    }

    #[test]
    fn patch_from_selection_sets_every_field() {
        let mut sel = FitmentSelection::default();
        sel.set(SelectionField::Capacity, "6000");
        let patch = FitmentSelectionPatch::from(sel);
        assert_eq!(patch.get(SelectionField::Capacity), Some("6000"));
        assert_eq!(patch.get(SelectionField::BrakeType), Some(""));
    }

    #[test]
    fn state_from_tag_count_thresholds() {
        assert_eq!(FitmentState::from_tag_count(0), FitmentState::Unverified);
        assert_eq!(FitmentState::from_tag_count(1), FitmentState::Partial);
        assert_eq!(FitmentState::from_tag_count(2), FitmentState::Partial);
        assert_eq!(FitmentState::from_tag_count(3), FitmentState::Verified);
    }

    #[test]
    fn state_from_name_falls_back_to_unverified() {
        assert_eq!(FitmentState::from_name("partial"), FitmentState::Partial);
        assert_eq!(FitmentState::from_name("bogus"), FitmentState::Unverified);
        assert!("bogus".parse::<FitmentState>().is_err());
    }

    #[test]
    fn state_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(FitmentState::Verified).unwrap(),
            "verified"
        );
    }
}
