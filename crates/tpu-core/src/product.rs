use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A product record as the storefront platform hands it to page scripts.
///
/// Treated as read-only input. Every field is optional and deserializes
/// leniently, so malformed or partial records still load and degrade to
/// "no data" field by field instead of failing as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    /// Older templates expose the display name as `name` instead of `title`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub sku: Option<String>,
    #[serde(default)]
    pub custom_fields: CustomFields,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub category: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub categories: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub stock_level: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub inventory_level: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub in_stock: Option<bool>,
    /// `"none"` when the platform does not track inventory for this product.
    #[serde(default, deserialize_with = "lenient_text")]
    pub inventory_tracking: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub shipping: Option<ShippingInfo>,
    /// Purchase options (size, color, ...). Entries that are not objects are
    /// skipped.
    #[serde(default, deserialize_with = "lenient_list")]
    pub options: Vec<ProductOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<ShippingPrice>,
    #[serde(default, deserialize_with = "lenient")]
    pub free: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingPrice {
    #[serde(default, deserialize_with = "lenient")]
    pub value: Option<f64>,
}

/// One purchase option as the platform describes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub display_name: Option<String>,
    /// Platform widget type, e.g. `"swatch"` or `"rectangles"`.
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub required: Option<bool>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub values: Vec<OptionValue>,
}

impl ProductOption {
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}

/// An option value: either plain text or a `{label, data}` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    Entry {
        #[serde(default, deserialize_with = "lenient_text")]
        label: Option<String>,
        #[serde(default, deserialize_with = "lenient_text")]
        data: Option<String>,
    },
}

impl ProductRecord {
    /// `title`, falling back to `name`, falling back to `""`.
    #[must_use]
    pub fn display_title(&self) -> &str {
        [self.title.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }

    #[must_use]
    pub fn sku(&self) -> &str {
        self.sku.as_deref().unwrap_or("")
    }

    /// `category`, falling back to `categories`.
    #[must_use]
    pub fn category_names(&self) -> &[String] {
        self.category
            .as_deref()
            .or(self.categories.as_deref())
            .unwrap_or(&[])
    }

    /// `stock_level` when it is non-zero, otherwise `inventory_level`.
    ///
    /// A zero `stock_level` alone is treated as unknown, not as sold out.
    #[must_use]
    pub fn stock_quantity(&self) -> Option<i64> {
        match self.stock_level {
            Some(level) if level != 0 => Some(level),
            _ => self.inventory_level,
        }
    }
}

/// One platform custom field. Values are kept as text even when the
/// platform sends a number or boolean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub value: Option<String>,
}

impl CustomField {
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        CustomField {
            name: Some(name.to_string()),
            value: Some(value.to_string()),
        }
    }
}

/// Custom fields in the order the platform listed them.
///
/// The platform sends either an array of `{name, value}` objects or an
/// object keyed by field id; both deserialize to the same ordered list.
/// Entries that are not objects are skipped, and a bare scalar reads as no
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CustomFields(pub Vec<CustomField>);

impl CustomFields {
    pub fn iter(&self) -> std::slice::Iter<'_, CustomField> {
        self.0.iter()
    }
}

impl From<Vec<CustomField>> for CustomFields {
    fn from(fields: Vec<CustomField>) -> Self {
        CustomFields(fields)
    }
}

impl<'de> Deserialize<'de> for CustomFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CustomFieldsVisitor)
    }
}

struct CustomFieldsVisitor;

impl<'de> Visitor<'de> for CustomFieldsVisitor {
    type Value = CustomFields;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list or map of custom fields")
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(CustomFields::default())
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(CustomFields::default())
    }

    fn visit_str<E: serde::de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(CustomFields::default())
    }

    fn visit_bool<E: serde::de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(CustomFields::default())
    }

    fn visit_i64<E: serde::de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(CustomFields::default())
    }

    fn visit_u64<E: serde::de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(CustomFields::default())
    }

    fn visit_f64<E: serde::de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(CustomFields::default())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut fields = Vec::new();
        while let Some(entry) = seq.next_element::<serde_json::Value>()? {
            if let Some(field) = field_from_value(entry) {
                fields.push(field);
            }
        }
        Ok(CustomFields(fields))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut fields = Vec::new();
        while let Some((_key, entry)) = map.next_entry::<String, serde_json::Value>()? {
            if let Some(field) = field_from_value(entry) {
                fields.push(field);
            }
        }
        Ok(CustomFields(fields))
    }
}

fn field_from_value(value: serde_json::Value) -> Option<CustomField> {
    if value.is_object() {
        serde_json::from_value(value).ok()
    } else {
        None
    }
}

fn scalar_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Strings, numbers and booleans as text; anything else as `None`.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(scalar_text))
}

/// A list of texts. A bare scalar becomes a one-element list; non-scalar
/// list entries are dropped.
fn lenient_text_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Array(items)) => {
            Some(items.into_iter().filter_map(scalar_text).collect())
        }
        Some(other) => scalar_text(other).map(|s| vec![s]),
        None => None,
    })
}

/// `T` when the value has the right shape, `None` otherwise.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

/// Entries of a JSON array that have the right shape; anything that is not
/// an array is an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
