use super::accessories::AccessoryList;
use super::record::parse_minutes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// A loosely typed JSON value found in recipe sheets.
///
/// Exported spreadsheets are inconsistent: cooking times show up as numbers,
/// as `"12 mins"`, or as empty strings, and accessories as comma-joined text
/// or as arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl RawField {
    /// Interprets the field as whole minutes.
    pub fn as_minutes(&self) -> Option<u32> {
        match self {
            RawField::Integer(n) => u32::try_from(*n).ok(),
            RawField::Float(f) if f.is_finite() && *f >= 0.0 && *f <= u32::MAX as f64 => {
                Some(f.trunc() as u32)
            }
            RawField::Float(_) => None,
            RawField::Text(s) => parse_minutes(s),
            RawField::List(_) => None,
        }
    }

    /// Interprets the field as an accessory list.
    pub fn as_accessories(&self) -> AccessoryList {
        match self {
            RawField::Text(s) => AccessoryList::parse(s),
            RawField::List(items) => AccessoryList::from_tokens(items),
            RawField::Integer(n) => AccessoryList::parse(&n.to_string()),
            RawField::Float(f) => AccessoryList::parse(&f.to_string()),
        }
    }
}

/// One record exactly as it appears in the catalog JSON file.
///
/// Every field is optional so a single sparse row never fails the whole
/// catalog. A cell of an unexpected JSON type is read as absent (with a
/// warning) instead of rejecting the record. Conversion into
/// [`super::Recipe`] applies the per-field fallbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecipe {
    #[serde(
        rename = "Recipe Name",
        alias = "name",
        default,
        deserialize_with = "lenient_text"
    )]
    pub name: Option<String>,
    #[serde(
        rename = "Veg/Non Veg",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub diet: Option<String>,
    #[serde(
        rename = "Cooking Mode",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub cooking_mode: Option<String>,
    #[serde(
        rename = "Cuisine",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub cuisine: Option<String>,
    #[serde(
        rename = "Category",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(
        rename = "Accessories",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub accessories: Option<RawField>,
    #[serde(
        rename = "Cooking Time",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub cooking_time: Option<RawField>,
    #[serde(
        rename = "On2Cook Cooking Time",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub platform_time: Option<RawField>,
    #[serde(
        rename = "Normal Cooking Time",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub normal_time: Option<RawField>,
    #[serde(
        rename = "Image",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(
        rename = "PopupImage",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub popup_image: Option<String>,
    #[serde(
        rename = "Ingredients",
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub ingredients: Option<Vec<String>>,
    #[serde(
        rename = "Total Output",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_output: Option<String>,
}

/// Reads a cell as `T`, or as absent when it has another shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value)
        .map_err(|e| warn!("ignoring unreadable catalog cell: {}", e))
        .ok())
}

/// Reads a text cell. Numbers and booleans are kept as their text, since
/// spreadsheet exports turn cells like `Total Output` into numbers.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => {
            warn!("ignoring non-text catalog cell: {}", other);
            None
        }
    })
}

/// Reads a list cell: an array of scalars, or comma-joined text.
fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s.split(',').map(str::to_string).collect()),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
        ),
        other => {
            warn!("ignoring non-list catalog cell: {}", other);
            None
        }
    })
}
