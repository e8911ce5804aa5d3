use serde::{Serialize, Serializer};
use serde_json::Number;
use utoipa::ToSchema;

/// An optional value as reported by the model.
///
/// Keeps "field missing" apart from "field explicitly null" so a menu
/// re-serializes with the same shape it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub enum Reported<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Reported<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Reported::Absent)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Reported::Value(value) => Some(value),
            Reported::Absent | Reported::Null => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Reported::Value(value) => Some(value),
            Reported::Absent | Reported::Null => None,
        }
    }
}

impl<T> Default for Reported<T> {
    fn default() -> Self {
        Reported::Absent
    }
}

impl<T> From<Option<T>> for Reported<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Reported::Value(value),
            None => Reported::Null,
        }
    }
}

impl<T: Serialize> Serialize for Reported<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Reported::Value(value) => serializer.serialize_some(value),
            Reported::Absent | Reported::Null => serializer.serialize_none(),
        }
    }
}

/// Root result of menu vision parsing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, ToSchema)]
pub struct ParsedMenu {
    #[serde(skip_serializing_if = "Reported::is_absent")]
    #[schema(value_type = Option<String>)]
    pub detected_language: Reported<String>,
    #[serde(skip_serializing_if = "Reported::is_absent")]
    #[schema(value_type = Option<String>)]
    pub target_language: Reported<String>,
    /// Categories in reading order of the source image.
    pub menu: Vec<MenuCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MenuCategory {
    pub category: String,
    #[serde(skip_serializing_if = "Reported::is_absent")]
    #[schema(value_type = Option<String>)]
    pub category_translated: Reported<String>,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MenuItem {
    pub name: String,
    #[serde(skip_serializing_if = "Reported::is_absent")]
    #[schema(value_type = Option<String>)]
    pub name_translated: Reported<String>,
    /// Null whenever the printed price could not be read as a number.
    /// Kept as a JSON number so `800` and `12.5` re-serialize unchanged.
    #[serde(skip_serializing_if = "Reported::is_absent")]
    #[schema(value_type = Option<f64>)]
    pub price: Reported<Number>,
    #[serde(skip_serializing_if = "Reported::is_absent")]
    #[schema(value_type = Option<String>)]
    pub price_original: Reported<String>,
    #[serde(skip_serializing_if = "Reported::is_absent")]
    #[schema(value_type = Option<String>)]
    pub currency: Reported<String>,
    #[serde(skip_serializing_if = "Reported::is_absent")]
    #[schema(value_type = Option<String>)]
    pub description: Reported<String>,
    #[serde(skip_serializing_if = "Reported::is_absent")]
    #[schema(value_type = Option<String>)]
    pub description_translated: Reported<String>,
}

impl ParsedMenu {
    pub fn item_count(&self) -> usize {
        self.menu.iter().map(|category| category.items.len()).sum()
    }

    /// Every item name in menu order, as used by dish matching.
    pub fn item_names(&self) -> Vec<String> {
        self.menu
            .iter()
            .flat_map(|category| category.items.iter().map(|item| item.name.clone()))
            .collect()
    }
}
