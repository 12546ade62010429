//! Catalog records and their lenient wire decoding
//!
//! Record sources are generated from spreadsheets, so field types drift:
//! element ids arrive as numbers, prices as strings, and any field may be
//! `null` or missing. None of that is an error. Text fields decode to an
//! empty string and amounts decode to `None` when they cannot be read.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::normalize::amount_text;

/// One catalog entry (a part)
///
/// Field names on the wire follow the generated `data.json`:
/// `element_id, description, main_group, sub_group, price_cad, price_eur,
/// image_url, pab_search_url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireRecord")]
pub struct Record {
    /// Stable identifier (not guaranteed unique)
    #[serde(rename = "element_id")]
    pub id: String,

    pub description: String,

    /// Top-level category ("main group")
    #[serde(rename = "main_group")]
    pub category_a: String,

    /// Second-level category ("sub group")
    #[serde(rename = "sub_group")]
    pub category_b: String,

    /// Price in the display currency (CAD)
    #[serde(rename = "price_cad")]
    pub price_amount: Option<f64>,

    /// Price in the secondary currency (EUR), searchable but never displayed
    #[serde(rename = "price_eur")]
    pub secondary_price_amount: Option<f64>,

    /// `price_cad` as it read on the wire; `"42.00"` keeps its zeros
    #[serde(skip_serializing)]
    pub price_text: String,

    #[serde(skip_serializing)]
    pub secondary_price_text: String,

    pub image_url: Option<String>,

    /// Link to the external shop search for this part
    #[serde(rename = "pab_search_url")]
    pub external_link_url: String,
}

/// Wire shape of a record, decoded leniently
#[derive(Deserialize)]
struct WireRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    element_id: String,

    #[serde(default, deserialize_with = "lenient_text")]
    description: String,

    #[serde(default, deserialize_with = "lenient_text")]
    main_group: String,

    #[serde(default, deserialize_with = "lenient_text")]
    sub_group: String,

    #[serde(default, deserialize_with = "lenient_amount")]
    price_cad: WireAmount,

    #[serde(default, deserialize_with = "lenient_amount")]
    price_eur: WireAmount,

    #[serde(default, deserialize_with = "lenient_optional_text")]
    image_url: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pab_search_url: String,
}

#[derive(Default)]
struct WireAmount {
    value: Option<f64>,
    text: String,
}

impl From<WireRecord> for Record {
    fn from(wire: WireRecord) -> Self {
        Self {
            id: wire.element_id,
            description: wire.description,
            category_a: wire.main_group,
            category_b: wire.sub_group,
            price_amount: wire.price_cad.value,
            secondary_price_amount: wire.price_eur.value,
            price_text: wire.price_cad.text,
            secondary_price_text: wire.price_eur.text,
            image_url: wire.image_url,
            external_link_url: wire.pab_search_url,
        }
    }
}

impl Record {
    /// Create a record with the identifying and categorical fields set
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        category_a: impl Into<String>,
        category_b: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            category_a: category_a.into(),
            category_b: category_b.into(),
            ..Default::default()
        }
    }

    /// Set the display price
    pub fn with_price(mut self, amount: f64) -> Self {
        self.price_amount = Some(amount);
        self.price_text = amount_text(amount);
        self
    }

    /// Set the secondary (searchable only) price
    pub fn with_secondary_price(mut self, amount: f64) -> Self {
        self.secondary_price_amount = Some(amount);
        self.secondary_price_text = amount_text(amount);
        self
    }

    /// Set the image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the external link
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.external_link_url = url.into();
        self
    }

    /// The image URL, if one is present and non-empty
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Render a scalar JSON value the way a spreadsheet cell reads
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if n.is_f64() => amount_text(f),
            _ => n.to_string(),
        }),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(value).unwrap_or_default())
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(value).filter(|s| !s.is_empty()))
}

/// Amounts keep their wire text for searching next to the parsed value
fn lenient_amount<'de, D>(deserializer: D) -> Result<WireAmount, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let amount = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(WireAmount {
        value: amount.filter(|a| a.is_finite()),
        text: scalar_text(value).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_wire_field_names() {
        let record: Record = serde_json::from_value(json!({
            "element_id": "300121",
            "description": "BRICK 1X2",
            "main_group": "Bricks",
            "sub_group": "Bricks 1 x",
            "price_cad": 0.15,
            "price_eur": 0.1,
            "image_url": "https://cdn.example/300121.jpg",
            "pab_search_url": "https://shop.example/?q=300121"
        }))
        .unwrap();

        assert_eq!(record.id, "300121");
        assert_eq!(record.category_a, "Bricks");
        assert_eq!(record.category_b, "Bricks 1 x");
        assert_eq!(record.price_amount, Some(0.15));
        assert_eq!(record.secondary_price_amount, Some(0.1));
        assert_eq!(record.image(), Some("https://cdn.example/300121.jpg"));
        assert_eq!(record.external_link_url, "https://shop.example/?q=300121");
    }

    #[test]
    fn test_missing_and_null_fields_degrade_to_empty() {
        let record: Record = serde_json::from_value(json!({
            "element_id": null,
            "price_cad": null
        }))
        .unwrap();

        assert_eq!(record.id, "");
        assert_eq!(record.description, "");
        assert_eq!(record.category_a, "");
        assert_eq!(record.price_amount, None);
        assert_eq!(record.secondary_price_amount, None);
        assert_eq!(record.image(), None);
        assert_eq!(record.external_link_url, "");
    }

    #[test]
    fn test_numeric_ids_and_string_prices() {
        let record: Record = serde_json::from_value(json!({
            "element_id": 4211001,
            "price_cad": "1.25",
            "price_eur": "n/a"
        }))
        .unwrap();

        assert_eq!(record.id, "4211001");
        assert_eq!(record.price_amount, Some(1.25));
        assert_eq!(record.secondary_price_amount, None);
        assert_eq!(record.secondary_price_text, "n/a");
    }

    #[test]
    fn test_amount_text_follows_the_wire() {
        let record: Record = serde_json::from_value(json!({
            "price_cad": "42.00",
            "price_eur": 0.10
        }))
        .unwrap();

        assert_eq!(record.price_amount, Some(42.0));
        assert_eq!(record.price_text, "42.00");
        assert_eq!(record.secondary_price_text, "0.1");

        let record = Record::new("1", "", "", "").with_price(42.0);
        assert_eq!(record.price_text, "42");
    }

    #[test]
    fn test_empty_image_is_absent() {
        let record: Record = serde_json::from_value(json!({ "image_url": "" })).unwrap();
        assert_eq!(record.image(), None);

        let record = Record::new("1", "d", "a", "b").with_image("   ");
        assert_eq!(record.image(), None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let record: Record = serde_json::from_value(json!({
            "element_id": "1",
            "colour": "Bright Red"
        }))
        .unwrap();
        assert_eq!(record.id, "1");
    }
}
