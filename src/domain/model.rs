use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier handed out when a receipt is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// 產生新的 UUID v4 識別碼
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReceiptId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A submitted purchase receipt. Amounts stay as the strings the client sent;
/// they are only parsed when points are computed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Receipt {
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String,
    #[serde(deserialize_with = "nullable_items")]
    pub items: Vec<Item>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: String,
}

/// `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_items<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Option<Item>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredReceipt {
    pub receipt: Receipt,
    pub points: i64,
}

/// Points awarded by each rule. The rules are independent, so the score is the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PointsBreakdown {
    pub retailer: i64,
    pub round_total: i64,
    pub quarter_multiple: i64,
    pub item_pairs: i64,
    pub descriptions: i64,
    pub odd_day: i64,
    pub afternoon: i64,
}

impl PointsBreakdown {
    /// Saturates at `i64::MAX` instead of overflowing on absurd prices.
    pub fn total(&self) -> i64 {
        [
            self.retailer,
            self.round_total,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0i64, i64::saturating_add)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_uses_camel_case_fields() {
        let json = serde_json::json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
            "total": "6.49"
        });

        let receipt: Receipt = serde_json::from_value(json).unwrap();
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");

        let back = serde_json::to_value(&receipt).unwrap();
        assert_eq!(back["purchaseTime"], "13:01");
        assert_eq!(back["items"][0]["price"], "6.49");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let receipt: Receipt = serde_json::from_str(r#"{"retailer": "Walgreens"}"#).unwrap();
        assert_eq!(receipt.retailer, "Walgreens");
        assert!(receipt.items.is_empty());
        assert_eq!(receipt.total, "");
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let json = r#"{
            "retailer": null,
            "purchaseDate": "2022-03-21",
            "purchaseTime": null,
            "items": [null, {"shortDescription": "Gum", "price": null}],
            "total": null
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "");
        assert_eq!(receipt.purchase_date, "2022-03-21");
        assert_eq!(receipt.purchase_time, "");
        assert_eq!(receipt.items, vec![Item::default(), Item::new("Gum", "")]);
        assert_eq!(receipt.total, "");

        let no_items: Receipt = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(no_items.items.is_empty());
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let result: Result<Receipt, _> = serde_json::from_str(r#"{"total": 9.00}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ReceiptId::generate();
        let b = ReceiptId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = PointsBreakdown {
            retailer: 14,
            round_total: 50,
            quarter_multiple: 25,
            item_pairs: 10,
            descriptions: 0,
            odd_day: 0,
            afternoon: 10,
        };
        assert_eq!(breakdown.total(), 109);
    }

    #[test]
    fn test_breakdown_total_saturates() {
        let breakdown = PointsBreakdown {
            retailer: 3,
            descriptions: i64::MAX,
            ..PointsBreakdown::default()
        };
        assert_eq!(breakdown.total(), i64::MAX);
    }
}
