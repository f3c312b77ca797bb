use serde::{Deserialize, Serialize};

/// One seller's ranked performance record. Computed, ranked and stored
/// entirely by the analytics service; this app only reads it.
///
/// Unknown fields are rejected at the boundary rather than silently
/// carried along untyped.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LeaderboardEntry {
    pub id: u64,
    /// Only ever equality-compared against the current seller's id.
    pub profile_id: String,
    pub seller_name: String,
    pub sku_count: u32,
    pub competitive_pricing_score: f64,
    /// Currency amount, displayed with a fixed prefix glyph, no scaling.
    pub sales_volume: f64,
    /// Already in percentage units; displayed with a trailing `%`.
    pub order_fulfillment_rate: f64,
    /// Ordering key of the fetch. The rendered position is the row's
    /// index in the returned sequence, not this value.
    pub rank: u32,
}

/// Result of one fetch cycle: the rows exactly as the service returned
/// them, paired with the profile id that triggered the fetch. Pairing the
/// two means a rendered table can never highlight against a different
/// identity than the one its rows were fetched under.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardSnapshot {
    pub profile_id: String,
    pub entries: Vec<LeaderboardEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_deserializes_from_service_payload() {
        let entry: LeaderboardEntry = serde_json::from_value(serde_json::json!({
            "id": 2,
            "profile_id": "u1",
            "seller_name": "B",
            "sku_count": 3,
            "competitive_pricing_score": 60,
            "sales_volume": 200,
            "order_fulfillment_rate": 99,
            "rank": 1
        }))
        .unwrap();

        assert_eq!(entry.id, 2);
        assert_eq!(entry.profile_id, "u1");
        assert_eq!(entry.seller_name, "B");
        assert_eq!(entry.sku_count, 3);
        assert_eq!(entry.competitive_pricing_score, 60.0);
        assert_eq!(entry.sales_volume, 200.0);
        assert_eq!(entry.order_fulfillment_rate, 99.0);
        assert_eq!(entry.rank, 1);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let res: Result<LeaderboardEntry, _> = serde_json::from_value(serde_json::json!({
            "id": 1,
            "profile_id": "u2",
            "seller_name": "A",
            "sku_count": 10,
            "competitive_pricing_score": 80,
            "sales_volume": 1000,
            "order_fulfillment_rate": 95,
            "rank": 5,
            "surprise_column": true
        }));

        assert!(res.is_err());
    }

    #[test]
    fn missing_field_is_rejected() {
        let res: Result<LeaderboardEntry, _> = serde_json::from_value(serde_json::json!({
            "id": 1,
            "profile_id": "u2",
            "seller_name": "A",
            "rank": 5
        }));

        assert!(res.is_err());
    }
}
