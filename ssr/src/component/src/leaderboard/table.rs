use leptos::prelude::*;

use super::types::LeaderboardEntry;

/// Fully resolved display state for one row.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardRowModel {
    /// 1-based position in the fetched sequence. Deliberately independent
    /// of the stored `rank` field, so the numbering stays dense and
    /// contiguous even when that field has gaps or ties.
    pub position: usize,
    pub highlighted: bool,
    pub entry: LeaderboardEntry,
}

/// Maps fetched entries to row display state, preserving fetch order.
pub fn row_models(entries: Vec<LeaderboardEntry>, profile_id: &str) -> Vec<LeaderboardRowModel> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| LeaderboardRowModel {
            position: index + 1,
            highlighted: entry.profile_id == profile_id,
            entry,
        })
        .collect()
}

/// Badge treatment for the position pill: the top three positions get
/// distinct fills of decreasing intensity, everyone else a neutral one.
pub fn position_badge_class(position: usize) -> &'static str {
    match position {
        1 => "bg-green-500 text-white",
        2 => "bg-green-400 text-white",
        3 => "bg-green-300 text-white",
        _ => "bg-gray-100 text-gray-700",
    }
}

#[component]
pub fn LeaderboardTable(entries: Vec<LeaderboardEntry>, profile_id: String) -> impl IntoView {
    let rows = row_models(entries, &profile_id);

    view! {
        <div class="overflow-x-auto">
            <table class="w-full table-auto">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-4 py-3 text-left text-sm font-medium text-gray-600">"Rank"</th>
                        <th class="px-4 py-3 text-left text-sm font-medium text-gray-600">"Seller"</th>
                        <th class="px-4 py-3 text-left text-sm font-medium text-gray-600">"SKU Count"</th>
                        <th class="px-4 py-3 text-left text-sm font-medium text-gray-600">"Pricing Score"</th>
                        <th class="px-4 py-3 text-left text-sm font-medium text-gray-600">"Sales Volume"</th>
                        <th class="px-4 py-3 text-left text-sm font-medium text-gray-600">"Fulfillment Rate"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100">
                    {rows
                        .into_iter()
                        .map(|row| view! { <LeaderboardRow row /> })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn LeaderboardRow(row: LeaderboardRowModel) -> impl IntoView {
    use consts::CURRENCY_PREFIX;

    let badge_class = position_badge_class(row.position);
    let row_class = if row.highlighted { "bg-green-50" } else { "" };
    let entry = row.entry;

    view! {
        <tr class=format!("hover:bg-gray-50 transition-colors {row_class}")>
            <td class="px-4 py-3">
                <div class=format!(
                    "w-8 h-8 flex items-center justify-center rounded-full {badge_class}",
                )>{row.position}</div>
            </td>
            <td class="px-4 py-3 text-gray-700">{entry.seller_name}</td>
            <td class="px-4 py-3 text-gray-700">{entry.sku_count}</td>
            <td class="px-4 py-3 text-gray-700">{entry.competitive_pricing_score}</td>
            <td class="px-4 py-3 text-gray-700">
                {format!("{CURRENCY_PREFIX}{}", entry.sales_volume)}
            </td>
            <td class="px-4 py-3 text-gray-700">{format!("{}%", entry.order_fulfillment_rate)}</td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<LeaderboardEntry> {
        serde_json::from_value(serde_json::json!([
            {
                "id": 1, "profile_id": "u2", "seller_name": "A", "sku_count": 10,
                "competitive_pricing_score": 80, "sales_volume": 1000,
                "order_fulfillment_rate": 95, "rank": 5
            },
            {
                "id": 2, "profile_id": "u1", "seller_name": "B", "sku_count": 3,
                "competitive_pricing_score": 60, "sales_volume": 200,
                "order_fulfillment_rate": 99, "rank": 1
            }
        ]))
        .unwrap()
    }

    #[test]
    fn positions_are_dense_regardless_of_stored_rank() {
        // stored ranks are 5 and 1, with both gaps and an inversion
        let rows = row_models(entries(), "u1");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[1].position, 2);
    }

    #[test]
    fn fetch_order_is_preserved() {
        let rows = row_models(entries(), "u1");

        // seller A first despite its larger stored rank
        assert_eq!(rows[0].entry.seller_name, "A");
        assert_eq!(rows[1].entry.seller_name, "B");
    }

    #[test]
    fn highlight_matches_current_seller_only() {
        let rows = row_models(entries(), "u1");
        assert!(!rows[0].highlighted);
        assert!(rows[1].highlighted);

        let rows = row_models(entries(), "u3");
        assert!(rows.iter().all(|r| !r.highlighted));
    }

    #[test]
    fn mapping_is_idempotent() {
        let first = row_models(entries(), "u1");
        let second = row_models(entries(), "u1");

        assert_eq!(first, second);
    }

    #[test]
    fn empty_sequence_maps_to_no_rows() {
        assert!(row_models(Vec::new(), "u1").is_empty());
    }

    #[test]
    fn top_three_badges_are_distinct_then_neutral() {
        let classes: Vec<_> = (1..=5).map(position_badge_class).collect();

        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_ne!(classes[0], classes[2]);
        assert_eq!(classes[3], classes[4]);
        assert_ne!(classes[2], classes[3]);
    }
}
