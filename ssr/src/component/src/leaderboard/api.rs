use serde::Deserialize;

use super::error::LeaderboardError;
use super::types::LeaderboardEntry;

/// Error descriptor the data service returns on non-success responses.
#[derive(Deserialize, Debug, Clone)]
struct ApiErrorBody {
    message: String,
}

fn leaderboard_url() -> Result<reqwest::Url, String> {
    use consts::LEADERBOARD_API_URL;

    let mut url = LEADERBOARD_API_URL
        .join("rest/v1/leaderboard")
        .map_err(|e| format!("Failed to build URL: {e}"))?;
    url.query_pairs_mut()
        .append_pair("select", "*")
        .append_pair("order", "rank.asc");

    Ok(url)
}

/// Fetches every leaderboard row, ordered ascending by the backend rank
/// field. One unpaginated read per cycle; the caller's identity plays no
/// part in the query, it is only matched client side for the highlight.
pub async fn fetch_leaderboard() -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
    let url = leaderboard_url().map_err(LeaderboardError::Fetch)?;

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LeaderboardError::Fetch(format!("Request failed: {e}")))?;

    if response.status().is_success() {
        response
            .json::<Vec<LeaderboardEntry>>()
            .await
            .map_err(|e| LeaderboardError::Fetch(format!("Failed to parse response: {e}")))
    } else {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("Request failed with status {status}"));
        Err(LeaderboardError::Fetch(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_reads_whole_table_ordered_by_rank() {
        let url = leaderboard_url().unwrap();

        assert!(url.path().ends_with("rest/v1/leaderboard"));

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("select".to_string(), "*".to_string())));
        assert!(pairs.contains(&("order".to_string(), "rank.asc".to_string())));
        // no limit, no offset, no identity filter
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn error_body_exposes_message() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"timeout"}"#).unwrap();
        assert_eq!(body.message, "timeout");
    }
}
