use once_cell::sync::Lazy;
use reqwest::Url;

/// Hosted data service that owns the pre-computed seller leaderboard table.
/// Overridable for preview deploys via `LEADERBOARD_API_URL`.
pub static LEADERBOARD_API_URL: Lazy<Url> = Lazy::new(|| {
    let url = std::env::var("LEADERBOARD_API_URL")
        .unwrap_or_else(|_| "https://api.sellerhub.in/".to_string());
    Url::parse(&url).expect("invalid LEADERBOARD_API_URL")
});

pub const SELLER_PROFILE_ID_STORE: &str = "seller-profile-id";

/// Currency glyph prefixed to sales volume figures. Values arrive already
/// denominated, so no conversion happens client side.
pub const CURRENCY_PREFIX: &str = "₹";

pub mod auth {
    use web_time::Duration;

    /// Session cookie expiry, 29 days
    pub const SESSION_MAX_AGE: Duration = Duration::from_secs(60 * 60 * 24 * 29);
}
