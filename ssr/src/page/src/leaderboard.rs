use component::leaderboard::{
    api::fetch_leaderboard, error::LeaderboardError, table::LeaderboardTable,
    types::LeaderboardSnapshot,
};
use component::spinner::Spinner;
use component::title::TitleText;
use leptos::prelude::*;
use leptos_icons::*;
use state::auth::auth_state;

fn require_profile_id(profile_id: Option<String>) -> Result<String, LeaderboardError> {
    profile_id.ok_or(LeaderboardError::IdentityUnavailable)
}

#[component]
pub fn SellerLeaderboard() -> impl IntoView {
    let auth = auth_state();

    // Re-runs on mount and on every identity change; each run replaces
    // the previous snapshot wholesale.
    let leaderboard_resource = LocalResource::new(move || {
        let profile_id = auth.profile_id().get();
        async move {
            let profile_id = require_profile_id(profile_id)?;
            let entries = fetch_leaderboard().await?;
            Ok::<_, LeaderboardError>(LeaderboardSnapshot {
                profile_id,
                entries,
            })
        }
    });

    let loading = move || {
        view! {
            <div class="flex gap-2 justify-center items-center py-12 text-gray-500">
                <Spinner />
                <span>"Loading leaderboard data..."</span>
            </div>
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-800">
            <TitleText>
                <div class="flex gap-2 items-center px-4">
                    <Icon attr:class="w-6 h-6 text-green-500" icon=icondata::BsTrophy />
                    <span class="text-xl font-bold">"Seller Leaderboard"</span>
                </div>
            </TitleText>

            <div class="container py-6 px-4 mx-auto max-w-4xl">
                <div class="p-4 bg-white rounded-lg border border-gray-100 shadow-sm">
                    <Suspense fallback=loading>
                        {move || match leaderboard_resource.get() {
                            Some(Ok(snapshot)) => {
                                view! {
                                    <LeaderboardTable
                                        entries=snapshot.entries
                                        profile_id=snapshot.profile_id
                                    />
                                }
                                    .into_any()
                            }
                            Some(Err(e)) => {
                                view! {
                                    <div class="p-4 text-red-500">"Error: " {e.to_string()}</div>
                                }
                                    .into_any()
                            }
                            None => loading().into_any(),
                        }}
                    </Suspense>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_identity_fails_before_any_request() {
        assert_eq!(
            require_profile_id(None),
            Err(LeaderboardError::IdentityUnavailable)
        );
    }

    #[test]
    fn resolved_identity_passes_through() {
        assert_eq!(
            require_profile_id(Some("u1".to_string())),
            Ok("u1".to_string())
        );
    }
}
