use codee::string::FromToStringCodec;
use consts::{auth::SESSION_MAX_AGE, SELLER_PROFILE_ID_STORE};
use leptos::prelude::*;
use leptos_use::{use_cookie_with_options, SameSite, UseCookieOptions};

/// The resolved seller identity helper.
/// Must be provided once near the app root, read via [`auth_state`].
pub fn provide_auth_state() {
    provide_context(AuthState::default());
}

pub fn auth_state() -> AuthState {
    expect_context()
}

#[derive(Copy, Clone)]
pub struct AuthState {
    profile_id_cookie: (Signal<Option<String>>, WriteSignal<Option<String>>),
}

impl Default for AuthState {
    fn default() -> Self {
        let profile_id_cookie = use_cookie_with_options::<String, FromToStringCodec>(
            SELLER_PROFILE_ID_STORE,
            UseCookieOptions::default()
                .path("/")
                .max_age(SESSION_MAX_AGE.as_millis() as i64)
                .same_site(SameSite::Lax),
        );

        Self { profile_id_cookie }
    }
}

impl AuthState {
    /// The authenticated seller's profile id. `None` until the auth
    /// provider has resolved it (or when the visitor is logged out).
    pub fn profile_id(&self) -> Signal<Option<String>> {
        self.profile_id_cookie.0
    }

    pub fn set_profile_id(&self, id: Option<String>) {
        self.profile_id_cookie.1.set(id);
    }
}
