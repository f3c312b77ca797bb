use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use page::leaderboard::SellerLeaderboard;
use page::root::RootPage;
use state::auth::provide_auth_state;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth_state();

    view! {
        <Stylesheet id="leptos" href="/pkg/seller-hub-leptos-ssr.css" />
        <Title text="Seller Hub" />
        <Router>
            <main>
                <Routes fallback=|| {
                    view! { <div class="p-4 text-gray-500">"Page not found"</div> }
                }>
                    <Route path=path!("/") view=RootPage />
                    <Route path=path!("/leaderboard") view=SellerLeaderboard />
                </Routes>
            </main>
        </Router>
    }
}
