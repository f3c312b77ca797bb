#[cfg(feature = "ssr")]
async fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
    use axum::{routing::get, Router};
    use http::{header, Method};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, handle_server_fns, LeptosRoutes};
    use seller_hub_web_leptos_ssr::app::{shell, App};
    use seller_hub_web_leptos_ssr::fallback::file_and_error_handler;
    use seller_hub_web_leptos_ssr::init::AppStateBuilder;
    use tower_http::cors::{AllowOrigin, CorsLayer};
    use utils::host::is_host_or_origin_from_preview_domain;

    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(
            |_| "info,seller_hub_web_leptos_ssr=debug,tower_http=info".into(),
        ))
        .init();

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values
    // For deployment these variables are:
    // <https://github.com/leptos-rs/start-axum#executing-a-server-on-a-remote-machine-without-the-toolchain>
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app_state = AppStateBuilder::new(leptos_options, routes.clone())
        .build()
        .await;

    let terminate = {
        use tokio::signal;

        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            use tokio::signal;
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("failed to install signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        async {
            tokio::select! {
                _ = ctrl_c => {},
                _ = terminate => {},
            }
            tracing::info!("stopping...");
        }
    };

    // build our application with a route
    let app = Router::new()
        .route(
            "/api/{*fn_name}",
            get(handle_server_fns).post(handle_server_fns),
        )
        .layer(
            CorsLayer::new()
                .allow_credentials(true)
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
                .allow_methods([Method::POST, Method::GET, Method::PUT, Method::OPTIONS])
                .allow_origin(AllowOrigin::predicate(|origin, _| {
                    if let Ok(host) = origin.to_str() {
                        is_host_or_origin_from_preview_domain(host) || host == "sellerhub.in"
                    } else {
                        false
                    }
                })),
        )
        .leptos_routes(&app_state, routes, {
            let leptos_options = app_state.leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(file_and_error_handler)
        .with_state(app_state);

    println!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .with_graceful_shutdown(terminate)
    .await?;

    Ok(())
}

#[cfg(feature = "ssr")]
fn main() {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
        .block_on(async {
            if let Err(e) = main_impl().await {
                eprintln!("Server error: {e}");
                std::process::exit(1);
            }
        });
}

// no client-side main function needed, hydration entry point is in lib.rs
#[cfg(not(feature = "ssr"))]
pub fn main() {}
