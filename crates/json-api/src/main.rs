//! FrontDash JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use frontdash_app::{auth::TokenHasher, context::AppContext};

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod config;
mod drivers;
mod extensions;
mod healthcheck;
mod orders;
mod registrations;
mod restaurants;
mod shutdown;
mod staff;
mod state;
#[cfg(test)]
mod test_helpers;

/// FrontDash JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level));

    if config.logging.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let hasher = TokenHasher::new(config.auth.auth_token_key.into_bytes());

    let app = match AppContext::from_database_url(&config.database.database_url, hasher).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        // Public storefront surface: browsing, checkout, tracking, and
        // restaurant onboarding.
        .push(
            Router::with_path("restaurants")
                .get(restaurants::handlers::index::handler)
                .push(
                    Router::with_path("{restaurant}").get(restaurants::handlers::get::handler),
                ),
        )
        .push(
            Router::with_path("orders")
                .post(orders::handlers::create::handler)
                .push(Router::with_path("{order}").get(orders::handlers::get::handler)),
        )
        .push(Router::with_path("registrations").post(registrations::handlers::create::handler))
        // Back-office surface: staff dispatch, the restaurant portal, and
        // the admin portal, all behind bearer tokens.
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("orders")
                        .get(orders::handlers::index::handler)
                        .push(
                            Router::with_path("{order}")
                                .push(
                                    Router::with_path("assign")
                                        .post(orders::handlers::assign::handler),
                                )
                                .push(
                                    Router::with_path("status")
                                        .post(orders::handlers::status::handler),
                                ),
                        ),
                )
                .push(
                    Router::with_path("restaurants/{restaurant}/orders")
                        .get(restaurants::handlers::orders::handler),
                )
                .push(
                    Router::with_path("drivers")
                        .get(drivers::handlers::index::handler)
                        .post(drivers::handlers::create::handler)
                        .push(
                            Router::with_path("{driver}")
                                .delete(drivers::handlers::delete::handler),
                        ),
                )
                .push(
                    Router::new()
                        .hoop(auth::middleware::require_admin)
                        .push(
                            Router::with_path("staff")
                                .get(staff::handlers::index::handler)
                                .post(staff::handlers::create::handler)
                                .push(
                                    Router::with_path("{staff}")
                                        .delete(staff::handlers::delete::handler),
                                ),
                        )
                        .push(
                            Router::with_path("registrations")
                                .get(registrations::handlers::index::handler)
                                .push(
                                    Router::with_path("{registration}/decision")
                                        .post(registrations::handlers::decide::handler),
                                ),
                        ),
                ),
        );

    let doc = OpenApi::new("FrontDash API", "0.1.0")
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
