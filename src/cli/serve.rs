use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::AppConfig;
use crate::errors::ShaderGenError;
use tracing::{info, warn};

pub fn build_config(args: &ServeArgs) -> AppConfig {
    AppConfig::new(args.api.api_key.clone())
        .with_listen(&args.host, args.port)
        .with_api_base(&args.api.api_base)
        .with_extra_origins(&args.allow_origins)
}

pub async fn handle_serve(args: ServeArgs) -> Result<(), ShaderGenError> {
    let config = build_config(&args);
    if !config.has_credential() {
        warn!("GROQ_API_KEY is not set; shader generation requests will fail");
    }

    let state = api::create_app_state(&config)?;
    let app = api::build_router(state, &config);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(model = %config.model, origins = ?config.allowed_origins, "Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ShaderGenError::Internal(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    info!("Shutdown signal received");
}
