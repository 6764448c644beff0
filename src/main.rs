//! launchcheck server binary.
//!
//! Wires configuration, the Postgres pool, adapters and handlers into an
//! axum application and serves it.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::{middleware, routing::get, Json, Router};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use launchcheck::adapters::auth::OidcTokenValidator;
use launchcheck::adapters::http::middleware::{auth_middleware, AuthState};
use launchcheck::adapters::http::{
    comment_routes, profile_routes, report_routes, share_routes, CommentHandlers,
    ProfileHandlers, ReportHandlers, ShareHandlers,
};
use launchcheck::adapters::postgres::{
    PostgresCommentRepository, PostgresProfileRepository, PostgresReportRepository,
    PostgresRevisionRepository, PostgresShareGrantRepository,
};
use launchcheck::adapters::storage::HttpObjectStorage;
use launchcheck::application::handlers::comment::{AddCommentHandler, ListCommentsHandler};
use launchcheck::application::handlers::profile::EnsureProfileHandler;
use launchcheck::application::handlers::report::{
    ChecklistAutosave, CompleteReportHandler, CreateReportHandler, CreateShareLinkHandler,
    ExportReportHandler, GetReportHandler, ListReportsHandler, ListRevisionsHandler,
    ResolveSharedReportHandler, ReviseReportHandler, SaveChecklistHandler, UploadImageHandler,
};
use launchcheck::config::AppConfig;
use launchcheck::ports::{
    CommentRepository, ImageStorage, ProfileRepository, ReportRepository, RevisionRepository,
    ShareGrantRepository, TokenValidator,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let app = build_app(&config, pool)?;

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.server.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_app(config: &AppConfig, pool: PgPool) -> Result<Router, Box<dyn std::error::Error>> {
    // Repositories
    let reports: Arc<dyn ReportRepository> = Arc::new(PostgresReportRepository::new(pool.clone()));
    let revisions: Arc<dyn RevisionRepository> =
        Arc::new(PostgresRevisionRepository::new(pool.clone()));
    let comments: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool.clone()));
    let profiles: Arc<dyn ProfileRepository> =
        Arc::new(PostgresProfileRepository::new(pool.clone()));
    let grants: Arc<dyn ShareGrantRepository> =
        Arc::new(PostgresShareGrantRepository::new(pool));

    let storage: Arc<dyn ImageStorage> = Arc::new(HttpObjectStorage::from_config(&config.storage));
    let validator: AuthState = Arc::new(OidcTokenValidator::from_config(&config.auth)?)
        as Arc<dyn TokenValidator>;

    // Application handlers
    let autosave = Arc::new(ChecklistAutosave::new(reports.clone()));
    let report_handlers = ReportHandlers {
        create: Arc::new(CreateReportHandler::new(reports.clone())),
        get: Arc::new(GetReportHandler::new(reports.clone())),
        list: Arc::new(ListReportsHandler::new(reports.clone())),
        save_checklist: Arc::new(SaveChecklistHandler::new(reports.clone(), autosave.clone())),
        complete: Arc::new(CompleteReportHandler::new(reports.clone(), autosave)),
        revise: Arc::new(ReviseReportHandler::new(reports.clone(), revisions.clone())),
        list_revisions: Arc::new(ListRevisionsHandler::new(reports.clone(), revisions)),
        export: Arc::new(ExportReportHandler::new(reports.clone())),
        share: Arc::new(CreateShareLinkHandler::new(reports.clone(), grants.clone())),
        upload_image: Arc::new(UploadImageHandler::new(reports.clone(), storage)),
    };
    let comment_handlers = CommentHandlers {
        add: Arc::new(AddCommentHandler::new(reports.clone(), comments.clone())),
        list: Arc::new(ListCommentsHandler::new(reports.clone(), comments)),
    };
    let profile_handlers = ProfileHandlers {
        ensure: Arc::new(EnsureProfileHandler::new(profiles)),
    };
    let share_handlers = ShareHandlers {
        resolve: Arc::new(ResolveSharedReportHandler::new(reports, grants)),
    };

    let protected = Router::new()
        .nest(
            "/api/reports",
            report_routes(report_handlers).merge(comment_routes(comment_handlers)),
        )
        .nest("/api/profile", profile_routes(profile_handlers))
        .layer(middleware::from_fn_with_state(validator, auth_middleware));

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/share", share_routes(share_handlers))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config)?)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    Ok(app)
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
