use aboutblog_core::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use aboutblog_core::config::AppConfig;
use aboutblog_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
    comment::CommentRepository,
};
use aboutblog_core::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCategoryRepository,
        SqliteCommentRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use aboutblog_core::presentation::http::{
    routes::build_router,
    state::{HttpState, IdentityHeaders},
};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(Arc::clone(&pool)));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(SqliteCommentRepository::new(Arc::clone(&pool)));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        category_repo,
        comment_repo,
        clock,
        slugger,
    ));

    let state = HttpState {
        services,
        identity_headers: Arc::new(IdentityHeaders {
            user: config.auth_user_header().to_string(),
            role: config.auth_role_header().to_string(),
        }),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
