use std::sync::Arc;

use anyhow::Result;
use sofia_lft_router::{
    api,
    app_state::AppState,
    assistant::LegalAssistant,
    config::AppConfig,
    llm::LlmManager,
    statutes::ArticleIndex,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Cargar .env e inicializar logging
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 2. Cargar configuración
    let cfg = AppConfig::from_env()?;

    // 3. Cargar los artículos de la LFT antes de aceptar peticiones
    let lft_path = cfg.lft_path.clone();
    let statutes = match tokio::task::spawn_blocking(move || ArticleIndex::load(&lft_path)).await? {
        Ok(index) => index,
        Err(e) => {
            error!("Error al cargar artículos LFT: {e:#}");
            ArticleIndex::default()
        }
    };

    // 4. Inicializar el asistente con el proveedor LLM configurado
    if cfg.llm_api_key.is_none() {
        warn!(
            "Falta {}: sólo funcionarán las respuestas deterministas",
            cfg.llm_provider.api_key_var()
        );
    }
    let assistant = LegalAssistant::new(
        Arc::new(statutes),
        Arc::new(LlmManager::from_config(&cfg)),
        cfg.llm_chat_model.clone(),
        cfg.llm_timeout,
    );

    // 5. Configurar el router de la API y el servicio de ficheros estáticos
    let app = api::create_router_with_static(AppState::new(assistant), &cfg.static_dir).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // 6. Iniciar el servidor
    let listener = tokio::net::TcpListener::bind(&cfg.server_addr).await?;
    info!("🚀 Servidor escuchando en http://{}", cfg.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Señal de apagado recibida, iniciando cierre del servidor.");
        })
        .await?;

    info!("✅ Servidor cerrado correctamente.");
    Ok(())
}
