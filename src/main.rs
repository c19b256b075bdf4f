use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use gestor_polizas::config::environment::EnvironmentConfig;
use gestor_polizas::create_app;
use gestor_polizas::database::DatabaseConnection;
use gestor_polizas::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("📋 GestorPólizas - API de gestión de pólizas");
    info!("=============================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(e);
        }
    };
    info!("✅ Conexión a PostgreSQL establecida");

    let addr: SocketAddr = config.server_addr().parse()?;
    let state = AppState::new(db_connection.pool().clone(), config);
    let app = create_app(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /salud - Health check");
    info!("👤 Clientes:");
    info!("   GET    /api/clientes?buscar= - Listar clientes");
    info!("   GET    /api/clientes/:id - Detalle con pólizas");
    info!("   POST   /api/clientes - Crear cliente (con pólizas opcionales)");
    info!("   PUT    /api/clientes/:id - Actualizar cliente");
    info!("   DELETE /api/clientes/:id - Eliminar cliente y sus pólizas");
    info!("🏢 Compañías:");
    info!("   GET    /api/companias - Listar compañías");
    info!("   POST   /api/companias - Crear compañía");
    info!("   PUT    /api/companias/:id - Renombrar compañía");
    info!("📄 Pólizas:");
    info!("   POST   /api/polizas - Crear póliza");
    info!("   GET    /api/polizas/cliente/:id - Pólizas de un cliente");
    info!("   PUT    /api/polizas/:id - Actualizar póliza");
    info!("   DELETE /api/polizas/:id - Eliminar póliza");
    info!("🔔 Avisos:");
    info!("   GET    /api/avisos - Listar avisos (lectura pura)");
    info!("   POST   /api/avisos/refrescar - Regenerar avisos vencidos");
    info!("   PUT    /api/avisos/:id/estado - Cambiar estado de un aviso");
    info!("📍 Localidades:");
    info!("   GET    /api/localidades?q= - Buscar localidades");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
