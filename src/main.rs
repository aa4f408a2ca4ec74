use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use rto_backoffice::config::environment::EnvironmentConfig;
use rto_backoffice::database::{create_pool, run_migrations};
use rto_backoffice::services::scheduler::run_renewal_scheduler;
use rto_backoffice::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 RTO Back Office - Registro Vehicular y Cumplimiento");
    info!("======================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match create_pool(None, config.database_max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = run_migrations(&pool).await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(e);
    }
    info!("✅ Migraciones aplicadas");

    // Scheduler de renovaciones en background
    if config.scheduler_enabled {
        tokio::spawn(run_renewal_scheduler(pool.clone()));
    } else {
        info!("⏸️ Scheduler de renovaciones deshabilitado por configuración");
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app_state = AppState::new(pool, config);
    let app = rto_backoffice::build_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/register - Registrar agente");
    info!("   POST /api/auth/login - Login agente");
    info!("   GET  /api/auth/me - Agente actual");
    info!("🚗 Endpoints - Vehicle:");
    info!("   POST /api/vehicles - Registrar vehículo");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   PUT  /api/vehicles/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo");
    info!("   GET  /api/vehicles/registration/:reg - Buscar por matrícula");
    info!("📄 Endpoints - Documentos:");
    info!("   GET  /api/vehicles/:id/documents - Documentos del vehículo");
    info!("   PUT  /api/vehicles/:id/documents/puc - Registrar PUC");
    info!("   PUT  /api/vehicles/:id/documents/insurance - Registrar seguro");
    info!("   PUT  /api/vehicles/:id/documents/fitness - Registrar aptitud");
    info!("   PUT  /api/vehicles/:id/documents/permit - Registrar permiso");
    info!("   PUT  /api/vehicles/:id/documents/tax - Registrar impuesto");
    info!("🔔 Endpoints - Renovaciones:");
    info!("   POST /api/renewals/check-dues - Escaneo manual");
    info!("   POST /api/renewals/auto-check - Auto-check diario");
    info!("   GET  /api/renewals/dues - Listar vencimientos");
    info!("   POST /api/renewals/dues/:id/process - Generar orden de servicio");
    info!("💳 Endpoints - Órdenes:");
    info!("   GET  /api/orders - Listar órdenes");
    info!("   GET  /api/orders/:id - Obtener orden");
    info!("   POST /api/orders/:id/pay - Registrar pago");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

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
