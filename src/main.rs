use computer::infrastructure::logger::Logger;
use computer::{AppConfig, AppError, ComputerModule};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> computer::Result<()> {
    Logger::init();

    let config = AppConfig::from_env();
    let module = ComputerModule::new();
    let app = module.router();

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::BindFailed {
            addr: addr.clone(),
            source,
        })?;

    let local_addr = listener.local_addr().map_err(|source| AppError::BindFailed {
        addr: addr.clone(),
        source,
    })?;
    info!("🚀 服务器运行在 http://{}", local_addr);
    info!("   POST /disk   - 存储数据");
    info!("   GET  /health - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::ServeFailed)?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("无法监听 Ctrl-C 信号: {}", err);
    }
}
