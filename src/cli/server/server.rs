use crate::cli::server::http1;
use crate::cli::server::server_config::ServerConfig;
use anyhow::Result;
use course_core::blueprint::Blueprint;
use course_core::config::config_module::ConfigModule;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;

pub struct Server {
    config: ConfigModule,
    server_up_sender: Option<oneshot::Sender<SocketAddr>>,
}

impl Server {
    pub fn new(config: ConfigModule) -> Self {
        Self {
            config,
            server_up_sender: None,
        }
    }

    /// Resolves with the bound address once the listener is up.
    pub fn server_up_receiver(&mut self) -> oneshot::Receiver<SocketAddr> {
        let (tx, rx) = oneshot::channel();

        self.server_up_sender = Some(tx);

        rx
    }

    /// Starts the server in the current Runtime
    pub async fn start(self) -> Result<()> {
        let blueprint = Blueprint::try_from(self.config)?;
        serve(blueprint, self.server_up_sender).await
    }

    /// Starts the server in its own multithreaded Runtime
    pub async fn fork_start(self) -> Result<()> {
        let blueprint = Blueprint::try_from(self.config)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(blueprint.server.workers)
            .enable_all()
            .build()?;

        let result = runtime
            .spawn(serve(blueprint, self.server_up_sender))
            .await?;
        runtime.shutdown_background();

        result
    }
}

async fn serve(
    blueprint: Blueprint,
    server_up_sender: Option<oneshot::Sender<SocketAddr>>,
) -> Result<()> {
    let server_config = Arc::new(ServerConfig::new(blueprint));
    http1::run(server_config, server_up_sender).await
}
