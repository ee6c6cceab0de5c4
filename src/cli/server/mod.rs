mod http1;
mod server;
mod server_config;

pub use server::Server;
pub use server_config::ServerConfig;
