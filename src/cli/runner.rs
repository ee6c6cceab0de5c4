use crate::cli::commands::{Cli, Command};
use crate::cli::{self, rt};
use clap::Parser;
use course_core::blueprint::Blueprint;
use course_core::config::reader::ConfigReader;
use course_core::config::Config;
use course_core::runtime::TargetRuntime;

pub async fn fork_run() -> anyhow::Result<()> {
    // a missing .env file is fine, the process environment still applies
    let _ = dotenvy::dotenv();
    logger_init();
    let cli = Cli::parse();
    let runtime = rt::init();

    run(cli, runtime).await
}

async fn run(cli: Cli, runtime: TargetRuntime) -> anyhow::Result<()> {
    let config_reader = ConfigReader::init(runtime.clone());
    match cli.command {
        Command::Start { config_path } => {
            let config = config_reader.read(config_path).await?;
            let server = cli::server::Server::new(config);
            server.fork_start().await?;
        }
        Command::Check { config_path } => {
            let config = config_reader.read(config_path).await?;
            let blueprint = Blueprint::try_from(config);
            match blueprint {
                Ok(blueprint) => {
                    log::info!(
                        "Config is valid: {} courses, listening on {}:{}",
                        blueprint.extensions.courses.len(),
                        blueprint.server.hostname,
                        blueprint.server.port
                    );
                }
                Err(e) => {
                    log::error!("Invalid config: {}", e)
                }
            }
        }
        Command::Schema => {
            display(Config::schema_json()?);
        }
    }
    Ok(())
}

fn display<T: AsRef<str>>(content: T) {
    println!("{}", content.as_ref());
}

fn logger_init() {
    // set the log level
    const LOG_LEVEL_VAR_NAME: &str = "COURSE_API_LOG_LEVEL";

    // use the log level from the env if there is one, otherwise use the default.
    let env = env_logger::Env::new().filter_or(LOG_LEVEL_VAR_NAME, "info");

    // tests call this more than once
    let _ = env_logger::Builder::from_env(env).try_init();
}
