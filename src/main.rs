use exam_backend::State;
use std::{
    env,
    net::{Ipv4Addr, SocketAddr},
    process::ExitCode,
};
use tokio::net::TcpListener;
use tracing::{error, level_filters::LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_PORT: u16 = 3002;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_line_number(true).with_filter(env_filter))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn port() -> anyhow::Result<u16> {
    match env::var("PORT") {
        Ok(port) => Ok(port
            .parse()
            .inspect_err(|_| error!("PORT is not a valid port number: {}", port))?),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

async fn run() -> anyhow::Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port()?));

    let listener = TcpListener::bind(addr).await?;
    let state = State::new().await?;

    exam_backend::run(listener, state).await
}
