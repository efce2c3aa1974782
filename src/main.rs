use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use zhurnal_server::{start_zhurnal_server, CmdArgs};
use zhurnal_utils::error::ZhurnalResult;

#[tokio::main]
pub async fn main() -> ZhurnalResult<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let args = CmdArgs::parse();

  start_zhurnal_server(args).await?;
  Ok(())
}
