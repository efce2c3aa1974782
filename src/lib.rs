pub mod api_routes;
pub mod session_middleware;

use crate::session_middleware::SessionMiddleware;
use actix_web::{web::Data, App, HttpServer};
use clap::Parser;
use tracing_actix_web::TracingLogger;
use zhurnal_api_common::{cache::FeedCache, context::ZhurnalContext};
use zhurnal_db_schema::{source::secret::Secret, utils::build_db_pool};
use zhurnal_utils::{error::ZhurnalResult, settings::SETTINGS, CACHE_DURATION_FEED};

#[derive(Parser, Debug)]
#[command(version, about = "The zhurnal blogging server")]
pub struct CmdArgs {
  /// Run the database migrations and exit without starting the http server.
  #[arg(long, default_value_t = false)]
  pub migrations_only: bool,
}

/// Loads the settings, prepares the database and serves requests until
/// shut down.
pub async fn start_zhurnal_server(args: CmdArgs) -> ZhurnalResult<()> {
  let settings = SETTINGS.to_owned();

  // build_db_pool also runs the migrations
  let pool = build_db_pool().await?;
  if args.migrations_only {
    return Ok(());
  }

  let secret = Secret::init(&mut (&pool).into()).await?;
  let cache = FeedCache::new(CACHE_DURATION_FEED);
  let context = ZhurnalContext::create(pool, cache, secret);

  tracing::info!(
    "Starting http server at {}:{}",
    settings.bind(),
    settings.port()
  );

  HttpServer::new(move || {
    App::new()
      .wrap(TracingLogger::default())
      .app_data(Data::new(context.clone()))
      .wrap(SessionMiddleware::new(context.clone()))
      .configure(api_routes::config)
  })
  .bind((settings.bind(), settings.port()))?
  .run()
  .await?;

  Ok(())
}
