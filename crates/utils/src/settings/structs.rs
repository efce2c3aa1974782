use doku::Document;
use merge::Merge;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

#[derive(Debug, Deserialize, Serialize, Clone, Merge, SmartDefault, Document)]
pub struct Settings {
  /// settings related to the postgresql database
  #[default(Some(DatabaseConfig::default()))]
  pub database: Option<DatabaseConfig>,
  /// The domain name of the instance, used as the issuer of login tokens
  #[default(Some(String::from("localhost")))]
  #[doku(example = "zhurnal.example")]
  pub hostname: Option<String>,
  /// Address where the server listens for requests
  #[default(Some(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0))))]
  #[doku(as = "String", example = "0.0.0.0")]
  pub bind: Option<IpAddr>,
  /// Port where the server listens for requests
  #[default(Some(8520))]
  pub port: Option<u16>,
}

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, Document)]
#[serde(default)]
pub struct DatabaseConfig {
  /// Username to connect to postgres
  #[default("zhurnal")]
  pub user: String,
  /// Password to connect to postgres
  #[default("password")]
  pub password: String,
  /// Host where postgres is running
  #[default("localhost")]
  pub host: String,
  /// Port where postgres can be accessed
  #[default(5432)]
  pub port: i32,
  /// Name of the postgres database
  #[default("zhurnal")]
  pub database: String,
  /// Maximum number of active sql connections
  #[default(5)]
  pub pool_size: usize,
}
