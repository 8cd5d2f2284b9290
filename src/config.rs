// Command-line configuration

use clap::{Arg, ArgMatches};

use crate::db::seed::{AdminSeed, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};

pub const DEFAULT_DATABASE: &str = "pharmacy.db";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const ADMIN_PASSWORD_ENV: &str = "PHARMACY_ADMIN_PASSWORD";

#[derive(Debug, Clone)]
pub struct Config {
    pub database: String,
    pub bind: String,
    pub admin: AdminSeed,
}

pub fn cli() -> clap::Command {
    clap::Command::new("Pharmacy")
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .value_name("DATABASE")
                .help("Path to SQLite database file")
                .default_value(DEFAULT_DATABASE),
        )
        .arg(
            Arg::new("bind")
                .short('b')
                .long("bind")
                .value_name("ADDR")
                .help("Address to listen on")
                .default_value(DEFAULT_BIND),
        )
        .arg(
            Arg::new("admin_username")
                .long("admin-username")
                .value_name("USERNAME")
                .help("Username of the admin account created on first start")
                .default_value(DEFAULT_ADMIN_USERNAME),
        )
        .arg(
            Arg::new("admin_password")
                .long("admin-password")
                .value_name("PASSWORD")
                .help("Initial password of the admin account created on first start")
                .env(ADMIN_PASSWORD_ENV)
                .hide_env_values(true)
                .default_value(DEFAULT_ADMIN_PASSWORD),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let get = |id: &str, default: &str| {
            matches
                .get_one::<String>(id)
                .map(|s| s.to_string())
                .unwrap_or_else(|| default.to_string())
        };

        Config {
            database: get("database", DEFAULT_DATABASE),
            bind: get("bind", DEFAULT_BIND),
            admin: AdminSeed {
                username: get("admin_username", DEFAULT_ADMIN_USERNAME),
                password: get("admin_password", DEFAULT_ADMIN_PASSWORD),
                ..AdminSeed::default()
            },
        }
    }

    pub fn from_args() -> Self {
        Self::from_matches(&cli().get_matches())
    }
}
