use crate::modules::post::post_dtos::PostListingShape;
use std::{env, str::FromStr};

/// # Settings
///
/// Runtime configuration read from the environment (and from `.env`, once
/// `dotenv` has loaded it).
///
/// ## Fields
///
/// * `http_port` - `HTTP_PORT`, default `8080`
/// * `db_host` - `DB_HOST`, default `localhost`
/// * `db_port` - `DB_PORT`, default `5432`
/// * `db_name` - `DB_NAME`, default `blogdb`
/// * `db_user` - `DB_USER`, default `postgres`
/// * `db_password` - `DB_PASSWORD`, default `postgres`
/// * `pool_size` - `POOL_SIZE`, default `125` (also used for `0`)
/// * `listing_shape` - `POSTS_LISTING_SHAPE`, default `rows`
#[derive(Clone, Debug)]
pub struct Settings {
    pub http_port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub pool_size: usize,
    pub listing_shape: PostListingShape,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            http_port: parsed_var("HTTP_PORT", 8080),
            db_host: env::var("DB_HOST").unwrap_or(String::from("localhost")),
            db_port: parsed_var("DB_PORT", 5432),
            db_name: env::var("DB_NAME").unwrap_or(String::from("blogdb")),
            db_user: env::var("DB_USER").unwrap_or(String::from("postgres")),
            db_password: env::var("DB_PASSWORD").unwrap_or(String::from("postgres")),
            pool_size: match parsed_var("POOL_SIZE", 125) {
                0 => {
                    log::warn!("POOL_SIZE=0 leaves the pool without connections, using 125");
                    125
                }
                x => x,
            },
            listing_shape: match env::var("POSTS_LISTING_SHAPE") {
                Ok(value) => PostListingShape::from_setting(&value),
                Err(_) => PostListingShape::default(),
            },
        }
    }
}

fn parsed_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(value) => match value.parse() {
            Ok(x) => x,
            Err(_) => {
                log::warn!("{name}={value} is not valid, using the default value");
                default
            }
        },
        Err(_) => default,
    }
}
