use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_file")]
    pub db_file: String,
    /// Default cap on the number of tasks `list` shows.
    #[serde(default = "default_list_limit")]
    pub list_limit: i64,
}

fn default_db_file() -> String {
    "dueday.db".to_string()
}

fn default_list_limit() -> i64 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_file: default_db_file(),
            list_limit: default_list_limit(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("dueday.toml"))
            .merge(Env::prefixed("DUEDAY_"))
            .extract()
    }
}
