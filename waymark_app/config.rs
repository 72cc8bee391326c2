use dotenvy::dotenv;
use std::env;

pub struct Config {
    pub command_prefix: String,
    pub search_radius: f64,
    pub chat_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let command_prefix = match env::var("WAYMARK_COMMAND_PREFIX") {
            Ok(val) if !val.is_empty() => val,
            _ => "!".to_string(),
        };

        let search_radius = match env::var("WAYMARK_SEARCH_RADIUS") {
            Ok(val) => val.parse::<f64>().unwrap_or(5000.0),
            Err(_) => 5000.0,
        };

        // Token for the chat gateway, supplied out-of-band. The bundled
        // console gateway does not need one.
        let chat_token = env::var("WAYMARK_CHAT_TOKEN").ok();

        Self {
            command_prefix,
            search_radius,
            chat_token,
        }
    }
}
