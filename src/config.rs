// config.rs
#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub data_dir: String,
    pub port: u16,
}

impl Config {
    pub fn init() -> Config {
        let supabase_url = read_credential("SUPABASE_URL");
        let supabase_anon_key = read_credential("SUPABASE_ANON_KEY");

        let data_dir = std::env::var("DATA_DIR")
            .unwrap_or_else(|_| ".campus_connect".to_string());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);

        Config {
            supabase_url,
            supabase_anon_key,
            data_dir,
            port,
        }
    }

    /// Decided once at startup; the rest of the system only ever sees the
    /// resulting backend, never this flag.
    pub fn remote_enabled(&self) -> bool {
        self.supabase_url.is_some() && self.supabase_anon_key.is_some()
    }
}

fn read_credential(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty() && v != "undefined" && !v.starts_with("placeholder"))
}
