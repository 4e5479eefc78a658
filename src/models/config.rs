use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub token: String,
    pub cmd_prefix: String,
    #[serde(default)]
    pub minecraft: MinecraftConfig
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MinecraftConfig {
    // Without the trailing slash, the host gets appended.
    pub aggregator_url: String,
    pub query_timeout_ms: u64,
    pub lookup_timeout_ms: u64,
    pub hosting_brands: Vec<HostingBrand>,
    pub hosting_ip_prefixes: Vec<HostingPrefix>
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostingBrand {
    pub pattern: String,
    pub label: String
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostingPrefix {
    pub prefix: String,
    pub label: String
}

impl HostingBrand {
    fn new(pattern: &str, label: &str) -> Self {
        HostingBrand { pattern: pattern.to_string(), label: label.to_string() }
    }
}

impl HostingPrefix {
    fn new(prefix: &str, label: &str) -> Self {
        HostingPrefix { prefix: prefix.to_string(), label: label.to_string() }
    }
}

impl Default for MinecraftConfig {
    fn default() -> Self {
        // These prefixes are guesses at best, override them in config.json.
        MinecraftConfig {
            aggregator_url: "https://api.mcsrvstat.us/2".to_string(),
            query_timeout_ms: 6000,
            lookup_timeout_ms: 3000,
            hosting_brands: vec![
                HostingBrand::new("aternos", "Aternos (free)"),
                HostingBrand::new("minehut", "Minehut"),
                HostingBrand::new("shockbyte", "Shockbyte"),
                HostingBrand::new("pebblehost", "PebbleHost"),
                HostingBrand::new("mchost", "MCHost")
            ],
            hosting_ip_prefixes: vec![
                HostingPrefix::new("51.", "OVH or Hetzner (Europe)"),
                HostingPrefix::new("104.", "Cloud Provider / CDN"),
                HostingPrefix::new("172.", "Cloud Provider / CDN"),
                HostingPrefix::new("35.", "Cloud Provider / CDN")
            ]
        }
    }
}
