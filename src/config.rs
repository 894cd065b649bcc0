use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub whois_timeout_seconds: u64,
    pub whois_port: u16,
    pub whois_root_server: String,
    pub max_response_size: usize,
    pub max_referrals: usize,
    pub concurrent_whois_queries: usize,
    pub rdap_enabled: bool,
    pub rdap_base_url: String,
    pub cache_ttl_seconds: u64,
    pub cache_max_entries: u64,
    pub rate_limit_requests: u32,
    pub rate_limit_window_seconds: u64,
    pub start_time: Instant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigData {
    pub port: u16,
    pub whois_timeout_seconds: u64,
    pub whois_port: u16,
    pub whois_root_server: String,
    pub max_response_size: usize,
    pub max_referrals: usize,
    pub concurrent_whois_queries: usize,
    pub rdap_enabled: bool,
    pub rdap_base_url: String,
    pub cache_ttl_seconds: u64,
    pub cache_max_entries: u64,
    pub rate_limit_requests: u32,
    pub rate_limit_window_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let system_info = Self::detect_system_capabilities();

        let mut settings = config::Config::builder()
            .set_default("port", Self::get_default_port())?
            .set_default("whois_timeout_seconds", system_info.default_timeout)?
            .set_default("whois_port", 43_i64)?
            .set_default("whois_root_server", "whois.iana.org")?
            .set_default("max_response_size", system_info.max_response_size as i64)?
            .set_default("max_referrals", system_info.max_referrals as i64)?
            .set_default("concurrent_whois_queries", system_info.concurrent_whois_queries as i64)?
            .set_default("rdap_enabled", true)?
            .set_default("rdap_base_url", "https://rdap.org/")?
            .set_default("cache_ttl_seconds", system_info.cache_ttl)?
            .set_default("cache_max_entries", system_info.cache_max_entries)?
            .set_default("rate_limit_requests", 20_i64)?
            .set_default("rate_limit_window_seconds", 60_i64)?;

        settings = Self::apply_env_overrides(settings)?;

        let config_data: ConfigData = settings.build()?.try_deserialize()?;

        Ok(Config {
            port: config_data.port,
            whois_timeout_seconds: config_data.whois_timeout_seconds,
            whois_port: config_data.whois_port,
            whois_root_server: config_data.whois_root_server,
            max_response_size: config_data.max_response_size,
            max_referrals: config_data.max_referrals,
            concurrent_whois_queries: config_data.concurrent_whois_queries,
            rdap_enabled: config_data.rdap_enabled,
            rdap_base_url: config_data.rdap_base_url,
            cache_ttl_seconds: config_data.cache_ttl_seconds,
            cache_max_entries: config_data.cache_max_entries,
            rate_limit_requests: config_data.rate_limit_requests,
            rate_limit_window_seconds: config_data.rate_limit_window_seconds,
            start_time: Instant::now(),
        })
    }

    fn detect_system_capabilities() -> SystemCapabilities {
        let available_memory = Self::get_available_memory();
        let cpu_cores = Self::get_cpu_cores();
        let is_production = Self::is_production_environment();

        SystemCapabilities {
            default_timeout: if is_production { 15 } else { 10 },
            max_response_size: Self::calculate_max_response_size(available_memory),
            cache_ttl: if is_production { 3600 } else { 600 }, // 1 hour prod, 10 min dev
            cache_max_entries: Self::calculate_cache_size(available_memory),
            max_referrals: if is_production { 3 } else { 1 },
            concurrent_whois_queries: cpu_cores.min(8), // Cap at 8 for network sanity
        }
    }

    fn get_available_memory() -> u64 {
        #[cfg(target_os = "linux")]
        {
            if let Ok(meminfo) = std::fs::read_to_string("/proc/meminfo") {
                for line in meminfo.lines() {
                    if line.starts_with("MemAvailable:") {
                        if let Some(kb) = line.split_whitespace().nth(1) {
                            if let Ok(kb_val) = kb.parse::<u64>() {
                                return kb_val * 1024;
                            }
                        }
                    }
                }
            }
        }

        // Assume 4GB when detection is unavailable
        4 * 1024 * 1024 * 1024
    }

    fn get_cpu_cores() -> usize {
        std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(4)
    }

    fn is_production_environment() -> bool {
        std::env::var("ENVIRONMENT")
            .or_else(|_| std::env::var("ENV"))
            .map(|env| env.to_lowercase() == "production" || env.to_lowercase() == "prod")
            .unwrap_or(false)
    }

    fn calculate_max_response_size(available_memory: u64) -> usize {
        // 0.01% of available memory, between 256KB and 2MB
        let calculated = (available_memory as f64 * 0.0001) as usize;
        calculated.max(256 * 1024).min(2 * 1024 * 1024)
    }

    fn calculate_cache_size(available_memory: u64) -> u64 {
        let gb = available_memory / (1024 * 1024 * 1024);
        match gb {
            0..=2 => 500,
            3..=8 => 2000,
            _ => 5000,
        }
    }

    fn get_default_port() -> u16 {
        std::env::var("PORT")
            .or_else(|_| std::env::var("HTTP_PORT"))
            .or_else(|_| std::env::var("SERVER_PORT"))
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000)
    }

    fn apply_env_overrides(
        mut settings: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let env_mappings = [
            ("PORT", "port"),
            ("WHOIS_TIMEOUT_SECONDS", "whois_timeout_seconds"),
            ("WHOIS_TIMEOUT", "whois_timeout_seconds"),
            ("WHOIS_PORT", "whois_port"),
            ("WHOIS_ROOT_SERVER", "whois_root_server"),
            ("MAX_RESPONSE_SIZE", "max_response_size"),
            ("MAX_REFERRALS", "max_referrals"),
            ("CONCURRENT_WHOIS_QUERIES", "concurrent_whois_queries"),
            ("RDAP_ENABLED", "rdap_enabled"),
            ("RDAP_BASE_URL", "rdap_base_url"),
            ("CACHE_TTL_SECONDS", "cache_ttl_seconds"),
            ("CACHE_TTL", "cache_ttl_seconds"),
            ("CACHE_MAX_ENTRIES", "cache_max_entries"),
            ("CACHE_SIZE", "cache_max_entries"),
            ("RATE_LIMIT_REQUESTS", "rate_limit_requests"),
            ("RATE_LIMIT_WINDOW_SECONDS", "rate_limit_window_seconds"),
        ];

        for (env_var, config_key) in env_mappings {
            if let Ok(value) = std::env::var(env_var) {
                settings = settings.set_override(config_key, value)?;
            }
        }

        Ok(settings)
    }
}

struct SystemCapabilities {
    default_timeout: u64,
    max_response_size: usize,
    cache_ttl: u64,
    cache_max_entries: u64,
    max_referrals: usize,
    concurrent_whois_queries: usize,
}
