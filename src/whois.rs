use crate::{
    config::Config,
    errors::RoastError,
    lookup::{parse_registry_date, RegistrationInfo, RegistrationLookup},
};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use publicsuffix::{List, Psl};
use regex::Regex;
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
    sync::{RwLock, Semaphore},
    time::timeout,
};
use tracing::{debug, info, warn};

const READ_CHUNK_SIZE: usize = 8192;
const CONNECT_PROBE_TIMEOUT_SECS: u64 = 5;

// Global PSL instance - shared across all lookups
static PSL: Lazy<List> = Lazy::new(List::new);

// Second-level labels ccTLD registries sell names under (example.co.uk, example.com.au)
const CCTLD_SECOND_LEVELS: [&str; 8] = ["ac", "co", "com", "edu", "gov", "ne", "net", "org"];

// IANA "refer:"/"whois:" lines and registry "Registrar WHOIS Server:" lines
static REFERRAL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:refer|whois|(?:registrar[ \t]+)?whois[ \t]+server)[ \t]*:[ \t]*(\S+)[ \t\r]*$")
        .expect("referral pattern is a valid regex")
});

/// WHOIS over TCP with root-server discovery and registrar referrals.
pub struct WhoisLookup {
    config: Arc<Config>,
    tld_servers: Arc<RwLock<HashMap<String, String>>>,
    query_semaphore: Arc<Semaphore>,
}

impl WhoisLookup {
    pub fn new(config: Arc<Config>) -> Self {
        info!(
            "WhoisLookup initialized (root server {}:{}, {} concurrent queries)",
            config.whois_root_server, config.whois_port, config.concurrent_whois_queries
        );

        Self {
            query_semaphore: Arc::new(Semaphore::new(config.concurrent_whois_queries.max(1))),
            tld_servers: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Registry WHOIS servers only know registered names, not subdomains.
    ///
    /// The list carries no rules, so only the last label counts as a suffix.
    /// A common ccTLD second level such as `co.uk` is widened by one label
    /// so `www.example.co.uk` is queried as `example.co.uk`.
    pub fn registrable_domain(hostname: &str) -> String {
        let domain = PSL
            .domain(hostname.as_bytes())
            .and_then(|d| std::str::from_utf8(d.as_bytes()).ok().map(str::to_string))
            .unwrap_or_else(|| hostname.to_string());

        let mut labels = domain.split('.');
        let (Some(second), Some(tld), None) = (labels.next(), labels.next(), labels.next()) else {
            return domain;
        };
        if tld.len() != 2 || !CCTLD_SECOND_LEVELS.contains(&second) {
            return domain;
        }

        let owner = hostname
            .strip_suffix(domain.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
            .and_then(|rest| rest.rsplit('.').next())
            .filter(|label| !label.is_empty());

        match owner {
            Some(label) => format!("{}.{}", label, domain),
            None => domain,
        }
    }

    async fn find_whois_server(&self, tld: &str) -> Result<String, RoastError> {
        {
            let servers = self.tld_servers.read().await;
            if let Some(server) = servers.get(tld) {
                return Ok(server.clone());
            }
        }

        let server = match self.query_root_server(tld).await {
            Some(server) => server,
            None => {
                let pattern = format!("whois.nic.{}", tld);
                if !self.probe_server(&pattern).await {
                    warn!("Could not discover whois server for TLD: {}", tld);
                    return Err(RoastError::UnsupportedTld(tld.to_string()));
                }
                pattern
            }
        };

        info!("Discovered whois server for {}: {}", tld, server);
        self.tld_servers
            .write()
            .await
            .insert(tld.to_string(), server.clone());

        Ok(server)
    }

    async fn query_root_server(&self, tld: &str) -> Option<String> {
        let root = &self.config.whois_root_server;
        debug!("Querying root server {} for TLD: {}", root, tld);

        match self.query(root, tld).await {
            Ok(response) => extract_referral(&response),
            Err(e) => {
                debug!("Failed to query root server {}: {}", root, e);
                None
            }
        }
    }

    async fn probe_server(&self, server: &str) -> bool {
        let limit = Duration::from_secs(self.config.whois_timeout_seconds.min(CONNECT_PROBE_TIMEOUT_SECS));
        matches!(
            timeout(limit, TcpStream::connect((server, self.config.whois_port))).await,
            Ok(Ok(_))
        )
    }

    async fn query(&self, server: &str, query: &str) -> Result<String, RoastError> {
        let _permit = self
            .query_semaphore
            .acquire()
            .await
            .map_err(|_| RoastError::Internal("Semaphore error".to_string()))?;

        let limit = Duration::from_secs(self.config.whois_timeout_seconds);
        let mut stream = timeout(limit, TcpStream::connect((server, self.config.whois_port))).await??;

        if let Err(e) = stream.set_nodelay(true) {
            debug!("Failed to set TCP_NODELAY: {}", e);
        }

        stream.write_all(format!("{}\r\n", query).as_bytes()).await?;

        let mut buffer = vec![0u8; READ_CHUNK_SIZE];
        let mut response = Vec::new();
        loop {
            let n = timeout(limit, stream.read(&mut buffer)).await??;
            if n == 0 {
                break;
            }
            response.extend_from_slice(&buffer[..n]);
            if response.len() > self.config.max_response_size {
                return Err(RoastError::ResponseTooLarge);
            }
        }

        String::from_utf8(response).map_err(|_| RoastError::InvalidUtf8)
    }

    /// Walk registrar referrals; registry answers win over registrar answers.
    async fn follow_referrals(&self, server: &str, data: &str, domain: &str) -> RegistrationInfo {
        let mut info = parse_whois_response(data);
        let mut current_server = server.to_string();
        let mut current_data = data.to_string();

        for _ in 0..self.config.max_referrals {
            let Some(next) = extract_referral(&current_data) else {
                break;
            };
            if next.eq_ignore_ascii_case(&current_server) {
                break;
            }

            debug!("Following referral from {} to {}", current_server, next);
            match self.query(&next, domain).await {
                Ok(referred) => {
                    info = info.or(parse_whois_response(&referred));
                    current_server = next;
                    current_data = referred;
                }
                Err(e) => {
                    warn!("Failed to query referral server {}: {}", next, e);
                    break;
                }
            }
        }

        info
    }
}

#[async_trait]
impl RegistrationLookup for WhoisLookup {
    async fn lookup(&self, hostname: &str) -> Result<RegistrationInfo, RoastError> {
        let hostname = hostname.trim().trim_end_matches('.').to_lowercase();
        if hostname.is_empty() || !hostname.contains('.') {
            return Err(RoastError::InvalidInput(hostname));
        }

        let domain = Self::registrable_domain(&hostname);
        let tld = domain.rsplit('.').next().unwrap_or(&domain).to_string();

        let server = self.find_whois_server(&tld).await?;
        let raw = self.query(&server, &domain).await?;
        let info = self.follow_referrals(&server, &raw, &domain).await;

        if info.is_empty() {
            return Err(RoastError::NoRegistrationData(domain));
        }
        Ok(info)
    }

    fn source(&self) -> &'static str {
        "whois"
    }
}

/// First referral server named in a WHOIS response, if any.
pub fn extract_referral(data: &str) -> Option<String> {
    REFERRAL_LINE
        .captures_iter(data)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim_start_matches("whois://").trim_end_matches('/'))
        .find(|server| !server.is_empty() && !server.contains("://"))
        .map(str::to_string)
}

/// Pull registrar, creation and expiry out of free-form WHOIS text.
pub fn parse_whois_response(data: &str) -> RegistrationInfo {
    let mut info = RegistrationInfo::default();

    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') || line.starts_with('#') || line.starts_with(">>>") {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        // Order matters: "Registrar Registration Expiration Date" is an expiry
        match key.as_str() {
            k if k.contains("expir") || k.contains("paid-till") => {
                if info.expires.is_none() {
                    info.expires = parse_registry_date(value);
                }
            }
            k if k.contains("creation") || k.contains("created") || k == "registered" => {
                if info.created.is_none() {
                    info.created = parse_registry_date(value);
                }
            }
            k if k.contains("registrar")
                && !k.contains("whois")
                && !k.contains("url")
                && !k.contains("abuse")
                && !k.contains("iana")
                && !k.contains("registration") =>
            {
                if info.registrar.is_none() {
                    info.registrar = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    info
}
