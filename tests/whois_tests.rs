use domain_roaster::{Config, RegistrationLookup, RoastError, WhoisLookup};
use chrono::Datelike;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpListener,
};

const ROOT_ANSWER: &str = "% IANA WHOIS server\n\nrefer:        127.0.0.1\n\ndomain:       COM\n";

const REGISTRY_ANSWER: &str = "   Domain Name: EXAMPLE.COM\r
   Registrar WHOIS Server: localhost\r
   Creation Date: 1995-08-14T04:00:00Z\r
   Registry Expiry Date: 2027-08-13T04:00:00Z\r
";

const REGISTRAR_ANSWER: &str = "Domain Name: example.com\r
Registrar: Example Registrar, LLC\r
Creation Date: 2001-01-01T00:00:00Z\r
";

/// Serves WHOIS answers on an ephemeral port; `answer` maps the query line to a response.
async fn spawn_whois_server<F>(answer: F) -> u16
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let answer = Arc::new(answer);

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let answer = answer.clone();
            tokio::spawn(async move {
                let (read, mut write) = stream.into_split();
                let mut line = String::new();
                if BufReader::new(read).read_line(&mut line).await.is_ok() {
                    let response = answer(line.trim());
                    let _ = write.write_all(response.as_bytes()).await;
                }
                let _ = write.shutdown().await;
            });
        }
    });

    port
}

fn config_for(port: u16) -> Arc<Config> {
    let mut config = Config::load().unwrap();
    config.whois_root_server = "127.0.0.1".to_string();
    config.whois_port = port;
    config.whois_timeout_seconds = 5;
    config.max_referrals = 2;
    Arc::new(config)
}

#[tokio::test]
async fn test_follows_root_and_registrar_referrals() {
    let domain_queries = Arc::new(AtomicUsize::new(0));
    let counter = domain_queries.clone();

    let port = spawn_whois_server(move |query| match query {
        "com" => ROOT_ANSWER.to_string(),
        "example.com" => match counter.fetch_add(1, Ordering::SeqCst) {
            0 => REGISTRY_ANSWER.to_string(),
            _ => REGISTRAR_ANSWER.to_string(),
        },
        _ => "No match\r\n".to_string(),
    })
    .await;

    let lookup = WhoisLookup::new(config_for(port));
    let info = lookup.lookup("www.Example.com").await.unwrap();

    assert_eq!(info.registrar.as_deref(), Some("Example Registrar, LLC"));
    // The registry's dates win over the registrar's
    assert_eq!(info.created.unwrap().year(), 1995);
    assert_eq!(info.expires.unwrap().year(), 2027);
    assert_eq!(domain_queries.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_cctld_second_level_is_queried_whole() {
    let port = spawn_whois_server(|query| match query {
        "uk" => ROOT_ANSWER.to_string(),
        "example.co.uk" => "Domain name:\r\n    example.co.uk\r\nRegistrar: Example UK Ltd\r\n".to_string(),
        _ => "No match\r\n".to_string(),
    })
    .await;

    let lookup = WhoisLookup::new(config_for(port));
    let info = lookup.lookup("www.example.co.uk").await.unwrap();

    assert_eq!(info.registrar.as_deref(), Some("Example UK Ltd"));
}

#[tokio::test]
async fn test_empty_answer_is_no_registration_data() {
    let port = spawn_whois_server(|query| match query {
        "com" => ROOT_ANSWER.to_string(),
        _ => "No match for \"NOPE-NOT-REAL.COM\".\r\n".to_string(),
    })
    .await;

    let lookup = WhoisLookup::new(config_for(port));
    let result = lookup.lookup("nope-not-real.com").await;

    assert!(matches!(result, Err(RoastError::NoRegistrationData(d)) if d == "nope-not-real.com"));
}

#[tokio::test]
async fn test_oversized_answer_is_rejected() {
    let port = spawn_whois_server(|query| match query {
        "com" => ROOT_ANSWER.to_string(),
        _ => "Registrar: Padding Inc.\r\n".repeat(4096),
    })
    .await;

    let mut config = (*config_for(port)).clone();
    config.max_response_size = 1024;
    let lookup = WhoisLookup::new(Arc::new(config));

    assert!(matches!(
        lookup.lookup("example.com").await,
        Err(RoastError::ResponseTooLarge)
    ));
}

#[tokio::test]
async fn test_bare_label_is_invalid() {
    let lookup = WhoisLookup::new(config_for(43));
    assert!(matches!(
        lookup.lookup("localhost").await,
        Err(RoastError::InvalidInput(_))
    ));
}
