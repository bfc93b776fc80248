//! Integration tests for the discovery crawl
//!
//! These tests use wiremock to stand in for investor-relations sites and
//! run the full seed, frontier, persistence and export cycle end-to-end.

use earnings_scout::config::{parse_config, CompanyEntry, CrawlerConfig, FrontierConfig};
use earnings_scout::crawler::{run_crawl, Coordinator, HttpFetcher};
use earnings_scout::storage::{RecordStore, SqliteStorage};
use earnings_scout::{CallType, Quarter};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEED_PAGE: &str = r#"
<html><body>
  <nav><a href="/contact">Contact Us</a></nav>
  <a href="/events/q3-2024-earnings">Q3 2024 Earnings Conference Call</a>
  <a href="/files/q3-2024.mp3">Listen: Q3 2024 Earnings Audio</a>
  <a href="/careers">Careers</a>
</body></html>
"#;

const EVENTS_PAGE: &str = r#"
<html><body>
  <a href="/events/q3-2024-earnings">Q3 2024 Earnings Conference Call</a>
  <a href="/files/q2-2024-transcript.pdf">Q2 2024 Earnings Transcript</a>
  <a href="/video/annual.mp4">Annual Meeting Webcast</a>
</body></html>
"#;

fn fast_crawler() -> CrawlerConfig {
    CrawlerConfig {
        seed_timeout_secs: 2,
        probe_timeout_secs: 1,
        politeness_delay_ms: 0,
        ..CrawlerConfig::default()
    }
}

fn company(ticker: &str, seeds: Vec<String>) -> CompanyEntry {
    CompanyEntry {
        ticker: ticker.to_string(),
        name: format!("{} Corporation", ticker),
        seeds,
    }
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn coordinator() -> Coordinator<HttpFetcher, SqliteStorage> {
    let fetcher = HttpFetcher::new("EarningsScoutTest/1.0").unwrap();
    let store = SqliteStorage::new_in_memory().unwrap();
    Coordinator::new(fetcher, store, fast_crawler(), FrontierConfig::default())
}

#[tokio::test]
async fn test_seed_and_event_page_discovery() {
    let server = MockServer::start().await;
    mount_page(&server, "/investors", SEED_PAGE).await;
    mount_page(&server, "/events", EVENTS_PAGE).await;

    let base = server.uri();
    let mut coordinator = coordinator();
    let report = coordinator
        .run(&[company("ACME", vec![format!("{}/investors", base)])])
        .await
        .unwrap();

    // 2 from the seed, 3 from /events; one URL appears on both pages
    assert_eq!(report.total_discovered(), 5);
    assert_eq!(report.statistics.total, 4);
    assert_eq!(report.statistics.by_ticker.get("ACME"), Some(&4));

    let store = coordinator.store();
    let call = store
        .get_by_url(&format!("{}/events/q3-2024-earnings", base))
        .unwrap()
        .unwrap();
    assert_eq!(call.quarter, Quarter::Q3);
    assert_eq!(call.year, 2024);
    assert_eq!(call.found_on_page, format!("{}/events", base));

    let audio = store
        .get_by_url(&format!("{}/files/q3-2024.mp3", base))
        .unwrap()
        .unwrap();
    assert_eq!(audio.call_type, CallType::Audio);
    assert_eq!(audio.found_on_page, format!("{}/investors", base));

    let transcript = store
        .get_by_url(&format!("{}/files/q2-2024-transcript.pdf", base))
        .unwrap()
        .unwrap();
    assert_eq!(transcript.call_type, CallType::Transcript);
    assert_eq!(transcript.quarter, Quarter::Q2);

    let annual = store
        .get_by_url(&format!("{}/video/annual.mp4", base))
        .unwrap()
        .unwrap();
    assert_eq!(annual.call_type, CallType::Video);
    assert_eq!(annual.quarter, Quarter::Unknown);

    assert!(store
        .get_by_url(&format!("{}/contact", base))
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_every_candidate_path_is_probed_once() {
    let server = MockServer::start().await;
    mount_page(&server, "/ir/home", "<html><body>Nothing here</body></html>").await;

    for candidate in [
        "/events",
        "/events-and-presentations",
        "/webcasts",
        "/earnings",
        "/investor-relations/events",
    ] {
        Mock::given(method("GET"))
            .and(path(candidate))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
    }

    let mut coordinator = coordinator();
    let report = coordinator
        .run(&[company("ACME", vec![format!("{}/ir/home", server.uri())])])
        .await
        .unwrap();

    assert_eq!(report.total_discovered(), 0);
    assert_eq!(report.statistics.total, 0);
    // Expectations are verified when the server drops
}

#[tokio::test]
async fn test_failing_seeds_do_not_stop_the_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_page(&server, "/investors", SEED_PAGE).await;

    let dead = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_addr = dead.local_addr().unwrap();
    drop(dead);

    let mut coordinator = coordinator();
    let report = coordinator
        .run(&[
            company("DEAD", vec![format!("http://{}/investors", dead_addr)]),
            company(
                "ACME",
                vec![
                    format!("{}/broken", server.uri()),
                    format!("{}/investors", server.uri()),
                ],
            ),
        ])
        .await
        .unwrap();

    assert_eq!(report.companies.len(), 2);
    assert_eq!(report.companies[0].discovered, 0);
    assert_eq!(report.companies[1].discovered, 2);
    assert_eq!(report.statistics.total, 2);
    assert_eq!(report.statistics.by_ticker.get("DEAD"), None);
}

#[tokio::test]
async fn test_rerun_is_idempotent() {
    let server = MockServer::start().await;
    mount_page(&server, "/investors", SEED_PAGE).await;
    mount_page(&server, "/events", EVENTS_PAGE).await;

    let companies = [company("ACME", vec![format!("{}/investors", server.uri())])];

    let mut coordinator = coordinator();
    let first = coordinator.run(&companies).await.unwrap();
    let second = coordinator.run(&companies).await.unwrap();

    assert_eq!(first.statistics, second.statistics);
    assert_eq!(second.statistics.ticker_sum(), second.statistics.total);
}

#[tokio::test]
async fn test_run_crawl_from_config_writes_database_and_export() {
    let server = MockServer::start().await;
    mount_page(&server, "/investors", SEED_PAGE).await;
    mount_page(&server, "/webcasts", EVENTS_PAGE).await;
    let empty_site = MockServer::start().await;

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("calls.db");
    let export_path = dir.path().join("calls.json");

    let toml = format!(
        r#"
[crawler]
seed-timeout-secs = 2
probe-timeout-secs = 1
politeness-delay-ms = 0

[output]
database-path = "{db}"
export-path = "{export}"

[[company]]
ticker = "ACME"
name = "Acme Corporation"
seeds = ["{base}/investors"]

[[company]]
ticker = "BETA"
name = "Beta Holdings"
seeds = ["{empty}/missing"]
"#,
        db = db_path.display(),
        export = export_path.display(),
        base = server.uri(),
        empty = empty_site.uri(),
    );
    let config = parse_config(&toml).unwrap();

    let report = run_crawl(&config).await.unwrap();

    assert_eq!(report.statistics.total, 4);
    assert_eq!(report.exported, 4);
    assert_eq!(report.export_path.as_deref(), Some(export_path.as_path()));

    let content = std::fs::read_to_string(&export_path).unwrap();
    let exported: serde_json::Value = serde_json::from_str(&content).unwrap();
    let records = exported.as_array().unwrap();
    assert_eq!(records.len(), 4);

    let first_object = &content[..content.find('}').unwrap()];
    let positions: Vec<usize> = [
        "ticker",
        "company",
        "title",
        "url",
        "call_type",
        "quarter",
        "year",
        "found_on_page",
        "discovered_at",
    ]
    .iter()
    .map(|key| first_object.find(&format!("\"{}\":", key)).unwrap())
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(records.iter().all(|r| r["ticker"] == "ACME"));

    let reopened = SqliteStorage::new(&db_path).unwrap();
    assert_eq!(reopened.statistics().unwrap().total, 4);
}
