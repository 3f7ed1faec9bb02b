use serial_test::serial;
use staybot_cli::logging::LogCapture;
use staybot_cli::run;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

fn clear_env() {
    for key in [
        "STAYBOT_CONFIG",
        "STAYBOT_SEED",
        "STAYBOT_TIME_BUDGET",
        "STAYBOT_LOG_PATH",
    ] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

#[test]
fn eval_prints_rank() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["staybot", "eval", "5c", "6d", "7h", "8s", "9c"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    let s = String::from_utf8_lossy(&out);
    assert!(s.contains("Rank: Straight (9)"), "{s}");
}

#[test]
fn eval_rejects_eight_cards() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["staybot", "eval", "2c", "3c", "4c", "5c", "6c", "7c", "8c", "9c"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("5 to 7 cards"));
}

#[test]
fn bench_reports_throughput() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["staybot", "bench", "--trials", "100"], &mut out, &mut err);
    assert_eq!(code, 0);
    assert!(String::from_utf8_lossy(&out).contains("Benchmark: 100 trials"));
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    assert_eq!(run(["staybot", "cfg"], &mut out, &mut err), 0);
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["time_budget_secs"]["value"], 9.5);
    assert_eq!(json["time_budget_secs"]["source"], "default");
    assert!(json["seed"]["value"].is_null());
    assert!(err.is_empty());
}

#[test]
#[serial]
fn cfg_precedence_env_over_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("staybot.toml");
    std::fs::write(
        &cfg_path,
        "time_budget_secs = 1.5\nseed = 456\nlog_path = \"d.jsonl\"\n",
    )
    .unwrap();
    unsafe {
        std::env::set_var("STAYBOT_CONFIG", &cfg_path);
        std::env::set_var("STAYBOT_SEED", "789");
    }
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["staybot", "cfg"], &mut out, &mut err);
    clear_env();
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["time_budget_secs"]["value"], 1.5);
    assert_eq!(json["time_budget_secs"]["source"], "file");
    assert_eq!(json["seed"]["value"], 789);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["log_path"]["value"], "d.jsonl");
    assert_eq!(json["log_path"]["source"], "file");
}

#[test]
#[serial]
fn cfg_reports_missing_config_file() {
    clear_env();
    unsafe {
        std::env::set_var("STAYBOT_CONFIG", "/nonexistent/staybot.toml");
    }
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["staybot", "cfg"], &mut out, &mut err);
    clear_env();
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("Configuration error"));
}

#[test]
#[serial]
fn decision_summary_is_logged() {
    clear_env();
    let capture = LogCapture::new();
    let registry = Registry::default().with(capture.clone().into_layer::<Registry>());

    let code = tracing::subscriber::with_default(registry, || {
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        run(
            [
                "staybot", "decide", "--hole", "Ah", "Kd", "--seed", "3", "--budget", "0.02",
            ],
            &mut out,
            &mut err,
        )
    });
    assert_eq!(code, 0);

    let entries = capture.entries();
    let summary = entries
        .iter()
        .find(|e| e.message.contains("decision complete"))
        .expect("decision summary event");
    assert_eq!(summary.level, tracing::Level::INFO);
    assert!(summary.target.starts_with("staybot_engine"));
    for field in ["trials", "stay_win_rate", "fold_win_rate", "choice"] {
        assert!(
            summary.fields.iter().any(|(k, _)| k == field),
            "missing field {field}"
        );
    }
}
