mod common;

use common::{queued_entry, valid_submit_args, TestEnv};
use serde_json::Value;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn run_json_api_err(env: &TestEnv, base: &str, args: &[&str]) -> Value {
    let out = env
        .cmd()
        .arg("--json")
        .arg("--api-base")
        .arg(base)
        .args(args)
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("error json output")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn submit_delivers_and_starts_the_cooldown() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "sub-42"})))
        .mount(&server)
        .await;

    let env = TestEnv::new();
    let args = valid_submit_args("1500000");
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

    let out = env.run_json_api(&server.uri(), &arg_refs);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["status"], "delivered");
    assert_eq!(out["data"]["serverId"], "sub-42");
    let token = out["data"]["claimToken"].as_str().expect("claim token");
    assert_eq!(token.len(), 36);

    let cooldown = env.run_json(&["cooldown"]);
    let remaining = cooldown["data"]["remainingMs"].as_u64().expect("ms");
    assert!(remaining > 0 && remaining <= 30_000, "remaining {remaining}");

    let err = run_json_api_err(&env, &server.uri(), &arg_refs);
    assert_eq!(err["error"]["code"], "COOLDOWN_ACTIVE");

    let list = env.run_json(&["queue", "list"]);
    assert_eq!(list["data"].as_array().expect("array").len(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failed_deliveries_are_parked_in_the_queue() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let env = TestEnv::new();
    let args = valid_submit_args("1500000");
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

    let out = env.run_json_api(&server.uri(), &arg_refs);
    assert_eq!(out["ok"], true, "queued submissions still succeed");
    assert_eq!(out["data"]["status"], "queued");
    assert!(out["data"]["serverId"].is_null());
    let token = out["data"]["claimToken"].as_str().expect("claim token");

    let list = env.run_json(&["queue", "list"]);
    let entries = list["data"].as_array().expect("array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["claimToken"], token);
    assert!(entries[0]["queuedAt"].as_u64().expect("queuedAt") > 0);

    env.clear_cooldown();
    let args = valid_submit_args("2000000");
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let out = env.run_json_api(&server.uri(), &arg_refs);
    assert_eq!(out["data"]["status"], "queued");

    let list = env.run_json(&["queue", "list"]);
    assert_eq!(list["data"].as_array().expect("array").len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn retry_empties_the_queue_once_the_endpoint_recovers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "ok"})))
        .expect(3)
        .mount(&server)
        .await;

    let env = TestEnv::new();
    env.write_queue(&[
        queued_entry(1_000_000.0, "tok-a"),
        queued_entry(2_000_000.0, "tok-b"),
        queued_entry(3_000_000.0, "tok-c"),
    ]);

    let retry = env.run_json_api(&server.uri(), &["queue", "retry"]);
    assert_eq!(retry["data"]["sent"], 3);
    assert_eq!(retry["data"]["failed"], 0);

    let list = env.run_json(&["queue", "list"]);
    assert_eq!(list["data"].as_array().expect("array").len(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn retry_keeps_only_the_still_failing_entry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .and(body_partial_json(serde_json::json!({"salaryAmount": 2_000_000.0})))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "ok"})))
        .mount(&server)
        .await;

    let env = TestEnv::new();
    env.write_queue(&[
        queued_entry(1_000_000.0, "tok-a"),
        queued_entry(2_000_000.0, "tok-b"),
        queued_entry(3_000_000.0, "tok-c"),
    ]);

    let retry = env.run_json_api(&server.uri(), &["queue", "retry"]);
    assert_eq!(retry["data"]["sent"], 2);
    assert_eq!(retry["data"]["failed"], 1);

    let list = env.run_json(&["queue", "list"]);
    let entries = list["data"].as_array().expect("array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["claimToken"], "tok-b");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn directory_listing_merges_fetched_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/companies"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!(["Globex", "Acme"])),
        )
        .mount(&server)
        .await;

    let env = TestEnv::new();
    let companies = env.run_json_api(&server.uri(), &["companies"]);
    let names = companies["data"].as_array().expect("array");
    assert!(names.iter().any(|n| n == "Acme"));
    assert!(names.iter().any(|n| n == "Globex"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn roles_fall_back_to_known_defaults_when_the_api_is_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let env = TestEnv::new();
    let roles = env.run_json_api(&server.uri(), &["roles"]);
    let names = roles["data"].as_array().expect("array");
    assert!(names.iter().any(|n| n == "Backend"));
    assert!(names.iter().any(|n| n == "DevOps"));
}
