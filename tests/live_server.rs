//! End-to-end tests against a server bound to a real socket.

use serde_json::Value;
use std::collections::HashSet;

mod common;

#[tokio::test]
async fn test_serves_over_tcp() {
    let (addr, shutdown) = common::start_server().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .post(format!("http://{}/v1/notifier/sms/send", addr))
        .body("to=+15550100&message=hello")
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/json");
    assert_eq!(res.text().await.unwrap(), r#"{"response":{"status":"success"}}"#);

    let res = client
        .get(format!("http://{}/does/not/exist", addr))
        .send()
        .await
        .unwrap();
    assert_ne!(res.status(), 200);

    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let (addr, shutdown) = common::start_server().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let client = client.clone();
        let url = format!("http://{}/masterdata/identity-schema", addr);
        handles.push(tokio::spawn(async move {
            client.get(url).send().await.unwrap().bytes().await.unwrap()
        }));
    }

    let mut bodies = HashSet::new();
    for handle in handles {
        bodies.insert(handle.await.unwrap());
    }
    assert_eq!(bodies.len(), 1, "identical requests must give identical bodies");

    let mut otps = Vec::new();
    for _ in 0..5 {
        let doc: Value = client
            .get(format!("http://{}/v1/otpmanager/otp/generate", addr))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        otps.push(doc["response"]["otp"].as_str().unwrap().to_string());
    }
    assert!(otps.iter().all(|code| code.len() == 6));

    shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown_stops_accepting() {
    let (addr, shutdown) = common::start_server().await;
    shutdown.trigger();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let result = client
        .get(format!("http://{}/v1/auditmanager/audits", addr))
        .send()
        .await;
    assert!(result.is_err());
}
