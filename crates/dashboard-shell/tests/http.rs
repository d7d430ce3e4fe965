// File: crates/dashboard-shell/tests/http.rs
// Purpose: HttpDataSource against a local one-shot HTTP hub: decoding, status and payload errors.

use std::time::Duration;

use chart_core::{ChartConfig, ChartError, Container};
use dashboard_shell::{Client, DataSource, HttpDataSource, Shell, ShellConfig, ShellError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

type Route = (&'static str, u16, &'static str);

/// Serve fixed `(path, status, body)` routes; anything else is a 404.
async fn hub(routes: Vec<Route>) -> HttpDataSource {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        while let Ok((mut sock, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                while read < buf.len() {
                    let n = sock.read(&mut buf[read..]).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    read += n;
                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                let request = String::from_utf8_lossy(&buf[..read]).to_string();
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                let (status, body) = routes
                    .iter()
                    .find(|(p, _, _)| *p == path)
                    .map(|&(_, s, b)| (s, b))
                    .unwrap_or((404, "{\"code\":404,\"message\":\"NOT_FOUND\"}"));
                let reason = if status == 200 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = sock.write_all(response.as_bytes()).await;
                let _ = sock.shutdown().await;
            });
        }
    });
    let cfg = ShellConfig::new(format!("http://{addr}"), Duration::from_secs(5)).expect("config");
    HttpDataSource::new(&cfg).expect("http client")
}

const CLIENTS: &str = "{\"clients\":[{\"address\":\"10.0.0.5:51234\",\"id\":1},{\"address\":\"10.0.0.9:40100\",\"id\":7}]}";

#[tokio::test]
async fn client_list_envelope_is_decoded() {
    let source = hub(vec![("/api/clients", 200, CLIENTS)]).await;
    let clients = source.list_clients().await.expect("clients");
    assert_eq!(clients, vec![Client::new(1, "10.0.0.5:51234"), Client::new(7, "10.0.0.9:40100")]);
}

#[tokio::test]
async fn samples_keep_hub_order() {
    let source = hub(vec![("/api/proxy/1", 200, "[[180,40],[120,null],[60,20]]")]).await;
    let samples = source.get_samples(1).await.expect("samples");
    let ts: Vec<i64> = samples.iter().map(|s| s.unix_seconds()).collect();
    assert_eq!(ts, vec![180, 120, 60]);
    assert_eq!(samples[1].value, None);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let source = hub(vec![("/api/proxy/1", 400, "{\"code\":400,\"message\":\"Invalid ID Format\"}")]).await;

    match source.get_samples(9).await {
        Err(ShellError::Status { url, status }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/api/proxy/9"), "{url}");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    assert!(matches!(source.get_samples(1).await, Err(ShellError::Status { status: 400, .. })));
}

#[tokio::test]
async fn malformed_bodies_are_payload_errors() {
    let source = hub(vec![("/api/clients", 200, "{\"clients\": 3}"), ("/api/proxy/1", 200, "[[0]]")]).await;

    let err = source.list_clients().await.unwrap_err();
    assert!(matches!(err, ShellError::Payload(ChartError::InvalidInput(_))), "{err}");
    let err = source.get_samples(1).await.unwrap_err();
    assert!(matches!(err, ShellError::Payload(ChartError::InvalidInput(_))), "{err}");
}

#[tokio::test]
async fn shell_navigates_over_http() {
    let source = hub(vec![
        ("/api/clients", 200, CLIENTS),
        ("/api/proxy/1", 200, "[[180,40],[120,null],[60,20],[0,10]]"),
    ])
    .await;
    let mut shell = Shell::new(source, ChartConfig::default());
    let mut container = Container::new("container");

    shell.refresh_clients(&mut container).await.expect("refresh");
    assert_eq!(container.elements().count(), 2);

    shell.select_client(1, &mut container).await.expect("select");
    let g = container.graphics().next().expect("chart mounted");
    assert_eq!(chart_core::svg::path_data(&g.line), "M40,335L233.333,300M620,230Z");
}
