#![allow(dead_code)]

use flate2::{write::GzEncoder, Compression};
use reqwest::Client;
use std::{collections::HashMap, io::Write, sync::Arc};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

/// Canned responses keyed by request path. Unknown paths answer 404.
#[derive(Default)]
pub struct Routes(HashMap<String, (u16, Vec<u8>)>);

impl Routes {
    pub fn ok(mut self, path: &str, body: impl Into<Vec<u8>>) -> Self {
        self.0.insert(path.to_string(), (200, body.into()));
        self
    }

    pub fn status(mut self, path: &str, code: u16, body: impl Into<Vec<u8>>) -> Self {
        self.0.insert(path.to_string(), (code, body.into()));
        self
    }
}

/// Serve `routes` on an ephemeral localhost port for the rest of the test.
/// Returns the base URL, e.g. `http://127.0.0.1:41234`.
pub async fn serve(routes: Routes) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes = Arc::new(routes.0);

    tokio::spawn(async move {
        while let Ok((mut sock, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut req = Vec::new();
                let mut buf = [0u8; 4096];
                loop {
                    match sock.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => req.extend_from_slice(&buf[..n]),
                    }
                    if req.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let head = String::from_utf8_lossy(&req);
                let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
                let (code, body) = routes
                    .get(&path)
                    .cloned()
                    .unwrap_or((404, b"not found".to_vec()));
                let reason = match code {
                    200 => "OK",
                    404 => "Not Found",
                    500 => "Internal Server Error",
                    _ => "Unknown",
                };
                let resp = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    code,
                    reason,
                    body.len()
                );
                let _ = sock.write_all(resp.as_bytes()).await;
                let _ = sock.write_all(&body).await;
                let _ = sock.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

/// A client that never routes localhost through a proxy from the environment.
pub fn client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
