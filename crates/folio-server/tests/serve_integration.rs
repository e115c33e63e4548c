//! End-to-end tests against a bound portfolio server.

use std::fs;
use std::net::SocketAddr;

use folio_server::{PortfolioServer, ServerConfig};
use tempfile::TempDir;
use tokio::net::TcpListener;

struct RunningServer {
    _root: TempDir,
    addr: SocketAddr,
}

impl RunningServer {
    async fn start(files: &[(&str, &[u8])]) -> Self {
        let root = tempfile::tempdir().expect("create tempdir");
        for (name, bytes) in files {
            fs::write(root.path().join(name), bytes).expect("write fixture");
        }

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let config = ServerConfig {
            base_dir: root.path().to_path_buf(),
            port: addr.port(),
            ..Default::default()
        };
        tokio::spawn(PortfolioServer::new(config).serve(listener));

        Self { _root: root, addr }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

#[tokio::test]
async fn streams_image_bytes() {
    let image: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
    let server = RunningServer::start(&[("profilepic.jpg", image.as_slice())]).await;

    let response = reqwest::get(server.url("/profilepic.jpg")).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "image/jpeg");
    assert_eq!(response.bytes().await.unwrap().as_ref(), image.as_slice());
}

#[tokio::test]
async fn missing_image_returns_404() {
    let server = RunningServer::start(&[]).await;

    let response = reqwest::get(server.url("/missing.png")).await.unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(response.text().await.unwrap(), "Image not found");
}

#[tokio::test]
async fn root_serves_portfolio_page() {
    let server = RunningServer::start(&[]).await;

    let response = reqwest::get(server.url("/")).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "text/html");

    let html = response.text().await.unwrap();
    assert!(html.contains("<title>Allan Paul | Portfolio</title>"));
    assert!(html.contains(r#"<img id="hanapp-slideshow" src="hackathoncert.jpg""#));
}

#[tokio::test]
async fn unknown_routes_fall_through_to_page() {
    let server = RunningServer::start(&[]).await;
    let client = reqwest::Client::new();

    for path in ["/about", "/anything.html", "/deeply/nested/route"] {
        let response = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(response.status(), 200, "{path}");

        let html = response.text().await.unwrap();
        assert_eq!(html.matches("<h1>Allan Paul Permejo</h1>").count(), 1, "{path}");
    }
}
