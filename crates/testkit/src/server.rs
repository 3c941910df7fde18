use crate::fixtures::fatal;
use axum::http::StatusCode;
use axum::Router;
use bytes::Bytes;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::thread::JoinHandle;
use tokio::sync::oneshot;
use tracing::{debug, error};

/// HTTP server answering every request with `200 OK` and a fixed body.
///
/// Runs on its own thread with a current-thread runtime, so it can be used
/// from both `#[test]` and `#[tokio::test]`. Dropping the server shuts it down
/// and waits for the thread to exit.
pub struct TestServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Starts a server on an ephemeral loopback port.
    pub fn start(data: impl Into<String>) -> Self {
        TestServerBuilder::new(data).build()
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!(addr = %self.addr, "Test server thread panicked");
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.stop();
    }
}

pub struct TestServerBuilder {
    body: Bytes,
    host: IpAddr,
    port: u16,
}

impl TestServerBuilder {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            body: Bytes::from(data.into()),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
        }
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    /// Fixed port, e.g. from [`get_int_port`](crate::get_int_port). Defaults to an ephemeral port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn build(self) -> TestServer {
        let bind_addr = SocketAddr::new(self.host, self.port);

        let listener = std::net::TcpListener::bind(bind_addr)
            .unwrap_or_else(|e| fatal("bind test server", e));
        listener
            .set_nonblocking(true)
            .unwrap_or_else(|e| fatal("configure test server socket", e));
        let addr = listener
            .local_addr()
            .unwrap_or_else(|e| fatal("read test server address", e));

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap_or_else(|e| fatal("build test server runtime", e));

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app = fixed_body_router(self.body);

        let handle = std::thread::Builder::new()
            .name(format!("test-server-{}", addr.port()))
            .spawn(move || {
                runtime.block_on(async move {
                    let listener = match tokio::net::TcpListener::from_std(listener) {
                        Ok(listener) => listener,
                        Err(e) => {
                            error!(addr = %addr, error = %e, "Test server listener setup failed");
                            return;
                        }
                    };

                    let server = axum::serve(listener, app).with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    });

                    if let Err(e) = server.await {
                        error!(addr = %addr, error = %e, "Test server failed");
                    }
                });
                debug!(addr = %addr, "Test server stopped");
            })
            .unwrap_or_else(|e| fatal("spawn test server", e));

        debug!(addr = %addr, "Test server started");

        TestServer {
            addr,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }
}

fn fixed_body_router(body: Bytes) -> Router {
    Router::new().fallback(move || {
        let body = body.clone();
        async move { (StatusCode::OK, body) }
    })
}
