//! The TCP peer manager: a listener, an outbound dialer, and a
//! session map keyed by peer IP. All session-map mutations go through
//! a single mutex; reads and writes on an individual session's
//! socket happen off that lock, in per-session tasks.

use crate::error::{NetworkError, NetworkResult};
use crate::session::Session;
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Bytes read per inbound `read` call, delivered to the receive
/// callback with no framing applied.
const READ_CHUNK_SIZE: usize = 4096;

/// A `(peer_ip, bytes)` delivery sink, invoked for every inbound read.
pub type ReceiveCallback = Arc<dyn Fn(String, Vec<u8>) + Send + Sync>;

/// Owns the listener, the outbound dialer, and every live session.
pub struct PeerManager {
    sessions: Mutex<HashMap<String, Session>>,
    callback: Mutex<Option<ReceiveCallback>>,
    accept_task: Mutex<Option<JoinHandle<()>>>,
}

impl Default for PeerManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PeerManager {
    /// An idle manager with no listener and no sessions yet.
    pub fn new() -> Self {
        PeerManager {
            sessions: Mutex::new(HashMap::new()),
            callback: Mutex::new(None),
            accept_task: Mutex::new(None),
        }
    }

    /// Install the `(ip, bytes)` delivery sink invoked on every
    /// inbound read, replacing any previous callback.
    pub fn set_receive_callback(&self, callback: ReceiveCallback) {
        *self.callback.lock() = Some(callback);
    }

    /// Bind a listener on `port` and spawn its accept loop.
    pub async fn start(self: &Arc<Self>, port: u16) -> NetworkResult<()> {
        let listener = TcpListener::bind(("0.0.0.0", port)).await?;
        tracing::info!(port, "peer manager listening");

        let this = Arc::clone(self);
        let task = tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((stream, addr)) => this.adopt_stream(stream, addr.ip().to_string()),
                    Err(e) => {
                        tracing::warn!(error = %e, "accept failed");
                    }
                }
            }
        });
        *self.accept_task.lock() = Some(task);
        Ok(())
    }

    /// Stop the accept loop. Existing sessions are left running; drop
    /// the manager to tear them down too.
    pub fn stop(&self) {
        if let Some(task) = self.accept_task.lock().take() {
            task.abort();
        }
    }

    /// Dial `ip:port`; on success install a session in the map keyed
    /// by `ip`.
    pub async fn connect_to_peer(self: &Arc<Self>, ip: &str, port: u16) -> NetworkResult<()> {
        let addr: SocketAddr = format!("{ip}:{port}")
            .parse()
            .map_err(|_| NetworkError::ConnectionFailed {
                addr: format!("{ip}:{port}"),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "bad peer address"),
            })?;

        let stream = TcpStream::connect(addr)
            .await
            .map_err(|source| NetworkError::ConnectionFailed {
                addr: addr.to_string(),
                source,
            })?;

        self.adopt_stream(stream, ip.to_string());
        Ok(())
    }

    /// Enqueue `bytes` on the named peer's write FIFO. Returns false
    /// if no session is registered under `ip`.
    pub fn send_data(&self, ip: &str, bytes: Bytes) -> bool {
        match self.sessions.lock().get(ip) {
            Some(session) => session.enqueue(bytes),
            None => false,
        }
    }

    /// Enqueue `bytes` on every registered session.
    pub fn broadcast_data(&self, bytes: Bytes) {
        let sessions = self.sessions.lock();
        for session in sessions.values() {
            session.enqueue(bytes.clone());
        }
    }

    /// Current number of registered sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.lock().len()
    }

    fn adopt_stream(self: &Arc<Self>, stream: TcpStream, ip: String) {
        let (mut read_half, write_half) = stream.into_split();
        let session = Session::spawn(ip.clone(), write_half);
        self.sessions.lock().insert(ip.clone(), session);

        let this = Arc::clone(self);
        tokio::spawn(async move {
            let mut buf = vec![0u8; READ_CHUNK_SIZE];
            loop {
                match read_half.read(&mut buf).await {
                    Ok(0) => {
                        tracing::debug!(peer = %ip, "peer closed connection");
                        break;
                    }
                    Ok(n) => {
                        if let Some(cb) = this.callback.lock().clone() {
                            cb(ip.clone(), buf[..n].to_vec());
                        }
                    }
                    Err(e) => {
                        tracing::warn!(peer = %ip, error = %e, "read failed, closing session");
                        break;
                    }
                }
            }
            // Sessions that error are not removed from the map here,
            // matching the source: `send_data` to a dead peer will
            // enqueue onto a writer task that has already exited.
        });
    }
}
