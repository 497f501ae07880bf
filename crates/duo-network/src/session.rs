//! Per-peer session state: a socket address and a write FIFO. The
//! FIFO is an unbounded channel drained by a dedicated writer task —
//! a queued write is appended if one is already in flight, otherwise
//! the task picks it straight off the channel.

use bytes::Bytes;
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A connected peer: its outbound write queue and the task draining it.
pub struct Session {
    write_tx: mpsc::UnboundedSender<Bytes>,
    writer_task: JoinHandle<()>,
}

impl Session {
    /// Spawn the writer task that owns `write_half` and drains `rx`
    /// in order until the channel closes or a write fails.
    pub(crate) fn spawn(peer_addr: String, mut write_half: OwnedWriteHalf) -> Self {
        let (write_tx, mut write_rx) = mpsc::unbounded_channel::<Bytes>();

        let writer_task = tokio::spawn(async move {
            while let Some(bytes) = write_rx.recv().await {
                if let Err(e) = write_half.write_all(&bytes).await {
                    tracing::warn!(peer = %peer_addr, error = %e, "write failed, closing session");
                    break;
                }
            }
        });

        Session {
            write_tx,
            writer_task,
        }
    }

    /// Enqueue `bytes` on this session's write FIFO. Fails only if the
    /// writer task has already exited (session is dead).
    pub(crate) fn enqueue(&self, bytes: Bytes) -> bool {
        self.write_tx.send(bytes).is_ok()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.writer_task.abort();
    }
}
