//! Change notification listener.
//!
//! Subscribes to the server's event stream on a background task, parses the
//! `text/event-stream` wire format incrementally, and forwards movie change
//! notifications over a channel. A broken or rejected subscription is
//! retried after a doubling delay; stream failures are logged, never
//! surfaced to consumers.

use std::time::Duration;

use futures_util::StreamExt;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::ClientConfig;
use crate::errors::ApiError;

/// Ceiling for the reconnect delay.
const MAX_RETRY: Duration = Duration::from_secs(30);

/// What kind of movie change the server announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Created => "movie-created",
            ChangeKind::Updated => "movie-updated",
            ChangeKind::Deleted => "movie-deleted",
        }
    }

    /// Map an event name from the stream; unrelated events yield `None`.
    pub fn from_event_name(name: &str) -> Option<Self> {
        match name {
            "movie-created" => Some(ChangeKind::Created),
            "movie-updated" => Some(ChangeKind::Updated),
            "movie-deleted" => Some(ChangeKind::Deleted),
            _ => None,
        }
    }
}

/// A change notification received from the server.
///
/// `data` carries the event payload as-is. The server happens to send the
/// record id, but the payload is advisory: consumers re-fetch the page
/// instead of patching local state from it.
#[derive(Debug, Clone)]
pub struct RemoteChange {
    pub kind: ChangeKind,
    pub data: String,
}

/// One parsed server-sent event.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SseFrame {
    event: Option<String>,
    data: String,
}

/// Incremental parser for the `text/event-stream` wire format.
///
/// Bytes are buffered until a full line is available, so frames split
/// across read chunks (including mid-character) parse correctly. Comment
/// lines and fields other than `event:` and `data:` are ignored; multiple
/// `data:` lines are joined with `\n`; a blank line dispatches the frame.
#[derive(Debug, Default)]
struct SseParser {
    buf: Vec<u8>,
    event: Option<String>,
    data: Vec<String>,
}

impl SseParser {
    fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of bytes; returns every frame the chunk completed.
    fn push(&mut self, chunk: &[u8]) -> Vec<SseFrame> {
        self.buf.extend_from_slice(chunk);
        let mut frames = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.buf.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
            if let Some(frame) = self.take_line(line) {
                frames.push(frame);
            }
        }
        frames
    }

    fn take_line(&mut self, line: &str) -> Option<SseFrame> {
        if line.is_empty() {
            return self.dispatch();
        }
        if line.starts_with(':') {
            return None;
        }
        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };
        match field {
            "event" => self.event = Some(value.to_string()),
            "data" => self.data.push(value.to_string()),
            _ => {}
        }
        None
    }

    fn dispatch(&mut self) -> Option<SseFrame> {
        if self.event.is_none() && self.data.is_empty() {
            return None;
        }
        let frame = SseFrame {
            event: self.event.take(),
            data: self.data.join("\n"),
        };
        self.data.clear();
        Some(frame)
    }
}

/// How one subscription attempt ended.
enum StreamEnd {
    /// Shutdown was requested
    Stopped,
    /// All receivers of the change channel are gone
    ReceiverGone,
    /// Connect failed or the stream broke; `connected` says whether the
    /// subscription was established first
    Disconnected { connected: bool },
}

/// Handle for the background event subscription task.
///
/// Dropping the receiver returned by [`spawn`](Self::spawn) stops the task
/// at the next received event; dropping the listener itself aborts the task
/// outright; [`shutdown`](Self::shutdown) stops it promptly and waits for
/// it to finish. After teardown no further notifications are delivered.
pub struct EventListener {
    handle: Option<JoinHandle<()>>,
    stop: watch::Sender<bool>,
}

impl EventListener {
    /// Start the subscription task and hand back the change channel.
    ///
    /// The task uses its own HTTP client with only a connect timeout; a
    /// per-request timeout would sever the long-lived stream between
    /// events.
    pub fn spawn(
        config: &ClientConfig,
    ) -> Result<(Self, mpsc::UnboundedReceiver<RemoteChange>), ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        let url = format!("{}/events", config.base_url);
        let retry = config.events_retry;
        let (tx, rx) = mpsc::unbounded_channel();
        let (stop, stopped) = watch::channel(false);

        let handle = tokio::spawn(subscribe_loop(http, url, retry, tx, stopped));

        Ok((
            Self {
                handle: Some(handle),
                stop,
            },
            rx,
        ))
    }

    /// Stop the task and wait for it to finish.
    pub async fn shutdown(mut self) {
        let _ = self.stop.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

async fn subscribe_loop(
    http: reqwest::Client,
    url: String,
    initial_retry: Duration,
    tx: mpsc::UnboundedSender<RemoteChange>,
    mut stopped: watch::Receiver<bool>,
) {
    let mut retry = initial_retry;
    loop {
        match subscribe_once(&http, &url, &tx, &mut stopped).await {
            StreamEnd::Stopped | StreamEnd::ReceiverGone => return,
            StreamEnd::Disconnected { connected } => {
                if connected {
                    retry = initial_retry;
                }
            }
        }
        tokio::select! {
            _ = stopped.changed() => return,
            _ = tokio::time::sleep(retry) => {}
        }
        retry = (retry * 2).min(MAX_RETRY);
    }
}

async fn subscribe_once(
    http: &reqwest::Client,
    url: &str,
    tx: &mpsc::UnboundedSender<RemoteChange>,
    stopped: &mut watch::Receiver<bool>,
) -> StreamEnd {
    let request = http
        .get(url)
        .header(reqwest::header::ACCEPT, "text/event-stream");

    let resp = tokio::select! {
        _ = stopped.changed() => return StreamEnd::Stopped,
        resp = request.send() => resp,
    };

    let resp = match resp {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!("Event stream connect failed: {}", err);
            return StreamEnd::Disconnected { connected: false };
        }
    };
    if !resp.status().is_success() {
        tracing::warn!("Event stream rejected with status {}", resp.status());
        return StreamEnd::Disconnected { connected: false };
    }

    tracing::debug!("Event stream connected");
    let mut stream = resp.bytes_stream();
    let mut parser = SseParser::new();

    loop {
        let chunk = tokio::select! {
            _ = stopped.changed() => return StreamEnd::Stopped,
            chunk = stream.next() => chunk,
        };
        let chunk = match chunk {
            Some(Ok(chunk)) => chunk,
            Some(Err(err)) => {
                tracing::warn!("Event stream read failed: {}", err);
                return StreamEnd::Disconnected { connected: true };
            }
            None => {
                tracing::debug!("Event stream closed by server");
                return StreamEnd::Disconnected { connected: true };
            }
        };
        for frame in parser.push(&chunk) {
            let kind = frame.event.as_deref().and_then(ChangeKind::from_event_name);
            if let Some(kind) = kind {
                let change = RemoteChange {
                    kind,
                    data: frame.data,
                };
                if tx.send(change).is_err() {
                    return StreamEnd::ReceiverGone;
                }
            }
        }
    }
}
