//! FIX logon session client
//!
//! One authentication attempt owns one TCP stream. The lifecycle is
//! `Disconnected → Connecting → AwaitingReply → Authenticated | Failed`:
//! `connect` opens the transport (covering the first two phases, which
//! end when it returns), `submit_logon` writes the Logon message and
//! consults the first reply frame, and only its tag 35 decides the
//! outcome. Subsequent traffic on the transport is outside this machine.
//!
//! Session-initiation policy: explicit submit. The transport is opened
//! eagerly by `connect`, but no Logon is written until the caller
//! submits credentials. (The alternative policy observed in the wild,
//! writing the Logon inside the connect callback, is deliberately not
//! implemented; see DESIGN.md.)
//!
//! Both the connect and the await-reply phases are bounded by the
//! configured timeout instead of stalling indefinitely.

use fix_codec::{FixError, FixMessage, RawFix, MSG_TYPE_LOGON};
use std::io;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Transport endpoint and phase deadline for one logon attempt.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub host: String,
    pub port: u16,
    /// Applied independently to the connect and await-reply phases.
    pub timeout: Duration,
}

impl SessionConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Observable session phase. The presentation layer must be able to
/// tell "still connecting" apart from "failed"; this is the signal it
/// derives that from.
///
/// The disconnected and connecting phases of the lifecycle have no
/// variant here: a `SessionClient` only exists once `connect` has
/// returned, so while `connect` is in flight the caller's pending
/// future is the "connecting" signal, and before/after the client's
/// lifetime there is no session to observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingReply,
    Authenticated,
    Failed,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("transport error: {0}")]
    Transport(#[from] io::Error),

    #[error("session timed out")]
    Timeout,

    #[error(transparent)]
    Codec(#[from] FixError),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("logon already submitted for this session")]
    AlreadySubmitted,
}

/// Client side of one logon attempt.
///
/// The TCP stream lives exactly as long as this value; dropping it on
/// any exit path closes the transport, and at most one terminal outcome
/// is ever delivered.
#[derive(Debug)]
pub struct SessionClient {
    stream: TcpStream,
    state: SessionState,
    timeout: Duration,
}

impl SessionClient {
    /// Open the transport. `Disconnected → Connecting → AwaitingReply`.
    pub async fn connect(config: &SessionConfig) -> Result<Self, SessionError> {
        let addr = format!("{}:{}", config.host, config.port);
        tracing::debug!(%addr, "connecting FIX session");

        let stream = timeout(config.timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| SessionError::Timeout)??;

        Ok(Self {
            stream,
            state: SessionState::AwaitingReply,
            timeout: config.timeout,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Write the Logon message and consult the first reply frame.
    ///
    /// Exactly one outward message per session: a second submit is
    /// rejected with `AlreadySubmitted`. Tag 35 of the first reply
    /// decides the outcome; `"A"` authenticates, anything else (or a
    /// transport error, or silence past the deadline) fails the session.
    pub async fn submit_logon(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        if self.state != SessionState::AwaitingReply {
            return Err(SessionError::AlreadySubmitted);
        }

        let logon = FixMessage::logon(username, password).encode()?;
        if let Err(e) = self.stream.write_all(logon.as_bytes()).await {
            self.state = SessionState::Failed;
            return Err(e.into());
        }

        let reply = match self.read_first_reply().await {
            Ok(reply) => reply,
            Err(e) => {
                self.state = SessionState::Failed;
                return Err(e);
            }
        };

        match reply.msg_type() {
            Some(MSG_TYPE_LOGON) => {
                self.state = SessionState::Authenticated;
                tracing::info!(%username, "FIX logon accepted");
                Ok(())
            }
            other => {
                self.state = SessionState::Failed;
                tracing::warn!(%username, msg_type = ?other, "FIX logon rejected");
                Err(SessionError::AuthenticationFailed)
            }
        }
    }

    async fn read_first_reply(&mut self) -> Result<RawFix, SessionError> {
        let mut buf = [0u8; 4096];
        let n = timeout(self.timeout, self.stream.read(&mut buf))
            .await
            .map_err(|_| SessionError::Timeout)??;
        if n == 0 {
            return Err(SessionError::Transport(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "peer closed before replying",
            )));
        }
        let raw = String::from_utf8_lossy(&buf[..n]);
        Ok(RawFix::decode(&raw)?)
    }

    /// Tear down the transport. State is frozen; no further outcome can
    /// be delivered after this.
    pub fn close(self) {
        drop(self.stream);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// One-shot FIX peer: accepts a connection, hands the inbound bytes
    /// back over the channel, replies with the given payload. Asserting
    /// on the inbound happens in the test body, not in the peer task,
    /// so a mismatch fails the test instead of panicking a detached
    /// task.
    async fn spawn_fix_peer(
        reply: &'static str,
    ) -> (SessionConfig, tokio::sync::oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = tokio::sync::oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let n = socket.read(&mut buf).await.unwrap();
            let _ = tx.send(String::from_utf8_lossy(&buf[..n]).into_owned());
            socket.write_all(reply.as_bytes()).await.unwrap();
        });
        (SessionConfig::new("127.0.0.1", port), rx)
    }

    #[tokio::test]
    async fn logon_accept_reply_authenticates() {
        let (config, inbound) = spawn_fix_peer("8=FIX.4.2\x0135=A\x0110=000\x01").await;
        let mut session = SessionClient::connect(&config).await.unwrap();
        assert_eq!(session.state(), SessionState::AwaitingReply);

        session.submit_logon("alice", "hunter2").await.unwrap();
        assert_eq!(session.state(), SessionState::Authenticated);
        assert_eq!(
            inbound.await.unwrap(),
            "8=FIX.4.2\x0135=A\x01553=alice\x01554=hunter2\x0110=000\x01"
        );
    }

    #[tokio::test]
    async fn non_logon_reply_fails_the_session() {
        let (config, _inbound) = spawn_fix_peer("8=FIX.4.2\x0135=3\x0110=000\x01").await;
        let mut session = SessionClient::connect(&config).await.unwrap();

        let err = session.submit_logon("alice", "wrong").await.unwrap_err();
        assert!(matches!(err, SessionError::AuthenticationFailed));
        assert_eq!(session.state(), SessionState::Failed);
    }

    #[tokio::test]
    async fn peer_hangup_before_reply_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            // drop the socket without replying
        });

        let config = SessionConfig::new("127.0.0.1", port);
        let mut session = SessionClient::connect(&config).await.unwrap();
        let err = session.submit_logon("alice", "hunter2").await.unwrap_err();
        assert!(matches!(err, SessionError::Transport(_)));
        assert_eq!(session.state(), SessionState::Failed);
    }

    #[tokio::test]
    async fn silent_peer_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            // hold the socket open without replying
            tokio::time::sleep(Duration::from_secs(60)).await;
        });

        let config =
            SessionConfig::new("127.0.0.1", port).with_timeout(Duration::from_millis(100));
        let mut session = SessionClient::connect(&config).await.unwrap();
        let err = session.submit_logon("alice", "hunter2").await.unwrap_err();
        assert!(matches!(err, SessionError::Timeout));
    }

    #[tokio::test]
    async fn second_submit_is_rejected() {
        let (config, _inbound) = spawn_fix_peer("8=FIX.4.2\x0135=A\x0110=000\x01").await;
        let mut session = SessionClient::connect(&config).await.unwrap();
        session.submit_logon("alice", "hunter2").await.unwrap();

        let err = session.submit_logon("alice", "hunter2").await.unwrap_err();
        assert!(matches!(err, SessionError::AlreadySubmitted));
        assert_eq!(session.state(), SessionState::Authenticated);
    }

    #[tokio::test]
    async fn connect_refused_is_a_transport_error() {
        // bind and immediately drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = SessionConfig::new("127.0.0.1", port);
        let err = SessionClient::connect(&config).await.unwrap_err();
        assert!(matches!(err, SessionError::Transport(_)));
    }
}
