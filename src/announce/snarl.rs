//! Snarl announcer - SNP 1.1 over TCP
//!
//! Every send opens its own connection, writes one line, and closes. Nothing
//! is read back, nothing is retried, and no timeout is set beyond the
//! platform default.

use super::announcer::Announcer;
use super::error::AnnounceError;
use super::icon::{IconProvider, NoIcon};
use super::snp::{SnpMessage, ICON_SIZE, SNARL_PORT};
use std::io::{self, LineWriter, Write};
use std::net::{IpAddr, Ipv4Addr, Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::Arc;

const LOOPBACK: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Snarl notification client
pub struct Snarl {
    icons: Arc<dyn IconProvider>,
    host: Option<String>,
    port: u16,
}

impl Snarl {
    pub fn new(icons: Arc<dyn IconProvider>) -> Self {
        Self {
            icons,
            host: None,
            port: SNARL_PORT,
        }
    }

    /// Host used by `Announcer::send` instead of loopback
    pub fn with_host(mut self, host: Option<String>) -> Self {
        self.host = host.filter(|h| !h.is_empty());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Encode `title`/`message` with the current 32x32 icon
    pub fn format_message(&self, title: &str, message: &str) -> String {
        SnpMessage::new(title, message)
            .with_icon(self.icons.icon(ICON_SIZE, ICON_SIZE))
            .encode()
    }

    /// Send to a host name. Every resolved address is tried in order until one
    /// accepts the connection.
    pub fn send_to_host(&self, host: &str, title: &str, message: &str) -> Result<(), AnnounceError> {
        let addrs = resolve(host, self.port)?;
        let stream = connect(host, &addrs)?;
        deliver(stream, &self.format_message(title, message))
    }

    /// Send to `host` on the configured port
    pub fn send_to(&self, host: IpAddr, title: &str, message: &str) -> Result<(), AnnounceError> {
        let stream = connect(&host.to_string(), &[SocketAddr::new(host, self.port)])?;
        deliver(stream, &self.format_message(title, message))
    }
}

impl Default for Snarl {
    fn default() -> Self {
        Self::new(Arc::new(NoIcon))
    }
}

impl Announcer for Snarl {
    fn name(&self) -> &str {
        "snarl"
    }

    fn send(&self, title: &str, message: &str) -> Result<(), AnnounceError> {
        match self.host.as_deref() {
            Some(host) => self.send_to_host(host, title, message),
            None => self.send_to(LOOPBACK, title, message),
        }
    }
}

/// Every address `host` resolves to, in resolver order
fn resolve(host: &str, port: u16) -> Result<Vec<SocketAddr>, AnnounceError> {
    let resolution_error = |source| AnnounceError::HostResolution {
        host: host.to_string(),
        source,
    };

    let addrs: Vec<SocketAddr> = (host, port).to_socket_addrs().map_err(resolution_error)?.collect();
    if addrs.is_empty() {
        return Err(resolution_error(io::Error::new(io::ErrorKind::NotFound, "no addresses")));
    }
    Ok(addrs)
}

/// Connect to the first address that accepts.
///
/// `Unavailable` only when every address refused; any other connect failure
/// is reported as `Transport`.
fn connect(host: &str, addrs: &[SocketAddr]) -> Result<TcpStream, AnnounceError> {
    let mut refused = None;
    let mut failed = None;

    for addr in addrs {
        match TcpStream::connect(addr) {
            Ok(stream) => return Ok(stream),
            Err(e) if e.kind() == io::ErrorKind::ConnectionRefused => refused = Some(e),
            Err(e) => failed = Some(e),
        }
    }

    match (failed, refused) {
        (Some(e), _) => Err(AnnounceError::transport(e)),
        (None, Some(e)) => Err(AnnounceError::Unavailable {
            service: "Snarl",
            detail: format!("Snarl is not running on host {}.", host),
            source: e,
        }),
        (None, None) => Err(AnnounceError::transport(io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            "no address to connect to",
        ))),
    }
}

/// Write one line and close. The writer is released before the socket, on
/// every path.
fn deliver(stream: TcpStream, line: &str) -> Result<(), AnnounceError> {
    let written = {
        let mut writer = LineWriter::new(&stream);
        writer.write_all(line.as_bytes()).and_then(|()| writer.flush())
    };
    let closed = close(&stream);
    drop(stream);

    finish(written, closed)
}

fn close(stream: &TcpStream) -> io::Result<()> {
    match stream.shutdown(Shutdown::Both) {
        // Peer already went away; the socket is released on drop either way
        Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
        other => other,
    }
}

/// A close failure wins over a write failure; the write failure is kept as `suppressed`.
fn finish(written: io::Result<()>, closed: io::Result<()>) -> Result<(), AnnounceError> {
    match (written, closed) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(write_err), Ok(())) => Err(AnnounceError::transport(write_err)),
        (written, Err(close_err)) => Err(AnnounceError::Transport {
            source: close_err,
            suppressed: written.err(),
        }),
    }
}
