use crate::error::CaptureError;
use crate::eth::EthHeader;
use crate::render::render;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

/// Anything that hands out one raw ethernet frame per read
pub trait FrameSource {
    /// Wait for the next frame, copy it into `buf` and return its length
    fn recv(&mut self, buf: &mut [u8]) -> impl Future<Output = std::io::Result<usize>>;
}

/// A TAP interface that already exists on the host
pub struct TapSource {
    dev: tun::AsyncDevice,
}

impl TapSource {
    /// Attach to `interface` in L2 mode
    ///
    /// The device has to be created and brought up beforehand, e.g. with
    /// `ip tuntap add dev tap0 mode tap && ip link set dev tap0 up`.
    pub fn open(interface: &str) -> Result<Self, CaptureError> {
        let mut config = tun::Configuration::default();
        config.tun_name(interface).layer(tun::Layer::L2);

        let dev = tun::create_as_async(&config).map_err(|source| {
            CaptureError::DeviceUnavailable {
                interface: interface.to_string(),
                source,
            }
        })?;
        info!(interface, "attached to TAP device");

        Ok(Self { dev })
    }
}

impl FrameSource for TapSource {
    async fn recv(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.dev.recv(buf).await
    }
}

/// Read, decode and print frames until something breaks
///
/// Only returns on error. Frames too short to hold a header are reported and
/// skipped.
pub async fn run(
    source: &mut impl FrameSource,
    mut out: impl AsyncWrite + Unpin,
    buffer_size: usize,
) -> Result<(), CaptureError> {
    let mut buf = vec![0; buffer_size];

    loop {
        let len = source.recv(&mut buf).await.map_err(|err| {
            error!(%err, "read failed");
            CaptureError::ReadFailure(err)
        })?;

        let text = describe(&buf[..len]);
        out.write_all(text.as_bytes())
            .await
            .map_err(CaptureError::Output)?;
        out.flush().await.map_err(CaptureError::Output)?;
    }
}

/// Drive `capture` until `interrupt` fires
///
/// An interrupt is a clean stop. If the interrupt source itself fails, that
/// is an error, not a stop.
pub async fn until_interrupted(
    capture: impl Future<Output = Result<(), CaptureError>>,
    interrupt: impl Future<Output = std::io::Result<()>>,
) -> Result<(), CaptureError> {
    tokio::select! {
        res = capture => res,
        res = interrupt => {
            res.map_err(CaptureError::Signal)?;
            info!("interrupted, shutting down");
            Ok(())
        }
    }
}

fn describe(frame: &[u8]) -> String {
    let mut text = format!("Received {} bytes:\n", frame.len());

    match EthHeader::decode(frame) {
        Ok((header, payload)) => {
            let label = header.label();
            debug!(
                len = frame.len(),
                ethertype = label.value(),
                %label,
                "decoded frame"
            );
            text.push_str(&render(&header, label, payload));
        }
        Err(err) => {
            warn!(%err, "skipping frame");
            text.push_str(&format!(
                "Truncated frame ({} bytes), skipped\n",
                frame.len()
            ));
        }
    }

    text.push('\n');
    text
}
