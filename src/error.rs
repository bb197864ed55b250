/// Errors that end a capture session
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("could not open TAP device {interface}")]
    DeviceUnavailable {
        interface: String,
        #[source]
        source: tun::Error,
    },
    #[error("read from TAP device failed")]
    ReadFailure(#[source] std::io::Error),
    #[error("write to output failed")]
    Output(#[source] std::io::Error),
    #[error("could not listen for Ctrl-C")]
    Signal(#[source] std::io::Error),
}

/// Errors from interpreting a raw frame
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("truncated frame: {len} bytes, need at least 14")]
    TruncatedFrame { len: usize },
}
