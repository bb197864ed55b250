use clap::Parser;

use crate::eth::HEADER_LEN;

/// Print every ethernet frame arriving on a TAP interface
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// TAP interface to attach to
    #[arg(short, long, default_value = "tap0")]
    pub interface: String,

    /// Receive buffer size; longer frames are cut off by the device
    #[arg(
        short,
        long,
        default_value_t = 2048,
        value_parser = clap::value_parser!(u16).range(HEADER_LEN as i64..)
    )]
    pub buffer_size: u16,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
