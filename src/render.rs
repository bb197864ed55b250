use crate::eth::{EthHeader, EtherType};

const BYTES_PER_LINE: usize = 16;

/// A decoded frame, displayed as the human-readable block `tapdump` prints
pub struct Frame<'a> {
    pub header: &'a EthHeader,
    pub label: EtherType,
    pub payload: &'a [u8],
}

impl std::fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:<14} {}", "Source:", self.header.src)?;
        writeln!(f, "{:<14} {}", "Destination:", self.header.dst)?;
        writeln!(f, "{:<14} {}", "Ethertype:", self.label)?;
        writeln!(f, "Payload ({} bytes):", self.payload.len())?;

        for line in self.payload.chunks(BYTES_PER_LINE) {
            write!(f, " ")?;
            for byte in line {
                write!(f, " {byte:02x}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

pub fn render(header: &EthHeader, label: EtherType, payload: &[u8]) -> String {
    Frame {
        header,
        label,
        payload,
    }
    .to_string()
}
