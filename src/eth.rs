use crate::error::DecodeError;

/// Length of an untagged ethernet header on the wire
pub const HEADER_LEN: usize = 14;

pub mod ethtype {
    pub const IPV4: u16 = 0x0800;
    pub const ARP: u16 = 0x0806;
    pub const IPV6: u16 = 0x86dd;
}

/// A 48-bit ethernet MAC address
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Mac6 {
    inner: [u8; 6],
}

impl From<[u8; 6]> for Mac6 {
    fn from(inner: [u8; 6]) -> Self {
        Self { inner }
    }
}

impl std::fmt::Display for Mac6 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut colon = false;
        for val in self.inner.iter() {
            if colon {
                write!(f, ":")?;
            }
            write!(f, "{:02x}", val)?;
            colon = true;
        }
        Ok(())
    }
}

impl Mac6 {
    #[cfg(test)]
    pub const fn as_bytes(&self) -> &[u8] {
        &self.inner
    }
}

/// The protocol carried by a frame, as far as we care to name it
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EtherType {
    Ipv4,
    Ipv6,
    Arp,
    Unknown(u16),
}

impl EtherType {
    pub const fn classify(value: u16) -> Self {
        match value {
            ethtype::IPV4 => Self::Ipv4,
            ethtype::IPV6 => Self::Ipv6,
            ethtype::ARP => Self::Arp,
            other => Self::Unknown(other),
        }
    }

    pub const fn value(self) -> u16 {
        match self {
            Self::Ipv4 => ethtype::IPV4,
            Self::Ipv6 => ethtype::IPV6,
            Self::Arp => ethtype::ARP,
            Self::Unknown(value) => value,
        }
    }
}

impl From<u16> for EtherType {
    fn from(value: u16) -> Self {
        Self::classify(value)
    }
}

impl std::fmt::Display for EtherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ipv4 => write!(f, "IPv4"),
            Self::Ipv6 => write!(f, "IPv6"),
            Self::Arp => write!(f, "ARP"),
            Self::Unknown(value) => write!(f, "0x{value:04x}"),
        }
    }
}

/// The fixed part of an ethernet frame
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct EthHeader {
    /// Destination MAC
    pub dst: Mac6,
    /// source MAC
    pub src: Mac6,
    /// Host order
    pub ethtype: u16,
}

impl EthHeader {
    /// Split a raw frame into its header and payload
    pub fn decode(raw: &[u8]) -> Result<(Self, &[u8]), DecodeError> {
        let Some((header, payload)) = raw.split_first_chunk::<HEADER_LEN>() else {
            return Err(DecodeError::TruncatedFrame { len: raw.len() });
        };

        let mut dst = [0; 6];
        dst.copy_from_slice(&header[0..6]);

        let mut src = [0; 6];
        src.copy_from_slice(&header[6..12]);

        let ethtype = u16::from_be_bytes([header[12], header[13]]);

        Ok((
            Self {
                dst: Mac6::from(dst),
                src: Mac6::from(src),
                ethtype,
            },
            payload,
        ))
    }

    #[cfg(test)]
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0; HEADER_LEN];
        out[0..6].copy_from_slice(self.dst.as_bytes());
        out[6..12].copy_from_slice(self.src.as_bytes());
        out[12..].copy_from_slice(&self.ethtype.to_be_bytes());
        out
    }

    pub const fn label(&self) -> EtherType {
        EtherType::classify(self.ethtype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // mDNS over IPv4, captured off a home network
    const MDNS_FRAME: [u8; 24] = [
        1, 0, 94, 0, 0, 251, 54, 31, 184, 168, 27, 197, 8, 0, 69, 0, 0, 163, 172, 55, 64, 0, 255,
        17,
    ];

    #[test]
    fn decode_basic_frame() {
        let (header, payload) = EthHeader::decode(&MDNS_FRAME).unwrap();

        assert_eq!(header.dst.to_string(), "01:00:5e:00:00:fb");
        assert_eq!(header.src.to_string(), "36:1f:b8:a8:1b:c5");
        assert_eq!(header.ethtype, ethtype::IPV4);
        assert_eq!(header.label(), EtherType::Ipv4);
        assert_eq!(payload, &MDNS_FRAME[14..]);
    }

    #[test]
    fn header_round_trips() {
        let (header, _) = EthHeader::decode(&MDNS_FRAME).unwrap();
        assert_eq!(header.to_bytes(), MDNS_FRAME[..HEADER_LEN]);

        let raw = [
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x02, 0x00, 0x00, 0x00, 0x00, 0x01, 0x86, 0xdd,
        ];
        let (header, payload) = EthHeader::decode(&raw).unwrap();
        assert_eq!(header.to_bytes(), raw);
        assert!(payload.is_empty());
    }

    #[test]
    fn reject_truncated() {
        assert_eq!(
            EthHeader::decode(&MDNS_FRAME[..13]),
            Err(DecodeError::TruncatedFrame { len: 13 })
        );
        assert_eq!(
            EthHeader::decode(&[]),
            Err(DecodeError::TruncatedFrame { len: 0 })
        );
    }

    #[test]
    fn classify_known() {
        assert_eq!(EtherType::classify(0x0800), EtherType::Ipv4);
        assert_eq!(EtherType::classify(0x86dd), EtherType::Ipv6);
        assert_eq!(EtherType::classify(0x0806), EtherType::Arp);
    }

    #[test]
    fn value_inverts_classify() {
        for value in [0x0800, 0x86dd, 0x0806, 0x0000, 0x1234, 0xffff] {
            assert_eq!(EtherType::classify(value).value(), value);
        }
        assert_eq!(EtherType::Ipv6.value(), 0x86dd);
    }

    #[test]
    fn classify_unknown() {
        for value in [0x0000, 0x0042, 0x1234, 0x8100, 0x88cc, 0xffff] {
            let label = EtherType::from(value);
            assert_eq!(label, EtherType::Unknown(value));
        }
        assert_eq!(EtherType::Unknown(0x1234).to_string(), "0x1234");
        assert_eq!(EtherType::Unknown(0x42).to_string(), "0x0042");
        assert_eq!(EtherType::Unknown(0x88cc).to_string(), "0x88cc");
    }

    #[test]
    fn format_mac() {
        assert_eq!(
            Mac6::from([3, 1, 4, 1, 5, 9]).to_string(),
            "03:01:04:01:05:09"
        );
        assert_eq!(
            Mac6::from([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]).to_string(),
            "aa:bb:cc:dd:ee:ff"
        );
    }
}
