use std::fmt;

/// The DNS query/record types the resolver understands on the wire.
///
/// Only `A` and `AAAA` carry block-action synthesis semantics; every
/// other type is forwarded, cached and synthesized-around identically
/// but never gets a redirect answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    NS,
    SOA,
    PTR,
    SRV,
    /// Anything this resolver doesn't special-case; carries the raw
    /// numeric type so cache keys stay distinct and forwarding stays
    /// transparent.
    Other(u16),
}

impl RecordType {
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => RecordType::A,
            28 => RecordType::AAAA,
            5 => RecordType::CNAME,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            2 => RecordType::NS,
            6 => RecordType::SOA,
            12 => RecordType::PTR,
            33 => RecordType::SRV,
            other => RecordType::Other(other),
        }
    }

    pub fn to_u16(self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::AAAA => 28,
            RecordType::CNAME => 5,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::NS => 2,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::SRV => 33,
            RecordType::Other(value) => value,
        }
    }

    pub fn is_a(self) -> bool {
        matches!(self, RecordType::A)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => write!(f, "A"),
            RecordType::AAAA => write!(f, "AAAA"),
            RecordType::CNAME => write!(f, "CNAME"),
            RecordType::MX => write!(f, "MX"),
            RecordType::TXT => write!(f, "TXT"),
            RecordType::NS => write!(f, "NS"),
            RecordType::SOA => write!(f, "SOA"),
            RecordType::PTR => write!(f, "PTR"),
            RecordType::SRV => write!(f, "SRV"),
            RecordType::Other(value) => write!(f, "TYPE{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_known_types() {
        for rt in [
            RecordType::A,
            RecordType::AAAA,
            RecordType::CNAME,
            RecordType::MX,
            RecordType::TXT,
            RecordType::NS,
            RecordType::SOA,
            RecordType::PTR,
            RecordType::SRV,
        ] {
            assert_eq!(RecordType::from_u16(rt.to_u16()), rt);
        }
    }

    #[test]
    fn unknown_type_preserves_numeric_value() {
        let rt = RecordType::from_u16(999);
        assert_eq!(rt.to_u16(), 999);
        assert!(matches!(rt, RecordType::Other(999)));
    }
}
