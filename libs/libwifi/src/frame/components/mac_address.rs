use std::fmt;

use rand::{thread_rng, RngCore};

/// This is our representation of a MAC-address
///
/// ```
/// use libwifi::frame::components::MacAddress;
///
/// let address = MacAddress([255, 255, 255, 255, 255, 255]);
/// assert!(address.is_broadcast());
/// assert_eq!(address.to_string(), "ff:ff:ff:ff:ff:ff");
/// ```
///
#[derive(Clone, Debug, Default, Eq, PartialEq, Copy, Hash, Ord, PartialOrd)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// Generate string with upper case hex digits.
    pub fn to_long_string(&self) -> String {
        format!(
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5],
        )
    }

    /// Generate a random, locally administered mac that addresses a single, real device.
    pub fn random() -> Self {
        loop {
            let mut mac = MacAddress::zeroed();
            thread_rng().fill_bytes(&mut mac.0);
            // Unicast and locally administered.
            mac.0[0] = (mac.0[0] & 0xFE) | 0x02;
            if mac.is_real_device() {
                return mac;
            }
        }
    }

    pub fn broadcast() -> Self {
        MacAddress([255, 255, 255, 255, 255, 255])
    }

    pub fn zeroed() -> Self {
        MacAddress([0, 0, 0, 0, 0, 0])
    }

    /// Encode mac address for network.
    pub fn encode(&self) -> [u8; 6] {
        self.0
    }

    /// Check if this is a private address (locally set bit)
    pub fn is_private(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Check if this is a multicast address
    pub fn is_mcast(&self) -> bool {
        self.0[0] % 2 == 1
    }

    /// Check whether this MAC addresses the whole network.
    pub fn is_broadcast(&self) -> bool {
        self.0 == [255, 255, 255, 255, 255, 255]
    }

    /// Check whether this is a group address.
    /// Group addresses start with 01:80:C2::0/24.
    pub fn is_groupcast(&self) -> bool {
        self.0[0] == 1 && self.0[1] == 128 && self.0[2] == 194
    }

    /// The 01:00:5e::0/18 space is reserved for ipv4 multicast
    pub fn is_ipv4_multicast(&self) -> bool {
        self.0[0] == 1 && self.0[1] == 0 && self.0[2] == 94
    }

    /// The 33:33::0/24 space is reserved for ipv6 multicast
    pub fn is_ipv6_multicast(&self) -> bool {
        self.0[0] == 51 && self.0[1] == 51
    }

    /// A helper function to check whether the mac address is an actual device or just some kind of
    /// "meta" mac address.
    pub fn is_real_device(&self) -> bool {
        !(self.is_ipv6_multicast()
            || self.is_broadcast()
            || self.is_ipv4_multicast()
            || self.is_groupcast()
            || self.is_mcast()
            || *self == MacAddress::zeroed())
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5],
        )
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(bytes: [u8; 6]) -> Self {
        MacAddress(bytes)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MacParseError {
    InvalidDigit,
    InvalidLength,
}

impl fmt::Display for MacParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacParseError::InvalidDigit => write!(f, "Invalid hex digit in mac address"),
            MacParseError::InvalidLength => write!(f, "A mac address consists of 6 bytes"),
        }
    }
}

impl std::error::Error for MacParseError {}

impl std::str::FromStr for MacAddress {
    type Err = MacParseError;

    /// Accepts `aa:bb:cc:dd:ee:ff`, `aa-bb-cc-dd-ee-ff` and `aabbccddeeff`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input_lower = input.to_lowercase();
        let bytes: Vec<&str> = if input_lower.contains(':') {
            input_lower.split(':').collect()
        } else if input_lower.contains('-') {
            input_lower.split('-').collect()
        } else if input_lower.len() == 12 && input_lower.is_ascii() {
            (0..12).step_by(2).map(|i| &input_lower[i..i + 2]).collect()
        } else {
            return Err(MacParseError::InvalidLength);
        };

        if bytes.len() != 6 {
            return Err(MacParseError::InvalidLength);
        }

        let mut array = [0u8; 6];
        for (count, byte) in bytes.iter().enumerate() {
            if byte.len() != 2 || !byte.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(MacParseError::InvalidDigit);
            }
            array[count] = u8::from_str_radix(byte, 16).map_err(|_| MacParseError::InvalidDigit)?;
        }

        Ok(MacAddress(array))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_formats() {
        let expected = MacAddress([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]);

        assert_eq!("00:1a:2b:3c:4d:5e".parse::<MacAddress>(), Ok(expected));
        assert_eq!("00-1A-2B-3C-4D-5E".parse::<MacAddress>(), Ok(expected));
        assert_eq!("001a2b3c4d5e".parse::<MacAddress>(), Ok(expected));
    }

    #[test]
    fn test_from_str_errors() {
        assert_eq!(
            "00:1a:2b:3c:4d".parse::<MacAddress>(),
            Err(MacParseError::InvalidLength)
        );
        assert_eq!(
            "00:1a:2b:3c:4d:zz".parse::<MacAddress>(),
            Err(MacParseError::InvalidDigit)
        );
        assert_eq!("001a2b".parse::<MacAddress>(), Err(MacParseError::InvalidLength));
        assert_eq!(
            "+f:00:00:00:00:00".parse::<MacAddress>(),
            Err(MacParseError::InvalidDigit)
        );
        assert_eq!("+f0000000000".parse::<MacAddress>(), Err(MacParseError::InvalidDigit));
    }

    #[test]
    fn test_display_round_trip() {
        let mac = MacAddress([0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]);
        assert_eq!(mac.to_string(), "de:ad:be:ef:00:01");
        assert_eq!(mac.to_long_string(), "DE:AD:BE:EF:00:01");
        assert_eq!(mac.to_string().parse::<MacAddress>(), Ok(mac));
    }

    #[test]
    fn test_random_is_real_device() {
        for _ in 0..32 {
            let mac = MacAddress::random();
            assert!(mac.is_real_device());
            assert!(!mac.is_mcast());
            assert!(mac.is_private());
        }
    }
}
