use core::fmt;

/// Numeric firmware version as reported to the home control server.
///
/// Encoded as `MMmm`: 1000 is major 10, minor 00. The server keeps its own copy of
/// this number, so both sides must be bumped together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FirmwareVersion(u16);

impl FirmwareVersion {
    pub const fn new(raw: u16) -> Self {
        FirmwareVersion(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn major(self) -> u16 {
        self.0 / 100
    }

    pub const fn minor(self) -> u16 {
        self.0 % 100
    }

    /// Returns true if self is strictly greater than other.
    pub fn is_newer_than(&self, other: &FirmwareVersion) -> bool {
        self > other
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major(), self.minor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_minor_split() {
        let v = FirmwareVersion::new(1000);
        assert_eq!(v.major(), 10);
        assert_eq!(v.minor(), 0);

        let v = FirmwareVersion::new(1);
        assert_eq!(v.major(), 0);
        assert_eq!(v.minor(), 1);
    }

    #[test]
    fn test_ordering() {
        let old = FirmwareVersion::new(1001);
        let new = FirmwareVersion::new(1100);
        assert!(new.is_newer_than(&old));
        assert!(!old.is_newer_than(&new));
        assert!(!old.is_newer_than(&old));
        assert!(FirmwareVersion::new(2).is_newer_than(&FirmwareVersion::new(1)));
        // minor rolls over into major
        assert!(FirmwareVersion::new(1100).is_newer_than(&FirmwareVersion::new(1099)));
        assert!(FirmwareVersion::new(1100) > FirmwareVersion::new(1099));
    }

    #[test]
    fn test_display() {
        assert_eq!(FirmwareVersion::new(1000).to_string(), "10.00");
        assert_eq!(FirmwareVersion::new(1203).to_string(), "12.03");
        assert_eq!(FirmwareVersion::new(1).to_string(), "0.01");
    }
}
