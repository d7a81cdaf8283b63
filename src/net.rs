//! Snapshot of the WiFi station state consumed by the renderers.
//!
//! The renderers never talk to the network stack directly: the tick task
//! hands them a [`NetSnapshot`] that the WiFi task refreshes periodically.
//! Absent data renders as defaults (zero address, empty strings) rather
//! than as an error.

use core::net::Ipv4Addr;

use crate::config::NET_NAME_CAPACITY;
use crate::signal::wifi_quality;

/// Fixed-capacity string for hostnames and SSIDs.
pub type NetName = heapless::String<NET_NAME_CAPACITY>;

/// Point-in-time view of the station: address, names and signal strength.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetSnapshot {
    /// Local IPv4 address, `0.0.0.0` until DHCP completes.
    pub ip: Ipv4Addr,
    /// Device hostname, possibly empty.
    pub hostname: NetName,
    /// Network name of the associated AP, possibly empty.
    pub ssid: NetName,
    /// Received signal strength in dBm.
    pub rssi_dbm: i32,
}

impl NetSnapshot {
    pub const fn new() -> Self {
        Self {
            ip: Ipv4Addr::UNSPECIFIED,
            hostname: NetName::new(),
            ssid: NetName::new(),
            rssi_dbm: -100,
        }
    }

    /// Signal quality percentage derived from the current RSSI.
    pub fn quality(&self) -> u8 {
        wifi_quality(self.rssi_dbm)
    }
}

impl Default for NetSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_has_zero_address_and_no_signal() {
        let net = NetSnapshot::default();
        assert_eq!(net.ip, Ipv4Addr::UNSPECIFIED);
        assert!(net.hostname.is_empty());
        assert!(net.ssid.is_empty());
        assert_eq!(net.quality(), 0);
    }

    #[test]
    fn quality_tracks_rssi() {
        let mut net = NetSnapshot::new();
        net.rssi_dbm = -75;
        assert_eq!(net.quality(), 50);
        net.rssi_dbm = -50;
        assert_eq!(net.quality(), 100);
    }
}
