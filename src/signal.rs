//! WiFi signal quality estimation.

/// Convert an RSSI reading in dBm to a quality percentage in `0..=100`.
///
/// -100 dBm and below map to 0, -50 dBm and above map to 100, with a
/// linear ramp in between. Total over all integers.
pub fn wifi_quality(dbm: i32) -> u8 {
    if dbm <= -100 {
        0
    } else if dbm >= -50 {
        100
    } else {
        (2 * (dbm + 100)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_at_floor() {
        assert_eq!(wifi_quality(-100), 0);
        assert_eq!(wifi_quality(-120), 0);
        assert_eq!(wifi_quality(i32::MIN), 0);
    }

    #[test]
    fn quality_clamps_at_ceiling() {
        assert_eq!(wifi_quality(-50), 100);
        assert_eq!(wifi_quality(-30), 100);
        assert_eq!(wifi_quality(0), 100);
        assert_eq!(wifi_quality(i32::MAX), 100);
    }

    #[test]
    fn quality_is_linear_between_endpoints() {
        assert_eq!(wifi_quality(-99), 2);
        assert_eq!(wifi_quality(-75), 50);
        assert_eq!(wifi_quality(-51), 98);
    }

    #[test]
    fn quality_is_monotonic() {
        let mut prev = wifi_quality(-110);
        for dbm in -110..=-40 {
            let q = wifi_quality(dbm);
            assert!(q >= prev, "quality dropped at {dbm} dBm");
            prev = q;
        }
    }
}
