pub(crate) fn to_u16(a: u8, b: u8) -> u16 {
    ((a as u16) << 8) + (b as u16)
}

pub(crate) fn calc_distance(b0: u8, b1: u8) -> u16 {
    to_u16(b1 & crate::constants::SAMPLE_DISTANCE_HIGH_MASK, b0)
}

pub(crate) fn calc_rpm(b0: u8, b1: u8) -> f64 {
    (to_u16(b1, b0) as f64) / crate::constants::SPEED_SCALE
}

pub(crate) fn to_string(data: &[u8]) -> String {
    data.iter()
        .map(|e| format!("{:02X}", e))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_u16() {
        assert_eq!(to_u16(0x03, 0x98), 0x0398);
        assert_eq!(to_u16(0x00, 0xFF), 0x00FF);
    }

    #[test]
    fn test_calc_distance() {
        assert_eq!(calc_distance(0x10, 0x02), 528);
        // flag bits never leak into the distance
        assert_eq!(calc_distance(0xFF, 0xFF), 0x3FFF);
        assert_eq!(calc_distance(0x10, 0x42), 528);
    }

    #[test]
    fn test_calc_rpm() {
        assert_eq!(calc_rpm(0x98, 0x03), 14.375);
        assert_eq!(calc_rpm(0x00, 0x4B), 300.);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(to_string(&[0xFA, 0xA0, 0x05]), "FA A0 05");
    }
}
