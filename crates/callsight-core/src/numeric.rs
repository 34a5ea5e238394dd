/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(-0.6789, 3), -0.679);
        assert_eq!(round_to(72.25, 1), 72.3);
        assert_eq!(round_to(5.0, 0), 5.0);
    }
}
