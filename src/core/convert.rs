//! Unit conversion for area columns.

/// Square feet per square metre conversion factor.
pub const SQFT_TO_M2: f64 = 0.092903;

/// Convert an area from square feet to square metres.
pub fn sqft_to_m2(sqft: f64) -> f64 {
    sqft * SQFT_TO_M2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqft_to_m2() {
        assert!((sqft_to_m2(1000.0) - 92.903).abs() < 1e-9);
        assert_eq!(sqft_to_m2(0.0), 0.0);
    }
}
