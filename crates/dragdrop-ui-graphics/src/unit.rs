//! Unit types: Dp and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dp_scales_with_density() {
        assert_eq!(Dp(64.0).to_px(2.5), 160.0);
        assert_eq!(Dp(10.0).to_px(1.0), 10.0);
    }
}
