use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

use approx::AbsDiffEq;
use geometry::{coarse_eq, Float, EPSILON};

/// Linear RGB colour.  Channels are not clamped, values above 1 are kept
/// until the image is encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Colour {
    pub r: Float,
    pub g: Float,
    pub b: Float,
}

impl Colour {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a colour from its red, green and blue channels
    #[inline]
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }

    /// Colour with every channel equal
    pub fn splat(val: Float) -> Self {
        Self::new(val, val, val)
    }

    /// Array of the [r, g, b] channels
    pub fn to_array(&self) -> [Float; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to 8 bit channels, truncating then clamping each to 0..=255
    pub fn to_rgb8(&self) -> [u8; 3] {
        self.to_array()
            .map(|c| ((c * 255.0) as i64).clamp(0, 255) as u8)
    }
}

impl PartialEq for Colour {
    fn eq(&self, other: &Self) -> bool {
        coarse_eq(self.r, other.r) && coarse_eq(self.g, other.g) && coarse_eq(self.b, other.b)
    }
}

impl AbsDiffEq for Colour {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl Add for Colour {
    type Output = Colour;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Colour::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Colour {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Colour {
    type Output = Colour;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Colour::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<Float> for Colour {
    type Output = Colour;

    #[inline]
    fn mul(self, rhs: Float) -> Self::Output {
        Colour::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

/// Component-wise (hadamard) product, used to filter one colour by another
impl Mul for Colour {
    type Output = Colour;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Colour::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl MulAssign<Float> for Colour {
    #[inline]
    fn mul_assign(&mut self, rhs: Float) {
        *self = *self * rhs;
    }
}
