use std::ops::{Index, IndexMut, Mul, MulAssign};

use approx::AbsDiffEq;

use crate::{Float, GeometryError, EPSILON};

/// 4 by 4 floating point matrix, stored as rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4x4 {
    pub data: [[Float; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4x4 {
    pub const IDENTITY: Self = Self {
        data: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create a new matrix, [row1, row2, ..]
    pub const fn new(data: [[Float; 4]; 4]) -> Self {
        Self { data }
    }

    /// Construct a matrix [row1, row2, ...]
    pub fn from_array(data: &[Float; 16]) -> Self {
        Self {
            data: [
                [data[0], data[1], data[2], data[3]],
                [data[4], data[5], data[6], data[7]],
                [data[8], data[9], data[10], data[11]],
                [data[12], data[13], data[14], data[15]],
            ],
        }
    }

    /// Get the transpose of the matrix
    #[rustfmt::skip]
    pub fn transpose(&self) -> Self {
        Self::new([
            [self.data[0][0], self.data[1][0], self.data[2][0], self.data[3][0]],
            [self.data[0][1], self.data[1][1], self.data[2][1], self.data[3][1]],
            [self.data[0][2], self.data[1][2], self.data[2][2], self.data[3][2]],
            [self.data[0][3], self.data[1][3], self.data[2][3], self.data[3][3]],
        ])
    }

    /// Calculate the determinant of this 4x4 matrix by cofactor expansion
    /// along the first row
    pub fn determinant(&self) -> Float {
        fn det2(mat: [&[Float]; 2]) -> Float {
            mat[0][0] * mat[1][1] - mat[0][1] * mat[1][0]
        }
        fn det3(mat: [[Float; 3]; 3]) -> Float {
            mat[0][0] * det2([&mat[1][1..=2], &mat[2][1..=2]])
                - mat[0][1] * det2([&[mat[1][0], mat[1][2]], &[mat[2][0], mat[2][2]]])
                + mat[0][2] * det2([&mat[1][0..=1], &mat[2][0..=1]])
        }

        self[0][0] * det3(self.minor([1, 2, 3])) - self[0][1] * det3(self.minor([0, 2, 3]))
            + self[0][2] * det3(self.minor([0, 1, 3]))
            - self[0][3] * det3(self.minor([0, 1, 2]))
    }

    /// Get the 3*3 minor of the matrix, rows 1,2,3 (excluding 0)
    /// with the supplied columns
    fn minor(&self, cols: [usize; 3]) -> [[Float; 3]; 3] {
        let mut res = [[0.0; 3]; 3];

        for row in 1..4 {
            for (&col, res_col) in cols.iter().zip(0..3) {
                res[row - 1][res_col] = self[row][col]
            }
        }

        res
    }

    /// Calculate the inverse of the matrix, mat ^ -1
    ///
    /// Uses the closed form built from the twelve 2x2 sub-determinants of the
    /// top and bottom row pairs.  Fails if the determinant is zero.
    pub fn inverse(&self) -> Result<Self, GeometryError> {
        let m = &self.data;

        let s0 = m[0][0] * m[1][1] - m[1][0] * m[0][1];
        let s1 = m[0][0] * m[1][2] - m[1][0] * m[0][2];
        let s2 = m[0][0] * m[1][3] - m[1][0] * m[0][3];
        let s3 = m[0][1] * m[1][2] - m[1][1] * m[0][2];
        let s4 = m[0][1] * m[1][3] - m[1][1] * m[0][3];
        let s5 = m[0][2] * m[1][3] - m[1][2] * m[0][3];

        let c5 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
        let c4 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
        let c3 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
        let c2 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
        let c1 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
        let c0 = m[2][0] * m[3][1] - m[3][0] * m[2][1];

        let determinant = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(GeometryError::NotInvertible { determinant });
        }
        let inv = 1.0 / determinant;

        Ok(Self::new([
            [
                (m[1][1] * c5 - m[1][2] * c4 + m[1][3] * c3) * inv,
                (-m[0][1] * c5 + m[0][2] * c4 - m[0][3] * c3) * inv,
                (m[3][1] * s5 - m[3][2] * s4 + m[3][3] * s3) * inv,
                (-m[2][1] * s5 + m[2][2] * s4 - m[2][3] * s3) * inv,
            ],
            [
                (-m[1][0] * c5 + m[1][2] * c2 - m[1][3] * c1) * inv,
                (m[0][0] * c5 - m[0][2] * c2 + m[0][3] * c1) * inv,
                (-m[3][0] * s5 + m[3][2] * s2 - m[3][3] * s1) * inv,
                (m[2][0] * s5 - m[2][2] * s2 + m[2][3] * s1) * inv,
            ],
            [
                (m[1][0] * c4 - m[1][1] * c2 + m[1][3] * c0) * inv,
                (-m[0][0] * c4 + m[0][1] * c2 - m[0][3] * c0) * inv,
                (m[3][0] * s4 - m[3][1] * s2 + m[3][3] * s0) * inv,
                (-m[2][0] * s4 + m[2][1] * s2 - m[2][3] * s0) * inv,
            ],
            [
                (-m[1][0] * c3 + m[1][1] * c1 - m[1][2] * c0) * inv,
                (m[0][0] * c3 - m[0][1] * c1 + m[0][2] * c0) * inv,
                (-m[3][0] * s3 + m[3][1] * s1 - m[3][2] * s0) * inv,
                (m[2][0] * s3 - m[2][1] * s1 + m[2][2] * s0) * inv,
            ],
        ]))
    }
}

impl AbsDiffEq for Matrix4x4 {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut data = [[0.0; 4]; 4];

        for (i, row) in self.data.iter().enumerate() {
            for j in 0..4 {
                data[i][j] = row[0] * rhs.data[0][j]
                    + row[1] * rhs.data[1][j]
                    + row[2] * rhs.data[2][j]
                    + row[3] * rhs.data[3][j]
            }
        }

        Matrix4x4 { data }
    }
}

impl MulAssign for Matrix4x4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Index<usize> for Matrix4x4 {
    type Output = [Float; 4];

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Matrix4x4 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}
