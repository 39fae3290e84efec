//! 二维向量
//!
//! `Vector2D` 是一个按值比较、按值组合的坐标对。所有运算都返回新值，
//! 不会修改操作数。

use crate::error::{Axis, Degeneracy, Result, VectorError};
use crate::math::{self, clamp_cos, Vector2};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// 二维欧氏空间中的点或位移
#[derive(Clone, Copy, PartialEq)]
pub struct Vector2D {
    coords: Vector2,
}

impl Vector2D {
    /// 创建新的向量
    ///
    /// 整数坐标无损转换为 `f64`。不检查有限性，需要校验时使用 [`Vector2D::try_new`]。
    pub fn new(x: impl Into<f64>, y: impl Into<f64>) -> Self {
        Self {
            coords: Vector2::new(x.into(), y.into()),
        }
    }

    /// 创建新的向量，拒绝非有限坐标（NaN、无穷大）
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        Ok(Self::new(finite(Axis::X, x)?, finite(Axis::Y, y)?))
    }

    /// 零向量
    pub fn zero() -> Self {
        Self {
            coords: Vector2::zeros(),
        }
    }

    pub fn x(&self) -> f64 {
        self.coords.x
    }

    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// 返回替换了 x 坐标的新向量
    pub fn with_x(self, x: impl Into<f64>) -> Self {
        Self::new(x, self.coords.y)
    }

    /// 返回替换了 y 坐标的新向量
    pub fn with_y(self, y: impl Into<f64>) -> Self {
        Self::new(self.coords.x, y)
    }

    /// 原地修改 x 坐标
    pub fn set_x(&mut self, x: impl Into<f64>) {
        self.coords.x = x.into();
    }

    /// 原地修改 y 坐标
    pub fn set_y(&mut self, y: impl Into<f64>) {
        self.coords.y = y.into();
    }

    /// 是否为零向量（精确比较）
    pub fn is_zero(&self) -> bool {
        self.coords.x == 0.0 && self.coords.y == 0.0
    }

    /// 计算模长 `sqrt(x² + y²)`
    ///
    /// 平方下溢为 0 或上溢为无穷大时改用 `hypot`，保证只有零向量的模长为 0。
    pub fn mag(&self) -> f64 {
        let (x, y) = (self.coords.x, self.coords.y);
        let mag = (x * x + y * y).sqrt();
        let degenerate = mag == 0.0 || mag.is_infinite();
        if degenerate && !self.is_zero() && x.is_finite() && y.is_finite() {
            x.hypot(y)
        } else {
            mag
        }
    }

    /// 计算模长的平方
    pub fn mag_squared(&self) -> f64 {
        self.coords.norm_squared()
    }

    /// 计算单位向量
    pub fn unit(&self) -> Result<Self> {
        let mag = self.mag();
        if mag == 0.0 {
            return Err(VectorError::DegenerateVector(Degeneracy::NoUnitVector));
        }
        Ok(Self {
            coords: self.coords / mag,
        })
    }

    /// 计算点积
    pub fn dot(&self, other: &Self) -> f64 {
        self.coords.dot(&other.coords)
    }

    /// 计算两向量夹角（弧度，范围 [0, π]）
    pub fn angle(&self, other: &Self) -> Result<f64> {
        let mag = self.mag();
        let other_mag = other.mag();
        if mag == 0.0 || other_mag == 0.0 {
            return Err(VectorError::DegenerateVector(Degeneracy::NoAngle));
        }
        Ok(clamp_cos(self.dot(other) / (mag * other_mag)).acos())
    }

    /// 判断两个向量是否近似相等（`==` 是精确比较）
    pub fn approx_eq(&self, other: &Self) -> bool {
        math::approx_eq(self.coords.x, other.coords.x)
            && math::approx_eq(self.coords.y, other.coords.y)
    }
}

pub(crate) fn finite(axis: Axis, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(VectorError::InvalidArgument {
            axis,
            found: value.to_string(),
        })
    }
}

impl Default for Vector2D {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for (f64, f64) {
    fn from(v: Vector2D) -> Self {
        (v.coords.x, v.coords.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` 保证整数值也带小数点：2 -> 2.0
        write!(f, "{{x: {:?}, y: {:?}}}", self.coords.x, self.coords.y)
    }
}

impl fmt::Debug for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2D")
            .field("x", &self.coords.x)
            .field("y", &self.coords.y)
            .finish()
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            coords: self.coords + rhs.coords,
        }
    }
}

impl Add for &Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Self) -> Self::Output {
        *self + *rhs
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            coords: self.coords - rhs.coords,
        }
    }
}

impl Sub for &Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Self) -> Self::Output {
        *self - *rhs
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            coords: -self.coords,
        }
    }
}

impl<S: Into<f64>> Mul<S> for Vector2D {
    type Output = Vector2D;

    fn mul(self, scalar: S) -> Vector2D {
        Vector2D {
            coords: self.coords * scalar.into(),
        }
    }
}

/// 反向数乘 `scalar * vector`
macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector2D> for $t {
                type Output = Vector2D;

                fn mul(self, vector: Vector2D) -> Vector2D {
                    vector * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f64, f32, i32, u32, i16, u16, i8, u8);
