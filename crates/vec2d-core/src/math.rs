//! 数学基础类型
//!
//! 基于 nalgebra 的存储类型别名和浮点容差工具。

use nalgebra as na;

/// 2D向量存储类型
pub type Vector2 = na::Vector2<f64>;

/// 数值容差，用于近似比较（`==` 始终是精确比较）
pub const EPSILON: f64 = 1e-10;

/// 判断两个浮点数是否近似相等
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// 将余弦值限制在 [-1, 1]，避免舍入误差导致 acos 返回 NaN
#[inline]
pub fn clamp_cos(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(!approx_eq(1.0, 1.0 + 1e-6));
    }

    #[test]
    fn test_clamp_cos() {
        assert_eq!(clamp_cos(1.0000000000000002), 1.0);
        assert_eq!(clamp_cos(-1.0000000000000002), -1.0);
        assert_eq!(clamp_cos(0.5), 0.5);
        assert!(approx_eq(clamp_cos(1.0000000000000002).acos(), 0.0));
    }
}
