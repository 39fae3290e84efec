//! vec2d 核心库
//!
//! 提供二维向量值类型 [`Vector2D`](vector::Vector2D) 及其算术和几何运算。
//!
//! # 架构设计
//!
//! - `Vector2D`: 不可变的坐标对，基于 nalgebra 存储
//! - `Operand`: 弱类型输入边界，对外部数据做显式校验
//! - `VectorError`: 统一的错误类型
//!
//! # 示例
//!
//! ```rust
//! use vec2d_core::prelude::*;
//!
//! let a = Vector2D::new(2, 3);
//! let b = Vector2D::new(3, 5);
//!
//! assert_eq!((a + b).to_string(), "{x: 5.0, y: 8.0}");
//! assert_eq!(a.dot(&b), 21.0);
//! ```

pub mod error;
pub mod math;
pub mod operand;
pub mod vector;

pub use error::{Result, VectorError};

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::error::{Axis, Degeneracy, Operation, Result, VectorError};
    pub use crate::operand::Operand;
    pub use crate::vector::Vector2D;
}
