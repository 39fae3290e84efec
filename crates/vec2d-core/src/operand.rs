//! 弱类型操作数
//!
//! 类型化 API 在编译期保证参数类型；来自外部的非类型化数据（如 JSON、
//! 命令行参数）先转换为 [`Operand`]，再由 `try_*` 系列方法显式校验。

use crate::error::{Axis, Operation, Result, VectorError};
use crate::vector::{finite, Vector2D};
use serde_json::Value;

/// 运行期才确定类型的操作数
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Vector(Vector2D),
    Number(f64),
    /// 其他类型，仅保留类型名
    Other(&'static str),
}

impl Operand {
    /// 类型名称（用于错误信息）
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Vector(_) => "vector",
            Operand::Number(_) => "number",
            Operand::Other(kind) => *kind,
        }
    }

    /// 作为坐标值校验：必须是有限数值
    pub fn coordinate(self, axis: Axis) -> Result<f64> {
        match self {
            Operand::Number(n) => finite(axis, n),
            other => Err(VectorError::InvalidArgument {
                axis,
                found: other.kind().to_string(),
            }),
        }
    }

    /// 反向数乘 `scalar * vector`，结果与 [`Vector2D::try_scale`] 相同
    pub fn try_mul_vector(self, vector: Vector2D) -> Result<Vector2D> {
        Ok(self.scalar(Operation::Scale)? * vector)
    }

    fn vector(self, operation: Operation) -> Result<Vector2D> {
        match self {
            Operand::Vector(v) => Ok(v),
            other => Err(VectorError::InvalidOperand {
                operation,
                expected: "a vector",
                found: other.kind(),
            }),
        }
    }

    fn scalar(self, operation: Operation) -> Result<f64> {
        match self {
            Operand::Number(n) if n.is_finite() => Ok(n),
            Operand::Number(_) => Err(VectorError::InvalidOperand {
                operation,
                expected: "a finite number",
                found: "non-finite number",
            }),
            other => Err(VectorError::InvalidOperand {
                operation,
                expected: "a finite number",
                found: other.kind(),
            }),
        }
    }
}

/// JSON 值的类型名称
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        match value.as_f64() {
            Some(n) => Operand::Number(n),
            None => Operand::Other(json_kind(value)),
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::from(&value)
    }
}

impl From<Vector2D> for Operand {
    fn from(v: Vector2D) -> Self {
        Operand::Vector(v)
    }
}

impl From<&Vector2D> for Operand {
    fn from(v: &Vector2D) -> Self {
        Operand::Vector(*v)
    }
}

impl From<&str> for Operand {
    fn from(_: &str) -> Self {
        Operand::Other("string")
    }
}

impl From<String> for Operand {
    fn from(_: String) -> Self {
        Operand::Other("string")
    }
}

impl From<bool> for Operand {
    fn from(_: bool) -> Self {
        Operand::Other("bool")
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(n: $t) -> Self {
                    Operand::Number(f64::from(n))
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i32, u32, i16, u16, i8, u8);

/// 带运行期校验的运算
impl Vector2D {
    /// 从 JSON 值创建向量，两个值都必须是数值
    pub fn from_json(x: &Value, y: &Value) -> Result<Self> {
        let x = Operand::from(x).coordinate(Axis::X)?;
        let y = Operand::from(y).coordinate(Axis::Y)?;
        Ok(Self::new(x, y))
    }

    /// 校验后修改 x 坐标；失败时向量保持不变
    pub fn try_set_x(&mut self, value: impl Into<Operand>) -> Result<()> {
        let x = value.into().coordinate(Axis::X)?;
        self.set_x(x);
        Ok(())
    }

    /// 校验后修改 y 坐标；失败时向量保持不变
    pub fn try_set_y(&mut self, value: impl Into<Operand>) -> Result<()> {
        let y = value.into().coordinate(Axis::Y)?;
        self.set_y(y);
        Ok(())
    }

    pub fn try_add(&self, other: impl Into<Operand>) -> Result<Self> {
        Ok(*self + other.into().vector(Operation::Add)?)
    }

    pub fn try_sub(&self, other: impl Into<Operand>) -> Result<Self> {
        Ok(*self - other.into().vector(Operation::Sub)?)
    }

    pub fn try_scale(&self, scalar: impl Into<Operand>) -> Result<Self> {
        Ok(*self * scalar.into().scalar(Operation::Scale)?)
    }

    /// 严格相等：比较对象不是向量时返回错误而不是 `false`
    pub fn try_eq(&self, other: impl Into<Operand>) -> Result<bool> {
        Ok(*self == other.into().vector(Operation::Eq)?)
    }

    pub fn try_dot(&self, other: impl Into<Operand>) -> Result<f64> {
        Ok(self.dot(&other.into().vector(Operation::Dot)?))
    }

    /// 先校验操作数类型，再检查零向量
    pub fn try_angle(&self, other: impl Into<Operand>) -> Result<f64> {
        self.angle(&other.into().vector(Operation::Angle)?)
    }
}
