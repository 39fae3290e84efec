//! 向量运算错误定义

use std::fmt;
use thiserror::Error;

/// 坐标轴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// 需要校验操作数的二元运算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Scale,
    Eq,
    Dot,
    Angle,
}

impl Operation {
    /// 运算名称（用于错误信息）
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Sub => "subtraction",
            Operation::Scale => "scalar multiplication",
            Operation::Eq => "equality",
            Operation::Dot => "dot product",
            Operation::Angle => "angle",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 零向量导致的未定义运算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degeneracy {
    /// 零向量没有单位向量
    NoUnitVector,
    /// 任一向量为零时夹角无定义
    NoAngle,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Degeneracy::NoUnitVector => "zero vector has no unit vector",
            Degeneracy::NoAngle => "no angle is defined when either vector is zero",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Invalid argument: coordinate '{axis}' must be a finite number, got {found}")]
    InvalidArgument { axis: Axis, found: String },

    #[error("Invalid operand: {operation} expects {expected}, got {found}")]
    InvalidOperand {
        operation: Operation,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Degenerate vector: {0}")]
    DegenerateVector(Degeneracy),
}

pub type Result<T> = std::result::Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = VectorError::InvalidArgument {
            axis: Axis::Y,
            found: "string".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid argument: coordinate 'y' must be a finite number, got string"
        );

        let err = VectorError::InvalidOperand {
            operation: Operation::Dot,
            expected: "a vector",
            found: "number",
        };
        assert_eq!(
            err.to_string(),
            "Invalid operand: dot product expects a vector, got number"
        );

        let err = VectorError::DegenerateVector(Degeneracy::NoUnitVector);
        assert_eq!(
            err.to_string(),
            "Degenerate vector: zero vector has no unit vector"
        );
    }
}
