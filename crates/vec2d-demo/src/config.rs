//! 演示程序配置
//!
//! 命令行：`vec2d-demo [x1 y1 x2 y2 [scalar]]`，每个参数按 JSON 字面量解析。
//! 日志级别由环境变量 `VEC2D_LOG` 指定（默认 `info`）。

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::Level;
use vec2d_core::prelude::*;

/// 日志级别环境变量
pub const LOG_ENV: &str = "VEC2D_LOG";

/// 演示配置
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub first: Vector2D,
    pub second: Vector2D,
    /// 标量保持弱类型，交给 `try_scale` 校验
    pub scalar: Operand,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            first: Vector2D::new(2, 3),
            second: Vector2D::new(3, 5),
            scalar: Operand::Number(3.0),
        }
    }
}

impl DemoConfig {
    /// 从命令行参数（不含程序名）构建配置
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = args
            .into_iter()
            .map(|a| parse_literal(a.as_ref()))
            .collect::<Result<Vec<Value>>>()?;

        match values.as_slice() {
            [] => Ok(Self::default()),
            [x1, y1, x2, y2, rest @ ..] if rest.len() <= 1 => {
                let first = Vector2D::from_json(x1, y1).context("invalid first vector")?;
                let second = Vector2D::from_json(x2, y2).context("invalid second vector")?;
                let scalar = rest
                    .first()
                    .map(Operand::from)
                    .unwrap_or(Self::default().scalar);
                Ok(Self {
                    first,
                    second,
                    scalar,
                })
            }
            _ => bail!(
                "expected 0, 4 or 5 arguments (x1 y1 x2 y2 [scalar]), got {}",
                values.len()
            ),
        }
    }
}

/// 将参数按 JSON 字面量解析
///
/// 形如数字的参数解析失败（如 `1e400` 超出范围）时报错，其余无法解析的参数视为字符串。
fn parse_literal(arg: &str) -> Result<Value> {
    match serde_json::from_str(arg) {
        Ok(value) => Ok(value),
        Err(e) if looks_numeric(arg) => {
            Err(e).with_context(|| format!("invalid number literal {arg:?}"))
        }
        Err(_) => Ok(Value::String(arg.to_owned())),
    }
}

fn looks_numeric(arg: &str) -> bool {
    arg.trim_start()
        .starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+' || c == '.')
}

/// 解析日志级别，未设置时为 INFO
pub fn parse_log_level(value: Option<&str>) -> Result<Level> {
    match value {
        None => Ok(Level::INFO),
        Some(s) => s
            .trim()
            .parse::<Level>()
            .with_context(|| format!("invalid {LOG_ENV} value: {s:?}")),
    }
}

/// 从环境变量读取日志级别
pub fn log_level_from_env() -> Result<Level> {
    let value = std::env::var(LOG_ENV).ok();
    parse_log_level(value.as_deref())
}
