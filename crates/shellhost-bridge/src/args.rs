//! Positional argument coercion for command handlers.
//!
//! Arguments arrive as loosely-typed JSON. Integers follow leading-integer
//! parsing: numbers are truncated, strings contribute their leading
//! optionally-signed digits (`"600px"` is 600), anything else is not a
//! number. `null` is treated the same as an absent argument.

use serde_json::Value;

use crate::dispatcher::Invocation;
use crate::error::CommandError;
use crate::surface::SurfaceHandle;

/// Leading-integer parse of a JSON value.
pub fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc())
                    .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                    .map(|f| f as i64)
            }
        }
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn describe_raw(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{s:?}"),
        other => other.to_string(),
    }
}

impl Invocation {
    /// The `index`th argument, with `null` folded into absence.
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index).filter(|v| !v.is_null())
    }

    /// A strictly positive pixel dimension.
    pub fn dimension(&self, index: usize, name: &'static str) -> Result<u32, CommandError> {
        let raw = self.arg(index).ok_or(CommandError::MissingArgument(name))?;
        to_dimension(raw, name)
    }

    /// A positive pixel dimension, or `default` when absent.
    pub fn optional_dimension(
        &self,
        index: usize,
        name: &'static str,
        default: u32,
    ) -> Result<u32, CommandError> {
        match self.arg(index) {
            None => Ok(default),
            Some(raw) => to_dimension(raw, name),
        }
    }

    /// A screen coordinate, or `default` when absent. Negative values are
    /// valid on multi-monitor layouts.
    pub fn optional_coordinate(
        &self,
        index: usize,
        name: &'static str,
        default: i32,
    ) -> Result<i32, CommandError> {
        let Some(raw) = self.arg(index) else {
            return Ok(default);
        };
        let value = parse_int(raw).ok_or_else(|| {
            CommandError::invalid(name, format!("expected an integer, got {}", describe_raw(raw)))
        })?;
        i32::try_from(value)
            .map_err(|_| CommandError::invalid(name, format!("{value} is out of range")))
    }

    /// A non-empty string argument.
    pub fn string(&self, index: usize, name: &'static str) -> Result<&str, CommandError> {
        match self.arg(index) {
            None => Err(CommandError::MissingArgument(name)),
            Some(Value::String(s)) if s.trim().is_empty() => {
                Err(CommandError::invalid(name, "must not be empty"))
            }
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(CommandError::invalid(
                name,
                format!("expected a string, got {}", describe_raw(other)),
            )),
        }
    }

    /// A secondary surface handle. Anything that cannot name a handle is
    /// reported as an unknown handle carrying the raw value.
    pub fn handle(&self, index: usize, name: &'static str) -> Result<SurfaceHandle, CommandError> {
        let raw = self.arg(index).ok_or(CommandError::MissingArgument(name))?;
        let parsed = match raw {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        parsed
            .map(SurfaceHandle::new)
            .ok_or_else(|| CommandError::UnknownWindowHandle(describe_raw(raw)))
    }
}

fn to_dimension(raw: &Value, name: &'static str) -> Result<u32, CommandError> {
    let value = parse_int(raw).ok_or_else(|| {
        CommandError::invalid(name, format!("expected an integer, got {}", describe_raw(raw)))
    })?;
    if value <= 0 {
        return Err(CommandError::invalid(name, format!("must be positive, got {value}")));
    }
    u32::try_from(value).map_err(|_| CommandError::invalid(name, format!("{value} is out of range")))
}
