// src/arg.rs
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::error::Error as StdError;

/// A single value handed to the console.
///
/// Anything a caller logs becomes an `Arg`: missing values, JSON-like data,
/// or an error together with its source chain. No validation happens here.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Undefined,
    Value(JsonValue),
    /// A float JSON cannot hold.
    NonFinite(NonFinite),
    Error(ErrorArg),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonFinite {
    NaN,
    Infinity,
    NegativeInfinity,
}

impl NonFinite {
    pub fn of(value: f64) -> Option<NonFinite> {
        if value.is_nan() {
            Some(NonFinite::NaN)
        } else if value == f64::INFINITY {
            Some(NonFinite::Infinity)
        } else if value == f64::NEG_INFINITY {
            Some(NonFinite::NegativeInfinity)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorArg {
    pub message: String,
    pub causes: Vec<String>,
}

impl Arg {
    /// Serializes any plain data type into an argument.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Arg, serde_json::Error> {
        serde_json::to_value(value).map(Arg::Value)
    }

    pub fn error<E: StdError + ?Sized>(err: &E) -> Arg {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        Arg::Error(ErrorArg {
            message: err.to_string(),
            causes,
        })
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Value(JsonValue::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl From<()> for Arg {
    fn from(_: ()) -> Self {
        Arg::Undefined
    }
}

impl From<JsonValue> for Arg {
    fn from(value: JsonValue) -> Self {
        Arg::Value(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Value(JsonValue::String(value.to_string()))
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Value(JsonValue::String(value))
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Value(JsonValue::String(value.clone()))
    }
}

macro_rules! arg_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(value: $t) -> Self {
                    Arg::Value(JsonValue::from(value))
                }
            }
        )*
    };
}

arg_from_primitive!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        match NonFinite::of(value) {
            Some(special) => Arg::NonFinite(special),
            None => Arg::Value(JsonValue::from(value)),
        }
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::from(f64::from(value))
    }
}

impl<T: Into<JsonValue>> From<Vec<T>> for Arg {
    fn from(values: Vec<T>) -> Self {
        Arg::Value(JsonValue::Array(values.into_iter().map(Into::into).collect()))
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Arg::Value(JsonValue::Null),
        }
    }
}

impl From<anyhow::Error> for Arg {
    fn from(err: anyhow::Error) -> Self {
        let mut chain = err.chain().map(|e| e.to_string());
        let message = chain.next().unwrap_or_default();
        Arg::Error(ErrorArg {
            message,
            causes: chain.collect(),
        })
    }
}
