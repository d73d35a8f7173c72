// src/console/render.rs
use crate::arg::{Arg, NonFinite};
use serde_json::Value as JsonValue;

/// Renders one argument the way it appears on the console.
pub fn render_arg(arg: &Arg) -> String {
    match arg {
        Arg::Undefined => "undefined".to_string(),
        Arg::Value(JsonValue::String(s)) => s.clone(),
        Arg::Value(JsonValue::Null) => "null".to_string(),
        Arg::Value(JsonValue::Bool(b)) => b.to_string(),
        Arg::Value(JsonValue::Number(n)) => n.to_string(),
        Arg::Value(v) => serde_json::to_string(v).unwrap_or_else(|_| v.to_string()),
        Arg::NonFinite(NonFinite::NaN) => "NaN".to_string(),
        Arg::NonFinite(NonFinite::Infinity) => "Infinity".to_string(),
        Arg::NonFinite(NonFinite::NegativeInfinity) => "-Infinity".to_string(),
        Arg::Error(e) => {
            let mut out = format!("Error: {}", e.message);
            for cause in &e.causes {
                out.push_str(&format!("\n    Caused by: {}", cause));
            }
            out
        }
    }
}

/// Joins an argument list with single spaces.
pub fn render_args(args: &[Arg]) -> String {
    args.iter().map(render_arg).collect::<Vec<_>>().join(" ")
}

/// Prefixes every line of `text` with `depth` levels of two-space indentation.
pub fn indent(text: &str, depth: usize) -> String {
    if depth == 0 {
        return text.to_string();
    }
    let pad = "  ".repeat(depth);
    text.split('\n')
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}
