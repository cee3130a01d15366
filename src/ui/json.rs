use std::io::{self, Write};

use serde_json::json;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Attach the `event` tag to a serializable payload.
pub fn event(name: &str, payload: impl serde::Serialize) -> serde_json::Value {
    let mut value = serde_json::to_value(payload).unwrap_or_else(|_| json!({}));
    match value.as_object_mut() {
        Some(map) => {
            map.insert("event".to_string(), json!(name));
            value
        }
        None => json!({ "event": name, "data": value }),
    }
}
