use crate::error::{ExtractError, ExtractResult};
use crate::types::ExtractionResult;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

fn prefix(variable: &str) -> String {
    format!("const {} = ", variable)
}

/// Render `const <variable> = <json>;` with 2-space indented, ASCII-only JSON
pub fn render_js(variable: &str, result: &ExtractionResult) -> ExtractResult<String> {
    let json = serde_json::to_string_pretty(result)?;
    Ok(format!("{}{};", prefix(variable), escape_non_ascii(&json)))
}

/// Replace every non-ASCII char with `\uXXXX` (UTF-16 surrogate pairs above U+FFFF).
///
/// Non-ASCII only occurs inside JSON string literals, so the result stays valid JSON.
fn escape_non_ascii(json: &str) -> String {
    if json.is_ascii() {
        return json.to_string();
    }

    let mut out = String::with_capacity(json.len() + json.len() / 2);
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{:04x}", unit));
        }
    }
    out
}

/// Write the dashboard data file, replacing any existing file.
///
/// The content is rendered before the file is opened, so a serialization
/// failure leaves the previous file untouched. A failed write removes
/// whatever part of the file made it to disk.
pub fn write_js(path: &Path, variable: &str, result: &ExtractionResult) -> ExtractResult<()> {
    let content = render_js(variable, result)?;

    if let Err(e) = fs::write(path, &content) {
        if path.exists() {
            if let Err(cleanup) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %cleanup, "could not remove partial output");
            }
        }
        return Err(ExtractError::Io(e));
    }

    debug!(path = %path.display(), bytes = content.len(), "wrote dashboard data");
    Ok(())
}

/// Parse a rendered data file back into its result
pub fn parse_js(content: &str, variable: &str) -> ExtractResult<ExtractionResult> {
    let json = content
        .strip_prefix(prefix(variable).as_str())
        .and_then(|rest| rest.trim_end().strip_suffix(';'))
        .ok_or_else(|| ExtractError::Format(variable.to_string()))?;
    Ok(serde_json::from_str(json)?)
}
