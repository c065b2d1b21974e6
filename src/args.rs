use std::ffi::OsString;
use tracing::debug;

const legacy_switches: [&str; 5] = ["dec", "hex", "lowerhex", "polynomial", "buffer-size"];

/// Rewrites the single-dash and slash spellings of the old tool (`-dec`,
/// `/LowerHex`, `-polynomial:82F63B78`) into long options. Unknown single-dash
/// words such as `-verbose` are dropped, as the old tool never looked them up.
/// Anything else, including file names, absolute paths, single-letter and
/// already-long options, passes through untouched.
pub fn normalize(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter().filter_map(normalize_one).collect()
}

fn normalize_one(arg: OsString) -> Option<OsString> {
    let Some(text) = arg.to_str() else { return Some(arg) };
    let (rest, dashed) = match (text.strip_prefix('-'), text.strip_prefix('/')) {
        (Some(rest), _) => (rest, true),
        (None, Some(rest)) => (rest, false),
        (None, None) => return Some(arg),
    };
    if rest.starts_with('-') {
        return Some(arg);
    }
    let (switch, value) = match rest.split_once(':') {
        Some((switch, value)) => (switch, Some(value)),
        None => (rest, None),
    };
    let switch = switch.to_ascii_lowercase();
    if legacy_switches.contains(&switch.as_str()) {
        return Some(match value {
            Some(value) => format!("--{switch}={value}").into(),
            None => format!("--{switch}").into(),
        });
    }
    if dashed && is_word(&switch) {
        debug!(switch = text, "ignoring unknown switch");
        return None;
    }
    Some(arg)
}

fn is_word(switch: &str) -> bool {
    switch.len() > 1 && switch.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Parses a reflected polynomial written in hex, with or without `0x`.
pub fn parse_polynomial(text: &str) -> Result<u32, String> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u32::from_str_radix(digits, 16)
        .map_err(|_| format!("'{text}' is not a 32-bit polynomial"))
}

pub fn parse_buffer_size(text: &str) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(0) => Err("buffer size must be at least one byte".into()),
        Ok(size) => Ok(size),
        Err(e) => Err(format!("'{text}' is not a buffer size: {e}")),
    }
}
