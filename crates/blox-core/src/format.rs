//! Number and string formatting shared by both output formats.
//!
//! Numbers use the shortest round-trip decimal form; there is no fixed
//! precision. Non-finite values get the spelling each format understands.

/// Format a number for Luau source.
pub fn lua_number(value: f64) -> String {
    if value.is_nan() {
        "0/0".to_string()
    } else if value == f64::INFINITY {
        "math.huge".to_string()
    } else if value == f64::NEG_INFINITY {
        "-math.huge".to_string()
    } else {
        finite_number(value)
    }
}

/// Format a number for an rbxmx leaf tag.
pub fn xml_number(value: f64) -> String {
    if value.is_nan() {
        "NAN".to_string()
    } else if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        finite_number(value)
    }
}

fn finite_number(value: f64) -> String {
    // -0 prints as "-0"
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Quote a string as a Luau double-quoted literal.
pub fn lua_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Luau reads up to three digits, so pad to keep a following digit out.
            c if c.is_control() => out.push_str(&format!("\\{:03}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Escape text for XML element content or attribute values.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
