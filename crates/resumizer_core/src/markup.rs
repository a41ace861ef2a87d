/// Line-break directive substituted for every newline in analysis text.
pub const BREAK_MARKER: &str = "<br>";

/// Turns server analysis text into markup: escape first, then one
/// [`BREAK_MARKER`] per `\n`. Carriage returns are left alone.
pub fn render_analysis(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str(BREAK_MARKER),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
