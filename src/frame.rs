//! Text frames for terminal output

/// ANSI sequence printed between frames to wipe the terminal
pub const CLEAR_SCREEN: &str = "\x1B[2J";

/// Render a snapshot as a bordered text frame.
///
/// The frame is a line of `2 * width` dashes, then every row as its cells
/// joined by single spaces between `|` bars, then another dash line. Each
/// line ends with a newline.
pub fn frame_text(rows: &[Vec<String>]) -> String {
    let width = rows.first().map_or(0, Vec::len);
    let rule = "-".repeat(width * 2);

    let mut out = String::with_capacity((rows.len() + 2) * (width * 2 + 3));
    out.push_str(&rule);
    out.push('\n');
    for row in rows {
        out.push('|');
        out.push_str(&row.join(" "));
        out.push_str("|\n");
    }
    out.push_str(&rule);
    out.push('\n');
    out
}
