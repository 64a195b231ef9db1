use crate::ui::frame::Frame;
use crate::ui::style::Color;

/// Serializes a frame for headless inspection (`--dump-frame`).
pub fn frame_to_json(frame: &Frame) -> serde_json::Value {
    let cursor = frame.cursor().map(|c| {
        serde_json::json!({
            "row": c.row,
            "col": c.col,
        })
    });

    let lines = frame
        .lines()
        .iter()
        .map(|line| {
            serde_json::Value::Array(
                line.spans()
                    .iter()
                    .map(|span| {
                        serde_json::json!({
                            "text": span.text,
                            "style": {
                                "color": span.style.color.map(color_to_json),
                                "bold": span.style.bold,
                                "dim": span.style.dim,
                            }
                        })
                    })
                    .collect(),
            )
        })
        .collect::<Vec<_>>();

    serde_json::json!({
        "cursor": cursor,
        "lines": lines,
    })
}

fn color_to_json(color: Color) -> serde_json::Value {
    match color {
        Color::DarkGrey => serde_json::json!("dark_grey"),
        Color::Red => serde_json::json!("red"),
        Color::Green => serde_json::json!("green"),
        Color::Yellow => serde_json::json!("yellow"),
        Color::Cyan => serde_json::json!("cyan"),
        Color::White => serde_json::json!("white"),
    }
}
