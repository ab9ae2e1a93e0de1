//! Rendering helpers for the widget and app tests.
//!
//! Widgets draw into a [`Buffer`] and record click regions in a [`HitMap`].
//! [`render_frame`] runs a draw closure against a fresh pair of both and
//! hands them back together as a [`Rendered`].

use ratatui::{buffer::Buffer, layout::Rect};

use crate::hitmap::HitMap;

/// What a draw call produced.
#[derive(Debug)]
pub(crate) struct Rendered {
    pub buf: Buffer,
    pub hits: HitMap,
}

impl Rendered {
    /// Screen text, one line per row, see [`screen_text`].
    pub(crate) fn text(&self) -> String {
        screen_text(&self.buf)
    }

    /// Splits into screen text and click regions.
    pub(crate) fn into_parts(self) -> (String, HitMap) {
        (screen_text(&self.buf), self.hits)
    }
}

/// Draws into an empty `width` x `height` buffer at the origin.
pub(crate) fn render_frame(width: u16, height: u16, draw: impl FnOnce(Rect, &mut Buffer, &mut HitMap)) -> Rendered {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    let mut hits = HitMap::new();
    draw(area, &mut buf, &mut hits);
    Rendered { buf, hits }
}

/// Joins the cell symbols of `buf` row by row.
///
/// Trailing spaces are dropped so snapshots do not depend on the frame
/// width past the last glyph.
pub(crate) fn screen_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut text = String::with_capacity(usize::from(area.width + 1) * usize::from(area.height));
    for y in area.top()..area.bottom() {
        let row: String = (area.left()..area.right())
            .filter_map(|x| buf.cell((x, y)))
            .map(|cell| cell.symbol())
            .collect();
        text.push_str(row.trim_end_matches(' '));
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hitmap::Target;
    use ratatui::style::Style;

    #[test]
    fn rows_are_right_trimmed() {
        let rendered = render_frame(8, 2, |_, buf, _| {
            buf.set_string(1, 0, "glance", Style::default());
        });
        assert_eq!(rendered.text(), " glance\n\n");
    }

    #[test]
    fn offset_buffers_are_read_from_their_own_origin() {
        let mut buf = Buffer::empty(Rect::new(3, 4, 5, 1));
        buf.set_string(3, 4, "AAPL", Style::default());
        assert_eq!(screen_text(&buf), "AAPL\n");
    }

    #[test]
    fn hits_come_back_with_the_buffer() {
        let rendered = render_frame(10, 1, |area, _, hits| hits.push(area, Target::Backdrop));
        assert_eq!(rendered.hits.target_at(9, 0), Some(Target::Backdrop));
    }
}
