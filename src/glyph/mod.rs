//! Big ASCII-art glyphs for the main time display

/// Rows per glyph
pub const GLYPH_HEIGHT: usize = 5;

/// Columns per glyph (every row of every glyph has this width)
pub const GLYPH_WIDTH: usize = 7;

pub type Glyph = [&'static str; GLYPH_HEIGHT];

pub const BLANK: Glyph = ["       ", "       ", "       ", "       ", "       "];

/// Look up the glyph for a character. Letters are matched case-insensitively;
/// anything without an entry falls back to [`BLANK`].
pub fn glyph(c: char) -> &'static Glyph {
    match c.to_ascii_uppercase() {
        '0' => &[" ##### ", "#     #", "#     #", "#     #", " ##### "],
        '1' => &["  #    ", " ##    ", "  #    ", "  #    ", " ###   "],
        '2' => &[" ##### ", "     # ", " ##### ", "#      ", " ##### "],
        '3' => &[" ##### ", "     # ", "  #### ", "     # ", " ##### "],
        '4' => &["#   #  ", "#   #  ", "#######", "    #  ", "    #  "],
        '5' => &[" ##### ", "#      ", " ####  ", "     # ", " ##### "],
        '6' => &[" ##### ", "#      ", " ##### ", "#     #", " ##### "],
        '7' => &[" ##### ", "    #  ", "   #   ", "  #    ", " #     "],
        '8' => &[" ##### ", "#     #", " ##### ", "#     #", " ##### "],
        '9' => &[" ##### ", "#     #", " ##### ", "     # ", " ##### "],
        ':' => &["       ", "   •   ", "       ", "   •   ", "       "],
        'A' => &["  ###  ", " #   # ", " ##### ", "#     #", "#     #"],
        'P' => &[" ####  ", "#    # ", " ####  ", "#      ", "#      "],
        'M' => &["#     #", "##   ##", "# # # #", "#  #  #", "#     #"],
        _ => &BLANK,
    }
}

/// Render `text` as rows of big glyphs. Each glyph is followed by a single
/// separator space, so `n` characters produce rows of `n * (GLYPH_WIDTH + 1)`
/// columns.
pub fn render_rows(text: &str) -> [String; GLYPH_HEIGHT] {
    let mut rows: [String; GLYPH_HEIGHT] = Default::default();
    for c in text.chars() {
        let g = glyph(c);
        for (row, part) in rows.iter_mut().zip(g.iter()) {
            row.push_str(part);
            row.push(' ');
        }
    }
    rows
}

/// Same as [`render_rows`], joined with newlines into a single block.
pub fn render(text: &str) -> String {
    render_rows(text).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn test_every_glyph_is_fixed_width() {
        for c in "0123456789:APM ".chars() {
            for row in glyph(c) {
                assert_eq!(width(row), GLYPH_WIDTH, "glyph {c:?} row {row:?}");
            }
        }
    }

    #[test]
    fn test_unknown_chars_render_blank() {
        for c in ['x', '?', '-', 'é', '\t'] {
            assert_eq!(glyph(c), &BLANK);
        }
        let rows = render_rows("?");
        for row in &rows {
            assert_eq!(row, "        ");
        }
    }

    #[test]
    fn test_letters_are_case_insensitive() {
        assert_eq!(render("01:00 pm"), render("01:00 PM"));
        assert_eq!(glyph('a'), glyph('A'));
    }

    #[test]
    fn test_block_dimensions() {
        for text in ["", "7", "14:23", "14:23:07", "01:00:00 PM", "zz"] {
            let block = render(text);
            let n = text.chars().count();
            let lines: Vec<&str> = block.split('\n').collect();
            assert_eq!(lines.len(), GLYPH_HEIGHT);
            for line in lines {
                assert_eq!(width(line), n * (GLYPH_WIDTH + 1));
            }
        }
    }

    #[test]
    fn test_render_time_concatenates_glyphs() {
        let rows = render_rows("09:05:03");
        for (i, row) in rows.iter().enumerate() {
            let expected: String = "09:05:03"
                .chars()
                .map(|c| format!("{} ", glyph(c)[i]))
                .collect();
            assert_eq!(row, &expected);
        }
        assert_eq!(
            rows[0],
            " #####   #####           #####   #####           #####   #####  "
        );
    }
}
