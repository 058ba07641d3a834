//! Pure editing operations on the rich-text buffer.
//!
//! The buffer is the HTML fragment the user edits. Offsets here are UTF-8 byte
//! offsets; the browser side converts its UTF-16 selection before calling in.

/// Formatting actions offered by the editor toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Heading1,
    Heading2,
    Bold,
    Italic,
    Underline,
    Strike,
    OrderedList,
    BulletList,
    Link,
    Clean,
}

impl Format {
    pub const TOOLBAR: [Format; 10] = [
        Format::Heading1,
        Format::Heading2,
        Format::Bold,
        Format::Italic,
        Format::Underline,
        Format::Strike,
        Format::OrderedList,
        Format::BulletList,
        Format::Link,
        Format::Clean,
    ];

    fn wrappers(self) -> Option<(&'static str, &'static str)> {
        match self {
            Format::Heading1 => Some(("<h1>", "</h1>")),
            Format::Heading2 => Some(("<h2>", "</h2>")),
            Format::Bold => Some(("<strong>", "</strong>")),
            Format::Italic => Some(("<em>", "</em>")),
            Format::Underline => Some(("<u>", "</u>")),
            Format::Strike => Some(("<s>", "</s>")),
            Format::OrderedList => Some(("<ol><li>", "</li></ol>")),
            Format::BulletList => Some(("<ul><li>", "</li></ul>")),
            Format::Link => Some(("<a href=\"https://\">", "</a>")),
            Format::Clean => None,
        }
    }
}

/// Inserted and selected when a format is applied to an empty selection.
pub const FILLER_TEXT: &str = "text";

/// Result of an edit: the new buffer plus the byte range to select afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub text: String,
    pub selection: (usize, usize),
}

/// Moves `pos` back until it lands on a char boundary of `text`, clamping to
/// the buffer length first.
pub fn floor_char_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Where an embed requested at `cursor` actually goes.
///
/// The cursor is clamped and snapped to a char boundary. When it sits inside
/// an HTML tag it is pushed past the end of that tag so markup is never split.
/// A `>` inside a quoted attribute value does not close the tag.
pub fn embed_position(text: &str, cursor: usize) -> usize {
    let pos = floor_char_boundary(text, cursor);
    let mut scan = TagScan::Text;
    for c in text[..pos].chars() {
        scan = scan.step(c);
    }
    if scan == TagScan::Text {
        return pos;
    }
    for (i, c) in text[pos..].char_indices() {
        scan = scan.step(c);
        if scan == TagScan::Text {
            return pos + i + c.len_utf8();
        }
    }
    text.len()
}

/// Lexer position relative to HTML tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagScan {
    Text,
    Tag,
    Quoted(char),
}

impl TagScan {
    fn step(self, c: char) -> Self {
        match (self, c) {
            (TagScan::Text, '<') => TagScan::Tag,
            (TagScan::Tag, '>') => TagScan::Text,
            (TagScan::Tag, '"' | '\'') => TagScan::Quoted(c),
            (TagScan::Quoted(q), c) if c == q => TagScan::Tag,
            (state, _) => state,
        }
    }
}

/// Markup embedded into the buffer for an uploaded image.
pub fn image_embed(image_url: &str) -> String {
    format!("<img src=\"{}\">", image_url)
}

/// Inserts an `<img>` for `image_url` at `cursor`. Returns the new buffer with
/// the caret placed right after the inserted tag.
pub fn embed_image(text: &str, cursor: usize, image_url: &str) -> Edit {
    let at = embed_position(text, cursor);
    let embed = image_embed(image_url);
    let mut out = String::with_capacity(text.len() + embed.len());
    out.push_str(&text[..at]);
    out.push_str(&embed);
    out.push_str(&text[at..]);
    let caret = at + embed.len();
    Edit {
        text: out,
        selection: (caret, caret),
    }
}

/// Applies a toolbar format to the `start..end` selection.
///
/// Wrapping formats surround the selection (or [`FILLER_TEXT`] when it is
/// empty) and select the wrapped text. `Clean` strips tags from the selection.
pub fn apply_format(text: &str, start: usize, end: usize, format: Format) -> Edit {
    let (mut start, mut end) = (floor_char_boundary(text, start), floor_char_boundary(text, end));
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }
    let selected = &text[start..end];

    let (replacement, inner_offset, inner_len) = match format.wrappers() {
        Some((open, close)) => {
            let inner = if selected.is_empty() { FILLER_TEXT } else { selected };
            (format!("{open}{inner}{close}"), open.len(), inner.len())
        }
        None => {
            let cleaned = strip_tags(selected);
            let len = cleaned.len();
            (cleaned, 0, len)
        }
    };

    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..start]);
    out.push_str(&replacement);
    out.push_str(&text[end..]);
    Edit {
        text: out,
        selection: (start + inner_offset, start + inner_offset + inner_len),
    }
}

/// Removes every `<...>` sequence. An unterminated `<` drops the rest.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embed_at_plain_cursor() {
        let edit = embed_image("<p>ab</p>", 4, "http://h/i.png");
        assert_eq!(edit.text, "<p>a<img src=\"http://h/i.png\">b</p>");
        let caret = 4 + image_embed("http://h/i.png").len();
        assert_eq!(edit.selection, (caret, caret));
    }

    #[test]
    fn embed_inside_tag_moves_after_it() {
        // cursor between "<stro" and "ng>"
        let text = "<p><strong>x</strong></p>";
        assert_eq!(embed_position(text, 8), 11);
        let edit = embed_image(text, 8, "u");
        assert_eq!(edit.text, "<p><strong><img src=\"u\">x</strong></p>");
    }

    #[test]
    fn embed_clamps_past_end() {
        let edit = embed_image("abc", 99, "u");
        assert_eq!(edit.text, "abc<img src=\"u\">");
    }

    #[test]
    fn embed_snaps_to_char_boundary() {
        // 'é' is two bytes; offset 2 lands in the middle of it
        let text = "aéb";
        assert_eq!(embed_position(text, 2), 1);
    }

    #[test]
    fn embed_in_unterminated_tag_goes_to_end() {
        assert_eq!(embed_position("<p>x</p><im", 10), 11);
    }

    #[test]
    fn quoted_gt_does_not_close_the_tag() {
        let text = "<a title=\"a>b\">link</a>";
        // cursor right after the quoted '>'
        assert_eq!(embed_position(text, 12), 15);
        let edit = embed_image(text, 12, "u");
        assert_eq!(edit.text, "<a title=\"a>b\"><img src=\"u\">link</a>");

        // '>' in text after a closed tag is plain text
        assert_eq!(embed_position("<b>x</b> a>b", 11), 11);
        assert_eq!(embed_position("<i title='>'>z</i>", 11), 13);
    }

    #[test]
    fn embedding_twice_inserts_twice() {
        let first = embed_image("", 0, "u");
        let second = embed_image(&first.text, first.selection.0, "u");
        assert_eq!(second.text.matches("<img src=\"u\">").count(), 2);
    }

    #[test]
    fn bold_wraps_selection_and_selects_inner_text() {
        let edit = apply_format("say hello now", 4, 9, Format::Bold);
        assert_eq!(edit.text, "say <strong>hello</strong> now");
        assert_eq!(&edit.text[edit.selection.0..edit.selection.1], "hello");
    }

    #[test]
    fn empty_selection_inserts_filler() {
        let edit = apply_format("", 0, 0, Format::BulletList);
        assert_eq!(edit.text, "<ul><li>text</li></ul>");
        assert_eq!(&edit.text[edit.selection.0..edit.selection.1], FILLER_TEXT);
    }

    #[test]
    fn reversed_selection_is_normalized() {
        let edit = apply_format("abc", 3, 1, Format::Italic);
        assert_eq!(edit.text, "a<em>bc</em>");
    }

    #[test]
    fn clean_strips_tags_in_selection_only() {
        let text = "<h1>keep</h1><b>x</b><i>y</i>";
        let start = text.find("<b>").unwrap();
        let edit = apply_format(text, start, text.len(), Format::Clean);
        assert_eq!(edit.text, "<h1>keep</h1>xy");
        assert_eq!(&edit.text[edit.selection.0..edit.selection.1], "xy");
    }
}
