//! Content blocks and their dual-language styled segments.

use myeongham_core::Language;

/// Visual role of a segment, mapped to a terminal style at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStyle {
    Normal,
    Heading,
    /// Year markers and similar highlights.
    Accent,
    Dim,
    Link,
    Tag,
}

/// A run of text with one string per language and a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub en: String,
    pub kr: String,
    pub style: SegmentStyle,
}

impl Segment {
    pub fn new(en: &str, kr: &str, style: SegmentStyle) -> Self {
        Self {
            en: en.to_string(),
            kr: kr.to_string(),
            style,
        }
    }

    /// The same text in both languages.
    pub fn fixed(text: &str, style: SegmentStyle) -> Self {
        Self::new(text, text, style)
    }

    pub fn text(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Kr => &self.kr,
        }
    }
}

/// How the sequencer treats a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Revealed character by character, then restored with styling.
    Typed,
    /// Made visible whole when its turn arrives. Links stay intact.
    Atomic,
    /// Never sequenced; visible as soon as the content layer is.
    Static,
}

/// One line of content: the restoration source and its reveal kind.
///
/// The segments are the source of truth; the reveal only ever displays
/// a prefix of their plain-text projection and re-applies them verbatim
/// at the end, so styling cannot be lost mid-reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub segments: Vec<Segment>,
    pub kind: BlockKind,
}

impl Block {
    pub fn typed(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            kind: BlockKind::Typed,
        }
    }

    pub fn atomic(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            kind: BlockKind::Atomic,
        }
    }

    pub fn fixed(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            kind: BlockKind::Static,
        }
    }

    /// An empty spacer line.
    pub fn blank() -> Self {
        Self::typed(Vec::new())
    }

    /// Plain-text projection: segment texts concatenated, styling
    /// dropped.
    pub fn plain(&self, lang: Language) -> String {
        self.segments.iter().map(|s| s.text(lang)).collect()
    }

    /// Length of the plain projection in characters, not bytes.
    pub fn char_len(&self, lang: Language) -> usize {
        self.segments
            .iter()
            .map(|s| s.text(lang).chars().count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_concatenates_segments() {
        let block = Block::typed(vec![
            Segment::new("2023 ", "2023 ", SegmentStyle::Accent),
            Segment::new("Backend engineer", "백엔드 엔지니어", SegmentStyle::Normal),
        ]);
        assert_eq!(block.plain(Language::En), "2023 Backend engineer");
        assert_eq!(block.plain(Language::Kr), "2023 백엔드 엔지니어");
    }

    #[test]
    fn test_char_len_counts_hangul_chars() {
        let block = Block::typed(vec![Segment::new(
            "engineer",
            "엔지니어",
            SegmentStyle::Normal,
        )]);
        assert_eq!(block.char_len(Language::En), 8);
        assert_eq!(block.char_len(Language::Kr), 4);
    }

    #[test]
    fn test_blank_has_no_text() {
        assert_eq!(Block::blank().char_len(Language::En), 0);
    }
}
