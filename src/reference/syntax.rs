//! Locale-specific tokens of the citation grammar.

/// Every token the reference parser and the document walker match against.
///
/// The default is the German convention used by the NeÜ: `Mt 1,2-4`,
/// `Lk 1,8.9.10`, `Jesaja 40,13f`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSyntax {
    /// Separates chapter from verse (`Mt 1,2`, `Mt 1:2`).
    pub chapter_verse_separators: Vec<char>,
    /// Range dashes (`Mt 1,2-4`).
    pub range_separators: Vec<char>,
    /// Separates listed verses (`Lk 1,8.9.10`).
    pub list_separators: Vec<char>,
    /// Separates complete references (`Mt 1,2;4,3`).
    pub item_separators: Vec<char>,
    /// Characters that may continue a citation in the text after a link.
    pub reference_chars: Vec<char>,
    /// "And following" suffixes, longest first within each family.
    pub following_markers: Vec<String>,
    /// The subset of `following_markers` that includes two further verses.
    pub plural_following_markers: Vec<String>,
    /// Lowercase words that stand for the book being converted.
    pub self_reference_words: Vec<String>,
    pub footnote_indicator: String,
    /// Ends the citation at the start of a footnote block.
    pub footnote_terminator: char,
    /// Substrings that mark a hyperlink target as external.
    pub link_tokens: Vec<String>,
    /// Decoration stripped from the front of foreword titles.
    pub title_prefix: String,
}

impl Default for ReferenceSyntax {
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            chapter_verse_separators: vec![':', ','],
            range_separators: vec!['-', '–'],
            list_separators: vec!['.'],
            item_separators: vec![';'],
            reference_chars: ".:,- \t0123456789".chars().collect(),
            following_markers: strings(&["ff", "ff.", "ff .", "f", "f.", "f ."]),
            plural_following_markers: strings(&["ff", "ff.", "ff ."]),
            self_reference_words: strings(&["kapitel", "kap", "vers", "verse"]),
            footnote_indicator: "*".to_string(),
            footnote_terminator: ':',
            link_tokens: strings(&["http", "https", "ftp", "www", ".com", ".org", ".de", ".gif"]),
            title_prefix: "/^\\".to_string(),
        }
    }
}

impl ReferenceSyntax {
    pub fn is_chapter_verse_separator(&self, c: char) -> bool {
        self.chapter_verse_separators.contains(&c)
    }

    pub fn is_range_separator(&self, c: char) -> bool {
        self.range_separators.contains(&c)
    }

    pub fn is_list_separator(&self, c: char) -> bool {
        self.list_separators.contains(&c)
    }

    pub fn is_item_separator(&self, c: char) -> bool {
        self.item_separators.contains(&c)
    }

    pub fn is_reference_char(&self, c: char) -> bool {
        self.reference_chars.contains(&c)
    }

    pub fn is_self_reference(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.self_reference_words.iter().any(|w| *w == word)
    }

    /// Whether a hyperlink target points outside the document set.
    pub fn is_external_link(&self, target: &str) -> bool {
        self.link_tokens.iter().any(|token| target.contains(token.as_str()))
    }

    /// Strip a trailing "and following" marker.
    ///
    /// Returns the remaining text and whether the marker was the plural form.
    pub fn strip_following_marker<'t>(&self, text: &'t str) -> Option<(&'t str, bool)> {
        let marker = self
            .following_markers
            .iter()
            .find(|marker| text.ends_with(marker.as_str()))?;
        let plural = self.plural_following_markers.contains(marker);
        Some((text[..text.len() - marker.len()].trim(), plural))
    }
}
