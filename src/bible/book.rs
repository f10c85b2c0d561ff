//! Book catalogue.

use std::fmt;

/// A biblical book, independent of any canon or naming convention.
///
/// Variants are declared in OSIS canonical order: the 66 protestant books
/// followed by the deuterocanonical books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Book {
    Genesis,
    Exodus,
    Leviticus,
    Numbers,
    Deuteronomy,
    Joshua,
    Judges,
    Ruth,
    FirstSamuel,
    SecondSamuel,
    FirstKings,
    SecondKings,
    FirstChronicles,
    SecondChronicles,
    Ezra,
    Nehemiah,
    Esther,
    Job,
    Psalms,
    Proverbs,
    Ecclesiastes,
    SongOfSongs,
    Isaiah,
    Jeremiah,
    Lamentations,
    Ezekiel,
    Daniel,
    Hosea,
    Joel,
    Amos,
    Obadiah,
    Jonah,
    Micah,
    Nahum,
    Habakkuk,
    Zephaniah,
    Haggai,
    Zechariah,
    Malachi,
    Matthew,
    Mark,
    Luke,
    John,
    Acts,
    Romans,
    FirstCorinthians,
    SecondCorinthians,
    Galatians,
    Ephesians,
    Philippians,
    Colossians,
    FirstThessalonians,
    SecondThessalonians,
    FirstTimothy,
    SecondTimothy,
    Titus,
    Philemon,
    Hebrews,
    James,
    FirstPeter,
    SecondPeter,
    FirstJohn,
    SecondJohn,
    ThirdJohn,
    Jude,
    Revelation,
    Baruch,
    DanielGreek,
    BelAndTheDragon,
    SongOfTheThreeYoungMen,
    Susanna,
    FirstEsdras,
    SecondEsdras,
    EstherGreek,
    LetterOfJeremiah,
    Judith,
    FirstMaccabees,
    SecondMaccabees,
    ThirdMaccabees,
    FourthMaccabees,
    PrayerOfManasseh,
    Sirach,
    Tobit,
    WisdomOfSolomon,
}

impl Book {
    /// Every book, in declaration order.
    pub const ALL: [Book; 84] = [
        Book::Genesis,
        Book::Exodus,
        Book::Leviticus,
        Book::Numbers,
        Book::Deuteronomy,
        Book::Joshua,
        Book::Judges,
        Book::Ruth,
        Book::FirstSamuel,
        Book::SecondSamuel,
        Book::FirstKings,
        Book::SecondKings,
        Book::FirstChronicles,
        Book::SecondChronicles,
        Book::Ezra,
        Book::Nehemiah,
        Book::Esther,
        Book::Job,
        Book::Psalms,
        Book::Proverbs,
        Book::Ecclesiastes,
        Book::SongOfSongs,
        Book::Isaiah,
        Book::Jeremiah,
        Book::Lamentations,
        Book::Ezekiel,
        Book::Daniel,
        Book::Hosea,
        Book::Joel,
        Book::Amos,
        Book::Obadiah,
        Book::Jonah,
        Book::Micah,
        Book::Nahum,
        Book::Habakkuk,
        Book::Zephaniah,
        Book::Haggai,
        Book::Zechariah,
        Book::Malachi,
        Book::Matthew,
        Book::Mark,
        Book::Luke,
        Book::John,
        Book::Acts,
        Book::Romans,
        Book::FirstCorinthians,
        Book::SecondCorinthians,
        Book::Galatians,
        Book::Ephesians,
        Book::Philippians,
        Book::Colossians,
        Book::FirstThessalonians,
        Book::SecondThessalonians,
        Book::FirstTimothy,
        Book::SecondTimothy,
        Book::Titus,
        Book::Philemon,
        Book::Hebrews,
        Book::James,
        Book::FirstPeter,
        Book::SecondPeter,
        Book::FirstJohn,
        Book::SecondJohn,
        Book::ThirdJohn,
        Book::Jude,
        Book::Revelation,
        Book::Baruch,
        Book::DanielGreek,
        Book::BelAndTheDragon,
        Book::SongOfTheThreeYoungMen,
        Book::Susanna,
        Book::FirstEsdras,
        Book::SecondEsdras,
        Book::EstherGreek,
        Book::LetterOfJeremiah,
        Book::Judith,
        Book::FirstMaccabees,
        Book::SecondMaccabees,
        Book::ThirdMaccabees,
        Book::FourthMaccabees,
        Book::PrayerOfManasseh,
        Book::Sirach,
        Book::Tobit,
        Book::WisdomOfSolomon,
    ];
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        assert!(Book::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Book::ALL[0], Book::Genesis);
        assert_eq!(Book::ALL[65], Book::Revelation);
    }
}
