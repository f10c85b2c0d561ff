//! Canon of the NeÜ (Neue evangelistische Übersetzung).
//!
//! Verse counts follow the German versification (Joel has four chapters,
//! Malachi three). Aliases are the abbreviations used in NeÜ cross references.

use crate::bible::Book;
use crate::bible::canon::{BookEntry, Canon, CanonTable, entries_from_table};

/// The 66-book canon used by the NeÜ.
#[derive(Debug, Clone)]
pub struct NeueCanon {
    books: Vec<BookEntry>,
}

impl NeueCanon {
    pub fn new() -> Self {
        Self {
            books: entries_from_table(TABLE),
        }
    }
}

impl Default for NeueCanon {
    fn default() -> Self {
        Self::new()
    }
}

impl Canon for NeueCanon {
    fn books(&self) -> &[BookEntry] {
        &self.books
    }
}

#[rustfmt::skip]
const TABLE: CanonTable = &[
    (
        Book::Genesis,
        &[
            0,
            31, 25, 24, 26, 32, 22, 24, 22, 29, 32,
            32, 20, 18, 24, 21, 16, 27, 33, 38, 18,
            34, 24, 20, 67, 34, 35, 46, 22, 35, 43,
            54, 33, 20, 31, 29, 43, 36, 30, 23, 23,
            57, 38, 34, 34, 28, 34, 31, 22, 33, 26,
        ],
        &["Gen", "Genesis", "1Mo", "1 Mo", "1.Mo", "1. Mo", "1.Mose", "1. Mose"],
    ),
    (
        Book::Exodus,
        &[
            0,
            22, 25, 22, 31, 23, 30, 29, 28, 35, 29,
            10, 51, 22, 31, 27, 36, 16, 27, 25, 26,
            37, 30, 33, 18, 40, 37, 21, 43, 46, 38,
            18, 35, 23, 35, 35, 38, 29, 31, 43, 38,
        ],
        &["Exo", "Exodus", "2Mo", "2 Mo", "2.Mo", "2. Mo", "2.Mose", "2. Mose"],
    ),
    (
        Book::Leviticus,
        &[
            0,
            17, 16, 17, 35, 26, 23, 38, 36, 24, 20,
            47, 8, 59, 57, 33, 34, 16, 30, 37, 27,
            24, 33, 44, 23, 55, 46, 34,
        ],
        &["Lev", "Levitikus", "Leviticus", "3Mo", "3 Mo", "3.Mo", "3. Mo", "3.Mose", "3. Mose"],
    ),
    (
        Book::Numbers,
        &[
            0,
            54, 34, 51, 49, 31, 27, 89, 26, 23, 36,
            35, 16, 33, 45, 41, 35, 28, 32, 22, 29,
            35, 41, 30, 25, 19, 65, 23, 31, 39, 17,
            54, 42, 56, 29, 34, 13,
        ],
        &["Num", "Numeri", "4Mo", "4 Mo", "4.Mo", "4. Mo", "4.Mose", "4. Mose"],
    ),
    (
        Book::Deuteronomy,
        &[
            0,
            46, 37, 29, 49, 33, 25, 26, 20, 29, 22,
            32, 31, 19, 29, 23, 22, 20, 22, 21, 20,
            23, 29, 26, 22, 19, 19, 26, 69, 28, 20,
            30, 52, 29, 12,
        ],
        &["Deu", "Deuteronomium", "5Mo", "5 Mo", "5.Mo", "5. Mo", "5.Mose", "5. Mose"],
    ),
    (
        Book::Joshua,
        &[
            0,
            18, 24, 17, 24, 15, 27, 26, 35, 27, 43,
            23, 24, 33, 15, 63, 10, 18, 28, 51, 9,
            45, 34, 16, 33,
        ],
        &["Jos", "Josua", "Joshua"],
    ),
    (
        Book::Judges,
        &[
            0,
            36, 23, 31, 24, 31, 40, 25, 35, 57, 18,
            40, 15, 25, 20, 20, 31, 13, 31, 30, 48,
            25,
        ],
        &["Ri", "Richter"],
    ),
    (
        Book::Ruth,
        &[
            0,
            22, 23, 18, 22,
        ],
        &["Rut", "Ruth"],
    ),
    (
        Book::FirstSamuel,
        &[
            0,
            28, 36, 21, 22, 12, 21, 17, 22, 27, 27,
            15, 25, 23, 52, 35, 23, 58, 30, 24, 42,
            16, 23, 28, 23, 44, 25, 12, 25, 11, 31,
            13,
        ],
        &["1Sam", "1 Sam", "1.Sam", "1. Sam", "1Samuel", "1 Samuel", "1.Samuel", "1. Samuel"],
    ),
    (
        Book::SecondSamuel,
        &[
            0,
            27, 32, 39, 12, 25, 23, 29, 18, 13, 19,
            27, 31, 39, 33, 37, 23, 29, 32, 44, 26,
            22, 51, 39, 25,
        ],
        &["2Sam", "2 Sam", "2.Sam", "2. Sam", "2Samuel", "2 Samuel", "2.Samuel", "2. Samuel"],
    ),
    (
        Book::FirstKings,
        &[
            0,
            53, 46, 28, 20, 32, 38, 51, 66, 28, 29,
            43, 33, 34, 31, 34, 34, 24, 46, 21, 43,
            29, 54,
        ],
        &[
            "1Kö",
            "1 Kö",
            "1.Kö",
            "1. Kö",
            "1Koe",
            "1 Koe",
            "1.Koe",
            "1. Koe",
            "1Kng",
            "1 Kng",
            "1.Kng",
            "1. Kng",
            "1Könige",
            "1 Könige",
            "1.Könige",
            "1. Könige",
        ],
    ),
    (
        Book::SecondKings,
        &[
            0,
            18, 25, 27, 44, 27, 33, 20, 29, 37, 36,
            20, 22, 25, 29, 38, 20, 41, 37, 37, 21,
            26, 20, 37, 20, 30,
        ],
        &[
            "2Kö",
            "2 Kö",
            "2.Kö",
            "2. Kö",
            "2Koe",
            "2 Koe",
            "2.Koe",
            "2. Koe",
            "2Kng",
            "2 Kng",
            "2.Kng",
            "2. Kng",
            "2Könige",
            "2 Könige",
            "2.Könige",
            "2. Könige",
        ],
    ),
    (
        Book::FirstChronicles,
        &[
            0,
            54, 55, 24, 43, 41, 66, 40, 40, 44, 14,
            47, 41, 14, 17, 29, 43, 27, 17, 19, 8,
            30, 19, 32, 31, 31, 32, 34, 21, 30,
        ],
        &[
            "1Ch",
            "1 Ch",
            "1.Ch",
            "1. Ch",
            "1Chr",
            "1 Chr",
            "1.Chr",
            "1. Chr",
            "1Chronik",
            "1 Chronik",
            "1.Chronik",
            "1. Chronik",
            "1Chronika",
            "1 Chronika",
            "1.Chronika",
            "1. Chronika",
            "1Chroniken",
            "1 Chroniken",
            "1.Chroniken",
            "1. Chroniken",
        ],
    ),
    (
        Book::SecondChronicles,
        &[
            0,
            18, 17, 17, 22, 14, 42, 22, 18, 31, 19,
            23, 16, 23, 14, 19, 14, 19, 34, 11, 37,
            20, 12, 21, 27, 28, 23, 9, 27, 36, 27,
            21, 33, 25, 33, 27, 23,
        ],
        &[
            "2Ch",
            "2 Ch",
            "2.Ch",
            "2. Ch",
            "2Chr",
            "2 Chr",
            "2.Chr",
            "2. Chr",
            "2Chronik",
            "2 Chronik",
            "2.Chronik",
            "2. Chronik",
            "2Chronika",
            "2 Chronika",
            "2.Chronika",
            "2. Chronika",
            "2Chroniken",
            "2 Chroniken",
            "2.Chroniken",
            "2. Chroniken",
        ],
    ),
    (
        Book::Ezra,
        &[
            0,
            11, 70, 13, 24, 17, 22, 28, 36, 15, 44,
        ],
        &["Esra", "Esrah", "Ezra", "Ezrah"],
    ),
    (
        Book::Nehemiah,
        &[
            0,
            11, 20, 38, 17, 19, 19, 72, 18, 37, 40,
            36, 47, 31,
        ],
        &["Neh", "Nehemia"],
    ),
    (
        Book::Esther,
        &[
            0,
            22, 23, 15, 17, 14, 14, 10, 17, 32, 3,
        ],
        &["Est", "Ester", "Esther"],
    ),
    (
        Book::Job,
        &[
            0,
            22, 13, 26, 21, 27, 30, 21, 22, 35, 22,
            20, 25, 28, 22, 35, 22, 16, 21, 29, 29,
            34, 30, 17, 25, 6, 14, 23, 28, 25, 31,
            40, 22, 33, 37, 16, 33, 24, 41, 30, 32,
            26, 17,
        ],
        &["Hb", "Hio", "Hiob"],
    ),
    (
        Book::Psalms,
        &[
            0,
            6, 12, 9, 9, 13, 11, 18, 10, 21, 18,
            7, 9, 6, 7, 5, 11, 15, 51, 15, 10,
            14, 32, 6, 10, 22, 12, 14, 9, 11, 13,
            25, 11, 22, 23, 28, 13, 40, 23, 14, 18,
            14, 12, 5, 27, 18, 12, 10, 15, 21, 23,
            21, 11, 7, 9, 24, 14, 12, 12, 18, 14,
            9, 13, 12, 11, 14, 20, 8, 36, 37, 6,
            24, 20, 28, 23, 11, 13, 21, 72, 13, 20,
            17, 8, 19, 13, 14, 17, 7, 19, 53, 17,
            16, 16, 5, 23, 11, 13, 12, 9, 9, 5,
            8, 29, 22, 35, 45, 48, 43, 14, 31, 7,
            10, 10, 9, 8, 18, 19, 2, 29, 176, 7,
            8, 9, 4, 8, 5, 6, 5, 6, 8, 8,
            3, 18, 3, 3, 21, 26, 9, 8, 24, 14,
            10, 8, 12, 15, 21, 10, 20, 14, 9, 6,
        ],
        &["Ps", "Psa", "Psalm", "Psalmen"],
    ),
    (
        Book::Proverbs,
        &[
            0,
            33, 22, 35, 27, 23, 35, 27, 36, 18, 32,
            31, 28, 25, 35, 33, 33, 28, 24, 29, 30,
            31, 29, 35, 34, 28, 28, 27, 28, 27, 33,
            31,
        ],
        &["Spr", "Sprüche"],
    ),
    (
        Book::Ecclesiastes,
        &[
            0,
            18, 26, 22, 17, 19, 12, 29, 17, 18, 20,
            10, 14,
        ],
        &["Pred", "Prediger", "Koh", "Kohelet", "Ekk", "Ekkl"],
    ),
    (
        Book::SongOfSongs,
        &[
            0,
            17, 17, 11, 16, 16, 12, 14, 14,
        ],
        &["Hld", "Hohelied", "Hohelied der Liebe", "Lied der Lieder"],
    ),
    (
        Book::Isaiah,
        &[
            0,
            31, 22, 26, 6, 30, 13, 25, 23, 20, 34,
            16, 6, 22, 32, 9, 14, 14, 7, 25, 6,
            17, 25, 18, 23, 12, 21, 13, 29, 24, 33,
            9, 20, 24, 17, 10, 22, 38, 22, 8, 31,
            29, 25, 28, 28, 25, 13, 15, 22, 26, 11,
            23, 15, 12, 17, 13, 12, 21, 14, 21, 22,
            11, 12, 19, 11, 25, 24,
        ],
        &["Jes", "Jesaja"],
    ),
    (
        Book::Jeremiah,
        &[
            0,
            19, 37, 25, 31, 31, 30, 34, 23, 25, 25,
            23, 17, 27, 22, 21, 21, 27, 23, 15, 18,
            14, 30, 40, 10, 38, 24, 22, 17, 32, 24,
            40, 44, 26, 22, 19, 32, 21, 28, 18, 16,
            18, 22, 13, 30, 5, 28, 7, 47, 39, 46,
            64, 34,
        ],
        &["Jer", "Jeremia"],
    ),
    (
        Book::Lamentations,
        &[
            0,
            22, 22, 66, 22, 22,
        ],
        &["Klg", "Klagelieder"],
    ),
    (
        Book::Ezekiel,
        &[
            0,
            28, 10, 27, 17, 17, 14, 27, 18, 11, 22,
            25, 28, 23, 23, 8, 63, 24, 32, 14, 44,
            37, 31, 49, 27, 17, 21, 36, 26, 21, 26,
            18, 32, 33, 31, 15, 38, 28, 23, 29, 49,
            26, 20, 27, 31, 25, 24, 23, 35,
        ],
        &["Hes", "Hesekiel"],
    ),
    (
        Book::Daniel,
        &[
            0,
            21, 49, 33, 34, 30, 29, 28, 27, 27, 21,
            45, 13,
        ],
        &["Dan", "Daniel"],
    ),
    (
        Book::Hosea,
        &[
            0,
            9, 25, 5, 19, 15, 11, 16, 14, 17, 15,
            11, 15, 15, 10,
        ],
        &["Hos", "Hosea"],
    ),
    (
        Book::Joel,
        &[
            0,
            20, 27, 5, 21,
        ],
        &["Joe", "Joel"],
    ),
    (
        Book::Amos,
        &[
            0,
            15, 16, 15, 13, 27, 14, 17, 14, 15,
        ],
        &["Am", "Amos"],
    ),
    (
        Book::Obadiah,
        &[
            0,
            21,
        ],
        &["Obd", "Obadja"],
    ),
    (
        Book::Jonah,
        &[
            0,
            16, 11, 10, 11,
        ],
        &["Jona", "Jonah"],
    ),
    (
        Book::Micah,
        &[
            0,
            16, 13, 12, 14, 14, 16, 20,
        ],
        &["Mi", "Micha"],
    ),
    (
        Book::Nahum,
        &[
            0,
            14, 14, 19,
        ],
        &["Nah", "Nahum"],
    ),
    (
        Book::Habakkuk,
        &[
            0,
            17, 20, 19,
        ],
        &["Hab", "Habakuk", "Habakkuk"],
    ),
    (
        Book::Zephaniah,
        &[
            0,
            18, 15, 20,
        ],
        &["Zef", "Zefania", "Zefanja"],
    ),
    (
        Book::Haggai,
        &[
            0,
            15, 23,
        ],
        &["Hag", "Haggai"],
    ),
    (
        Book::Zechariah,
        &[
            0,
            17, 17, 10, 14, 11, 15, 14, 23, 17, 12,
            17, 14, 9, 21,
        ],
        &["Sac", "Sach", "Sacharja", "Sacharia"],
    ),
    (
        Book::Malachi,
        &[
            0,
            14, 17, 24,
        ],
        &["Mal", "Maleachi"],
    ),
    (
        Book::Matthew,
        &[
            0,
            25, 23, 17, 25, 48, 34, 29, 34, 38, 42,
            30, 50, 58, 36, 39, 28, 27, 35, 30, 34,
            46, 46, 39, 51, 46, 75, 66, 20,
        ],
        &["Mt", "Mtt", "Matthäus"],
    ),
    (
        Book::Mark,
        &[
            0,
            45, 28, 35, 41, 43, 56, 37, 38, 50, 52,
            33, 44, 37, 72, 47, 20,
        ],
        &["Mk", "Mrk", "Markus"],
    ),
    (
        Book::Luke,
        &[
            0,
            80, 52, 38, 44, 39, 49, 50, 56, 62, 42,
            54, 59, 35, 35, 32, 31, 37, 43, 48, 47,
            38, 71, 56, 53,
        ],
        &["Lk", "Lks", "Lukas"],
    ),
    (
        Book::John,
        &[
            0,
            51, 25, 36, 54, 47, 71, 53, 59, 41, 42,
            57, 50, 38, 31, 27, 33, 26, 40, 42, 31,
            25,
        ],
        &["Jo", "Joh", "Johannes"],
    ),
    (
        Book::Acts,
        &[
            0,
            26, 47, 26, 37, 42, 15, 60, 40, 43, 48,
            30, 25, 52, 28, 41, 40, 34, 28, 40, 38,
            40, 30, 35, 27, 27, 32, 44, 31,
        ],
        &["Apg", "Apostelgeschichte"],
    ),
    (
        Book::Romans,
        &[
            0,
            32, 29, 31, 25, 21, 23, 25, 39, 33, 21,
            36, 21, 14, 23, 33, 27,
        ],
        &["Ro", "Roe", "Roemer", "Roemerbrief", "Rö", "Röm", "Römer", "Römerbrief"],
    ),
    (
        Book::FirstCorinthians,
        &[
            0,
            31, 16, 23, 21, 13, 20, 40, 13, 27, 33,
            34, 31, 13, 40, 58, 24,
        ],
        &[
            "1Kor",
            "1 Kor",
            "1.Kor",
            "1. Kor",
            "1Korinther",
            "1 Korinther",
            "1.Korinther",
            "1. Korinther",
        ],
    ),
    (
        Book::SecondCorinthians,
        &[
            0,
            24, 17, 18, 18, 21, 18, 16, 24, 15, 18,
            33, 21, 13,
        ],
        &[
            "2Kor",
            "2 Kor",
            "2.Kor",
            "2. Kor",
            "2Korinther",
            "2 Korinther",
            "2.Korinther",
            "2. Korinther",
        ],
    ),
    (
        Book::Galatians,
        &[
            0,
            24, 21, 29, 31, 26, 18,
        ],
        &["Gal", "Galater"],
    ),
    (
        Book::Ephesians,
        &[
            0,
            23, 22, 21, 32, 33, 24,
        ],
        &["Eph", "Epheser"],
    ),
    (
        Book::Philippians,
        &[
            0,
            30, 30, 21, 23,
        ],
        &["Phil", "Philipper"],
    ),
    (
        Book::Colossians,
        &[
            0,
            29, 23, 25, 18,
        ],
        &["Kol", "Kolosser"],
    ),
    (
        Book::FirstThessalonians,
        &[
            0,
            10, 20, 13, 18, 28,
        ],
        &[
            "1Th",
            "1 Th",
            "1.Th",
            "1. Th",
            "1Thes",
            "1 Thes",
            "1.Thes",
            "1. Thes",
            "1Thessalonicher",
            "1 Thessalonicher",
            "1.Thessalonicher",
            "1. Thessalonicher",
            "1Thessaloniker",
            "1 Thessaloniker",
            "1.Thessaloniker",
            "1. Thessaloniker",
        ],
    ),
    (
        Book::SecondThessalonians,
        &[
            0,
            12, 17, 18,
        ],
        &[
            "2Th",
            "2 Th",
            "2.Th",
            "2. Th",
            "2Thes",
            "2 Thes",
            "2.Thes",
            "2. Thes",
            "2Thessalonicher",
            "2 Thessalonicher",
            "2.Thessalonicher",
            "2. Thessalonicher",
            "2Thessaloniker",
            "2 Thessaloniker",
            "2.Thessaloniker",
            "2. Thessaloniker",
        ],
    ),
    (
        Book::FirstTimothy,
        &[
            0,
            20, 15, 16, 16, 25, 21,
        ],
        &[
            "1Ti",
            "1 Ti",
            "1.Ti",
            "1. Ti",
            "1Tim",
            "1 Tim",
            "1.Tim",
            "1. Tim",
            "1Timo",
            "1 Timo",
            "1.Timo",
            "1. Timo",
            "1Timotheus",
            "1 Timotheus",
            "1.Timotheus",
            "1. Timotheus",
        ],
    ),
    (
        Book::SecondTimothy,
        &[
            0,
            18, 26, 17, 22,
        ],
        &[
            "2Ti",
            "2 Ti",
            "2.Ti",
            "2. Ti",
            "2Tim",
            "2 Tim",
            "2.Tim",
            "2. Tim",
            "2Timo",
            "2 Timo",
            "2.Timo",
            "2. Timo",
            "2Timotheus",
            "2 Timotheus",
            "2.Timotheus",
            "2. Timotheus",
        ],
    ),
    (
        Book::Titus,
        &[
            0,
            16, 15, 15,
        ],
        &["Tit", "Titus"],
    ),
    (
        Book::Philemon,
        &[
            0,
            25,
        ],
        &["Phlm", "Philemon"],
    ),
    (
        Book::Hebrews,
        &[
            0,
            14, 18, 19, 16, 14, 20, 28, 13, 28, 39,
            40, 29, 25,
        ],
        &["Heb", "Hebräer", "Hebraeer"],
    ),
    (
        Book::James,
        &[
            0,
            27, 26, 18, 17, 20,
        ],
        &["Jak", "Jakobus"],
    ),
    (
        Book::FirstPeter,
        &[
            0,
            25, 25, 22, 19, 14,
        ],
        &["1Pet", "1 Pet", "1.Pet", "1. Pet", "1Petrus", "1 Petrus", "1.Petrus", "1. Petrus"],
    ),
    (
        Book::SecondPeter,
        &[
            0,
            21, 22, 18,
        ],
        &["2Pet", "2 Pet", "2.Pet", "2. Pet", "2Petrus", "2 Petrus", "2.Petrus", "2. Petrus"],
    ),
    (
        Book::FirstJohn,
        &[
            0,
            10, 29, 24, 21, 21,
        ],
        &[
            "1Joh",
            "1 Joh",
            "1.Joh",
            "1. Joh",
            "1Johannes",
            "1 Johannes",
            "1.Johannes",
            "1. Johannes",
        ],
    ),
    (
        Book::SecondJohn,
        &[
            0,
            13,
        ],
        &[
            "2Joh",
            "2 Joh",
            "2.Joh",
            "2. Joh",
            "2Johannes",
            "2 Johannes",
            "2.Johannes",
            "2. Johannes",
        ],
    ),
    (
        Book::ThirdJohn,
        &[
            0,
            15,
        ],
        &[
            "3Joh",
            "3 Joh",
            "3.Joh",
            "3. Joh",
            "3Johannes",
            "3 Johannes",
            "3.Johannes",
            "3. Johannes",
        ],
    ),
    (
        Book::Jude,
        &[
            0,
            25,
        ],
        &["Jud", "Judas"],
    ),
    (
        Book::Revelation,
        &[
            0,
            20, 29, 22, 11, 14, 17, 17, 13, 21, 11,
            19, 18, 18, 20, 8, 21, 18, 24, 21, 15,
            27, 21,
        ],
        &["Offb", "Off", "Offenbarung"],
    ),
];
