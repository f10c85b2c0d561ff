//! Book naming schemes for `osisID` and `osisRef` values.

use super::Book;

/// Maps books to the short codes written into identifiers.
pub trait NamingScheme {
    fn code(&self, book: Book) -> &'static str;
}

/// OSIS book abbreviations (`Gen`, `Matt`, `1John`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsisNaming;

impl NamingScheme for OsisNaming {
    fn code(&self, book: Book) -> &'static str {
        match book {
            Book::Genesis => "Gen",
            Book::Exodus => "Exod",
            Book::Leviticus => "Lev",
            Book::Numbers => "Num",
            Book::Deuteronomy => "Deut",
            Book::Joshua => "Josh",
            Book::Judges => "Judg",
            Book::Ruth => "Ruth",
            Book::FirstSamuel => "1Sam",
            Book::SecondSamuel => "2Sam",
            Book::FirstKings => "1Kgs",
            Book::SecondKings => "2Kgs",
            Book::FirstChronicles => "1Chr",
            Book::SecondChronicles => "2Chr",
            Book::Ezra => "Ezra",
            Book::Nehemiah => "Neh",
            Book::Esther => "Esth",
            Book::Job => "Job",
            Book::Psalms => "Ps",
            Book::Proverbs => "Prov",
            Book::Ecclesiastes => "Eccl",
            Book::SongOfSongs => "Song",
            Book::Isaiah => "Isa",
            Book::Jeremiah => "Jer",
            Book::Lamentations => "Lam",
            Book::Ezekiel => "Ezek",
            Book::Daniel => "Dan",
            Book::Hosea => "Hos",
            Book::Joel => "Joel",
            Book::Amos => "Amos",
            Book::Obadiah => "Obad",
            Book::Jonah => "Jonah",
            Book::Micah => "Mic",
            Book::Nahum => "Nah",
            Book::Habakkuk => "Hab",
            Book::Zephaniah => "Zeph",
            Book::Haggai => "Hag",
            Book::Zechariah => "Zech",
            Book::Malachi => "Mal",
            Book::Matthew => "Matt",
            Book::Mark => "Mark",
            Book::Luke => "Luke",
            Book::John => "John",
            Book::Acts => "Acts",
            Book::Romans => "Rom",
            Book::FirstCorinthians => "1Cor",
            Book::SecondCorinthians => "2Cor",
            Book::Galatians => "Gal",
            Book::Ephesians => "Eph",
            Book::Philippians => "Phil",
            Book::Colossians => "Col",
            Book::FirstThessalonians => "1Thess",
            Book::SecondThessalonians => "2Thess",
            Book::FirstTimothy => "1Tim",
            Book::SecondTimothy => "2Tim",
            Book::Titus => "Titus",
            Book::Philemon => "Phlm",
            Book::Hebrews => "Heb",
            Book::James => "Jas",
            Book::FirstPeter => "1Pet",
            Book::SecondPeter => "2Pet",
            Book::FirstJohn => "1John",
            Book::SecondJohn => "2John",
            Book::ThirdJohn => "3John",
            Book::Jude => "Jude",
            Book::Revelation => "Rev",
            Book::Baruch => "Bar",
            Book::DanielGreek => "AddDan",
            Book::BelAndTheDragon => "Bel",
            Book::SongOfTheThreeYoungMen => "SgThree",
            Book::Susanna => "Sus",
            Book::FirstEsdras => "1Esd",
            Book::SecondEsdras => "2Esd",
            Book::EstherGreek => "AddEsth",
            Book::LetterOfJeremiah => "EpJer",
            Book::Judith => "Jdt",
            Book::FirstMaccabees => "1Macc",
            Book::SecondMaccabees => "2Macc",
            Book::ThirdMaccabees => "3Macc",
            Book::FourthMaccabees => "4Macc",
            Book::PrayerOfManasseh => "PrMan",
            Book::Sirach => "Sir",
            Book::Tobit => "Tob",
            Book::WisdomOfSolomon => "Wis",
        }
    }
}

/// USFM 3 book identifiers (`GEN`, `MAT`, `1JN`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Usfm3Naming;

impl NamingScheme for Usfm3Naming {
    fn code(&self, book: Book) -> &'static str {
        match book {
            Book::Genesis => "GEN",
            Book::Exodus => "EXO",
            Book::Leviticus => "LEV",
            Book::Numbers => "NUM",
            Book::Deuteronomy => "DEU",
            Book::Joshua => "JOS",
            Book::Judges => "JDG",
            Book::Ruth => "RUT",
            Book::FirstSamuel => "1SA",
            Book::SecondSamuel => "2SA",
            Book::FirstKings => "1KI",
            Book::SecondKings => "2KI",
            Book::FirstChronicles => "1CH",
            Book::SecondChronicles => "2CH",
            Book::Ezra => "EZR",
            Book::Nehemiah => "NEH",
            Book::Esther => "EST",
            Book::Job => "JOB",
            Book::Psalms => "PSA",
            Book::Proverbs => "PRO",
            Book::Ecclesiastes => "ECC",
            Book::SongOfSongs => "SNG",
            Book::Isaiah => "ISA",
            Book::Jeremiah => "JER",
            Book::Lamentations => "LAM",
            Book::Ezekiel => "EZK",
            Book::Daniel => "DAN",
            Book::Hosea => "HOS",
            Book::Joel => "JOL",
            Book::Amos => "AMO",
            Book::Obadiah => "OBA",
            Book::Jonah => "JON",
            Book::Micah => "MIC",
            Book::Nahum => "NAM",
            Book::Habakkuk => "HAB",
            Book::Zephaniah => "ZEP",
            Book::Haggai => "HAG",
            Book::Zechariah => "ZEC",
            Book::Malachi => "MAL",
            Book::Matthew => "MAT",
            Book::Mark => "MRK",
            Book::Luke => "LUK",
            Book::John => "JHN",
            Book::Acts => "ACT",
            Book::Romans => "ROM",
            Book::FirstCorinthians => "1CO",
            Book::SecondCorinthians => "2CO",
            Book::Galatians => "GAL",
            Book::Ephesians => "EPH",
            Book::Philippians => "PHP",
            Book::Colossians => "COL",
            Book::FirstThessalonians => "1TH",
            Book::SecondThessalonians => "2TH",
            Book::FirstTimothy => "1TI",
            Book::SecondTimothy => "2TI",
            Book::Titus => "TIT",
            Book::Philemon => "PHM",
            Book::Hebrews => "HEB",
            Book::James => "JAS",
            Book::FirstPeter => "1PE",
            Book::SecondPeter => "2PE",
            Book::FirstJohn => "1JN",
            Book::SecondJohn => "2JN",
            Book::ThirdJohn => "3JN",
            Book::Jude => "JUD",
            Book::Revelation => "REV",
            Book::Baruch => "BAR",
            Book::DanielGreek => "DAG",
            Book::BelAndTheDragon => "BEL",
            Book::SongOfTheThreeYoungMen => "S3Y",
            Book::Susanna => "SUS",
            Book::FirstEsdras => "1ES",
            Book::SecondEsdras => "2ES",
            Book::EstherGreek => "ESG",
            Book::LetterOfJeremiah => "LJE",
            Book::Judith => "JDT",
            Book::FirstMaccabees => "1MA",
            Book::SecondMaccabees => "2MA",
            Book::ThirdMaccabees => "3MA",
            Book::FourthMaccabees => "4MA",
            Book::PrayerOfManasseh => "MAN",
            Book::Sirach => "SIR",
            Book::Tobit => "TOB",
            Book::WisdomOfSolomon => "WIS",
        }
    }
}
