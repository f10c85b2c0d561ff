//! Bible structure: books, verses, canons and naming schemes.

mod book;
mod canon;
pub mod canons;
mod naming;
mod verse;

pub use book::Book;
pub use canon::{BookEntry, Canon, SimpleCanon};
pub use canons::{KjvCanon, NeueCanon};
pub use naming::{NamingScheme, OsisNaming, Usfm3Naming};
pub use verse::Verse;
