//! Built-in canons.

mod kjv;
mod neue;

pub use kjv::KjvCanon;
pub use neue::NeueCanon;
