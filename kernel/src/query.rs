mod book;
mod genre;

pub use self::{book::*, genre::*};
