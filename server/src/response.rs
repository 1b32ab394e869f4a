mod genre;

pub use self::genre::*;
