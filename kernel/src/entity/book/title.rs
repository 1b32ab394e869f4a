use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }
}

impl AsRef<String> for BookTitle {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

impl From<BookTitle> for String {
    fn from(title: BookTitle) -> Self {
        title.0
    }
}
