use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GenreName(String);

impl GenreName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl AsRef<String> for GenreName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

impl From<GenreName> for String {
    fn from(name: GenreName) -> Self {
        name.0
    }
}
