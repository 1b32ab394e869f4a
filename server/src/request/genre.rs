use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use application::transfer::{CreateGenreDto, DeleteGenreDto, UpdateGenreDto};

/// Path ids arrive as raw strings; they are trimmed before parsing and an
/// unparsable id is rejected before any query runs.
pub fn parse_id(raw: &str) -> Result<Uuid, StatusCode> {
    Uuid::parse_str(raw.trim()).map_err(|_| StatusCode::BAD_REQUEST)
}

#[derive(Debug, Deserialize)]
pub struct CreateGenreForm {
    name: String,
}

impl CreateGenreForm {
    pub fn into_dto(self) -> CreateGenreDto {
        CreateGenreDto { name: self.name }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateGenreForm {
    name: String,
}

impl UpdateGenreForm {
    pub fn into_dto(self, id: Uuid) -> UpdateGenreDto {
        UpdateGenreDto {
            id,
            name: self.name,
        }
    }
}

/// The delete target is carried in the body, not the path.
#[derive(Debug, Deserialize)]
pub struct DeleteGenreForm {
    genreid: String,
}

impl DeleteGenreForm {
    pub fn into_dto(self) -> Result<DeleteGenreDto, StatusCode> {
        let id = parse_id(&self.genreid)?;
        Ok(DeleteGenreDto { id })
    }
}

#[cfg(test)]
mod test {
    use super::parse_id;
    use axum::http::StatusCode;

    #[test]
    fn parse_id_trims_whitespace() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(parse_id(&format!("  {id} ")), Ok(id));
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert_eq!(parse_id("not-an-id"), Err(StatusCode::BAD_REQUEST));
        assert_eq!(parse_id(""), Err(StatusCode::BAD_REQUEST));
    }
}
