use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use application::service::{
    CreateGenreService, DeleteGenreService, GenreDetailService, GenreListService, GetGenreService,
    UpdateGenreService,
};
use application::transfer::{
    CreateGenreDto, CreateGenreOutcome, DeleteGenreDto, DeleteGenreOutcome, GetGenreDetailDto,
    UpdateGenreDto, UpdateGenreOutcome,
};
use kernel::interface::database::QueryDatabaseConnection;
use kernel::interface::query::{BookQuery, DependOnBookQuery, DependOnGenreQuery, GenreQuery};
use kernel::interface::update::{DependOnGenreModifier, GenreModifier};
use kernel::prelude::entity::{Book, BookId, BookTitle, Genre, GenreId, GenreName};
use kernel::KernelError;

/// Shared in-memory tables standing in for the database pool.
#[derive(Debug, Clone, Default)]
struct Store {
    genres: Arc<Mutex<BTreeMap<Uuid, Genre>>>,
    books: Arc<Mutex<BTreeMap<Uuid, Book>>>,
}

impl Store {
    fn insert_book(&self, title: &str, genre_id: &GenreId) {
        let id = Uuid::new_v4();
        self.books.lock().unwrap().insert(
            id,
            Book::new(BookId::new(id), BookTitle::new(title), genre_id.clone()),
        );
    }

    fn genre_count(&self) -> usize {
        self.genres.lock().unwrap().len()
    }

    fn genre_name(&self, id: &Uuid) -> Option<String> {
        self.genres
            .lock()
            .unwrap()
            .get(id)
            .map(|g| g.name().as_ref().clone())
    }
}

struct InMemoryGenreRepository {
    store: Store,
}

#[async_trait::async_trait]
impl GenreQuery<()> for InMemoryGenreRepository {
    async fn find_all(&self, _con: &mut ()) -> error_stack::Result<Vec<Genre>, KernelError> {
        let mut genres: Vec<_> = self.store.genres.lock().unwrap().values().cloned().collect();
        genres.sort_by(|a, b| a.name().as_ref().cmp(b.name().as_ref()));
        Ok(genres)
    }

    async fn find_by_id(
        &self,
        _con: &mut (),
        id: &GenreId,
    ) -> error_stack::Result<Option<Genre>, KernelError> {
        Ok(self.store.genres.lock().unwrap().get(id.as_ref()).cloned())
    }

    async fn find_by_name(
        &self,
        _con: &mut (),
        name: &GenreName,
    ) -> error_stack::Result<Option<Genre>, KernelError> {
        Ok(self
            .store
            .genres
            .lock()
            .unwrap()
            .values()
            .find(|g| g.name() == name)
            .cloned())
    }
}

#[async_trait::async_trait]
impl GenreModifier<()> for InMemoryGenreRepository {
    async fn create(&self, _con: &mut (), genre: &Genre) -> error_stack::Result<(), KernelError> {
        self.store
            .genres
            .lock()
            .unwrap()
            .insert(*genre.id().as_ref(), genre.clone());
        Ok(())
    }

    async fn update(&self, _con: &mut (), genre: &Genre) -> error_stack::Result<(), KernelError> {
        let mut genres = self.store.genres.lock().unwrap();
        if genres.contains_key(genre.id().as_ref()) {
            genres.insert(*genre.id().as_ref(), genre.clone());
        }
        Ok(())
    }

    async fn delete(
        &self,
        _con: &mut (),
        genre_id: &GenreId,
    ) -> error_stack::Result<(), KernelError> {
        self.store.genres.lock().unwrap().remove(genre_id.as_ref());
        Ok(())
    }
}

struct InMemoryBookRepository {
    store: Store,
}

#[async_trait::async_trait]
impl BookQuery<()> for InMemoryBookRepository {
    async fn find_by_genre_id(
        &self,
        _con: &mut (),
        genre_id: &GenreId,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(self
            .store
            .books
            .lock()
            .unwrap()
            .values()
            .filter(|b| b.genre() == genre_id)
            .cloned()
            .collect())
    }
}

struct InMemoryDatabase {
    store: Store,
    genre_repository: InMemoryGenreRepository,
    book_repository: InMemoryBookRepository,
}

impl InMemoryDatabase {
    fn new() -> Self {
        let store = Store::default();
        Self {
            genre_repository: InMemoryGenreRepository {
                store: store.clone(),
            },
            book_repository: InMemoryBookRepository {
                store: store.clone(),
            },
            store,
        }
    }
}

#[async_trait::async_trait]
impl QueryDatabaseConnection<()> for InMemoryDatabase {
    async fn transact(&self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

impl DependOnGenreQuery<()> for InMemoryDatabase {
    type GenreQuery = InMemoryGenreRepository;
    fn genre_query(&self) -> &Self::GenreQuery {
        &self.genre_repository
    }
}

impl DependOnGenreModifier<()> for InMemoryDatabase {
    type GenreModifier = InMemoryGenreRepository;
    fn genre_modifier(&self) -> &Self::GenreModifier {
        &self.genre_repository
    }
}

impl DependOnBookQuery<()> for InMemoryDatabase {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &self.book_repository
    }
}

async fn create(db: &InMemoryDatabase, name: &str) -> CreateGenreOutcome {
    db.create_genre(CreateGenreDto {
        name: name.to_string(),
    })
    .await
    .unwrap()
}

fn created_id(outcome: &CreateGenreOutcome) -> Uuid {
    match outcome {
        CreateGenreOutcome::Created { genre } | CreateGenreOutcome::Existing { genre } => genre.id,
        CreateGenreOutcome::Invalid { .. } => panic!("expected a created genre"),
    }
}

#[tokio::test]
async fn list_is_sorted_by_name() {
    let db = InMemoryDatabase::new();
    create(&db, "Sci-Fi").await;
    create(&db, "Classic").await;
    create(&db, "Fantasy").await;

    let names: Vec<_> = db
        .genre_list()
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Classic", "Fantasy", "Sci-Fi"]);
}

#[tokio::test]
async fn create_rejects_blank_name_without_writing() {
    let db = InMemoryDatabase::new();

    let outcome = create(&db, "   ").await;
    match outcome {
        CreateGenreOutcome::Invalid { name, errors } => {
            assert_eq!(name, "");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "name");
            assert_eq!(errors[0].message, "Genre name required");
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
    assert_eq!(db.store.genre_count(), 0);
}

#[tokio::test]
async fn create_is_idempotent_for_same_name() {
    let db = InMemoryDatabase::new();

    let first = create(&db, "Horror").await;
    let second = create(&db, "Horror").await;

    assert!(matches!(first, CreateGenreOutcome::Created { .. }));
    match &second {
        CreateGenreOutcome::Existing { genre } => {
            assert_eq!(genre.id, created_id(&first));
            assert_eq!(genre.url, format!("/genre/{}", genre.id));
        }
        other => panic!("expected Existing, got {other:?}"),
    }
    assert_eq!(db.store.genre_count(), 1);
}

#[tokio::test]
async fn create_sanitizes_the_name() {
    let db = InMemoryDatabase::new();

    let outcome = create(&db, "  Rock & Roll  ").await;
    let id = created_id(&outcome);
    assert_eq!(db.store.genre_name(&id), Some("Rock &amp; Roll".into()));
}

#[tokio::test]
async fn detail_round_trip_after_create() {
    let db = InMemoryDatabase::new();

    let id = created_id(&create(&db, "Sci-Fi").await);
    let detail = db.genre_detail(GetGenreDetailDto { id }).await.unwrap();

    let genre = detail.genre.expect("genre should be found");
    assert_eq!(genre.id, id);
    assert_eq!(genre.name, "Sci-Fi");
    assert_eq!(genre.url, format!("/genre/{id}"));
    assert!(detail.books.is_empty());
}

#[tokio::test]
async fn detail_joins_dependent_books() {
    let db = InMemoryDatabase::new();

    let id = created_id(&create(&db, "Fantasy").await);
    db.store.insert_book("The Hobbit", &GenreId::new(id));
    db.store.insert_book("Earthsea", &GenreId::new(id));

    let detail = db.genre_detail(GetGenreDetailDto { id }).await.unwrap();
    assert!(detail.genre.is_some());
    assert_eq!(detail.books.len(), 2);
}

#[tokio::test]
async fn detail_of_unknown_genre_renders_empty_state() {
    let db = InMemoryDatabase::new();

    let detail = db
        .genre_detail(GetGenreDetailDto { id: Uuid::new_v4() })
        .await
        .unwrap();
    assert!(detail.genre.is_none());
    assert!(detail.books.is_empty());
}

#[tokio::test]
async fn delete_is_blocked_while_books_reference_the_genre() {
    let db = InMemoryDatabase::new();

    let id = created_id(&create(&db, "Poetry").await);
    db.store.insert_book("Leaves of Grass", &GenreId::new(id));

    let outcome = db.delete_genre(DeleteGenreDto { id }).await.unwrap();
    match outcome {
        DeleteGenreOutcome::Blocked { genre, books } => {
            assert_eq!(genre.unwrap().id, id);
            assert_eq!(books.len(), 1);
            assert_eq!(books[0].title, "Leaves of Grass");
        }
        other => panic!("expected Blocked, got {other:?}"),
    }
    assert_eq!(db.store.genre_count(), 1);
}

#[tokio::test]
async fn delete_removes_an_unreferenced_genre() {
    let db = InMemoryDatabase::new();

    let id = created_id(&create(&db, "Essays").await);

    let outcome = db.delete_genre(DeleteGenreDto { id }).await.unwrap();
    assert_eq!(outcome, DeleteGenreOutcome::Deleted);

    let detail = db.genre_detail(GetGenreDetailDto { id }).await.unwrap();
    assert!(detail.genre.is_none());
}

#[tokio::test]
async fn update_preserves_the_id() {
    let db = InMemoryDatabase::new();

    let id = created_id(&create(&db, "OldName").await);

    let outcome = db
        .update_genre(UpdateGenreDto {
            id,
            name: "NewName".to_string(),
        })
        .await
        .unwrap();
    match outcome {
        UpdateGenreOutcome::Updated { genre } => {
            assert_eq!(genre.id, id);
            assert_eq!(genre.name, "NewName");
        }
        other => panic!("expected Updated, got {other:?}"),
    }
    assert_eq!(db.store.genre_name(&id), Some("NewName".into()));
}

#[tokio::test]
async fn update_with_blank_name_refetches_by_input_id() {
    let db = InMemoryDatabase::new();

    let id = created_id(&create(&db, "Drama").await);

    let outcome = db
        .update_genre(UpdateGenreDto {
            id,
            name: "  ".to_string(),
        })
        .await
        .unwrap();
    match outcome {
        UpdateGenreOutcome::Invalid { genre, errors } => {
            let genre = genre.expect("edit form should carry the current genre");
            assert_eq!(genre.id, id);
            assert_eq!(genre.name, "Drama");
            assert_eq!(errors[0].message, "Name must not be empty.");
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
    // Nothing was written.
    assert_eq!(db.store.genre_name(&id), Some("Drama".into()));
}

#[tokio::test]
async fn update_form_fetch_by_id() {
    let db = InMemoryDatabase::new();

    let id = created_id(&create(&db, "Satire").await);
    let genre = db.get_genre(id).await.unwrap().unwrap();
    assert_eq!(genre.name, "Satire");

    assert!(db.get_genre(Uuid::new_v4()).await.unwrap().is_none());
}
