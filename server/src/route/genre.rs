use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{parse_id, CreateGenreForm, DeleteGenreForm, UpdateGenreForm};
use crate::response::{GenreDeleteView, GenreDetailView, GenreFormView, GenreListView};
use application::service::{
    CreateGenreService, DeleteGenreService, GenreDetailService, GenreListService, GetGenreService,
    UpdateGenreService,
};
use application::transfer::{
    CreateGenreOutcome, DeleteGenreOutcome, GetGenreDetailDto, UpdateGenreOutcome,
};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use axum::{Form, Router};

pub trait GenreRouter {
    fn route_genre(self) -> Self;
}

impl GenreRouter for Router<AppModule> {
    fn route_genre(self) -> Self {
        self.route(
            "/genres",
            get(|State(module): State<AppModule>| async move {
                module
                    .pgpool()
                    .genre_list()
                    .await
                    .map(GenreListView::new)
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/genre/create",
            get(|| async { GenreFormView::create_form() }).post(
                |State(module): State<AppModule>, Form(form): Form<CreateGenreForm>| async move {
                    match module.pgpool().create_genre(form.into_dto()).await {
                        Ok(CreateGenreOutcome::Invalid { name, errors }) => {
                            GenreFormView::create_invalid(name, errors).into_response()
                        }
                        Ok(CreateGenreOutcome::Existing { genre })
                        | Ok(CreateGenreOutcome::Created { genre }) => {
                            Redirect::to(&genre.url).into_response()
                        }
                        Err(e) => ErrorStatus::from(e).into_response(),
                    }
                },
            ),
        )
        .route(
            "/genre/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    let id = match parse_id(&id) {
                        Ok(id) => id,
                        Err(status) => return status.into_response(),
                    };
                    match module.pgpool().genre_detail(GetGenreDetailDto { id }).await {
                        Ok(detail) => GenreDetailView::from(detail).into_response(),
                        Err(e) => ErrorStatus::from(e).into_response(),
                    }
                },
            ),
        )
        .route(
            "/genre/:id/delete",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    let id = match parse_id(&id) {
                        Ok(id) => id,
                        Err(status) => return status.into_response(),
                    };
                    match module.pgpool().genre_detail(GetGenreDetailDto { id }).await {
                        Ok(detail) => GenreDeleteView::from(detail).into_response(),
                        Err(e) => ErrorStatus::from(e).into_response(),
                    }
                },
            )
            .post(
                |State(module): State<AppModule>, Form(form): Form<DeleteGenreForm>| async move {
                    let dto = match form.into_dto() {
                        Ok(dto) => dto,
                        Err(status) => return status.into_response(),
                    };
                    match module.pgpool().delete_genre(dto).await {
                        Ok(DeleteGenreOutcome::Blocked { genre, books }) => {
                            GenreDeleteView::new(genre, books).into_response()
                        }
                        Ok(DeleteGenreOutcome::Deleted) => Redirect::to("/genres").into_response(),
                        Err(e) => ErrorStatus::from(e).into_response(),
                    }
                },
            ),
        )
        .route(
            "/genre/:id/update",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    let id = match parse_id(&id) {
                        Ok(id) => id,
                        Err(status) => return status.into_response(),
                    };
                    match module.pgpool().get_genre(id).await {
                        Ok(genre) => GenreFormView::update_form(genre).into_response(),
                        Err(e) => ErrorStatus::from(e).into_response(),
                    }
                },
            )
            .post(
                |State(module): State<AppModule>,
                 Path(id): Path<String>,
                 Form(form): Form<UpdateGenreForm>| async move {
                    let id = match parse_id(&id) {
                        Ok(id) => id,
                        Err(status) => return status.into_response(),
                    };
                    match module.pgpool().update_genre(form.into_dto(id)).await {
                        Ok(UpdateGenreOutcome::Invalid { genre, errors }) => {
                            GenreFormView::update_invalid(genre, errors).into_response()
                        }
                        Ok(UpdateGenreOutcome::Updated { genre }) => {
                            Redirect::to(&genre.url).into_response()
                        }
                        Err(e) => ErrorStatus::from(e).into_response(),
                    }
                },
            ),
        )
    }
}
