use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use futures::{StreamExt, stream};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{GenreDto, MovieDto, PersonDto, RecommendKind, RecommendationDto},
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/movies", get(list_movies))
        .route("/api/movies/favorites", get(favorites))
        .route("/api/movies/{id}", get(get_movie))
        .route("/api/movies/{id}/actors", get(movie_actors))
        .route("/api/movies/{id}/directors", get(movie_directors))
        .route("/api/movies/{id}/genres", get(movie_genres))
        .route("/api/movies/{id}/favorite", post(add_favorite).delete(remove_favorite))
        .route("/api/movies/{id}/rating", post(set_rating).delete(clear_rating))
        .route("/api/persons/{id}/movies", get(person_movies))
        .route("/api/recommendations/movie/{id}", get(movie_recommendations))
        .route("/api/recommendations/popular", get(popular_recommendations))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct ListParams {
    year: Option<i32>,
}

async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<MovieDto>>> {
    let movies = match params.year {
        Some(year) => state.store.movies_by_year(year).await?,
        None => state.store.movies().await?,
    };

    // Lead actor and director come from the graph, one movie at a time;
    // bound the fan-out and keep row order.
    let dtos = stream::iter(movies)
        .map(|movie| {
            let recommender = state.recommender.clone();
            async move {
                let (actors, director) = recommender.display_cast(&movie.title, true).await;
                MovieDto::from(movie).with_cast(actors, director)
            }
        })
        .buffered(state.config.max_concurrent.max(1))
        .collect::<Vec<_>>()
        .await;

    Ok(Json(dtos))
}

async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<MovieDto>> {
    let Some(movie) = state.store.movie_by_id(id).await? else {
        return Err(AppError::NotFound(format!("movie {id} not found")));
    };

    let (actors, director) = state.recommender.display_cast(&movie.title, false).await;
    Ok(Json(MovieDto::from(movie).with_cast(actors, director)))
}

async fn movie_actors(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<PersonDto>>> {
    let actors = state.recommender.actors_for_movie(id).await?;
    Ok(Json(actors.into_iter().map(PersonDto::from).collect()))
}

async fn movie_directors(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<PersonDto>>> {
    let directors = state.recommender.directors_for_movie(id).await?;
    Ok(Json(directors.into_iter().map(PersonDto::from).collect()))
}

async fn movie_genres(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<GenreDto>>> {
    let genres = state.recommender.genres_for_movie(id).await?;
    Ok(Json(genres.into_iter().map(GenreDto::from).collect()))
}

async fn favorites(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<MovieDto>>> {
    let favorites = state.store.favorites().await?;
    Ok(Json(favorites.into_iter().map(MovieDto::from).collect()))
}

async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<MovieDto>> {
    let movie = state.store.set_favorite(id, true).await?;
    Ok(Json(movie.into()))
}

async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<MovieDto>> {
    let movie = state.store.set_favorite(id, false).await?;
    Ok(Json(movie.into()))
}

async fn set_rating(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(rating): Json<i32>,
) -> AppResult<Json<MovieDto>> {
    let movie = state.store.set_user_rating(id, Some(rating)).await?;
    Ok(Json(movie.into()))
}

async fn clear_rating(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<MovieDto>> {
    let movie = state.store.set_user_rating(id, None).await?;
    Ok(Json(movie.into()))
}

async fn person_movies(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<MovieDto>>> {
    let movies = state.recommender.movies_for_person(id).await?;
    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

#[derive(Debug, Deserialize)]
struct RecommendParams {
    #[serde(default = "default_count")]
    count: u64,
    #[serde(default)]
    kind: RecommendKind,
}

fn default_count() -> u64 {
    4
}

async fn movie_recommendations(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(params): Query<RecommendParams>,
) -> AppResult<Json<Vec<RecommendationDto>>> {
    let recs = state.recommender.for_movie(id, params.count, params.kind).await?;
    Ok(Json(recs.into_iter().map(RecommendationDto::from).collect()))
}

async fn popular_recommendations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecommendParams>,
) -> AppResult<Json<Vec<RecommendationDto>>> {
    let recs = state.recommender.popular(params.count).await?;
    Ok(Json(recs.into_iter().map(RecommendationDto::from).collect()))
}
