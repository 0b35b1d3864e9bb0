use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
    sea_query::{Expr, Func},
};

use crate::{
    entities::{genre, movie, person},
    error::{AppError, AppResult},
};

/// Typed access to the relational catalog. The system of record for
/// user-editable state (favorite flag, user rating); everything else is
/// read-only after seeding.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn movie_by_id(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn movies(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?)
    }

    pub async fn movies_by_year(&self, released: i32) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find()
            .filter(movie::Column::Released.eq(released))
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Exact title match after lowercasing; no whitespace or punctuation
    /// normalization. Returns the first row in store order.
    pub async fn movie_by_title(&self, title: &str) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(movie::Column::Title))).eq(title.to_lowercase()),
            )
            .order_by_asc(movie::Column::Id)
            .one(&self.db)
            .await?)
    }

    pub async fn movie_by_title_and_year(
        &self,
        title: &str,
        released: i32,
    ) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(movie::Column::Title))).eq(title.to_lowercase()),
            )
            .filter(movie::Column::Released.eq(released))
            .order_by_asc(movie::Column::Id)
            .one(&self.db)
            .await?)
    }

    pub async fn favorites(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find()
            .filter(movie::Column::IsFavorite.eq(true))
            .order_by_desc(movie::Column::FavoritedAt)
            .all(&self.db)
            .await?)
    }

    /// The favorited-at timestamp changes only on an actual transition:
    /// set on false->true, cleared on true->false, untouched otherwise.
    pub async fn set_favorite(&self, id: i32, favorite: bool) -> AppResult<movie::Model> {
        let Some(current) = self.movie_by_id(id).await? else {
            return Err(AppError::NotFound(format!("movie {id} not found")));
        };

        if current.is_favorite == favorite {
            return Ok(current);
        }

        let mut active: movie::ActiveModel = current.into();
        active.is_favorite = Set(favorite);
        active.favorited_at = Set(favorite.then(now_sec));
        Ok(active.update(&self.db).await?)
    }

    /// `Some(rating)` must be within 1..=10; `None` clears the rating.
    /// The stored record is left unmodified on rejection.
    pub async fn set_user_rating(
        &self,
        id: i32,
        rating: Option<i32>,
    ) -> AppResult<movie::Model> {
        if let Some(value) = rating {
            if !(1..=10).contains(&value) {
                return Err(AppError::InvalidInput(format!(
                    "user rating must be between 1 and 10, got {value}"
                )));
            }
        }

        let Some(current) = self.movie_by_id(id).await? else {
            return Err(AppError::NotFound(format!("movie {id} not found")));
        };

        let mut active: movie::ActiveModel = current.into();
        active.user_rating = Set(rating);
        Ok(active.update(&self.db).await?)
    }

    pub async fn person_by_id(&self, id: i32) -> AppResult<Option<person::Model>> {
        Ok(person::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn person_by_name(&self, name: &str) -> AppResult<Option<person::Model>> {
        Ok(person::Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(person::Column::Name))).eq(name.to_lowercase()))
            .order_by_asc(person::Column::Id)
            .one(&self.db)
            .await?)
    }

    pub async fn genre_by_name(&self, name: &str) -> AppResult<Option<genre::Model>> {
        Ok(genre::Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(genre::Column::Name))).eq(name.to_lowercase()))
            .one(&self.db)
            .await?)
    }

    /// Genre names are unique case-insensitively; duplicates are rejected
    /// before touching storage.
    pub async fn insert_genre(&self, name: &str) -> AppResult<genre::Model> {
        let name = name.trim();
        if name.is_empty() || name.len() > 50 {
            return Err(AppError::InvalidInput(
                "genre name must be between 1 and 50 characters".to_string(),
            ));
        }
        if self.genre_by_name(name).await?.is_some() {
            return Err(AppError::InvalidInput(format!("genre '{name}' already exists")));
        }

        let active = genre::ActiveModel { name: Set(name.to_string()), ..Default::default() };
        Ok(active.insert(&self.db).await?)
    }

    pub async fn insert_movies(&self, rows: Vec<movie::ActiveModel>) -> AppResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        movie::Entity::insert_many(rows).exec(&self.db).await?;
        Ok(())
    }

    pub async fn insert_people(&self, rows: Vec<person::ActiveModel>) -> AppResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        person::Entity::insert_many(rows).exec(&self.db).await?;
        Ok(())
    }

    pub async fn is_empty(&self) -> AppResult<bool> {
        let movies = movie::Entity::find().count(&self.db).await?;
        let people = person::Entity::find().count(&self.db).await?;
        let genres = genre::Entity::find().count(&self.db).await?;
        Ok(movies == 0 && people == 0 && genres == 0)
    }
}

fn now_sec() -> i64 {
    jiff::Timestamp::now().as_second()
}
