use serde::{Deserialize, Serialize};

use crate::{
    entities::{genre, movie, person},
    recommend::Recommendation,
};

/// Relationship pattern used when recommending from a base movie.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendKind {
    #[default]
    Actors,
    Director,
    Genre,
}

#[derive(Clone, Debug, Serialize)]
pub struct MovieDto {
    pub id: i32,
    pub title: String,
    pub released: i32,
    pub rating: Option<i32>,
    pub summary: Option<String>,
    pub tagline: Option<String>,
    pub is_favorite: bool,
    pub favorited_at: Option<i64>,
    pub user_rating: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
}

impl MovieDto {
    pub fn with_cast(mut self, actors: Option<String>, director: Option<String>) -> Self {
        self.actors = actors;
        self.director = director;
        self
    }
}

impl From<movie::Model> for MovieDto {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            released: m.released,
            rating: m.rating,
            summary: m.summary,
            tagline: m.tagline,
            is_favorite: m.is_favorite,
            favorited_at: m.favorited_at,
            user_rating: m.user_rating,
            actors: None,
            director: None,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub birthday: Option<i32>,
}

impl From<person::Model> for PersonDto {
    fn from(p: person::Model) -> Self {
        Self { id: p.id, name: p.name, birthday: p.birthday }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct GenreDto {
    pub id: i32,
    pub name: String,
}

impl From<genre::Model> for GenreDto {
    fn from(g: genre::Model) -> Self {
        Self { id: g.id, name: g.name }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RecommendationDto {
    pub movie: MovieDto,
    pub reason: String,
}

impl From<Recommendation> for RecommendationDto {
    fn from(rec: Recommendation) -> Self {
        Self { movie: rec.movie.into(), reason: rec.reason }
    }
}
