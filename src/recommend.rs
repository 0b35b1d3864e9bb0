use std::sync::Arc;

use tracing::debug;

use crate::{
    entities::{genre, movie, person},
    error::{AppError, AppResult},
    graph::GraphSource,
    models::RecommendKind,
    reconcile::Reconciler,
    store::MovieStore,
};

/// Movie ids probed with shared-actor queries when the popularity query
/// returns fewer results than requested.
const BACKFILL_SEED_IDS: [i32; 5] = [1, 2, 3, 4, 5];
const BACKFILL_PER_SEED: i64 = 2;

#[derive(Clone, Debug)]
pub struct Recommendation {
    pub movie: movie::Model,
    pub reason: String,
}

/// Composes the store, the graph executor and the reconciler into the
/// caller-facing operations: per-movie and popularity recommendations plus
/// the cast/genre listings.
#[derive(Clone)]
pub struct Recommender {
    store: MovieStore,
    graph: Arc<dyn GraphSource>,
}

impl Recommender {
    pub fn new(store: MovieStore, graph: Arc<dyn GraphSource>) -> Self {
        Self { store, graph }
    }

    /// Recommendations sharing an actor, director or genre with the given
    /// movie, in graph order, truncated to `count`. The queried movie
    /// itself never appears.
    pub async fn for_movie(
        &self,
        movie_id: i32,
        count: u64,
        kind: RecommendKind,
    ) -> AppResult<Vec<Recommendation>> {
        let Some(base) = self.store.movie_by_id(movie_id).await? else {
            return Err(AppError::NotFound(format!("movie {movie_id} not found")));
        };

        let facts = self.graph.related_titles(kind, &base.title, count as i64).await;

        let mut reconciler = Reconciler::new(&self.store);
        reconciler.exclude(base.id);

        let mut recs = Vec::new();
        for fact in facts {
            if recs.len() as u64 >= count {
                break;
            }
            if let Some(movie) = reconciler.resolve(&fact.title, fact.released).await? {
                recs.push(Recommendation { reason: relation_reason(kind, &fact.name), movie });
            }
        }
        Ok(recs)
    }

    /// Top-rated movies from the graph, ordered by descending rating, with
    /// a shared-actor backfill pass when the primary query under-returns.
    /// Always succeeds; a degraded graph yields an empty list.
    pub async fn popular(&self, count: u64) -> AppResult<Vec<Recommendation>> {
        let rated = self.graph.top_rated_titles(count as i64).await;

        let mut reconciler = Reconciler::new(&self.store);
        let mut ranked = Vec::new();
        for row in rated {
            if let Some(movie) = reconciler.resolve(&row.title, row.released).await? {
                ranked.push((row.rating, Recommendation { reason: rating_reason(row.rating), movie }));
            }
        }
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        let mut recs: Vec<Recommendation> = ranked.into_iter().map(|(_, rec)| rec).collect();
        if (recs.len() as u64) < count {
            debug!(have = recs.len(), want = count, "popularity query under-returned, backfilling");
            self.backfill(&mut recs, &mut reconciler, count).await?;
        }
        recs.truncate(count as usize);
        Ok(recs)
    }

    async fn backfill(
        &self,
        recs: &mut Vec<Recommendation>,
        reconciler: &mut Reconciler<'_>,
        count: u64,
    ) -> AppResult<()> {
        for seed_id in BACKFILL_SEED_IDS {
            if recs.len() as u64 >= count {
                break;
            }
            let Some(seed) = self.store.movie_by_id(seed_id).await? else {
                continue;
            };

            let facts = self
                .graph
                .related_titles(RecommendKind::Actors, &seed.title, BACKFILL_PER_SEED)
                .await;
            for fact in facts {
                if recs.len() as u64 >= count {
                    break;
                }
                if let Some(movie) = reconciler.resolve(&fact.title, fact.released).await? {
                    recs.push(Recommendation {
                        reason: relation_reason(RecommendKind::Actors, &fact.name),
                        movie,
                    });
                }
            }
        }
        Ok(())
    }

    /// All cast members of a movie, reconciled against the person table.
    /// Unknown movie ids and degraded graphs both yield an empty list.
    pub async fn actors_for_movie(&self, movie_id: i32) -> AppResult<Vec<person::Model>> {
        let Some(movie) = self.store.movie_by_id(movie_id).await? else {
            return Ok(Vec::new());
        };
        let names = self.graph.actor_names(&movie.title, None).await;
        self.people_by_names(names).await
    }

    pub async fn directors_for_movie(&self, movie_id: i32) -> AppResult<Vec<person::Model>> {
        let Some(movie) = self.store.movie_by_id(movie_id).await? else {
            return Ok(Vec::new());
        };
        let names = self.graph.director_names(&movie.title).await;
        self.people_by_names(names).await
    }

    pub async fn genres_for_movie(&self, movie_id: i32) -> AppResult<Vec<genre::Model>> {
        let Some(movie) = self.store.movie_by_id(movie_id).await? else {
            return Ok(Vec::new());
        };

        let mut genres = Vec::new();
        for name in self.graph.genre_names(&movie.title).await {
            match self.store.genre_by_name(&name).await? {
                Some(genre) => genres.push(genre),
                None => debug!(name = %name, "genre not in catalog, dropping"),
            }
        }
        Ok(genres)
    }

    /// Movies the person acted in, resolved with the usual reconciliation
    /// rules. A missing person id is an explicit not-found.
    pub async fn movies_for_person(&self, person_id: i32) -> AppResult<Vec<movie::Model>> {
        let Some(person) = self.store.person_by_id(person_id).await? else {
            return Err(AppError::NotFound(format!("person {person_id} not found")));
        };

        let refs = self.graph.titles_for_person(&person.name).await;
        let mut reconciler = Reconciler::new(&self.store);
        let mut movies = Vec::new();
        for r in refs {
            if let Some(movie) = reconciler.resolve(&r.title, r.released).await? {
                movies.push(movie);
            }
        }
        Ok(movies)
    }

    /// Raw display names for DTO enrichment: a comma-joined actor line
    /// (just the lead when `lead_only`) and the first credited director.
    /// Not reconciled, best-effort only.
    pub async fn display_cast(
        &self,
        title: &str,
        lead_only: bool,
    ) -> (Option<String>, Option<String>) {
        let limit = if lead_only { Some(1) } else { None };
        let actors = self.graph.actor_names(title, limit).await;
        let actors = (!actors.is_empty()).then(|| actors.join(", "));
        let director = self.graph.director_names(title).await.into_iter().next();
        (actors, director)
    }

    async fn people_by_names(&self, names: Vec<String>) -> AppResult<Vec<person::Model>> {
        let mut people = Vec::new();
        for name in names {
            match self.store.person_by_name(&name).await? {
                Some(person) => people.push(person),
                None => debug!(name = %name, "person not in catalog, dropping"),
            }
        }
        Ok(people)
    }
}

fn relation_reason(kind: RecommendKind, name: &str) -> String {
    match kind {
        RecommendKind::Actors => format!("common actor: {name}"),
        RecommendKind::Director => format!("same director: {name}"),
        RecommendKind::Genre => format!("same genre: {name}"),
    }
}

fn rating_reason(rating: i64) -> String {
    let label = if rating >= 85 {
        "masterpiece"
    } else if rating >= 75 {
        "highly rated"
    } else if rating >= 70 {
        "popular"
    } else {
        "recommended"
    };
    format!("{label} ({rating}/100)")
}
