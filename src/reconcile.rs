use std::collections::HashSet;

use tracing::{debug, warn};

use crate::{entities::movie, error::AppResult, store::MovieStore};

/// Matches graph-sourced (title, year) references back to catalog rows.
///
/// The two stores share no key, so resolution is by lowercased title plus
/// release year, falling back to the title alone when no year matches.
/// References that match nothing are dropped, and each catalog row is
/// yielded at most once per reconciler: the first reason to resolve a
/// movie wins.
pub struct Reconciler<'a> {
    store: &'a MovieStore,
    seen: HashSet<i32>,
}

impl<'a> Reconciler<'a> {
    pub fn new(store: &'a MovieStore) -> Self {
        Self { store, seen: HashSet::new() }
    }

    /// Blocks a catalog id from resolving, e.g. the movie a recommendation
    /// query was issued for.
    pub fn exclude(&mut self, id: i32) {
        self.seen.insert(id);
    }

    pub async fn resolve(&mut self, title: &str, released: i32) -> AppResult<Option<movie::Model>> {
        let Some(movie) = self.lookup(title, released).await? else {
            return Ok(None);
        };

        if self.seen.insert(movie.id) { Ok(Some(movie)) } else { Ok(None) }
    }

    async fn lookup(&self, title: &str, released: i32) -> AppResult<Option<movie::Model>> {
        if let Some(movie) = self.store.movie_by_title_and_year(title, released).await? {
            return Ok(Some(movie));
        }

        // The graph may carry a different release year for the same title;
        // a title-only hit is a lower-confidence match.
        if let Some(movie) = self.store.movie_by_title(title).await? {
            warn!(title, released, matched_year = movie.released, "reconciled by title only");
            return Ok(Some(movie));
        }

        debug!(title, released, "title not in catalog, dropping");
        Ok(None)
    }
}
