use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use migration::Migrator;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use serde_json::{Value, json};

use cinegraph::{
    AppState,
    config::Config,
    graph::{GraphSource, RatedTitle, RelatedTitle, TitleRef},
    models::RecommendKind,
    routes, seed,
    store::MovieStore,
};

/// In-process stand-in for the bolt graph: the same fixed pattern queries
/// evaluated over edge lists. An empty stub behaves exactly like the real
/// executor with an unreachable server (every query yields nothing).
#[derive(Default)]
struct StubGraph {
    /// (actor name, movie title, released)
    acted_in: Vec<(&'static str, &'static str, i32)>,
    /// (director name, movie title, released)
    directed: Vec<(&'static str, &'static str, i32)>,
    /// (genre name, movie title, released)
    in_genre: Vec<(&'static str, &'static str, i32)>,
    /// (movie title, released, rating)
    ratings: Vec<(&'static str, i32, i64)>,
}

impl StubGraph {
    fn shared(
        edges: &[(&'static str, &'static str, i32)],
        title: &str,
        count: i64,
    ) -> Vec<RelatedTitle> {
        let subjects: Vec<&str> =
            edges.iter().filter(|(_, t, _)| *t == title).map(|(s, _, _)| *s).collect();

        let mut out = Vec::new();
        for (subject, other, released) in edges {
            if subjects.contains(subject) && *other != title {
                out.push(RelatedTitle {
                    title: (*other).to_string(),
                    released: *released,
                    name: (*subject).to_string(),
                });
            }
        }
        out.truncate(count as usize);
        out
    }
}

#[async_trait]
impl GraphSource for StubGraph {
    async fn related_titles(
        &self,
        kind: RecommendKind,
        title: &str,
        count: i64,
    ) -> Vec<RelatedTitle> {
        let edges = match kind {
            RecommendKind::Actors => &self.acted_in,
            RecommendKind::Director => &self.directed,
            RecommendKind::Genre => &self.in_genre,
        };
        Self::shared(edges, title, count)
    }

    async fn top_rated_titles(&self, count: i64) -> Vec<RatedTitle> {
        let mut rows: Vec<RatedTitle> = self
            .ratings
            .iter()
            .map(|&(title, released, rating)| RatedTitle {
                title: title.to_string(),
                released,
                rating,
            })
            .collect();
        rows.sort_by(|a, b| b.rating.cmp(&a.rating));
        rows.truncate(count as usize);
        rows
    }

    async fn actor_names(&self, title: &str, limit: Option<i64>) -> Vec<String> {
        let mut names: Vec<String> = self
            .acted_in
            .iter()
            .filter(|(_, t, _)| *t == title)
            .map(|(name, _, _)| name.to_string())
            .collect();
        if let Some(n) = limit {
            names.truncate(n as usize);
        }
        names
    }

    async fn director_names(&self, title: &str) -> Vec<String> {
        self.directed
            .iter()
            .filter(|(_, t, _)| *t == title)
            .map(|(name, _, _)| name.to_string())
            .collect()
    }

    async fn genre_names(&self, title: &str) -> Vec<String> {
        self.in_genre
            .iter()
            .filter(|(_, t, _)| *t == title)
            .map(|(name, _, _)| name.to_string())
            .collect()
    }

    async fn titles_for_person(&self, name: &str) -> Vec<TitleRef> {
        self.acted_in
            .iter()
            .filter(|(actor, _, _)| *actor == name)
            .map(|(_, title, released)| TitleRef { title: title.to_string(), released: *released })
            .collect()
    }
}

fn keanu_graph() -> StubGraph {
    StubGraph {
        acted_in: vec![
            ("Keanu Reeves", "The Matrix", 1999),
            ("Keanu Reeves", "The Matrix Reloaded", 2003),
            ("Keanu Reeves", "The Devil's Advocate", 1997),
        ],
        directed: vec![
            ("Lana Wachowski", "The Matrix", 1999),
            ("Lana Wachowski", "The Matrix Reloaded", 2003),
        ],
        in_genre: vec![
            ("Action", "The Matrix", 1999),
            ("Action", "The Matrix Reloaded", 2003),
            ("Sci-Fi", "The Matrix", 1999),
            ("Sci-Fi", "The Matrix Reloaded", 2003),
        ],
        ratings: vec![],
    }
}

async fn server_with(graph: StubGraph) -> TestServer {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    let store = MovieStore::new(db);
    seed::seed_if_empty(&store).await.unwrap();

    let config = Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        database_url: "sqlite::memory:".to_string(),
        neo4j_uri: String::new(),
        neo4j_user: String::new(),
        neo4j_password: String::new(),
        max_concurrent: 4,
    };

    let state = Arc::new(AppState::new(Arc::new(config), store, Arc::new(graph)));
    TestServer::new(routes::router(state)).unwrap()
}

async fn movie_id_by_title(server: &TestServer, title: &str) -> i64 {
    let movies: Vec<Value> = server.get("/api/movies").await.json();
    movies
        .iter()
        .find(|m| m["title"] == title)
        .unwrap_or_else(|| panic!("{title} not in catalog"))["id"]
        .as_i64()
        .unwrap()
}

#[tokio::test]
async fn health_check() {
    let server = server_with(StubGraph::default()).await;
    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn movie_list_includes_lead_actor_and_director() {
    let server = server_with(keanu_graph()).await;

    let movies: Vec<Value> = server.get("/api/movies").await.json();
    assert_eq!(movies.len(), 40);

    let matrix = movies.iter().find(|m| m["title"] == "The Matrix").unwrap();
    assert_eq!(matrix["actors"], "Keanu Reeves");
    assert_eq!(matrix["director"], "Lana Wachowski");
}

#[tokio::test]
async fn movie_list_can_filter_by_year() {
    let server = server_with(StubGraph::default()).await;

    let movies: Vec<Value> = server.get("/api/movies?year=1999").await.json();
    let titles: Vec<&str> = movies.iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert!(titles.contains(&"The Matrix"));
    assert!(titles.contains(&"The Green Mile"));
    assert!(!titles.contains(&"Cloud Atlas"));
}

#[tokio::test]
async fn unknown_movie_is_404_but_unknown_cast_is_empty_list() {
    let server = server_with(StubGraph::default()).await;

    server.get("/api/movies/9999").await.assert_status_not_found();

    let response = server.get("/api/movies/9999/actors").await;
    response.assert_status_ok();
    let actors: Vec<Value> = response.json();
    assert!(actors.is_empty());
}

#[tokio::test]
async fn favorite_round_trip_over_http() {
    let server = server_with(StubGraph::default()).await;
    let id = movie_id_by_title(&server, "Unforgiven").await;

    let favored: Value = server.post(&format!("/api/movies/{id}/favorite")).await.json();
    assert_eq!(favored["is_favorite"], true);
    assert!(favored["favorited_at"].is_i64());

    let favorites: Vec<Value> = server.get("/api/movies/favorites").await.json();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["title"], "Unforgiven");

    let cleared: Value = server.delete(&format!("/api/movies/{id}/favorite")).await.json();
    assert_eq!(cleared["is_favorite"], false);
    assert!(cleared["favorited_at"].is_null());

    let favorites: Vec<Value> = server.get("/api/movies/favorites").await.json();
    assert!(favorites.is_empty());
}

#[tokio::test]
async fn rating_outside_bounds_is_rejected_and_unchanged() {
    let server = server_with(StubGraph::default()).await;
    let id = movie_id_by_title(&server, "Joker").await;

    server.post(&format!("/api/movies/{id}/rating")).json(&json!(7)).await.assert_status_ok();

    let response = server.post(&format!("/api/movies/{id}/rating")).json(&json!(11)).await;
    response.assert_status_bad_request();

    let movie: Value = server.get(&format!("/api/movies/{id}")).await.json();
    assert_eq!(movie["user_rating"], 7);

    server.delete(&format!("/api/movies/{id}/rating")).await.assert_status_ok();
    let movie: Value = server.get(&format!("/api/movies/{id}")).await.json();
    assert!(movie["user_rating"].is_null());
}

#[tokio::test]
async fn shared_actor_recommendations_exclude_the_queried_movie() {
    let server = server_with(keanu_graph()).await;
    let id = movie_id_by_title(&server, "The Matrix").await;

    let recs: Vec<Value> = server
        .get(&format!("/api/recommendations/movie/{id}?count=2&kind=actors"))
        .await
        .json();

    assert_eq!(recs.len(), 2);
    for rec in &recs {
        assert_ne!(rec["movie"]["title"], "The Matrix");
        assert_eq!(rec["reason"], "common actor: Keanu Reeves");
    }

    let titles: Vec<&str> =
        recs.iter().map(|r| r["movie"]["title"].as_str().unwrap()).collect();
    for title in titles {
        assert!(["The Matrix Reloaded", "The Devil's Advocate"].contains(&title));
    }
}

#[tokio::test]
async fn recommendations_for_unknown_movie_are_404() {
    let server = server_with(keanu_graph()).await;
    server.get("/api/recommendations/movie/9999").await.assert_status_not_found();
}

#[tokio::test]
async fn graph_titles_missing_from_catalog_are_dropped() {
    let mut graph = keanu_graph();
    graph.acted_in.push(("Keanu Reeves", "Nonexistent Film", 2021));
    let server = server_with(graph).await;
    let id = movie_id_by_title(&server, "The Matrix").await;

    let recs: Vec<Value> = server
        .get(&format!("/api/recommendations/movie/{id}?count=10&kind=actors"))
        .await
        .json();

    let titles: Vec<&str> =
        recs.iter().map(|r| r["movie"]["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["The Matrix Reloaded", "The Devil's Advocate"]);
}

#[tokio::test]
async fn shared_genre_recommendations_are_deduplicated_first_reason_wins() {
    let server = server_with(keanu_graph()).await;
    let id = movie_id_by_title(&server, "The Matrix").await;

    // Reloaded is reachable through both Action and Sci-Fi; it must appear
    // once, with the first genre as the reason.
    let recs: Vec<Value> = server
        .get(&format!("/api/recommendations/movie/{id}?count=10&kind=genre"))
        .await
        .json();

    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0]["movie"]["title"], "The Matrix Reloaded");
    assert_eq!(recs[0]["reason"], "same genre: Action");
}

#[tokio::test]
async fn popular_recommendations_are_ranked_and_bucketed() {
    let graph = StubGraph {
        ratings: vec![
            ("Top Gun", 1986, 69),
            ("Cloud Atlas", 2012, 95),
            ("The Green Mile", 1999, 86),
            ("The Matrix", 1999, 87),
            ("The Devil's Advocate", 1997, 75),
        ],
        ..StubGraph::default()
    };
    let server = server_with(graph).await;

    let recs: Vec<Value> = server.get("/api/recommendations/popular?count=5").await.json();

    let titles: Vec<&str> =
        recs.iter().map(|r| r["movie"]["title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        ["Cloud Atlas", "The Matrix", "The Green Mile", "The Devil's Advocate", "Top Gun"]
    );

    let reasons: Vec<&str> = recs.iter().map(|r| r["reason"].as_str().unwrap()).collect();
    assert_eq!(
        reasons,
        [
            "masterpiece (95/100)",
            "masterpiece (87/100)",
            "masterpiece (86/100)",
            "highly rated (75/100)",
            "recommended (69/100)"
        ]
    );

    // Ranks are non-increasing in rating.
    let ratings: Vec<i64> =
        recs.iter().map(|r| r["movie"]["rating"].as_i64().unwrap()).collect();
    assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn degraded_graph_yields_empty_popular_list_not_an_error() {
    let server = server_with(StubGraph::default()).await;

    let response = server.get("/api/recommendations/popular?count=4").await;
    response.assert_status_ok();
    let recs: Vec<Value> = response.json();
    assert!(recs.is_empty());
}

#[tokio::test]
async fn short_popularity_results_are_backfilled_from_seed_movies() {
    let mut graph = keanu_graph();
    graph.ratings = vec![("Cloud Atlas", 2012, 95)];
    let server = server_with(graph).await;

    let recs: Vec<Value> = server.get("/api/recommendations/popular?count=3").await.json();

    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0]["movie"]["title"], "Cloud Atlas");
    assert_eq!(recs[0]["reason"], "masterpiece (95/100)");

    // Backfill entries come from shared-actor queries against the seed
    // movies and never repeat an already-included movie.
    for rec in &recs[1..] {
        assert!(rec["reason"].as_str().unwrap().starts_with("common actor:"));
    }
    let mut ids: Vec<i64> = recs.iter().map(|r| r["movie"]["id"].as_i64().unwrap()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn movie_actors_are_reconciled_against_the_person_table() {
    let mut graph = keanu_graph();
    graph.acted_in.push(("Unknown Extra", "The Matrix", 1999));
    let server = server_with(graph).await;
    let id = movie_id_by_title(&server, "The Matrix").await;

    let actors: Vec<Value> = server.get(&format!("/api/movies/{id}/actors")).await.json();

    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0]["name"], "Keanu Reeves");
    assert_eq!(actors[0]["birthday"], 1964);
    assert!(actors[0]["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn movie_genres_are_reconciled_against_the_genre_table() {
    let server = server_with(keanu_graph()).await;
    let id = movie_id_by_title(&server, "The Matrix").await;

    let genres: Vec<Value> = server.get(&format!("/api/movies/{id}/genres")).await.json();
    let names: Vec<&str> = genres.iter().map(|g| g["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Action", "Sci-Fi"]);
}

#[tokio::test]
async fn person_filmography_resolves_movies_and_missing_person_is_404() {
    let server = server_with(keanu_graph()).await;

    // Keanu Reeves is the first seeded person.
    let movies: Vec<Value> = server.get("/api/persons/1/movies").await.json();
    let titles: Vec<&str> = movies.iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["The Matrix", "The Matrix Reloaded", "The Devil's Advocate"]);

    server.get("/api/persons/9999/movies").await.assert_status_not_found();
}
