use async_trait::async_trait;
use neo4rs::{Graph, query};
use tracing::warn;

use crate::models::RecommendKind;

/// Raw tuple from a relationship query: a candidate title plus the name of
/// the actor, director, or genre that links it to the base movie.
#[derive(Clone, Debug)]
pub struct RelatedTitle {
    pub title: String,
    pub released: i32,
    pub name: String,
}

/// Raw tuple from the popularity query.
#[derive(Clone, Debug)]
pub struct RatedTitle {
    pub title: String,
    pub released: i32,
    pub rating: i64,
}

#[derive(Clone, Debug)]
pub struct TitleRef {
    pub title: String,
    pub released: i32,
}

/// The fixed set of pattern queries the application issues against the
/// graph source. Failures never escape an implementation: recommendations
/// are best-effort data, so a broken connection degrades to empty results
/// with a logged diagnostic rather than a failed request.
#[async_trait]
pub trait GraphSource: Send + Sync {
    async fn related_titles(
        &self,
        kind: RecommendKind,
        title: &str,
        count: i64,
    ) -> Vec<RelatedTitle>;

    async fn top_rated_titles(&self, count: i64) -> Vec<RatedTitle>;

    async fn actor_names(&self, title: &str, limit: Option<i64>) -> Vec<String>;

    async fn director_names(&self, title: &str) -> Vec<String>;

    async fn genre_names(&self, title: &str) -> Vec<String>;

    async fn titles_for_person(&self, name: &str) -> Vec<TitleRef>;
}

const SHARED_ACTOR: &str = "
    MATCH (m:Movie {title: $title})<-[:ACTED_IN]-(a:Person)-[:ACTED_IN]->(rec:Movie)
    WHERE m <> rec
    RETURN DISTINCT rec.title AS title, rec.released AS released, a.name AS name
    LIMIT $count";

const SHARED_DIRECTOR: &str = "
    MATCH (m:Movie {title: $title})<-[:DIRECTED]-(d:Person)-[:DIRECTED]->(rec:Movie)
    WHERE m <> rec
    RETURN DISTINCT rec.title AS title, rec.released AS released, d.name AS name
    LIMIT $count";

const SHARED_GENRE: &str = "
    MATCH (m:Movie {title: $title})-[:IN_GENRE]->(g:Genre)<-[:IN_GENRE]-(rec:Movie)
    WHERE m <> rec
    RETURN DISTINCT rec.title AS title, rec.released AS released, g.name AS name
    LIMIT $count";

const TOP_RATED: &str = "
    MATCH (m:Movie)
    WHERE m.rating IS NOT NULL
    RETURN m.title AS title, m.released AS released, m.rating AS rating
    ORDER BY m.rating DESC
    LIMIT $count";

const ACTORS_FOR_MOVIE: &str =
    "MATCH (m:Movie {title: $title})<-[:ACTED_IN]-(p:Person) RETURN p.name AS name";

const DIRECTORS_FOR_MOVIE: &str =
    "MATCH (m:Movie {title: $title})<-[:DIRECTED]-(p:Person) RETURN p.name AS name";

const GENRES_FOR_MOVIE: &str =
    "MATCH (m:Movie {title: $title})-[:IN_GENRE]->(g:Genre) RETURN g.name AS name";

const MOVIES_FOR_PERSON: &str = "
    MATCH (p:Person {name: $name})-[:ACTED_IN]->(m:Movie)
    RETURN m.title AS title, m.released AS released";

/// Bolt-backed executor over a Movie/Person/Genre graph with ACTED_IN,
/// DIRECTED and IN_GENRE edges.
pub struct Neo4jGraph {
    graph: Graph,
}

impl Neo4jGraph {
    pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Self, neo4rs::Error> {
        let graph = Graph::new(uri, user, password).await?;
        Ok(Self { graph })
    }

    async fn run_related(
        &self,
        cypher: &str,
        title: &str,
        count: i64,
    ) -> Result<Vec<RelatedTitle>, neo4rs::Error> {
        let q = query(cypher).param("title", title).param("count", count);
        let mut stream = self.graph.execute(q).await?;

        let mut out = Vec::new();
        while let Some(row) = stream.next().await? {
            let Ok(title) = row.get::<String>("title") else { continue };
            let Ok(released) = row.get::<i64>("released") else { continue };
            let Ok(name) = row.get::<String>("name") else { continue };
            out.push(RelatedTitle { title, released: released as i32, name });
        }
        Ok(out)
    }

    async fn run_names(
        &self,
        cypher: &str,
        title: &str,
    ) -> Result<Vec<String>, neo4rs::Error> {
        let q = query(cypher).param("title", title);
        let mut stream = self.graph.execute(q).await?;

        let mut out = Vec::new();
        while let Some(row) = stream.next().await? {
            let Ok(name) = row.get::<String>("name") else { continue };
            out.push(name);
        }
        Ok(out)
    }
}

#[async_trait]
impl GraphSource for Neo4jGraph {
    async fn related_titles(
        &self,
        kind: RecommendKind,
        title: &str,
        count: i64,
    ) -> Vec<RelatedTitle> {
        let cypher = match kind {
            RecommendKind::Actors => SHARED_ACTOR,
            RecommendKind::Director => SHARED_DIRECTOR,
            RecommendKind::Genre => SHARED_GENRE,
        };

        match self.run_related(cypher, title, count).await {
            Ok(rows) => rows,
            Err(err) => {
                warn!(?kind, title, error = %err, "relationship query failed");
                Vec::new()
            },
        }
    }

    async fn top_rated_titles(&self, count: i64) -> Vec<RatedTitle> {
        let result = async {
            let q = query(TOP_RATED).param("count", count);
            let mut stream = self.graph.execute(q).await?;

            let mut out = Vec::new();
            while let Some(row) = stream.next().await? {
                let Ok(title) = row.get::<String>("title") else { continue };
                let Ok(released) = row.get::<i64>("released") else { continue };
                let Ok(rating) = row.get::<i64>("rating") else { continue };
                out.push(RatedTitle { title, released: released as i32, rating });
            }
            Ok::<_, neo4rs::Error>(out)
        }
        .await;

        match result {
            Ok(rows) => rows,
            Err(err) => {
                warn!(error = %err, "popularity query failed");
                Vec::new()
            },
        }
    }

    async fn actor_names(&self, title: &str, limit: Option<i64>) -> Vec<String> {
        let result = match limit {
            Some(n) => {
                let cypher = format!("{ACTORS_FOR_MOVIE} LIMIT {n}");
                self.run_names(&cypher, title).await
            },
            None => self.run_names(ACTORS_FOR_MOVIE, title).await,
        };

        match result {
            Ok(names) => names,
            Err(err) => {
                warn!(title, error = %err, "actor query failed");
                Vec::new()
            },
        }
    }

    async fn director_names(&self, title: &str) -> Vec<String> {
        match self.run_names(DIRECTORS_FOR_MOVIE, title).await {
            Ok(names) => names,
            Err(err) => {
                warn!(title, error = %err, "director query failed");
                Vec::new()
            },
        }
    }

    async fn genre_names(&self, title: &str) -> Vec<String> {
        match self.run_names(GENRES_FOR_MOVIE, title).await {
            Ok(names) => names,
            Err(err) => {
                warn!(title, error = %err, "genre query failed");
                Vec::new()
            },
        }
    }

    async fn titles_for_person(&self, name: &str) -> Vec<TitleRef> {
        let result = async {
            let q = query(MOVIES_FOR_PERSON).param("name", name);
            let mut stream = self.graph.execute(q).await?;

            let mut out = Vec::new();
            while let Some(row) = stream.next().await? {
                let Ok(title) = row.get::<String>("title") else { continue };
                let Ok(released) = row.get::<i64>("released") else { continue };
                out.push(TitleRef { title, released: released as i32 });
            }
            Ok::<_, neo4rs::Error>(out)
        }
        .await;

        match result {
            Ok(rows) => rows,
            Err(err) => {
                warn!(name, error = %err, "person filmography query failed");
                Vec::new()
            },
        }
    }
}
