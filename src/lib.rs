pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod graph;
pub mod models;
pub mod reconcile;
pub mod recommend;
pub mod routes;
pub mod seed;
pub mod store;

use std::sync::Arc;

use crate::{config::Config, graph::GraphSource, recommend::Recommender, store::MovieStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: MovieStore,
    pub recommender: Recommender,
}

impl AppState {
    pub fn new(config: Arc<Config>, store: MovieStore, graph: Arc<dyn GraphSource>) -> Self {
        let recommender = Recommender::new(store.clone(), graph);
        Self { config, store, recommender }
    }
}
