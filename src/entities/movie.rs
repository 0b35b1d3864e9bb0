use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub graph_id: Option<String>,
    pub title: String,
    pub released: i32,
    pub rating: Option<i32>,
    pub summary: Option<String>,
    pub tagline: Option<String>,
    pub is_favorite: bool,
    pub favorited_at: Option<i64>,
    pub user_rating: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
