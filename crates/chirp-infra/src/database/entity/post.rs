//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for chirp_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author: model.author,
            content: model.content,
            created_at: model.created_at.into(),
        }
    }
}

impl From<chirp_core::domain::Post> for ActiveModel {
    fn from(post: chirp_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            author: Set(post.author),
            content: Set(post.content),
            created_at: Set(post.created_at.into()),
        }
    }
}
