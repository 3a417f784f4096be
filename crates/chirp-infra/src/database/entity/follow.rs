//! Follow entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "follows")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub follower: String,
    pub followee: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for chirp_core::domain::Follow {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            follower: model.follower,
            followee: model.followee,
            created_at: model.created_at.into(),
        }
    }
}

impl From<chirp_core::domain::Follow> for ActiveModel {
    fn from(follow: chirp_core::domain::Follow) -> Self {
        Self {
            id: Set(follow.id),
            follower: Set(follow.follower),
            followee: Set(follow.followee),
            created_at: Set(follow.created_at.into()),
        }
    }
}
