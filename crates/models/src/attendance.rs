use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::registration;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub registration_id: i32,
    pub marked_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Registration,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Registration => Entity::belongs_to(registration::Entity)
                .from(Column::RegistrationId)
                .to(registration::Column::Id)
                .into(),
        }
    }
}

impl Related<registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &impl ConnectionTrait, registration_id: i32) -> Result<Model, ModelError> {
    let am = ActiveModel {
        registration_id: Set(registration_id),
        marked_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_registration(db: &impl ConnectionTrait, registration_id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::RegistrationId.eq(registration_id)).one(db).await?)
}
