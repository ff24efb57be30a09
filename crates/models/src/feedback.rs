use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::registration;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub registration_id: i32,
    pub rating: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub submitted_at: DateTimeWithTimeZone,
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

/// Check a submitted rating and narrow it to the stored column type.
pub fn validate_rating(rating: i64) -> Result<i32, ModelError> {
    i32::try_from(rating)
        .ok()
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or_else(|| ModelError::Validation(format!("rating must be between {MIN_RATING} and {MAX_RATING}")))
}

pub async fn create(db: &impl ConnectionTrait, registration_id: i32, rating: i32, comment: Option<&str>) -> Result<Model, ModelError> {
    let rating = validate_rating(rating.into())?;
    // blank comments are stored as NULL
    let comment = comment.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string);
    let am = ActiveModel {
        registration_id: Set(registration_id),
        rating: Set(rating),
        comment: Set(comment),
        submitted_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_registration(db: &impl ConnectionTrait, registration_id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::RegistrationId.eq(registration_id)).one(db).await?)
}
