use std::{fmt, str::FromStr};

use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::college;
use crate::errors::ModelError;

/// Kind of campus event; stored as its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum EventType {
    #[sea_orm(string_value = "Workshop")]
    Workshop,
    #[sea_orm(string_value = "Fest")]
    Fest,
    #[sea_orm(string_value = "Seminar")]
    Seminar,
    #[sea_orm(string_value = "Hackathon")]
    Hackathon,
    #[sea_orm(string_value = "TechTalk")]
    TechTalk,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Workshop => "Workshop",
            EventType::Fest => "Fest",
            EventType::Seminar => "Seminar",
            EventType::Hackathon => "Hackathon",
            EventType::TechTalk => "TechTalk",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        <EventType as sea_orm::Iterable>::iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ModelError::Validation(format!(
                    "unknown event type '{wanted}' (expected Workshop|Fest|Seminar|Hackathon|TechTalk)"
                ))
            })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub event_type: EventType,
    pub starts_at: DateTimeWithTimeZone,
    pub ends_at: DateTimeWithTimeZone,
    pub college_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    College,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::College => Entity::belongs_to(college::Entity).from(Column::CollegeId).to(college::Column::Id).into(),
        }
    }
}

impl Related<college::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::College.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() {
        return Err(ModelError::Validation("event title required".into()));
    }
    Ok(())
}

pub fn validate_window(starts_at: &DateTimeWithTimeZone, ends_at: &DateTimeWithTimeZone) -> Result<(), ModelError> {
    if ends_at < starts_at {
        return Err(ModelError::Validation("event cannot end before it starts".into()));
    }
    Ok(())
}

pub async fn create(
    db: &impl ConnectionTrait,
    college_id: i32,
    title: &str,
    event_type: EventType,
    starts_at: DateTimeWithTimeZone,
    ends_at: DateTimeWithTimeZone,
) -> Result<Model, ModelError> {
    validate_title(title)?;
    validate_window(&starts_at, &ends_at)?;
    let am = ActiveModel {
        title: Set(title.trim().to_string()),
        event_type: Set(event_type),
        starts_at: Set(starts_at),
        ends_at: Set(ends_at),
        college_id: Set(college_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
