use contracts::domain::a001_court::Court;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_courtinfo")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub court_name: Option<String>,
    pub owner_type: Option<String>,
    pub address: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub opentime_owner: Option<String>,
    pub opentime_normal: Option<String>,
    pub reservation_time: Option<String>,
    pub time_of_use: Option<String>,
    pub court_count_hard_indoor: Option<i32>,
    pub court_count_hard_outdoor: Option<i32>,
    pub court_count_grass_indoor: Option<i32>,
    pub court_count_grass_outdoor: Option<i32>,
    pub court_count_clay_indoor: Option<i32>,
    pub court_count_clay_outdoor: Option<i32>,
    pub map_link: Option<String>,
    pub reserve_link: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Court {
    fn from(m: Model) -> Self {
        Court {
            id: m.id,
            court_name: m.court_name,
            owner_type: m.owner_type,
            address: m.address,
            region: m.region,
            city: m.city,
            opentime_owner: m.opentime_owner,
            opentime_normal: m.opentime_normal,
            reservation_time: m.reservation_time,
            time_of_use: m.time_of_use,
            court_count_hard_indoor: m.court_count_hard_indoor,
            court_count_hard_outdoor: m.court_count_hard_outdoor,
            court_count_grass_indoor: m.court_count_grass_indoor,
            court_count_grass_outdoor: m.court_count_grass_outdoor,
            court_count_clay_indoor: m.court_count_clay_indoor,
            court_count_clay_outdoor: m.court_count_clay_outdoor,
            map_link: m.map_link,
            reserve_link: m.reserve_link,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Верхушка справочника: не более `limit` записей, сортировка по названию
pub async fn list_top(limit: u64) -> anyhow::Result<Vec<Court>> {
    let items: Vec<Court> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::CourtName)
        .limit(limit)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Court>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn count() -> anyhow::Result<u64> {
    let n = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?;
    Ok(n)
}

pub async fn insert(court: &Court) -> anyhow::Result<()> {
    let now = chrono::Utc::now().to_rfc3339();
    let active = ActiveModel {
        id: Set(court.id.clone()),
        court_name: Set(court.court_name.clone()),
        owner_type: Set(court.owner_type.clone()),
        address: Set(court.address.clone()),
        region: Set(court.region.clone()),
        city: Set(court.city.clone()),
        opentime_owner: Set(court.opentime_owner.clone()),
        opentime_normal: Set(court.opentime_normal.clone()),
        reservation_time: Set(court.reservation_time.clone()),
        time_of_use: Set(court.time_of_use.clone()),
        court_count_hard_indoor: Set(court.court_count_hard_indoor),
        court_count_hard_outdoor: Set(court.court_count_hard_outdoor),
        court_count_grass_indoor: Set(court.court_count_grass_indoor),
        court_count_grass_outdoor: Set(court.court_count_grass_outdoor),
        court_count_clay_indoor: Set(court.court_count_clay_indoor),
        court_count_clay_outdoor: Set(court.court_count_clay_outdoor),
        map_link: Set(court.map_link.clone()),
        reserve_link: Set(court.reserve_link.clone()),
        is_deleted: Set(false),
        created_at: Set(Some(now.clone())),
        updated_at: Set(Some(now)),
    };
    active.insert(conn()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::SurfaceType;

    #[test]
    fn test_model_converts_to_court() {
        let model = Model {
            id: "c-1".to_string(),
            court_name: Some("장충테니스장".to_string()),
            owner_type: Some("시립".to_string()),
            address: Some("서울특별시 중구 동호로 241".to_string()),
            region: Some("서울특별시".to_string()),
            city: Some("중구".to_string()),
            opentime_owner: None,
            opentime_normal: None,
            reservation_time: None,
            time_of_use: None,
            court_count_hard_indoor: Some(4),
            court_count_hard_outdoor: None,
            court_count_grass_indoor: None,
            court_count_grass_outdoor: None,
            court_count_clay_indoor: None,
            court_count_clay_outdoor: None,
            map_link: None,
            reserve_link: None,
            is_deleted: false,
            created_at: None,
            updated_at: None,
        };

        let court: Court = model.into();
        assert_eq!(court.id, "c-1");
        assert_eq!(court.court_name.as_deref(), Some("장충테니스장"));
        assert_eq!(court.surface_total(SurfaceType::Hard), 4);
        assert_eq!(court.surface_total(SurfaceType::Clay), 0);
    }
}
