use super::repository;
use contracts::domain::a001_court::Court;
use uuid::Uuid;

/// Верхняя граница выборки: страница делает ровно один ограниченный
/// запрос, пагинации нет
pub const COURT_QUERY_LIMIT: u64 = 50;

#[derive(Debug, thiserror::Error)]
pub enum CourtServiceError {
    #[error("court not found")]
    NotFound,
    #[error(transparent)]
    Db(#[from] anyhow::Error),
}

/// Ограниченная выборка справочника, отсортированная по названию
pub async fn list_all() -> anyhow::Result<Vec<Court>> {
    repository::list_top(COURT_QUERY_LIMIT).await
}

pub async fn get_by_id(id: &str) -> Result<Court, CourtServiceError> {
    repository::get_by_id(id)
        .await?
        .ok_or(CourtServiceError::NotFound)
}

/// Засев демонстрационных данных. Только в пустую таблицу: повторный
/// вызов ничего не дублирует.
pub async fn insert_test_data() -> anyhow::Result<usize> {
    if repository::count().await? > 0 {
        return Ok(0);
    }

    let courts = test_courts();
    for court in &courts {
        repository::insert(court).await?;
    }
    tracing::info!("seeded {} demo courts", courts.len());
    Ok(courts.len())
}

fn demo_court(
    name: &str,
    owner_type: &str,
    address: &str,
    region: &str,
    city: &str,
) -> Court {
    Court {
        id: Uuid::new_v4().to_string(),
        court_name: Some(name.to_string()),
        owner_type: Some(owner_type.to_string()),
        address: Some(address.to_string()),
        region: Some(region.to_string()),
        city: Some(city.to_string()),
        opentime_owner: None,
        opentime_normal: None,
        reservation_time: None,
        time_of_use: None,
        court_count_hard_indoor: None,
        court_count_hard_outdoor: None,
        court_count_grass_indoor: None,
        court_count_grass_outdoor: None,
        court_count_clay_indoor: None,
        court_count_clay_outdoor: None,
        map_link: None,
        reserve_link: None,
    }
}

fn test_courts() -> Vec<Court> {
    let mut jangchung = demo_court(
        "장충테니스장",
        "시립",
        "서울특별시 중구 동호로 241",
        "서울특별시",
        "중구",
    );
    jangchung.opentime_owner = Some("매월 1일 10:00".to_string());
    jangchung.court_count_hard_outdoor = Some(8);

    let mut yangjae = demo_court(
        "양재시민의숲 테니스장",
        "구립",
        "서울특별시 서초구 매헌로 99",
        "서울특별시",
        "서초구",
    );
    yangjae.opentime_owner = Some("매월 25일 09:00".to_string());
    yangjae.opentime_normal = Some("매월 27일 09:00".to_string());
    yangjae.court_count_hard_outdoor = Some(6);
    yangjae.court_count_clay_outdoor = Some(2);

    let mut centum = demo_court(
        "센텀테니스클럽",
        "사설",
        "부산광역시 해운대구 센텀중앙로 45",
        "부산광역시",
        "해운대구",
    );
    centum.court_count_hard_indoor = Some(4);

    let mut suseong = demo_court(
        "수성못테니스장",
        "시립",
        "대구광역시 수성구 무학로 42",
        "대구광역시",
        "수성구",
    );
    suseong.court_count_clay_outdoor = Some(5);
    suseong.opentime_owner = Some("매월 20일 14:00".to_string());

    vec![jangchung, yangjae, centum, suseong]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_courts_have_unique_ids() {
        let courts = test_courts();
        let mut ids: Vec<&str> = courts.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), courts.len());
    }

    #[test]
    fn test_demo_courts_fit_query_limit() {
        assert!(test_courts().len() as u64 <= COURT_QUERY_LIMIT);
    }
}
