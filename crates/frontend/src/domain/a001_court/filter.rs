//! Клиентская фильтрация справочника кортов: производные списки
//! регион/район и предикат отбора по выбранным условиям.

use contracts::domain::a001_court::Court;
use contracts::enums::SurfaceType;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Фиксированный набор меток формы управления
pub const OWNER_TYPE_LABELS: [&str; 3] = ["시립", "구립", "사설"];

// ============================================================================
// Производные списки выбора
// ============================================================================

/// Списки выбора, выведенные из загруженной коллекции кортов.
///
/// Не хранится: пересчитывается при каждой смене коллекции.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourtOptions {
    /// Регионы (시/도), отсортированы по возрастанию, без дублей
    pub regions: Vec<String>,
    /// Районы (시/군/구) по региону, каждый список отсортирован, без дублей
    pub cities_by_region: BTreeMap<String, Vec<String>>,
}

impl CourtOptions {
    /// Районы выбранного региона; пустой срез, если регион не выбран
    /// или по нему нет ни одного района
    pub fn cities_for(&self, region: Option<&str>) -> &[String] {
        region
            .and_then(|r| self.cities_by_region.get(r))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}

/// Выводит списки выбора из коллекции записей.
///
/// Записи без региона не попадают никуда; записи без района дают
/// регион, но не район.
pub fn derive_options(courts: &[Court]) -> CourtOptions {
    let mut regions: BTreeSet<String> = BTreeSet::new();
    let mut cities: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for court in courts {
        let Some(region) = court.region.as_deref().filter(|r| !r.is_empty()) else {
            continue;
        };
        regions.insert(region.to_string());

        if let Some(city) = court.city.as_deref().filter(|c| !c.is_empty()) {
            cities
                .entry(region.to_string())
                .or_default()
                .insert(city.to_string());
        }
    }

    CourtOptions {
        regions: regions.into_iter().collect(),
        cities_by_region: cities
            .into_iter()
            .map(|(region, set)| (region, set.into_iter().collect()))
            .collect(),
    }
}

// ============================================================================
// Состояние фильтра
// ============================================================================

/// Выбранные условия отбора.
///
/// Пустое множество покрытий/форм управления означает отсутствие
/// ограничения. Район имеет смысл только при выбранном регионе.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourtFilter {
    pub region: Option<String>,
    pub city: Option<String>,
    pub surface_types: HashSet<SurfaceType>,
    pub owner_types: HashSet<String>,
}

impl CourtFilter {
    /// Установить регион. Сбрасывает район: списки районов привязаны
    /// к региону, прежний выбор становится недействительным.
    pub fn set_region(&mut self, value: Option<String>) {
        self.region = value.filter(|v| !v.is_empty());
        self.city = None;
    }

    /// Установить район. Корректность (выбран ли регион) не проверяется:
    /// UI сам блокирует контрол без региона.
    pub fn set_city(&mut self, value: Option<String>) {
        self.city = value.filter(|v| !v.is_empty());
    }

    /// Переключить покрытие: есть в множестве — убрать, нет — добавить
    pub fn toggle_surface_type(&mut self, surface: SurfaceType) {
        if !self.surface_types.remove(&surface) {
            self.surface_types.insert(surface);
        }
    }

    /// Переключить форму управления
    pub fn toggle_owner_type(&mut self, label: &str) {
        if !self.owner_types.remove(label) {
            self.owner_types.insert(label.to_string());
        }
    }

    /// Проверка записи на соответствие всем активным условиям.
    ///
    /// Регион и район сверяются подстрокой по адресу, не по
    /// структурированным полям записи — так делает источник данных,
    /// поведение сохранено для совместимости выдачи.
    pub fn matches(&self, court: &Court) -> bool {
        let address = court.address.as_deref().unwrap_or("");

        if let Some(region) = self.region.as_deref() {
            if !region.is_empty() && !address.contains(region) {
                return false;
            }
        }

        if let Some(city) = self.city.as_deref() {
            if !city.is_empty() && !address.contains(city) {
                return false;
            }
        }

        if !self.surface_types.is_empty() {
            let has_selected_surface = self
                .surface_types
                .iter()
                .any(|surface| court.surface_total(*surface) > 0);
            if !has_selected_surface {
                return false;
            }
        }

        if !self.owner_types.is_empty() {
            let owner = court.owner_type.as_deref().unwrap_or("").trim();
            if !self.owner_types.contains(owner) {
                return false;
            }
        }

        true
    }
}

/// Отбирает записи по фильтру с сохранением исходного порядка.
///
/// Чистый пересчёт: повторный вызов на неизменных входах даёт
/// идентичный результат.
pub fn filter_courts(courts: &[Court], filter: &CourtFilter) -> Vec<Court> {
    courts
        .iter()
        .filter(|court| filter.matches(court))
        .cloned()
        .collect()
}

// ============================================================================
// Форматирование
// ============================================================================

/// Подпись ячейки количества: "N개" при N > 0, иначе "-"
pub fn format_count(count: Option<i32>) -> String {
    match count {
        Some(n) if n > 0 => format!("{}개", n),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn court(id: &str) -> Court {
        Court {
            id: id.to_string(),
            court_name: None,
            owner_type: None,
            address: None,
            region: None,
            city: None,
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

    // Пример из постановки: два корта, Сеул и Пусан
    fn sample_courts() -> Vec<Court> {
        let mut seoul = court("1");
        seoul.address = Some("서울특별시 강남구 삼성로 628".to_string());
        seoul.region = Some("서울특별시".to_string());
        seoul.city = Some("강남구".to_string());
        seoul.owner_type = Some("시립".to_string());
        seoul.court_count_hard_indoor = Some(2);
        seoul.court_count_hard_outdoor = Some(0);

        let mut busan = court("2");
        busan.address = Some("부산광역시 해운대구 센텀중앙로 45".to_string());
        busan.region = Some("부산광역시".to_string());
        busan.city = Some("해운대구".to_string());
        busan.owner_type = Some("사설".to_string());
        busan.court_count_clay_outdoor = Some(3);

        vec![seoul, busan]
    }

    fn ids(courts: &[Court]) -> Vec<&str> {
        courts.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_derive_options_sorted_unique() {
        let mut courts = sample_courts();
        courts.extend(sample_courts()); // дубли не должны влиять

        let options = derive_options(&courts);

        assert_eq!(options.regions, vec!["부산광역시", "서울특별시"]);
        assert_eq!(
            options.cities_by_region.get("서울특별시").unwrap(),
            &vec!["강남구".to_string()]
        );
        assert_eq!(
            options.cities_by_region.get("부산광역시").unwrap(),
            &vec!["해운대구".to_string()]
        );
    }

    #[test]
    fn test_derive_options_skips_missing_fields() {
        let mut no_region = court("3");
        no_region.city = Some("강남구".to_string());

        let mut no_city = court("4");
        no_city.region = Some("제주특별자치도".to_string());

        let options = derive_options(&[no_region, no_city]);

        // Запись без региона не даёт ничего, без района — только регион
        assert_eq!(options.regions, vec!["제주특별자치도"]);
        assert!(options.cities_by_region.is_empty());
    }

    #[test]
    fn test_derive_options_empty_input() {
        let options = derive_options(&[]);
        assert!(options.regions.is_empty());
        assert!(options.cities_by_region.is_empty());
    }

    #[test]
    fn test_cities_for_unselected_region() {
        let options = derive_options(&sample_courts());
        assert!(options.cities_for(None).is_empty());
        assert!(options.cities_for(Some("대구광역시")).is_empty());
        assert_eq!(options.cities_for(Some("서울특별시")), ["강남구"]);
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let courts = sample_courts();
        let filtered = filter_courts(&courts, &CourtFilter::default());
        assert_eq!(filtered, courts);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let courts = sample_courts();
        let mut filter = CourtFilter::default();
        filter.set_region(Some("서울특별시".to_string()));

        let once = filter_courts(&courts, &filter);
        let twice = filter_courts(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_region_matches_by_address_substring() {
        let courts = sample_courts();
        let mut filter = CourtFilter::default();
        filter.set_region(Some("서울특별시".to_string()));

        assert_eq!(ids(&filter_courts(&courts, &filter)), vec!["1"]);
    }

    #[test]
    fn test_city_matches_by_address_substring() {
        let courts = sample_courts();
        let mut filter = CourtFilter::default();
        filter.set_region(Some("부산광역시".to_string()));
        filter.set_city(Some("해운대구".to_string()));

        assert_eq!(ids(&filter_courts(&courts, &filter)), vec!["2"]);
    }

    #[test]
    fn test_missing_address_fails_active_region_clause() {
        let mut no_address = court("5");
        no_address.region = Some("서울특별시".to_string());

        let mut filter = CourtFilter::default();
        filter.set_region(Some("서울특별시".to_string()));

        assert!(filter_courts(&[no_address], &filter).is_empty());
    }

    #[test]
    fn test_surface_clause_ors_selected_types() {
        let courts = sample_courts();

        let mut clay_only = CourtFilter::default();
        clay_only.toggle_surface_type(SurfaceType::Clay);
        assert_eq!(ids(&filter_courts(&courts, &clay_only)), vec!["2"]);

        // хард ИЛИ клей — проходят оба
        let mut hard_or_clay = clay_only.clone();
        hard_or_clay.toggle_surface_type(SurfaceType::Hard);
        assert_eq!(ids(&filter_courts(&courts, &hard_or_clay)), vec!["1", "2"]);
    }

    #[test]
    fn test_surface_clause_zero_count_fails() {
        // У сеульского корта grass-счётчики пусты
        let courts = sample_courts();
        let mut filter = CourtFilter::default();
        filter.toggle_surface_type(SurfaceType::Grass);

        assert!(filter_courts(&courts, &filter).is_empty());
    }

    #[test]
    fn test_owner_clause_exact_membership() {
        let courts = sample_courts();
        let mut filter = CourtFilter::default();
        filter.toggle_owner_type("시립");
        filter.toggle_owner_type("구립");

        assert_eq!(ids(&filter_courts(&courts, &filter)), vec!["1"]);
    }

    #[test]
    fn test_owner_clause_trims_whitespace() {
        let mut padded = court("6");
        padded.owner_type = Some("  사설  ".to_string());

        let mut filter = CourtFilter::default();
        filter.toggle_owner_type("사설");

        assert_eq!(ids(&filter_courts(&[padded], &filter)), vec!["6"]);
    }

    #[test]
    fn test_blank_owner_fails_active_owner_clause() {
        // Пустая форма управления — не подстановочный знак
        let blank = court("7");
        let mut filter = CourtFilter::default();
        filter.toggle_owner_type("시립");

        assert!(filter_courts(&[blank], &filter).is_empty());
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut filter = CourtFilter::default();

        filter.toggle_surface_type(SurfaceType::Hard);
        filter.toggle_surface_type(SurfaceType::Hard);
        assert!(filter.surface_types.is_empty());

        filter.toggle_owner_type("구립");
        filter.toggle_owner_type("구립");
        assert!(filter.owner_types.is_empty());
    }

    #[test]
    fn test_set_region_clears_city() {
        let mut filter = CourtFilter::default();
        filter.set_region(Some("서울특별시".to_string()));
        filter.set_city(Some("강남구".to_string()));

        filter.set_region(Some("부산광역시".to_string()));
        assert_eq!(filter.city, None);

        filter.set_city(Some("해운대구".to_string()));
        filter.set_region(None);
        assert_eq!(filter.city, None);
    }

    #[test]
    fn test_empty_select_value_means_unset() {
        let mut filter = CourtFilter::default();
        filter.set_region(Some(String::new()));
        assert_eq!(filter.region, None);

        filter.set_city(Some(String::new()));
        assert_eq!(filter.city, None);
    }

    #[test]
    fn test_order_preserved() {
        let mut courts = Vec::new();
        for (id, name) in [("9", "다"), ("3", "가"), ("7", "나")] {
            let mut c = court(id);
            c.court_name = Some(name.to_string());
            c.address = Some("서울특별시 송파구".to_string());
            courts.push(c);
        }

        let mut filter = CourtFilter::default();
        filter.set_region(Some("서울특별시".to_string()));

        // Порядок коллекции, никакой пересортировки
        assert_eq!(ids(&filter_courts(&courts, &filter)), vec!["9", "3", "7"]);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(2)), "2개");
        assert_eq!(format_count(Some(1)), "1개");
        assert_eq!(format_count(Some(0)), "-");
        assert_eq!(format_count(Some(-1)), "-");
        assert_eq!(format_count(None), "-");
    }
}
