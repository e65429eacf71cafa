use serde::{Deserialize, Serialize};

use crate::enums::SurfaceType;

// ============================================================================
// Aggregate
// ============================================================================

/// Теннисный корт — запись справочника (таблица courtinfo).
///
/// Запись только для чтения: наполняется на стороне хостинга БД, клиент
/// её не редактирует. Все поля кроме `id` могут быть пустыми.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: String,

    pub court_name: Option<String>,

    /// Форма управления: "시립" / "구립" / "사설" либо иное/пустое значение
    pub owner_type: Option<String>,

    /// Адрес свободным текстом, содержит названия региона и района
    pub address: Option<String>,

    /// Регион (시/도) — структурированное поле
    pub region: Option<String>,

    /// Район (시/군/구) — структурированное поле, вложен в регион
    pub city: Option<String>,

    // Часы открытия бронирования (сквозные поля, фильтрация их не трогает)
    pub opentime_owner: Option<String>,
    pub opentime_normal: Option<String>,
    pub reservation_time: Option<String>,
    pub time_of_use: Option<String>,

    // Количество кортов по покрытию и расположению.
    // None и 0 равнозначны: таких кортов нет.
    pub court_count_hard_indoor: Option<i32>,
    pub court_count_hard_outdoor: Option<i32>,
    pub court_count_grass_indoor: Option<i32>,
    pub court_count_grass_outdoor: Option<i32>,
    pub court_count_clay_indoor: Option<i32>,
    pub court_count_clay_outdoor: Option<i32>,

    pub map_link: Option<String>,
    pub reserve_link: Option<String>,
}

impl Court {
    /// Суммарное количество кортов данного покрытия (крытые + открытые)
    pub fn surface_total(&self, surface: SurfaceType) -> i32 {
        let (indoor, outdoor) = match surface {
            SurfaceType::Hard => (self.court_count_hard_indoor, self.court_count_hard_outdoor),
            SurfaceType::Grass => (self.court_count_grass_indoor, self.court_count_grass_outdoor),
            SurfaceType::Clay => (self.court_count_clay_indoor, self.court_count_clay_outdoor),
        };
        indoor.unwrap_or(0) + outdoor.unwrap_or(0)
    }

    /// Количество кортов по покрытию и расположению
    pub fn surface_count(&self, surface: SurfaceType, indoor: bool) -> Option<i32> {
        match (surface, indoor) {
            (SurfaceType::Hard, true) => self.court_count_hard_indoor,
            (SurfaceType::Hard, false) => self.court_count_hard_outdoor,
            (SurfaceType::Grass, true) => self.court_count_grass_indoor,
            (SurfaceType::Grass, false) => self.court_count_grass_outdoor,
            (SurfaceType::Clay, true) => self.court_count_clay_indoor,
            (SurfaceType::Clay, false) => self.court_count_clay_outdoor,
        }
    }
}
