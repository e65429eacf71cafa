use crate::domain::a001_court::filter::CourtFilter;
use leptos::prelude::*;

/// Состояние страницы списка кортов.
///
/// Два независимых экземпляра фильтра: `committed` управляет видимой
/// выдачей, `pending` редактируется в полноэкранной панели на узких
/// экранах и попадает в `committed` только по кнопке подтверждения.
#[derive(Clone, Debug, Default)]
pub struct CourtListState {
    pub committed: CourtFilter,
    pub pending: CourtFilter,

    // Открыта ли полноэкранная панель фильтра
    pub is_filter_open: bool,
}

impl CourtListState {
    /// Открыть панель: pending засевается копией committed.
    /// Именно копией — правки pending не должны просвечивать в выдачу.
    pub fn open_editing(&mut self) {
        self.pending = self.committed.clone();
        self.is_filter_open = true;
    }

    /// Подтвердить: pending целиком становится новым committed
    pub fn confirm(&mut self) {
        self.committed = self.pending.clone();
        self.is_filter_open = false;
    }

    /// Закрыть панель, правки pending отбрасываются
    pub fn cancel_editing(&mut self) {
        self.pending = CourtFilter::default();
        self.is_filter_open = false;
    }

    /// Сбросить фильтр. При открытой панели чистится и pending,
    /// иначе последующее подтверждение вернуло бы сброшенный выбор.
    pub fn reset(&mut self) {
        self.committed = CourtFilter::default();
        if self.is_filter_open {
            self.pending = CourtFilter::default();
        }
    }

    /// Редактируемый экземпляр: pending в панели, committed в сайдбаре
    pub fn active(&self, use_pending: bool) -> &CourtFilter {
        if use_pending {
            &self.pending
        } else {
            &self.committed
        }
    }

    pub fn active_mut(&mut self, use_pending: bool) -> &mut CourtFilter {
        if use_pending {
            &mut self.pending
        } else {
            &mut self.committed
        }
    }
}

pub fn create_state() -> RwSignal<CourtListState> {
    RwSignal::new(CourtListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::SurfaceType;

    fn state_with_committed() -> CourtListState {
        let mut state = CourtListState::default();
        state.committed.set_region(Some("서울특별시".to_string()));
        state.committed.set_city(Some("강남구".to_string()));
        state.committed.toggle_surface_type(SurfaceType::Hard);
        state.committed.toggle_owner_type("시립");
        state
    }

    #[test]
    fn test_open_editing_copies_committed() {
        let mut state = state_with_committed();
        state.open_editing();

        assert!(state.is_filter_open);
        assert_eq!(state.pending, state.committed);
    }

    #[test]
    fn test_pending_edits_invisible_until_confirm() {
        let mut state = state_with_committed();
        state.open_editing();

        state.pending.set_region(Some("부산광역시".to_string()));
        state.pending.toggle_owner_type("사설");
        assert_eq!(state.committed.region.as_deref(), Some("서울특별시"));

        state.confirm();
        assert!(!state.is_filter_open);
        assert_eq!(state.committed.region.as_deref(), Some("부산광역시"));
        assert!(state.committed.owner_types.contains("사설"));
    }

    #[test]
    fn test_cancel_leaves_committed_unchanged() {
        let mut state = state_with_committed();
        let before = state.committed.clone();

        state.open_editing();
        state.pending.set_region(Some("대구광역시".to_string()));
        state.pending.toggle_surface_type(SurfaceType::Clay);
        state.cancel_editing();

        assert!(!state.is_filter_open);
        assert_eq!(state.committed, before);
    }

    #[test]
    fn test_reset_clears_committed() {
        let mut state = state_with_committed();
        state.reset();

        assert_eq!(state.committed, CourtFilter::default());
    }

    #[test]
    fn test_reset_while_editing_clears_pending_too() {
        let mut state = state_with_committed();
        state.open_editing();
        state.pending.toggle_owner_type("구립");

        state.reset();
        assert_eq!(state.committed, CourtFilter::default());
        assert_eq!(state.pending, CourtFilter::default());

        // Подтверждение после сброса не возвращает старый выбор
        state.confirm();
        assert_eq!(state.committed, CourtFilter::default());
    }

    #[test]
    fn test_active_selects_instance() {
        let mut state = CourtListState::default();
        state
            .active_mut(true)
            .set_region(Some("인천광역시".to_string()));

        assert_eq!(state.active(true).region.as_deref(), Some("인천광역시"));
        assert_eq!(state.active(false).region, None);
    }
}
