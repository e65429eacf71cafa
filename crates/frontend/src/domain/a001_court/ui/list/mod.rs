pub mod state;

use crate::domain::a001_court::api::fetch_courts;
use crate::domain::a001_court::filter::{
    derive_options, filter_courts, format_count, CourtOptions, OWNER_TYPE_LABELS,
};
use crate::shared::icons::icon;
use contracts::domain::a001_court::Court;
use contracts::enums::SurfaceType;
use leptos::prelude::*;
use state::{create_state, CourtListState};

/// Карточка корта: название, форма управления, часы открытия брони,
/// адрес и таблица количества по покрытиям
fn court_card(court: Court) -> impl IntoView {
    let name = court
        .court_name
        .clone()
        .unwrap_or_else(|| "(이름 없음)".to_string());
    let owner_type = court.owner_type.clone().unwrap_or_default();
    let opentime_owner = court.opentime_owner.clone().unwrap_or_default();
    let opentime_normal = court
        .opentime_normal
        .clone()
        .filter(|t| !t.trim().is_empty());
    let address = court.address.clone();
    let map_link = court.map_link.clone().unwrap_or_default();
    let reserve_link = court.reserve_link.clone();

    view! {
        <li class="court-card">
            <div class="court-card__title">
                <span class="court-card__name">{name}</span>
                <span class="court-card__owner">{owner_type}</span>
            </div>

            <div class="court-card__opentimes">
                <p class="court-card__opentime">
                    <span class="court-card__opentime-kind">"구민/시민 : "</span>
                    <span class="court-card__opentime-value">{opentime_owner}" 예약 오픈"</span>
                </p>
                {opentime_normal.map(|t| view! {
                    <p class="court-card__opentime">
                        <span class="court-card__opentime-kind">"일반 : "</span>
                        <span class="court-card__opentime-value">{t}" 예약 오픈"</span>
                    </p>
                })}
            </div>

            {address.map(|addr| view! {
                <div class="court-card__address">
                    {icon("map-pin")}
                    <span class="court-card__address-text">{addr}</span>
                    <a
                        class="court-card__map-link"
                        href=map_link
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "위치보기"
                    </a>
                </div>
            })}

            <table class="court-card__counts">
                <thead>
                    <tr>
                        <th>"구분"</th>
                        <th>"실내"</th>
                        <th>"실외"</th>
                    </tr>
                </thead>
                <tbody>
                    {SurfaceType::all().into_iter().map(|surface| {
                        let indoor = format_count(court.surface_count(surface, true));
                        let outdoor = format_count(court.surface_count(surface, false));
                        view! {
                            <tr>
                                <td class="court-card__surface">{surface.label()}</td>
                                <td>{indoor}</td>
                                <td>{outdoor}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            {reserve_link.map(|link| view! {
                <a
                    class="court-card__reserve"
                    href=link
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "예약하러가기"
                </a>
            })}
        </li>
    }
}

/// Контролы фильтра. Один и тот же блок рендерится в сайдбаре
/// (use_pending=false, правки применяются сразу) и в полноэкранной
/// панели (use_pending=true, правки ждут подтверждения).
#[component]
fn CourtFilterContent(
    state: RwSignal<CourtListState>,
    options: Signal<CourtOptions>,
    use_pending: bool,
) -> impl IntoView {
    view! {
        <section class="court-filter__section">
            <h3 class="court-filter__heading">"지역"</h3>
            <div class="court-filter__selects">
                <select
                    class="court-filter__select"
                    prop:value=move || {
                        state.get().active(use_pending).region.clone().unwrap_or_default()
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.active_mut(use_pending).set_region(Some(value)));
                    }
                >
                    <option value="">"시/도 전체"</option>
                    {move || {
                        options.get().regions.into_iter().map(|region| view! {
                            <option value=region.clone()>{region.clone()}</option>
                        }).collect_view()
                    }}
                </select>

                <select
                    class="court-filter__select"
                    prop:disabled=move || state.get().active(use_pending).region.is_none()
                    prop:value=move || {
                        state.get().active(use_pending).city.clone().unwrap_or_default()
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.active_mut(use_pending).set_city(Some(value)));
                    }
                >
                    <option value="">"시/군/구 전체"</option>
                    {move || {
                        let region = state.get().active(use_pending).region.clone();
                        options.get()
                            .cities_for(region.as_deref())
                            .iter()
                            .cloned()
                            .map(|city| view! {
                                <option value=city.clone()>{city.clone()}</option>
                            })
                            .collect_view()
                    }}
                </select>
            </div>
        </section>

        <section class="court-filter__section">
            <h3 class="court-filter__heading">"코트 종류"</h3>
            <div class="court-filter__options">
                {SurfaceType::all().into_iter().map(|surface| view! {
                    <label class="court-filter__option">
                        <input
                            type="checkbox"
                            class="court-filter__checkbox"
                            prop:checked=move || {
                                state.get().active(use_pending).surface_types.contains(&surface)
                            }
                            on:change=move |_| {
                                state.update(|s| {
                                    s.active_mut(use_pending).toggle_surface_type(surface)
                                });
                            }
                        />
                        <span>{surface.label()}</span>
                    </label>
                }).collect_view()}
            </div>
        </section>

        <section class="court-filter__section">
            <h3 class="court-filter__heading">"운영 구분"</h3>
            <div class="court-filter__options">
                {OWNER_TYPE_LABELS.into_iter().map(|label| view! {
                    <label class="court-filter__option">
                        <input
                            type="checkbox"
                            class="court-filter__checkbox"
                            prop:checked=move || {
                                state.get().active(use_pending).owner_types.contains(label)
                            }
                            on:change=move |_| {
                                state.update(|s| {
                                    s.active_mut(use_pending).toggle_owner_type(label)
                                });
                            }
                        />
                        <span>{label}</span>
                    </label>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn CourtList() -> impl IntoView {
    let (courts, set_courts) = signal::<Vec<Court>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let state = create_state();

    let load_courts = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_courts().await {
                Ok(items) => {
                    set_courts.set(items);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // Выборка грузится один раз при открытии страницы
    load_courts();

    // Производные значения пересчитываются от committed-снимка
    let options = Signal::derive(move || derive_options(&courts.get()));
    let filtered = Signal::derive(move || filter_courts(&courts.get(), &state.get().committed));

    view! {
        <div class="court-directory">
            // Сайдбар для широких экранов: фильтр без шага подтверждения
            <aside class="court-directory__sidebar">
                <h2 class="court-directory__brand">"GROUND KOREA"</h2>
                <CourtFilterContent state=state options=options use_pending=false />
                <button
                    class="button button--secondary court-directory__reset"
                    on:click=move |_| state.update(|s| s.reset())
                >
                    "필터 초기화"
                </button>
            </aside>

            // Плавающая кнопка на узких экранах открывает панель
            <button
                class="court-directory__filter-fab"
                on:click=move |_| state.update(|s| s.open_editing())
            >
                {icon("filter")}
                <span>"필터"</span>
            </button>

            <Show when=move || state.get().is_filter_open>
                <div
                    class="filter-modal__overlay"
                    on:click=move |_| state.update(|s| s.cancel_editing())
                ></div>
                <div class="filter-modal">
                    <div class="filter-modal__header">
                        <h2 class="filter-modal__title">"필터"</h2>
                        <button
                            class="filter-modal__close"
                            aria-label="닫기"
                            on:click=move |_| state.update(|s| s.cancel_editing())
                        >
                            {icon("close")}
                        </button>
                    </div>
                    <div class="filter-modal__body">
                        <CourtFilterContent state=state options=options use_pending=true />
                        <button
                            class="button button--secondary filter-modal__reset"
                            on:click=move |_| state.update(|s| s.reset())
                        >
                            "필터 초기화"
                        </button>
                    </div>
                    <div class="filter-modal__footer">
                        <button
                            class="button button--primary filter-modal__confirm"
                            on:click=move |_| state.update(|s| s.confirm())
                        >
                            "확인"
                        </button>
                    </div>
                </div>
            </Show>

            <section class="court-directory__results">
                <p class="court-directory__count">
                    {move || filtered.get().len()}"개의 코트"
                </p>

                {move || error.get().map(|e| view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">"에러: "{e}</span>
                    </div>
                })}

                {move || {
                    let items = filtered.get();
                    if items.is_empty() {
                        view! {
                            <p class="court-directory__empty">"조건에 맞는 코트가 없습니다."</p>
                        }.into_any()
                    } else {
                        view! {
                            <ul class="court-directory__grid">
                                {items.into_iter().map(court_card).collect_view()}
                            </ul>
                        }.into_any()
                    }
                }}
            </section>
        </div>
    }
}
