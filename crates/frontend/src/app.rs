use crate::domain::a001_court::ui::list::CourtList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <CourtList />
    }
}
