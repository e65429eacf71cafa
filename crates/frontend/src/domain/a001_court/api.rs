use crate::shared::api_utils::api_url;
use contracts::domain::a001_court::Court;
use gloo_net::http::Request;
use leptos::logging::log;

/// Загрузка ограниченной выборки кортов (не более 50, отсортированы
/// по названию на сервере). Выполняется один раз при открытии страницы.
pub async fn fetch_courts() -> Result<Vec<Court>, String> {
    let url = api_url("/api/courts");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch courts: {}", e))?;

    let status = response.status();
    if status != 200 {
        return Err(format!("Server error: {}", status));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    match serde_json::from_str::<Vec<Court>>(&text) {
        Ok(courts) => {
            log!("Loaded {} courts", courts.len());
            Ok(courts)
        }
        Err(e) => {
            log!("Failed to parse courts response: {:?}", e);
            Err(format!("Failed to parse response: {}", e))
        }
    }
}
