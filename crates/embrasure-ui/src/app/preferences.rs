//! Persisted operator overrides for the REST endpoint.

use crate::core::config::ApiConfig;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

pub(crate) const BASE_URL_KEY: &str = "embrasure.api.base_url";
pub(crate) const CONTEXT_ID_KEY: &str = "embrasure.context_id";

pub(crate) fn load_api_config() -> ApiConfig {
    let base_url = LocalStorage::get::<String>(BASE_URL_KEY).ok();
    let context_id = LocalStorage::get::<String>(CONTEXT_ID_KEY).ok();
    match ApiConfig::with_overrides(base_url, context_id) {
        Ok(config) => config,
        Err(err) => {
            let detail = err.to_string();
            console::error!("ignoring api config overrides", detail);
            ApiConfig::default()
        }
    }
}
