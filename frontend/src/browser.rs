use gloo_console::{error, info};
use gloo_utils::window;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Position as GeolocationPosition, Storage};
use workout_tracker_lib::{
    capabilities::{KeyValueStore, Notifier},
    error::StoreError,
    Coordinates,
};
use yew::Callback;

/// Asks the browser for the current position once. Exactly one of the callbacks fires.
pub fn request_position(on_found: Callback<Coordinates>, on_unavailable: Callback<()>) {
    let geolocation = match window().navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(err) => {
            error!("Geolocation not supported", err);
            on_unavailable.emit(());
            return;
        }
    };

    let success = Closure::once_into_js(move |position: GeolocationPosition| {
        let coords = position.coords();
        on_found.emit(Coordinates::new(coords.latitude(), coords.longitude()));
    });

    let failed = on_unavailable.clone();
    let failure = Closure::once_into_js(move |err: JsValue| {
        error!("Geolocation failed", err);
        failed.emit(());
    });

    if let Err(err) = geolocation.get_current_position_with_error_callback(success.unchecked_ref(), Some(failure.unchecked_ref())) {
        error!("Geolocation request rejected", err);
        on_unavailable.emit(());
    }
}

/// `window.localStorage`. Missing storage (private mode, disabled cookies) reads as empty.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = window().local_storage().ok().flatten();
        if storage.is_none() {
            error!("localStorage unavailable, workouts will not be saved");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage".into()))?;

        storage.set_item(key, value).map_err(|err| StoreError::Write {
            key: key.to_owned(),
            reason: format!("{err:?}"),
        })
    }

    fn remove(&mut self, key: &str) {
        let Some(storage) = &self.storage else {
            return;
        };

        match storage.remove_item(key) {
            Ok(()) => info!(format!("Removed {key} from localStorage")),
            Err(err) => error!(format!("Failed to remove {key}"), err),
        }
    }
}

pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        if let Err(err) = window().alert_with_message(message) {
            error!(format!("Failed to show alert: {message}"), err);
        }
    }
}
