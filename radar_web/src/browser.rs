//! Thin wrappers over the browser APIs the two pages touch:
//! session storage, Blob downloads, the clipboard and `alert`.

use radar_core::error::RadarError;
use radar_core::export::ExportFile;
use radar_core::store::{KeyValueBackend, KeyedReportStore};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// `window.sessionStorage` as a [`KeyValueBackend`].
#[derive(Clone, Debug)]
pub struct SessionBackend {
    storage: web_sys::Storage,
}

impl SessionBackend {
    pub fn open() -> Result<Self, RadarError> {
        let window = window().map_err(storage_error)?;
        let storage = window
            .session_storage()
            .map_err(storage_error)?
            .ok_or_else(|| RadarError::Storage("session storage is unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueBackend for SessionBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, RadarError> {
        self.storage.get_item(key).map_err(storage_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), RadarError> {
        self.storage.set_item(key, value).map_err(storage_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), RadarError> {
        self.storage.remove_item(key).map_err(storage_error)
    }
}

/// Session-backed report store under `key`.
pub fn session_store(key: &str) -> Result<KeyedReportStore<SessionBackend>, RadarError> {
    Ok(KeyedReportStore::new(SessionBackend::open()?, key))
}

/// `window.location.origin`, or `""` outside a page.
pub fn page_origin() -> String {
    window()
        .and_then(|w| w.location().origin())
        .unwrap_or_default()
}

/// `file` contents as a typed Blob.
pub fn text_blob(file: &ExportFile) -> Result<web_sys::Blob, JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(file.mime_type);
    web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
}

/// Offer `file` as a download through a temporary object URL.
pub fn download(file: &ExportFile) -> Result<(), JsValue> {
    let blob = text_blob(file)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(&file.file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
}

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let promise = window()?.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}

/// Blocking acknowledgement dialog.
pub fn alert(message: &str) {
    if let Ok(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

/// Readable text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn storage_error(value: JsValue) -> RadarError {
    RadarError::Storage(describe(&value))
}
