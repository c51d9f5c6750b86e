//! File Commands
//!
//! Reading a picked backup file and downloading a generated one.

use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use shopping_list_core::backup::{BackupFile, DownloadSink};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub(crate) fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// A file chosen through an `<input type="file">`
pub struct BrowserFile(pub web_sys::File);

#[async_trait(?Send)]
impl BackupFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    async fn read_text(&self) -> Result<String, String> {
        let text = JsFuture::from(self.0.text()).await.map_err(js_error)?;
        text.as_string().ok_or_else(|| "file content is not text".to_string())
    }
}

/// Saves backups by clicking a temporary download link
pub struct BrowserDownload;

impl DownloadSink for BrowserDownload {
    fn save(&self, filename: &str, content: &str) -> Result<(), String> {
        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        let options = BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or("no document to download from")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| "failed to create link".to_string())?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        // Revoking synchronously can cancel the download in some browsers
        Timeout::new(0, move || {
            let _ = Url::revoke_object_url(&url);
        })
        .forget();
        Ok(())
    }
}
