//! Browser services with a native fallback.
//!
//! On WASM these go through `web_sys`; on native builds (tests, desktop
//! tooling) they degrade to logging.

use std::time::Duration;

/// MIME type of the spreadsheet the backend exports.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Blocking acknowledgement dialog.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("{message}");
    }
}

/// A `blob:` URL for local bytes, used to preview a photo before upload.
pub fn object_url(bytes: &[u8], content_type: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::of1(&array);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(content_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
        web_sys::Url::create_object_url_with_blob(&blob).ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (bytes, content_type);
        None
    }
}

pub fn revoke_object_url(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
    }
}

/// Hand bytes to the browser as a file download. Returns whether it was offered.
pub fn download(bytes: &[u8], file_name: &str, content_type: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let Some(url) = object_url(bytes, content_type) else {
            return false;
        };
        let anchor = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.create_element("a").ok())
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        let offered = match anchor {
            Some(a) => {
                a.set_href(&url);
                a.set_download(file_name);
                a.click();
                true
            }
            None => false,
        };
        revoke_object_url(&url);
        offered
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("Export {file_name} ({content_type}): {} bytes", bytes.len());
        false
    }
}
