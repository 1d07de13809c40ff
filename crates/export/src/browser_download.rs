//! WASM: hands the artifact to the browser as a file download.
//!
//! Wraps the bytes in a `Blob`, points a temporary `<a download>` element at
//! an object URL for it, clicks the anchor and revokes the URL.

use wasm_bindgen::JsCast;

use crate::artifact::ChemistryArtifact;
use crate::export_error::ExportError;

fn js_err(context: &str, value: wasm_bindgen::JsValue) -> ExportError {
    ExportError::Browser(format!("{context}: {value:?}"))
}

pub(crate) fn trigger_download(artifact: &ChemistryArtifact) -> Result<(), ExportError> {
    let window =
        web_sys::window().ok_or_else(|| ExportError::Browser("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Browser("no document".to_string()))?;

    let bytes = js_sys::Uint8Array::from(artifact.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| js_err("blob", e))?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| js_err("object url", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| js_err("anchor", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Browser("anchor cast".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(artifact.file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(|e| js_err("revoke", e))?;
    Ok(())
}
