pub mod gallery;
pub mod upload;

// the backend answers with either a json document or a plain string, so any
// non-success response is turned into an error carrying whatever text came back
pub(crate) fn http_err(status: u16, text: &str) -> anyhow::Error {
    anyhow::Error::msg(format!("request failed with status {status}: {text}"))
}

// web_sys calls fail with an opaque JsValue, which is not Send + Sync
pub(crate) fn js_err(context: &str, err: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{context}: {err:?}"))
}
