use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::js_err;

// structs and types

// a file picked by the user, already read into memory
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn mime_type(&self) -> String {
        mime_guess::from_path(&self.name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}

// the backend answers both successes and failures with the same shape
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadGalleryResp {
    pub message: String,
}

// the two application-level answers
//
// anything else (network failure, a body we can't read) surfaces as an Err
#[derive(Clone, Debug, PartialEq)]
pub enum UploadOutcome {
    Accepted(String),
    Rejected(String),
}

// messages

// post a single file as multipart/form-data
//
// no file at all is still posted, leaving validation to the server
pub async fn upload_gallery(
    url: &str,
    field: &str,
    file: Option<&UploadFile>,
) -> anyhow::Result<UploadOutcome> {
    let form = multipart(field, file)?;

    let resp = Request::post(url).body(form)?.send().await?;

    let text = resp.text().await?;

    interpret_upload(resp.ok(), &text)
}

fn multipart(field: &str, file: Option<&UploadFile>) -> anyhow::Result<FormData> {
    let form = FormData::new().map_err(|err| js_err("failed to create form", err))?;

    if let Some(file) = file {
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);

        let options = BlobPropertyBag::new();
        options.set_type(&file.mime_type());

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|err| js_err("failed to create blob", err))?;

        form.append_with_blob_and_filename(field, &blob, &file.name)
            .map_err(|err| js_err("failed to append file", err))?;
    }

    Ok(form)
}

// map a completed response onto an outcome
//
// the message is shown verbatim regardless of the status, so a body without
// one is treated the same as a transport failure
pub fn interpret_upload(ok: bool, body: &str) -> anyhow::Result<UploadOutcome> {
    let resp: UploadGalleryResp = serde_json::from_str(body)?;

    if ok {
        Ok(UploadOutcome::Accepted(resp.message))
    } else {
        Ok(UploadOutcome::Rejected(resp.message))
    }
}
