use dioxus::prelude::*;
use tracing::{debug, error};

use crate::use_config;
use ::common::upload::{FilePicker, UploadStatus, can_submit};
use api::upload::{UploadFile, upload_gallery};

// Uploader
//
// a single file input posted as multipart to the upload endpoint.  the file is
// read when it is picked, and submit is held back until that read has settled so
// the post always carries the file currently selected
#[component]
pub fn Uploader() -> Element {
    let config = use_config();

    let mut status_signal = use_signal(UploadStatus::default);
    let mut picker_signal = use_signal(FilePicker::default);

    let upload_url = config.upload_url();
    let upload_field = config.upload_field.clone();

    let status = status_signal();
    let ready = can_submit(&status, &picker_signal.read());

    rsx! {
        form {
            id: "uploadForm",
            class: "upload-form",
            onsubmit: move |event| {
                event.prevent_default();

                // the control is disabled while pending or reading, but a keyboard
                // submit can still sneak through
                let start = can_submit(&status_signal.read(), &picker_signal.read());
                if start {
                    status_signal.set(UploadStatus::Pending);
                }

                let upload_url = upload_url.clone();
                let upload_field = upload_field.clone();

                async move {
                    if !start {
                        debug!("upload in flight or file still loading, ignoring submit");
                        return;
                    }

                    let file = picker_signal.read().file().cloned();
                    let result = upload_gallery(&upload_url, &upload_field, file.as_ref()).await;

                    status_signal.set(UploadStatus::from_result(result));
                }
            },

            input {
                id: "image",
                name: "image",
                r#type: "file",
                onchange: move |event| {
                    // taken before the read starts so the old file can't be posted meanwhile
                    let token = picker_signal.write().begin_read();

                    async move {
                        let mut picked = None;

                        if let Some(engine) = event.files() {
                            if let Some(name) = engine.files().into_iter().next() {
                                match engine.read_file(&name).await {
                                    Some(bytes) => picked = Some(UploadFile { name, bytes }),
                                    None => error!("failed to read selected file {name}"),
                                }
                            }
                        }

                        if !picker_signal.write().finish_read(token, picked) {
                            debug!("discarding read of a superseded file selection");
                        }
                    }
                },
            }
            input {
                r#type: "submit",
                value: "Upload",
                disabled: !ready,
            }
            if status.is_pending() {
                span { "Uploading..." }
            } else if picker_signal.read().is_reading() {
                span { "Reading file..." }
            }
        }
        div { id: "responseMessage",
            if let (Some(class), Some(message)) = (status.banner_class(), status.message()) {
                div { class, "{message}" }
            }
        }
    }
}
