use dioxus::prelude::*;
use tracing::{debug, error};

use crate::use_config;
use ::common::{payload::image_sources, view::GalleryView, viewer::GalleryViewer};
use api::gallery::get_gallery;

pub mod grid;
use grid::GalleryGrid;

pub mod modal;
use modal::ImageModal;

const LOADING_MESSAGE: &str = "Loading images...";
const EMPTY_MESSAGE: &str = "No images available";

#[derive(Clone, PartialEq, Props)]
struct GalleryStatusProps {
    text: String,
}

#[component]
fn GalleryStatus(props: GalleryStatusProps) -> Element {
    rsx! {
        p { class: "gallery-status", "{props.text}" }
    }
}

// Gallery
//
// owns the image sequence and the modal state for the whole widget.  the list
// is fetched once on mount; a failed fetch is final until the page is reloaded
#[component]
pub fn Gallery() -> Element {
    let config = use_config();

    let mut viewer_signal = use_signal(GalleryViewer::default);
    let modal_open_signal = use_signal(|| false);

    let list_url = config.list_url();
    let record_field = config.record_field.clone();

    let gallery_future = use_resource(move || {
        let list_url = list_url.clone();
        let record_field = record_field.clone();

        async move {
            match get_gallery(&list_url, &record_field).await {
                Ok(payloads) => {
                    debug!("fetched {} gallery images", payloads.len());

                    viewer_signal.with_mut(|viewer| viewer.replace(image_sources(payloads)));
                    Ok(())
                }
                Err(err) => {
                    error!("error fetching images: {err}");
                    Err(err)
                }
            }
        }
    });

    // the error itself was logged inside the future; only its presence matters here
    let fetch = gallery_future
        .read()
        .as_ref()
        .map(|result| result.as_ref().map(|_| ()).map_err(|_| ()));

    let content = match GalleryView::from_state(fetch, &viewer_signal.read()) {
        GalleryView::Loading => rsx! {
            GalleryStatus { text: "{LOADING_MESSAGE}" }
        },
        GalleryView::Unavailable => rsx! {
            GalleryStatus { text: "{EMPTY_MESSAGE}" }
        },
        GalleryView::Grid(indices) => rsx! {
            GalleryGrid { viewer_signal, modal_open_signal, indices }
        },
    };

    rsx! {
        div { id: "imgGallery", {content} }
        ImageModal { viewer_signal, modal_open_signal }
    }
}
