use dioxus::prelude::*;
use tracing::error;

use crate::use_config;
use ::common::viewer::GalleryViewer;

#[derive(Clone, PartialEq, Props)]
struct ThumbnailProps {
    viewer_signal: Signal<GalleryViewer>,
    modal_open_signal: Signal<bool>,
    index: usize,
}

// a single tile; the source is looked up by index so the (large) base64 strings
// don't get copied into props and compared on every render
#[component]
fn Thumbnail(props: ThumbnailProps) -> Element {
    let mut viewer_signal = props.viewer_signal;
    let mut modal_open_signal = props.modal_open_signal;
    let index = props.index;

    let placeholder = use_config().placeholder_src;
    let mut broken_signal = use_signal(|| false);

    let src = if broken_signal() {
        placeholder
    } else {
        match viewer_signal.read().images().get(index) {
            Some(src) => src.clone(),
            None => return rsx! {},
        }
    };

    rsx! {
        div { class: "gallery-tile",
            a {
                href: "#",
                "data-index": "{index}",
                onclick: move |event| {
                    event.prevent_default();

                    if viewer_signal.with_mut(|viewer| viewer.select(index).is_some()) {
                        modal_open_signal.set(true);
                    }
                },
                img {
                    class: "img-thumbnail",
                    src,
                    alt: "",
                    loading: "lazy",
                    // swap in the placeholder once; if that fails too, leave it
                    onerror: move |_| {
                        if !broken_signal() {
                            error!("failed to load gallery image {index}");
                            broken_signal.set(true);
                        }
                    },
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GalleryGridProps {
    viewer_signal: Signal<GalleryViewer>,
    modal_open_signal: Signal<bool>,
    indices: Vec<usize>,
}

#[component]
pub fn GalleryGrid(props: GalleryGridProps) -> Element {
    rsx! {
        div { class: "gallery-grid",
            for index in props.indices.iter().copied() {
                Thumbnail {
                    key: "{index}",
                    viewer_signal: props.viewer_signal,
                    modal_open_signal: props.modal_open_signal,
                    index,
                }
            }
        }
    }
}
