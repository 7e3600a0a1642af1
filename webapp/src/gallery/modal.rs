use dioxus::prelude::*;

use crate::use_config;
use ::common::{
    swipe::SwipeRecognizer,
    viewer::{Direction, GalleryViewer},
};

// horizontal position of the first finger, if the event carries one at all
fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .touches()
        .first()
        .map(|point| point.client_coordinates().x)
}

#[derive(Clone, PartialEq, Props)]
pub struct ImageModalProps {
    viewer_signal: Signal<GalleryViewer>,
    modal_open_signal: Signal<bool>,
}

// ImageModal
//
// full size view of the current image.  navigation goes through the viewer, so
// the buttons and the swipe gesture share the same wraparound rules
#[component]
pub fn ImageModal(props: ImageModalProps) -> Element {
    let mut viewer_signal = props.viewer_signal;
    let mut modal_open_signal = props.modal_open_signal;

    let threshold = use_config().threshold();
    let mut swipe_signal = use_signal(|| SwipeRecognizer::new(threshold));

    if !modal_open_signal() {
        return rsx! {};
    }

    let (src, caption) = {
        let viewer = viewer_signal.read();
        match viewer.current_image() {
            Some(src) => (src.to_string(), viewer.caption().unwrap_or_default()),
            None => return rsx! {},
        }
    };

    let mut navigate = move |direction: Direction| {
        viewer_signal.with_mut(|viewer| {
            viewer.navigate(direction);
        });
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| modal_open_signal.set(false),

            div {
                class: "modal-content",
                onclick: move |event| event.stop_propagation(),

                button {
                    class: "close",
                    onclick: move |_| modal_open_signal.set(false),
                    "×"
                }

                img {
                    id: "modalImage",
                    src,
                    alt: "",
                    ontouchstart: move |event| {
                        if let Some(x) = first_touch_x(&event) {
                            swipe_signal.write().touch_start(x);
                        }
                    },
                    ontouchmove: move |event| {
                        let Some(x) = first_touch_x(&event) else {
                            return;
                        };

                        let direction = swipe_signal.write().touch_move(x);

                        if let Some(direction) = direction {
                            navigate(direction);
                        }
                    },
                    ontouchend: move |_| swipe_signal.write().touch_end(),
                }

                div { class: "modal-controls",
                    button {
                        id: "prevBtn",
                        onclick: move |_| navigate(Direction::Previous),
                        "‹"
                    }
                    span { "{caption}" }
                    button {
                        id: "nextBtn",
                        onclick: move |_| navigate(Direction::Next),
                        "›"
                    }
                }
            }
        }
    }
}
