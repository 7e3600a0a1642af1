pub mod style;

use gloo_console::error as console_error;

// the host page owns the mount point, so check for it before handing control
// to dioxus, which would otherwise panic deep inside the renderer
pub fn mount_point_exists(id: &str) -> bool {
    let found = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .is_some();

    if !found {
        console_error!(format!("Gallery mount element #{id} not found"));
    }

    found
}
