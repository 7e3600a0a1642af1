use crate::viewer::GalleryViewer;

// what the gallery container shows
//
// fetch is the state of the one-shot list request: None while in flight,
// Some(Err) once it failed, Some(Ok) once the viewer holds the result
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GalleryView {
    Loading,
    Unavailable,
    // indices into the viewer's sequence, one per thumbnail
    Grid(Vec<usize>),
}

impl GalleryView {
    pub fn from_state<E>(fetch: Option<Result<(), E>>, viewer: &GalleryViewer) -> Self {
        match fetch {
            None => GalleryView::Loading,
            Some(Err(_)) => GalleryView::Unavailable,
            Some(Ok(())) => {
                // image_sources() already drops blank payloads; this only matters
                // for a viewer filled some other way
                let indices: Vec<usize> = viewer
                    .images()
                    .iter()
                    .enumerate()
                    .filter(|(_, src)| !src.is_empty())
                    .map(|(index, _)| index)
                    .collect();

                if indices.is_empty() {
                    GalleryView::Unavailable
                } else {
                    GalleryView::Grid(indices)
                }
            }
        }
    }
}
