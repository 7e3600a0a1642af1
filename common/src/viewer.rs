// ring arithmetic for the modal
//
// both functions return None for an empty sequence, which callers treat as
// "do nothing" rather than as an error
pub fn next_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some((current + 1) % len)
}

pub fn previous_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some((current % len + len - 1) % len)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Next,
    Previous,
}

// GalleryViewer
//
// owns the in-memory image sequence and the index of the image shown in the
// modal.  current is always a valid index whenever images is non-empty
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryViewer {
    images: Vec<String>,
    current: usize,
}

impl GalleryViewer {
    pub fn new(images: Vec<String>) -> Self {
        GalleryViewer { images, current: 0 }
    }

    // swap in a freshly fetched sequence
    pub fn replace(&mut self, images: Vec<String>) {
        self.images = images;
        self.current = 0;
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        if self.images.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    // jump straight to a thumbnail; out of range leaves everything untouched
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if index >= self.images.len() {
            return None;
        }

        self.current = index;
        self.current_image()
    }

    pub fn show_next(&mut self) -> Option<&str> {
        self.current = next_index(self.current, self.images.len())?;
        self.current_image()
    }

    pub fn show_previous(&mut self) -> Option<&str> {
        self.current = previous_index(self.current, self.images.len())?;
        self.current_image()
    }

    pub fn navigate(&mut self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Next => self.show_next(),
            Direction::Previous => self.show_previous(),
        }
    }

    // "3 / 7" style position, 1-based
    pub fn caption(&self) -> Option<String> {
        let index = self.current_index()?;
        Some(format!("{} / {}", index + 1, self.images.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer(len: usize) -> GalleryViewer {
        GalleryViewer::new((0..len).map(|i| format!("img-{i}")).collect())
    }

    #[test]
    fn next_then_previous_round_trips() {
        for len in 1..8 {
            for i in 0..len {
                let next = next_index(i, len).unwrap();
                assert_eq!(previous_index(next, len), Some(i), "len {len} index {i}");

                let prev = previous_index(i, len).unwrap();
                assert_eq!(next_index(prev, len), Some(i), "len {len} index {i}");
            }
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        assert_eq!(next_index(4, 5), Some(0));
        assert_eq!(previous_index(0, 5), Some(4));
        assert_eq!(next_index(0, 1), Some(0));
        assert_eq!(previous_index(0, 1), Some(0));
    }

    #[test]
    fn empty_sequence_is_a_no_op() {
        assert_eq!(next_index(0, 0), None);
        assert_eq!(previous_index(0, 0), None);

        let mut viewer = GalleryViewer::default();

        assert_eq!(viewer.show_next(), None);
        assert_eq!(viewer.show_previous(), None);
        assert_eq!(viewer.navigate(Direction::Next), None);
        assert_eq!(viewer.current_index(), None);
        assert_eq!(viewer.current_image(), None);
        assert_eq!(viewer.caption(), None);
        assert_eq!(viewer, GalleryViewer::default());
    }

    #[test]
    fn navigation_updates_the_shown_image() {
        let mut viewer = viewer(3);

        assert_eq!(viewer.current_image(), Some("img-0"));
        assert_eq!(viewer.show_next(), Some("img-1"));
        assert_eq!(viewer.show_next(), Some("img-2"));
        assert_eq!(viewer.show_next(), Some("img-0"));
        assert_eq!(viewer.show_previous(), Some("img-2"));
        assert_eq!(viewer.navigate(Direction::Previous), Some("img-1"));
        assert_eq!(viewer.current_index(), Some(1));
        assert_eq!(viewer.caption().as_deref(), Some("2 / 3"));
    }

    #[test]
    fn select_checks_bounds() {
        let mut viewer = viewer(3);

        assert_eq!(viewer.select(2), Some("img-2"));
        assert_eq!(viewer.select(3), None);
        assert_eq!(viewer.current_index(), Some(2));
        assert_eq!(viewer.show_next(), Some("img-0"));
    }

    #[test]
    fn replace_resets_the_index() {
        let mut viewer = viewer(5);
        viewer.select(4);

        viewer.replace(vec![String::from("a"), String::from("b")]);

        assert_eq!(viewer.current_index(), Some(0));
        assert_eq!(viewer.current_image(), Some("a"));

        viewer.replace(Vec::new());

        assert!(viewer.is_empty());
        assert_eq!(viewer.show_next(), None);
    }
}
