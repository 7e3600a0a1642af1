use crate::viewer::Direction;

// SwipeRecognizer
//
// tracks one horizontal touch gesture on the modal image.  a gesture fires at
// most once: as soon as the finger has travelled further than the threshold the
// direction is reported and the gesture goes idle until the next touch-start
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeRecognizer {
    threshold: f64,
    start_x: f64,
    end_x: f64,
    active: bool,
}

impl SwipeRecognizer {
    pub fn new(threshold: f64) -> Self {
        SwipeRecognizer {
            threshold,
            start_x: 0.0,
            end_x: 0.0,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = x;
        self.end_x = x;
        self.active = true;
    }

    // finger moving left (start to the right of the current point) means next
    pub fn touch_move(&mut self, x: f64) -> Option<Direction> {
        if !self.active {
            return None;
        }

        self.end_x = x;
        let offset = self.start_x - self.end_x;

        if offset.abs() <= self.threshold {
            return None;
        }

        self.active = false;

        if offset > 0.0 {
            Some(Direction::Next)
        } else {
            Some(Direction::Previous)
        }
    }

    pub fn touch_end(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_moves_do_nothing() {
        let mut swipe = SwipeRecognizer::new(50.0);

        swipe.touch_start(200.0);

        assert_eq!(swipe.touch_move(180.0), None);
        assert_eq!(swipe.touch_move(150.0), None);
        assert_eq!(swipe.touch_move(250.0), None);
        assert!(swipe.is_active());

        swipe.touch_end();

        assert!(!swipe.is_active());
    }

    #[test]
    fn leftward_swipe_fires_next_once() {
        let mut swipe = SwipeRecognizer::new(50.0);

        swipe.touch_start(200.0);

        assert_eq!(swipe.touch_move(170.0), None);
        assert_eq!(swipe.touch_move(149.0), Some(Direction::Next));
        assert_eq!(swipe.touch_move(100.0), None);
        assert_eq!(swipe.touch_move(20.0), None);

        swipe.touch_end();
    }

    #[test]
    fn rightward_swipe_fires_previous_once() {
        let mut swipe = SwipeRecognizer::new(50.0);

        swipe.touch_start(100.0);

        assert_eq!(swipe.touch_move(151.0), Some(Direction::Previous));
        assert_eq!(swipe.touch_move(300.0), None);
    }

    #[test]
    fn moves_without_a_start_are_ignored() {
        let mut swipe = SwipeRecognizer::new(50.0);

        assert_eq!(swipe.touch_move(500.0), None);

        swipe.touch_start(0.0);
        swipe.touch_end();

        assert_eq!(swipe.touch_move(500.0), None);
    }

    #[test]
    fn each_touch_start_arms_a_new_gesture() {
        let mut swipe = SwipeRecognizer::new(50.0);

        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_move(200.0), Some(Direction::Next));
        swipe.touch_end();

        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_move(200.0), Some(Direction::Next));
    }
}
