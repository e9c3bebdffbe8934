use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Free-form drag offset of a floating window. Unclamped: the window may
/// be dragged fully off-screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    offset: Point,
    anchor: Option<Point>,
}

impl DragState {
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn begin(&mut self, pointer: Point) {
        self.anchor = Some(pointer - self.offset);
    }

    pub fn move_to(&mut self, pointer: Point) {
        if let Some(anchor) = self.anchor {
            self.offset = pointer - anchor;
        }
    }

    pub fn end(&mut self) {
        self.anchor = None;
    }

    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px)", self.offset.x, self.offset.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_tracks_pointer_delta() {
        let mut drag = DragState::default();
        drag.begin(Point::new(100, 200));
        assert!(drag.is_dragging());
        drag.move_to(Point::new(110, 190));
        assert_eq!(drag.offset(), Point::new(10, -10));
        drag.move_to(Point::new(40, 260));
        drag.end();
        assert!(!drag.is_dragging());
        assert_eq!(drag.offset(), Point::new(-60, 60));
    }

    #[test]
    fn test_moves_ignored_outside_gesture() {
        let mut drag = DragState::default();
        drag.move_to(Point::new(500, 500));
        assert_eq!(drag.offset(), Point::default());

        drag.begin(Point::new(0, 0));
        drag.move_to(Point::new(5, 5));
        drag.end();
        drag.move_to(Point::new(900, 900));
        assert_eq!(drag.offset(), Point::new(5, 5));
    }

    #[test]
    fn test_second_drag_composes() {
        let mut drag = DragState::default();
        drag.begin(Point::new(10, 10));
        drag.move_to(Point::new(30, 15));
        drag.end();

        drag.begin(Point::new(300, 300));
        drag.move_to(Point::new(250, 310));
        drag.end();

        assert_eq!(drag.offset(), Point::new(20 - 50, 5 + 10));
    }

    #[test]
    fn test_unclamped_offscreen() {
        let mut drag = DragState::default();
        drag.begin(Point::new(0, 0));
        drag.move_to(Point::new(-5000, 9000));
        drag.end();
        assert_eq!(drag.css_transform(), "translate(-5000px, 9000px)");
    }
}
