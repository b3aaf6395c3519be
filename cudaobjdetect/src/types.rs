use crate::bindings;
use opencv::core;

pub type Size = bindings::Size;

impl Size {
    pub const fn new(width: i32, height: i32) -> Size {
        Size { width, height }
    }
}

impl From<core::Size> for Size {
    fn from(s: core::Size) -> Size {
        Size::new(s.width, s.height)
    }
}

impl From<Size> for core::Size {
    fn from(s: Size) -> core::Size {
        core::Size::new(s.width, s.height)
    }
}

pub type Rect = bindings::Rect;

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x2(&self) -> i32 {
        self.x + self.width
    }

    pub fn y2(&self) -> i32 {
        self.y + self.height
    }

    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }
}

impl From<core::Rect> for Rect {
    fn from(r: core::Rect) -> Rect {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for core::Rect {
    fn from(r: Rect) -> core::Rect {
        core::Rect::new(r.x, r.y, r.width, r.height)
    }
}

/// Raw HOG windows with their SVM scores. `rects[i]` scored `confidences[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Detections {
    pub rects: Vec<Rect>,
    pub confidences: Vec<f64>,
}

impl Detections {
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Rect, f64)> + '_ {
        self.rects.iter().zip(self.confidences.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_corners() {
        let r = Rect::new(10, 20, 64, 128);
        assert_eq!(r.x2(), 74);
        assert_eq!(r.y2(), 148);
        assert_eq!(r.area(), 64 * 128);
    }

    #[test]
    fn area_of_huge_rect_does_not_overflow() {
        let r = Rect::new(0, 0, i32::MAX, i32::MAX);
        assert_eq!(r.area(), i64::from(i32::MAX) * i64::from(i32::MAX));
    }

    #[test]
    fn opencv_conversions() {
        let r = Rect::new(1, 2, 3, 4);
        let cv: core::Rect = r.into();
        assert_eq!((cv.x, cv.y, cv.width, cv.height), (1, 2, 3, 4));
        assert_eq!(Rect::from(cv), r);

        let s: core::Size = Size::new(64, 128).into();
        assert_eq!(Size::from(s), Size::new(64, 128));
    }

    #[test]
    fn detections_pair_up() {
        let det = Detections {
            rects: vec![Rect::new(0, 0, 8, 8), Rect::new(4, 4, 8, 8)],
            confidences: vec![0.5, 1.25],
        };
        assert_eq!(det.len(), 2);
        let scores: Vec<f64> = det.iter().map(|(_, c)| c).collect();
        assert_eq!(scores, vec![0.5, 1.25]);
        assert!(Detections::default().is_empty());
    }
}
