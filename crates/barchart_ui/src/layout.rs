//! Layout primitives: sizes, bounds, padding, sizing modes and alignment.

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Half-open containment: the right and bottom edges belong to the neighbour.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Inset by padding, never producing negative dimensions.
    pub fn shrink(&self, padding: Padding) -> Bounds {
        Bounds::new(
            self.x + padding.left,
            self.y + padding.top,
            (self.width - padding.horizontal()).max(0.0),
            (self.height - padding.vertical()).max(0.0),
        )
    }

    /// Overlapping area of two rectangles, `None` when they do not overlap.
    pub fn intersect(&self, other: &Bounds) -> Option<Bounds> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Some(Bounds::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Translate child bounds (relative to `self`) into absolute coordinates.
    pub fn offset(&self, child: Bounds) -> Bounds {
        Bounds::new(self.x + child.x, self.y + child.y, child.width, child.height)
    }
}

/// Space around content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl From<f32> for Padding {
    fn from(value: f32) -> Self {
        Padding::all(value)
    }
}

/// How a widget's dimension is sized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// Fill all available space
    Fill,
    /// Shrink to fit content
    #[default]
    Shrink,
    /// Fixed size in logical pixels
    Fixed(f32),
}

impl Length {
    /// Resolve to a concrete size given the available space and the content size.
    pub fn resolve(&self, available: f32, content: f32) -> f32 {
        match self {
            Length::Fill => available.max(0.0),
            Length::Shrink => content,
            Length::Fixed(px) => *px,
        }
    }
}

impl From<f32> for Length {
    fn from(px: f32) -> Self {
        Length::Fixed(px)
    }
}

/// Placement of content along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

impl Alignment {
    /// Offset of `content` inside `available`. Overflowing content is pinned to the start.
    pub fn align(&self, available: f32, content: f32) -> f32 {
        let free = (available - content).max(0.0);
        match self {
            Alignment::Start => 0.0,
            Alignment::Center => free / 2.0,
            Alignment::End => free,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let b = Bounds::new(0.0, 0.0, 40.0, 10.0);
        assert!(b.contains(0.0, 0.0));
        assert!(b.contains(39.9, 9.9));
        assert!(!b.contains(40.0, 5.0));
    }

    #[test]
    fn test_intersect_disjoint_is_none() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn test_intersect_overlap() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(&b), Some(Bounds::new(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn test_shrink_never_negative() {
        let b = Bounds::new(0.0, 0.0, 4.0, 4.0).shrink(Padding::all(5.0));
        assert_eq!(b.width, 0.0);
        assert_eq!(b.height, 0.0);
    }

    #[test]
    fn test_length_resolve() {
        assert_eq!(Length::Fill.resolve(300.0, 20.0), 300.0);
        assert_eq!(Length::Shrink.resolve(300.0, 20.0), 20.0);
        assert_eq!(Length::Fixed(40.0).resolve(300.0, 20.0), 40.0);
    }

    #[test]
    fn test_alignment_center() {
        assert_eq!(Alignment::Center.align(100.0, 40.0), 30.0);
        assert_eq!(Alignment::End.align(100.0, 40.0), 60.0);
        assert_eq!(Alignment::Center.align(10.0, 40.0), 0.0);
    }
}
