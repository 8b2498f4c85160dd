use super::Vec2;

/// Axis-aligned bounds in logical canvas units (min/max corners, y up).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Bounds centered on `center` extending `half` in each direction.
    #[inline]
    pub fn from_center_half_extent(center: Vec2, half: Vec2) -> Self {
        Self::new(center - half, center + half)
    }

    /// Smallest rect containing every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Rect::new(first, first), |r, p| r.include(p)))
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Grows the rect to include `p`.
    #[inline]
    pub fn include(self, p: Vec2) -> Rect {
        Rect::new(
            Vec2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            Vec2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        )
    }

    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        self.include(other.min).include(other.max)
    }

    /// Closed containment with a tolerance applied on every edge.
    #[inline]
    pub fn contains_within(self, p: Vec2, tolerance: f32) -> bool {
        p.x >= self.min.x - tolerance
            && p.y >= self.min.y - tolerance
            && p.x <= self.max.x + tolerance
            && p.y <= self.max.y + tolerance
    }
}
