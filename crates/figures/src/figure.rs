use glam::Vec2;

use crate::{polygon, FieldError};

/// The figures offered by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Triangle,
    Hexagon,
    Heptagon,
}

impl FigureKind {
    pub const ALL: [FigureKind; 3] = [Self::Triangle, Self::Hexagon, Self::Heptagon];

    pub fn angles(self) -> u32 {
        match self {
            Self::Triangle => 3,
            Self::Hexagon => 6,
            Self::Heptagon => 7,
        }
    }

    /// Position in the palette, starting at 1.
    pub fn index(self) -> u8 {
        match self {
            Self::Triangle => 1,
            Self::Hexagon => 2,
            Self::Heptagon => 3,
        }
    }
}

impl TryFrom<u8> for FigureKind {
    type Error = FieldError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            1 => Ok(Self::Triangle),
            2 => Ok(Self::Hexagon),
            3 => Ok(Self::Heptagon),
            _ => Err(FieldError::InvalidKind(index)),
        }
    }
}

/// A regular polygon placed on a field.
///
/// The vertices are rebuilt from scratch whenever the center, the number of
/// angles or the radius change.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    center: Vec2,
    angles: u32,
    radius: f32,
    vertices: Vec<Vec2>,
    selected: bool,
    tracking: bool,
}

impl Figure {
    pub fn new(center: Vec2, angles: u32, radius: f32) -> Self {
        assert!(angles >= 3);
        Self {
            center,
            angles,
            radius,
            vertices: polygon::regular_polygon(center, angles, radius),
            selected: false,
            tracking: false,
        }
    }

    #[inline]
    pub fn of_kind(kind: FigureKind, center: Vec2, radius: f32) -> Self {
        Self::new(center, kind.angles(), radius)
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn angles(&self) -> u32 {
        self.angles
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Is the point inside the drawn polygon?
    pub fn contains(&self, point: Vec2) -> bool {
        polygon::contains(&self.vertices, point)
    }

    /// Is the point inside the circle the polygon is inscribed in?
    pub fn within_reach(&self, point: Vec2) -> bool {
        polygon::within_circle(self.center, self.radius, point)
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    /// Losing the selection also stops move-tracking.
    pub fn deselect(&mut self) {
        self.selected = false;
        self.tracking = false;
    }

    pub fn toggle_tracking(&mut self) {
        self.tracking = !self.tracking;
    }

    pub fn add_vertex(&mut self) {
        self.angles += 1;
        self.vertices = polygon::regular_polygon(self.center, self.angles, self.radius);
    }

    /// A copy of this figure centred at `center`, with the same shape and
    /// selection state.
    pub fn moved_to(&self, center: Vec2) -> Self {
        Self {
            selected: self.selected,
            tracking: self.tracking,
            ..Self::new(center, self.angles, self.radius)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_from_palette_index() {
        for kind in FigureKind::ALL {
            assert_eq!(FigureKind::try_from(kind.index()), Ok(kind));
        }
        assert_eq!(FigureKind::try_from(0), Err(FieldError::InvalidKind(0)));
        assert_eq!(FigureKind::try_from(4), Err(FieldError::InvalidKind(4)));
    }

    #[test]
    fn kind_angles() {
        let angles: Vec<u32> = FigureKind::ALL.iter().map(|k| k.angles()).collect();
        assert_eq!(angles, vec![3, 6, 7]);
    }

    #[test]
    fn add_vertex_keeps_center_and_radius() {
        let center = Vec2::new(10.0, 20.0);
        let mut f = Figure::new(center, 3, 40.0);
        f.add_vertex();
        assert_eq!(f.angles(), 4);
        assert_eq!(f.vertices().len(), 4);
        assert_eq!(f.center(), center);
        assert_eq!(f.radius(), 40.0);
        assert_eq!(f.vertices(), polygon::regular_polygon(center, 4, 40.0).as_slice());
    }

    #[test]
    fn moved_copy_keeps_shape_and_state() {
        let mut f = Figure::of_kind(FigureKind::Heptagon, Vec2::ZERO, 80.0);
        f.select();
        f.toggle_tracking();

        let m = f.moved_to(Vec2::new(300.0, 200.0));
        assert_eq!(m.center(), Vec2::new(300.0, 200.0));
        assert_eq!(m.angles(), 7);
        assert_eq!(m.radius(), 80.0);
        assert!(m.is_selected());
        assert!(m.is_tracking());
        assert!(m.vertices()[0].abs_diff_eq(Vec2::new(300.0, 120.0), 1e-3));
    }

    #[test]
    fn deselect_stops_tracking() {
        let mut f = Figure::new(Vec2::ZERO, 3, 1.0);
        f.select();
        f.toggle_tracking();
        f.deselect();
        assert!(!f.is_selected());
        assert!(!f.is_tracking());
    }

    #[test]
    #[should_panic]
    fn fewer_than_three_angles() {
        Figure::new(Vec2::ZERO, 2, 1.0);
    }
}
