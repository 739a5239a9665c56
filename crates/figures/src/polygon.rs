use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Vertices of a regular polygon with `angles` corners on the circle of
/// `radius` around `center`.
///
/// Screen coordinates are assumed (y grows downward), so the first vertex
/// sits straight above the center and the rest follow clockwise.
pub fn regular_polygon(center: Vec2, angles: u32, radius: f32) -> Vec<Vec2> {
    let step = TAU / angles as f32;
    (0..angles)
        .map(|i| {
            let alpha = -FRAC_PI_2 + step * i as f32;
            center + radius * Vec2::new(alpha.cos(), alpha.sin())
        })
        .collect()
}

/// Even-odd point in polygon test.
pub fn contains(vertices: &[Vec2], point: Vec2) -> bool {
    let next = vertices.iter().cycle().skip(1);
    let mut inside = false;
    for (a, b) in vertices.iter().zip(next) {
        if (a.y > point.y) != (b.y > point.y) {
            let x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Is `point` strictly inside the circle?
#[inline]
pub fn within_circle(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance(point) < radius
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn vertices_lie_on_circle() {
        let center = Vec2::new(120.0, 80.0);
        for angles in 3..=12 {
            for radius in [1.0, 40.0, 80.0, 250.5] {
                let v = regular_polygon(center, angles, radius);
                assert_eq!(v.len(), angles as usize);
                for p in &v {
                    assert!((p.distance(center) - radius).abs() < EPS * radius.max(1.0));
                }
                // first vertex points up
                assert!(v[0].abs_diff_eq(center - Vec2::new(0.0, radius), EPS * radius));
            }
        }
    }

    #[test]
    fn vertices_are_evenly_spaced() {
        let v = regular_polygon(Vec2::ZERO, 6, 10.0);
        let side = v[0].distance(v[1]);
        for i in 0..v.len() {
            let d = v[i].distance(v[(i + 1) % v.len()]);
            assert!((d - side).abs() < EPS);
        }
        // a hexagon's side equals its circumradius
        assert!((side - 10.0).abs() < EPS);
    }

    #[test]
    fn square_goes_clockwise_on_screen() {
        let v = regular_polygon(Vec2::ZERO, 4, 1.0);
        assert!(v[0].abs_diff_eq(Vec2::new(0.0, -1.0), EPS));
        assert!(v[1].abs_diff_eq(Vec2::new(1.0, 0.0), EPS));
        assert!(v[2].abs_diff_eq(Vec2::new(0.0, 1.0), EPS));
        assert!(v[3].abs_diff_eq(Vec2::new(-1.0, 0.0), EPS));
    }

    #[test]
    fn point_in_triangle() {
        let v = regular_polygon(Vec2::new(50.0, 50.0), 3, 40.0);
        assert!(contains(&v, Vec2::new(50.0, 50.0)));
        assert!(contains(&v, Vec2::new(50.0, 20.0)));
        // above the top vertex
        assert!(!contains(&v, Vec2::new(50.0, 5.0)));
        // inside the circle but outside the triangle's base
        assert!(within_circle(Vec2::new(50.0, 50.0), 40.0, Vec2::new(50.0, 85.0)));
        assert!(!contains(&v, Vec2::new(50.0, 85.0)));
    }

    #[test]
    fn empty_polygon_contains_nothing() {
        assert!(!contains(&[], Vec2::ZERO));
    }

    #[test]
    fn circle_boundary_is_outside() {
        assert!(!within_circle(Vec2::ZERO, 10.0, Vec2::new(10.0, 0.0)));
        assert!(within_circle(Vec2::ZERO, 10.0, Vec2::new(9.99, 0.0)));
    }
}
