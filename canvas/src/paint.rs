use eframe::egui::{pos2, Color32, Painter, Pos2, Rect, Shape, Stroke};
use figures::Figure;
use glam::Vec2;

pub const BACKGROUND: Color32 = Color32::WHITE;
/// Fill of every figure, orange.
pub const FILL: Color32 = Color32::from_rgb(255, 165, 0);

/// Outline of a selected figure.
pub fn border() -> Stroke {
    Stroke::new(3.0, Color32::BLACK)
}

#[inline]
pub fn to_screen(origin: Pos2, p: Vec2) -> Pos2 {
    pos2(origin.x + p.x, origin.y + p.y)
}

pub fn figure(painter: &Painter, origin: Pos2, figure: &Figure) {
    let points = figure
        .vertices()
        .iter()
        .map(|&v| to_screen(origin, v))
        .collect();
    let stroke = if figure.is_selected() {
        border()
    } else {
        Stroke::NONE
    };
    painter.add(Shape::convex_polygon(points, FILL, stroke));
}

/// Paints the background of `rect` and the figures on top, in order.
pub fn field(painter: &Painter, rect: Rect, figures: &[Figure]) {
    painter.rect_filled(rect, 0.0, BACKGROUND);
    for f in figures {
        figure(painter, rect.min, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_to_screen() {
        let origin = pos2(8.0, 16.0);
        assert_eq!(to_screen(origin, Vec2::ZERO), origin);
        assert_eq!(to_screen(origin, Vec2::new(2.0, 4.0)), pos2(10.0, 20.0));
    }
}
