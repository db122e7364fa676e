//! Shape generation for 2D primitives
//!
//! Everything here is plain geometry so it can be checked without a window.

use glam::Vec2;

use super::canvas::{Canvas, Rgba};
use super::palette;
use crate::sim::{Cloud, Rect};

/// One primitive ready to be painted
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(Rect, Rgba),
    Ellipse(Rect, Rgba),
    Polygon(Vec<Vec2>, Rgba),
}

impl Shape {
    pub fn paint<C: Canvas>(&self, canvas: &mut C) {
        match self {
            Shape::Rect(r, color) => canvas.rect(*r, *color),
            Shape::Ellipse(r, color) => canvas.ellipse(*r, *color),
            Shape::Polygon(points, color) => canvas.polygon(points, *color),
        }
    }
}

pub fn paint_all<C: Canvas>(canvas: &mut C, shapes: &[Shape]) {
    for shape in shapes {
        shape.paint(canvas);
    }
}

/// Number of stacked foliage triangles on a drawn tree
pub const TREE_LAYERS: usize = 4;

/// A layered pine tree.
///
/// `base` is the bottom-left corner of the lowest foliage layer (plus 20 px
/// of trunk); the tree spans `80 * scale` pixels and grows upward from there.
pub fn tree(base: Vec2, scale: f32) -> Vec<Shape> {
    let base_width = 80.0 * scale;
    let trunk_x = base.x + 8.0 * scale;
    let trunk_y = base.y - 10.0 * scale;
    let trunk_h = 60.0 * scale;

    let mut shapes = Vec::with_capacity(2 + TREE_LAYERS * 2);
    shapes.push(Shape::Rect(
        Rect::new(trunk_x, trunk_y, 24.0 * scale, trunk_h),
        palette::TRUNK,
    ));
    shapes.push(Shape::Rect(
        Rect::new(trunk_x, trunk_y, 8.0 * scale, trunk_h),
        palette::TRUNK_DARK,
    ));

    let mid_x = base.x + base_width / 2.0;
    for i in 0..TREE_LAYERS {
        let lift = i as f32 * 30.0 * scale;
        // Each layer is narrower than the one below it
        let width = base_width - i as f32 * 15.0 * scale;
        let left = base.x + (base_width - width) / 2.0;
        let bottom = base.y - 20.0 * scale - lift;
        let apex = base.y - 50.0 * scale - lift;

        shapes.push(Shape::Polygon(
            vec![
                Vec2::new(left, bottom),
                Vec2::new(left + width, bottom),
                Vec2::new(mid_x, apex),
            ],
            palette::TREE,
        ));
        // Shaded left half for depth
        shapes.push(Shape::Polygon(
            vec![
                Vec2::new(left, bottom),
                Vec2::new(mid_x, bottom),
                Vec2::new(mid_x, apex),
            ],
            palette::TREE_DARK,
        ));
    }

    shapes
}

/// Three overlapping puffs making up an elongated cloud
pub fn cloud(cloud: &Cloud) -> [Shape; 3] {
    let Vec2 { x, y } = cloud.pos;
    let Vec2 { x: w, y: h } = cloud.size;
    [
        Shape::Ellipse(Rect::new(x, y, w, h), palette::CLOUD),
        Shape::Ellipse(
            Rect::new(x - w * 0.2, y + h * 0.3, w * 0.8, h * 0.5),
            palette::CLOUD,
        ),
        Shape::Ellipse(
            Rect::new(x + w * 0.1, y + h * 0.4, w * 0.8, h * 0.4),
            palette::CLOUD,
        ),
    ]
}

/// Top-down car drawn from rectangles, facing up
pub fn car(body: Rect, color: Rgba) -> Vec<Shape> {
    let tire_w = body.w * 0.15;
    let tire_h = body.h * 0.2;
    let glass_inset = body.w * 0.15;

    let mut shapes = Vec::with_capacity(7);
    for (tx, ty) in [
        (body.x - tire_w / 2.0, body.y + body.h * 0.12),
        (body.right() - tire_w / 2.0, body.y + body.h * 0.12),
        (body.x - tire_w / 2.0, body.bottom() - body.h * 0.12 - tire_h),
        (body.right() - tire_w / 2.0, body.bottom() - body.h * 0.12 - tire_h),
    ] {
        shapes.push(Shape::Rect(Rect::new(tx, ty, tire_w, tire_h), palette::TIRE));
    }
    shapes.push(Shape::Rect(body, color));
    // Windscreen and rear window
    shapes.push(Shape::Rect(
        Rect::new(
            body.x + glass_inset,
            body.y + body.h * 0.22,
            body.w - glass_inset * 2.0,
            body.h * 0.16,
        ),
        palette::WINDOW,
    ));
    shapes.push(Shape::Rect(
        Rect::new(
            body.x + glass_inset,
            body.y + body.h * 0.70,
            body.w - glass_inset * 2.0,
            body.h * 0.10,
        ),
        palette::WINDOW,
    ));
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygons(shapes: &[Shape]) -> Vec<&Vec<Vec2>> {
        shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Polygon(points, _) => Some(points),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_tree_layers_narrow_upward() {
        let shapes = tree(Vec2::new(100.0, 300.0), 1.0);
        let polys = polygons(&shapes);
        assert_eq!(polys.len(), TREE_LAYERS * 2);

        // Main triangles are at even positions
        let widths: Vec<f32> = polys.iter().step_by(2).map(|p| p[1].x - p[0].x).collect();
        assert_eq!(widths, vec![80.0, 65.0, 50.0, 35.0]);

        let apexes: Vec<f32> = polys.iter().step_by(2).map(|p| p[2].y).collect();
        assert_eq!(apexes, vec![250.0, 220.0, 190.0, 160.0]);
        for p in polys {
            assert_eq!(p.len(), 3);
        }
    }

    #[test]
    fn test_tree_scales() {
        let shapes = tree(Vec2::ZERO, 0.5);
        match &shapes[0] {
            Shape::Rect(trunk, _) => {
                assert_eq!(*trunk, Rect::new(4.0, -5.0, 12.0, 30.0));
            }
            other => panic!("expected trunk rect, got {other:?}"),
        }
    }

    #[test]
    fn test_car_body_drawn_over_tires() {
        let body = Rect::new(0.0, 0.0, 60.0, 99.0);
        let shapes = car(body, palette::NPC_BODY);
        let body_index = shapes
            .iter()
            .position(|s| *s == Shape::Rect(body, palette::NPC_BODY))
            .unwrap();
        assert_eq!(body_index, 4);
        assert_eq!(shapes.len(), 7);
    }
}
