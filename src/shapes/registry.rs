//! Shape registry and factory functions.

use super::{
    CircleShape, ClassicShape, CloverShape, DiamondShape, GlyphLayout, GlyphShape, HeartShape,
    HexagonShape, KamuroShape, Shape, ShapeProfile, ShapeType, StarShape,
};

/// Create a shape instance from type.
pub fn create_shape(shape_type: ShapeType) -> Box<dyn Shape> {
    match shape_type {
        ShapeType::Classic => Box::new(ClassicShape),
        ShapeType::Circle => Box::new(CircleShape),
        ShapeType::Kamuro => Box::new(KamuroShape),
        ShapeType::Heart => Box::new(HeartShape),
        ShapeType::Star => Box::new(StarShape),
        ShapeType::Clover => Box::new(CloverShape),
        ShapeType::Diamond => Box::new(DiamondShape),
        ShapeType::Hexagon => Box::new(HexagonShape),
        ShapeType::Glyph => Box::new(GlyphShape::new(
            shape_profile(ShapeType::Glyph)
                .glyph
                .unwrap_or(GlyphLayout { rows: 3, row_spacing: 3.0 }),
        )),
    }
}

/// Static physics/layout constants for a shape family.
///
/// These are consolidated tuning defaults; each entry keeps count > 0 and
/// gravity >= 0.
pub fn shape_profile(shape_type: ShapeType) -> ShapeProfile {
    match shape_type {
        ShapeType::Classic => ShapeProfile {
            count: 80,
            gravity: 0.055,
            friction: 0.98,
            expand: 1.0,
            trail_capacity: 5,
            glyph: None,
        },
        ShapeType::Circle => ShapeProfile {
            count: 72,
            gravity: 0.05,
            friction: 0.98,
            expand: 1.0,
            trail_capacity: 5,
            glyph: None,
        },
        ShapeType::Kamuro => ShapeProfile {
            count: 64,
            gravity: 0.035,
            friction: 0.945,
            expand: 0.9,
            trail_capacity: 8,
            glyph: None,
        },
        ShapeType::Heart => ShapeProfile {
            count: 90,
            gravity: 0.045,
            friction: 0.975,
            expand: 1.0,
            trail_capacity: 4,
            glyph: None,
        },
        ShapeType::Star => ShapeProfile {
            count: 100,
            gravity: 0.045,
            friction: 0.975,
            expand: 1.0,
            trail_capacity: 4,
            glyph: None,
        },
        ShapeType::Clover => ShapeProfile {
            count: 84,
            gravity: 0.045,
            friction: 0.975,
            expand: 1.0,
            trail_capacity: 4,
            glyph: None,
        },
        ShapeType::Diamond => ShapeProfile {
            count: 72,
            gravity: 0.045,
            friction: 0.975,
            expand: 1.0,
            trail_capacity: 4,
            glyph: None,
        },
        ShapeType::Hexagon => ShapeProfile {
            count: 96,
            gravity: 0.045,
            friction: 0.975,
            expand: 1.0,
            trail_capacity: 4,
            glyph: None,
        },
        ShapeType::Glyph => ShapeProfile {
            count: 120,
            gravity: 0.02,
            friction: 0.99,
            expand: 1.0,
            trail_capacity: 2,
            glyph: Some(GlyphLayout {
                rows: 3,
                row_spacing: 3.0,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_shape_returns_correct_type() {
        for shape_type in ShapeType::all() {
            let shape = create_shape(*shape_type);
            assert_eq!(shape.shape_type(), *shape_type);
        }
    }

    #[test]
    fn test_only_glyph_carries_layout() {
        for shape_type in ShapeType::all() {
            let profile = shape_profile(*shape_type);
            assert_eq!(profile.glyph.is_some(), *shape_type == ShapeType::Glyph);
        }
    }
}
