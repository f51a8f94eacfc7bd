//! Interaction gate shared by every sketch.
use glam::Vec2;
use mint::Vector2;

/// Returns true when `position` lies strictly inside `(0, extent.x) x (0, extent.y)`.
///
/// Pointer releases on the surface edge or outside of it are not interactions.
#[inline]
pub fn inside_surface(position: impl Into<Vector2<f32>>, extent: impl Into<Vector2<f32>>) -> bool {
    let p = Vec2::from(position.into());
    let e = Vec2::from(extent.into());
    p.x > 0.0 && p.x < e.x && p.y > 0.0 && p.y < e.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strict_interior() {
        let extent = Vec2::new(100.0, 100.0);
        assert!(inside_surface(Vec2::new(50.0, 50.0), extent));
        assert!(inside_surface(Vec2::new(0.5, 99.5), extent));
    }

    #[test]
    fn rejects_edges_and_outside() {
        let extent = Vec2::new(100.0, 80.0);
        for p in [
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(100.0, 10.0),
            Vec2::new(10.0, 80.0),
            Vec2::new(-1.0, 10.0),
            Vec2::new(10.0, 120.0),
        ] {
            assert!(!inside_surface(p, extent), "{p:?} should be rejected");
        }
    }

    #[test]
    fn empty_surface_has_no_interior() {
        assert!(!inside_surface(Vec2::new(0.0, 0.0), Vec2::ZERO));
    }
}
