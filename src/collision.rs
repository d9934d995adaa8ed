/// Collision detection for the arena
///
/// Two tests cover everything the game needs:
///
/// - `aabb_intersect`: rectangle-vs-rectangle, used for hull overlap queries
/// - `circle_hits_rect`: circle-vs-rectangle by separating distances, used
///   for every bullet-vs-ship check
///
/// Entities expose their hull through the `Collidable` trait so the checks
/// in the main loop stay independent of the concrete ship types.
use sdl2::rect::Rect;

/// Trait for entities with an axis-aligned collision hull.
///
/// The returned `Rect` must match the entity's on-screen footprint.
pub trait Collidable {
    /// Axis-aligned bounding box of the entity's hull.
    fn bounds(&self) -> Rect;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect iff they overlap on both axes. Touching edges
/// do not count as an intersection (SDL2 rects have exclusive far edges).
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Checks if a circle overlaps an axis-aligned rectangle.
///
/// Separating-distance test against the rectangle's center: the circle
/// misses iff its center is farther from the rect center than
/// half-extent + radius on either axis. Slightly generous at the corners,
/// which is fine at bullet scale.
pub fn circle_hits_rect(cx: f32, cy: f32, radius: f32, rect: &Rect) -> bool {
    let half_w = rect.width() as f32 / 2.0;
    let half_h = rect.height() as f32 / 2.0;
    let center_x = rect.x() as f32 + half_w;
    let center_y = rect.y() as f32 + half_h;

    let dx = (cx - center_x).abs();
    let dy = (cy - center_y).abs();

    if dx > half_w + radius {
        return false;
    }
    if dy > half_h + radius {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(16, 16, 32, 32);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        // Touching at an edge is not an intersection
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(32, 0, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_separated() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(100, 100, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_circle_inside_rect() {
        let hull = Rect::new(100, 100, 50, 30);
        assert!(circle_hits_rect(125.0, 115.0, 5.0, &hull));
    }

    #[test]
    fn test_circle_grazing_rect_edge() {
        // Hull spans x 100..150; a circle at x=154 (r=5) still reaches it,
        // one at x=156 is just past the separating distance
        let hull = Rect::new(100, 100, 50, 30);
        assert!(circle_hits_rect(154.0, 115.0, 5.0, &hull));
        assert!(!circle_hits_rect(156.0, 115.0, 5.0, &hull));
    }

    #[test]
    fn test_circle_clear_miss() {
        let hull = Rect::new(100, 100, 50, 30);
        assert!(!circle_hits_rect(200.0, 115.0, 5.0, &hull));
        assert!(!circle_hits_rect(125.0, 300.0, 5.0, &hull));
    }

    #[test]
    fn test_circle_miss_on_one_axis_only() {
        // Aligned on x but far above on y
        let hull = Rect::new(100, 100, 50, 30);
        assert!(!circle_hits_rect(125.0, 80.0, 4.0, &hull));
        // Close enough on y to pass the separating distance
        assert!(circle_hits_rect(125.0, 97.0, 4.0, &hull));
    }
}
