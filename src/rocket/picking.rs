//! Pointer to world-space target mapping

use bevy::math::Ray3d;
use bevy::prelude::*;

/// Convert a viewport pixel position to normalized device coordinates.
///
/// X runs -1 (left) to 1 (right), Y runs -1 (bottom) to 1 (top).
/// Returns `None` for a zero-sized viewport.
pub fn pointer_to_ndc(cursor: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        cursor.x / viewport.x * 2.0 - 1.0,
        -(cursor.y / viewport.y) * 2.0 + 1.0,
    ))
}

/// Build a world-space ray from the camera position through an NDC point
pub fn ray_through_ndc(ndc: Vec2, clip_from_view: Mat4, world_from_view: Mat4) -> Option<Ray3d> {
    let view_from_clip = clip_from_view.inverse();
    // Any depth strictly inside the frustum works; only the direction is kept.
    let view_point = view_from_clip.project_point3(ndc.extend(0.5));
    let origin = world_from_view.transform_point3(Vec3::ZERO);
    let through = world_from_view.transform_point3(view_point);
    let direction = Dir3::new(through - origin).ok()?;
    Some(Ray3d::new(origin, direction))
}

/// The point `distance` units along the pick ray through `ndc`
pub fn click_target(
    ndc: Vec2,
    clip_from_view: Mat4,
    world_from_view: Mat4,
    distance: f32,
) -> Option<Vec3> {
    ray_through_ndc(ndc, clip_from_view, world_from_view).map(|ray| ray.get_point(distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn projection(aspect: f32) -> Mat4 {
        Mat4::perspective_infinite_reverse_rh(FRAC_PI_2, aspect, 0.1)
    }

    fn world_from_view(camera: &Transform) -> Mat4 {
        Mat4::from_scale_rotation_translation(camera.scale, camera.rotation, camera.translation)
    }

    #[test]
    fn test_ndc_corners_and_center() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(pointer_to_ndc(Vec2::new(400.0, 300.0), viewport), Some(Vec2::ZERO));
        assert_eq!(pointer_to_ndc(Vec2::ZERO, viewport), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(pointer_to_ndc(viewport, viewport), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(pointer_to_ndc(Vec2::ZERO, Vec2::new(0.0, 600.0)), None);
    }

    #[test]
    fn test_center_click_lands_straight_ahead() {
        let target = click_target(Vec2::ZERO, projection(1.0), Mat4::IDENTITY, 20.0).unwrap();
        assert!((target - Vec3::new(0.0, 0.0, -20.0)).length() < 1e-4);
    }

    #[test]
    fn test_edge_click_follows_field_of_view() {
        // 90 degree fov with square aspect: the right edge is 45 degrees off axis.
        let target =
            click_target(Vec2::new(1.0, 0.0), projection(1.0), Mat4::IDENTITY, 20.0).unwrap();
        let expected = Vec3::new(1.0, 0.0, -1.0).normalize() * 20.0;
        assert!((target - expected).length() < 1e-3);
    }

    #[test]
    fn test_target_is_fixed_distance_from_camera() {
        let camera = Transform::from_xyz(0.0, 5.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y);
        let camera_matrix = world_from_view(&camera);
        let clip_from_view = projection(16.0 / 9.0);

        for ndc in [
            Vec2::ZERO,
            Vec2::new(0.3, -0.7),
            Vec2::new(-1.0, 1.0),
            Vec2::new(0.9, 0.9),
        ] {
            let ray = ray_through_ndc(ndc, clip_from_view, camera_matrix).unwrap();
            assert!((ray.origin - camera.translation).length() < 1e-4);
            let target = click_target(ndc, clip_from_view, camera_matrix, 20.0).unwrap();
            assert!((target.distance(camera.translation) - 20.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let camera = Transform::from_xyz(3.0, 1.0, -4.0).looking_at(Vec3::Y, Vec3::Y);
        let ndc = pointer_to_ndc(Vec2::new(123.0, 456.0), Vec2::new(1280.0, 720.0)).unwrap();
        let a = click_target(ndc, projection(1.6), world_from_view(&camera), 20.0);
        let b = click_target(ndc, projection(1.6), world_from_view(&camera), 20.0);
        assert_eq!(a, b);
    }
}
