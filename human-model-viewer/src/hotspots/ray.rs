use bevy::prelude::*;

/// Source of world-space rays for normalised device coordinates.
pub trait RayProjector {
    fn ndc_to_ray(&self, ndc: Vec2) -> Option<Ray3d>;
}

/// The active camera and its transform, captured once per frame.
#[derive(Clone)]
pub struct CameraView {
    camera: Camera,
    transform: GlobalTransform,
}

impl CameraView {
    pub fn from_camera(camera: &Camera, camera_transform: &GlobalTransform) -> Self {
        Self {
            camera: camera.clone(),
            transform: *camera_transform,
        }
    }
}

impl RayProjector for CameraView {
    fn ndc_to_ray(&self, ndc: Vec2) -> Option<Ray3d> {
        // Reverse-Z: the near plane sits at depth 1.
        let near = self.camera.ndc_to_world(&self.transform, ndc.extend(1.0))?;
        let far = self
            .camera
            .ndc_to_world(&self.transform, ndc.extend(f32::EPSILON))?;
        let direction = Dir3::new(far - near).ok()?;
        Some(Ray3d::new(near, direction))
    }
}

/// Maps a pointer position in logical pixels to NDC, flipping Y so +1 is the top edge.
pub fn pointer_to_ndc(pointer: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        pointer.x / viewport.x * 2.0 - 1.0,
        -(pointer.y / viewport.y) * 2.0 + 1.0,
    )
}

/// Builds the world ray under the pointer. Returns `None` for an empty viewport.
pub fn update_pointer(
    projector: &(impl RayProjector + ?Sized),
    pointer: Vec2,
    viewport: Vec2,
) -> Option<Ray3d> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    projector.ndc_to_ray(pointer_to_ndc(pointer, viewport))
}

pub fn ray_hits_obb(ray: Ray3d, xf: &GlobalTransform, size: Vec3) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(ray.origin);
    let d_local = inv.transform_vector3(ray.direction.as_vec3());
    let he = size * 0.5;
    ray_aabb_hit_t(o_local, d_local, -he, he)
}

// Slab-method ray–AABB intersection. Returns the entry distance, or the exit
// distance when the origin is inside the box.
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let direction = ray_direction[axis];

        if direction == 0.0 {
            // Parallel to this slab: only a hit if already between the planes.
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction;
        let (mut t0, mut t1) = ((min[axis] - origin) * inv, (max[axis] - origin) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn ndc_corners_flip_y() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(pointer_to_ndc(Vec2::ZERO, viewport), Vec2::new(-1.0, 1.0));
        assert_eq!(pointer_to_ndc(viewport, viewport), Vec2::new(1.0, -1.0));
        assert_eq!(pointer_to_ndc(Vec2::new(400.0, 300.0), viewport), Vec2::ZERO);
    }

    /// Straight rays along -Z through `(ndc.x, ndc.y)` in world space.
    struct Straight;

    impl RayProjector for Straight {
        fn ndc_to_ray(&self, ndc: Vec2) -> Option<Ray3d> {
            Some(Ray3d::new(ndc.extend(5.0), Dir3::NEG_Z))
        }
    }

    #[test]
    fn empty_viewport_yields_no_ray() {
        assert!(update_pointer(&Straight, Vec2::new(10.0, 10.0), Vec2::new(0.0, 600.0)).is_none());
        assert!(update_pointer(&Straight, Vec2::new(10.0, 10.0), Vec2::new(800.0, 0.0)).is_none());
    }

    #[test]
    fn pointer_ray_passes_through_ndc() {
        let viewport = Vec2::new(800.0, 600.0);

        let centre = update_pointer(&Straight, Vec2::new(400.0, 300.0), viewport).expect("ray");
        assert_eq!(centre.origin, Vec3::new(0.0, 0.0, 5.0));

        let top_right = update_pointer(&Straight, Vec2::new(600.0, 150.0), viewport).expect("ray");
        assert!(approx(top_right.origin.x, 0.5) && approx(top_right.origin.y, 0.5));
    }

    #[test]
    fn aabb_hit_miss_and_behind() {
        let min = Vec3::splat(-0.5);
        let max = Vec3::splat(0.5);

        let hit = ray_aabb_hit_t(Vec3::new(0.0, 0.0, 2.0), Vec3::NEG_Z, min, max);
        assert!(approx(hit.expect("hit"), 1.5));

        assert!(ray_aabb_hit_t(Vec3::new(2.0, 0.0, 2.0), Vec3::NEG_Z, min, max).is_none());
        assert!(ray_aabb_hit_t(Vec3::new(0.0, 0.0, 2.0), Vec3::Z, min, max).is_none());
    }

    #[test]
    fn origin_inside_box_reports_exit_distance() {
        let t = ray_aabb_hit_t(Vec3::ZERO, Vec3::X, Vec3::splat(-1.0), Vec3::splat(1.0));
        assert!(approx(t.expect("hit"), 1.0));
    }

    #[test]
    fn obb_follows_parent_rotation() {
        // A thin box rotated 90 degrees about Y becomes thin along X.
        let xf = GlobalTransform::from(
            Transform::from_xyz(0.0, 1.0, 0.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        );
        let size = Vec3::new(2.0, 0.2, 0.2);

        let along_z = Ray3d::new(Vec3::new(0.0, 1.0, 5.0), Dir3::NEG_Z);
        assert!(approx(ray_hits_obb(along_z, &xf, size).expect("hit"), 4.0));

        let offset_x = Ray3d::new(Vec3::new(0.5, 1.0, 5.0), Dir3::NEG_Z);
        assert!(ray_hits_obb(offset_x, &xf, size).is_none());
    }
}
