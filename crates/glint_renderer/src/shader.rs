//! Recursive Whitted-style shading.
//!
//! Each hit is lit with the Phong model (ambient, diffuse, specular), the
//! diffuse and specular terms are dropped when a shadow ray towards the
//! light is blocked, and a mirror reflection ray is traced recursively and
//! weighted by the surface reflectivity.
//!
//! Recursion stops on whichever comes first: the accumulated reflectivity
//! (`fade`) dropping to `FADE_LIMIT`, or the bounce count passing the
//! reflection limit.

use glint_core::{Color, Material, Scene};
use glint_math::{Ray, Vec3};

use crate::renderer::clamp_01;

/// Reflections contributing less than this are not traced.
pub const FADE_LIMIT: f64 = 0.01;

/// Distance hit points are pushed along the surface normal before casting
/// shadow and reflection rays, so they do not re-hit the same surface.
pub const SELF_HIT_OFFSET: f64 = 1e-4;

/// Energy and depth budget threaded through the reflection recursion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    /// Product of the reflectivities along the path so far
    pub fade: f64,
    /// Number of reflections so far
    pub depth: u32,
}

impl Bounce {
    /// Budget for a ray leaving the camera.
    pub const PRIMARY: Bounce = Bounce { fade: 1.0, depth: 0 };

    /// Budget after reflecting off a surface with the given reflectivity.
    pub fn reflected(self, reflectivity: f64) -> Self {
        Self {
            fade: self.fade * reflectivity,
            depth: self.depth + 1,
        }
    }

    /// Whether a ray with this budget should still be traced.
    pub fn is_spent(&self, reflection_limit: u32) -> bool {
        self.fade <= FADE_LIMIT || self.depth > reflection_limit
    }
}

/// The three Phong terms for one shading point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongTerms {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl PhongTerms {
    pub fn total(&self) -> Color {
        self.ambient + self.diffuse + self.specular
    }
}

/// Compute the color seen along `ray`.
///
/// Returns black once the bounce budget is spent and the scene background
/// when nothing is hit. The result is clamped to `[0, 1]` per component.
pub fn ray_color(scene: &Scene, ray: &Ray, bounce: Bounce, reflection_limit: u32) -> Color {
    if bounce.is_spent(reflection_limit) {
        return Color::ZERO;
    }

    let Some(collision) = scene.cast_ray(ray) else {
        return scene.background_color;
    };

    let material = &collision.object.material;
    let normal = collision.normal();
    let position = collision.position + SELF_HIT_OFFSET * normal;

    let shadow = is_in_shadow(scene, position);
    let lighting = phong(scene, material, normal, -ray.direction(), shadow);

    let reflected_color = if material.is_reflective() {
        let reflected_ray = Ray::new(position, reflect(ray.direction(), normal));
        ray_color(
            scene,
            &reflected_ray,
            bounce.reflected(material.reflectivity),
            reflection_limit,
        )
    } else {
        Color::ZERO
    };

    let color = lighting.total() + material.reflectivity * reflected_color;
    Color::new(clamp_01(color.x), clamp_01(color.y), clamp_01(color.z))
}

/// Phong lighting at a surface point.
///
/// The ambient term is always present; a point in shadow gets no diffuse
/// or specular light.
pub fn phong(
    scene: &Scene,
    material: &Material,
    normal: Vec3,
    view_direction: Vec3,
    shadow: bool,
) -> PhongTerms {
    let ambient =
        material.ambient_coefficient * scene.ambient_light_color * material.diffuse_color;

    if shadow {
        return PhongTerms {
            ambient,
            diffuse: Color::ZERO,
            specular: Color::ZERO,
        };
    }

    let normal_dot_light = normal.dot(scene.light_direction);
    let light_reflection = 2.0 * normal * normal_dot_light - scene.light_direction;
    let view_dot_reflection = view_direction.dot(light_reflection);

    let diffuse = material.diffuse_coefficient
        * scene.light_color
        * material.diffuse_color
        * normal_dot_light.max(0.0);

    let specular = material.specular_coefficient
        * scene.light_color
        * material.specular_color
        * view_dot_reflection.max(0.0).powf(material.gloss_coefficient);

    PhongTerms {
        ambient,
        diffuse,
        specular,
    }
}

/// Whether anything blocks the path from `point` towards the light.
pub fn is_in_shadow(scene: &Scene, point: Vec3) -> bool {
    scene
        .cast_ray(&Ray::new(point, scene.light_direction))
        .is_some()
}

/// Mirror `direction` about `normal`.
#[inline]
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - 2.0 * normal * direction.dot(normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Camera, Object, Shape};

    fn lit_scene() -> Scene {
        Scene::new(
            Camera::default(),
            Vec3::Z,
            Color::ONE,
            Color::new(0.2, 0.2, 0.2),
            Color::new(0.1, 0.2, 0.3),
        )
    }

    fn sphere(center: Vec3, material: Material) -> Object {
        Object::new(Shape::sphere(center, 1.0).unwrap(), material)
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = lit_scene();
        let color = ray_color(&scene, &Ray::new(Vec3::ZERO, -Vec3::Z), Bounce::PRIMARY, 10);
        assert_eq!(color, scene.background_color);
    }

    #[test]
    fn test_spent_budget_is_black() {
        let scene = lit_scene();
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        let faded = Bounce { fade: FADE_LIMIT, depth: 0 };
        assert_eq!(ray_color(&scene, &ray, faded, 10), Color::ZERO);

        let too_deep = Bounce { fade: 1.0, depth: 4 };
        assert_eq!(ray_color(&scene, &ray, too_deep, 3), Color::ZERO);
        assert_ne!(ray_color(&scene, &ray, too_deep, 4), Color::ZERO);
    }

    #[test]
    fn test_bounce_budget() {
        let b = Bounce::PRIMARY.reflected(0.5).reflected(0.5);
        assert_eq!(b, Bounce { fade: 0.25, depth: 2 });
        assert!(!b.is_spent(2));
        assert!(b.is_spent(1));
        assert!(Bounce::PRIMARY.reflected(0.0).is_spent(10));
    }

    #[test]
    fn test_lit_sphere_facing_light() {
        // Camera looks down -Z at a sphere, light comes from +Z behind the camera
        let material = Material::new(Color::new(1.0, 0.5, 0.25)).with_coefficients(0.5, 0.5, 0.0);
        let scene = lit_scene().with_object(sphere(Vec3::new(0.0, 0.0, -5.0), material));

        let color = ray_color(&scene, &Ray::new(Vec3::ZERO, -Vec3::Z), Bounce::PRIMARY, 10);

        // ambient 0.5*0.2*diffuse + diffuse 0.5*1*diffuse*1
        let expected = Color::new(1.0, 0.5, 0.25) * 0.6;
        assert!((color - expected).length() < 1e-9, "{color}");
    }

    #[test]
    fn test_shadowed_point_keeps_only_ambient() {
        let material = Material::new(Color::ONE).with_coefficients(0.5, 1.0, 1.0);
        // Floor sphere at -Z; a blocker sits between it and the light at +Z
        let scene = lit_scene()
            .with_object(sphere(Vec3::new(0.0, 0.0, -5.0), material.clone()))
            .with_object(sphere(Vec3::new(3.0, 0.0, -1.0), Material::default()));

        let point = Vec3::new(3.0, 0.0, -6.0);
        assert!(is_in_shadow(&scene, point));

        let normal = Vec3::Z;
        let lit = phong(&scene, &material, normal, Vec3::Z, false);
        let shadowed = phong(&scene, &material, normal, Vec3::Z, true);

        assert_eq!(shadowed.diffuse, Color::ZERO);
        assert_eq!(shadowed.specular, Color::ZERO);
        assert_eq!(shadowed.ambient, lit.ambient);
        assert!(lit.diffuse.length() > 0.0);
        assert!(lit.specular.length() > 0.0);
    }

    /// Floor at y = -1 lit from straight above, viewed from the origin.
    fn floor_scene(blocked: bool) -> (Scene, Material) {
        let floor = Material::new(Color::new(1.0, 0.5, 0.25)).with_coefficients(0.5, 0.5, 0.0);
        let mut scene = Scene::new(
            Camera::default(),
            Vec3::Y,
            Color::ONE,
            Color::new(0.2, 0.2, 0.2),
            Color::ZERO,
        )
        .with_object(Object::new(Shape::plane(-Vec3::Y, Vec3::Y), floor.clone()));
        if blocked {
            // Above the hit point, out of the camera's line of sight
            scene.add(Object::new(
                Shape::sphere(Vec3::new(0.0, 1.0, -1.0), 0.5).unwrap(),
                Material::default(),
            ));
        }
        (scene, floor)
    }

    #[test]
    fn test_ray_color_in_shadow_is_ambient_only() {
        let ray = Ray::new(Vec3::ZERO, glint_math::normalized(Vec3::new(0.0, -1.0, -1.0)));

        let (scene, floor) = floor_scene(true);
        assert!(is_in_shadow(&scene, Vec3::new(0.0, -1.0 + SELF_HIT_OFFSET, -1.0)));
        let shadowed = ray_color(&scene, &ray, Bounce::PRIMARY, 10);
        let ambient = floor.ambient_coefficient * scene.ambient_light_color * floor.diffuse_color;
        assert_eq!(shadowed, ambient);

        let (scene, _) = floor_scene(false);
        let lit = ray_color(&scene, &ray, Bounce::PRIMARY, 10);
        assert!(lit.cmpgt(shadowed).all(), "{lit} vs {shadowed}");
    }

    #[test]
    fn test_unblocked_point_not_in_shadow() {
        let scene = lit_scene().with_object(sphere(Vec3::new(0.0, 0.0, -5.0), Material::default()));
        assert!(!is_in_shadow(&scene, Vec3::new(0.0, 0.0, -3.9)));
    }

    #[test]
    fn test_specular_highlight() {
        let material = Material::new(Color::ZERO)
            .with_coefficients(0.0, 0.0, 1.0)
            .with_specular(Color::ONE, 8.0);
        let scene = lit_scene();

        // Viewer aligned with the light reflection gets the full highlight
        let terms = phong(&scene, &material, Vec3::Z, Vec3::Z, false);
        assert_eq!(terms.specular, Color::ONE);

        // Viewer behind the surface gets none
        let terms = phong(&scene, &material, Vec3::Z, -Vec3::Z, false);
        assert_eq!(terms.specular, Color::ZERO);
    }

    #[test]
    fn test_zero_reflectivity_ignores_depth_limit() {
        let material = Material::new(Color::new(0.3, 0.6, 0.9)).with_coefficients(0.2, 0.7, 0.4);
        let scene = lit_scene()
            .with_object(sphere(Vec3::new(0.0, 0.0, -5.0), material))
            .with_object(sphere(Vec3::new(0.0, 3.0, -5.0), Material::default()));

        for direction in [-Vec3::Z, glint_math::normalized(Vec3::new(0.1, 0.2, -1.0))] {
            let ray = Ray::new(Vec3::ZERO, direction);
            let shallow = ray_color(&scene, &ray, Bounce::PRIMARY, 0);
            let deep = ray_color(&scene, &ray, Bounce::PRIMARY, 10);
            assert_eq!(shallow, deep);
        }
    }

    #[test]
    fn test_mirror_reflects_background_color() {
        // A perfect mirror with no lighting terms shows what it reflects
        let mirror = Material::new(Color::ZERO)
            .with_coefficients(0.0, 0.0, 0.0)
            .with_reflectivity(1.0);
        let scene = lit_scene().with_object(Object::new(
            Shape::plane(Vec3::new(0.0, 0.0, -2.0), Vec3::Z),
            mirror,
        ));

        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert_eq!(ray_color(&scene, &ray, Bounce::PRIMARY, 1), scene.background_color);

        // With no reflection budget the mirror is black
        assert_eq!(ray_color(&scene, &ray, Bounce::PRIMARY.reflected(1.0), 0), Color::ZERO);
    }

    #[test]
    fn test_reflect() {
        let d = glint_math::normalized(Vec3::new(1.0, -1.0, 0.0));
        let r = reflect(d, Vec3::Y);
        assert!((r - glint_math::normalized(Vec3::new(1.0, 1.0, 0.0))).length() < 1e-12);
    }
}
