//! Surface properties shared by every object.

use glint_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Phong material with a mirror reflection term.
///
/// Coefficients are unitless scalars. They are usually in `[0, 1]` but are
/// not clamped; the shader clamps the final color instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Optional name from the scene file
    pub name: Option<String>,

    /// Weight of the ambient term
    pub ambient_coefficient: f64,

    /// Weight of the Lambertian term
    pub diffuse_coefficient: f64,

    /// Weight of the specular highlight
    pub specular_coefficient: f64,

    /// Surface color (RGB, 0-1), also tints the ambient term
    pub diffuse_color: Color,

    /// Highlight color (RGB, 0-1)
    pub specular_color: Color,

    /// Phong exponent, higher is a tighter highlight
    pub gloss_coefficient: f64,

    /// Mirror reflection factor (0=opaque, 1=perfect mirror)
    pub reflectivity: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: None,
            ambient_coefficient: 0.0,
            diffuse_coefficient: 1.0,
            specular_coefficient: 0.0,
            diffuse_color: Color::ONE,
            specular_color: Color::ONE,
            gloss_coefficient: 4.0,
            reflectivity: 0.0,
        }
    }
}

impl Material {
    /// Create a material with the given diffuse color and default weights.
    pub fn new(diffuse_color: Color) -> Self {
        Self {
            diffuse_color,
            ..Default::default()
        }
    }

    /// Set the material name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the ambient, diffuse and specular weights.
    pub fn with_coefficients(mut self, ambient: f64, diffuse: f64, specular: f64) -> Self {
        self.ambient_coefficient = ambient;
        self.diffuse_coefficient = diffuse;
        self.specular_coefficient = specular;
        self
    }

    /// Set the specular color and gloss exponent.
    pub fn with_specular(mut self, color: Color, gloss: f64) -> Self {
        self.specular_color = color;
        self.gloss_coefficient = gloss;
        self
    }

    /// Set the reflectivity.
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Check if this material contributes a reflection term.
    pub fn is_reflective(&self) -> bool {
        self.reflectivity != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_defaults() {
        let m = Material::default();
        assert_eq!(m.name, None);
        assert_eq!(m.ambient_coefficient, 0.0);
        assert_eq!(m.diffuse_coefficient, 1.0);
        assert_eq!(m.specular_coefficient, 0.0);
        assert_eq!(m.diffuse_color, Color::ONE);
        assert_eq!(m.gloss_coefficient, 4.0);
        assert!(!m.is_reflective());
    }

    #[test]
    fn test_material_builders() {
        let m = Material::new(Color::new(1.0, 0.0, 0.0))
            .with_name("red")
            .with_coefficients(0.1, 0.8, 0.3)
            .with_specular(Color::ONE, 16.0)
            .with_reflectivity(0.5);

        assert_eq!(m.name.as_deref(), Some("red"));
        assert_eq!(m.diffuse_color, Color::new(1.0, 0.0, 0.0));
        assert_eq!(m.specular_coefficient, 0.3);
        assert_eq!(m.gloss_coefficient, 16.0);
        assert!(m.is_reflective());
    }
}
