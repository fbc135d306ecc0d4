//! Scene file loader.
//!
//! Turns a deserialized `SceneFile` into a validated `Scene`. Errors carry
//! the dotted path of the offending value, e.g.
//! `Scene.objects[2]<Sphere>.radius`.

use std::fmt::Debug;
use std::path::Path;

use glint_math::{magnitude, normalized, Vec3};
use log::warn;
use thiserror::Error;

use crate::camera::Camera;
use crate::geometry::{GeometryError, Shape};
use crate::import::types::{ObjectRecord, SceneFile, Triple};
use crate::material::{Color, Material};
use crate::object::Object;
use crate::scene::Scene;

/// Errors that can occur while importing a scene file.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path} {message}")]
    Invalid { path: String, message: String },

    #[error("{path}: {source}")]
    Geometry {
        path: String,
        #[source]
        source: GeometryError,
    },
}

impl ImportError {
    fn invalid(path: &str, message: impl Into<String>) -> Self {
        ImportError::Invalid {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

pub type ImportResult<T> = Result<T, ImportError>;

/// Largest accepted field of view, in degrees.
pub const MAX_FIELD_OF_VIEW: f64 = 359.0;

/// Load a scene from a JSON file on disk.
pub fn load_scene<P: AsRef<Path>>(path: P) -> ImportResult<Scene> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let scene = load_scene_from_str(&contents)?;
    log::info!(
        "Imported {} objects from {}",
        scene.object_count(),
        path.display()
    );
    Ok(scene)
}

/// Load a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> ImportResult<Scene> {
    let file: SceneFile = serde_json::from_str(json)?;
    build_scene(file)
}

/// Validate a deserialized scene file and build the scene.
pub fn build_scene(file: SceneFile) -> ImportResult<Scene> {
    let prefix = "Scene";

    // Camera
    let look_at = position_or(file.camera_look_at, [0.0, 0.0, 0.0], &format!("{prefix}.camera_look_at"));
    let look_from = position_or(file.camera_look_from, [0.0, 0.0, 1.0], &format!("{prefix}.camera_look_from"));
    let look_up = direction(
        or_default(file.camera_look_up, [0.0, 1.0, 0.0], &format!("{prefix}.camera_look_up")),
        &format!("{prefix}.camera_look_up"),
    );
    let fov_path = format!("{prefix}.field_of_view");
    let field_of_view = ranged(
        or_default(file.field_of_view, 90.0, &fov_path),
        Some(0.0),
        Some(MAX_FIELD_OF_VIEW),
        &fov_path,
    )?;

    let camera = Camera::new(look_at, look_from, look_up, field_of_view);
    if camera.forward.dot(camera.up).abs() > 1e-6 {
        warn!("{prefix}.camera_look_up is not perpendicular to the viewing direction");
    }

    // Lighting
    let light_direction = direction(
        or_default(file.light_direction, [0.0, 1.0, 0.0], &format!("{prefix}.light_direction")),
        &format!("{prefix}.light_direction"),
    );
    let light_color = color_or(file.light_color, [1.0, 1.0, 1.0], &format!("{prefix}.light_color"))?;
    let ambient_light_color = color_or(
        file.ambient_light_color,
        [1.0, 1.0, 1.0],
        &format!("{prefix}.ambient_light_color"),
    )?;
    let background_color = color_or(file.background_color, [0.0, 0.0, 0.0], &format!("{prefix}.background_color"))?;

    let mut scene = Scene::new(camera, light_direction, light_color, ambient_light_color, background_color);

    // Objects
    let objects_path = format!("{prefix}.objects");
    let records = file.objects.unwrap_or_else(|| {
        warn!("{objects_path} is missing, reverting to default value []");
        Vec::new()
    });
    for (index, record) in records.into_iter().enumerate() {
        let object = build_object(record, &format!("{objects_path}[{index}]"))?;
        scene.add(object);
    }

    Ok(scene)
}

fn build_object(record: ObjectRecord, prefix: &str) -> ImportResult<Object> {
    let kind = required(record.kind.clone(), &format!("{prefix}.type"))?.to_lowercase();

    let (shape, prefix) = match kind.as_str() {
        "circle" => {
            let prefix = format!("{prefix}<Circle>");
            (build_circle(&record, &prefix)?, prefix)
        }
        "plane" => {
            let prefix = format!("{prefix}<Plane>");
            (build_plane(&record, &prefix)?, prefix)
        }
        "polygon" => {
            let prefix = format!("{prefix}<Polygon>");
            (build_polygon(&record, &prefix)?, prefix)
        }
        "sphere" => {
            let prefix = format!("{prefix}<Sphere>");
            (build_sphere(&record, &prefix)?, prefix)
        }
        "triangle" => {
            let prefix = format!("{prefix}<Triangle>");
            (build_triangle(&record, &prefix)?, prefix)
        }
        other => {
            return Err(ImportError::invalid(
                &format!("{prefix}.type"),
                format!("must be a valid object type, not {other:?}"),
            ))
        }
    };

    let material = build_material(record, &prefix)?;
    Ok(Object::new(shape, material))
}

fn build_material(record: ObjectRecord, prefix: &str) -> ImportResult<Material> {
    let defaults = Material::default();
    let number = |value: Option<f64>, default: f64, key: &str| {
        or_default(value, default, &format!("{prefix}.{key}"))
    };

    Ok(Material {
        name: record.name,
        ambient_coefficient: number(record.ambient_coefficient, defaults.ambient_coefficient, "ambient_coefficient"),
        diffuse_coefficient: number(record.diffuse_coefficient, defaults.diffuse_coefficient, "diffuse_coefficient"),
        specular_coefficient: number(record.specular_coefficient, defaults.specular_coefficient, "specular_coefficient"),
        diffuse_color: color_or(record.diffuse_color, defaults.diffuse_color.to_array(), &format!("{prefix}.diffuse_color"))?,
        specular_color: color_or(record.specular_color, defaults.specular_color.to_array(), &format!("{prefix}.specular_color"))?,
        gloss_coefficient: ranged(
            number(record.gloss_coefficient, defaults.gloss_coefficient, "gloss_coefficient"),
            Some(0.0),
            None,
            &format!("{prefix}.gloss_coefficient"),
        )?,
        reflectivity: number(record.reflectivity, defaults.reflectivity, "reflectivity"),
    })
}

fn build_circle(record: &ObjectRecord, prefix: &str) -> ImportResult<Shape> {
    let center = position_or(record.center, [0.0, 0.0, 0.0], &format!("{prefix}.center"));
    let radius_path = format!("{prefix}.radius");
    let radius = required(record.radius, &radius_path)?;
    let normal = direction(
        or_default(record.normal, [0.0, 0.0, 1.0], &format!("{prefix}.normal")),
        &format!("{prefix}.normal"),
    );
    Shape::circle(center, radius, normal).map_err(|source| geometry(&radius_path, source))
}

fn build_plane(record: &ObjectRecord, prefix: &str) -> ImportResult<Shape> {
    let normal_path = format!("{prefix}.normal");
    let normal = direction(required(record.normal, &normal_path)?, &normal_path);
    let point = position_or(record.point, [0.0, 0.0, 0.0], &format!("{prefix}.point"));
    Ok(Shape::plane(point, normal))
}

fn build_polygon(record: &ObjectRecord, prefix: &str) -> ImportResult<Shape> {
    let vertices_path = format!("{prefix}.vertices");
    let vertices = vertices(record, &vertices_path)?;
    if vertices.len() == 3 {
        warn!("{prefix} only has 3 vertices, automatically converting to Triangle");
    }
    Shape::polygon(vertices).map_err(|source| geometry(&vertices_path, source))
}

fn build_sphere(record: &ObjectRecord, prefix: &str) -> ImportResult<Shape> {
    let center = Vec3::from_array(required(record.center, &format!("{prefix}.center"))?);
    let radius_path = format!("{prefix}.radius");
    let radius = required(record.radius, &radius_path)?;
    Shape::sphere(center, radius).map_err(|source| geometry(&radius_path, source))
}

fn build_triangle(record: &ObjectRecord, prefix: &str) -> ImportResult<Shape> {
    let vertices_path = format!("{prefix}.vertices");
    let vertices = vertices(record, &vertices_path)?;
    Shape::triangle(vertices).map_err(|source| geometry(&vertices_path, source))
}

fn vertices(record: &ObjectRecord, path: &str) -> ImportResult<Vec<Vec3>> {
    let vertices = required(record.vertices.as_ref(), path)?;
    Ok(vertices.iter().copied().map(Vec3::from_array).collect())
}

fn geometry(path: &str, source: GeometryError) -> ImportError {
    ImportError::Geometry {
        path: path.to_string(),
        source,
    }
}

/// Use `value`, or warn and fall back to `default`.
fn or_default<T: Debug>(value: Option<T>, default: T, path: &str) -> T {
    value.unwrap_or_else(|| {
        warn!("{path} is missing, reverting to default value {default:?}");
        default
    })
}

fn required<T>(value: Option<T>, path: &str) -> ImportResult<T> {
    value.ok_or_else(|| ImportError::invalid(path, "must not be missing"))
}

fn ranged(value: f64, min: Option<f64>, max: Option<f64>, path: &str) -> ImportResult<f64> {
    if let Some(min) = min {
        if value < min {
            return Err(ImportError::invalid(
                path,
                format!("must be at least {min}, not {value}"),
            ));
        }
    }
    if let Some(max) = max {
        if value > max {
            return Err(ImportError::invalid(
                path,
                format!("must be at most {max}, not {value}"),
            ));
        }
    }
    Ok(value)
}

fn position_or(value: Option<Triple>, default: Triple, path: &str) -> Vec3 {
    Vec3::from_array(or_default(value, default, path))
}

/// Normalize a direction, warning when the file did not.
fn direction(value: Triple, path: &str) -> Vec3 {
    let vector = Vec3::from_array(value);
    let mag = magnitude(vector);
    if mag != 1.0 && mag != 0.0 {
        let unit = normalized(vector);
        warn!(
            "{path} is not normalized, auto-normalized to [{}, {}, {}]",
            unit.x, unit.y, unit.z
        );
        return unit;
    }
    vector
}

fn color_or(value: Option<Triple>, default: Triple, path: &str) -> ImportResult<Color> {
    let components = or_default(value, default, path);
    for component in components {
        ranged(component, Some(0.0), Some(1.0), &format!("{path} element"))?;
    }
    Ok(Color::from_array(components))
}
