//! Raw scene file records, as deserialized before validation.
//!
//! Every field is optional so the loader can tell "missing" apart from
//! "invalid" and report defaults the way the scene author expects.

use serde::Deserialize;

/// Three numbers: a position, direction or color.
pub type Triple = [f64; 3];

/// Top-level scene file.
#[derive(Debug, Default, Deserialize)]
pub struct SceneFile {
    pub camera_look_at: Option<Triple>,
    pub camera_look_from: Option<Triple>,
    pub camera_look_up: Option<Triple>,
    pub field_of_view: Option<f64>,

    pub light_direction: Option<Triple>,
    pub light_color: Option<Triple>,
    pub ambient_light_color: Option<Triple>,
    pub background_color: Option<Triple>,

    pub objects: Option<Vec<ObjectRecord>>,
}

/// One entry of the `objects` list.
///
/// Shape keys that do not apply to `kind` are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ObjectRecord {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,

    // Shape parameters
    pub center: Option<Triple>,
    pub radius: Option<f64>,
    pub normal: Option<Triple>,
    pub point: Option<Triple>,
    pub vertices: Option<Vec<Triple>>,

    // Material
    pub ambient_coefficient: Option<f64>,
    pub diffuse_coefficient: Option<f64>,
    pub specular_coefficient: Option<f64>,
    pub diffuse_color: Option<Triple>,
    pub specular_color: Option<Triple>,
    pub gloss_coefficient: Option<f64>,
    pub reflectivity: Option<f64>,
}
