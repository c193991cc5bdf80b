use serde::{Deserialize, Serialize};

use crate::core::SandboxError;
use crate::domain::materials::{Material, MaterialId, MaterialProps, MATERIAL_COUNT, MATERIAL_DATA};

/// Runtime material table: built-in defaults, optionally overridden by a
/// JSON content bundle.
#[derive(Clone, Debug)]
pub struct MaterialTable {
    props: [MaterialProps; MATERIAL_COUNT],
}

impl MaterialTable {
    pub fn from_generated() -> Self {
        Self { props: MATERIAL_DATA }
    }

    /// Parse a bundle and apply it on top of the built-in defaults.
    ///
    /// ```json
    /// { "materials": [ { "key": "base:sand", "mass": 2.0, "color": 4286630118 } ] }
    /// ```
    pub fn from_bundle_json(json: &str) -> Result<Self, SandboxError> {
        let bundle: BundleRoot =
            serde_json::from_str(json).map_err(|e| SandboxError::Content(e.to_string()))?;
        Self::from_bundle(bundle)
    }

    pub fn material_count(&self) -> usize {
        self.props.len()
    }

    #[inline]
    pub fn props(&self, material: Material) -> &MaterialProps {
        &self.props[material.index()]
    }

    pub fn id_by_key(&self, key: &str) -> Option<MaterialId> {
        Material::from_key(key).map(Material::id)
    }

    pub fn manifest_json(&self) -> String {
        let materials: Vec<ManifestMaterial> = Material::ALL
            .iter()
            .map(|&m| {
                let props = self.props(m);
                ManifestMaterial {
                    id: m.id(),
                    key: m.key(),
                    name: m.name(),
                    color: props.color,
                    fluid: props.fluid,
                    radius: props.radius,
                }
            })
            .collect();
        let out = Manifest {
            format_version: 1,
            materials,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self, SandboxError> {
        let mut props = MATERIAL_DATA;
        let mut seen = [false; MATERIAL_COUNT];

        for entry in bundle.materials.into_iter() {
            let material = Material::from_key(&entry.key)
                .ok_or_else(|| SandboxError::Content(format!("unknown material key: {}", entry.key)))?;
            let idx = material.index();
            if seen[idx] {
                return Err(SandboxError::Content(format!("duplicate material key: {}", entry.key)));
            }
            seen[idx] = true;

            let p = &mut props[idx];
            if let Some(v) = entry.radius {
                if !(v.is_finite() && v > 0.0) {
                    return Err(SandboxError::Content(format!("{}: radius must be positive", entry.key)));
                }
                p.radius = v;
            }
            if let Some(v) = entry.mass {
                if !(v.is_finite() && v > 0.0) {
                    return Err(SandboxError::Content(format!("{}: mass must be positive", entry.key)));
                }
                p.mass = v;
            }
            if let Some(v) = entry.friction {
                if !(0.0..=1.0).contains(&v) {
                    return Err(SandboxError::Content(format!("{}: friction must be in [0, 1]", entry.key)));
                }
                p.friction = v;
            }
            if let Some(v) = entry.bounce {
                p.bounce = v;
            }
            if let Some(v) = entry.fluid {
                p.fluid = v;
            }
            if let Some(v) = entry.lifespan {
                p.lifespan = v;
            }
            if let Some(v) = entry.color {
                p.color = v;
            }
            if let Some(v) = entry.gravity_scale {
                p.gravity_scale = v;
            }
            if let Some(v) = entry.vents {
                p.vents = v;
            }
            if let Some(v) = entry.pins_on_floor {
                p.pins_on_floor = v;
            }
        }

        Ok(Self { props })
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self::from_generated()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    format_version: u32,
    materials: Vec<ManifestMaterial>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestMaterial {
    id: MaterialId,
    key: &'static str,
    name: &'static str,
    color: u32,
    fluid: bool,
    radius: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    materials: Vec<BundleMaterial>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleMaterial {
    key: String,
    #[serde(default)]
    radius: Option<f32>,
    #[serde(default)]
    mass: Option<f32>,
    #[serde(default)]
    friction: Option<f32>,
    #[serde(default)]
    bounce: Option<f32>,
    #[serde(default)]
    fluid: Option<bool>,
    #[serde(default)]
    lifespan: Option<i32>,
    #[serde(default)]
    color: Option<u32>,
    #[serde(default)]
    gravity_scale: Option<f32>,
    #[serde(default)]
    vents: Option<bool>,
    #[serde(default)]
    pins_on_floor: Option<bool>,
}
