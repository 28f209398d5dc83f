mod fields;

use std::{collections::HashMap, path::Path};

use colour::{Colour, Material, Pattern, PatternKind, PointLight};
use geometry::{Float, GeometryError, Point3, Transform, Vector3};
use log::{debug, info, warn};
use scene::{Camera, World};
use serde::Deserialize;
use serde_yaml::Value;
use shapes::{CsgOperation, Shape, ShapeArena, ShapeError, ShapeId};
use thiserror::Error;

use self::fields::{arguments, boolean, number, optional_number, point, required, string, triple};

/// Errors encountered while loading a scene description
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("unable to read scene file {path}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid scene description: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown {context} `{keyword}`")]
    UnknownKeyword {
        context: &'static str,
        keyword: String,
    },

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("`{0}` has not been defined")]
    Undefined(String),

    #[error("scene has no camera")]
    MissingCamera,

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Read a yaml scene description from disk
pub fn load_scene(path: impl AsRef<Path>) -> Result<(World, Camera), SceneError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_scene(&source)
}

/// Build a world and camera from a yaml scene description
pub fn parse_scene(source: &str) -> Result<(World, Camera), SceneError> {
    let document: Value = serde_yaml::from_str(source)?;
    let items = document.as_sequence().ok_or_else(|| SceneError::InvalidField {
        field: "document".to_string(),
        reason: "expected a list of items".to_string(),
    })?;

    let mut loader = SceneLoader::default();
    loader.process_definitions(items)?;
    let (world, camera) = loader.parse_items(items)?;

    info!(
        "Loaded scene with {} shapes and {} lights",
        world.arena.len(),
        world.lights.len()
    );

    Ok((world, camera))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct CameraItem {
    width: usize,
    height: usize,
    field_of_view: Float,
    from: [Float; 3],
    to: [Float; 3],
    up: [Float; 3],
}

#[derive(Debug, Deserialize)]
struct LightItem {
    at: [Float; 3],
    intensity: [Float; 3],
}

/// Named values from `define` items, copied each time they are used
#[derive(Debug, Default)]
struct SceneLoader {
    colours: HashMap<String, Colour>,
    materials: HashMap<String, Material>,
    patterns: HashMap<String, Pattern>,
    transforms: HashMap<String, Transform>,
}

impl SceneLoader {
    fn process_definitions(&mut self, items: &[Value]) -> Result<(), SceneError> {
        for item in items {
            let name = match item.get("define") {
                Some(name) => string(name, "define")?,
                None => continue,
            };
            let value = item.get("value");

            if name.ends_with("-color") {
                let colour = self.parse_colour(value.ok_or(SceneError::MissingField("value"))?)?;
                self.colours.insert(name.to_string(), colour);
            } else if name.ends_with("-material") {
                let material = self.parse_material(item)?;
                self.materials.insert(name.to_string(), material);
            } else if name.ends_with("-pattern") {
                let pattern = self.parse_pattern(value.unwrap_or(item))?;
                self.patterns.insert(name.to_string(), pattern);
            } else if name.ends_with("-transform") || name.ends_with("-object") {
                let transform = self.parse_transform(value)?;
                self.transforms.insert(name.to_string(), transform);
            } else {
                warn!("Ignoring definition of unknown kind `{}`", name);
                continue;
            }

            debug!("Defined {}", name);
        }

        Ok(())
    }

    fn parse_items(&self, items: &[Value]) -> Result<(World, Camera), SceneError> {
        let mut world = World::new();
        let mut camera = None;

        for item in items {
            let kind = match item.get("add") {
                Some(kind) => string(kind, "add")?,
                None => continue,
            };

            match kind {
                "camera" => {
                    let c: CameraItem = serde_yaml::from_value(item.clone())?;
                    let view = Transform::view(
                        Point3::from_array(c.from),
                        Point3::from_array(c.to),
                        Vector3::from_array(c.up),
                    )?;
                    camera = Some(
                        Camera::new(c.width, c.height, c.field_of_view).with_transform(view),
                    );
                }
                "light" => {
                    let l: LightItem = serde_yaml::from_value(item.clone())?;
                    let [r, g, b] = l.intensity;
                    let position = Point3::from_array(l.at);
                    let intensity = Colour::new(r, g, b);
                    world.lights.push(PointLight::new(position, intensity));
                }
                _ => {
                    let id = self.build_shape(item, &mut world.arena)?;
                    world.add_object(id);
                }
            }
        }

        camera
            .map(|camera| (world, camera))
            .ok_or(SceneError::MissingCamera)
    }

    /// Add a shape item, and any shapes nested inside it, to the arena
    fn build_shape(&self, item: &Value, arena: &mut ShapeArena) -> Result<ShapeId, SceneError> {
        let kind = string(required(item, "add")?, "add")?;

        let shape = match kind {
            "sphere" => Shape::sphere(),
            "plane" => Shape::plane(),
            "cube" => Shape::cube(),
            "cylinder" | "cone" => {
                let min = optional_number(item, "min")?.unwrap_or(-Float::INFINITY);
                let max = optional_number(item, "max")?.unwrap_or(Float::INFINITY);
                let closed = match item.get("closed") {
                    Some(v) => boolean(v, "closed")?,
                    None => false,
                };
                if kind == "cylinder" {
                    Shape::cylinder(min, max, closed)
                } else {
                    Shape::cone(min, max, closed)
                }
            }
            "triangle" => Shape::triangle(
                point(required(item, "p1")?, "p1")?,
                point(required(item, "p2")?, "p2")?,
                point(required(item, "p3")?, "p3")?,
            ),
            "group" => Shape::group(),
            "csg" => {
                let operation = match string(required(item, "operation")?, "operation")? {
                    "union" => CsgOperation::Union,
                    "intersection" => CsgOperation::Intersection,
                    "difference" => CsgOperation::Difference,
                    op => {
                        return Err(SceneError::UnknownKeyword {
                            context: "csg operation",
                            keyword: op.to_string(),
                        })
                    }
                };
                let left = self.build_shape(required(item, "left")?, arena)?;
                let right = self.build_shape(required(item, "right")?, arena)?;
                Shape::csg(operation, left, right)
            }
            _ => {
                return Err(SceneError::UnknownKeyword {
                    context: "shape",
                    keyword: kind.to_string(),
                })
            }
        };

        let material = match item.get("material") {
            Some(material) => self.parse_material(material)?,
            None => Material::default(),
        };
        let transform = self.parse_transform(item.get("transform"))?;
        let id = arena.add(shape.with_material(material).with_transform(transform))?;

        if kind == "group" {
            let children = match item.get("children") {
                Some(children) => children.as_sequence().ok_or_else(|| SceneError::InvalidField {
                    field: "children".to_string(),
                    reason: "expected a list of shapes".to_string(),
                })?,
                None => return Ok(id),
            };
            for child in children {
                let child = self.build_shape(child, arena)?;
                arena.add_child(id, child)?;
            }
        }

        Ok(id)
    }

    /// A literal `[r, g, b]` or the name of a defined colour
    fn parse_colour(&self, value: &Value) -> Result<Colour, SceneError> {
        match value.as_str() {
            Some(name) => lookup(&self.colours, name),
            None => {
                let [r, g, b] = triple(value, "color")?;
                Ok(Colour::new(r, g, b))
            }
        }
    }

    /// A material name, or a mapping of material fields that may `extend` a
    /// named material.  Fields can be given inline or under `value`.
    fn parse_material(&self, value: &Value) -> Result<Material, SceneError> {
        if let Some(name) = value.as_str() {
            return lookup(&self.materials, name);
        }

        let mut material = match value.get("extend") {
            Some(name) => lookup(&self.materials, string(name, "extend")?)?,
            None => Material::default(),
        };
        let fields = value.get("value").unwrap_or(value);

        if let Some(v) = fields.get("color") {
            material.colour = self.parse_colour(v)?;
        }
        let set = |field: &str, target: &mut Float| -> Result<(), SceneError> {
            if let Some(v) = fields.get(field) {
                *target = number(v, field)?;
            }
            Ok(())
        };
        set("ambient", &mut material.ambient)?;
        set("diffuse", &mut material.diffuse)?;
        set("specular", &mut material.specular)?;
        set("shininess", &mut material.shininess)?;
        set("reflective", &mut material.reflective)?;
        set("transparency", &mut material.transparency)?;
        set("refractive-index", &mut material.refractive_index)?;

        if let Some(v) = fields.get("casts-shadow") {
            material.casts_shadow = boolean(v, "casts-shadow")?;
        }
        if let Some(v) = fields.get("pattern") {
            material.pattern = Some(self.parse_pattern(v)?);
        }

        Ok(material)
    }

    fn parse_pattern(&self, value: &Value) -> Result<Pattern, SceneError> {
        if let Some(name) = value.as_str() {
            return lookup(&self.patterns, name);
        }

        let kind_name = string(required(value, "type")?, "type")?;
        let kind = if kind_name == "blended" {
            let patterns = required(value, "patterns")?
                .as_sequence()
                .filter(|p| p.len() == 2)
                .ok_or_else(|| SceneError::InvalidField {
                    field: "patterns".to_string(),
                    reason: "expected two patterns".to_string(),
                })?;
            PatternKind::Blended(
                Box::new(self.parse_pattern(&patterns[0])?),
                Box::new(self.parse_pattern(&patterns[1])?),
            )
        } else {
            let colours = required(value, "colors")?
                .as_sequence()
                .filter(|c| c.len() == 2)
                .ok_or_else(|| SceneError::InvalidField {
                    field: "colors".to_string(),
                    reason: "expected two colours".to_string(),
                })?;
            let a = self.parse_colour(&colours[0])?;
            let b = self.parse_colour(&colours[1])?;

            match kind_name {
                "stripes" => PatternKind::Stripes(a, b),
                "gradient" => PatternKind::Gradient(a, b),
                "rings" => PatternKind::Rings(a, b),
                "checkers" => PatternKind::Checkers(a, b),
                _ => {
                    return Err(SceneError::UnknownKeyword {
                        context: "pattern",
                        keyword: kind_name.to_string(),
                    })
                }
            }
        };

        let transform = self.parse_transform(value.get("transform"))?;
        Ok(Pattern::with_transform(kind, transform))
    }

    /// A list of transform steps, each applied after the ones before it.
    /// A step is either `[operation, args..]` or the name of a defined
    /// transform.
    fn parse_transform(&self, value: Option<&Value>) -> Result<Transform, SceneError> {
        let steps = match value {
            None | Some(Value::Null) => return Ok(Transform::IDENTITY),
            Some(v) => v.as_sequence().ok_or_else(|| SceneError::InvalidField {
                field: "transform".to_string(),
                reason: "expected a list of operations".to_string(),
            })?,
        };

        let mut transform = Transform::IDENTITY;
        for step in steps {
            let next = match step {
                Value::String(name) => lookup(&self.transforms, name)?,
                Value::Sequence(parts) if !parts.is_empty() => {
                    self.transform_step(string(&parts[0], "transform")?, &parts[1..])?
                }
                _ => {
                    return Err(SceneError::InvalidField {
                        field: "transform".to_string(),
                        reason: "expected an operation or a name".to_string(),
                    })
                }
            };
            transform = next * transform;
        }

        Ok(transform)
    }

    fn transform_step(&self, operation: &str, args: &[Value]) -> Result<Transform, SceneError> {
        let transform = match operation {
            "translate" => Transform::translation(Vector3::from_array(arguments(args, operation)?)),
            "scale" => Transform::scale(Vector3::from_array(arguments(args, operation)?))?,
            "rotate-x" => Transform::rotate_x(arguments::<1>(args, operation)?[0]),
            "rotate-y" => Transform::rotate_y(arguments::<1>(args, operation)?[0]),
            "rotate-z" => Transform::rotate_z(arguments::<1>(args, operation)?[0]),
            "shear" => {
                let [xy, xz, yx, yz, zx, zy] = arguments(args, operation)?;
                Transform::shear(xy, xz, yx, yz, zx, zy)?
            }
            _ => {
                return Err(SceneError::UnknownKeyword {
                    context: "transform",
                    keyword: operation.to_string(),
                })
            }
        };

        Ok(transform)
    }
}

/// Copy of a named definition
fn lookup<T: Clone>(table: &HashMap<String, T>, name: &str) -> Result<T, SceneError> {
    table
        .get(name)
        .cloned()
        .ok_or_else(|| SceneError::Undefined(name.to_string()))
}
