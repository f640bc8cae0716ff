//! The model registry: named, parametrized builders of map meshes.
//!
//! A model is a plain function that assembles exactly one [`Mesh`] out of
//! faces, using vector arithmetic on the named unit directions. Builders
//! expose no other mutation surface and no partial state: either the whole
//! mesh comes back, or an error does.

#![warn(clippy::pedantic)]

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use map_forge_mesh::Mesh;

mod cube;
mod pillar;
mod square;
mod stairs;
mod underpass;

/// An error raised while looking up or building a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No model is registered under the requested name.
    UnknownModel(String),
    /// The builder rejected its input.
    Mesh(map_forge_mesh::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownModel(name) => write!(f, "unknown model '{name}'"),
            Self::Mesh(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<map_forge_mesh::Error> for Error {
    fn from(err: map_forge_mesh::Error) -> Self {
        Self::Mesh(err)
    }
}

/// Named construction-time parameters of a model build.
///
/// Every parameter is a scalar; builders fall back to their documented
/// defaults for anything absent.
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: HashMap<String, f64>,
}

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Look a parameter up, falling back to `default`.
    #[must_use]
    pub fn get_or(&self, name: &str, default: f64) -> f64 {
        self.values.get(name).copied().unwrap_or(default)
    }
}

/// The signature every model builder shares.
pub type Builder = fn(&Params) -> Result<Mesh, map_forge_mesh::Error>;

/// A named, instantiable model.
pub struct Model {
    name: &'static str,
    builder: Builder,
}

impl Model {
    /// Create a new model with the given name. The name MUST be ascii and
    /// lowercase.
    ///
    /// # Panics
    /// Panics on an invalid name.
    #[must_use]
    pub fn new(name: &'static str, builder: Builder) -> Self {
        if name
            .chars()
            .any(|c| !c.is_ascii() || !c.is_lowercase() && c.is_alphabetic())
        {
            panic!("Model name must be ASCII and lowercase. Received name: {name}");
        }

        Self { name, builder }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the builder.
    ///
    /// # Errors
    /// Propagates whatever the builder rejects.
    pub fn build(&self, params: &Params) -> Result<Mesh, Error> {
        Ok((self.builder)(params)?)
    }
}

/// The model table. [`Registry::default`] holds the built-in library.
pub struct Registry {
    models: HashMap<&'static str, Model>,
}

impl Registry {
    /// A registry with nothing in it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            models: HashMap::new(),
        }
    }

    /// Register a model, replacing any previous one under the same name.
    pub fn register(&mut self, model: Model) {
        self.models.insert(model.name(), model);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// Look a model up and build it.
    ///
    /// # Errors
    /// Returns [`Error::UnknownModel`] on a lookup miss and propagates
    /// builder failures.
    pub fn build(&self, name: &str, params: &Params) -> Result<Mesh, Error> {
        self.get(name)
            .ok_or_else(|| Error::UnknownModel(name.to_string()))?
            .build(params)
    }

    /// The registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.models.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::empty();

        registry.register(Model::new("square", square::build));
        registry.register(Model::new("cube", cube::build));
        registry.register(Model::new("pillar", pillar::build));
        registry.register(Model::new("stairs", stairs::build));
        registry.register(Model::new("underpass", underpass::build));

        registry
    }
}
