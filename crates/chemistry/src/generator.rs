//! Pluggable chemistry generation.
//!
//! [`ChemistryGenerator`] turns a chemistry pattern into the text of a
//! `chemistry.cfg`. The shipped [`IdentityGenerator`] returns the pattern
//! unchanged; a real generator is installed through
//! [`crate::ChemistryPlugin::with_generator`] or by replacing the
//! [`ActiveGenerator`] resource.

use std::fmt;
use std::sync::Arc;

use bevy::prelude::*;

// =============================================================================
// Errors
// =============================================================================

/// Failure reported by a substituted generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    Failed(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Failed(msg) => write!(f, "Generation failed: {msg}"),
        }
    }
}

impl std::error::Error for GenerateError {}

// =============================================================================
// Strategy
// =============================================================================

pub trait ChemistryGenerator: Send + Sync + 'static {
    fn generate(&self, pattern: &str) -> Result<String, GenerateError>;
}

/// Returns the pattern verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityGenerator;

impl ChemistryGenerator for IdentityGenerator {
    fn generate(&self, pattern: &str) -> Result<String, GenerateError> {
        Ok(pattern.to_owned())
    }
}

impl<F> ChemistryGenerator for F
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    fn generate(&self, pattern: &str) -> Result<String, GenerateError> {
        Ok(self(pattern))
    }
}

/// The generator used by the submit handler.
#[derive(Resource, Clone)]
pub struct ActiveGenerator(pub Arc<dyn ChemistryGenerator>);

impl ActiveGenerator {
    pub fn new(generator: impl ChemistryGenerator) -> Self {
        Self(Arc::new(generator))
    }
}

impl Default for ActiveGenerator {
    fn default() -> Self {
        Self::new(IdentityGenerator)
    }
}

impl std::ops::Deref for ActiveGenerator {
    type Target = dyn ChemistryGenerator;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
