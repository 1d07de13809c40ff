//! Domain side of the chemistry form: bounded inputs, the pluggable
//! generator and the per-session store that holds generated output.

pub mod config;
pub mod form;
pub mod generator;
mod plugin;
pub mod session;

pub use form::{BoundedCount, FormError, FormInput};
pub use generator::{ActiveGenerator, ChemistryGenerator, GenerateError, IdentityGenerator};
pub use plugin::{
    ChemistryGenerated, ChemistryPlugin, ChemistrySet, EndSessionEvent, SubmitChemistryEvent,
};
pub use session::{
    ActiveSession, ChemistrySessions, FormSession, SessionId, SessionOutput, SessionState,
};
