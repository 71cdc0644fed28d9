//! The `new` command's template engine: descriptor loading, placeholder
//! substitution, file materialization and manifest registration.

pub mod config;
pub mod materializer;
pub mod placeholder;
pub mod registrar;

pub use config::{FileSpec, GeneratorDescriptor, RegistrationRule, TemplatesRoot};
pub use materializer::{ComponentRequest, GenerationReport, Generator};
pub use placeholder::Placeholders;
pub use registrar::{PreparedRegistration, Registrar, RegistrationOutcome};
