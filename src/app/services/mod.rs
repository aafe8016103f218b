pub mod definition_store;
pub mod discovery;

pub use definition_store::LoadedDefinition;
pub use discovery::discover;
