use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PfError {
    #[error("Unknown unit system: {name} (expected metric or imperial)")]
    UnknownUnitSystem { name: String },
}
