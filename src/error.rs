// error.rs
use thiserror::Error;

/// Host-side binding failures. The shader stages themselves never fail.
#[derive(Error, Debug, PartialEq)]
pub enum BindError {
    #[error("attribute buffer of {len} floats is not a whole number of {components}-component vertices")]
    AttributeLayout { len: usize, components: usize },
    #[error("no vertex attribute at slot {0}")]
    AttributeSlot(u32),
    #[error("unknown uniform `{0}`")]
    UnknownUniform(String),
}

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to load model: {0}")]
    Load(#[from] tobj::LoadError),
    #[error("model has no faces")]
    Empty,
    #[error(transparent)]
    Bind(#[from] BindError),
}
