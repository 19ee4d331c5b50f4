pub mod types;

pub use types::ShaderGenError;
