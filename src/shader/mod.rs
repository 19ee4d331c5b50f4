pub mod generator;
pub mod prompts;
pub mod sanitize;

pub use generator::ShaderGenerator;
pub use sanitize::strip_code_fences;
