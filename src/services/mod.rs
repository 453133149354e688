pub mod gemini;
pub mod model;
pub mod prompt;
