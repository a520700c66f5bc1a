pub mod fetch;
pub mod llm;
pub mod youtube;
