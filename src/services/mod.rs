pub mod email_extractor;
pub mod email_store;
pub mod gemini;
pub mod persona;
