//! Prompt builders for the generation stages.
//!
//! Every builder is a pure function: it combines the caller's text with a
//! fixed instruction and, where the model must return markup, a literal
//! example of the expected HTML shape. The external model call is the only
//! source of variability downstream.

pub mod stories;
pub mod test_code;
pub mod title;
pub mod wireframe;
