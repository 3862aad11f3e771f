/// Fixed instruction prepended to the feature text for image generation.
const WIREFRAME_PREFIX: &str =
    "Create a wireframe of a user interface that implements the following feature: ";

/// Build the image-generation prompt for a feature description.
///
/// Image prompts are a single string, not a role-tagged message sequence.
pub fn prompt(feature: &str) -> String {
    format!("{WIREFRAME_PREFIX}{feature}")
}
