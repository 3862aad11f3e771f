use serde::{Deserialize, Serialize};

/// Cached result of the stories flow for one feature description.
///
/// Created when the stories generation first succeeds; `test_html` starts
/// empty and is attached later if the user asks for test code. Entries live
/// for the whole process: there is no eviction, and memory grows with the
/// number of distinct features submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryEntry {
    /// The feature description as submitted.
    pub feature: String,
    /// Generated user stories and acceptance criteria, as an HTML fragment.
    pub stories_html: String,
    /// Short generated title for the feature.
    pub title: String,
    /// Generated test-code HTML, filled in by the tests flow on demand.
    pub test_html: Option<String>,
}

impl StoryEntry {
    pub fn new(feature: String, stories_html: String, title: String) -> Self {
        Self {
            feature,
            stories_html,
            title,
            test_html: None,
        }
    }
}

/// Cached result of the wireframe flow for one feature description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireframeEntry {
    pub feature: String,
    /// URL of the generated wireframe image.
    pub image_url: String,
}
