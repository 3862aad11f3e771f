use storyforge_core::ChatMessage;

/// Build the title-generation message sequence for a feature description.
///
/// The reply is expected to be a short plain-text title, rendered as the
/// page heading next to the generated stories.
pub fn messages(feature: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::user(format!(
        "Create a short title, five words or fewer, for this software feature. \
         Return only the title with no quotes or punctuation around it.\n\n\
         The feature is: {feature}"
    ))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_user_message_with_feature() {
        let msgs = messages("dark mode toggle");
        assert_eq!(msgs.len(), 1);
        assert!(msgs[0].content.contains("dark mode toggle"));
    }
}
