use storyforge_core::ChatMessage;

/// Expected shape of the model's answer, one block per test scenario.
pub const HTML_TEST_FORMAT: &str = r#"
<h2>{{ Test scenario }}</h2>
<p>{{ Test description }}</p>
<pre style="border: 1px solid black; border-radius: 25px; padding: 10px"><code>{{ test code }}</code></pre>
"#;

/// Build the test-code message sequence from previously generated stories
/// markup. This is the second stage: it consumes the stories flow's output,
/// not the raw feature text.
pub fn messages(stories_html: &str) -> Vec<ChatMessage> {
    let mut instruction = String::new();
    instruction.push_str(
        "Based on stories and test scenarios, create sample code for each test scenario. \
         Use Playwright, Jest and JavaScript for the code.\n\n",
    );
    instruction.push_str("Return the answer in this HTML format for each test scenario: ");
    instruction.push_str(HTML_TEST_FORMAT);
    instruction.push_str("\n\nThe stories are: ");
    instruction.push_str(stories_html);

    vec![
        ChatMessage::system("Act as a quality assurance developer"),
        ChatMessage::user(instruction),
    ]
}
