use storyforge_core::ChatMessage;

/// Expected shape of the model's answer, one block per story.
pub const HTML_STORIES_FORMAT: &str = r#"
<h3>Story 1: {{story title}}</h3>
<p>{{ story description }}</p>
<h4>Acceptance Criteria</h4>
<ol>
  <li><strong>given</strong> {{ given }},<strong>when</strong> {{ when }}, <strong>then</strong> {{ then }}</li>
  <li><strong>given</strong> {{ given }},<strong>when</strong> {{ when }}, <strong>then</strong> {{ then }}</li>
  <li><strong>given</strong> {{ given }},<strong>when</strong> {{ when }}, <strong>then</strong> {{ then }}</li>
</ol>
<h4>End to end test scenarios</h4>
<h5>Positive</h5>
<ul>
  <li>
    <p><strong>scenario</strong>: {{ scenario }}</p>
    <p><strong>expected result</strong>: {{ expected result }}</p>
    <p><strong>test data</strong>: {{ test data }}</p>
  </li>
</ul>
<h5>Negative</h5>
<ul>
  <li>
    <p><strong>scenario</strong>: {{ scenario }}</p>
    <p><strong>expected result</strong>: {{ expected result }}</p>
    <p><strong>test data</strong>: {{ test data }}</p>
  </li>
</ul>
<h5>Edge cases</h5>
<ul>
  <li>
    <p><strong>scenario</strong>: {{ scenario }}</p>
    <p><strong>expected result</strong>: {{ expected result }}</p>
    <p><strong>test data</strong>: {{ test data }}</p>
  </li>
</ul>
"#;

/// Build the stories-generation message sequence for a feature description.
pub fn messages(feature: &str) -> Vec<ChatMessage> {
    let mut instruction = String::new();
    instruction.push_str(
        "Create a list of stories based on a feature. \
         Describe the acceptance criteria for each story in the given, when and then format. \
         List comprehensive test scenarios with positive, negative and edge cases \
         based on the acceptance criteria for each story. \
         Make sure there is at least the same number of tests as the number of \
         acceptance criteria for each story. \
         Include sample test data for each test.\n\n",
    );
    instruction.push_str("Return the answer in this HTML format for each story: ");
    instruction.push_str(HTML_STORIES_FORMAT);
    instruction.push_str("\n\nThe feature is: ");
    instruction.push_str(feature);

    vec![
        ChatMessage::system("Act as a business analyst and a quality assurance engineer."),
        ChatMessage::user(instruction),
    ]
}
