// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Instruction prompt for vocabulary lookups

const INSTRUCTIONS: &str = r#"Give a vocabulary breakdown of the English text above.
Reply with a single JSON object and nothing else: no prose, no markdown, no code fences.
Use exactly these keys:
- "definition": a concise definition of the text.
- "synonyms": a list of at most 5 relevant synonyms.
- "antonyms": a list of at most 5 relevant antonyms.
- "turkish_meaning": the closest Turkish word or short phrase.
When a field does not apply (for example, a proper noun has no antonyms), use [] for
"synonyms" and "antonyms" and "" for the other keys.

Example reply for "happy":
{
  "definition": "Feeling or showing pleasure or contentment.",
  "synonyms": ["content", "joyful", "cheerful", "pleased", "glad"],
  "antonyms": ["sad", "unhappy", "miserable", "gloomy"],
  "turkish_meaning": "mutlu"
}"#;

/// Build the prompt asking for a JSON breakdown of `selection`
pub fn build_definition_prompt(selection: &str) -> String {
    format!("Text: \"{}\"\n\n{}", selection, INSTRUCTIONS)
}
