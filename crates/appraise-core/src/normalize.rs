//! Model output cleanup ahead of JSON parsing.

/// Normalize free-form model output into best-effort JSON text: trim, drop
/// a surrounding Markdown code fence (first and last line), then drop a
/// stray leading `json` token. Pure transform; does not validate JSON.
///
/// A fence that opens and closes on the same line cleans to the empty
/// string. Preserved behavior; the downstream parse failure lands in a
/// debug artifact.
pub fn clean_model_response(raw: &str) -> String {
    let mut cleaned = raw.trim().to_string();

    if cleaned.starts_with("```") && cleaned.ends_with("```") {
        let lines: Vec<&str> = cleaned.lines().collect();
        let body = if lines.len() > 1 {
            lines[1..lines.len() - 1].join("\n")
        } else {
            String::new()
        };
        cleaned = body.trim().to_string();
    }

    if cleaned
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("json"))
    {
        cleaned = cleaned[4..].trim().to_string();
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fence() {
        assert_eq!(
            clean_model_response("```json\n{\"a\":1}\n```"),
            "{\"a\":1}"
        );
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(clean_model_response("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn strips_leading_json_token_without_fence() {
        assert_eq!(clean_model_response("json {\"a\":1}"), "{\"a\":1}");
        assert_eq!(clean_model_response("JSON\n{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn plain_json_passes_through() {
        assert_eq!(clean_model_response("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn single_line_fence_degenerates_to_empty() {
        assert_eq!(clean_model_response("```json```"), "");
        assert_eq!(clean_model_response("```"), "");
    }

    #[test]
    fn idempotent_on_its_own_output() {
        let inputs = [
            "```json\n{\"a\":1}\n```",
            "json {\"b\":2}",
            "plain text, not json at all",
            "{\"jsonish\":true}",
            "```json```",
        ];
        for input in inputs {
            let once = clean_model_response(input);
            assert_eq!(clean_model_response(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn does_not_split_multibyte_prefixes() {
        // First four bytes are not a char boundary; must not panic.
        assert_eq!(clean_model_response("日本語テスト"), "日本語テスト");
    }
}
