use crate::llm::schema;

const SYSTEM_PARSE_REQUEST: &str = include_str!("../../prompts/system_parse_request.txt");
const SYSTEM_RECOMMENDATIONS: &str = include_str!("../../prompts/system_recommendations.txt");

/// Build the system prompt for parsing a user search request.
pub fn build_parse_request_system_prompt() -> &'static str {
    SYSTEM_PARSE_REQUEST
}

/// Build the user prompt for parsing a free-text search request.
pub fn build_parse_request_prompt(user_request: &str) -> String {
    format!(
        "####{user_request}####\n\n{}",
        schema::REQUEST_SPECIFICS.format_instructions()
    )
}

/// Build the system prompt for the ranking step.
pub fn build_recommendations_system_prompt() -> &'static str {
    SYSTEM_RECOMMENDATIONS
}

/// Build the user prompt for ranking collected place details against the
/// user's criteria. `places_json` is the serialized `Vec<PlaceInfo>`.
pub fn build_recommendations_prompt(criteria: &str, places_json: &str) -> String {
    format!(
        "####user criteria: {criteria}\nsearch results: {places_json}####\n\n{}",
        schema::RECOMMENDATIONS.format_instructions()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prompt_delimits_request() {
        let prompt = build_parse_request_prompt("cheap ramen in Shinjuku");
        assert!(prompt.starts_with("####cheap ramen in Shinjuku####"));
        assert!(prompt.contains("\"location\""));
    }

    #[test]
    fn test_recommendations_prompt_embeds_criteria_and_results() {
        let prompt = build_recommendations_prompt("cheap", r#"[{"name":"Ichiran"}]"#);
        assert!(prompt.contains("user criteria: cheap"));
        assert!(prompt.contains(r#"search results: [{"name":"Ichiran"}]"#));
        assert!(prompt.contains("\"recommendations\""));
    }

    #[test]
    fn test_system_prompts_keep_travel_agent_framing() {
        assert!(build_parse_request_system_prompt().contains("travel agent"));
        assert!(build_recommendations_system_prompt().contains("ranked accordingly"));
    }
}
