//! Structured output: describe a record shape to the LLM as text, then
//! parse its response strictly against that shape.

use serde::de::DeserializeOwned;

use crate::error::{AgentError, Result};

/// One field of an output schema, described to the model as text.
#[derive(Debug, Clone, Copy)]
pub struct SchemaField {
    pub name: &'static str,
    pub ty: &'static str,
    pub description: &'static str,
}

/// An explicit description of the JSON object the model must return.
#[derive(Debug, Clone, Copy)]
pub struct OutputSchema {
    pub name: &'static str,
    pub doc: &'static str,
    pub fields: &'static [SchemaField],
}

impl OutputSchema {
    /// Render formatting instructions appended to a prompt.
    ///
    /// Deterministic output: one line per field, then a hard requirement
    /// to answer with a single JSON object and nothing else.
    pub fn format_instructions(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Respond with a single JSON object of type `{}` ({}) with exactly these fields:\n",
            self.name, self.doc
        ));
        for field in self.fields {
            out.push_str(&format!(
                "- \"{}\" ({}): {}\n",
                field.name, field.ty, field.description
            ));
        }
        out.push_str(
            "Return ONLY the JSON object. No markdown fences, no explanations, no other text.",
        );
        out
    }

    /// Parse a model response into `T`, failing with a named error when the
    /// response does not conform to the schema.
    pub fn parse_response<T: DeserializeOwned>(&self, response: &str) -> Result<T> {
        let json_str = extract_json_from_response(response);
        serde_json::from_str(&json_str).map_err(|e| {
            AgentError::LlmResponseParse(format!("response does not match `{}`: {e}", self.name))
        })
    }
}

/// Extract the JSON object from an LLM response.
///
/// Models instructed to return bare JSON still occasionally wrap it in
/// markdown fences or surround it with prose; take the outermost braced
/// region after stripping any fence.
pub fn extract_json_from_response(response: &str) -> String {
    let trimmed = response.trim();

    let blocks = extract_fenced_blocks(trimmed);
    let candidate = if let Some(block) = blocks.iter().find(|b| b.trim_start().starts_with('{')) {
        block.trim()
    } else {
        trimmed
    };

    match (candidate.find('{'), candidate.rfind('}')) {
        (Some(start), Some(end)) if start < end => candidate[start..=end].to_string(),
        _ => candidate.to_string(),
    }
}

/// Extract all fenced code blocks from text.
fn extract_fenced_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("```") {
        let after_fence = &remaining[start + 3..];
        // Skip optional language identifier on the same line
        let content_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
        let content = &after_fence[content_start..];
        if let Some(end) = content.find("```") {
            blocks.push(content[..end].to_string());
            remaining = &content[end + 3..];
        } else {
            break;
        }
    }

    blocks
}

/// Schema for the parsed search request.
pub const REQUEST_SPECIFICS: OutputSchema = OutputSchema {
    name: "RequestSpecifics",
    doc: "structured search parameters parsed from the user request",
    fields: &[
        SchemaField {
            name: "location",
            ty: "string",
            description: "area or place or town or city of user request",
        },
        SchemaField {
            name: "search_type",
            ty: "string",
            description: "type of search such as food, accommodation, etc.",
        },
        SchemaField {
            name: "criteria",
            ty: "string",
            description: "criteria for the search, such as budget, outdoors, \
                          western cuisine, swimming pool, etc.",
        },
    ],
};

/// Schema for the ranked recommendation list.
pub const RECOMMENDATIONS: OutputSchema = OutputSchema {
    name: "Recommendations",
    doc: "ranked list of recommended places",
    fields: &[SchemaField {
        name: "recommendations",
        ty: "array of objects {name: string, photo_url: array of strings, \
             maps_location_url: string, selection_reason: string, summary: string}",
        description: "List of recommendations, ranked, not more than 5. Per object: \
                      name of the recommended place; photo_url, its photo urls; \
                      maps_location_url, its maps location url; selection_reason, why it \
                      was selected and how it fulfils the user criteria; summary, in 5 \
                      bulletins a short description of the place from reviews and details \
                      such as opening hours, price, ratings, number of reviews.",
    }],
};
