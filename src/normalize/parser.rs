use serde_json::Value;
use thiserror::Error;

use crate::analysis::types::{Impact, RiskFactor};

/// Why stage 1 could not produce a structure. Never surfaces to callers;
/// the chain logs it and falls through to the rescue stages.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no embedded JSON object found")]
    NoJsonObject,
    #[error("embedded JSON failed to parse: {0}")]
    Json(String),
}

/// Fields coerced out of the model's embedded JSON object.
#[derive(Debug, Clone)]
pub struct ParsedPrediction {
    pub completion_probability: f64,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendations: Vec<String>,
}

/// Stage 1: locate the outermost brace pair and coerce the enclosed object.
///
/// Coercion is lenient throughout: a missing or uncoercible probability
/// defaults to 0.5, factor lists accept strings or objects and skip
/// unusable items, and `recommendations` accepts a bare string.
pub fn parse_structured(text: &str) -> Result<ParsedPrediction, ParseError> {
    let start = text.find('{').ok_or(ParseError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(ParseError::NoJsonObject)?;
    if end < start {
        return Err(ParseError::NoJsonObject);
    }

    // The slice starts at '{' and ends at '}', so anything that parses is
    // necessarily an object.
    let object: serde_json::Map<String, Value> =
        serde_json::from_str(&text[start..=end]).map_err(|e| ParseError::Json(e.to_string()))?;

    let completion_probability = object
        .get("completion_probability")
        .and_then(coerce_number)
        .unwrap_or(0.5)
        .clamp(0.0, 1.0);

    let risk_factors = match object.get("risk_factors") {
        Some(Value::String(s)) => vec![RiskFactor::rescued(s.clone())],
        Some(Value::Array(items)) => items.iter().filter_map(coerce_factor).collect(),
        _ => Vec::new(),
    };

    let recommendations = match object.get("recommendations") {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };

    Ok(ParsedPrediction {
        completion_probability,
        risk_factors,
        recommendations,
    })
}

/// Accept a JSON number or a numeric string.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Accept a bare string or a factor object; skip anything else.
fn coerce_factor(value: &Value) -> Option<RiskFactor> {
    match value {
        Value::String(s) => Some(RiskFactor::rescued(s.clone())),
        Value::Object(obj) => {
            let factor = obj
                .get("factor")
                .or_else(|| obj.get("name"))
                .and_then(Value::as_str)?;
            Some(RiskFactor {
                factor: factor.to_string(),
                impact: obj
                    .get("impact")
                    .and_then(Value::as_str)
                    .map(coerce_impact)
                    .unwrap_or(Impact::Medium),
                description: obj
                    .get("description")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            })
        }
        _ => None,
    }
}

fn coerce_impact(label: &str) -> Impact {
    match label.to_lowercase().as_str() {
        "low" => Impact::Low,
        "high" => Impact::High,
        "critical" => Impact::Critical,
        _ => Impact::Medium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_embedded_object_with_prose_around_it() {
        let text = r#"Here is my analysis:
{"completion_probability": 0.73, "risk_factors": ["A"], "recommendations": "B"}
Hope this helps!"#;
        let parsed = parse_structured(text).unwrap();
        assert!((parsed.completion_probability - 0.73).abs() < 1e-9);
        assert_eq!(parsed.risk_factors.len(), 1);
        assert_eq!(parsed.risk_factors[0].factor, "A");
        assert_eq!(parsed.risk_factors[0].impact, Impact::Medium);
        assert_eq!(parsed.recommendations, vec!["B".to_string()]);
    }

    #[test]
    fn probability_defaults_and_clamps() {
        let parsed = parse_structured(r#"{"risk_factors": []}"#).unwrap();
        assert_eq!(parsed.completion_probability, 0.5);

        let parsed = parse_structured(r#"{"completion_probability": 7.3}"#).unwrap();
        assert_eq!(parsed.completion_probability, 1.0);

        let parsed = parse_structured(r#"{"completion_probability": "0.4"}"#).unwrap();
        assert!((parsed.completion_probability - 0.4).abs() < 1e-9);

        let parsed = parse_structured(r#"{"completion_probability": "maybe"}"#).unwrap();
        assert_eq!(parsed.completion_probability, 0.5);
    }

    #[test]
    fn factor_objects_pass_through_with_impact() {
        let text = r#"{
            "completion_probability": 0.2,
            "risk_factors": [
                {"factor": "Overrun", "impact": "high", "description": "late"},
                {"name": "Named differently"},
                {"impact": "critical"},
                42
            ]
        }"#;
        let parsed = parse_structured(text).unwrap();
        assert_eq!(parsed.risk_factors.len(), 2);
        assert_eq!(parsed.risk_factors[0].factor, "Overrun");
        assert_eq!(parsed.risk_factors[0].impact, Impact::High);
        assert_eq!(parsed.risk_factors[0].description.as_deref(), Some("late"));
        assert_eq!(parsed.risk_factors[1].factor, "Named differently");
        assert_eq!(parsed.risk_factors[1].impact, Impact::Medium);
    }

    #[test]
    fn single_string_factor_wraps_as_medium() {
        let parsed = parse_structured(r#"{"risk_factors": "Only one"}"#).unwrap();
        assert_eq!(parsed.risk_factors.len(), 1);
        assert_eq!(parsed.risk_factors[0].impact, Impact::Medium);
    }

    #[test]
    fn missing_braces_is_no_object() {
        assert!(matches!(
            parse_structured("plain prose, no structure"),
            Err(ParseError::NoJsonObject)
        ));
        // A '}' before any '{' is not a usable pair.
        assert!(matches!(
            parse_structured("} backwards {"),
            Err(ParseError::NoJsonObject)
        ));
    }

    #[test]
    fn invalid_json_falls_through() {
        assert!(matches!(
            parse_structured("{not json at all}"),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn two_objects_in_prose_are_not_one_structure() {
        // First '{' to last '}' spans both objects and the prose between.
        assert!(matches!(
            parse_structured(r#"{"a": 1} and also {"b": 2}"#),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn unknown_impact_label_defaults_to_medium() {
        let parsed =
            parse_structured(r#"{"risk_factors": [{"factor": "X", "impact": "severe"}]}"#).unwrap();
        assert_eq!(parsed.risk_factors[0].impact, Impact::Medium);
    }
}
