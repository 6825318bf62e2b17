use crate::model::SizePreference;
use serde_json::Value;

pub fn encode(pref: &SizePreference) -> String {
    serde_json::to_value(pref).map(|v| v.to_string()).unwrap_or_default()
}

// Strict variant: returns rich error codes instead of an absent value
pub fn decode(raw: &str) -> Result<SizePreference, (&'static str, String)> {
    let v: Value = serde_json::from_str(raw).map_err(|e| ("json_parse", format!("{}", e)))?;
    let obj = match v.as_object() {
        Some(obj) => obj,
        None => return Err(("invalid_structure", "expected a JSON object".into())),
    };
    let field = |name: &'static str| -> Result<u32, (&'static str, String)> {
        let raw = obj
            .get(name)
            .ok_or_else(|| ("invalid_structure", format!("missing field '{}'", name)))?;
        let n = raw.as_u64().ok_or_else(|| {
            (
                "invalid_structure",
                format!("field '{}' must be a non-negative integer", name),
            )
        })?;
        u32::try_from(n)
            .map_err(|_| ("invalid_structure", format!("field '{}' out of range", name)))
    };
    Ok(SizePreference {
        height: field("height")?,
        width: field("width")?,
    })
}

/// Lenient read used on the preference-restore path: absent, blank, or
/// malformed input all read as "no preference".
pub fn decode_opt(raw: Option<&str>) -> Option<SizePreference> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    decode(raw).ok()
}
