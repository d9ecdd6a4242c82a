//! `appdetails` API response handling.

use serde::Serialize;
use serde_json::Value;

/// Raw requirement markup for both tiers of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawRequirements {
    pub minimum: Option<String>,
    pub recommended: Option<String>,
}

impl RawRequirements {
    /// True when neither tier has any markup.
    pub fn is_empty(&self) -> bool {
        self.minimum.is_none() && self.recommended.is_none()
    }
}

/// Pull the PC requirement markup out of an `appdetails` response body.
///
/// Missing fields, wrong types and empty strings all read as absent. The
/// store sends `pc_requirements: []` for games without requirements.
pub fn pc_requirements(body: &Value, app_id: u32) -> RawRequirements {
    let reqs = body
        .get(app_id.to_string())
        .and_then(|app| app.get("data"))
        .and_then(|data| data.get("pc_requirements"));

    let tier = |name: &str| {
        reqs.and_then(|r| r.get(name))
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    };

    RawRequirements {
        minimum: tier("minimum"),
        recommended: tier("recommended"),
    }
}
