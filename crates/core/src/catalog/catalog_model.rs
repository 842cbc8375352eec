use serde::{Deserialize, Serialize};

/// A valuation service offering (e.g. standard appraisal, express appraisal).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}
