//! Result items in the launcher's wire shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::remedy::{Action, Remediation};

pub const ICO_PATH: &str = "icon.png";

/// Named methods the launcher can invoke when a result is picked.
pub const METHOD_OPEN_SETTINGS: &str = "open_setting_dialog";
pub const METHOD_OPEN_URL: &str = "open_url";
pub const METHOD_SELECT_BUDGET: &str = "select_budget";

/// One selectable entry, serialized with the launcher's field casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultItem {
    pub title: String,
    pub sub_title: String,
    pub ico_path: String,
    #[serde(rename = "JsonRPCAction", skip_serializing_if = "Option::is_none")]
    pub json_rpc_action: Option<JsonRpcAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_data: Option<Value>,
}

impl ResultItem {
    pub fn new(title: impl Into<String>, sub_title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sub_title: sub_title.into(),
            ico_path: ICO_PATH.to_string(),
            json_rpc_action: None,
            context_data: None,
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.json_rpc_action = Some(action.into());
        self
    }

    pub fn with_context(mut self, context: Value) -> Self {
        self.context_data = Some(context);
        self
    }
}

/// Follow-up invocation payload the host dispatches on selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcAction {
    pub method: String,
    pub parameters: Vec<Value>,
}

impl From<Action> for JsonRpcAction {
    fn from(action: Action) -> Self {
        match action {
            Action::OpenSettings => Self {
                method: METHOD_OPEN_SETTINGS.to_string(),
                parameters: Vec::new(),
            },
            Action::OpenUrl(url) => Self {
                method: METHOD_OPEN_URL.to_string(),
                parameters: vec![Value::String(url)],
            },
            Action::SelectBudget(id) => Self {
                method: METHOD_SELECT_BUDGET.to_string(),
                parameters: vec![Value::String(id)],
            },
        }
    }
}

/// Renders a remediation as a single result entry.
pub fn remediation_item(remediation: &Remediation) -> ResultItem {
    let mut item = ResultItem::new(remediation.title.clone(), remediation.subtitle.clone());
    if let Some(action) = &remediation.action {
        item = item.with_action(action.clone());
    }
    item
}
