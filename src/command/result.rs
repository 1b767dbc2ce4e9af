//! Output contract consumed by the UI dispatcher

use crate::core::types::{Destination, PdfKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fixed set of effects a dispatcher knows how to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Navigate,
    ClickTab,
    SelectDestination,
    ClickButton,
    FillInput,
    SubmitForm,
    ShowNotification,
    GeneratePdfDirect,
}

/// Severity of a `show_notification` action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// One described side effect
///
/// Built once through the constructors below and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    kind: ActionKind,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    params: Option<Map<String, Value>>,
}

impl Action {
    pub fn new(kind: ActionKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            params: None,
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value.into());
        self
    }

    /// Move the UI to `path`
    pub fn navigate(path: &str) -> Self {
        Self::new(ActionKind::Navigate, format!("Navigate to {}", path)).with_param("path", path)
    }

    /// Show a toast to the operator
    pub fn notification(level: NotificationLevel, message: &str) -> Self {
        let level_value = serde_json::to_value(level).unwrap_or(Value::Null);
        Self::new(ActionKind::ShowNotification, message)
            .with_param("level", level_value)
            .with_param("message", message)
    }

    /// Generate a document for a destination without further navigation
    pub fn generate_pdf(destination: &Destination, kind: PdfKind) -> Self {
        Self::new(
            ActionKind::GeneratePdfDirect,
            format!("Generate {} PDF for {}", kind.label(), destination.name),
        )
        .with_param("destinationId", destination.id.as_str())
        .with_param("destinationName", destination.name.as_str())
        .with_param("pdfKind", kind.as_str())
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.as_ref()?.get(key)
    }
}

/// Final answer for one command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    pub is_command: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_user_action: Option<bool>,
}

impl CommandResult {
    /// A result that only informs the operator
    pub fn reply(message: impl Into<String>) -> Self {
        Self {
            is_command: true,
            actions: None,
            message: message.into(),
            requires_user_action: None,
        }
    }

    pub fn with_actions(actions: Vec<Action>, message: impl Into<String>) -> Self {
        Self {
            is_command: true,
            actions: Some(actions),
            message: message.into(),
            requires_user_action: None,
        }
    }

    pub fn requiring_user_action(mut self) -> Self {
        self.requires_user_action = Some(true);
        self
    }

    /// Actions in dispatch order; empty when there are none
    pub fn actions(&self) -> &[Action] {
        self.actions.as_deref().unwrap_or_default()
    }
}
