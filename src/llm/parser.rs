//! Parse operator commands into structured intents
//!
//! The completion service turns free text into a small JSON object. That
//! object is untrusted: it is parsed leniently (missing or null fields fall
//! back to defaults) and then validated into the closed [`Intent`] union
//! before anything downstream acts on it.

use crate::command::resolver::DestinationQuery;
use crate::core::error::{CommandError, Result};
use crate::core::types::PdfKind;
use crate::llm::CompletionService;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

/// Raw intent as returned by the completion service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIntent {
    /// Whether the service recognised the command at all
    #[serde(default, deserialize_with = "null_as_default")]
    pub understood: bool,
    /// Wire name of the requested action, e.g. `generate_hotel_pdf`
    #[serde(default, deserialize_with = "null_as_default")]
    pub action_type: String,
    /// Destination as the operator phrased it
    #[serde(default, rename = "destination")]
    pub destination_phrase: Option<String>,
    /// Distinctive tokens of the destination name, in the order given
    #[serde(
        default,
        rename = "destinationSearchTerms",
        deserialize_with = "null_as_default"
    )]
    pub destination_keywords: Vec<String>,
    /// Route for `navigate`
    #[serde(default)]
    pub target_path: Option<String>,
    /// Short confirmation the service proposes to show the operator
    #[serde(default, deserialize_with = "null_as_default")]
    pub confirmation_message: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The closed catalog of commands the assistant understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    GenerateEmbarquePdf,
    GenerateMotoristaPdf,
    GenerateHotelPdf,
    Navigate,
}

impl ActionType {
    pub const ALL: [ActionType; 4] = [
        ActionType::GenerateEmbarquePdf,
        ActionType::GenerateMotoristaPdf,
        ActionType::GenerateHotelPdf,
        ActionType::Navigate,
    ];

    /// Look up a wire name. Matching ignores case and surrounding whitespace.
    pub fn from_wire(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::GenerateEmbarquePdf => "generate_embarque_pdf",
            ActionType::GenerateMotoristaPdf => "generate_motorista_pdf",
            ActionType::GenerateHotelPdf => "generate_hotel_pdf",
            ActionType::Navigate => "navigate",
        }
    }

    /// Document kind for destination-bound actions
    pub fn pdf_kind(&self) -> Option<PdfKind> {
        match self {
            ActionType::GenerateEmbarquePdf => Some(PdfKind::Embarque),
            ActionType::GenerateMotoristaPdf => Some(PdfKind::Motorista),
            ActionType::GenerateHotelPdf => Some(PdfKind::Hotel),
            ActionType::Navigate => None,
        }
    }

}

/// A validated intent. Only these shapes reach the action compiler.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Generate a document for one destination
    ///
    /// The operator-facing message is built from the resolved destination,
    /// so the service's confirmation is not carried.
    GeneratePdf {
        kind: PdfKind,
        query: DestinationQuery,
    },
    /// Move the operator to another screen. `None` means "use the default".
    Navigate {
        target_path: Option<String>,
        confirmation: String,
    },
    /// Not understood, or an action outside the catalog
    NotUnderstood,
}

impl ParsedIntent {
    /// Validate the raw shape against the command catalog
    pub fn validate(&self) -> Intent {
        if !self.understood {
            return Intent::NotUnderstood;
        }
        let Some(action) = ActionType::from_wire(&self.action_type) else {
            tracing::debug!(action_type = %self.action_type, "Action type outside catalog");
            return Intent::NotUnderstood;
        };

        match action.pdf_kind() {
            Some(kind) => Intent::GeneratePdf {
                kind,
                query: DestinationQuery::new(
                    self.destination_phrase.as_deref().unwrap_or_default(),
                    &self.destination_keywords,
                ),
            },
            // Keywords only apply to destination-bound actions
            None => Intent::Navigate {
                target_path: self
                    .target_path
                    .as_deref()
                    .map(str::trim)
                    .filter(|path| is_route_path(path))
                    .map(str::to_string),
                confirmation: self.confirmation_message.trim().to_string(),
            },
        }
    }
}

/// An application route: absolute, single-line, no scheme or whitespace
fn is_route_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains("://")
        && !path.chars().any(char::is_whitespace)
}

/// Asks the completion service to interpret a command
pub struct IntentExtractor {
    completion: Arc<dyn CompletionService>,
}

impl IntentExtractor {
    pub fn new(completion: Arc<dyn CompletionService>) -> Self {
        Self { completion }
    }

    /// Extract an intent from a normalized command
    ///
    /// Transport failures and unparseable answers come back as errors; the
    /// caller decides how to present them. No retry is attempted.
    pub async fn extract(&self, command: &str) -> Result<ParsedIntent> {
        let response = self
            .completion
            .complete(EXTRACT_SYSTEM_PROMPT, command)
            .await?;
        tracing::debug!(response = %response, "Completion received");
        parse_intent(&response)
    }
}

/// Parse a completion body into a raw intent
pub fn parse_intent(response: &str) -> Result<ParsedIntent> {
    let json_str = extract_json(response)?;
    serde_json::from_str(json_str).map_err(|e| {
        CommandError::MalformedIntent(format!(
            "Failed to parse intent: {} - Response: {}",
            e, response
        ))
    })
}

/// Extract the JSON object from a completion (handles surrounding text)
///
/// An empty completion reads as an empty object.
fn extract_json(response: &str) -> Result<&str> {
    if response.trim().is_empty() {
        return Ok("{}");
    }
    let start = response
        .find('{')
        .ok_or_else(|| CommandError::MalformedIntent("No JSON found in response".into()))?;
    let end = response
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| {
            CommandError::MalformedIntent("No closing brace found in response".into())
        })?;
    Ok(&response[start..=end])
}

/// System instruction for intent extraction
pub const EXTRACT_SYSTEM_PROMPT: &str = r#"You interpret commands typed by tour operators into the back office of a travel agency.
Convert each command into a single JSON object. Respond with JSON only: no prose, no markdown.

AVAILABLE ACTIONS:
- generate_embarque_pdf: boarding list (lista de embarque) for one destination
- generate_motorista_pdf: driver sheet (lista do motorista) for one destination
- generate_hotel_pdf: hotel rooming list (lista do hotel) for one destination
- navigate: open a screen of the application

RULES:
- "destination" is the destination exactly as the operator wrote it.
- "destinationSearchTerms" lists the distinctive lowercase words of the destination,
  without articles or prepositions (do, da, de, the, of).
- Only generate_*_pdf actions carry a destination. navigate carries "targetPath".
- Known screens: "/" (home), "/destinos" (destinations), "/passageiros" (passengers),
  "/onibus" (buses), "/hoteis" (hotels), "/relatorios" (reports).
- If the command is not one of the actions above, set "understood" to false.

OUTPUT FORMAT:
{
  "understood": true,
  "actionType": "generate_embarque_pdf|generate_motorista_pdf|generate_hotel_pdf|navigate",
  "destination": "destination phrase or null",
  "destinationSearchTerms": ["keywords"],
  "targetPath": "/route or null",
  "confirmationMessage": "short confirmation for the operator"
}

Examples:
"gerar lista de embarque de Aparecida do Norte" -> {"understood": true, "actionType": "generate_embarque_pdf", "destination": "Aparecida do Norte", "destinationSearchTerms": ["aparecida", "norte"], "targetPath": null, "confirmationMessage": "Generating the boarding list for Aparecida do Norte"}
"pdf do motorista gramado" -> {"understood": true, "actionType": "generate_motorista_pdf", "destination": "gramado", "destinationSearchTerms": ["gramado"], "targetPath": null, "confirmationMessage": "Generating the driver sheet for Gramado"}
"lista do hotel para o natal luz" -> {"understood": true, "actionType": "generate_hotel_pdf", "destination": "natal luz", "destinationSearchTerms": ["natal", "luz"], "targetPath": null, "confirmationMessage": "Generating the hotel rooming list for Natal Luz"}
"abrir passageiros" -> {"understood": true, "actionType": "navigate", "destination": null, "destinationSearchTerms": [], "targetPath": "/passageiros", "confirmationMessage": "Opening passengers"}
"qual a previsao do tempo?" -> {"understood": false, "actionType": "", "destination": null, "destinationSearchTerms": [], "targetPath": null, "confirmationMessage": ""}
"#;
