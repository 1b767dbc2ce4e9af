//! Action compilation - turns validated intents into dispatcher actions

use crate::command::resolver::MatchCandidate;
use crate::command::result::{Action, CommandResult, NotificationLevel};
use crate::core::config::AssistantConfig;
use crate::core::types::{Destination, PdfKind};
use crate::llm::parser::Intent;

/// Example commands shown when a command is not understood
const EXAMPLE_COMMANDS: [&str; 4] = [
    "gerar lista de embarque de Aparecida do Norte",
    "pdf do motorista Gramado",
    "lista do hotel Natal Luz",
    "abrir passageiros",
];

/// Maps intents to the actions a dispatcher should perform
///
/// The compiler only describes effects; it never performs them.
pub struct ActionCompiler {
    trigger: String,
    default_navigate_path: String,
}

impl ActionCompiler {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            trigger: config.trigger.clone(),
            default_navigate_path: config.default_navigate_path.clone(),
        }
    }

    /// Compile a validated intent
    ///
    /// `resolved` is the best directory match for destination-bound intents
    /// and `active` the directory snapshot it was chosen from.
    pub fn compile(
        &self,
        intent: &Intent,
        resolved: Option<&MatchCandidate>,
        active: &[Destination],
    ) -> CommandResult {
        match intent {
            Intent::GeneratePdf { kind, query } => match resolved {
                Some(candidate) => self.generate_pdf(*kind, &candidate.destination),
                None => self.destination_not_found(&query.phrase, active),
            },
            Intent::Navigate {
                target_path,
                confirmation,
            } => self.navigate(target_path.as_deref(), confirmation),
            Intent::NotUnderstood => self.help(),
        }
    }

    fn generate_pdf(&self, kind: PdfKind, destination: &Destination) -> CommandResult {
        CommandResult::with_actions(
            vec![Action::generate_pdf(destination, kind)],
            format!("Generating the {} for {}.", kind.label(), destination.name),
        )
        .requiring_user_action()
    }

    fn navigate(&self, target_path: Option<&str>, confirmation: &str) -> CommandResult {
        let path = target_path.unwrap_or(&self.default_navigate_path);
        let message = if confirmation.is_empty() {
            format!("Opening {}.", path)
        } else {
            confirmation.to_string()
        };

        CommandResult::with_actions(
            vec![
                Action::navigate(path),
                Action::notification(NotificationLevel::Success, &message),
            ],
            message,
        )
    }

    /// No active destination matched; list the ones that exist
    pub fn destination_not_found(&self, phrase: &str, active: &[Destination]) -> CommandResult {
        let mut message = if phrase.is_empty() {
            "No destination was given.".to_string()
        } else {
            format!("No destination matched \"{}\".", phrase)
        };

        let names: Vec<&str> = active
            .iter()
            .filter(|d| d.active)
            .map(|d| d.name.as_str())
            .collect();

        if names.is_empty() {
            message.push_str(" There are no active destinations right now.");
        } else {
            message.push_str(" Active destinations:");
            for name in names {
                message.push_str("\n- ");
                message.push_str(name);
            }
        }

        CommandResult::reply(message)
    }

    /// Help text with example command syntaxes
    pub fn help(&self) -> CommandResult {
        let mut message = String::from("I did not understand that command. Try for example:");
        for example in EXAMPLE_COMMANDS {
            message.push_str(&format!("\n- {} {}", self.trigger, example));
        }
        CommandResult::reply(message)
    }

    /// The completion service failed or answered with something unusable
    pub fn extraction_failed(&self) -> CommandResult {
        CommandResult::reply("Could not understand the command right now. Please try again.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::resolver::DestinationQuery;
    use crate::command::result::ActionKind;
    use serde_json::json;

    fn compiler() -> ActionCompiler {
        ActionCompiler::new(&AssistantConfig::default())
    }

    fn directory() -> Vec<Destination> {
        vec![
            Destination::new("d1", "Aparecida do Norte"),
            Destination::new("d2", "Gramado Natal Luz"),
        ]
    }

    fn pdf_intent(kind: PdfKind, phrase: &str) -> Intent {
        Intent::GeneratePdf {
            kind,
            query: DestinationQuery::new(phrase, &[]),
        }
    }

    #[test]
    fn test_pdf_with_destination_emits_one_action() {
        let dir = directory();
        let candidate = MatchCandidate {
            destination: dir[1].clone(),
            score: 10,
        };

        let result = compiler().compile(
            &pdf_intent(PdfKind::Hotel, "natal"),
            Some(&candidate),
            &dir,
        );

        assert!(result.is_command);
        assert_eq!(result.requires_user_action, Some(true));
        assert_eq!(result.actions().len(), 1);
        let action = &result.actions()[0];
        assert_eq!(action.kind(), ActionKind::GeneratePdfDirect);
        assert_eq!(action.param("destinationId"), Some(&json!("d2")));
        assert_eq!(action.param("pdfKind"), Some(&json!("hotel")));
        assert!(result.message.contains("Gramado Natal Luz"));
    }

    #[test]
    fn test_pdf_without_destination_lists_directory() {
        let dir = directory();
        let result = compiler().compile(&pdf_intent(PdfKind::Embarque, "paris"), None, &dir);

        assert!(result.actions().is_empty());
        assert!(result.requires_user_action.is_none());
        assert!(result.message.contains("paris"));
        assert!(result.message.contains("Aparecida do Norte"));
        assert!(result.message.contains("Gramado Natal Luz"));
    }

    #[test]
    fn test_not_found_with_empty_directory() {
        let result = compiler().compile(&pdf_intent(PdfKind::Motorista, "paris"), None, &[]);
        assert!(result.actions().is_empty());
        assert!(result.message.contains("no active destinations"));
    }

    #[test]
    fn test_navigate_emits_navigate_then_notification() {
        let intent = Intent::Navigate {
            target_path: Some("/hoteis".into()),
            confirmation: "Opening hotels".into(),
        };
        let result = compiler().compile(&intent, None, &[]);

        let kinds: Vec<ActionKind> = result.actions().iter().map(|a| a.kind()).collect();
        assert_eq!(
            kinds,
            vec![ActionKind::Navigate, ActionKind::ShowNotification]
        );
        assert_eq!(result.actions()[0].param("path"), Some(&json!("/hoteis")));
        assert_eq!(result.actions()[1].param("level"), Some(&json!("success")));
        assert_eq!(result.message, "Opening hotels");
    }

    #[test]
    fn test_navigate_falls_back_to_default_path() {
        let intent = Intent::Navigate {
            target_path: None,
            confirmation: String::new(),
        };
        let result = compiler().compile(&intent, None, &[]);
        assert_eq!(result.actions()[0].param("path"), Some(&json!("/")));
        assert_eq!(result.message, "Opening /.");
    }

    #[test]
    fn test_not_understood_returns_examples() {
        let result = compiler().compile(&Intent::NotUnderstood, None, &[]);
        assert!(result.actions.is_none());
        assert!(result.message.contains("/cmd gerar lista de embarque"));
    }
}
