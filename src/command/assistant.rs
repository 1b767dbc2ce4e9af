//! Per-command pipeline
//!
//! raw text -> CommandNormalizer -> IntentExtractor -> DestinationResolver
//! -> ActionCompiler -> CommandResult
//!
//! Every failure along the way becomes a normal `CommandResult`.

use crate::command::compiler::ActionCompiler;
use crate::command::normalizer::CommandNormalizer;
use crate::command::resolver::DestinationResolver;
use crate::command::result::CommandResult;
use crate::core::config::AssistantConfig;
use crate::core::types::Destination;
use crate::directory::DestinationDirectory;
use crate::llm::parser::{Intent, IntentExtractor};
use crate::llm::CompletionService;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Interprets operator commands into action lists
///
/// Holds no per-command state, so one instance can serve concurrent
/// commands behind an `Arc`.
pub struct CommandAssistant {
    normalizer: CommandNormalizer,
    extractor: IntentExtractor,
    directory: Arc<dyn DestinationDirectory>,
    compiler: ActionCompiler,
}

impl CommandAssistant {
    pub fn new(
        config: &AssistantConfig,
        completion: Arc<dyn CompletionService>,
        directory: Arc<dyn DestinationDirectory>,
    ) -> Self {
        Self {
            normalizer: CommandNormalizer::new(config.trigger.clone()),
            extractor: IntentExtractor::new(completion),
            directory,
            compiler: ActionCompiler::new(config),
        }
    }

    pub fn normalizer(&self) -> &CommandNormalizer {
        &self.normalizer
    }

    /// Interpret one raw command. Never fails.
    #[tracing::instrument(skip(self), fields(request_id = %Uuid::new_v4()))]
    pub async fn handle(&self, raw: &str) -> CommandResult {
        let command = self.normalizer.normalize(raw);
        if command.is_empty() {
            return self.compiler.help();
        }

        let parsed = match self.extractor.extract(command).await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Intent extraction failed");
                return self.compiler.extraction_failed();
            }
        };

        let intent = parsed.validate();
        let result = match &intent {
            Intent::GeneratePdf { query, .. } => {
                let active = self.active_destinations().await;
                let resolved = DestinationResolver::new(&active).resolve(query);
                match &resolved {
                    Some(candidate) => info!(
                        destination = %candidate.destination.name,
                        score = candidate.score,
                        "Destination resolved"
                    ),
                    None => info!(phrase = %query.phrase, "No destination matched"),
                }
                self.compiler.compile(&intent, resolved.as_ref(), &active)
            }
            Intent::Navigate { .. } | Intent::NotUnderstood => {
                self.compiler.compile(&intent, None, &[])
            }
        };

        info!(
            action_type = %parsed.action_type,
            actions = result.actions().len(),
            "Command compiled"
        );
        result
    }

    /// Fresh directory snapshot. An unreachable directory reads as empty.
    async fn active_destinations(&self) -> Vec<Destination> {
        match self.directory.list_active_destinations().await {
            Ok(destinations) => destinations.into_iter().filter(|d| d.active).collect(),
            Err(e) => {
                warn!(error = %e, "Destination directory unavailable");
                Vec::new()
            }
        }
    }
}
