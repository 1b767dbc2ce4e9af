//! Command interpretation pipeline
//!
//! Converts operator text into dispatcher actions:
//! text -> CommandNormalizer -> IntentExtractor -> DestinationResolver
//! -> ActionCompiler -> CommandResult

pub mod assistant;
pub mod compiler;
pub mod normalizer;
pub mod resolver;
pub mod result;

pub use assistant::CommandAssistant;
pub use compiler::ActionCompiler;
pub use normalizer::CommandNormalizer;
pub use resolver::{DestinationQuery, DestinationResolver, MatchCandidate};
pub use result::{Action, ActionKind, CommandResult, NotificationLevel};
