//! Trigger-token handling for raw chat lines

/// Strips the trigger token from operator input
#[derive(Debug, Clone)]
pub struct CommandNormalizer {
    trigger: String,
}

impl CommandNormalizer {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
        }
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Whether a raw line is addressed to the assistant
    pub fn is_command(&self, raw: &str) -> bool {
        self.strip_trigger(raw.trim()).is_some()
    }

    /// Remove one leading trigger token (if any) and surrounding whitespace
    pub fn normalize<'a>(&self, raw: &'a str) -> &'a str {
        let text = raw.trim();
        self.strip_trigger(text).unwrap_or(text).trim()
    }

    /// The trigger only counts as a whole token: `/cmdx` is not `/cmd`.
    fn strip_trigger<'a>(&self, text: &'a str) -> Option<&'a str> {
        let head = text.get(..self.trigger.len())?;
        if !head.eq_ignore_ascii_case(&self.trigger) {
            return None;
        }
        let rest = &text[self.trigger.len()..];
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            Some(rest)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_trigger_and_whitespace() {
        let normalizer = CommandNormalizer::new("/cmd");
        assert_eq!(
            normalizer.normalize("  /cmd   gerar embarque gramado  "),
            "gerar embarque gramado"
        );
    }

    #[test]
    fn test_trigger_is_case_insensitive() {
        let normalizer = CommandNormalizer::new("/cmd");
        assert_eq!(normalizer.normalize("/CMD abrir destinos"), "abrir destinos");
        assert!(normalizer.is_command("/Cmd abrir destinos"));
    }

    #[test]
    fn test_trigger_must_be_whole_token() {
        let normalizer = CommandNormalizer::new("/cmd");
        assert_eq!(normalizer.normalize("/cmdx abrir"), "/cmdx abrir");
        assert!(!normalizer.is_command("/cmdx abrir"));
    }

    #[test]
    fn test_text_without_trigger_is_trimmed() {
        let normalizer = CommandNormalizer::new("/cmd");
        assert_eq!(normalizer.normalize("\tabrir hoteis\n"), "abrir hoteis");
        assert!(!normalizer.is_command("abrir hoteis"));
    }

    #[test]
    fn test_bare_trigger_normalizes_to_empty() {
        let normalizer = CommandNormalizer::new("/cmd");
        assert_eq!(normalizer.normalize("/cmd"), "");
        assert!(normalizer.is_command(" /cmd "));
    }

    #[test]
    fn test_only_one_trigger_is_removed() {
        let normalizer = CommandNormalizer::new("@bot");
        assert_eq!(normalizer.normalize("@bot @bot oi"), "@bot oi");
    }

    #[test]
    fn test_multibyte_input_shorter_than_trigger() {
        let normalizer = CommandNormalizer::new("/comando");
        assert_eq!(normalizer.normalize("ção"), "ção");
    }
}
