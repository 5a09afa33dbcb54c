//! Shortcut-assignment prompter for commands with no bound shortcut.
//!
//! Every Nth mouse trigger of an unbound command offers to open the host's
//! keymap editor for it. The prompt is modal and blocks the dispatch path
//! on purpose: it is user-facing, user-triggered, and rare by construction.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::command::{Command, CommandId};
use crate::stats::UsageStats;
use crate::widget::WindowHandle;

const PROMPT_TITLE: &str = "Keyboard shortcut suggestion";

/// Modal yes/no prompt primitive, supplied by the host.
pub trait PromptService: Send + Sync {
    fn confirm(&self, anchor: &WindowHandle, title: &str, message: &str) -> Result<bool>;
}

/// The host's shortcut-binding dialog, invoked with a command identifier.
pub trait KeymapEditor: Send + Sync {
    fn open_for(&self, anchor: &WindowHandle, command: &CommandId) -> Result<()>;
}

/// Tracks unbound-command usage and periodically offers to bind a shortcut.
pub struct ShortcutAssignmentPrompter {
    stats: Arc<UsageStats>,
    prompts: Arc<dyn PromptService>,
    keymap: Arc<dyn KeymapEditor>,
    /// Prompt on every Nth use; zero disables prompting.
    propose_every: u64,
}

impl ShortcutAssignmentPrompter {
    pub fn new(
        stats: Arc<UsageStats>,
        prompts: Arc<dyn PromptService>,
        keymap: Arc<dyn KeymapEditor>,
        propose_every: u64,
    ) -> Self {
        Self {
            stats,
            prompts,
            keymap,
            propose_every,
        }
    }

    /// Record one mouse use of an unbound command and, on every Nth use,
    /// offer to assign a shortcut. External dialog failures are swallowed so
    /// they cannot destabilize the event-dispatch path.
    pub fn record_use(&self, command: &Command, anchor: &WindowHandle) {
        let count = self.stats.record_unbound_use(&command.id);
        if self.propose_every == 0 || count % self.propose_every != 0 {
            return;
        }

        let label = command.prompt_label();
        let message = format!(
            "Would you like to assign a shortcut to '{label}'? \
             It was triggered {count} time(s) with the mouse."
        );
        match self.prompts.confirm(anchor, PROMPT_TITLE, &message) {
            Ok(true) => {
                info!(command = %command.id, "Opening keymap editor from prompt");
                if let Err(e) = self.keymap.open_for(anchor, &command.id) {
                    warn!(command = %command.id, error = %e, "Keymap editor failed");
                }
            }
            Ok(false) => {}
            Err(e) => {
                warn!(command = %command.id, error = %e, "Assignment prompt failed");
            }
        }
    }
}

#[cfg(test)]
pub use test_support::{RecordingKeymap, ScriptedPrompts};

#[cfg(test)]
mod test_support {
    use super::*;
    use parking_lot::Mutex;

    /// Prompt double with a fixed answer; records every message shown.
    pub struct ScriptedPrompts {
        pub answer: Result<bool, String>,
        pub shown: Mutex<Vec<String>>,
    }

    impl ScriptedPrompts {
        pub fn answering(answer: bool) -> Self {
            Self {
                answer: Ok(answer),
                shown: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(error: &str) -> Self {
            Self {
                answer: Err(error.to_string()),
                shown: Mutex::new(Vec::new()),
            }
        }

        pub fn prompt_count(&self) -> usize {
            self.shown.lock().len()
        }
    }

    impl PromptService for ScriptedPrompts {
        fn confirm(&self, _anchor: &WindowHandle, _title: &str, message: &str) -> Result<bool> {
            self.shown.lock().push(message.to_string());
            match &self.answer {
                Ok(answer) => Ok(*answer),
                Err(e) => Err(anyhow::anyhow!(e.clone())),
            }
        }
    }

    /// Keymap editor double recording which commands it was opened for.
    #[derive(Default)]
    pub struct RecordingKeymap {
        pub opened: Mutex<Vec<CommandId>>,
        pub fail: bool,
    }

    impl RecordingKeymap {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn opened_for(&self) -> Vec<CommandId> {
            self.opened.lock().clone()
        }
    }

    impl KeymapEditor for RecordingKeymap {
        fn open_for(&self, _anchor: &WindowHandle, command: &CommandId) -> Result<()> {
            if self.fail {
                anyhow::bail!("keymap dialog unavailable");
            }
            self.opened.lock().push(command.clone());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter_with(
        answer: bool,
        propose_every: u64,
    ) -> (
        ShortcutAssignmentPrompter,
        Arc<ScriptedPrompts>,
        Arc<RecordingKeymap>,
        Arc<UsageStats>,
    ) {
        let stats = Arc::new(UsageStats::new());
        let prompts = Arc::new(ScriptedPrompts::answering(answer));
        let keymap = Arc::new(RecordingKeymap::new());
        (
            ShortcutAssignmentPrompter::new(
                stats.clone(),
                prompts.clone(),
                keymap.clone(),
                propose_every,
            ),
            prompts,
            keymap,
            stats,
        )
    }

    #[test]
    fn prompts_on_every_exact_multiple_of_k() {
        let (prompter, prompts, _, _) = prompter_with(false, 5);
        let command = Command::new("tools.generate", "Generate");
        let anchor = WindowHandle::new(1);

        for use_index in 1..=15u64 {
            prompter.record_use(&command, &anchor);
            let expected = (use_index / 5) as usize;
            assert_eq!(
                prompts.prompt_count(),
                expected,
                "after {use_index} uses"
            );
        }
    }

    #[test]
    fn k_zero_never_prompts() {
        let (prompter, prompts, _, stats) = prompter_with(true, 0);
        let command = Command::new("tools.generate", "Generate");
        let anchor = WindowHandle::new(1);

        for _ in 0..10 {
            prompter.record_use(&command, &anchor);
        }
        assert_eq!(prompts.prompt_count(), 0);
        // Usage is still recorded even when prompting is disabled.
        assert_eq!(stats.unbound_count(&command.id), 10);
    }

    #[test]
    fn yes_opens_the_keymap_editor_for_the_command() {
        let (prompter, _, keymap, _) = prompter_with(true, 1);
        let command = Command::new("tools.generate", "Generate");
        prompter.record_use(&command, &WindowHandle::new(1));

        assert_eq!(keymap.opened_for(), vec![CommandId::new("tools.generate")]);
    }

    #[test]
    fn no_leaves_the_keymap_editor_closed() {
        let (prompter, prompts, keymap, _) = prompter_with(false, 1);
        let command = Command::new("tools.generate", "Generate");
        prompter.record_use(&command, &WindowHandle::new(1));

        assert_eq!(prompts.prompt_count(), 1);
        assert!(keymap.opened_for().is_empty());
    }

    #[test]
    fn prompt_message_prefers_description_over_text() {
        let (prompter, prompts, _, _) = prompter_with(false, 1);
        let command =
            Command::new("tools.generate", "Generate").with_description("Generate boilerplate");
        prompter.record_use(&command, &WindowHandle::new(1));

        let shown = prompts.shown.lock();
        assert!(shown[0].contains("Generate boilerplate"));
    }

    #[test]
    fn failing_prompt_is_swallowed() {
        let stats = Arc::new(UsageStats::new());
        let prompts = Arc::new(ScriptedPrompts::failing("dialog exploded"));
        let keymap = Arc::new(RecordingKeymap::new());
        let prompter =
            ShortcutAssignmentPrompter::new(stats.clone(), prompts, keymap.clone(), 1);

        let command = Command::new("tools.generate", "Generate");
        prompter.record_use(&command, &WindowHandle::new(1));

        assert!(keymap.opened_for().is_empty());
        assert_eq!(stats.unbound_count(&command.id), 1);
    }

    #[test]
    fn failing_keymap_editor_is_swallowed() {
        let stats = Arc::new(UsageStats::new());
        let prompts = Arc::new(ScriptedPrompts::answering(true));
        let keymap = Arc::new(RecordingKeymap {
            fail: true,
            ..RecordingKeymap::default()
        });
        let prompter = ShortcutAssignmentPrompter::new(stats, prompts, keymap, 1);

        // Must not panic or propagate.
        prompter.record_use(&Command::new("tools.generate", "Generate"), &WindowHandle::new(1));
    }
}
