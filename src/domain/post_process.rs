//! Tool-specific derived answers, computed after all prompts resolve.

use super::answers::{AnswerMap, AnswerValue};

/// Derives extra keys from already-collected answers.
pub type PostProcessor = fn(&mut AnswerMap);

/// Tool name to post-processing rule. Tools not listed get [`no_op`].
const RULES: &[(&str, PostProcessor)] = &[("borgmatic", borgmatic_encryption_arg)];

pub fn post_processor_for(tool: &str) -> PostProcessor {
    RULES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(tool))
        .map(|(_, rule)| *rule)
        .unwrap_or(no_op)
}

pub fn no_op(_answers: &mut AnswerMap) {}

/// `encryption_arg` for `borg init`, from `encryption_passphrase`.
fn borgmatic_encryption_arg(answers: &mut AnswerMap) {
    let passphrase =
        answers.get("encryption_passphrase").map(AnswerValue::display).unwrap_or_default();

    let arg = if passphrase.is_empty() {
        "--encryption=none".to_string()
    } else {
        format!("--encryption={}", shell_quote(&passphrase))
    };
    answers.insert("encryption_arg", AnswerValue::Text(arg));
}

/// Single-quote for POSIX shells.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
