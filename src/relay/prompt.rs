//! Prompt construction for diary generation.

use crate::types::Message;

/// Separator used when listing the words inside the Japanese prompt.
pub const WORD_SEPARATOR: &str = "、";

/// System message framing the assistant's job.
pub const SYSTEM_PROMPT: &str =
    "指定された単語を自然に使った日本語の日記を書くアシスタントです。";

/// User instruction embedding the exact count and the literal words.
pub fn diary_prompt(words: &[String]) -> String {
    format!(
        "以下の{}個の単語をすべて使って、一人称で短く自然な日本語の日記を書いてください。\n単語: {}\n\n日記:",
        words.len(),
        words.join(WORD_SEPARATOR)
    )
}

/// The two-message exchange sent upstream.
pub fn build_messages(words: &[String]) -> Vec<Message> {
    vec![Message::system(SYSTEM_PROMPT), Message::user(diary_prompt(words))]
}
