//! User-facing status line.

use crate::types::WordCount;
use std::fmt;

/// Outcome of the last user action, rendered as the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    MissingWords(WordCount),
    Busy,
    Generating,
    Generated,
    /// The relay succeeded but returned no text.
    GeneratedEmpty,
    /// Generation failed; `reason` is kept for logs and callers, the status
    /// line itself stays generic.
    GenerationFailed { reason: String },
    Copied,
    CopyFailed,
    Speaking,
    SpeechFailed,
    SpeechStopped,
    DraftSaved,
    DraftSaveFailed,
    NoDraft,
    DraftRestored,
    DraftLoadFailed,
    DraftCleared,
    DraftClearFailed,
}

impl Status {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Status::GenerationFailed { .. }
                | Status::CopyFailed
                | Status::SpeechFailed
                | Status::DraftSaveFailed
                | Status::DraftLoadFailed
                | Status::DraftClearFailed
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::MissingWords(count) => write!(f, "単語を{}個すべて入力して。", count),
            Status::Busy => f.write_str("生成中。終わるまで待って。"),
            Status::Generating => f.write_str("生成中..."),
            Status::Generated => f.write_str("生成完了。"),
            Status::GeneratedEmpty => f.write_str("生成は成功したが、本文が空。"),
            Status::GenerationFailed { .. } => {
                f.write_str("生成でエラー（リレー未起動／ネットワーク）。")
            }
            Status::Copied => f.write_str("コピーした。"),
            Status::CopyFailed => f.write_str("コピーに失敗した。"),
            Status::Speaking => f.write_str("読み上げ中..."),
            Status::SpeechFailed => f.write_str("読み上げに失敗した。"),
            Status::SpeechStopped => f.write_str("読み上げを停止した。"),
            Status::DraftSaved => f.write_str("下書きを保存した。"),
            Status::DraftSaveFailed => f.write_str("下書きの保存に失敗した。"),
            Status::NoDraft => f.write_str("下書きがない。"),
            Status::DraftRestored => f.write_str("下書きを復元した。"),
            Status::DraftLoadFailed => f.write_str("下書きの読み込みに失敗した。"),
            Status::DraftCleared => f.write_str("下書きを削除した。"),
            Status::DraftClearFailed => f.write_str("下書きの削除に失敗した。"),
        }
    }
}
