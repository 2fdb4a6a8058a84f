//! エラー型の定義
//!
//! このモジュールは、tangoライブラリで使用されるすべてのエラー型を定義します。
//! 文法表が扱えない辞書エントリに遭遇した場合は致命的な欠陥として扱い、
//! 呼び出し元へそのまま返します。

use std::error::Error;
use std::fmt;

/// tango専用のResult型
///
/// エラー型としてデフォルトで[`TangoError`]を使用します。
pub type Result<T, E = TangoError> = std::result::Result<T, E>;

/// tangoのエラー型
#[derive(Debug, thiserror::Error)]
pub enum TangoError {
    /// 無効なフォーマットエラー
    ///
    /// 素性文字列の列数が足りないなど、入力の形が想定と異なる場合に発生します。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 辞書に存在しない活用形タグ
    ///
    /// 素性文字列を形態素へ変換する時点で検出されます。
    #[error("unknown conjugated form tag: '{0}'")]
    UnknownConjugatedForm(String),

    /// 文法表が扱えない活用形
    ///
    /// 動詞・形容詞・助動詞の活用形による振り分けに、対応する規則が無い形態素が
    /// 到達した場合に発生します。
    #[error("no grammar rule for conjugated form {form} of '{surface}'")]
    UnhandledConjugatedForm {
        /// 問題の形態素の表層形
        surface: String,
        /// 活用形タグ（無い場合は `*`）
        form: String,
    },

    /// 記号の種類が決まらない
    ///
    /// 品詞細分類からも文字表からも記号の種類を決められなかった場合に発生します。
    #[error("no symbol category for '{surface}' (details: {details})")]
    UnmappedSymbol {
        /// 問題の形態素の表層形
        surface: String,
        /// 品詞細分類をカンマ区切りにしたもの
        details: String,
    },

    /// トークナイザーのエラー
    ///
    /// [`VibratoError`](vibrato_rkyv::errors::VibratoError)のエラーバリアント。
    #[error(transparent)]
    Tokenizer(#[from] vibrato_rkyv::errors::VibratoError),

    /// I/Oエラー
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TangoError {
    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) fn unhandled_conjugated_form<S>(surface: &str, form: S) -> Self
    where
        S: Into<String>,
    {
        Self::UnhandledConjugatedForm {
            surface: surface.to_string(),
            form: form.into(),
        }
    }

    pub(crate) fn unmapped_symbol(surface: &str, details: &[String]) -> Self {
        Self::UnmappedSymbol {
            surface: surface.to_string(),
            details: details.join(","),
        }
    }

    /// 文法表の欠落を示す致命的なエラーかどうかを返します。
    pub fn is_grammar_defect(&self) -> bool {
        matches!(
            self,
            Self::UnhandledConjugatedForm { .. } | Self::UnmappedSymbol { .. }
        )
    }
}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}
