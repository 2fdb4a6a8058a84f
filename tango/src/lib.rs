//! # tango
//!
//! tangoは、IPADIC形式の辞書を使う形態素解析器の出力を、言語的なまとまりを持つ
//! 語に組み立て直すライブラリです。
//!
//! ## 概要
//!
//! 形態素解析器は「食べ」「て」「いる」のように活用語尾や助動詞を細かく分割します。
//! tangoは語幹・助動詞・補助動詞・接尾辞・コピュラを1つの語にまとめ、各トークンに
//! 解決済みの活用形や記号の種類を付与します。
//!
//! 語境界は品詞ごと・活用形ごとの順序付きの規則で決まり、先読みは1〜3形態素です。
//! 同じ形態素列からは常に同じ語の列が得られます。
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tango::{MorphemeSource, PartOfSpeech, Segmenter};
//! use vibrato_rkyv::{Dictionary, SystemDictionaryBuilder, Tokenizer};
//!
//! let lexicon_csv = "食べ,0,0,10,動詞,自立,*,*,一段,連用形,食べる,タベ,タベ
//! て,0,0,10,助詞,接続助詞,*,*,*,*,て,テ,テ
//! いる,0,0,10,動詞,非自立,*,*,一段,基本形,いる,イル,イル";
//! let matrix_def = "1 1\n0 0 0";
//! let char_def = "DEFAULT 0 1 0";
//! let unk_def = "DEFAULT,0,0,100,名詞,一般,*,*,*,*,*";
//!
//! let dict = SystemDictionaryBuilder::from_readers(
//!     lexicon_csv.as_bytes(),
//!     matrix_def.as_bytes(),
//!     char_def.as_bytes(),
//!     unk_def.as_bytes(),
//! )?;
//!
//! let segmenter = Segmenter::new(Tokenizer::new(Dictionary::from_inner(dict)));
//! let mut worker = segmenter.new_worker();
//!
//! let words = worker.segment_as_words("食べている")?;
//! assert_eq!(words.len(), 1);
//! assert_eq!(words[0].surface(), "食べている");
//! assert_eq!(words[0].pos(), PartOfSpeech::Verb);
//! assert_eq!(words[0].base_form(), Some("食べる"));
//! assert_eq!(words[0].len(), 3);
//! # Ok(())
//! # }
//! ```

/// [`Segmenter`]の設定
pub mod config;

/// 形態素列上のカーソル
pub mod cursor;

/// エラー型の定義
pub mod errors;

/// 語境界を決める文法規則
pub mod grammar;

/// 形態素と品詞などのタグ
pub mod morpheme;

/// 語を構成するノードの連なり
pub mod node;

/// 形態素に対する文法上の判定
pub mod predicates;

/// 語・文への分割
pub mod sentence;

/// 外部トークナイザーとの接続
pub mod tokenizer;

/// 内部ユーティリティ関数
pub mod utils;

/// 語とトークン
pub mod word;

#[cfg(test)]
mod test_utils;

// Re-exports
pub use config::{DictionarySource, SegmenterConfig};
pub use errors::{Result, TangoError};
pub use morpheme::{ConjugatedForm, Morpheme, PartOfSpeech, SymbolType};
pub use sentence::{segment_sentences, segment_words, Sentence};
pub use tokenizer::worker::Worker;
pub use tokenizer::{MorphemeSource, Segmenter};
pub use word::{Token, Word};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
