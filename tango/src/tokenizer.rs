//! 外部トークナイザーとの接続
//!
//! 形態素列の取得は[`MorphemeSource`]で抽象化されており、語の組み立ては
//! 取得元に依存しません。[`Segmenter`]は`vibrato-rkyv`のトークナイザーを使う
//! 標準の実装です。
//!
//! # 例
//!
//! ```no_run
//! use tango::{MorphemeSource, Segmenter};
//! use vibrato_rkyv::{Dictionary, LoadMode, Tokenizer};
//!
//! let dict = Dictionary::from_path("path/to/ipadic.dic", LoadMode::Validate)?;
//! let segmenter = Segmenter::new(Tokenizer::new(dict));
//! let mut worker = segmenter.new_worker();
//!
//! for word in worker.segment_as_words("本を読んだ")? {
//!     println!("{}\t{:?}", word.surface(), word.pos());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod worker;

use std::sync::Arc;

use vibrato_rkyv::{Dictionary, Tokenizer};

use crate::errors::Result;
use crate::morpheme::Morpheme;
use crate::sentence::{segment_sentences, segment_words, Sentence};
use crate::tokenizer::worker::Worker;
use crate::word::Word;

/// 入力テキストを形態素列に分割するもの
///
/// 実装は同じテキストに対して常に同じ形態素列を返す必要があります。
pub trait MorphemeSource {
    /// `text` を形態素列に分割します。
    fn morphemes(&mut self, text: &str) -> Result<Vec<Morpheme>>;

    /// `text` を語の列に分割します。
    fn segment_as_words(&mut self, text: &str) -> Result<Vec<Word>> {
        let morphemes = self.morphemes(text)?;
        segment_words(&morphemes)
    }

    /// `text` を文の列に分割します。
    fn segment_as_sentences(&mut self, text: &str) -> Result<Vec<Sentence>> {
        let morphemes = self.morphemes(text)?;
        segment_sentences(&morphemes)
    }
}

/// IPADIC形式の辞書を持つトークナイザーで語を分割するもの
///
/// 辞書は`Arc`で共有されるため、複製は安価です。スレッドごとに
/// [`Segmenter::new_worker`]でワーカーを作成してください。
#[derive(Clone)]
pub struct Segmenter {
    tokenizer: Tokenizer,
}

impl Segmenter {
    /// 設定済みのトークナイザーから作成します。
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// 共有された辞書から既定の設定で作成します。
    pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
        Self::new(Tokenizer::from_shared_dictionary(dict))
    }

    /// 内部のトークナイザー
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// 新しいワーカーを作成します。
    ///
    /// ワーカーはトークナイザーの作業領域を保持し、呼び出しをまたいで再利用します。
    pub fn new_worker(&self) -> Worker {
        Worker::new(self.tokenizer.new_worker())
    }

    /// 一時的なワーカーで `text` を語の列に分割します。
    ///
    /// 繰り返し呼び出す場合は[`Segmenter::new_worker`]で作成したワーカーを使ってください。
    pub fn segment_as_words(&self, text: &str) -> Result<Vec<Word>> {
        self.new_worker().segment_as_words(text)
    }

    /// 一時的なワーカーで `text` を文の列に分割します。
    pub fn segment_as_sentences(&self, text: &str) -> Result<Vec<Sentence>> {
        self.new_worker().segment_as_sentences(text)
    }
}
