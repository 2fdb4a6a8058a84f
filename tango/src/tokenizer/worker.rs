//! 形態素解析の作業領域を保持するワーカー

use vibrato_rkyv::dictionary::LexType;
use vibrato_rkyv::tokenizer::worker::Worker as TokenizerWorker;

use crate::errors::Result;
use crate::morpheme::Morpheme;
use crate::tokenizer::MorphemeSource;

/// 語の分割を行うワーカー
///
/// トークナイザーのラティスなどの作業領域を保持し、呼び出しをまたいで再利用します。
/// 1つのワーカーを複数のスレッドで共有することはできません。
///
/// 語の分割には[`MorphemeSource`]のメソッドを使います。
pub struct Worker {
    inner: TokenizerWorker,
}

impl Worker {
    #[inline(always)]
    pub(crate) fn new(inner: TokenizerWorker) -> Self {
        Self { inner }
    }
}

impl MorphemeSource for Worker {
    fn morphemes(&mut self, text: &str) -> Result<Vec<Morpheme>> {
        self.inner.reset_sentence(text);
        self.inner.tokenize();
        let morphemes = self
            .inner
            .token_iter()
            .map(|t| {
                Morpheme::from_ipadic_feature(
                    t.surface(),
                    t.feature(),
                    t.lex_type() != LexType::Unknown,
                )
            })
            .collect::<Result<Vec<_>>>()?;
        log::trace!("tokenized {} morphemes from {} bytes", morphemes.len(), text.len());
        Ok(morphemes)
    }
}
