//! 形態素列の語・文への分割

use std::ops::Range;

use crate::cursor::Cursor;
use crate::errors::Result;
use crate::grammar::resolve_word;
use crate::morpheme::Morpheme;
use crate::word::Word;

/// 語の列と、それが覆う形態素列中の範囲
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sentence {
    words: Vec<Word>,
    range: Range<usize>,
}

impl Sentence {
    /// 文を構成する語
    #[inline(always)]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// 形態素列中の範囲 `[start, end)`
    #[inline(always)]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    #[inline(always)]
    pub const fn start(&self) -> usize {
        self.range.start
    }

    #[inline(always)]
    pub const fn end(&self) -> usize {
        self.range.end
    }

    /// 語の数
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// 語の表層形を連結した文字列
    pub fn text(&self) -> String {
        self.words.iter().map(Word::surface).collect()
    }
}

/// 形態素列を先頭から語に分割します。
///
/// 各語が消費した形態素数だけ位置を進め、列の終端に達するまで繰り返します。
/// 返される語のトークン数の合計は常に形態素数と一致します。
///
/// # エラー
///
/// 文法表が扱えない形態素に出会った場合は、その時点でエラーを返します。
pub fn segment_words(morphemes: &[Morpheme]) -> Result<Vec<Word>> {
    let mut words = vec![];
    let mut index = 0;
    while let Some(cursor) = Cursor::new(morphemes, index) {
        let chain = resolve_word(cursor)?;
        debug_assert!(!chain.is_empty());
        let word = Word::from(&chain);
        log::debug!("[{index}..{}] {} ({})", index + chain.len(), word, word.pos());
        index += chain.len();
        words.push(word);
    }
    Ok(words)
}

/// 形態素列を文に分割します。
///
/// 文境界の検出は行わず、空でない入力全体を1つの文とします。
/// 空の入力に対しては文を返しません。
pub fn segment_sentences(morphemes: &[Morpheme]) -> Result<Vec<Sentence>> {
    if morphemes.is_empty() {
        return Ok(vec![]);
    }
    let words = segment_words(morphemes)?;
    Ok(vec![Sentence {
        words,
        range: 0..morphemes.len(),
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::morphemes;

    #[test]
    fn test_segment_sentences() {
        let ms = morphemes(&[
            ("本", "名詞,一般,*,*,*,*,本,ホン,ホン"),
            ("を", "助詞,格助詞,一般,*,*,*,を,ヲ,ヲ"),
            ("読ん", "動詞,自立,*,*,五段・マ行,連用タ接続,読む,ヨン,ヨン"),
            ("だ", "助動詞,*,*,*,特殊・タ,基本形,だ,ダ,ダ"),
            ("。", "記号,句点,*,*,*,*,。,。,。"),
        ]);
        let sentences = segment_sentences(&ms).unwrap();
        assert_eq!(sentences.len(), 1);

        let s = &sentences[0];
        assert_eq!(s.range(), 0..5);
        assert_eq!(s.text(), "本を読んだ。");
        let surfaces: Vec<&str> = s.words().iter().map(Word::surface).collect();
        assert_eq!(surfaces, vec!["本", "を", "読んだ", "。"]);
    }

    #[test]
    fn test_segment_empty() {
        assert!(segment_words(&[]).unwrap().is_empty());
        assert!(segment_sentences(&[]).unwrap().is_empty());
    }
}
