//! 形態素列上の読み取り専用カーソル

use crate::morpheme::Morpheme;

/// 形態素列の1つの位置を指すカーソル
///
/// カーソルは形態素列を借用するだけで、位置を進めるには新しいカーソルを作ります。
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    morphemes: &'a [Morpheme],
    index: usize,
}

impl<'a> Cursor<'a> {
    /// `index` を指すカーソルを作成します。範囲外の場合は `None` を返します。
    #[inline(always)]
    pub fn new(morphemes: &'a [Morpheme], index: usize) -> Option<Self> {
        (index < morphemes.len()).then_some(Self { morphemes, index })
    }

    /// 形態素列中の位置
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// 現在位置の形態素
    #[inline(always)]
    pub fn current(&self) -> &'a Morpheme {
        &self.morphemes[self.index]
    }

    /// 次の形態素。列の終端では `None` を返します。
    #[inline(always)]
    pub fn peek(&self) -> Option<&'a Morpheme> {
        self.morphemes.get(self.index + 1)
    }

    /// `k` 個先の形態素。
    #[inline(always)]
    pub fn peek_nth(&self, k: usize) -> Option<&'a Morpheme> {
        self.morphemes.get(self.index + k)
    }

    /// 直前の形態素。列の先頭では `None` を返します。
    #[inline(always)]
    pub fn previous(&self) -> Option<&'a Morpheme> {
        self.index.checked_sub(1).map(|i| &self.morphemes[i])
    }

    /// `k` だけ離れた位置のカーソルを作成します。
    ///
    /// 負の位置や終端以降を指す場合は `None` を返します。
    pub fn offset(&self, k: isize) -> Option<Self> {
        let index = self.index.checked_add_signed(k)?;
        Self::new(self.morphemes, index)
    }

    /// `k` だけ先へ進めたカーソルを作成します。終端以降では `None` を返します。
    #[inline(always)]
    pub fn advance(&self, k: usize) -> Option<Self> {
        Self::new(self.morphemes, self.index.checked_add(k)?)
    }
}
