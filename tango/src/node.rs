//! 語を構成する形態素の連なり
//!
//! 1つの語に取り込まれた形態素は、取り込まれた順に[`Chain`]へ追加されます。
//! 連なりは常に所有された配列で、共有も循環も起こりません。

use crate::morpheme::{ConjugatedForm, Morpheme, PartOfSpeech, SymbolType};

/// ノードに付く解決済みの詳細情報
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detail {
    /// 解決済みの活用形
    Conjugation(ConjugatedForm),
    /// 解決済みの記号の種類
    Symbol(SymbolType),
}

/// 語に参加する1つの形態素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node<'a> {
    /// 解決済みの品詞（形態素の品詞と異なる場合がある）
    pub pos: PartOfSpeech,
    /// 元の形態素
    pub morpheme: &'a Morpheme,
    /// 解決済みの詳細情報
    pub detail: Option<Detail>,
}

impl<'a> Node<'a> {
    /// 形態素の品詞と活用形をそのまま使ってノードを作ります。
    pub fn new(morpheme: &'a Morpheme) -> Self {
        Self {
            pos: morpheme.pos,
            morpheme,
            detail: morpheme.conjugated_form.map(Detail::Conjugation),
        }
    }

    /// 品詞を付け替えたノードを作ります。
    pub fn retagged(morpheme: &'a Morpheme, pos: PartOfSpeech) -> Self {
        Self { pos, ..Self::new(morpheme) }
    }

    /// 記号の種類を持つノードを作ります。
    pub fn symbol(morpheme: &'a Morpheme, kind: SymbolType) -> Self {
        Self {
            pos: PartOfSpeech::Symbol,
            morpheme,
            detail: Some(Detail::Symbol(kind)),
        }
    }

    /// 活用形を解決し直したノードを作ります。
    pub fn conjugated(morpheme: &'a Morpheme, form: ConjugatedForm) -> Self {
        Self {
            detail: Some(Detail::Conjugation(form)),
            ..Self::new(morpheme)
        }
    }
}

/// 1つの語として取り込まれたノードの並び
///
/// 長さは語が消費した形態素の数と常に一致します。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> Chain<'a> {
    /// 空の連なりを作ります。
    pub fn new() -> Self {
        Self::default()
    }

    /// 先頭のノード
    pub fn root(&self) -> Option<&Node<'a>> {
        self.nodes.first()
    }

    /// 消費した形態素の数
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// ノードを持たないかどうか
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// ノードのイテレータ
    pub fn iter(&self) -> std::slice::Iter<'_, Node<'a>> {
        self.nodes.iter()
    }
}

impl<'a> Extend<Node<'a>> for Chain<'a> {
    fn extend<I: IntoIterator<Item = Node<'a>>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl<'a, 'c> IntoIterator for &'c Chain<'a> {
    type Item = &'c Node<'a>;
    type IntoIter = std::slice::Iter<'c, Node<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
