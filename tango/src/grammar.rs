//! 語境界の解決
//!
//! 現在の形態素から始まる1語が、後続の形態素をいくつ取り込むかを決めます。
//!
//! 規則は品詞ごと・活用形ごとに順序付きの候補を持ち、最初に当てはまった候補が
//! 採用されます。先読みは1〜3形態素で、バックトラックはしません。
//!
//! 各規則は[`Step`]を返します。`Step`は今取り込むノードと、その直後の形態素を
//! どう扱うか（[`Next`]）の組です。取り込みは常に連なりの末尾に追加されるため、
//! 規則同士が互いを呼び合う代わりに[`resolve_word`]のループが`Next`に従って
//! 次の規則を選びます。

mod inflection;
mod word;

use crate::cursor::Cursor;
use crate::errors::Result;
use crate::node::{Chain, Node};
use crate::predicates::is_separate_word;

/// 規則が取り込んだノードの直後の形態素の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Next {
    /// 語はここで終わる
    Stop,
    /// 直後の形態素から始まる語を品詞による規則で解決して取り込む
    Word,
    /// 直後の形態素が別の語でなく助動詞として振る舞う場合に限り取り込む
    Auxiliary,
}

/// 1つの規則の判断
#[derive(Debug)]
pub(crate) struct Step<'a> {
    nodes: Vec<Node<'a>>,
    next: Next,
}

impl<'a> Step<'a> {
    /// 1形態素だけからなる、後続を取り込まない判断
    pub(crate) fn atomic(node: Node<'a>) -> Self {
        Self::then(node, Next::Stop)
    }

    pub(crate) fn then(node: Node<'a>, next: Next) -> Self {
        Self { nodes: vec![node], next }
    }

    pub(crate) fn fused<I>(nodes: I, next: Next) -> Self
    where
        I: IntoIterator<Item = Node<'a>>,
    {
        Self {
            nodes: nodes.into_iter().collect(),
            next,
        }
    }
}

/// `cursor` の位置から始まる1語を解決します。
///
/// 返される連なりは少なくとも1つのノードを持ち、その長さが語の消費した形態素数です。
///
/// # エラー
///
/// 文法表に規則の無い活用形、または種類の決まらない記号に出会った場合は
/// [`TangoError`](crate::errors::TangoError)を返します。
pub fn resolve_word(cursor: Cursor<'_>) -> Result<Chain<'_>> {
    let mut chain = Chain::new();
    let mut cursor = cursor;
    let mut step = word::resolve(cursor)?;
    loop {
        let consumed = step.nodes.len();
        let next = step.next;
        log::trace!(
            "[{}] fused {:?}, then {:?}",
            cursor.index(),
            step.nodes.iter().map(|n| n.morpheme.surface.as_str()).collect::<Vec<_>>(),
            next,
        );
        chain.extend(step.nodes);

        let Some(following) = cursor.advance(consumed) else {
            break;
        };
        step = match next {
            Next::Stop => break,
            Next::Word => word::resolve(following)?,
            Next::Auxiliary => {
                if is_separate_word(following.previous(), following.current()) {
                    break;
                }
                match inflection::resolve_auxiliary(following)? {
                    Some(step) => step,
                    None => break,
                }
            }
        };
        cursor = following;
    }
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morpheme::{ConjugatedForm, PartOfSpeech};
    use crate::node::Detail;
    use crate::test_utils::morphemes;

    fn surfaces(chain: &Chain<'_>) -> Vec<String> {
        chain.iter().map(|n| n.morpheme.surface.clone()).collect()
    }

    #[test]
    fn test_resolve_single_noun() {
        let ms = morphemes(&[("学生", "名詞,一般,*,*,*,*,学生,ガクセイ,ガクセイ")]);
        let chain = resolve_word(Cursor::new(&ms, 0).unwrap()).unwrap();
        assert_eq!(surfaces(&chain), vec!["学生"]);
        assert_eq!(chain.root().unwrap().pos, PartOfSpeech::Noun);
    }

    #[test]
    fn test_resolve_starts_at_cursor() {
        let ms = morphemes(&[
            ("本", "名詞,一般,*,*,*,*,本,ホン,ホン"),
            ("を", "助詞,格助詞,一般,*,*,*,を,ヲ,ヲ"),
            ("読ん", "動詞,自立,*,*,五段・マ行,連用タ接続,読む,ヨン,ヨン"),
            ("だ", "助動詞,*,*,*,特殊・タ,基本形,だ,ダ,ダ"),
        ]);
        let chain = resolve_word(Cursor::new(&ms, 2).unwrap()).unwrap();
        assert_eq!(surfaces(&chain), vec!["読ん", "だ"]);
        assert_eq!(
            chain.root().unwrap().detail,
            Some(Detail::Conjugation(ConjugatedForm::ContinuativeTa))
        );
    }

    #[test]
    fn test_resolve_stops_before_separate_word() {
        let ms = morphemes(&[
            ("食べ", "動詞,自立,*,*,一段,連用形,食べる,タベ,タベ"),
            ("ます", "助動詞,*,*,*,特殊・マス,基本形,ます,マス,マス"),
            ("よ", "助詞,終助詞,*,*,*,*,よ,ヨ,ヨ"),
        ]);
        let chain = resolve_word(Cursor::new(&ms, 0).unwrap()).unwrap();
        assert_eq!(surfaces(&chain), vec!["食べ", "ます"]);
    }
}
