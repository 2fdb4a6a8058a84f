//! 品詞による振り分け

use crate::cursor::Cursor;
use crate::errors::Result;
use crate::grammar::{inflection, Next, Step};
use crate::morpheme::PartOfSpeech;
use crate::node::Node;
use crate::predicates::{
    is_filler_idiom, is_nai_adjective_stem, is_nominalizer, is_sa_irregular_noun,
    is_special_character, symbol_type,
};

/// 現在の形態素の品詞に応じた規則を適用します。
pub(super) fn resolve(cursor: Cursor<'_>) -> Result<Step<'_>> {
    let m = cursor.current();
    match m.pos {
        PartOfSpeech::Filler => Ok(filler(cursor, PartOfSpeech::Filler)),
        // 感動詞に分割されたフィラーがあるため、先にフィラーとして確認する
        PartOfSpeech::Interjection => Ok(filler(cursor, PartOfSpeech::Interjection)),
        PartOfSpeech::Symbol => Ok(Step::atomic(Node::symbol(m, symbol_type(m)?))),
        PartOfSpeech::Noun => noun(cursor),
        pos if pos.is_inflecting() => inflection::resolve(cursor),
        _ => Ok(Step::atomic(Node::new(m))),
    }
}

fn filler(cursor: Cursor<'_>, pos: PartOfSpeech) -> Step<'_> {
    let m = cursor.current();
    match cursor.peek() {
        Some(next) if is_filler_idiom(m, next) => {
            Step::then(Node::retagged(m, PartOfSpeech::Filler), Next::Word)
        }
        _ => Step::atomic(Node::retagged(m, pos)),
    }
}

fn noun(cursor: Cursor<'_>) -> Result<Step<'_>> {
    let m = cursor.current();
    if is_special_character(&m.surface) {
        return Ok(Step::atomic(Node::symbol(m, symbol_type(m)?)));
    }
    if is_nominalizer(m) {
        let pos = if m.surface == "こと" {
            PartOfSpeech::Noun
        } else {
            PartOfSpeech::Particle
        };
        return Ok(Step::atomic(Node::retagged(m, pos)));
    }

    let takes_verb = cursor.peek().is_some_and(|next| {
        (is_sa_irregular_noun(m) && next.pos == PartOfSpeech::Verb && next.base_form == "する")
            || (is_nai_adjective_stem(m) && next.base_form == "ない")
    });
    if takes_verb {
        Ok(Step::then(Node::new(m), Next::Word))
    } else {
        Ok(Step::atomic(Node::new(m)))
    }
}
