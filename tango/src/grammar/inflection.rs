//! 用言（動詞・助動詞・形容詞）の活用形による振り分け

use crate::cursor::Cursor;
use crate::errors::{Result, TangoError};
use crate::grammar::{Next, Step};
use crate::morpheme::{ConjugatedForm, Morpheme, PartOfSpeech};
use crate::node::Node;
use crate::predicates::{
    is_auxiliary_verb, is_copula, is_negative_auxiliary, is_past_auxiliary,
    is_polite_auxiliary, is_sentence_ending_particle, is_separate_word, is_suffix,
    is_te_particle,
};

/// 活用形に応じた規則を適用します。
///
/// # エラー
///
/// 活用形を持たない、あるいは辞書が出力しないはずの活用形を持つ用言に対しては
/// [`TangoError::UnhandledConjugatedForm`]を返します。
pub(super) fn resolve(cursor: Cursor<'_>) -> Result<Step<'_>> {
    let m = cursor.current();
    let Some(form) = m.conjugated_form else {
        return Err(unhandled(m, "*"));
    };

    use ConjugatedForm::*;
    match form {
        Plain | ModernPlain | EuphonicPlain | ClassicalPlain | ConditionalContraction1
        | ConditionalContraction2 | ImperativeE | ImperativeI | ImperativeRo | ImperativeYo
        | Nominal | NominalSpecial | NominalSpecial2 => Ok(Step::atomic(Node::new(m))),
        Conditional => Ok(conditional(cursor)),
        Continuative | ContinuativeTa | ContinuativeNi | ContinuativeGozai | Garu | Irrealis
        | IrrealisU | IrrealisNu | IrrealisReru | IrrealisSpecial => Ok(stem(cursor)),
        ContinuativeTe | ContinuativeDe => Ok(te_form(cursor)),
        ContractedRequest => Err(unhandled(m, form.as_str())),
    }
}

/// 助動詞として後続する形態素を解決します。
///
/// 助動詞として振る舞わない場合は `None` を返し、呼び出し側の語はそこで終わります。
pub(super) fn resolve_auxiliary(cursor: Cursor<'_>) -> Result<Option<Step<'_>>> {
    let m = cursor.current();
    if !is_auxiliary_verb(m) {
        return Ok(None);
    }
    let next = cursor.peek();

    if next.is_some_and(is_suffix) {
        return Ok(Some(Step::then(Node::new(m), Next::Word)));
    }
    if is_polite_auxiliary(m) {
        return Ok(Some(polite(cursor)));
    }
    if is_past_auxiliary(m) {
        return Ok(Some(Step::atomic(Node::new(m))));
    }
    if is_negative_auxiliary(m) {
        // 〜ずに
        return Ok(Some(match next {
            Some(n) if m.surface == "ず" && is_particle(n, "に") => {
                Step::fused([Node::new(m), Node::new(n)], Next::Stop)
            }
            _ => Step::atomic(Node::new(m)),
        }));
    }
    resolve(cursor).map(Some)
}

fn conditional(cursor: Cursor<'_>) -> Step<'_> {
    let m = cursor.current();
    match cursor.peek() {
        Some(next) if is_particle(next, "ば") => {
            Step::fused([Node::new(m), Node::new(next)], Next::Stop)
        }
        _ => Step::atomic(Node::new(m)),
    }
}

/// 語幹として後続を取り込む活用形の規則
fn stem(cursor: Cursor<'_>) -> Step<'_> {
    let m = cursor.current();
    let next = cursor.peek();

    // 辞書は命令形の「くれ」を連用形として出力する
    if m.base_form == "くれる"
        && m.conjugated_form == Some(ConjugatedForm::Continuative)
        && next.map_or(true, |n| {
            n.pos == PartOfSpeech::Symbol || is_sentence_ending_particle(n)
        })
    {
        return Step::atomic(Node::conjugated(m, ConjugatedForm::ImperativeYo));
    }

    let Some(next) = next else {
        return Step::atomic(Node::new(m));
    };

    if is_te_particle(next) {
        return te_chain(cursor);
    }
    if is_particle(next, "たり") || is_particle(next, "だり") {
        return Step::fused([Node::new(m), Node::new(next)], Next::Stop);
    }
    // 〜なさいの縮約（食べな）
    if m.conjugated_form == Some(ConjugatedForm::Continuative)
        && next.surface == "な"
        && matches!(next.pos, PartOfSpeech::Particle | PartOfSpeech::AuxiliaryVerb)
    {
        return Step::fused(
            [
                Node::conjugated(m, ConjugatedForm::ContractedRequest),
                Node::new(next),
            ],
            Next::Stop,
        );
    }
    // 「で」「でし」などの連用形は後続の「ある」を取り込まない
    if is_copula(m) {
        let next_step = if next.pos == PartOfSpeech::AuxiliaryVerb && !is_separate_word(Some(m), next)
        {
            Next::Auxiliary
        } else {
            Next::Stop
        };
        return Step::then(Node::new(m), next_step);
    }
    if is_suffix(next) {
        return Step::then(Node::new(m), Next::Word);
    }
    Step::then(Node::new(m), Next::Auxiliary)
}

fn te_form(cursor: Cursor<'_>) -> Step<'_> {
    match cursor.peek() {
        Some(next) if is_te_particle(next) => te_chain(cursor),
        _ => Step::then(Node::new(cursor.current()), Next::Auxiliary),
    }
}

/// 語幹とて形の接続助詞、および縮約された「ては」の「は」を取り込みます。
fn te_chain(cursor: Cursor<'_>) -> Step<'_> {
    let mut nodes = vec![Node::new(cursor.current())];
    nodes.extend(cursor.peek().map(Node::new));
    if let Some(wa) = cursor.peek_nth(2).filter(|n| is_particle(n, "は")) {
        nodes.push(Node::new(wa));
    }
    Step::fused(nodes, Next::Auxiliary)
}

/// 丁寧の「ます」と、それに続く打消の「ん」と「です」
fn polite(cursor: Cursor<'_>) -> Step<'_> {
    let m = cursor.current();
    let mut nodes = vec![Node::new(m)];
    match cursor.peek() {
        Some(n) if n.surface == "ん" && is_negative_auxiliary(n) => {
            nodes.push(Node::new(n));
            match cursor.peek_nth(2) {
                Some(desu) if desu.base_form == "です" && is_copula(desu) => {
                    nodes.push(Node::new(desu));
                    Step::fused(nodes, Next::Auxiliary)
                }
                _ => Step::fused(nodes, Next::Stop),
            }
        }
        _ => Step::fused(nodes, Next::Auxiliary),
    }
}

#[inline(always)]
fn is_particle(m: &Morpheme, surface: &str) -> bool {
    m.pos == PartOfSpeech::Particle && m.surface == surface
}

fn unhandled(m: &Morpheme, form: &str) -> TangoError {
    log::error!("no grammar rule for {:?} in form {form}", m.surface);
    TangoError::unhandled_conjugated_form(&m.surface, form)
}
