//! 形態素に対する文法上の判定
//!
//! IPADICは文法上の性質の多くを品詞細分類や活用型の文字列として表現します。
//! このモジュールはそれらの文字列照合をまとめ、文法規則からは「助動詞か」
//! 「接尾辞か」といった問いだけが見えるようにします。

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{Result, TangoError};
use crate::morpheme::{ConjugatedForm, Morpheme, PartOfSpeech, SymbolType};

/// 非自立の用法でも辞書が自立語として登録している動詞の原形
const SUBSIDIARY_BASE_FORMS: &[&str] = &["いる", "ある"];

/// 節を名詞句に変える形式名詞の表層形
const NOMINALIZERS: &[&str] = &["の", "ん", "こと"];

/// て形に続く接続助詞の表層形
const TE_PARTICLES: &[&str] = &["て", "で", "ちゃ", "じゃ"];

/// トークナイザーが2つに分けてしまうフィラーの組（表層形, 後続の原形）
const FILLER_IDIOMS: &[(&str, &str)] = &[("えっ", "と"), ("えー", "と"), ("えーっ", "と")];

/// 品詞細分類で記号の種類が分からない場合に使う文字表
const SYMBOL_CHARACTERS: &[(SymbolType, &str)] = &[
    (SymbolType::Period, "。．.！!？?"),
    (SymbolType::Comma, "、，,"),
    (SymbolType::OpeningBracket, "「『（(［[【〈《｛{〔“‘"),
    (SymbolType::ClosingBracket, "」』）)］]】〉》｝}〕”’"),
    (SymbolType::Space, " \u{3000}\t"),
    (
        SymbolType::General,
        "・…‥〜～＝=＋+－-＊*／/＼\\＆&＠@＃#％%＄$￥¥＾^＿_｜|：:；;※→←↑↓○●◎△▲□■◇◆☆★♪〒",
    ),
];

/// [`SYMBOL_CHARACTERS`]の文字だけからなる表層形にマッチする正規表現
static SPECIAL_CHARACTER: LazyLock<Regex> = LazyLock::new(|| {
    let class: String = SYMBOL_CHARACTERS
        .iter()
        .flat_map(|(_, chars)| chars.chars())
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();
    Regex::new(&format!("^[{class}]+$")).expect("symbol characters form a valid class")
});

/// 名詞の接尾辞の下位分類（IPADICの `名詞,接尾,*` の第2細分類）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixKind {
    /// 一般
    General,
    /// サ変接続
    SaIrregular,
    /// 形容動詞語幹
    AdjectivalNounStem,
    /// 助数詞
    Counter,
    /// 助動詞語幹
    AuxiliaryStem,
    /// 人名
    PersonName,
    /// 地域
    Area,
    /// 特殊
    Special,
    /// 副詞可能
    Adverbial,
}

impl SuffixKind {
    fn from_detail(detail: &str) -> Option<Self> {
        match detail {
            "一般" => Some(Self::General),
            "サ変接続" => Some(Self::SaIrregular),
            "形容動詞語幹" => Some(Self::AdjectivalNounStem),
            "助数詞" => Some(Self::Counter),
            "助動詞語幹" => Some(Self::AuxiliaryStem),
            "人名" => Some(Self::PersonName),
            "地域" => Some(Self::Area),
            "特殊" => Some(Self::Special),
            "副詞可能" => Some(Self::Adverbial),
            _ => None,
        }
    }
}

/// 助動詞として振る舞う形態素かどうか。
///
/// 品詞が助動詞のもの、非自立の動詞・形容詞、およびて形の後で補助的に使われる
/// 「いる」「ある」が該当します。
pub fn is_auxiliary_verb(m: &Morpheme) -> bool {
    match m.pos {
        PartOfSpeech::AuxiliaryVerb => true,
        PartOfSpeech::Verb | PartOfSpeech::Adjective => {
            m.has_detail("非自立") || SUBSIDIARY_BASE_FORMS.contains(&m.base_form.as_str())
        }
        _ => false,
    }
}

/// 接尾辞かどうか。
pub fn is_suffix(m: &Morpheme) -> bool {
    m.has_detail("接尾")
}

/// 接尾辞の下位分類。接尾辞でない場合や下位分類を持たない場合は `None` を返します。
pub fn suffix_kind(m: &Morpheme) -> Option<SuffixKind> {
    let pos = m.pos_details.iter().position(|d| d == "接尾")?;
    m.pos_details
        .get(pos + 1)
        .and_then(|d| SuffixKind::from_detail(d))
}

/// 指定した下位分類の接尾辞かどうか。
pub fn is_suffix_of(m: &Morpheme, kind: SuffixKind) -> bool {
    suffix_kind(m) == Some(kind)
}

/// 終助詞かどうか。
pub fn is_sentence_ending_particle(m: &Morpheme) -> bool {
    m.pos == PartOfSpeech::Particle && m.has_detail("終助詞")
}

/// 形式名詞（の・ん・こと）かどうか。
pub fn is_nominalizer(m: &Morpheme) -> bool {
    m.pos == PartOfSpeech::Noun && NOMINALIZERS.contains(&m.surface.as_str())
}

/// サ変接続の名詞かどうか。
pub fn is_sa_irregular_noun(m: &Morpheme) -> bool {
    m.pos == PartOfSpeech::Noun && m.has_detail("サ変接続")
}

/// ナイ形容詞語幹の名詞かどうか。
pub fn is_nai_adjective_stem(m: &Morpheme) -> bool {
    m.pos == PartOfSpeech::Noun && m.has_detail("ナイ形容詞語幹")
}

/// て形に続く接続助詞（て・で・ちゃ・じゃ）かどうか。
pub fn is_te_particle(m: &Morpheme) -> bool {
    m.pos == PartOfSpeech::Particle && TE_PARTICLES.contains(&m.surface.as_str())
}

/// 「だ」「です」の活用形かどうか。
pub fn is_copula(m: &Morpheme) -> bool {
    m.pos == PartOfSpeech::AuxiliaryVerb
        && (m.is_conjugated_type("特殊・ダ") || m.is_conjugated_type("特殊・デス"))
}

/// 丁寧の助動詞「ます」かどうか。
pub fn is_polite_auxiliary(m: &Morpheme) -> bool {
    m.pos == PartOfSpeech::AuxiliaryVerb && m.is_conjugated_type("特殊・マス")
}

/// 過去・完了の助動詞「た」「だ」かどうか。
pub fn is_past_auxiliary(m: &Morpheme) -> bool {
    m.pos == PartOfSpeech::AuxiliaryVerb && m.is_conjugated_type("特殊・タ")
}

/// 打消の助動詞「ぬ」「ず」「ん」かどうか。
pub fn is_negative_auxiliary(m: &Morpheme) -> bool {
    m.pos == PartOfSpeech::AuxiliaryVerb && m.is_conjugated_type("特殊・ヌ")
}

/// 表層形が記号の文字だけからなるかどうか。
///
/// 辞書が名詞として登録している記号文字を見分けるために使います。
pub fn is_special_character(surface: &str) -> bool {
    SPECIAL_CHARACTER.is_match(surface)
}

/// `curr` と後続の `next` が分割されたフィラーの組になっているかどうか。
pub fn is_filler_idiom(curr: &Morpheme, next: &Morpheme) -> bool {
    matches!(curr.pos, PartOfSpeech::Filler | PartOfSpeech::Interjection)
        && FILLER_IDIOMS
            .iter()
            .any(|&(filler, rest)| curr.surface == filler && next.base_form == rest)
}

/// 記号の種類を判定します。
///
/// 品詞が記号の場合は品詞細分類から、それ以外（あるいは細分類が記号の種類を
/// 表さない）場合は表層形の先頭文字を文字表で引きます。
///
/// # エラー
///
/// どちらでも種類が決まらない場合は[`TangoError::UnmappedSymbol`]を返します。
/// 文法表の欠落を示すため、既定の種類で代用しません。
pub fn symbol_type(m: &Morpheme) -> Result<SymbolType> {
    if m.pos == PartOfSpeech::Symbol {
        if let Some(kind) = m.pos_details.iter().find_map(|d| SymbolType::from_detail(d)) {
            return Ok(kind);
        }
    }
    m.surface
        .chars()
        .next()
        .and_then(fallback_symbol_type)
        .ok_or_else(|| {
            log::error!("no symbol category for {:?} {:?}", m.surface, m.pos_details);
            TangoError::unmapped_symbol(&m.surface, &m.pos_details)
        })
}

fn fallback_symbol_type(c: char) -> Option<SymbolType> {
    SYMBOL_CHARACTERS
        .iter()
        .find(|(_, chars)| chars.contains(c))
        .map(|&(kind, _)| kind)
}

/// `curr` が直前の形態素 `prev` の語に含まれず、新しい語を始めるかどうか。
///
/// 省略可能な後続を語に取り込む前に必ず評価される境界判定です。
///
/// * 「だ」は連用タ接続に続く過去の「だ」（読んだ）を除いて新しい語を始める
/// * 終助詞・形式名詞・「です」・「じゃん」は常に新しい語を始める
pub fn is_separate_word(prev: Option<&Morpheme>, curr: &Morpheme) -> bool {
    if curr.pos == PartOfSpeech::AuxiliaryVerb && curr.surface == "だ" {
        let after_ta_stem = prev
            .is_some_and(|p| p.conjugated_form == Some(ConjugatedForm::ContinuativeTa));
        return !after_ta_stem;
    }
    is_sentence_ending_particle(curr)
        || is_nominalizer(curr)
        || curr.base_form == "です"
        || curr.surface == "じゃん"
}
