//! IPADICのタグ文字列を閉じた列挙型へ変換する定義
//!
//! 品詞・活用形・記号の種類は、辞書境界で一度だけ列挙型にパースされます。
//! 文法規則の側では生の文字列を比較しません。

use std::fmt;
use std::str::FromStr;

use crate::errors::TangoError;

/// 品詞（IPADICの素性の第1列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// 名詞
    Noun,
    /// 動詞
    Verb,
    /// 形容詞
    Adjective,
    /// 副詞
    Adverb,
    /// 助詞
    Particle,
    /// 助動詞
    AuxiliaryVerb,
    /// 接続詞
    Conjunction,
    /// 連体詞
    Prenominal,
    /// 感動詞
    Interjection,
    /// 記号
    Symbol,
    /// フィラー
    Filler,
    /// 接頭詞
    Prefix,
    /// その他
    Other,
    /// 上記のいずれにも当てはまらないタグ
    Unknown,
}

impl PartOfSpeech {
    /// IPADICのタグ文字列を返します。
    ///
    /// [`PartOfSpeech::Unknown`]はタグを持たないため `*` を返します。
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "名詞",
            Self::Verb => "動詞",
            Self::Adjective => "形容詞",
            Self::Adverb => "副詞",
            Self::Particle => "助詞",
            Self::AuxiliaryVerb => "助動詞",
            Self::Conjunction => "接続詞",
            Self::Prenominal => "連体詞",
            Self::Interjection => "感動詞",
            Self::Symbol => "記号",
            Self::Filler => "フィラー",
            Self::Prefix => "接頭詞",
            Self::Other => "その他",
            Self::Unknown => "*",
        }
    }

    /// 活用する品詞（動詞・形容詞・助動詞）かどうか。
    pub const fn is_inflecting(self) -> bool {
        matches!(self, Self::Verb | Self::Adjective | Self::AuxiliaryVerb)
    }

    /// タグ文字列から品詞を得ます。知らないタグは[`PartOfSpeech::Unknown`]になります。
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "名詞" => Self::Noun,
            "動詞" => Self::Verb,
            "形容詞" => Self::Adjective,
            "副詞" => Self::Adverb,
            "助詞" => Self::Particle,
            "助動詞" => Self::AuxiliaryVerb,
            "接続詞" => Self::Conjunction,
            "連体詞" => Self::Prenominal,
            "感動詞" => Self::Interjection,
            "記号" => Self::Symbol,
            "フィラー" => Self::Filler,
            "接頭詞" => Self::Prefix,
            "その他" => Self::Other,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 活用形（IPADICの素性の第6列）
///
/// [`ConjugatedForm::ContractedRequest`]を除き、IPADICの活用形タグと一対一に対応します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConjugatedForm {
    /// 基本形
    Plain,
    /// 未然形
    Irrealis,
    /// 未然ウ接続
    IrrealisU,
    /// 未然ヌ接続
    IrrealisNu,
    /// 未然レル接続
    IrrealisReru,
    /// 未然特殊
    IrrealisSpecial,
    /// 連用形
    Continuative,
    /// 連用タ接続
    ContinuativeTa,
    /// 連用テ接続
    ContinuativeTe,
    /// 連用デ接続
    ContinuativeDe,
    /// 連用ニ接続
    ContinuativeNi,
    /// 連用ゴザイ接続
    ContinuativeGozai,
    /// ガル接続
    Garu,
    /// 仮定形
    Conditional,
    /// 仮定縮約１
    ConditionalContraction1,
    /// 仮定縮約２
    ConditionalContraction2,
    /// 命令ｅ
    ImperativeE,
    /// 命令ｉ
    ImperativeI,
    /// 命令ｒｏ
    ImperativeRo,
    /// 命令ｙｏ
    ImperativeYo,
    /// 体言接続
    Nominal,
    /// 体言接続特殊
    NominalSpecial,
    /// 体言接続特殊２
    NominalSpecial2,
    /// 音便基本形
    EuphonicPlain,
    /// 文語基本形
    ClassicalPlain,
    /// 現代基本形
    ModernPlain,
    /// 「〜なさい」を「〜な」と縮めた命令（辞書には存在しない解決済みの形）
    ContractedRequest,
}

impl ConjugatedForm {
    /// IPADICのタグ文字列を返します。
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "基本形",
            Self::Irrealis => "未然形",
            Self::IrrealisU => "未然ウ接続",
            Self::IrrealisNu => "未然ヌ接続",
            Self::IrrealisReru => "未然レル接続",
            Self::IrrealisSpecial => "未然特殊",
            Self::Continuative => "連用形",
            Self::ContinuativeTa => "連用タ接続",
            Self::ContinuativeTe => "連用テ接続",
            Self::ContinuativeDe => "連用デ接続",
            Self::ContinuativeNi => "連用ニ接続",
            Self::ContinuativeGozai => "連用ゴザイ接続",
            Self::Garu => "ガル接続",
            Self::Conditional => "仮定形",
            Self::ConditionalContraction1 => "仮定縮約１",
            Self::ConditionalContraction2 => "仮定縮約２",
            Self::ImperativeE => "命令ｅ",
            Self::ImperativeI => "命令ｉ",
            Self::ImperativeRo => "命令ｒｏ",
            Self::ImperativeYo => "命令ｙｏ",
            Self::Nominal => "体言接続",
            Self::NominalSpecial => "体言接続特殊",
            Self::NominalSpecial2 => "体言接続特殊２",
            Self::EuphonicPlain => "音便基本形",
            Self::ClassicalPlain => "文語基本形",
            Self::ModernPlain => "現代基本形",
            Self::ContractedRequest => "命令縮約",
        }
    }
}

impl fmt::Display for ConjugatedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConjugatedForm {
    type Err = TangoError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Ok(match tag {
            "基本形" => Self::Plain,
            "未然形" => Self::Irrealis,
            "未然ウ接続" => Self::IrrealisU,
            "未然ヌ接続" => Self::IrrealisNu,
            "未然レル接続" => Self::IrrealisReru,
            "未然特殊" => Self::IrrealisSpecial,
            "連用形" => Self::Continuative,
            "連用タ接続" => Self::ContinuativeTa,
            "連用テ接続" => Self::ContinuativeTe,
            "連用デ接続" => Self::ContinuativeDe,
            "連用ニ接続" => Self::ContinuativeNi,
            "連用ゴザイ接続" => Self::ContinuativeGozai,
            "ガル接続" => Self::Garu,
            "仮定形" => Self::Conditional,
            "仮定縮約１" => Self::ConditionalContraction1,
            "仮定縮約２" => Self::ConditionalContraction2,
            "命令ｅ" => Self::ImperativeE,
            "命令ｉ" => Self::ImperativeI,
            "命令ｒｏ" => Self::ImperativeRo,
            "命令ｙｏ" => Self::ImperativeYo,
            "体言接続" => Self::Nominal,
            "体言接続特殊" => Self::NominalSpecial,
            "体言接続特殊２" => Self::NominalSpecial2,
            "音便基本形" => Self::EuphonicPlain,
            "文語基本形" => Self::ClassicalPlain,
            "現代基本形" => Self::ModernPlain,
            _ => return Err(TangoError::UnknownConjugatedForm(tag.to_string())),
        })
    }
}

/// 記号の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolType {
    /// 句点
    Period,
    /// 読点
    Comma,
    /// 括弧開
    OpeningBracket,
    /// 括弧閉
    ClosingBracket,
    /// 空白
    Space,
    /// アルファベット
    Alphabet,
    /// 一般
    General,
}

impl SymbolType {
    /// IPADICの品詞細分類としてのタグ文字列を返します。
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Period => "句点",
            Self::Comma => "読点",
            Self::OpeningBracket => "括弧開",
            Self::ClosingBracket => "括弧閉",
            Self::Space => "空白",
            Self::Alphabet => "アルファベット",
            Self::General => "一般",
        }
    }

    /// 品詞細分類のタグから記号の種類を得ます。
    pub fn from_detail(detail: &str) -> Option<Self> {
        match detail {
            "句点" => Some(Self::Period),
            "読点" => Some(Self::Comma),
            "括弧開" => Some(Self::OpeningBracket),
            "括弧閉" => Some(Self::ClosingBracket),
            "空白" => Some(Self::Space),
            "アルファベット" => Some(Self::Alphabet),
            "一般" => Some(Self::General),
            _ => None,
        }
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
