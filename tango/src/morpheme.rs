//! 形態素の表現
//!
//! トークナイザーが出力した1つの形態素を、文法規則が扱いやすい形で保持します。
//! 品詞・活用形は[`tags`]の列挙型にパース済みで、品詞細分類と活用型は
//! [`crate::predicates`]からのみ参照されます。

pub mod tags;

use crate::errors::{Result, TangoError};
use crate::utils::parse_csv_row;

pub use tags::{ConjugatedForm, PartOfSpeech, SymbolType};

/// 素性で「値なし」を表す記号
const EMPTY_FEATURE: &str = "*";

/// IPADICの素性のうち、原形までの必須の列数
const MIN_FEATURE_COLUMNS: usize = 7;

/// トークナイザーが出力した形態素
///
/// 形態素は生成後に変更されません。文法規則は形態素列中の位置でのみ形態素を参照します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    /// 表層形
    pub surface: String,
    /// 品詞
    pub pos: PartOfSpeech,
    /// 品詞細分類（`*` は除かれる）
    pub pos_details: Vec<String>,
    /// 活用型（例: `五段・ラ行`、`特殊・マス`）
    pub conjugated_type: Option<String>,
    /// 活用形
    pub conjugated_form: Option<ConjugatedForm>,
    /// 原形
    pub base_form: String,
    /// 読み
    pub reading: Option<String>,
    /// 発音
    pub pronunciation: Option<String>,
    /// 辞書に登録された語かどうか
    pub known: bool,
}

impl Morpheme {
    /// IPADIC形式の素性文字列から形態素を生成します。
    ///
    /// 素性は `品詞,品詞細分類1,品詞細分類2,品詞細分類3,活用型,活用形,原形,読み,発音`
    /// の順に並びます。未知語では読みと発音が省略されることがあり、原形が `*` の場合は
    /// 表層形を原形とします。
    ///
    /// # 引数
    ///
    /// * `surface` - 表層形
    /// * `feature` - 素性文字列
    /// * `known` - 辞書に登録された語かどうか
    ///
    /// # エラー
    ///
    /// 列数が足りない場合は[`TangoError::InvalidFormat`]、活用形タグが未知の場合は
    /// [`TangoError::UnknownConjugatedForm`]を返します。
    pub fn from_ipadic_feature(surface: &str, feature: &str, known: bool) -> Result<Self> {
        let columns = parse_csv_row(feature)?;
        if columns.len() < MIN_FEATURE_COLUMNS {
            return Err(TangoError::invalid_format(
                "feature",
                format!(
                    "expected at least {MIN_FEATURE_COLUMNS} columns for '{surface}', found {}: {feature}",
                    columns.len()
                ),
            ));
        }

        let conjugated_form = match optional(&columns[5]) {
            Some(tag) => Some(tag.parse::<ConjugatedForm>()?),
            None => None,
        };
        let base_form = optional(&columns[6]).unwrap_or(surface).to_string();

        Ok(Self {
            surface: surface.to_string(),
            pos: PartOfSpeech::from_tag(&columns[0]),
            pos_details: columns[1..4]
                .iter()
                .filter_map(|c| optional(c))
                .map(str::to_string)
                .collect(),
            conjugated_type: optional(&columns[4]).map(str::to_string),
            conjugated_form,
            base_form,
            reading: columns.get(7).and_then(|c| optional(c)).map(str::to_string),
            pronunciation: columns.get(8).and_then(|c| optional(c)).map(str::to_string),
            known,
        })
    }

    /// 品詞細分類に `detail` が含まれるかどうか。
    #[inline(always)]
    pub fn has_detail(&self, detail: &str) -> bool {
        self.pos_details.iter().any(|d| d == detail)
    }

    /// 活用型が `ctype` かどうか。
    #[inline(always)]
    pub fn is_conjugated_type(&self, ctype: &str) -> bool {
        self.conjugated_type.as_deref() == Some(ctype)
    }
}

fn optional(column: &str) -> Option<&str> {
    if column.is_empty() || column == EMPTY_FEATURE {
        None
    } else {
        Some(column)
    }
}
