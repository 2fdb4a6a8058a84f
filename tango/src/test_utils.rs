//! テスト用の形態素列の組み立て

use crate::morpheme::Morpheme;

/// `(表層形, IPADICの素性)` の組から既知語の形態素列を作ります。
pub fn morphemes(rows: &[(&str, &str)]) -> Vec<Morpheme> {
    rows.iter()
        .map(|(surface, feature)| Morpheme::from_ipadic_feature(surface, feature, true).unwrap())
        .collect()
}

/// 未知語の形態素を作ります。
pub fn unknown(surface: &str, feature: &str) -> Morpheme {
    Morpheme::from_ipadic_feature(surface, feature, false).unwrap()
}
