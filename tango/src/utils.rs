//! 素性文字列の分割
//!
//! 辞書の素性はCSV形式の1行で、ダブルクォートで囲まれた列の中にカンマが
//! 含まれることがあります。

use csv_core::ReadFieldResult;

use crate::errors::{Result, TangoError};

/// CSV形式の行を解析してフィールドのベクターに分割する
///
/// ダブルクォートで囲まれたフィールドや、フィールド内のカンマも正しく処理します。
///
/// # 引数
///
/// * `row` - 解析するCSV形式の文字列
///
/// # エラー
///
/// 1つのフィールドが内部バッファに収まらない場合、またはUTF-8として
/// 不正なフィールドが得られた場合に[`TangoError`]を返します。
pub fn parse_csv_row(row: &str) -> Result<Vec<String>> {
    let mut fields = vec![];
    let mut rdr = csv_core::Reader::new();
    let mut bytes = row.as_bytes();
    let mut output = [0; 4096];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        let end = match result {
            ReadFieldResult::InputEmpty => true,
            ReadFieldResult::Field { .. } => false,
            ReadFieldResult::End => true,
            ReadFieldResult::OutputFull => {
                return Err(TangoError::invalid_format("feature", "a column is too long"));
            }
        };
        let field = std::str::from_utf8(&output[..nout])
            .map_err(|e| TangoError::invalid_format("feature", e.to_string()))?;
        fields.push(field.to_string());
        if end {
            break;
        }
        bytes = &bytes[nin..];
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_row() {
        assert_eq!(
            &["名詞", "一般", "*"],
            parse_csv_row("名詞,一般,*").unwrap().as_slice()
        );
    }

    #[test]
    fn test_parse_csv_row_with_quote() {
        assert_eq!(
            &["記号", "読点", "1,2"],
            parse_csv_row("記号,読点,\"1,2\"").unwrap().as_slice()
        );
    }
}
