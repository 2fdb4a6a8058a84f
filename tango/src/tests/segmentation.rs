//! 語への分割の性質に関するテスト

use crate::morpheme::{Morpheme, PartOfSpeech};
use crate::sentence::{segment_sentences, segment_words};
use crate::test_utils::{morphemes, unknown};
use crate::word::Word;

fn fixtures() -> Vec<Vec<Morpheme>> {
    vec![
        morphemes(&[
            ("学生", "名詞,一般,*,*,*,*,学生,ガクセイ,ガクセイ"),
            ("だっ", "助動詞,*,*,*,特殊・ダ,連用タ接続,だ,ダッ,ダッ"),
            ("た", "助動詞,*,*,*,特殊・タ,基本形,た,タ,タ"),
        ]),
        morphemes(&[
            ("勉強", "名詞,サ変接続,*,*,*,*,勉強,ベンキョウ,ベンキョー"),
            ("し", "動詞,自立,*,*,サ変・スル,連用形,する,シ,シ"),
            ("て", "助詞,接続助詞,*,*,*,*,て,テ,テ"),
            ("い", "動詞,非自立,*,*,一段,連用形,いる,イ,イ"),
            ("ます", "助動詞,*,*,*,特殊・マス,基本形,ます,マス,マス"),
            ("よ", "助詞,終助詞,*,*,*,*,よ,ヨ,ヨ"),
            ("。", "記号,句点,*,*,*,*,。,。,。"),
        ]),
        morphemes(&[
            ("「", "記号,括弧開,*,*,*,*,「,「,「"),
            ("高けれ", "形容詞,自立,*,*,形容詞・アウオ段,仮定形,高い,タカケレ,タカケレ"),
            ("ば", "助詞,接続助詞,*,*,*,*,ば,バ,バ"),
            ("」", "記号,括弧閉,*,*,*,*,」,」,」"),
            ("、", "記号,読点,*,*,*,*,、,、,、"),
            ("それ", "名詞,代名詞,一般,*,*,*,それ,ソレ,ソレ"),
            ("で", "助動詞,*,*,*,特殊・ダ,連用形,だ,デ,デ"),
            ("いい", "形容詞,自立,*,*,形容詞・イイ,基本形,いい,イイ,イイ"),
            ("じゃん", "助詞,終助詞,*,*,*,*,じゃん,ジャン,ジャン"),
        ]),
    ]
}

#[test]
fn test_single_noun() {
    let ms = morphemes(&[("学生", "名詞,一般,*,*,*,*,学生,ガクセイ,ガクセイ")]);
    let words = segment_words(&ms).unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].pos(), PartOfSpeech::Noun);
    assert_eq!(words[0].surface(), "学生");
    assert_eq!(words[0].base_form(), Some("学生"));
    assert_eq!(words[0].len(), 1);
}

#[test]
fn test_suru_fusion() {
    let ms = morphemes(&[
        ("勉強", "名詞,サ変接続,*,*,*,*,勉強,ベンキョウ,ベンキョー"),
        ("する", "動詞,自立,*,*,サ変・スル,基本形,する,スル,スル"),
    ]);
    let words = segment_words(&ms).unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].pos(), PartOfSpeech::Noun);
    assert_eq!(words[0].surface(), "勉強する");
    assert_eq!(words[0].base_form(), Some("勉強"));
    let bases: Vec<&str> = words[0].tokens().iter().map(|t| t.base_form.as_str()).collect();
    assert_eq!(bases, vec!["勉強", "する"]);

    let ms = morphemes(&[
        ("勉強", "名詞,サ変接続,*,*,*,*,勉強,ベンキョウ,ベンキョー"),
        ("し", "動詞,自立,*,*,サ変・スル,連用形,する,シ,シ"),
        ("ます", "助動詞,*,*,*,特殊・マス,基本形,ます,マス,マス"),
    ]);
    let words = segment_words(&ms).unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].surface(), "勉強します");
    assert_eq!(words[0].len(), 3);
}

#[test]
fn test_auxiliary_chaining_depth() {
    let ms = morphemes(&[
        ("食べ", "動詞,自立,*,*,一段,連用形,食べる,タベ,タベ"),
        ("て", "助詞,接続助詞,*,*,*,*,て,テ,テ"),
        ("いる", "動詞,非自立,*,*,一段,基本形,いる,イル,イル"),
    ]);
    let words = segment_words(&ms).unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].pos(), PartOfSpeech::Verb);
    assert_eq!(words[0].base_form(), Some("食べる"));
    assert_eq!(words[0].token(2).unwrap().base_form, "いる");
}

#[test]
fn test_copula_boundary() {
    let ms = morphemes(&[
        ("学生", "名詞,一般,*,*,*,*,学生,ガクセイ,ガクセイ"),
        ("だ", "助動詞,*,*,*,特殊・ダ,基本形,だ,ダ,ダ"),
    ]);
    let words = segment_words(&ms).unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].pos(), PartOfSpeech::Noun);
    assert_eq!(words[1].pos(), PartOfSpeech::AuxiliaryVerb);
    assert_eq!(words[1].surface(), "だ");

    let words = segment_words(&fixtures()[0]).unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(words[1].surface(), "だった");
    assert_eq!(words[1].base_form(), Some("だ"));
}

#[test]
fn test_progressive_polite_with_particles() {
    let words = segment_words(&fixtures()[1]).unwrap();
    let surfaces: Vec<&str> = words.iter().map(Word::surface).collect();
    assert_eq!(surfaces, vec!["勉強しています", "よ", "。"]);
}

#[test]
fn test_conditional_and_brackets() {
    let words = segment_words(&fixtures()[2]).unwrap();
    let surfaces: Vec<&str> = words.iter().map(Word::surface).collect();
    assert_eq!(
        surfaces,
        vec!["「", "高ければ", "」", "、", "それ", "で", "いい", "じゃん"]
    );
}

#[test]
fn test_partition() {
    for ms in fixtures() {
        let words = segment_words(&ms).unwrap();
        let consumed: usize = words.iter().map(Word::len).sum();
        assert_eq!(consumed, ms.len());

        let expected: String = ms.iter().map(|m| m.surface.as_str()).collect();
        let actual: String = words.iter().map(Word::surface).collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_determinism() {
    for ms in fixtures() {
        assert_eq!(segment_words(&ms).unwrap(), segment_words(&ms).unwrap());
    }
}

#[test]
fn test_unknown_word_has_no_base_form() {
    let ms = vec![
        unknown("ポケモソ", "名詞,一般,*,*,*,*,*"),
        morphemes(&[("だ", "助動詞,*,*,*,特殊・ダ,基本形,だ,ダ,ダ")]).remove(0),
    ];
    let words = segment_words(&ms).unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].base_form(), None);
    assert_eq!(words[0].reading(), "ポケモソ");
    assert_eq!(words[1].base_form(), Some("だ"));
}

#[test]
fn test_one_sentence_spans_input() {
    let fixtures = fixtures();
    let ms = &fixtures[2];
    let sentences = segment_sentences(ms).unwrap();
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].range(), 0..ms.len());
    assert_eq!(sentences[0].len(), 8);
}
