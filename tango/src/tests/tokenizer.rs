//! トークナイザーとの結合テスト

use std::fs::File;
use std::sync::Arc;

use tempfile::tempdir;
use vibrato_rkyv::{LoadMode, SystemDictionaryBuilder};

use super::{build_test_dictionary, build_test_segmenter, CHAR_DEF, LEXICON_CSV, MATRIX_DEF, UNK_DEF};
use crate::config::SegmenterConfig;
use crate::errors::TangoError;
use crate::morpheme::PartOfSpeech;
use crate::tokenizer::{MorphemeSource, Segmenter};
use crate::word::Word;

fn surfaces(words: &[Word]) -> Vec<&str> {
    words.iter().map(Word::surface).collect()
}

#[test]
fn test_morphemes_from_tokenizer() {
    let segmenter = build_test_segmenter();
    let mut worker = segmenter.new_worker();

    let ms = worker.morphemes("学生だった").unwrap();
    let got: Vec<&str> = ms.iter().map(|m| m.surface.as_str()).collect();
    assert_eq!(got, vec!["学生", "だっ", "た"]);
    assert!(ms.iter().all(|m| m.known));
    assert_eq!(ms[1].pos, PartOfSpeech::AuxiliaryVerb);
    assert_eq!(ms[1].base_form, "だ");
}

#[test]
fn test_segment_as_words() {
    let segmenter = build_test_segmenter();
    let mut worker = segmenter.new_worker();

    let words = worker.segment_as_words("学生").unwrap();
    assert_eq!(surfaces(&words), vec!["学生"]);

    let words = worker.segment_as_words("勉強します").unwrap();
    assert_eq!(surfaces(&words), vec!["勉強します"]);
    assert_eq!(words[0].len(), 3);

    let words = worker.segment_as_words("食べている").unwrap();
    assert_eq!(surfaces(&words), vec!["食べている"]);
    assert_eq!(words[0].token(2).unwrap().base_form, "いる");

    let words = worker.segment_as_words("学生だった").unwrap();
    assert_eq!(surfaces(&words), vec!["学生", "だった"]);

    let words = worker.segment_as_words("本を勉強する。").unwrap();
    assert_eq!(surfaces(&words), vec!["本", "を", "勉強する", "。"]);
}

#[test]
fn test_unknown_word() {
    let segmenter = build_test_segmenter();
    let mut worker = segmenter.new_worker();

    let ms = worker.morphemes("ポケモソ").unwrap();
    assert_eq!(ms.len(), 1);
    assert!(!ms[0].known);

    let words = worker.segment_as_words("ポケモソ").unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].pos(), PartOfSpeech::Noun);
    assert_eq!(words[0].base_form(), None);
}

#[test]
fn test_segment_as_sentences() {
    let segmenter = build_test_segmenter();
    let mut worker = segmenter.new_worker();

    let sentences = worker.segment_as_sentences("本を勉強する。").unwrap();
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].range(), 0..5);
    assert_eq!(sentences[0].text(), "本を勉強する。");

    assert!(worker.segment_as_sentences("").unwrap().is_empty());
    assert!(worker.segment_as_words("").unwrap().is_empty());
}

#[test]
fn test_shared_dictionary() {
    let dict = Arc::new(build_test_dictionary());
    let s1 = Segmenter::from_shared_dictionary(dict.clone());
    let s2 = Segmenter::from_shared_dictionary(dict);

    let w1 = s1.segment_as_words("勉強している").unwrap();
    let w2 = s2.segment_as_words("勉強している").unwrap();
    assert_eq!(w1, w2);
    assert_eq!(
        s1.segment_as_words("食べている").unwrap(),
        s2.clone().segment_as_words("食べている").unwrap()
    );
}

#[test]
fn test_config_from_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("system.dic");

    let dict = SystemDictionaryBuilder::from_readers(
        LEXICON_CSV.as_bytes(),
        MATRIX_DEF.as_bytes(),
        CHAR_DEF.as_bytes(),
        UNK_DEF.as_bytes(),
    )
    .unwrap();
    dict.write(File::create(&path).unwrap()).unwrap();

    let segmenter = SegmenterConfig::from_path(&path, LoadMode::Validate)
        .max_grouping_len(24)
        .build()
        .unwrap();
    let words = segmenter.segment_as_words("学生だ").unwrap();
    assert_eq!(surfaces(&words), vec!["学生", "だ"]);
}

#[test]
fn test_config_errors() {
    let dir = tempdir().unwrap();

    let err = SegmenterConfig::from_path(dir.path().join("missing.dic"), LoadMode::Validate)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, TangoError::Tokenizer(_)));
    assert!(!err.is_grammar_defect());

    let err = SegmenterConfig::from_zstd(dir.path().join("missing.dic.zst"))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, TangoError::Tokenizer(_)));

    let err = SegmenterConfig::from_zstd_with_cache_dir(
        dir.path().join("missing.dic.zst"),
        dir.path().join("cache"),
    )
    .build()
    .err()
    .unwrap();
    assert!(matches!(err, TangoError::Tokenizer(_)));
}
