//! 語の結果コンテナ
//!
//! 解決済みの連なり（[`Chain`]）から、語を構成するトークンと、語全体の表層形・
//! 読み・発音を組み立てます。

use std::fmt;

use crate::morpheme::{ConjugatedForm, PartOfSpeech};
use crate::node::{Chain, Detail, Node};

/// 語を構成する1つの形態素
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// 解決済みの品詞
    pub pos: PartOfSpeech,
    /// 表層形
    pub surface: String,
    /// 原形
    pub base_form: String,
    /// 読み
    pub reading: Option<String>,
    /// 発音
    pub pronunciation: Option<String>,
    /// 解決済みの活用形または記号の種類
    pub detail: Option<Detail>,
}

impl From<&Node<'_>> for Token {
    fn from(node: &Node<'_>) -> Self {
        let m = node.morpheme;
        Self {
            pos: node.pos,
            surface: m.surface.clone(),
            base_form: m.base_form.clone(),
            reading: m.reading.clone(),
            pronunciation: m.pronunciation.clone(),
            detail: node.detail,
        }
    }
}

/// 形態素をまとめた1つの語
///
/// 表層形・読み・発音はトークンの値を順に連結したものです。読みや発音を
/// 持たないトークンは表層形で代用します。原形は先頭のトークンが辞書に登録された
/// 語の場合にのみ持ちます。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    tokens: Vec<Token>,
    pos: PartOfSpeech,
    surface: String,
    base_form: Option<String>,
    reading: String,
    pronunciation: String,
}

impl Word {
    /// 語を構成するトークン
    #[inline(always)]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// `i` 番目のトークン
    #[inline(always)]
    pub fn token(&self, i: usize) -> Option<&Token> {
        self.tokens.get(i)
    }

    /// トークン数（語が消費した形態素数）
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// 語の品詞（先頭のトークンの品詞）
    #[inline(always)]
    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }

    /// 表層形
    #[inline(always)]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// 原形。未知語から始まる語では `None` を返します。
    #[inline(always)]
    pub fn base_form(&self) -> Option<&str> {
        self.base_form.as_deref()
    }

    /// 読み
    #[inline(always)]
    pub fn reading(&self) -> &str {
        &self.reading
    }

    /// 発音
    #[inline(always)]
    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    /// 先頭のトークンの解決済み活用形
    pub fn conjugated_form(&self) -> Option<ConjugatedForm> {
        match self.tokens.first()?.detail? {
            Detail::Conjugation(form) => Some(form),
            Detail::Symbol(_) => None,
        }
    }
}

impl From<&Chain<'_>> for Word {
    fn from(chain: &Chain<'_>) -> Self {
        let tokens: Vec<Token> = chain.iter().map(Token::from).collect();

        let mut surface = String::new();
        let mut reading = String::new();
        let mut pronunciation = String::new();
        for t in &tokens {
            surface.push_str(&t.surface);
            reading.push_str(t.reading.as_deref().unwrap_or(&t.surface));
            pronunciation.push_str(t.pronunciation.as_deref().unwrap_or(&t.surface));
        }

        let (pos, base_form) = match chain.root() {
            Some(root) => (
                root.pos,
                root.morpheme
                    .known
                    .then(|| root.morpheme.base_form.clone()),
            ),
            None => (PartOfSpeech::Unknown, None),
        };

        Self {
            tokens,
            pos,
            surface,
            base_form,
            reading,
            pronunciation,
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.surface)
    }
}
