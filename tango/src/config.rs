//! [`Segmenter`]の設定

use std::path::PathBuf;

use vibrato_rkyv::{Dictionary, LoadMode, Tokenizer};

use crate::errors::Result;
use crate::tokenizer::Segmenter;

/// 辞書の読み込み元
pub enum DictionarySource {
    /// コンパイル済みの辞書ファイル
    Path {
        /// 辞書ファイルのパス
        path: PathBuf,
        /// 読み込み時の検証モード
        mode: LoadMode,
    },
    /// Zstandardで圧縮された辞書ファイル
    Zstd {
        /// 圧縮された辞書ファイルのパス
        path: PathBuf,
        /// 展開した辞書のキャッシュ先
        ///
        /// `None` の場合は圧縮ファイルと同じディレクトリの `decompressed` を使い、
        /// 作成できなければ利用者ごとのキャッシュディレクトリに切り替えます。
        cache_dir: Option<PathBuf>,
    },
}

impl DictionarySource {
    fn load(self) -> Result<Dictionary> {
        let dict = match self {
            Self::Path { path, mode } => {
                log::debug!("loading dictionary from {}", path.display());
                Dictionary::from_path(path, mode)?
            }
            Self::Zstd { path, cache_dir } => {
                log::debug!("loading zstd dictionary from {}", path.display());
                match cache_dir {
                    Some(dir) => Dictionary::from_zstd_with_options(path, dir, false)?,
                    None => Dictionary::from_zstd(path)?,
                }
            }
        };
        Ok(dict)
    }
}

/// [`Segmenter`]の設定
///
/// # 例
///
/// ```no_run
/// use tango::SegmenterConfig;
/// use vibrato_rkyv::LoadMode;
///
/// let segmenter = SegmenterConfig::from_path("path/to/ipadic.dic", LoadMode::TrustCache)
///     .ignore_space(true)
///     .max_grouping_len(24)
///     .build()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct SegmenterConfig {
    source: DictionarySource,
    ignore_space: bool,
    max_grouping_len: Option<usize>,
}

impl SegmenterConfig {
    /// 辞書の読み込み元を指定して作成します。
    pub const fn new(source: DictionarySource) -> Self {
        Self {
            source,
            ignore_space: false,
            max_grouping_len: None,
        }
    }

    /// コンパイル済みの辞書ファイルを読み込む設定を作成します。
    pub fn from_path<P>(path: P, mode: LoadMode) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::new(DictionarySource::Path {
            path: path.into(),
            mode,
        })
    }

    /// Zstandardで圧縮された辞書ファイルを読み込む設定を作成します。
    ///
    /// 展開した辞書は圧縮ファイルと同じディレクトリにキャッシュされます。
    pub fn from_zstd<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::new(DictionarySource::Zstd {
            path: path.into(),
            cache_dir: None,
        })
    }

    /// 展開した辞書のキャッシュ先を指定して、Zstandardで圧縮された辞書ファイルを
    /// 読み込む設定を作成します。
    pub fn from_zstd_with_cache_dir<P, Q>(path: P, cache_dir: Q) -> Self
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        Self::new(DictionarySource::Zstd {
            path: path.into(),
            cache_dir: Some(cache_dir.into()),
        })
    }

    /// 空白を形態素から除くかどうかを指定します。
    ///
    /// 有効にする場合、辞書の文字定義に `SPACE` カテゴリが必要です。
    pub const fn ignore_space(mut self, yes: bool) -> Self {
        self.ignore_space = yes;
        self
    }

    /// 未知語の最大グルーピング長を指定します。`0` は無制限を表します。
    pub const fn max_grouping_len(mut self, max_grouping_len: usize) -> Self {
        self.max_grouping_len = Some(max_grouping_len);
        self
    }

    /// 辞書を読み込み、[`Segmenter`]を作成します。
    ///
    /// # エラー
    ///
    /// 辞書の読み込みに失敗した場合、または `ignore_space` を有効にしたのに辞書が
    /// `SPACE` カテゴリを定義していない場合は
    /// [`TangoError::Tokenizer`](crate::errors::TangoError::Tokenizer)を返します。
    pub fn build(self) -> Result<Segmenter> {
        let dict = self.source.load()?;
        let mut tokenizer = Tokenizer::new(dict).ignore_space(self.ignore_space)?;
        if let Some(len) = self.max_grouping_len {
            tokenizer = tokenizer.max_grouping_len(len);
        }
        Ok(Segmenter::new(tokenizer))
    }
}
