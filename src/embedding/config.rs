use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN};

use super::error::EmbeddingError;

/// Configuration for [`SentenceEncoder`](super::SentenceEncoder).
///
/// `model_dir` must contain `config.json`, `model.safetensors`, and
/// `tokenizer.json` (the standard sentence-transformers export layout).
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Directory holding the BERT weights and tokenizer. `None` is only
    /// valid in stub mode.
    pub model_dir: Option<PathBuf>,

    /// Output embedding dimension. Default: `384`.
    pub embedding_dim: usize,

    /// Token truncation limit. Default: `256`.
    pub max_seq_len: usize,

    /// Use the deterministic hash-based stub instead of a real model.
    /// Testing only.
    pub testing_stub: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            testing_stub: false,
        }
    }
}

impl EncoderConfig {
    /// Config pointing at a model directory.
    pub fn from_model_dir<P: AsRef<Path>>(model_dir: P) -> Self {
        Self {
            model_dir: Some(model_dir.as_ref().to_path_buf()),
            ..Default::default()
        }
    }

    /// Stub-mode config: no model files needed, embeddings are a
    /// deterministic function of the input text.
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Checks internal consistency. Does not touch the filesystem.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim cannot be zero".to_string(),
            });
        }
        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len cannot be zero".to_string(),
            });
        }
        if !self.testing_stub && self.model_dir.is_none() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required unless testing_stub is set".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the model config file, if a model dir is set.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.model_dir.as_ref().map(|d| d.join("config.json"))
    }

    /// Path to the weights file, if a model dir is set.
    pub fn weights_path(&self) -> Option<PathBuf> {
        self.model_dir.as_ref().map(|d| d.join("model.safetensors"))
    }

    /// Path to the tokenizer file, if a model dir is set.
    pub fn tokenizer_path(&self) -> Option<PathBuf> {
        self.model_dir.as_ref().map(|d| d.join("tokenizer.json"))
    }

    /// Returns `true` if all required model files exist on disk.
    pub fn model_available(&self) -> bool {
        match (
            self.config_path(),
            self.weights_path(),
            self.tokenizer_path(),
        ) {
            (Some(c), Some(w), Some(t)) => c.is_file() && w.is_file() && t.is_file(),
            _ => false,
        }
    }
}
