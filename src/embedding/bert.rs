use candle_core as candle;
use candle::{DType, Device, Result, Tensor};
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;

struct SentenceBertImpl {
    bert: BertModel,
}

impl SentenceBertImpl {
    fn load(vb: candle_nn::VarBuilder, config: &Config) -> Result<Self> {
        // Sentence-transformers exports prefix the weights differently
        // depending on the upstream architecture.
        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), config)?
        } else if vb.contains_tensor("roberta.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("roberta"), config)?
        } else {
            BertModel::load(vb.clone(), config)?
        };

        Ok(Self { bert })
    }

    /// Runs the encoder and mean-pools token states into one sentence vector.
    fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        // [batch, seq_len, hidden]
        let hidden = self
            .bert
            .forward(input_ids, token_type_ids, attention_mask)?;
        // Mean pooling over the sequence dimension. Inputs are encoded one
        // at a time without padding, so a plain mean is exact.
        let (_batch, seq_len, _hidden) = hidden.dims3()?;
        (hidden.sum(1)? / seq_len as f64)?.squeeze(0)
    }
}

/// Sentence-embedding BERT loaded from a sentence-transformers export
/// (`config.json` + `model.safetensors`).
#[derive(Clone)]
pub struct SentenceBert(std::sync::Arc<SentenceBertImpl>);

impl SentenceBert {
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb = unsafe {
            candle_nn::VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)?
        };

        let model = SentenceBertImpl::load(vb, &config)?;

        Ok(Self(std::sync::Arc::new(model)))
    }

    /// Mean-pooled sentence embedding for a single tokenized input.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        self.0.forward(input_ids, token_type_ids, attention_mask)
    }
}
