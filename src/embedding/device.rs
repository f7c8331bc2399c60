use candle_core::Device;
use tracing::warn;

use super::error::EmbeddingError;

/// Selects the compute device based on enabled features (falls back to CPU).
///
/// Catalog-scale corpora embed in well under a second on CPU; the GPU
/// features exist for large catalogs and batch re-indexing.
pub fn select_device() -> Result<Device, EmbeddingError> {
    #[cfg(feature = "metal")]
    {
        match Device::new_metal(0) {
            Ok(device) => return Ok(device),
            Err(e) => warn!(error = %e, "Metal device unavailable, falling back"),
        }
    }

    #[cfg(feature = "cuda")]
    {
        match Device::new_cuda(0) {
            Ok(device) => return Ok(device),
            Err(e) => warn!(error = %e, "CUDA device unavailable, falling back"),
        }
    }

    Ok(Device::Cpu)
}
