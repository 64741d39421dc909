//! Parallel compression of independent texts
//!
//! Each text runs on a blocking worker; no state is shared between them.

use crate::config::CompressionConfig;
use crate::error::{HuffmanError, Result};
use crate::{CompressedText, Compressor};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Compress every text, at most `config.max_concurrency` at a time.
///
/// Results come back in input order. A failing text does not affect the
/// others.
pub async fn compress_batch(
    texts: Vec<String>,
    config: &CompressionConfig,
) -> Result<Vec<Result<CompressedText>>> {
    config.validate()?;
    let compressor = Arc::new(Compressor::new(config.clone()));
    let permits = Arc::new(Semaphore::new(config.max_concurrency));
    let total = texts.len();

    let mut set = JoinSet::new();
    for (index, text) in texts.into_iter().enumerate() {
        let compressor = Arc::clone(&compressor);
        let permits = Arc::clone(&permits);
        set.spawn(async move {
            let _permit = permits
                .acquire_owned()
                .await
                .map_err(|e| HuffmanError::Task(e.to_string()))?;
            let result = tokio::task::spawn_blocking(move || compressor.compress(&text))
                .await
                .map_err(|e| HuffmanError::Task(e.to_string()))?;
            Ok::<_, HuffmanError>((index, result))
        });
    }

    let mut slots: Vec<Option<Result<CompressedText>>> = (0..total).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        let (index, result) = joined.map_err(|e| HuffmanError::Task(e.to_string()))??;
        slots[index] = Some(result);
    }

    tracing::debug!(texts = total, "batch compression finished");
    slots
        .into_iter()
        .map(|slot| slot.ok_or_else(|| HuffmanError::Task("missing batch result".into())))
        .collect()
}
