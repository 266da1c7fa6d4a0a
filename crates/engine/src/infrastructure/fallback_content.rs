//! Content wrapper that never fails.
//!
//! Wraps any `YokaiContentPort` and substitutes [`GeneratedYokai::fallback`]
//! whenever the inner source errors, is rate limited, or returns content that
//! does not validate. Today's boss must always be creatable.

use std::sync::Arc;

use async_trait::async_trait;
use yokai_domain::GeneratedYokai;

use crate::infrastructure::ports::{ContentError, YokaiContentPort};

pub struct FallbackYokaiContent {
    inner: Arc<dyn YokaiContentPort>,
}

impl FallbackYokaiContent {
    pub fn new(inner: Arc<dyn YokaiContentPort>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl YokaiContentPort for FallbackYokaiContent {
    async fn generate(&self, prompt: Option<String>) -> Result<GeneratedYokai, ContentError> {
        match self.inner.generate(prompt).await {
            Ok(yokai) => match yokai.validate() {
                Ok(()) => Ok(yokai),
                Err(e) => {
                    tracing::warn!(error = %e, "Generated yokai rejected, using fallback");
                    Ok(GeneratedYokai::fallback())
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Yokai generation failed, using fallback");
                Ok(GeneratedYokai::fallback())
            }
        }
    }
}
