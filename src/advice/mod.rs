pub mod gemini;

pub use gemini::GeminiAdvisor;

use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

/// Shown when no advice could be produced
pub const ADVICE_FALLBACK: &str = "عذراً، لا يمكن الحصول على نصيحة ذكية حالياً.";

/// A text-generation service that can answer a prompt
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Name of the provider, for logs
    fn provider_name(&self) -> &'static str;
}

/// Prompt asking for a quick opinion on a listing's price and area
pub fn advice_prompt(title: &str, price: u64, area: &str) -> String {
    format!(
        "بصفتك خبيراً في العقار الكويتي، أعطني نصيحة سريعة حول هذا العقار: \"{}\" بسعر {} د.ك في منطقة {}. هل السعر منطقي؟ وما هي مميزات المنطقة؟",
        title, price, area
    )
}

/// One-line advice for a listing. Never fails: any provider error is logged
/// and replaced by [`ADVICE_FALLBACK`].
pub async fn get_property_advice<P: AdviceProvider + ?Sized>(
    provider: &P,
    title: &str,
    price: u64,
    area: &str,
) -> String {
    let prompt = advice_prompt(title, price, area);
    match provider.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("{} advice error: {:#}", provider.provider_name(), e);
            ADVICE_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::sync::Mutex;

    struct EchoProvider {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AdviceProvider for EchoProvider {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("السعر مناسب".to_string())
        }

        fn provider_name(&self) -> &'static str {
            "echo"
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl AdviceProvider for FailingProvider {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            bail!("quota exceeded")
        }

        fn provider_name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_prompt_mentions_listing() {
        let prompt = advice_prompt("فيلا زاوية", 580000, "صباح السالم");
        assert!(prompt.contains("\"فيلا زاوية\""));
        assert!(prompt.contains("580000 د.ك"));
        assert!(prompt.contains("منطقة صباح السالم"));
    }

    #[tokio::test]
    async fn test_advice_returns_provider_text() {
        let provider = EchoProvider {
            prompts: Mutex::new(Vec::new()),
        };
        let advice = get_property_advice(&provider, "شقة", 650, "السالمية").await;
        assert_eq!(advice, "السعر مناسب");
        assert_eq!(provider.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_advice_falls_back_on_error() {
        let advice = get_property_advice(&FailingProvider, "شقة", 650, "السالمية").await;
        assert_eq!(advice, ADVICE_FALLBACK);
    }
}
