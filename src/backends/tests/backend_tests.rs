use crate::backends::{Backend, BackendError};
use crate::config::{BackendConfigType, OllamaConfig, OpenAiConfig};
use crate::prompt::Prompt;

#[cfg(test)]
mod tests {
    use super::*;

    fn test_prompt() -> Prompt {
        Prompt {
            system: "You are a test.".to_string(),
            user: "Analyze nothing.".to_string(),
        }
    }

    /// Ollama configuration pointing at a port nothing listens on
    fn unreachable_ollama() -> OllamaConfig {
        OllamaConfig {
            url: "http://127.0.0.1:9".to_string(),
            ..OllamaConfig::default()
        }
    }

    #[test]
    fn test_from_config_selects_variant() {
        let backend = Backend::from_config(&BackendConfigType::OpenAi(OpenAiConfig::default()));
        assert!(matches!(backend, Backend::OpenAi(_)));

        let backend = Backend::from_config(&BackendConfigType::Ollama(OllamaConfig::default()));
        assert!(matches!(backend, Backend::Ollama(_)));
    }

    #[test]
    fn test_config_json_fills_defaults() {
        let config: BackendConfigType =
            serde_json::from_str(r#"{"type": "Ollama", "model": "llama3.2:latest"}"#).unwrap();

        match &config {
            BackendConfigType::Ollama(ollama_config) => {
                assert_eq!(ollama_config.url, "http://localhost:11434");
                assert_eq!(ollama_config.model, "llama3.2:latest");
            }
            _ => panic!("expected an Ollama configuration"),
        }

        let config: BackendConfigType = serde_json::from_str(r#"{"type": "OpenAi"}"#).unwrap();
        match &config {
            BackendConfigType::OpenAi(openai_config) => {
                assert_eq!(openai_config.model, "gpt-4");
                assert_eq!(openai_config.temperature, 0.7);
                assert!(openai_config.api_key.is_none());
            }
            _ => panic!("expected an OpenAi configuration"),
        }
    }

    #[tokio::test]
    async fn test_openai_missing_key_fails_before_any_request() {
        // The endpoint points at a closed port; a network attempt would
        // surface as a request error instead of the credential error
        let config = OpenAiConfig {
            api_key: None,
            endpoint: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            ..OpenAiConfig::default()
        };
        let backend = Backend::from_config(&BackendConfigType::OpenAi(config));

        assert!(matches!(
            backend.ensure_available().await,
            Err(BackendError::MissingApiKey)
        ));
        assert!(matches!(
            backend.analyze(&test_prompt()).await,
            Err(BackendError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn test_ollama_unreachable_server_fails_probe() {
        let backend = Backend::from_config(&BackendConfigType::Ollama(unreachable_ollama()));

        assert!(matches!(
            backend.ensure_available().await,
            Err(BackendError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_ollama_unreachable_server_fails_analysis() {
        let backend = Backend::from_config(&BackendConfigType::Ollama(unreachable_ollama()));

        assert!(matches!(
            backend.analyze(&test_prompt()).await,
            Err(BackendError::Request(_))
        ));
    }
}
