use crate::{
    Error, Result,
    config::{Config, Provider},
    llm::{GenerationClient, GenerationParams, GenerationRequest, OpenAiClient},
    prompt::PromptTemplate,
    sanitize::sanitize,
    store::{ContentStore, HttpContentStore, TaggedStoreClient},
};
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, info};

/// The render → generate → sanitize pipeline behind both the HTTP endpoint
/// and the console harness. Stateless per call; concurrent callers share it
/// freely behind an `Arc`.
pub struct Generator {
    template: PromptTemplate,
    params: GenerationParams,
    client: Arc<dyn GenerationClient>,
    archive: Option<Archive>,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("template", &self.template)
            .field("params", &self.params)
            .field("archive", &self.archive.is_some())
            .finish_non_exhaustive()
    }
}

struct Archive {
    store: Arc<dyn ContentStore>,
    tagger: String,
}

impl Generator {
    pub fn new(
        template: PromptTemplate,
        params: GenerationParams,
        client: Arc<dyn GenerationClient>,
    ) -> Self {
        Self {
            template,
            params,
            client,
            archive: None,
        }
    }

    /// Stores the prompt/response pair as tagged content after each call.
    pub fn with_archive(mut self, store: Arc<dyn ContentStore>, tagger: String) -> Self {
        self.archive = Some(Archive { store, tagger });
        self
    }

    /// Builds the pipeline the configuration describes, selecting the direct
    /// provider or the tagged-store flow. Archiving only applies to the direct
    /// provider; the tagged-store flow already persists every prompt.
    pub fn from_config(config: &Config) -> Result<Self> {
        let template = PromptTemplate::new(&config.prompt.template);
        let params = GenerationParams::from(&config.llm);

        let generator = match config.llm.provider {
            Provider::OpenAi => {
                if config.llm.api_key.is_empty() {
                    return Err(Error::authentication(
                        "no API credential configured; set llm.api_key or LLM_API_KEY",
                    ));
                }
                let client = Arc::new(OpenAiClient::new(config.llm.clone()));
                let generator = Self::new(template, params, client);
                match &config.store {
                    Some(store_config) if store_config.archive => generator.with_archive(
                        Arc::new(HttpContentStore::new(store_config.clone())),
                        store_config.tagger.clone(),
                    ),
                    _ => generator,
                }
            }
            Provider::TaggedStore => {
                let store_config = config.store.as_ref().ok_or_else(|| {
                    Error::config("tagged_store provider requires a store section")
                })?;
                let store = Arc::new(HttpContentStore::new(store_config.clone()));
                let client = Arc::new(TaggedStoreClient::new(
                    store,
                    store_config.tagger.clone(),
                    store_config.tag_kind.clone(),
                ));
                Self::new(template, params, client)
            }
        };

        Ok(generator)
    }

    /// Placeholder names the template requires, for interactive callers.
    pub fn placeholders(&self) -> &[String] {
        self.template.placeholders()
    }

    pub async fn generate(&self, args: &HashMap<String, String>) -> Result<String> {
        let prompt = self.template.render(args)?;
        debug!("Rendered prompt: {}", prompt);

        let response = self
            .client
            .generate(GenerationRequest {
                prompt: prompt.clone(),
                params: self.params.clone(),
            })
            .await?;

        let output = sanitize(&response.text);
        info!(
            "Generated {} chars with model {}",
            output.len(),
            response.model
        );

        if let Some(archive) = &self.archive {
            let record = format!("{prompt}\n---\n{output}");
            let stored = archive.store.upload(&record).await?;
            archive.store.apply_tag(&stored.id, &archive.tagger).await?;
            debug!("Archived prompt/response pair as content {}", stored.id);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LlmConfig, LogsConfig, PromptConfig, ServerConfig, StoreConfig};

    fn test_config() -> Config {
        Config {
            prompt: PromptConfig {
                template: "Say an unusual greeting to {name}.".to_string(),
            },
            llm: LlmConfig {
                provider: Provider::OpenAi,
                base_url: String::new(),
                api_key: "test-key".to_string(),
                model: "gpt-4".to_string(),
                max_tokens: 30,
                temperature: 0.8,
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                logs: LogsConfig::default(),
            },
            store: None,
        }
    }

    #[test]
    fn builds_direct_provider_from_config() {
        let generator = Generator::from_config(&test_config()).unwrap();
        assert_eq!(generator.placeholders(), ["name"]);
        assert!(generator.archive.is_none());
    }

    #[test]
    fn empty_credential_fails_as_authentication() {
        let mut config = test_config();
        config.llm.api_key = String::new();

        let err = Generator::from_config(&config).unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[test]
    fn tagged_store_provider_requires_a_store_section() {
        let mut config = test_config();
        config.llm.provider = Provider::TaggedStore;

        let err = Generator::from_config(&config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn archive_flag_attaches_the_store() {
        let mut config = test_config();
        config.store = Some(StoreConfig {
            base_url: "http://127.0.0.1:9999".to_string(),
            api_key: String::new(),
            tagger: "prompt-generator".to_string(),
            tag_kind: "generation".to_string(),
            poll_interval_ms: 250,
            max_polls: 40,
            archive: true,
        });

        let generator = Generator::from_config(&config).unwrap();
        assert!(generator.archive.is_some());
    }

    #[test]
    fn tagged_store_provider_builds_with_a_store_section() {
        let mut config = test_config();
        config.llm.provider = Provider::TaggedStore;
        config.store = Some(StoreConfig {
            base_url: "http://127.0.0.1:9999".to_string(),
            api_key: String::new(),
            tagger: "prompt-generator".to_string(),
            tag_kind: "generation".to_string(),
            poll_interval_ms: 250,
            max_polls: 40,
            archive: false,
        });

        assert!(Generator::from_config(&config).is_ok());
    }
}
