//! Recipe generator
//!
//! Produces the "Pizza del Giorno" by asking the Gemini API for a
//! structured recipe. The prompt and schema pin the response to the
//! [`FeaturedPizza`] shape so the body parses straight into the model.

use crate::error::{AppError, Result};
use crate::models::FeaturedPizza;
use serde::{Deserialize, Serialize};

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Environment variable holding the API key
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

const PROMPT: &str = "Inventa una ricetta unica e deliziosa per la 'Pizza del Giorno' per una \
     pizzeria italiana. Sii creativo e usa ingredienti di alta qualità. Fornisci un nome, una \
     breve descrizione e un elenco di ingredienti. La risposta deve essere in italiano.";

/// Storefront-facing failure text, shown verbatim when generation fails
pub const GENERATION_FAILED: &str =
    "Non è stato possibile generare la Pizza del Giorno. Riprova più tardi.";

/// Anything that can invent a featured pizza.
///
/// The admin flow takes the generated recipe through a review step before
/// it is published, so implementations only produce candidates.
pub trait RecipeGenerator {
    fn generate(&self) -> impl std::future::Future<Output = Result<FeaturedPizza>> + Send;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<Part>,
}

/// Response schema sent with every request; property names match the
/// serde field names of [`FeaturedPizza`] so no renaming is needed.
fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "recipe_name": {
                "type": "STRING",
                "description": "Il nome creativo e accattivante della pizza, in italiano."
            },
            "description": {
                "type": "STRING",
                "description": "Una breve descrizione in italiano che faccia venire l'acquolina in bocca, massimo 2 frasi."
            },
            "ingredients": {
                "type": "ARRAY",
                "description": "Un elenco degli ingredienti principali della pizza, in italiano.",
                "items": { "type": "STRING" }
            }
        },
        "required": ["recipe_name", "description", "ingredients"]
    })
}

fn extract_recipe(body: GenerateResponse) -> Result<FeaturedPizza> {
    let text = match body
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
    {
        Some(part) => part.text,
        None => {
            tracing::warn!("Recipe generation response carried no candidates");
            return Err(AppError::Generator(GENERATION_FAILED.to_string()));
        }
    };

    serde_json::from_str(text.trim()).map_err(|e| {
        tracing::warn!("Generated recipe was not valid JSON: {}", e);
        AppError::Generator(GENERATION_FAILED.to_string())
    })
}

/// Gemini-backed [`RecipeGenerator`]
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
}

impl GeminiGenerator {
    pub fn new(api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("pizzeria-generator")
            .build()
            .map_err(|e| {
                tracing::warn!("Failed to create HTTP client: {}", e);
                AppError::Generator(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, api_key })
    }

    /// Build a generator from `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        match std::env::var(GEMINI_API_KEY_VAR) {
            Ok(key) if !key.is_empty() => Self::new(key),
            _ => Err(AppError::Generator(format!(
                "{} is not set",
                GEMINI_API_KEY_VAR
            ))),
        }
    }
}

impl RecipeGenerator for GeminiGenerator {
    async fn generate(&self) -> Result<FeaturedPizza> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: PROMPT.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
                // Raised for creativity; the schema keeps the shape stable
                temperature: 0.8,
            },
        };

        tracing::info!("Requesting a new Pizza del Giorno recipe");

        let response = self
            .client
            .post(GEMINI_ENDPOINT)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Recipe generation request failed: {}", e);
                AppError::Generator(GENERATION_FAILED.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Recipe generation returned {}: {}", status, body);
            return Err(AppError::Generator(GENERATION_FAILED.to_string()));
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse recipe generation response: {}", e);
            AppError::Generator(GENERATION_FAILED.to_string())
        })?;

        extract_recipe(body)
    }
}
