//! Answer service: one prompt, one provider call, always a usable answer.

use tracing::{error, warn};

use crate::gemini::{Generation, TextGenerator};
use crate::prompts;

/// Returned when the provider answers with empty or whitespace-only text.
pub const NO_INFORMATION_FALLBACK: &str = "No tengo información sobre ese tema, pero puedo ayudarte con preguntas sobre nuestros servicios, horarios o cómo usar la aplicación.";

/// Returned when the provider call fails for any reason. Provider failures are
/// masked as normal answers; they never become transport errors on /ask.
pub const UNAVAILABLE_FALLBACK: &str =
    "Lo siento, no puedo procesar tu pregunta en este momento. Por favor, intenta de nuevo.";

/// Generates an answer for an already-validated question. Single attempt, no
/// retries; every outcome maps to non-empty answer text.
pub async fn answer_question(generator: &dyn TextGenerator, question: &str) -> String {
    let prompt = prompts::build_prompt(question);

    match generator.generate(&prompt).await {
        Ok(Generation::Text(text)) => text,
        Ok(Generation::Empty) => {
            warn!("Gemini returned empty response");
            NO_INFORMATION_FALLBACK.to_string()
        }
        Err(err) => {
            error!("Error generating response with Gemini: {err}");
            UNAVAILABLE_FALLBACK.to_string()
        }
    }
}
