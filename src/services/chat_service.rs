use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fmt;

/// Reply returned whenever the upstream model call fails for any reason.
pub const FALLBACK_REPLY: &str =
    "Sorry, the TrailAZ assistant is unavailable right now. Please try again in a moment \
     or reach out through the Contact Support link on the FAQ page.";

const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub const SYSTEM_INSTRUCTION: &str = "\
You are the TrailAZ FAQ Assistant, embedded on the TrailAZ FAQ page.

Your job:
- Help users understand the TrailAZ project, its features, usage, and other FAQs.
- Answer ONLY based on the information provided in the CONTEXT and your conversation so far.
- If the answer is not clearly supported by the CONTEXT, say you don't know and suggest where \
the user might look (e.g. docs, support email, or main website), instead of guessing.

Answering style:
- Be concise, clear, and friendly.
- Prefer short paragraphs and bullet points over long walls of text.
- If a question is vague, ask a brief clarifying question before giving a detailed answer.

Scope and safety:
- Focus on questions about the TrailAZ project, the app's behavior, features, and how to use it.
- If users ask about things unrelated to TrailAZ, politely say that you are only able to help \
with TrailAZ-related questions.
- Never invent product features, pricing, or policies that are not in the CONTEXT.";

// Static project knowledge so the model can answer TrailAZ FAQ-style questions.
pub const KNOWLEDGE_BASE: &str = "\
PROJECT SNAPSHOT
- TrailAZ helps people plan and book mountain adventures across Azerbaijan via pages: Home, \
Mountains, Activities, Smart Climb Planner, and FAQ.
- Purpose: explore 40+ mountain and adventure destinations with safety-first guidance, local \
insights, and budgeting tools.
- Catalog fields: name, description, region, difficulty (Easy/Moderate/Difficult/Expert), \
seasons, activity type, elevation, images, optional activities/tips/facts.

COVERAGE HIGHLIGHTS (examples)
- Shahdag Peak - Qusar, 4,243m, Expert climbing, Summer/Autumn. Technical and ice routes; \
weather shifts fast above 3,500m.
- Bazarduzu Mountain - Qusar, 4,466m, Expert hiking, Summer. Alpine meadows, wildlife.
- Tufandag Mountain - Gabala, 4,191m, Moderate skiing, Winter-Summer. Resort with cable cars, \
biking, paragliding.
- Khinalig Village Trek - Quba, 2,350m, Moderate hiking, Spring-Autumn. Ancient village, \
cultural immersion.
- Laza Waterfall Trail - Qusar, 1,650m, Easy hiking, Spring/Summer. Family-friendly waterfall walk.

SMART CLIMB PLANNER
- Inputs: select mountain, start date, duration (1-7 days), activity type \
(Hiking/Climbing/Skiing/Camping/Photography), optional add-on packages.
- Add-on packages and prices: Professional Guide $150; Equipment Rental $80; Transport from \
Baku $100; Meal Package $60; Travel Insurance $40.
- Cost model: base = days * 50 plus selected packages; itinerary uses templated day plans \
(day 1 arrival/safety briefing at ~80, final day wrap-up at ~70, middle days ~50 with rotating \
activities).

FAQ HIGHLIGHTS
- Booking: use Smart Climb Planner, choose mountain/dates/duration/add-ons, then save the trip.
- Safety measures: safety briefings, emergency contacts, weather monitoring, first-aid \
readiness, experienced local guides when selected.
- Equipment: standard trips include maps and safety guidance; Equipment Rental adds poles, \
packs, camping gear, and technical gear for advanced routes.
- Cancellation/refund: full refund 14+ days out; 50% for 7-13 days; 25% for 3-6 days; within \
48 hours is non-refundable; weather cancellations by TrailAZ are fully refunded or rescheduled.";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug)]
pub enum ChatServiceError {
    EnvironmentError(String),
    HttpError(reqwest::Error),
    ResponseError(String),
}

impl fmt::Display for ChatServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatServiceError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
            ChatServiceError::HttpError(err) => write!(f, "HTTP error: {}", err),
            ChatServiceError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for ChatServiceError {}

impl From<reqwest::Error> for ChatServiceError {
    fn from(err: reqwest::Error) -> Self {
        ChatServiceError::HttpError(err)
    }
}

#[derive(Clone)]
pub struct ChatService {
    client: Client,
    api_key: String,
    model: String,
}

impl ChatService {
    pub fn new() -> Result<Self, ChatServiceError> {
        let api_key = env::var("GENAI_API_KEY")
            .map_err(|_| ChatServiceError::EnvironmentError("GENAI_API_KEY not set".to_string()))?;
        let model = env::var("GENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            client: Client::new(),
            api_key,
            model,
        })
    }

    /// Single static context block plus the user's message; no conversation
    /// memory is sent.
    pub fn build_prompt(user_message: &str) -> String {
        format!(
            "CONTEXT:\n{}\n\nUSER QUESTION:\n{}",
            KNOWLEDGE_BASE, user_message
        )
    }

    pub async fn ask(&self, user_message: &str) -> Result<String, ChatServiceError> {
        let request = GenerateContentRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::build_prompt(user_message),
                }],
            }],
        };

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ChatServiceError::ResponseError(format!(
                "Chat request failed with status {}: {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            ChatServiceError::ResponseError(format!("Failed to parse response: {}", e))
        })?;

        let reply = body
            .candidates
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if reply.is_empty() {
            return Err(ChatServiceError::ResponseError(
                "Model returned no candidates".to_string(),
            ));
        }

        Ok(reply)
    }
}
