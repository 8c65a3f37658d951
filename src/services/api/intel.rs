//! # Intelligence Endpoint
//!
//! Gemini `generateContent` calls behind the terminal's AI features: the
//! chat assistant, structured sentiment analysis, and whale transfer
//! narratives. The whale radar feed itself is simulated here too, so the
//! whole intel surface sits behind one service.
//!
//! Request bodies follow the Google REST shape: `contents` with
//! user/model turns, `systemInstruction` for the persona, and
//! `generationConfig` for sampling and (for sentiment) the JSON response
//! schema. The reply text is `candidates[0].content.parts[*].text`
//! concatenated.

use crate::app::state::{ChatMessage, ChatRole, WhaleTransfer};
use crate::core::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use super::client::ApiClient;

/// Google generative language API base URL
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used for every intel call
const GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Environment variable holding the API key, read at call time
const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Analyst persona shared by the chat overlay and the transfer narratives
const ANALYST_PERSONA: &str = "Sen MUST3Y terminalinin kripto analiz asistanısın. \
    Sokak dili bilen, piyasayı yakından takip eden bir analistsin. \
    Her zaman Türkçe cevap ver. Kısa ve net konuş, iki üç cümleyi geçme. \
    Emin olmadığın konuda tahmin yürütme, söyle.";

/// Persona for the structured sentiment analysis
const SENTIMENT_PERSONA: &str = "Sen bir kripto piyasa duygu analistisin. \
    Verilen varlık ve haber başlıklarına göre piyasa duygusunu değerlendir. \
    Analizi ve notu Türkçe yaz. Yalnızca istenen JSON şemasıyla cevap ver.";

/// Simulated radar sweep duration
const SCAN_DELAY: std::time::Duration = std::time::Duration::from_millis(2_500);

/// Run a structured sentiment analysis for an asset or topic.
#[tracing::instrument(skip(client, headlines), fields(asset = %asset))]
pub async fn analyze_sentiment(
    client: &ApiClient,
    asset: &str,
    headlines: &[&str],
) -> Result<SentimentReport> {
    let body = build_sentiment_body(asset, headlines);
    let text = generate(client, &body).await?;
    parse_sentiment(&text)
}

/// Produce the next assistant reply for a chat transcript.
#[tracing::instrument(skip_all, fields(turns = transcript.len()))]
pub async fn chat_reply(client: &ApiClient, transcript: &[ChatMessage]) -> Result<String> {
    let body = build_chat_body(transcript);
    generate(client, &body).await
}

/// Ask for a short narrative about one whale transfer.
#[tracing::instrument(skip(client), fields(transfer_id = %transfer.id))]
pub async fn explain_transfer(client: &ApiClient, transfer: &WhaleTransfer) -> Result<String> {
    let body = build_explain_body(transfer);
    generate(client, &body).await
}

/// Radar sweep: fixed delay, then the demo transfer set.
///
/// This is the seam where a live on-chain feed would plug in; everything
/// downstream (feed state, narratives, epoch guard) already treats it as
/// an async source.
pub async fn scan_whale_transfers() -> Result<Vec<WhaleTransfer>> {
    tokio::time::sleep(SCAN_DELAY).await;
    Ok(demo_whale_transfers())
}

/// The three demo transfers shown by the radar
pub fn demo_whale_transfers() -> Vec<WhaleTransfer> {
    let now = chrono::Utc::now();
    vec![
        WhaleTransfer {
            id: "w1".to_string(),
            from_label: "Binance".to_string(),
            to_label: "Soğuk Cüzdan".to_string(),
            asset_symbol: "BTC".to_string(),
            amount: 3_500.0,
            usd_value: 245_000_000.0,
            observed_at: now - chrono::Duration::minutes(3),
        },
        WhaleTransfer {
            id: "w2".to_string(),
            from_label: "Bilinmeyen Balina".to_string(),
            to_label: "Coinbase".to_string(),
            asset_symbol: "ETH".to_string(),
            amount: 150_000.0,
            usd_value: 390_000_000.0,
            observed_at: now - chrono::Duration::minutes(12),
        },
        WhaleTransfer {
            id: "w3".to_string(),
            from_label: "Kraken".to_string(),
            to_label: "Bilinmeyen Cüzdan".to_string(),
            asset_symbol: "SOL".to_string(),
            amount: 1_200_000.0,
            usd_value: 180_000_000.0,
            observed_at: now - chrono::Duration::minutes(45),
        },
    ]
}

// ==================== REQUEST BUILDING ====================

/// Map a transcript to Google-format turns (user / model).
fn build_chat_body(transcript: &[ChatMessage]) -> Value {
    let contents: Vec<Value> = transcript
        .iter()
        .map(|m| {
            let role = match m.role {
                ChatRole::User => "user",
                ChatRole::Assistant => "model",
            };
            json!({
                "role": role,
                "parts": [{"text": m.text}]
            })
        })
        .collect();

    json!({
        "contents": contents,
        "systemInstruction": {
            "parts": [{"text": ANALYST_PERSONA}]
        },
        "generationConfig": {
            "temperature": 0.8,
            "maxOutputTokens": 256
        }
    })
}

fn build_sentiment_body(asset: &str, headlines: &[&str]) -> Value {
    let mut prompt = format!("Varlık: {}\n\nGüncel başlıklar:\n", asset);
    for headline in headlines {
        prompt.push_str("- ");
        prompt.push_str(headline);
        prompt.push('\n');
    }
    prompt.push_str("\nBu varlık için piyasa duygusunu 0-100 arası skorla.");

    json!({
        "contents": [{
            "role": "user",
            "parts": [{"text": prompt}]
        }],
        "systemInstruction": {
            "parts": [{"text": SENTIMENT_PERSONA}]
        },
        "generationConfig": {
            "temperature": 0.3,
            "maxOutputTokens": 512,
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "score": {"type": "INTEGER"},
                    "label": {"type": "STRING", "enum": ["positive", "negative"]},
                    "analysis": {"type": "STRING"},
                    "note": {"type": "STRING"}
                },
                "required": ["score", "label", "analysis", "note"]
            }
        }
    })
}

fn build_explain_body(transfer: &WhaleTransfer) -> Value {
    let prompt = format!(
        "Büyük bir transfer yakalandı: {} -> {}, {} {} (yaklaşık {} USD). \
         Bu hareket piyasa için ne anlama gelebilir? Kısa bir yorum yap.",
        transfer.from_label,
        transfer.to_label,
        transfer.amount,
        transfer.asset_symbol,
        transfer.usd_value
    );

    json!({
        "contents": [{
            "role": "user",
            "parts": [{"text": prompt}]
        }],
        "systemInstruction": {
            "parts": [{"text": ANALYST_PERSONA}]
        },
        "generationConfig": {
            "temperature": 0.7,
            "maxOutputTokens": 200
        }
    })
}

// ==================== TRANSPORT ====================

fn api_key() -> Result<String> {
    std::env::var(GEMINI_API_KEY_ENV)
        .map_err(|_| AppError::AiRequest(format!("{} is not set", GEMINI_API_KEY_ENV)))
}

/// POST one `generateContent` request and return the reply text.
async fn generate(client: &ApiClient, body: &Value) -> Result<String> {
    let key = api_key()?;
    let url = format!(
        "{}/{}:generateContent?key={}",
        GEMINI_BASE_URL, GEMINI_MODEL, key
    );

    let start = std::time::Instant::now();
    let response = client
        .http
        .post(&url)
        .json(body)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Gemini network error");
            AppError::AiRequest(format!("Network error: {}", e))
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Gemini request rejected");
        return Err(AppError::AiRequest(format!(
            "Request failed: {}",
            status
        )));
    }

    let payload = response.json::<Value>().await.map_err(|e| {
        tracing::error!(error = %e, "Gemini response parse error");
        AppError::InvalidAiResponse(format!("Failed to parse response: {}", e))
    })?;

    let text = extract_text(&payload)?;
    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        chars = text.len(),
        "Gemini reply received"
    );
    Ok(text)
}

/// Concatenate `candidates[0].content.parts[*].text`.
fn extract_text(payload: &Value) -> Result<String> {
    let parts = payload
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| AppError::InvalidAiResponse("no candidates in response".to_string()))?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        return Err(AppError::InvalidAiResponse(
            "empty reply text".to_string(),
        ));
    }
    Ok(text)
}

/// Parse and validate the structured sentiment reply.
fn parse_sentiment(text: &str) -> Result<SentimentReport> {
    let report: SentimentReport = serde_json::from_str(text)
        .map_err(|e| AppError::InvalidAiResponse(format!("bad sentiment JSON: {}", e)))?;
    if report.score > 100 {
        return Err(AppError::InvalidAiResponse(format!(
            "score out of range: {}",
            report.score
        )));
    }
    Ok(report)
}

// ==================== INTEL TYPES ====================

/// Verdict of a sentiment analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

/// Structured sentiment analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// 0-100
    pub score: u8,
    pub label: SentimentLabel,
    /// Short Turkish analysis paragraph
    pub analysis: String,
    /// One-line caveat or side note
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_body_maps_roles_and_persona() {
        let now = chrono::Utc::now();
        let transcript = vec![
            ChatMessage {
                role: ChatRole::User,
                text: "selam".into(),
                sent_at: now,
            },
            ChatMessage {
                role: ChatRole::Assistant,
                text: "selam, piyasa hareketli".into(),
                sent_at: now,
            },
            ChatMessage {
                role: ChatRole::User,
                text: "BTC ne durumda?".into(),
                sent_at: now,
            },
        ];

        let body = build_chat_body(&transcript);
        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["parts"][0]["text"], "BTC ne durumda?");
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            ANALYST_PERSONA
        );
    }

    #[test]
    fn sentiment_body_requests_json_schema() {
        let body = build_sentiment_body("bitcoin", &["ETF girişleri hızlandı"]);
        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["type"], "OBJECT");
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("bitcoin"));
        assert!(prompt.contains("ETF girişleri hızlandı"));
    }

    #[test]
    fn extract_text_concatenates_parts() {
        let payload = serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Merhaba"}, {"text": " dünya"}]
                },
                "finishReason": "STOP"
            }]
        });
        assert_eq!(extract_text(&payload).unwrap(), "Merhaba dünya");
    }

    #[test]
    fn extract_text_rejects_empty_payload() {
        let payload = serde_json::json!({"candidates": []});
        assert!(matches!(
            extract_text(&payload),
            Err(AppError::InvalidAiResponse(_))
        ));
    }

    #[test]
    fn parse_sentiment_validates_score_range() {
        let good = r#"{"score": 72, "label": "positive", "analysis": "Alım iştahı güçlü.", "note": "ETF akışları destekliyor."}"#;
        let report = parse_sentiment(good).unwrap();
        assert_eq!(report.score, 72);
        assert_eq!(report.label, SentimentLabel::Positive);

        let out_of_range = r#"{"score": 140, "label": "negative", "analysis": "x", "note": "y"}"#;
        assert!(matches!(
            parse_sentiment(out_of_range),
            Err(AppError::InvalidAiResponse(_))
        ));

        assert!(parse_sentiment("tabii, işte analiz:").is_err());
    }

    #[test]
    fn demo_transfers_match_radar_feed() {
        let transfers = demo_whale_transfers();
        assert_eq!(transfers.len(), 3);
        assert_eq!(transfers[0].id, "w1");
        assert_eq!(transfers[0].from_label, "Binance");
        assert_eq!(transfers[0].to_label, "Soğuk Cüzdan");
        assert_eq!(transfers[0].amount, 3_500.0);
        assert_eq!(transfers[1].asset_symbol, "ETH");
        assert_eq!(transfers[2].usd_value, 180_000_000.0);
        // Ordered newest first
        assert!(transfers[0].observed_at > transfers[2].observed_at);
    }
}
