use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tabiwari_application::{ReceiptDetails, ReceiptExtractError, ReceiptExtractor, ReceiptImage};
use tabiwari_domain::CurrencyCode;

use crate::genai::{GenAiClient, GenAiError, Part};

const PROMPT: &str = "This is a photo of a receipt or voucher. Extract the grand total and \
     return valid JSON only, like {\"title\": \"Ichiran Ramen\", \"amount\": 2980, \
     \"currency\": \"JPY\", \"category\": \"Food\"}. Use null for anything you cannot read; \
     amount is the total actually charged.";

/// Receipt extraction through the generative-language endpoint: the image
/// goes up inline, structured fields come back as JSON.
pub struct GenAiReceiptExtractor {
    client: GenAiClient,
}

impl GenAiReceiptExtractor {
    pub fn new(client: GenAiClient) -> Self {
        Self { client }
    }
}

impl ReceiptExtractor for GenAiReceiptExtractor {
    fn extract(&self, image: &ReceiptImage<'_>) -> Result<ReceiptDetails, ReceiptExtractError> {
        let mime_type = image.content_type.unwrap_or("image/jpeg").to_owned();
        let parts = [
            Part::Text(PROMPT.to_owned()),
            Part::InlineData {
                mime_type,
                data: BASE64.encode(image.bytes),
            },
        ];

        let value = self
            .client
            .generate_json(&parts)
            .map_err(into_extract_error)?;
        parse_receipt(&value)
    }
}

fn into_extract_error(err: GenAiError) -> ReceiptExtractError {
    match err {
        GenAiError::MalformedResponse { detail } => {
            ReceiptExtractError::MalformedResponse { detail }
        }
        other => ReceiptExtractError::Transport {
            source: Box::new(other),
        },
    }
}

/// Reads the model's `{title, amount, currency, category}` reply. Only the
/// amount is mandatory; everything else degrades to `None`.
pub(crate) fn parse_receipt(value: &Value) -> Result<ReceiptDetails, ReceiptExtractError> {
    let object = value
        .as_object()
        .ok_or_else(|| ReceiptExtractError::MalformedResponse {
            detail: format!("expected a JSON object, got: {value}"),
        })?;

    let amount = match object.get("amount") {
        Some(Value::Number(number)) => Decimal::from_str(&number.to_string()).map_err(|err| {
            ReceiptExtractError::MalformedResponse {
                detail: format!("amount does not fit a decimal: {err}"),
            }
        })?,
        Some(Value::Null) | None => return Err(ReceiptExtractError::TotalNotFound),
        Some(other) => {
            return Err(ReceiptExtractError::MalformedResponse {
                detail: format!("amount is not a number: {other}"),
            })
        }
    };

    let text_field = |key: &str| {
        object
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_owned)
    };

    Ok(ReceiptDetails {
        title: text_field("title"),
        amount,
        currency: text_field("currency").map(CurrencyCode::new),
        category: text_field("category"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_complete_reply() {
        let value = json!({
            "title": "Ichiran Ramen",
            "amount": 2980,
            "currency": "jpy",
            "category": "Food"
        });
        let details = parse_receipt(&value).expect("valid receipt");

        assert_eq!(details.title.as_deref(), Some("Ichiran Ramen"));
        assert_eq!(details.amount, Decimal::from(2980));
        assert_eq!(details.currency, Some(CurrencyCode::new("JPY")));
        assert_eq!(details.category.as_deref(), Some("Food"));
    }

    #[test]
    fn null_and_blank_fields_degrade_to_none() {
        let value = json!({"title": null, "amount": 12.5, "currency": "  ", "category": null});
        let details = parse_receipt(&value).expect("valid receipt");

        assert_eq!(details.title, None);
        assert_eq!(details.amount, Decimal::new(125, 1));
        assert_eq!(details.currency, None);
        assert_eq!(details.category, None);
    }

    #[test]
    fn missing_amount_is_total_not_found() {
        for value in [json!({"title": "?"}), json!({"amount": null})] {
            assert!(matches!(
                parse_receipt(&value),
                Err(ReceiptExtractError::TotalNotFound)
            ));
        }
    }

    #[test]
    fn non_object_replies_are_malformed() {
        assert!(matches!(
            parse_receipt(&json!("2980")),
            Err(ReceiptExtractError::MalformedResponse { .. })
        ));
    }
}
