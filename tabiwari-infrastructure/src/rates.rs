use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tabiwari_application::{RateSource, RateSourceError, RateUpdate};
use tabiwari_domain::CurrencyCode;

use crate::genai::{GenAiClient, GenAiError, Part};

/// Rate lookup through the generative-language endpoint.
///
/// The model is asked for a flat JSON object of pivot-relative rates, e.g.
/// `{"HKD": 19.5, "USD": 150.2}`. Whatever it answers still passes through
/// the wallet's merge policy, so a hallucinated pivot entry or a zero rate
/// never reaches the table.
pub struct GenAiRateSource {
    client: GenAiClient,
    pivot: CurrencyCode,
}

impl GenAiRateSource {
    pub fn new(client: GenAiClient, pivot: CurrencyCode) -> Self {
        Self { client, pivot }
    }
}

impl RateSource for GenAiRateSource {
    fn fetch(&self, currencies: &[CurrencyCode]) -> Result<RateUpdate, RateSourceError> {
        let codes = currencies
            .iter()
            .map(CurrencyCode::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let prompt = format!(
            "Get real-time exchange rates for 1 unit of [{codes}] to {pivot}. \
             Return valid JSON only, like {{\"HKD\": 19.5, \"USD\": 150.2}}.",
            pivot = self.pivot
        );

        let value = self
            .client
            .generate_json(&[Part::Text(prompt)])
            .map_err(into_source_error)?;
        parse_rates(&value)
    }
}

fn into_source_error(err: GenAiError) -> RateSourceError {
    match err {
        GenAiError::MalformedResponse { detail } => RateSourceError::MalformedResponse { detail },
        other => RateSourceError::Transport {
            source: Box::new(other),
        },
    }
}

/// Reads a `{"CODE": number}` object into a rate update. Number literals go
/// through their decimal text form, so `19.5` stays exactly 19.5.
pub(crate) fn parse_rates(value: &Value) -> Result<RateUpdate, RateSourceError> {
    let object = value
        .as_object()
        .ok_or_else(|| RateSourceError::MalformedResponse {
            detail: format!("expected a JSON object of rates, got: {value}"),
        })?;

    let mut rates = Vec::with_capacity(object.len());
    for (code, rate) in object {
        let Value::Number(number) = rate else {
            return Err(RateSourceError::MalformedResponse {
                detail: format!("rate for {code} is not a number: {rate}"),
            });
        };
        let rate = Decimal::from_str(&number.to_string()).map_err(|err| {
            RateSourceError::MalformedResponse {
                detail: format!("rate for {code} does not fit a decimal: {err}"),
            }
        })?;
        rates.push((CurrencyCode::new(code), rate));
    }
    Ok(RateUpdate { rates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_flat_rate_object() {
        let value = json!({"HKD": 19.5, "USD": 150.2, "KRW": 0.11});
        let mut update = parse_rates(&value).expect("valid rates");
        update.rates.sort();

        assert_eq!(
            update.rates,
            vec![
                (CurrencyCode::new("HKD"), Decimal::new(195, 1)),
                (CurrencyCode::new("KRW"), Decimal::new(11, 2)),
                (CurrencyCode::new("USD"), Decimal::new(1502, 1)),
            ]
        );
    }

    #[test]
    fn lowercase_codes_are_normalized() {
        let value = json!({"hkd": 19});
        let update = parse_rates(&value).expect("valid rates");
        assert_eq!(update.rates[0].0, CurrencyCode::new("HKD"));
    }

    #[test]
    fn non_object_replies_are_malformed() {
        for value in [json!([1, 2]), json!("19.5"), json!(null)] {
            assert!(matches!(
                parse_rates(&value),
                Err(RateSourceError::MalformedResponse { .. })
            ));
        }
    }

    #[test]
    fn non_numeric_rates_are_malformed() {
        let value = json!({"HKD": "19.5"});
        assert!(matches!(
            parse_rates(&value),
            Err(RateSourceError::MalformedResponse { .. })
        ));
    }
}
