//! Payment instructions for the premium (x402) endpoints.
//!
//! These tools never call the paid API themselves. They hand the agent
//! everything it needs to do so: where to send the request, which parameters
//! it takes and how the HTTP 402 payment handshake works.

use serde::{Serialize, Serializer};

/// Base URL of the x402-gated Gloria API.
pub const X402_BASE: &str = "https://api.itsgloria.ai";

const PRICE: &str = "USDC on Base — exact amount returned in HTTP 402 response";

const HOW_TO_PAY: &str = "Send a GET request to the endpoint. You'll receive an HTTP 402 \
response with payment details. Complete the USDC payment on Base network, then retry with \
the payment proof header.";

/// Parameter name and its human-readable description.
pub type ParamDoc = (&'static str, &'static str);

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PaymentInfo {
    pub payment_required: bool,
    pub protocol: &'static str,
    pub description: &'static str,
    pub endpoint: String,
    pub method: &'static str,
    #[serde(serialize_with = "serialize_params")]
    pub required_params: &'static [ParamDoc],
    #[serde(
        serialize_with = "serialize_optional_params",
        skip_serializing_if = "Option::is_none"
    )]
    pub optional_params: Option<&'static [ParamDoc]>,
    pub price: &'static str,
    pub how_to_pay: &'static str,
}

fn serialize_params<S: Serializer>(params: &&'static [ParamDoc], s: S) -> Result<S::Ok, S::Error> {
    s.collect_map(params.iter().copied())
}

fn serialize_optional_params<S: Serializer>(
    params: &Option<&'static [ParamDoc]>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match params {
        Some(params) => serialize_params(params, s),
        None => s.serialize_none(),
    }
}

/// Instructions for `GET {X402_BASE}/news`, the full-context news feed.
pub fn enriched_news_payment_info() -> PaymentInfo {
    PaymentInfo {
        payment_required: true,
        protocol: "x402",
        description: "Get enriched news with full AI-generated context, entity analysis, \
and token mentions. Includes long_context and short_context fields omitted from the free tier.",
        endpoint: format!("{X402_BASE}/news"),
        method: "GET",
        required_params: &[(
            "feed_categories",
            "Category code (e.g. 'bitcoin', 'defi', 'ai')",
        )],
        optional_params: Some(&[
            ("from_date", "YYYY-MM-DD"),
            ("to_date", "YYYY-MM-DD"),
            ("limit", "1-10, default 10"),
            ("page", "Page number, default 1"),
        ]),
        price: PRICE,
        how_to_pay: HOW_TO_PAY,
    }
}

/// Instructions for `GET {X402_BASE}/news-ticker-summary`.
pub fn ticker_summary_payment_info() -> PaymentInfo {
    PaymentInfo {
        payment_required: true,
        protocol: "x402",
        description: "Get a comprehensive 24-hour AI-generated summary for any crypto \
ticker or topic. Combines Gloria's curated news with web search for decision-grade bullet points.",
        endpoint: format!("{X402_BASE}/news-ticker-summary"),
        method: "GET",
        required_params: &[(
            "ticker",
            "Ticker symbol or topic name (e.g. 'SOL', 'LayerZero', 'ETH')",
        )],
        optional_params: None,
        price: PRICE,
        how_to_pay: HOW_TO_PAY,
    }
}
