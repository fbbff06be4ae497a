/// Body of the `gloria://about` resource.
pub const ABOUT_TEXT: &str = "\
Gloria AI is a real-time crypto intelligence platform that curates news from crypto Twitter. \
Every item passes through a multi-stage AI pipeline:

1. Ingestion from 100+ curated Twitter accounts
2. Multi-topic filtering (single-event focus)
3. Duplicate detection via embeddings + keyword matching
4. Newsworthiness scoring by AI curator
5. Category classification across 18 topics
6. Sentiment analysis and entity extraction
7. AI-generated headlines and context

Coverage: Bitcoin, Ethereum, DeFi, AI/ML, Solana, Base, Macro, Ripple, RWA, Perps, Hyperliquid, and more.

Update frequency: News items appear within ~2-3 minutes of the original tweet. \
Recaps are generated hourly for crypto/macro, every 8-24h for other categories.

Free tier: Headlines, sentiment, categories, sources.
Paid tier (x402): Full context, entity analysis, ticker summaries.

Website: https://itsgloria.ai
API docs: https://cryptobriefing.com/llms.txt";

/// Instructions sent to the client in the `initialize` result.
pub const SERVER_INSTRUCTIONS: &str = "Real-time curated crypto news from Gloria AI. \
Covers 18 categories including Bitcoin, Ethereum, DeFi, AI, Solana, and more. \
News is sourced from crypto Twitter, filtered by AI for relevance, \
and enriched with sentiment analysis and entity extraction. \
Use get_categories to discover available topics, then get_latest_news \
or get_news_recap for data. Paid tools return x402 payment instructions.";
