//! Unit tests for the Shopify API module.
