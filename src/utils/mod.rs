//! Cross-cutting helpers: logging initialization and credential redaction.

pub mod logging;
