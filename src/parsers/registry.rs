use std::sync::Arc;

use tracing::debug;

use crate::parsers::{FidelityParser, TransactionParser};

/// Ordered set of statement formats. The first one whose predicate accepts the
/// content wins.
pub struct ParserRegistry {
    parsers: Vec<Arc<dyn TransactionParser>>
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self {
            parsers: Vec::new()
        }
    }

    pub fn register<P: TransactionParser + 'static>(mut self, parser: P) -> Self {
        self.parsers.push(Arc::new(parser));
        self
    }

    pub fn detect(&self, content: &str) -> Option<Arc<dyn TransactionParser>> {
        let parser = self.parsers.iter().find(|parser| parser.supports(content)).cloned();

        match &parser {
            Some(parser) => debug!("Statement claimed by [{}] parser", parser.name()),
            None => debug!("No registered parser claims the statement")
        }

        parser
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new().register(FidelityParser::new())
    }
}
