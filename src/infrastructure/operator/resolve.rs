//! Resolution preview operator implementation.

use async_trait::async_trait;
use tracing::debug;

use crate::application::resolution::parser::DescriptionParser;
use crate::domain::request::ParsedRequest;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_engine;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::resolve::{ResolutionOperator, ResolutionPreview};

use super::entry::Operator;

#[async_trait]
impl ResolutionOperator for Operator {
    fn parse_description(&self, description: &str) -> ParsedRequest {
        DescriptionParser::parse(description)
    }

    async fn preview_resolution(
        &self,
        config_toml: &str,
        description: &str,
    ) -> Result<ResolutionPreview> {
        let config = Config::parse_toml(config_toml)?;
        config.init_logging();

        let engine = build_engine(&config)?;
        let request = DescriptionParser::parse(description);
        debug!(?request, "Previewing resolution");
        let verdict = engine.evaluate_description(description).await;

        Ok(ResolutionPreview { request, verdict })
    }
}
