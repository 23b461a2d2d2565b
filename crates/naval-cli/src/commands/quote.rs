use crate::cli::{CliError, OkEnvelope};
use naval_core::{Quote, QuoteBook, RenderOptions, Renderer, Selection};
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct QuotesPayload<'a> {
    quotes: &'a [Quote],
}

/// Select quotes from the embedded book and render them
#[instrument(skip(options))]
pub fn execute_render(
    selection: Selection,
    count: usize,
    options: RenderOptions,
    json: bool,
) -> Result<String, CliError> {
    let renderer = Renderer::new(options)?;
    let quotes = QuoteBook::embedded().select(selection, count);

    if json {
        let envelope = OkEnvelope::new(QuotesPayload { quotes: &quotes });
        let json = serde_json::to_string(&envelope).map_err(naval_core::Error::from)?;
        return Ok(format!("{json}\n"));
    }

    Ok(renderer.render(&quotes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use naval_core::render::is_framing_char;

    fn plain() -> RenderOptions {
        RenderOptions {
            show_ascii: false,
            color: false,
            width: None,
        }
    }

    #[test]
    fn test_default_render_is_framed() {
        let output =
            execute_render(Selection::Featured, 1, RenderOptions::default(), false).unwrap();
        assert!(output.contains("Naval Ravikant"));
        assert!(output.contains("Seek wealth"));
        assert!(output.chars().any(is_framing_char));
    }

    #[test]
    fn test_plain_render_has_no_framing() {
        let output = execute_render(Selection::Featured, 1, plain(), false).unwrap();
        assert!(output.contains("Naval Ravikant"));
        assert!(!output.chars().any(is_framing_char));
    }

    #[test]
    fn test_render_is_idempotent() {
        let first = execute_render(Selection::Seeded(3), 2, plain(), false).unwrap();
        let second = execute_render(Selection::Seeded(3), 2, plain(), false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_json_render() {
        let output = execute_render(Selection::Featured, 2, plain(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "ok");
        let quotes = value["data"]["quotes"].as_array().unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0]["author"], "Naval Ravikant");
    }

    #[test]
    fn test_narrow_width_is_config_error() {
        let options = RenderOptions {
            width: Some(4),
            ..plain()
        };
        let err = execute_render(Selection::Featured, 1, options, false).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }
}
