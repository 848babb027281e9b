//! Rendering a batch of documents.

use crate::{PackEntry, RenderRequest};
use log::{debug, info};
use pagedown_config::Config;
use pagedown_render::render_with_config;
use rayon::prelude::*;

fn render_one(request: &RenderRequest, config: &Config) -> PackEntry {
    let document = match &request.markdown {
        Some(markdown) => Some(render_with_config(markdown, &request.output_name, config).bytes),
        None => {
            debug!("{}: no content, skipping render", request.output_name);
            None
        }
    };

    PackEntry {
        output_name: request.output_name.clone(),
        document,
    }
}

/// Render every request, keeping the input order.
///
/// Rendering never fails, so each request yields exactly one entry; only
/// requests without markdown produce an entry without a document.
pub fn render_batch(requests: &[RenderRequest], config: &Config) -> Vec<PackEntry> {
    info!(
        "rendering {} documents{}",
        requests.len(),
        if config.features.parallel { " in parallel" } else { "" }
    );

    if config.features.parallel {
        requests
            .par_iter()
            .map(|request| render_one(request, config))
            .collect()
    } else {
        requests
            .iter()
            .map(|request| render_one(request, config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requests() -> Vec<RenderRequest> {
        (0..8)
            .map(|i| RenderRequest::new(format!("doc{}.md", i), format!("# Doc {}", i)))
            .collect()
    }

    #[test]
    fn test_order_preserved() {
        let entries = render_batch(&requests(), &Config::default());
        let names: Vec<&str> = entries.iter().map(|e| e.output_name.as_str()).collect();
        let expected: Vec<String> = (0..8).map(|i| format!("doc{}.md", i)).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let mut config = Config::default();
        config.features.parallel = false;
        let sequential = render_batch(&requests(), &config);
        config.features.parallel = true;
        let parallel = render_batch(&requests(), &config);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_missing_markdown() {
        let entries = render_batch(
            &[RenderRequest::missing("a.md"), RenderRequest::new("b.md", "")],
            &Config::default(),
        );
        assert!(entries[0].document.is_none());
        let pdf = entries[1].document.as_ref().unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
    }
}
