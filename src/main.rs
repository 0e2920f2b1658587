use std::env;
use std::sync::Arc;

use anyhow::{Context, bail};
use log::info;

use escape_time::{RenderConfig, RenderOutcome, RenderSession};

fn load_config(path: Option<String>) -> anyhow::Result<RenderConfig> {
    match path {
        Some(path) => RenderConfig::from_json_file(&path)
            .with_context(|| format!("failed to load render config from {}", path)),
        None => Ok(RenderConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = load_config(env::args().nth(1))?;
    let RenderConfig {
        viewport,
        fractal,
        colour,
    } = config;

    let session = Arc::new(RenderSession::new());
    let outcome = session
        .spawn_render(viewport, fractal, colour)?
        .join()
        .map_err(|_| anyhow::anyhow!("render thread panicked"))??;

    let RenderOutcome::Completed { elapsed, .. } = outcome else {
        bail!("render was cancelled");
    };

    let Some(image) = session.image() else {
        bail!("render completed without an image");
    };

    info!(
        "{} {}x{} ({} pixels) with {} in {:?}",
        fractal.display_name(),
        image.width(),
        image.height(),
        viewport.size(),
        colour.theme,
        elapsed
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config(Some("/nonexistent/escape_time.json".to_string())).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/escape_time.json"));
    }
}
