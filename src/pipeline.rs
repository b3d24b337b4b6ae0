use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ConvertError;
use crate::input;
use crate::output;
use crate::tts::SynthesisClient;

/// End-to-end conversion: validate both paths, fetch the narration, write the
/// artifact. Every failure short-circuits the rest; directories already
/// created for the output are left in place.
pub async fn run(
    client: &SynthesisClient,
    input_path: &Path,
    output_path: &Path,
    lang_code: &str,
) -> Result<PathBuf, ConvertError> {
    if !input_path.is_file() {
        return Err(ConvertError::NotFound(input_path.to_path_buf()));
    }

    let text = input::load(input_path)?;
    output::prepare(output_path)?;

    let audio = client.synthesize(&text, lang_code).await?;

    // Overwrites any previous artifact at the same path.
    fs::write(output_path, &audio)
        .map_err(|e| ConvertError::io("failed to write audio file", e))?;
    info!(
        "Wrote {} bytes to {}",
        audio.len(),
        output_path.display()
    );

    output_path
        .canonicalize()
        .map_err(|e| ConvertError::io("failed to resolve output path", e))
}
