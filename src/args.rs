use std::path::PathBuf;

use clap::Parser;

/// Convert a text file to speech in one of the supported languages.
#[derive(Parser, Debug)]
pub struct Args {
    /// Path to input text file (.txt)
    #[clap(long, short = 'i', required_unless_present = "list_languages")]
    pub input_file: Option<PathBuf>,

    /// Path to output audio file (.mp3)
    #[clap(long, short = 'o', required_unless_present = "list_languages")]
    pub output_file: Option<PathBuf>,

    /// Language code (e.g. es, en, fr); see --list-languages for all options
    #[clap(long, short = 'l', default_value = "es")]
    pub language: String,

    /// List all supported languages and their codes
    #[clap(long)]
    pub list_languages: bool,
}
