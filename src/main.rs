use clap::Parser;
use tracing::{error, info};

mod args;
mod error;
mod input;
mod lang;
mod output;
mod pipeline;
mod tts;

use args::Args;
use tts::SynthesisClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info") // set to "debug" for more logs
        .init();

    let args = Args::parse();

    if args.list_languages {
        list_languages();
        return Ok(());
    }

    // clap enforces both paths unless --list-languages was given
    let (Some(input_file), Some(output_file)) = (args.input_file, args.output_file) else {
        anyhow::bail!("--input-file and --output-file are required");
    };

    info!(
        "Converting {} to speech (language {})",
        input_file.display(),
        args.language
    );

    let client = SynthesisClient::new();
    match pipeline::run(&client, &input_file, &output_file, &args.language).await {
        Ok(absolute) => {
            let name = lang::name_of(&args.language).unwrap_or(args.language.as_str());
            println!(
                "Successfully generated {} audio file: {}",
                name,
                output_file.display()
            );
            println!();
            println!("Audio file generated at: {}", absolute.display());
        }
        Err(e) => {
            error!("Conversion failed: {e}");
            println!("Error: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn list_languages() {
    println!();
    println!("Supported Languages:");
    println!("-------------------");
    for (code, name) in lang::all() {
        println!("{code}: {name}");
    }
}
