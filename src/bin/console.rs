//! Interactive harness for trying the generation pipeline from a terminal.
//!
//! Reads a value for each template placeholder, runs the pipeline, prints the
//! result and offers a repeat loop. Provider errors are printed and the loop
//! continues rather than crashing the process.

use anyhow::Result;
use promptgen::{config, generator::Generator};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".parse().unwrap()),
        )
        .compact()
        .init();

    let mut config = config::load().await?;

    // No credential in config or environment: ask for one instead of failing.
    if config.llm.api_key.is_empty() {
        config.llm.api_key = read_line("API key: ")?;
    }

    let generator = Generator::from_config(&config)?;

    println!("Let's try it out!");

    loop {
        println!();
        let mut args = HashMap::new();
        for name in generator.placeholders() {
            let value = read_line(&format!("{}: ", capitalize(name)))?;
            args.insert(name.clone(), value);
        }
        println!("Generating...\n");

        match generator.generate(&args).await {
            Ok(text) => println!("{text}\n"),
            Err(e) => println!("Error: {e}\n"),
        }

        let again = read_line("Try again (y/n)? ")?;
        if !again.eq_ignore_ascii_case("y") {
            break;
        }
    }

    Ok(())
}
