//! # renumd
//!
//! Renumber outline headings across Markdown, Chinese, Roman and lettered
//! notations.
//!
//! ## Usage
//!
//! Convert a file with the saved level choices:
//! ```sh
//! renumd notes.md
//! ```
//!
//! Convert Markdown headings and copy the result:
//! ```sh
//! renumd --preset markdown-depth --copy README.md
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, OutputFormat};
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use renumd::engine::{Conversion, Converter, Level, NumberStyle, PatternId};
use renumd::input::{self, InputError};
use renumd::presets::Preset;
use renumd::Config;
use std::process;
use strum::IntoEnumIterator;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    // Handle dynamic shell completions
    #[cfg(feature = "unstable-dynamic")]
    clap_complete::CompleteEnv::with_factory(|| {
        use clap::CommandFactory;
        Cli::command()
    })
    .complete();

    let args = Cli::parse();

    if args.list_patterns || args.list_styles || args.list_presets {
        if args.list_patterns {
            print_patterns();
        }
        if args.list_styles {
            print_styles();
        }
        if args.list_presets {
            print_presets();
        }
        return Ok(());
    }

    let mut config = if args.no_config {
        Config::default()
    } else {
        Config::load()
    };
    apply_overrides(&mut config, &args);

    // Validate before saving so a rejected combination is never persisted
    let bindings = config
        .bindings()
        .wrap_err("Invalid heading level bindings")?;

    if args.save {
        let path = config.save().wrap_err("Failed to save configuration")?;
        eprintln!("Saved configuration to {}", path.display());
    }

    let source = match input::determine_input_source(args.file.as_deref()) {
        Ok(source) => source,
        // `--save` alone is a complete command
        Err(InputError::NoTty) if args.save => return Ok(()),
        Err(InputError::NoTty) => {
            eprintln!("Error: input file argument is required");
            eprintln!("\nUsage: renumd [OPTIONS] <FILE>");
            eprintln!("       renumd [OPTIONS] -");
            eprintln!("       cat notes.md | renumd [OPTIONS]\n");
            eprintln!("Use '-' to explicitly read from stdin, or pipe input.");
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    let text = input::read_input(&source)?;

    if bindings.is_empty() {
        log::warn!("no heading pattern bound to any level");
        eprintln!(
            "Warning: no input pattern is bound to any level; \
             output will contain paragraphs and list items only."
        );
    }

    let converter = Converter::new(&bindings, &config.styles()).with_options(config.convert);
    let conversion = converter.convert(&text);

    print_conversion(&conversion, &args.output)?;

    if args.copy {
        copy_to_clipboard(&conversion.text());
    }

    Ok(())
}

/// Layer CLI choices over the loaded config: preset first, then per-level flags
fn apply_overrides(config: &mut Config, args: &Cli) {
    if let Some(preset) = args.preset {
        config.apply_preset(preset);
    }
    for (level, binding) in args.binding_overrides() {
        config.set_input(level, binding.pattern());
    }
    for (level, style) in args.style_overrides() {
        config.set_output(level, style);
    }
    if args.clean_body {
        config.convert.clean_body = true;
    }
}

fn print_conversion(conversion: &Conversion, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            if !conversion.is_empty() {
                println!("{}", conversion.text());
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(conversion)?;
            println!("{}", json);
        }
        OutputFormat::Marked => {
            for line in &conversion.lines {
                let gutter = if line.changed { "+ " } else { "  " };
                println!("{}{}", gutter, line.text);
            }
        }
    }
    Ok(())
}

fn copy_to_clipboard(text: &str) {
    let copied = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
    match copied {
        Ok(()) => eprintln!("✓ Copied converted text to clipboard"),
        Err(e) => {
            log::warn!("clipboard unavailable: {e}");
            eprintln!("✗ Could not copy to clipboard: {}", e);
        }
    }
}

fn print_patterns() {
    println!("Input heading patterns:");
    for id in PatternId::selectable() {
        let pattern = id.pattern();
        println!(
            "  {:<20} {:<12} e.g. {}",
            id.to_string(),
            pattern.label,
            pattern.samples.join(" | ")
        );
    }
}

fn print_styles() {
    println!("Output styles:");
    for level in Level::ALL {
        println!("  {}:", level);
        for style in NumberStyle::choices(level) {
            let examples: Vec<_> = (1..=3).map(|n| style.render(level, n)).collect();
            let default = if *style == NumberStyle::default_for(level) {
                " (default)"
            } else {
                ""
            };
            println!(
                "    {:<14} {}{}",
                style.to_string(),
                examples.concat().trim_end(),
                default
            );
        }
    }
}

fn print_presets() {
    println!("Presets:");
    for preset in Preset::iter() {
        println!("  {:<15} {}", preset.to_string(), preset.description());
    }
}
