use colored::Colorize;
use std::io::{self, Write};

pub fn write_commands<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Commands:")?;
    writeln!(
        output,
        "  {}  Load a PNG, JPG or JPEG image.",
        "open <image_path>".bold().green()
    )?;
    writeln!(
        output,
        "  {}          Ask the model to describe the image.",
        "generate, g".bold().magenta()
    )?;
    writeln!(
        output,
        "  {}                 Replace the description (end with a '.' line).",
        "edit".bold().cyan()
    )?;
    writeln!(
        output,
        "  {}                 Print the current description.",
        "show".bold().cyan()
    )?;
    writeln!(
        output,
        "  {}          Change the save directory (empty resets it).",
        "dir [path]".bold().blue()
    )?;
    writeln!(
        output,
        "  {}      Append the description to a file.",
        "save [filename]".bold().red()
    )?;
    writeln!(
        output,
        "  {}          Set the OpenAI API key for this session.",
        "key <value>".bold().yellow()
    )?;
    writeln!(output, "  {}          Leave.", "quit, exit".bold())
}

pub fn print_help() -> io::Result<()> {
    println!("{:━^60}", " IMGDESC ".yellow());
    println!("Usage:");
    println!(
        "  {}                          Start an interactive session.",
        "imgdesc".bold().green()
    );
    println!(
        "  {}  Describe one image and save it.",
        "imgdesc <image_path> [directory]".bold().magenta()
    );
    println!(
        "  {}                Display this help message.",
        "imgdesc -h, -help".bold().blue()
    );
    println!();
    write_commands(&mut io::stdout())?;
    println!("\nConfiguration (.env or environment):");
    println!("  {}       API key (prompted for when absent).", "OPENAI_API_KEY".bold());
    println!("  {}       Chat completions endpoint.", "OPENAI_API_URL".bold());
    println!("  {}        Model identifier (default gpt-4o).", "IMGDESC_MODEL".bold());
    println!("  {}     Default save directory.", "IMGDESC_SAVE_DIR".bold());
    println!(
        "  {}  'text' (default) or 'image_url'.",
        "IMGDESC_IMAGE_INPUT".bold()
    );
    println!("{:━^60}", "".yellow());
    Ok(())
}
