use crate::constants::{
    CMD_DIR, CMD_EDIT, CMD_EXIT, CMD_GENERATE, CMD_GENERATE_SHORT, CMD_HELP, CMD_KEY, CMD_OPEN,
    CMD_QUIT, CMD_SAVE, CMD_SHOW, CMD_UPLOAD, EDIT_TERMINATOR,
};
use crate::print_help::write_commands;
use crate::session::{Notice, Session};
use crate::utils::create_spinner;
use colored::Colorize;
use std::{
    io::{self, BufRead, Write},
    path::Path,
};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Open(String),
    Generate,
    Edit,
    Show,
    Dir(String),
    Save(Option<String>),
    Key(String),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name {
        "" => Command::Empty,
        CMD_OPEN | CMD_UPLOAD => Command::Open(rest.to_string()),
        CMD_GENERATE | CMD_GENERATE_SHORT => Command::Generate,
        CMD_EDIT => Command::Edit,
        CMD_SHOW => Command::Show,
        CMD_DIR => Command::Dir(rest.to_string()),
        CMD_SAVE if rest.is_empty() => Command::Save(None),
        CMD_SAVE => Command::Save(Some(rest.to_string())),
        CMD_KEY => Command::Key(rest.to_string()),
        CMD_HELP => Command::Help,
        CMD_QUIT | CMD_EXIT => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

pub fn render_notice<W: Write>(output: &mut W, notice: &Notice) -> io::Result<()> {
    match notice {
        Notice::Success(message) => writeln!(output, "{}", message.green()),
        Notice::Error(message) => writeln!(output, "{}", message.red()),
        Notice::Info(message) => writeln!(output, "{}", message.cyan()),
    }
}

/// Reads one line without its terminator; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Collects lines until a lone terminator line or end of input.
pub fn read_edit_block<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut lines = Vec::new();
    while let Some(line) = read_line(input)? {
        if line.trim() == EDIT_TERMINATOR {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// Blocks until a non-empty key is entered. Returns `false` if input ends
/// first.
pub fn prompt_for_credential<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    while !session.has_credential() {
        render_notice(
            output,
            &Notice::Info("Add your OpenAI API key to use this application".to_string()),
        )?;
        write!(output, "{} ", "API key:".bold())?;
        output.flush()?;
        match read_line(input)? {
            Some(key) if key.trim().is_empty() => {}
            Some(key) => {
                let notice = session.supply_credential(&key);
                render_notice(output, &notice)?;
            }
            None => return Ok(false),
        }
    }
    Ok(true)
}

fn show_description<W: Write>(session: &Session, output: &mut W) -> io::Result<()> {
    if session.description().is_empty() {
        return render_notice(output, &Notice::Info("No description yet".to_string()));
    }
    writeln!(output, "{}", "Description:".bold())?;
    writeln!(output, "{}", session.description())
}

/// Runs the interactive loop until `quit` or end of input.
pub async fn run_console<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    if !prompt_for_credential(session, &mut input, &mut output)? {
        return Ok(());
    }

    writeln!(output, "{}", "Image Description".bold().yellow())?;
    writeln!(
        output,
        "Saving to {}. Type {} for commands.",
        session.save_dir().display(),
        CMD_HELP.bold()
    )?;

    loop {
        write!(output, "{} ", ">".bold().green())?;
        output.flush()?;
        let line = match read_line(&mut input)? {
            Some(line) => line,
            None => break,
        };

        match parse_command(&line) {
            Command::Empty => {}
            Command::Open(path) if path.is_empty() => {
                render_notice(&mut output, &Notice::Info("Usage: open <image_path>".to_string()))?;
            }
            Command::Open(path) => {
                let notice = session.upload(Path::new(&path));
                render_notice(&mut output, &notice)?;
            }
            Command::Generate => {
                let spinner = create_spinner("magenta", "Generating description...".to_string());
                let notice = session.generate().await;
                spinner.finish_and_clear();
                render_notice(&mut output, &notice)?;
                if matches!(notice, Notice::Success(_)) {
                    show_description(session, &mut output)?;
                }
            }
            Command::Edit => {
                writeln!(
                    output,
                    "Enter the new description; finish with a line containing only '{}'.",
                    EDIT_TERMINATOR
                )?;
                output.flush()?;
                let text = read_edit_block(&mut input)?;
                let notice = session.edit(text);
                render_notice(&mut output, &notice)?;
            }
            Command::Show => show_description(session, &mut output)?,
            Command::Dir(directory) => {
                let notice = session.set_directory(&directory);
                render_notice(&mut output, &notice)?;
            }
            Command::Save(filename) => {
                let notice = session.save(filename.as_deref());
                render_notice(&mut output, &notice)?;
            }
            Command::Key(key) => {
                let notice = session.supply_credential(&key);
                render_notice(&mut output, &notice)?;
            }
            Command::Help => write_commands(&mut output)?,
            Command::Quit => break,
            Command::Unknown(name) => {
                render_notice(
                    &mut output,
                    &Notice::Info(format!("Unknown command '{}'. Type help.", name)),
                )?;
            }
        }
    }

    Ok(())
}
