mod chat;
mod config;
mod console;
mod constants;
mod credential;
mod editor;
mod error;
mod generator;
mod images;
mod persister;
mod print_help;
mod session;
mod utils;
mod vision;

use crate::config::Settings;
use crate::console::{render_notice, run_console};
use crate::constants::ENV_FILE;
use crate::print_help::print_help;
use crate::session::{Notice, Session};
use std::{env, error::Error, io, path::Path};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "-help" || arg == "-h") {
        print_help()?;
        return Ok(());
    }

    let settings = Settings::load(Path::new(ENV_FILE));
    let client = reqwest::Client::builder().build()?;
    let mut session = Session::new(client, &settings);

    if args.len() < 2 {
        let stdin = io::stdin();
        return Ok(run_console(&mut session, stdin.lock(), io::stdout()).await?);
    }

    describe_once(&mut session, &args[1], args.get(2).map(String::as_str)).await
}

/// Non-interactive path: upload, generate and save a single image.
async fn describe_once(
    session: &mut Session,
    image_path: &str,
    directory: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    if let Some(directory) = directory {
        session.set_directory(directory);
    }

    require_success(session.upload(Path::new(image_path)))?;
    require_success(session.generate().await)?;
    println!("{}", session.description());
    require_success(session.save(None))
}

fn require_success(notice: Notice) -> Result<(), Box<dyn Error>> {
    render_notice(&mut io::stdout(), &notice)?;
    match notice {
        Notice::Success(_) => Ok(()),
        Notice::Error(message) | Notice::Info(message) => Err(message.into()),
    }
}
