use clap::{Arg, Command};
use std::io::Write;
use std::io::{stdin, stdout};

use crate::opt::*;
use crate::room::RoomSession;

pub async fn main(session: &mut RoomSession) -> Res<()> {
    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(session, line) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(stdout(), "{err}").err_to_str()?;
                stdout().flush().err_to_str()?;
            }
        }
    }

    Ok(())
}

fn respond(session: &mut RoomSession, line: &str) -> Res<bool> {
    let args = shlex::split(line).ok_or("error: Invalid quoting".to_string())?;
    let matches = cli().try_get_matches_from(args).err_to_str()?;
    match matches.subcommand() {
        Some(("grid", _matches)) => {
            writeln!(stdout(), "{}", session.grid()).err_to_str()?;
            writeln!(stdout(), "{}", session.turn_prompt()).err_to_str()?;
        }
        Some(("pick", matches)) => {
            let hero_input = matches
                .get_many::<String>("hero")
                .ok_or("error: hero name required".to_string())?
                .map(|s| s.as_str())
                .collect::<Vec<&str>>()
                .join(" ");
            let reply = session.pick(&hero_input)?;
            writeln!(stdout(), "{}", reply).err_to_str()?;
        }
        Some(("confirm", _matches)) => {
            let reply = session.confirm()?;
            writeln!(stdout(), "{}", reply).err_to_str()?;
        }
        Some(("cancel", _matches)) => {
            writeln!(stdout(), "{}", session.cancel()).err_to_str()?;
        }
        Some(("state", _matches)) => {
            writeln!(stdout(), "{}", session.state_summary()).err_to_str()?;
        }
        Some(("quit", _matches)) => {
            writeln!(stdout(), "Exiting ...").err_to_str()?;
            stdout().flush().err_to_str()?;
            return Ok(true);
        }
        _ => unreachable!("subcommand required"),
    }
    stdout().flush().err_to_str()?;

    Ok(false)
}

fn cli() -> Command {
    // strip out usage
    const PARSER_TEMPLATE: &str = "\
        {all-args}
    ";
    // strip out name/version
    const COMMAND_TEMPLATE: &str = "\
        {about-with-newline}\n\
        {usage-heading}\n    {usage}\n\
        \n\
        {all-args}{after-help}\
    ";

    Command::new("repl")
        .multicall(true)
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand_value_name("COMMAND")
        .subcommand_help_heading("COMMANDS")
        .help_template(PARSER_TEMPLATE)
        .subcommand(
            Command::new("grid")
                .about("Show the hero grid with each hero's status")
                .help_template(COMMAND_TEMPLATE),
        )
        .subcommand(
            Command::new("pick")
                .about("Propose a hero for the current turn")
                .arg(Arg::new("hero").required(true).num_args(1..))
                .help_template(COMMAND_TEMPLATE),
        )
        .subcommand(
            Command::new("confirm")
                .about("Commit the pending pick")
                .help_template(COMMAND_TEMPLATE),
        )
        .subcommand(
            Command::new("cancel")
                .about("Dismiss the pending pick")
                .help_template(COMMAND_TEMPLATE),
        )
        .subcommand(
            Command::new("state")
                .about("Show bans and protections so far")
                .help_template(COMMAND_TEMPLATE),
        )
        .subcommand(
            Command::new("quit")
                .alias("exit")
                .alias("q")
                .alias(":q")
                .about("Quit the REPL")
                .help_template(COMMAND_TEMPLATE),
        )
}

fn readline() -> Res<String> {
    write!(stdout(), "> ").err_to_str()?;
    stdout().flush().err_to_str()?;
    let mut buffer = String::new();
    stdin().read_line(&mut buffer).err_to_str()?;
    Ok(buffer)
}
