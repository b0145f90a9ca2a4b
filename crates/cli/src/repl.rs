use std::{
    io::{stdin, stdout, Write},
    process::ExitCode,
};

use cli_common::LexError;
use lexer::{tokenize, Arena};
use validator::{validate, validate_with_capacity};

use crate::report;

const DEBUG_STATEMENTS: [&str; 3] = [
    "SELECT a, b FROM t;",
    "INSERT INTO t VALUES (1, 'x');",
    "SELECT FROM t WHERE a = ;",
];

#[derive(Debug, Default, Clone)]
pub struct Settings {
    /// Overrides the default of one slot per token plus two.
    pub error_capacity: Option<usize>,
    pub show_tokens: bool,
}

pub struct Repl {
    settings: Settings,
}

#[derive(Debug)]
pub enum ReplResult {
    Exit,
    Help,
    ToggleTokens,
    RunDebug,
    NoInput,
    UnrecognisedInput,
    Ok(CommandResult),
}

#[derive(Debug)]
pub enum CommandResult {
    Checked { ok: bool, report: String },
    LexError(LexError),
    Failed(String),
}

impl CommandResult {
    pub fn print(&self) {
        match self {
            CommandResult::Checked { report, .. } => println!("{report}"),
            CommandResult::LexError(err) => println!("Lexer Error: {err}"),
            CommandResult::Failed(err) => println!("Program Error: {err}"),
        }
    }

    /// 0 when valid, 1 when invalid, 2 when the input could not be checked.
    pub fn status(&self) -> u8 {
        match self {
            CommandResult::Checked { ok: true, .. } => 0,
            CommandResult::Checked { ok: false, .. } => 1,
            CommandResult::LexError(_) | CommandResult::Failed(_) => 2,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

impl Repl {
    pub fn new(settings: Settings) -> Self {
        Repl { settings }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            Repl::print_prompt()?;

            let mut buf = String::new();
            match stdin().read_line(&mut buf) {
                // End of input.
                Ok(0) => {
                    println!();
                    break;
                }
                Ok(_) => match self.handle_repl_command(&buf) {
                    ReplResult::Ok(command_result) => command_result.print(),
                    ReplResult::Help => Repl::print_help(),
                    ReplResult::ToggleTokens => {
                        self.settings.show_tokens = !self.settings.show_tokens;
                        let state = if self.settings.show_tokens { "on" } else { "off" };
                        println!("Token table {state}.");
                    }
                    ReplResult::RunDebug => {
                        for statement in DEBUG_STATEMENTS {
                            println!("> {statement}");
                            self.eval_command(statement).print();
                        }
                    }
                    ReplResult::UnrecognisedInput => {
                        println!("Error! Command not recognised.");
                    }
                    ReplResult::Exit => {
                        println!("Goodbye.");
                        break;
                    }
                    ReplResult::NoInput => continue,
                },
                Err(err) => eprintln!("{err}"),
            }
        }

        Ok(())
    }

    pub fn eval_command(&self, input: &str) -> CommandResult {
        let arena = Arena::for_input(input);

        let tokens = match tokenize(input, &arena) {
            Ok(tokens) => tokens,
            Err(err) => return CommandResult::LexError(err),
        };

        let result = match self.settings.error_capacity {
            Some(capacity) => validate_with_capacity(&tokens, capacity),
            None => validate(&tokens),
        };

        log::info!(
            "Checked {} tokens: {} error(s)",
            tokens.len(),
            result.error_count()
        );

        let mut output = String::new();
        if self.settings.show_tokens {
            output.push_str(&report::render_tokens(&tokens));
            output.push('\n');
        }
        output.push_str(&report::render(&result));

        CommandResult::Checked {
            ok: result.is_ok(),
            report: output,
        }
    }

    pub fn eval_file(&self, file: &std::path::Path) -> CommandResult {
        match std::fs::read_to_string(file) {
            Ok(file_content) => self.eval_command(&file_content),
            Err(err) => CommandResult::Failed(format!("Failed to open {}: {err}", file.display())),
        }
    }

    /// Handle user input via REPL. Either checks a statement or
    /// short-circuits for a meta command.
    fn handle_repl_command(&self, buf: &str) -> ReplResult {
        let fmt_buf = buf.trim();

        if fmt_buf.is_empty() {
            ReplResult::NoInput
        } else if Repl::is_meta_command(fmt_buf) {
            Repl::handle_meta_command(fmt_buf)
        } else {
            ReplResult::Ok(self.eval_command(fmt_buf))
        }
    }

    fn is_meta_command(buf: &str) -> bool {
        buf.starts_with('.') || buf == "?"
    }

    fn handle_meta_command(buf: &str) -> ReplResult {
        match buf.to_lowercase().as_ref() {
            ".exit" | ".quit" | ".close" => ReplResult::Exit,
            ".help" | ".h" | "?" | ".?" => ReplResult::Help,
            ".tokens" => ReplResult::ToggleTokens,
            ".dbg" => ReplResult::RunDebug,
            _ => ReplResult::UnrecognisedInput,
        }
    }

    fn print_help() {
        println!("Enter a statement to check it, e.g. SELECT a FROM t;");
        println!("  .tokens   toggle the token table");
        println!("  .dbg      check a few sample statements");
        println!("  .exit     leave");
    }

    fn print_prompt() -> std::io::Result<()> {
        print!("> ");
        stdout().flush()
    }
}

#[cfg(test)]
mod repl_tests {
    use super::*;

    fn repl() -> Repl {
        Repl::new(Settings::default())
    }

    #[test]
    fn test_meta_commands() {
        assert!(matches!(Repl::handle_meta_command(".EXIT"), ReplResult::Exit));
        assert!(matches!(Repl::handle_meta_command("?"), ReplResult::Help));
        assert!(matches!(Repl::handle_meta_command(".tokens"), ReplResult::ToggleTokens));
        assert!(matches!(Repl::handle_meta_command(".dbg"), ReplResult::RunDebug));
        assert!(matches!(Repl::handle_meta_command(".nope"), ReplResult::UnrecognisedInput));
    }

    #[test]
    fn test_blank_line_is_no_input() {
        assert!(matches!(repl().handle_repl_command("  \n"), ReplResult::NoInput));
    }

    #[test]
    fn test_statement_is_checked() {
        match repl().handle_repl_command("SELECT a FROM t;\n") {
            ReplResult::Ok(CommandResult::Checked { ok, report }) => {
                assert!(ok);
                assert_eq!(report, "validation: ok");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_exit_codes() {
        let repl = repl();

        assert_eq!(repl.eval_command("SELECT a FROM t;").status(), 0);
        assert_eq!(repl.eval_command("SELECT a FROM t").status(), 1);
        assert_eq!(CommandResult::Failed(String::from("x")).status(), 2);
    }

    #[test]
    fn test_error_capacity_setting() {
        let repl = Repl::new(Settings {
            error_capacity: Some(1),
            show_tokens: false,
        });

        match repl.eval_command("FROM a;") {
            CommandResult::Checked { ok, report } => {
                assert!(!ok);
                assert!(report.contains("3 more error(s) not shown"));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_show_tokens_setting() {
        let repl = Repl::new(Settings {
            error_capacity: None,
            show_tokens: true,
        });

        match repl.eval_command("select a from t;") {
            CommandResult::Checked { report, .. } => {
                assert!(report.contains("SQL_IDENTIFIER"));
                assert!(report.ends_with("validation: ok"));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = repl().eval_file(std::path::Path::new("does/not/exist.sql"));

        assert!(matches!(result, CommandResult::Failed(_)));
    }
}
