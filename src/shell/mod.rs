use colored::Colorize;
use std::io::{self, BufRead, Write};

use crate::commands::kinds::kinds_table;
use crate::config::SolverConfig;
use crate::core::diagnostics::render_error;
use crate::core::dispatch::{EquationKind, Solvers};

/// Outcome of one shell line.
#[derive(Debug, PartialEq)]
pub enum Reply {
    Text(String),
    Exit,
}

pub struct Shell {
    kind: EquationKind,
    config: SolverConfig,
    solvers: Solvers,
}

impl Shell {
    pub fn new(config: SolverConfig) -> Self {
        let solvers = Solvers::from_config(&config);
        Self { kind: EquationKind::Quadratic, config, solvers }
    }

    pub fn kind(&self) -> EquationKind {
        self.kind
    }

    pub fn eval(&mut self, line: &str) -> Reply {
        let line = line.trim();
        let mut parts = line.splitn(2, char::is_whitespace);
        let cmd = parts.next().unwrap_or_default();
        let rest = parts.next().map(str::trim).unwrap_or_default();

        match cmd {
            "" => Reply::Text(String::new()),
            "help" | "?" => Reply::Text(help_text()),
            "exit" | "quit" => Reply::Exit,
            "kinds" => Reply::Text(kinds_table()),
            "config" => Reply::Text(match self.config.to_toml_string() {
                Ok(s) => s,
                Err(e) => format!("{} {:#}", "err:".red().bold(), e),
            }),
            "kind" if rest.is_empty() => Reply::Text(format!("current kind: {}", self.kind)),
            "kind" => match rest.parse::<EquationKind>() {
                Ok(k) => {
                    self.kind = k;
                    Reply::Text(format!("kind set to {}", k))
                }
                Err(e) => Reply::Text(format!("{} {}", "err:".red().bold(), e)),
            },
            _ => Reply::Text(self.solve_line(line)),
        }
    }

    /// `<kind>: <equation>` overrides the current kind for one line.
    fn solve_line(&self, line: &str) -> String {
        let (kind, text) = match line.split_once(':') {
            Some((prefix, eq)) => match prefix.parse::<EquationKind>() {
                Ok(k) => (k, eq.trim()),
                Err(_) => (self.kind, line),
            },
            None => (self.kind, line),
        };
        match self.solvers.solve(kind, text) {
            Ok(s) => s,
            Err(e) => render_error(text, &e).trim_end().to_string(),
        }
    }
}

pub fn start(config: SolverConfig) -> anyhow::Result<()> {
    banner();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(config, stdin.lock(), stdout.lock(), true)
}

/// Reads lines from `input` until EOF or `exit`.
pub fn run<R: BufRead, W: Write>(
    config: SolverConfig,
    input: R,
    mut output: W,
    prompt: bool,
) -> anyhow::Result<()> {
    let mut shell = Shell::new(config);
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(
                output,
                "{} {} ",
                format!("⟦{}⟧", shell.kind()).bold().truecolor(0, 200, 255),
                "›".truecolor(255, 240, 0)
            )?;
            output.flush()?;
        }
        let Some(line) = lines.next() else {
            if prompt {
                writeln!(output)?;
            }
            break;
        };
        match shell.eval(&line?) {
            Reply::Exit => break,
            Reply::Text(t) if t.is_empty() => {}
            Reply::Text(t) => writeln!(output, "{}", t)?,
        }
    }
    Ok(())
}

fn banner() {
    println!(
        "\n{}\n{}\n{}  {}\n",
        "╔══════════════════════════════════════════╗".truecolor(0, 200, 255),
        "║          e q s o l v e   s h e l l       ║".truecolor(255, 240, 0).bold(),
        "╚══════════════════════════════════════════╝".truecolor(0, 200, 255),
        "type 'help' for commands".truecolor(130, 0, 200)
    );
}

fn help_text() -> String {
    format!(
        "{}\n\
         {}\n  <equation>          # solve with the current kind\n  <kind>: <equation>  # solve with another kind once\n\
         {}\n  kind [KIND]         # show or set the current kind\n  kinds               # list kinds\n  config              # show solver settings\n  exit                # quit shell",
        "eqsolve shell".bold().truecolor(0, 255, 180),
        "Solve:".truecolor(130, 0, 200),
        "Session:".truecolor(130, 0, 200),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_with_current_and_prefixed_kind() {
        let mut sh = Shell::new(SolverConfig::default());
        assert_eq!(sh.eval("x^2-5x+6=0"), Reply::Text("x = 3, x = 2".into()));
        assert_eq!(sh.eval("linear: 2x = 4"), Reply::Text("x = 2".into()));
        assert_eq!(sh.kind(), EquationKind::Quadratic);
    }

    #[test]
    fn switches_kind() {
        let mut sh = Shell::new(SolverConfig::default());
        assert_eq!(sh.eval("kind polynomial"), Reply::Text("kind set to polynomial".into()));
        assert_eq!(sh.eval("x^3 - x"), Reply::Text("x = -1, x = 0, x = 1".into()));
        assert_eq!(sh.eval("exit"), Reply::Exit);
    }

    #[test]
    fn run_reads_until_exit() {
        colored::control::set_override(false);
        let input = b"kind linear\n3x = 1\nexit\nx = 5\n";
        let mut out = Vec::new();
        run(SolverConfig::default(), &input[..], &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "kind set to linear\nx = 1/3\n");
    }
}
