//! Glue code tying the runtime and the console together.
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use runtime::Runtime;

use crate::config::CliConfig;
use crate::input::{ConsoleDecider, parse};
use crate::presentation::{Renderer, Theme};

/// Line-based game loop over any reader/writer pair.
pub struct CliApp<R, W> {
    runtime: Runtime,
    renderer: Renderer,
    input: R,
    output: W,
}

impl CliApp<io::StdinLock<'static>, io::Stdout> {
    /// Builds the runtime from `config` and attaches it to the terminal.
    pub fn from_config(config: CliConfig) -> Result<Self> {
        let runtime = Runtime::builder()
            .config(config.runtime)
            .build()
            .context("failed to start the game runtime")?;
        Ok(Self::new(
            runtime,
            Renderer::new(Theme::new(config.color)),
            io::stdin().lock(),
            io::stdout(),
        ))
    }
}

impl<R: BufRead, W: Write> CliApp<R, W> {
    pub fn new(runtime: Runtime, renderer: Renderer, input: R, output: W) -> Self {
        Self {
            runtime,
            renderer,
            input,
            output,
        }
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(mut self) -> Result<()> {
        tracing::info!("Console client starting");
        let greeting = self
            .renderer
            .startup(self.runtime.startup(), self.runtime.session());
        self.print(&greeting)?;

        loop {
            let prompt = self.renderer.prompt(self.runtime.session());
            write!(self.output, "\n{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                tracing::info!("Input closed");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            let command = match parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    tracing::debug!(input = line.trim(), "Unparsed input: {}", err);
                    let rejection = self.renderer.rejection(&err);
                    self.print(&[rejection])?;
                    continue;
                }
            };

            let mut decider = ConsoleDecider::new(&mut self.input, &mut self.output, &self.renderer);
            let result = self.runtime.perform(command, &mut decider);
            let shown = decider.into_shown();

            match result {
                Ok(report) => {
                    let lines = self.renderer.report(&report, &shown);
                    self.print(&lines)?;
                    if report.quit_requested() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::error!("Failed to save progress: {:#}", err);
                    writeln!(self.output, "Warning: your progress could not be saved ({err}).")?;
                }
            }
        }

        tracing::info!("Console client exiting");
        Ok(())
    }

    fn print(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use runtime::InMemoryProfileRepository;

    use super::*;

    fn play(script: &str) -> String {
        let runtime = Runtime::builder()
            .seed(5)
            .repository(InMemoryProfileRepository::new())
            .build()
            .unwrap();
        let mut output = Vec::new();
        CliApp::new(
            runtime,
            Renderer::new(Theme::plain()),
            Cursor::new(script.as_bytes().to_vec()),
            &mut output,
        )
        .run()
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn greets_new_player_and_quits() {
        let output = play("quit\nstats\n");
        assert!(output.contains("Welcome, PMC"));
        assert!(output.contains("See you next time"));
        assert!(!output.contains("Raids survived"));
    }

    #[test]
    fn hideout_commands_render() {
        let output = play("inv\nshop\nstash\n");
        assert!(output.contains("--- Inventory ---"));
        assert!(output.contains("AKM"));
        assert!(output.contains("--- Trader ---"));
        assert!(output.contains("--- Stash"));
    }

    #[test]
    fn parse_errors_do_not_reach_the_session() {
        let output = play("dance\nextract\n");
        assert!(output.contains("Unknown command 'dance'"));
        assert!(output.contains("only possible during a raid"));
    }

    #[test]
    fn raid_start_shows_deployment() {
        let output = play("start_raid\nlook\n");
        assert!(output.contains("=== Raid started ==="));
        assert!(output.contains("Exits:"));
    }
}
