//! Highlight command implementation.
//!
//! Scans each input file and renders it as HTML, ANSI, plain text or JSON,
//! either to stdout or to one output file per input.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use posti_render::{renderer_for, OutputFormat, Theme};
use rayon::prelude::*;

use crate::commands::common::{error_messages, is_stdin, output_path_for, read_source, write_output};
use crate::config::Config;
use crate::error::{PosttError, Result};

/// Arguments for the highlight command.
#[derive(Debug, Clone, Default)]
pub struct HighlightArgs {
    /// Input files; `-` reads standard input.
    pub input: Vec<PathBuf>,
    /// Output format (default: from config).
    pub format: Option<OutputFormat>,
    /// Output directory; stdout when absent.
    pub output: Option<PathBuf>,
    /// Wrap HTML in `<pre>` and pretty-print JSON.
    pub standalone: bool,
    /// Overwrite existing output files.
    pub force: bool,
    /// Colour is allowed on stdout.
    pub color: bool,
}

/// Highlight command handler.
pub struct HighlightCommand {
    args: HighlightArgs,
    config: Config,
}

impl HighlightCommand {
    /// Create a new HighlightCommand.
    pub fn new(args: HighlightArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        self.validate_input_files()?;

        let format = self.output_format();
        let theme = self.effective_theme(format)?;
        let standalone = self.args.standalone || self.config.standalone;
        tracing::debug!(%format, standalone, files = self.args.input.len(), "highlighting");

        let (succeeded, failed) = match &self.args.output {
            Some(dir) => self.write_all_files(dir, format, &theme, standalone)?,
            None => self.print_all_files(format, &theme, standalone)?,
        };

        tracing::info!(
            succeeded,
            failed,
            elapsed_s = start_time.elapsed().as_secs_f64(),
            "highlight completed"
        );
        self.check_for_failures(failed)
    }

    /// Validate that inputs are provided and stdin appears at most once.
    fn validate_input_files(&self) -> Result<()> {
        if self.args.input.is_empty() {
            return Err(PosttError::Validation(error_messages::NO_INPUT_FILES.to_string()));
        }
        if self.args.input.iter().filter(|p| is_stdin(p)).count() > 1 {
            return Err(PosttError::Validation(error_messages::STDIN_TWICE.to_string()));
        }
        Ok(())
    }

    /// Output format: the flag, else the configured default.
    pub fn output_format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.config.format)
    }

    /// Theme for ANSI output.
    ///
    /// ANSI written to stdout without colour support falls back to an empty
    /// theme, producing the bare source text.
    fn effective_theme(&self, format: OutputFormat) -> Result<Theme> {
        let theme = self.config.theme()?;
        if format == OutputFormat::Ansi && self.args.output.is_none() && !self.args.color {
            tracing::debug!("colour unavailable, ANSI output unstyled");
            return Ok(Theme::empty());
        }
        Ok(theme)
    }

    /// Render every input and print the results to stdout in input order.
    fn print_all_files(&self, format: OutputFormat, theme: &Theme, standalone: bool) -> Result<(usize, usize)> {
        let rendered: Vec<(&PathBuf, Result<String>)> = self
            .args
            .input
            .par_iter()
            .map(|path| (path, render_file(path, format, theme, standalone)))
            .collect();

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let mut succeeded = 0;
        let mut failed = 0;

        for (path, result) in rendered {
            match result {
                Ok(text) => {
                    out.write_all(text.as_bytes())?;
                    succeeded += 1;
                }
                Err(e) => {
                    failed += 1;
                    log_file_error(path, &e);
                }
            }
        }
        out.flush()?;

        Ok((succeeded, failed))
    }

    /// Render every input into `dir`, one file per input.
    fn write_all_files(
        &self,
        dir: &Path,
        format: OutputFormat,
        theme: &Theme,
        standalone: bool,
    ) -> Result<(usize, usize)> {
        if dir.exists() && !dir.is_dir() {
            return Err(PosttError::Validation(format!(
                "{}: {}",
                error_messages::OUTPUT_PATH_NOT_DIR,
                dir.display()
            )));
        }
        let targets = self.output_targets(dir, format)?;
        std::fs::create_dir_all(dir)?;

        let failed = self
            .args
            .input
            .par_iter()
            .zip(targets.par_iter())
            .map(|(path, target)| {
                let result = match target {
                    Ok(output_path) => self.highlight_to_file(path, output_path, format, theme, standalone),
                    Err(_) => Err(PosttError::FileOperation(format!(
                        "{}: {}",
                        error_messages::INVALID_FILE_PATH,
                        path.display()
                    ))),
                };
                if let Err(ref e) = result {
                    log_file_error(path, e);
                }
                result.is_err()
            })
            .filter(|failed| *failed)
            .count();

        Ok((self.args.input.len() - failed, failed))
    }

    /// Output file of every input, in input order.
    ///
    /// Fails before anything is written when two inputs share an output
    /// file. Inputs without a usable file name keep their error so they are
    /// counted as failed files.
    fn output_targets(&self, dir: &Path, format: OutputFormat) -> Result<Vec<Result<PathBuf>>> {
        let targets: Vec<Result<PathBuf>> = self
            .args
            .input
            .iter()
            .map(|input| output_path_for(input, dir, format))
            .collect();

        let mut seen: HashMap<&Path, &Path> = HashMap::new();
        for (input, target) in self.args.input.iter().zip(&targets) {
            let Ok(output_path) = target else { continue };
            if let Some(first) = seen.insert(output_path.as_path(), input.as_path()) {
                return Err(PosttError::Validation(format!(
                    "{}: {} and {} -> {}",
                    error_messages::OUTPUT_PATH_COLLISION,
                    first.display(),
                    input.display(),
                    output_path.display()
                )));
            }
        }
        Ok(targets)
    }

    fn highlight_to_file(
        &self,
        input: &Path,
        output_path: &Path,
        format: OutputFormat,
        theme: &Theme,
        standalone: bool,
    ) -> Result<()> {
        let rendered = render_file(input, format, theme, standalone)?;
        write_output(output_path, &rendered, self.args.force)?;
        tracing::info!("Highlighted: {} → {}", input.display(), output_path.display());
        Ok(())
    }

    /// Return an error if any file failed.
    fn check_for_failures(&self, failed: usize) -> Result<()> {
        if failed > 0 {
            return Err(PosttError::Validation(format!(
                "{} {}",
                failed,
                error_messages::FILES_FAILED
            )));
        }
        Ok(())
    }
}

/// Read, scan and render one input.
fn render_file(path: &Path, format: OutputFormat, theme: &Theme, standalone: bool) -> Result<String> {
    let source = read_source(path)?;
    let tokens = posti_lex::tokenize(&source);
    let rendered = renderer_for(format, theme, standalone).render(&tokens)?;
    tracing::debug!(path = %path.display(), tokens = tokens.len(), "rendered file");
    Ok(rendered)
}

fn log_file_error(path: &Path, error: &PosttError) {
    tracing::error!("Failed to highlight {}: {}", path.display(), error);
}

/// Run the highlight command.
pub fn run_highlight(args: HighlightArgs, config: Config) -> Result<()> {
    HighlightCommand::new(args, config).run()
}
