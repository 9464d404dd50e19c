use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::DrainGrammar;
use crate::RunnableCommand;
use libsqllex::SourcePosition;
use libsqllex::SqlParseError;
use libsqllex::SqlParser;
use libsqllex::TokenDump;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct RetagCmd {
    #[arg(
        default_values_t=[
            "json".to_string(),
        ],
        help="Set of file extensions to filter to when searching for token \
             dump files within a directory.",
        long,
        value_delimiter = ',',
    )]
    token_file_exts: Vec<String>,

    #[arg(
        help="Only print tokens the lexer reports under a different \
             identity than the scanner produced.",
        long,
    )]
    only_retagged: bool,

    #[arg(
        help="Paths to one or more token dump files or directories \
             containing token dump files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// What the lexer did to one token dump.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct RetagReport {
    pub num_tokens: usize,
    pub num_retagged: usize,
    pub text: String,
}

#[inherent::inherent]
impl RunnableCommand for RetagCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<anyhow::Error> = vec![];

        // Normalize the set of file extensions to filter with
        let token_file_exts: HashSet<String> =
            self.token_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        let matches_ext = path.extension()
                            .map(|ext| ext.to_string_lossy())
                            .is_some_and(|ext| token_file_exts.contains(&*ext));
                        if matches_ext {
                            log::trace!("Found token dump at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            log::trace!("Skipping file with other extension: {path:#?}.");
                            num_skipped_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.into());
                    },
                }
            }
        }

        // A single file passed explicitly is retagged regardless of its
        // extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to retag {first_arg_path:#?} even though it \
                doesn't match any of the --token-file-exts ({}).",
                token_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        if file_paths.is_empty() && errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No token dump files found.",
                output_utils::RED_X,
            ));
        }

        log::debug!("Found {} token dumps to retag.", file_paths.len());

        let only_retagged = self.only_retagged;
        let handles: Vec<_> = file_paths.into_iter()
            .map(|path| {
                let handle = tokio::task::spawn_blocking({
                    let path = path.clone();
                    move || retag_file(&path, only_retagged)
                });
                (path, handle)
            })
            .collect();

        let mut outputs = vec![];
        let mut num_tokens = 0;
        let mut num_retagged = 0;
        for (path, handle) in handles {
            match handle.await {
                Ok(Ok(report)) => {
                    num_tokens += report.num_tokens;
                    num_retagged += report.num_retagged;
                    outputs.push(format!("==> {} <==\n{}", path.display(), report.text));
                },
                Ok(Err(e)) => errors.push(e),
                Err(e) => errors.push(
                    anyhow::Error::new(e)
                        .context(format!("Retagging {} did not complete", path.display())),
                ),
            }
        }

        let summary = format!(
            concat!(
                "{} Retagged {} token dumps:\n",
                "  * Lexed {} tokens.\n",
                "  * Reported {} tokens under a lookahead identity.\n",
                "  * Skipped {} files with other extensions.",
            ),
            output_utils::GREEN_CHECK,
            outputs.len(),
            num_tokens,
            num_retagged,
            num_skipped_files,
        );
        outputs.push(summary);
        let stdout = outputs.join("\n\n");

        if errors.is_empty() {
            return CommandResult::stdout(format_args!("{stdout}"));
        }

        let stderr = format!(
            "{} {} token dumps could not be retagged:\n\n{}",
            output_utils::RED_X,
            errors.len(),
            errors.iter()
                .map(|e| format!("{e:#}"))
                .collect::<Vec<_>>()
                .join("\n\n"),
        );
        CommandResult::partial_failure(stdout, stderr)
    }
}

/// Loads the dump at `path` and runs it through the lexer.
pub(crate) fn retag_file(path: &Path, only_retagged: bool) -> anyhow::Result<RetagReport> {
    let dump = TokenDump::from_file(path)?;
    render_dump(&dump, only_retagged).map_err(|err| {
        anyhow::Error::msg(err.format_detailed())
            .context(format!("Failed to lex {}", path.display()))
    })
}

/// Runs `dump` through the lexer and renders one line per token: its
/// 1-based `line:column`, its text, and its identity, with an arrow to the
/// reported identity when the lexer rewrote it.
pub(crate) fn render_dump(
    dump: &TokenDump,
    only_retagged: bool,
) -> Result<RetagReport, SqlParseError> {
    let mut parser = SqlParser::new(DrainGrammar);
    let parsed = parser.parse(&dump.sql, dump.tokens.clone())?;
    let lexed = parsed.stmt.unwrap_or_default();

    let mut lines = vec![];
    let mut num_retagged = 0;
    for (scanned, lexed) in dump.tokens.iter().zip(&lexed) {
        let retagged = scanned.id != lexed.id;
        if retagged {
            num_retagged += 1;
        } else if only_retagged {
            continue;
        }

        let position = SourcePosition::locate(&dump.sql, scanned.pos as usize).to_string();
        let text = format!("{:?}", scanned.text);
        lines.push(if retagged {
            format!("{position:<8}{text:<16}{} -> {}", scanned.id, lexed.id)
        } else {
            format!("{position:<8}{text:<16}{}", scanned.id)
        });
    }

    Ok(RetagReport {
        num_tokens: lexed.len(),
        num_retagged,
        text: lines.join("\n"),
    })
}
