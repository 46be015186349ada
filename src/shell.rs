//! Line-oriented terminal host for the upload form and the materials list.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use prettytable::{Cell, Row, Table};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::FileRejected;
use crate::format::format_file_size;
use crate::models::FileHandle;
use crate::probe::probe_file;
use crate::store::MaterialListStore;
use crate::upload::{DraftField, MaterialUploadController};

#[derive(Parser, Debug)]
#[command(name = "materials", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    #[command(about = "Set the material title")]
    Title {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    #[command(about = "Set the material description (empty clears it)")]
    Description {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    #[command(about = "Pick a file for the material")]
    Select {
        #[arg(help = "Path to the file")]
        path: PathBuf,

        #[arg(long, help = "Declared media type, instead of guessing from the extension")]
        mime: Option<String>,
    },

    #[command(about = "Start dragging a file over the form")]
    Drag,

    #[command(about = "Drag leaves the form")]
    Leave,

    #[command(about = "Drop a file onto the form")]
    Drop {
        #[arg(help = "Path to the file")]
        path: PathBuf,

        #[arg(long, help = "Declared media type, instead of guessing from the extension")]
        mime: Option<String>,
    },

    #[command(about = "Add the material to the list")]
    Submit,

    #[command(about = "Discard the form")]
    Cancel,

    #[command(about = "Show the form")]
    Draft,

    #[command(about = "List materials")]
    List {
        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    #[command(about = "Delete a material")]
    Delete { id: u64 },

    #[command(about = "Count a download of a material")]
    Download { id: u64 },

    #[command(about = "Show totals")]
    Stats,

    #[command(about = "Leave the shell", alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Default)]
pub struct Shell {
    controller: MaterialUploadController,
    store: MaterialListStore,
    upload_date: Option<NaiveDate>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps every submission with `date` instead of today.
    pub fn with_upload_date(date: NaiveDate) -> Self {
        Self {
            upload_date: Some(date),
            ..Self::default()
        }
    }

    pub fn controller(&self) -> &MaterialUploadController {
        &self.controller
    }

    pub fn store(&self) -> &MaterialListStore {
        &self.store
    }

    /// Executes lines from `input` until EOF or `quit`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        prompt: bool,
    ) -> Result<()> {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            if self.execute_line(&line, out)? == Flow::Quit {
                break;
            }
            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
        }

        Ok(())
    }

    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let Some(words) = shlex::split(line) else {
            writeln!(out, "❌ Unbalanced quotes in: {}", line)?;
            return Ok(Flow::Continue);
        };

        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                write!(out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        match parsed.command {
            ShellCommand::Title { text } => {
                self.controller.set_field(DraftField::Title, text.join(" "));
            }
            ShellCommand::Description { text } => {
                self.controller.set_field(DraftField::Description, text.join(" "));
            }
            ShellCommand::Select { path, mime } => {
                if let Some(candidate) = read_candidate(&path, mime.as_deref(), out)? {
                    let outcome = self.controller.select_file(candidate.clone());
                    report_file(outcome, &candidate, out)?;
                }
            }
            ShellCommand::Drag => self.controller.begin_drag(),
            ShellCommand::Leave => self.controller.end_drag(),
            ShellCommand::Drop { path, mime } => {
                match read_candidate(&path, mime.as_deref(), out)? {
                    Some(candidate) => {
                        let outcome = self.controller.drop_file(candidate.clone());
                        report_file(outcome, &candidate, out)?;
                    }
                    // Nothing arrived, but the drag is over.
                    None => self.controller.end_drag(),
                }
            }
            ShellCommand::Submit => self.submit(out)?,
            ShellCommand::Cancel => {
                self.controller.cancel();
                writeln!(out, "🗑️  Form cleared")?;
            }
            ShellCommand::Draft => self.show_draft(out)?,
            ShellCommand::List { json } => self.list(json, out)?,
            ShellCommand::Delete { id } => {
                if self.store.remove(id) {
                    writeln!(out, "✅ Material {} deleted", id)?;
                } else {
                    writeln!(out, "⚠️  No material with ID {}", id)?;
                }
            }
            ShellCommand::Download { id } => match self.store.record_download(id) {
                Some(downloads) => {
                    writeln!(out, "⬇️  Material {} downloaded {} time(s)", id, downloads)?
                }
                None => writeln!(out, "⚠️  No material with ID {}", id)?,
            },
            ShellCommand::Stats => {
                writeln!(out, "📚 Materials: {}", self.store.total_count())?;
                writeln!(out, "⬇️  Downloads: {}", self.store.total_downloads())?;
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn submit<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let submitted = match self.upload_date {
            Some(date) => self.controller.submit_on(date),
            None => self.controller.submit(),
        };

        match submitted {
            Ok(material) => {
                let record = self.store.add(material);
                writeln!(out, "✅ Material added!")?;
                writeln!(out, "   🆔 ID: {}", record.id)?;
                writeln!(out, "   📄 File: {} ({})", record.file_name, record.file_size_display)?;
                writeln!(out, "   📅 Uploaded: {}", record.upload_date_display)?;
            }
            Err(e) => writeln!(out, "❌ {}", e)?,
        }

        Ok(())
    }

    fn show_draft<W: Write>(&self, out: &mut W) -> Result<()> {
        let draft = self.controller.draft();
        writeln!(out, "📝 Title: {}", draft.title())?;
        writeln!(out, "   Description: {}", draft.description())?;
        match draft.file() {
            Some(file) => writeln!(
                out,
                "   📄 File: {} ({})",
                file.name,
                format_file_size(file.size_bytes)
            )?,
            None => writeln!(out, "   📄 File: -")?,
        }
        if draft.drag_active() {
            writeln!(out, "   ✋ Dragging")?;
        }
        Ok(())
    }

    fn list<W: Write>(&self, json: bool, out: &mut W) -> Result<()> {
        if json {
            let json = serde_json::to_string_pretty(self.store.records())
                .context("Failed to serialize materials")?;
            writeln!(out, "{}", json)?;
            return Ok(());
        }

        if self.store.is_empty() {
            writeln!(out, "📭 No materials yet.")?;
            writeln!(out, "💡 Use 'select <file>' and 'submit' to add one")?;
            return Ok(());
        }

        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("ID"),
            Cell::new("Title"),
            Cell::new("File"),
            Cell::new("Size"),
            Cell::new("Uploaded"),
            Cell::new("Downloads"),
        ]));

        for record in self.store.records() {
            table.add_row(Row::new(vec![
                Cell::new(&record.id.to_string()),
                Cell::new(&record.title),
                Cell::new(&record.file_name),
                Cell::new(&record.file_size_display),
                Cell::new(&record.upload_date_display),
                Cell::new(&record.downloads.to_string()),
            ]));
        }

        table.print(out).context("Failed to print materials")?;
        Ok(())
    }
}

fn read_candidate<W: Write>(
    path: &Path,
    mime: Option<&str>,
    out: &mut W,
) -> Result<Option<FileHandle>> {
    match probe_file(path, mime) {
        Ok(handle) => Ok(Some(handle)),
        Err(e) => {
            writeln!(out, "❌ {:#}", e)?;
            Ok(None)
        }
    }
}

fn report_file<W: Write>(
    outcome: Result<(), FileRejected>,
    file: &FileHandle,
    out: &mut W,
) -> Result<()> {
    match outcome {
        Ok(()) => writeln!(out, "📎 Selected {} ({} bytes)", file.name, file.size_bytes)?,
        Err(reason) => writeln!(out, "❌ {}", reason)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(shell: &mut Shell, script: &str) -> String {
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn title_words_are_joined() {
        let mut shell = Shell::new();
        run(&mut shell, "title Linear   algebra - part 1\n");
        assert_eq!(shell.controller().draft().title(), "Linear algebra - part 1");
    }

    #[test]
    fn submit_without_fields_reports_what_is_missing() {
        let mut shell = Shell::new();
        let output = run(&mut shell, "submit\n");
        assert!(output.contains("❌ Please enter a title and select a PDF file"));
        assert!(shell.store().is_empty());
    }

    #[test]
    fn quoted_title_keeps_inner_spaces() {
        let mut shell = Shell::new();
        run(&mut shell, "title \"A   B\"\ndescription 'two  words'  \n");
        assert_eq!(shell.controller().draft().title(), "A   B");
        assert_eq!(shell.controller().draft().description(), "two  words");
    }

    #[test]
    fn quoted_path_with_space_is_selected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("week one.pdf");
        std::fs::write(&path, b"%PDF-1.7").unwrap();

        let mut shell = Shell::new();
        let output = run(&mut shell, &format!("select \"{}\"\n", path.display()));
        assert!(output.contains("📎 Selected week one.pdf (8 bytes)"));
        assert_eq!(
            shell.controller().draft().file().map(|f| f.name.as_str()),
            Some("week one.pdf")
        );
    }

    #[test]
    fn unbalanced_quotes_are_reported() {
        let mut shell = Shell::new();
        let output = run(&mut shell, "title \"Intro\ntitle Next\n");
        assert!(output.contains("❌ Unbalanced quotes in: title \"Intro"));
        assert_eq!(shell.controller().draft().title(), "Next");
    }

    #[test]
    fn unknown_command_keeps_shell_running() {
        let mut shell = Shell::new();
        let output = run(&mut shell, "frobnicate\ntitle Intro\n");
        assert!(output.contains("error"));
        assert_eq!(shell.controller().draft().title(), "Intro");
    }

    #[test]
    fn quit_stops_reading() {
        let mut shell = Shell::new();
        run(&mut shell, "title A\nexit\ntitle B\n");
        assert_eq!(shell.controller().draft().title(), "A");
    }

    #[test]
    fn missing_dropped_file_still_ends_drag() {
        let mut shell = Shell::new();
        let output = run(&mut shell, "drag\ndrop /definitely/not/here.pdf\n");
        assert!(output.contains("File not found"));
        assert!(!shell.controller().draft().drag_active());
    }

    #[test]
    fn delete_and_download_on_empty_list() {
        let mut shell = Shell::new();
        let output = run(&mut shell, "delete 1\ndownload 1\nlist\nstats\n");
        assert!(output.contains("No material with ID 1"));
        assert!(output.contains("📭 No materials yet."));
        assert!(output.contains("📚 Materials: 0"));
        assert!(output.contains("Downloads: 0"));
    }
}
