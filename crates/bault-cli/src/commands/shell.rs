//! Dashboard shell: line grammar, dispatch, and the interactive loop.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use bault_core::error::AppError;
use bault_core::result::AppResult;
use bault_core::types::{ItemId, SortKey};
use bault_entity::Category;
use bault_entity::content::format_size;
use bault_service::{BulkReport, ContentSource, Dashboard, LocalFile, Preview};
use bault_store::MoveOutcome;

use crate::output::{self, ItemRow, OutputFormat};
use crate::resolve::{ROOT, resolve_item, resolve_target};

use super::tree;

/// One shell line
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_subcommand = true)]
pub struct ShellLine {
    /// Command to run
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Shell commands
#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// List the current folder
    Ls,
    /// Change folder (`..` goes up, `/` goes to the root)
    Cd {
        /// Folder reference
        folder: String,
    },
    /// Print the current path
    Pwd,
    /// Create a folder here
    Mkdir {
        /// Folder name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Upload local files into the current folder
    Upload {
        /// Files to upload
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },
    /// Rename an item
    Rename {
        /// Item reference
        item: String,
        /// New name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Move an item into a folder (`/` for the root)
    Mv {
        /// Item reference
        item: String,
        /// Target folder reference
        target: String,
    },
    /// Delete an item and everything below it
    Rm {
        /// Item reference
        item: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Search the current folder (no query clears the search)
    Find {
        /// Search text
        query: Vec<String>,
    },
    /// Sort by a column; repeating the column flips direction
    Sort {
        /// name, type, size, or modified
        key: SortKey,
    },
    /// Filter by category (`none` clears)
    Filter {
        /// Category name
        category: String,
    },
    /// Toggle an item in the selection
    Select {
        /// Item reference
        item: String,
    },
    /// Select every listed item, or clear when all are selected
    SelectAll,
    /// Clear the selection
    Clear,
    /// Move the selection into a folder (`/` for the root)
    BulkMv {
        /// Target folder reference
        target: String,
    },
    /// Delete the selection
    BulkRm {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Preview a file
    Cat {
        /// Item reference
        item: String,
    },
    /// Show the folder tree
    Tree,
    /// Show storage usage
    Df,
    /// List commands
    Help,
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop
    Exit,
}

/// A dashboard plus how to talk to the user.
pub struct Session {
    /// The dashboard being driven
    pub dashboard: Dashboard,
    /// Output format
    pub format: OutputFormat,
    /// Whether confirmations may prompt
    pub interactive: bool,
}

impl Session {
    /// Creates a session.
    pub fn new(dashboard: Dashboard, format: OutputFormat, interactive: bool) -> Self {
        Self {
            dashboard,
            format,
            interactive,
        }
    }

    /// Parse and run one line. Blank lines and `#` comments are ignored.
    pub async fn run_line(&mut self, line: &str) -> AppResult<Flow> {
        let words = split_words(line)?;
        if words.is_empty() || words[0].starts_with('#') {
            return Ok(Flow::Continue);
        }

        match ShellLine::try_parse_from(&words) {
            Ok(parsed) => self.dispatch(parsed.command).await,
            Err(e) if e.kind() == clap::error::ErrorKind::DisplayHelp => {
                print!("{}", e);
                Ok(Flow::Continue)
            }
            Err(e) => Err(AppError::validation(e.to_string().trim_end().to_string())),
        }
    }

    /// Run one parsed command.
    pub async fn dispatch(&mut self, command: ShellCommand) -> AppResult<Flow> {
        debug!(?command, "Shell command");
        match command {
            ShellCommand::Ls => self.list(),
            ShellCommand::Cd { folder } => {
                match folder.as_str() {
                    ".." => self.dashboard.go_up(),
                    ROOT => self.dashboard.open(None)?,
                    other => {
                        let id = resolve_item(&self.dashboard, other)?;
                        self.dashboard.open(Some(id))?;
                    }
                }
                println!("{}", self.path()?);
            }
            ShellCommand::Pwd => println!("{}", self.path()?),
            ShellCommand::Mkdir { name } => {
                let folder = self.dashboard.create_folder(&name.join(" "))?;
                output::print_success(&format!(
                    "Folder '{}' created (id: {})",
                    folder.name,
                    folder.id.short()
                ));
            }
            ShellCommand::Upload { paths } => self.upload(paths).await?,
            ShellCommand::Rename { item, name } => {
                let id = resolve_item(&self.dashboard, &item)?;
                let renamed = self.dashboard.rename(id, &name.join(" "))?;
                output::print_success(&format!("Item renamed to '{}'", renamed.name));
            }
            ShellCommand::Mv { item, target } => {
                let id = resolve_item(&self.dashboard, &item)?;
                let target = resolve_target(&self.dashboard, &target)?;
                self.report_move(id, target)?;
            }
            ShellCommand::Rm { item, yes } => self.remove(&item, yes)?,
            ShellCommand::Find { query } => {
                self.dashboard.set_query(query.join(" "));
                self.list();
            }
            ShellCommand::Sort { key } => {
                self.dashboard.toggle_sort(key);
                let sort = self.dashboard.explorer().sort();
                output::print_success(&format!("Sorted by {} ({})", sort.key, sort.direction));
                self.list();
            }
            ShellCommand::Filter { category } => {
                let category = match category.as_str() {
                    "none" | "all" => None,
                    other => Some(other.parse::<Category>().map_err(AppError::validation)?),
                };
                match category {
                    Some(category) => self.dashboard.toggle_category(category),
                    None => self.dashboard.set_category(None),
                }
                match self.dashboard.explorer().category() {
                    Some(active) => output::print_success(&format!("Showing {}", active.title())),
                    None => output::print_success("Filter cleared"),
                }
                self.list();
            }
            ShellCommand::Select { item } => {
                let id = resolve_item(&self.dashboard, &item)?;
                let selected = self.dashboard.toggle_selected(id)?;
                let verb = if selected { "Selected" } else { "Deselected" };
                output::print_success(&format!(
                    "{verb} ({} selected)",
                    self.dashboard.selection().len()
                ));
            }
            ShellCommand::SelectAll => {
                self.dashboard.select_all_visible();
                output::print_success(&format!(
                    "{} selected",
                    self.dashboard.selection().len()
                ));
            }
            ShellCommand::Clear => {
                self.dashboard.clear_selection();
                output::print_success("Selection cleared");
            }
            ShellCommand::BulkMv { target } => {
                let target = resolve_target(&self.dashboard, &target)?;
                let report = self.dashboard.bulk_move(target)?;
                self.print_report("moved", &report);
            }
            ShellCommand::BulkRm { yes } => self.bulk_remove(yes)?,
            ShellCommand::Cat { item } => {
                let id = resolve_item(&self.dashboard, &item)?;
                self.preview(self.dashboard.preview(id)?);
            }
            ShellCommand::Tree => tree::print_tree(&self.dashboard.folder_tree(), self.format),
            ShellCommand::Df => self.usage(),
            ShellCommand::Help => print_help(),
            ShellCommand::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn list(&self) {
        let selection = self.dashboard.selection();
        let rows: Vec<ItemRow> = self
            .dashboard
            .visible_items()
            .into_iter()
            .map(|item| ItemRow::new(item, selection.contains(item.id)))
            .collect();
        output::print_list(&rows, self.format);
    }

    /// Slash-joined breadcrumb path of the current folder.
    pub fn path(&self) -> AppResult<String> {
        let crumbs = self.dashboard.breadcrumbs()?;
        let names: Vec<&str> = crumbs.iter().map(|item| item.name.as_str()).collect();
        Ok(format!("/{}", names.join("/")))
    }

    async fn upload(&mut self, paths: Vec<PathBuf>) -> AppResult<()> {
        let mut sources: Vec<Box<dyn ContentSource>> = Vec::with_capacity(paths.len());
        for path in &paths {
            sources.push(Box::new(LocalFile::open(path).await?));
        }

        let items = self.dashboard.upload(sources).await?;
        for item in &items {
            if item.content.is_none() {
                debug!(name = %item.name, "Uploaded without content");
            }
        }
        let bytes: u64 = items.iter().map(|item| item.size_or_zero()).sum();
        output::print_success(&format!(
            "{} file{} uploaded ({})",
            items.len(),
            if items.len() == 1 { "" } else { "s" },
            format_size(bytes)
        ));
        Ok(())
    }

    fn report_move(&mut self, id: ItemId, target: Option<ItemId>) -> AppResult<()> {
        let name = self.dashboard.store().require(id)?.name.clone();
        match self.dashboard.move_item(id, target)? {
            MoveOutcome::Moved { .. } => {
                let target_name = match target {
                    Some(folder) => self.dashboard.store().require(folder)?.name.clone(),
                    None => "root".to_string(),
                };
                output::print_success(&format!("{name} moved to {target_name}"));
            }
            MoveOutcome::Unchanged => output::print_warning("Item is already in this location"),
        }
        Ok(())
    }

    fn remove(&mut self, reference: &str, yes: bool) -> AppResult<()> {
        let id = resolve_item(&self.dashboard, reference)?;
        let item = self.dashboard.store().require(id)?;
        let name = item.name.clone();

        if item.is_folder() && !yes {
            let below = self.dashboard.store().descendants(id)?.len();
            let prompt = format!("Delete folder '{name}' and {below} item(s) inside it?");
            if !self.confirm(&prompt)? {
                println!("Cancelled.");
                return Ok(());
            }
        }

        let removed = self.dashboard.delete(id)?;
        output::print_success(&format!(
            "{name} and its contents have been deleted ({} item(s))",
            removed.len()
        ));
        Ok(())
    }

    fn bulk_remove(&mut self, yes: bool) -> AppResult<()> {
        let summary = self.dashboard.bulk_summary();
        if !yes && summary.files + summary.folders > 0 {
            let prompt = format!(
                "Delete {} file(s) and {} folder(s) ({})?",
                summary.files,
                summary.folders,
                format_size(summary.total_bytes)
            );
            if !self.confirm(&prompt)? {
                println!("Cancelled.");
                return Ok(());
            }
        }

        let report = self.dashboard.bulk_delete()?;
        self.print_report("deleted", &report);
        Ok(())
    }

    fn confirm(&self, prompt: &str) -> AppResult<bool> {
        if !self.interactive {
            return Ok(true);
        }
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))
    }

    fn print_report(&self, verb: &str, report: &BulkReport) {
        if self.format == OutputFormat::Json {
            output::print_json(&ReportView::from(report));
            return;
        }

        output::print_success(&format!("{} item(s) {verb}", report.succeeded.len()));
        if !report.unchanged.is_empty() {
            output::print_warning(&format!(
                "{} item(s) already in place",
                report.unchanged.len()
            ));
        }
        for failure in &report.failed {
            output::print_error(&format!("{}: {}", failure.id.short(), failure.error));
        }
    }

    fn preview(&self, preview: Preview) {
        if self.format == OutputFormat::Json {
            output::print_json(&preview);
            return;
        }

        match preview {
            Preview::Text(text) => {
                output::print_kv("Name", &text.name);
                output::print_kv("Language", text.language);
                output::print_kv("Lines", &text.line_count.to_string());
                output::print_kv("Size", &format_size(text.file_size));
                output::print_kv(
                    "Modified",
                    &text.last_modified.format("%Y-%m-%d %H:%M").to_string(),
                );
                println!();
                for (n, line) in text.content.split('\n').enumerate() {
                    println!("{:>4} │ {}", n + 1, line);
                }
            }
            Preview::Unavailable { name, .. } => output::print_warning(&format!(
                "Preview unavailable: content for {name} is not available or couldn't be read"
            )),
        }
    }

    fn usage(&self) {
        let usage = self.dashboard.usage();
        if self.format == OutputFormat::Json {
            output::print_json(&usage);
            return;
        }

        output::print_kv("Used", &format_size(usage.used_bytes));
        output::print_kv("Quota", &format_size(usage.quota_bytes));
        output::print_kv("Available", &format_size(usage.available_bytes));
        output::print_kv(
            "Usage",
            &format!("{:.1}% ({:?})", usage.usage_percent, usage.level),
        );
        output::print_kv("Files", &usage.file_count.to_string());
        output::print_kv("Folders", &usage.folder_count.to_string());
    }
}

/// JSON shape of a bulk report
#[derive(Debug, serde::Serialize)]
struct ReportView {
    succeeded: Vec<String>,
    unchanged: Vec<String>,
    skipped: Vec<String>,
    failed: Vec<(String, String)>,
    removed: usize,
}

impl From<&BulkReport> for ReportView {
    fn from(report: &BulkReport) -> Self {
        let ids = |ids: &[ItemId]| -> Vec<String> {
            ids.iter().map(|id| id.to_string()).collect()
        };
        Self {
            succeeded: ids(&report.succeeded),
            unchanged: ids(&report.unchanged),
            skipped: ids(&report.skipped),
            failed: report
                .failed
                .iter()
                .map(|f| (f.id.to_string(), f.error.to_string()))
                .collect(),
            removed: report.removed,
        }
    }
}

/// Interactive read-eval loop
pub async fn run_interactive(session: &mut Session) -> AppResult<()> {
    println!("Bault dashboard shell. Type 'help' for commands, 'exit' to leave.");
    loop {
        let prompt = format!("bault:{}", session.path()?);
        let line = match dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(e) => {
                debug!(error = %e, "Input closed");
                return Ok(());
            }
        };

        match session.run_line(&line).await {
            Ok(Flow::Exit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(e) => output::print_error(&e.to_string()),
        }
    }
}

fn print_help() {
    let commands = [
        ("ls", "list the current folder"),
        ("cd <folder|..|/>", "change folder"),
        ("pwd", "print the current path"),
        ("mkdir <name>", "create a folder here"),
        ("upload <path>...", "upload local files here"),
        ("rename <item> <name>", "rename an item"),
        ("mv <item> <folder|/>", "move an item"),
        ("rm [-y] <item>", "delete an item and its contents"),
        ("find [text]", "search the current folder"),
        ("sort <name|type|size|modified>", "sort; repeat to flip direction"),
        ("filter <category|none>", "filter by category"),
        ("select <item>", "toggle selection"),
        ("select-all", "select every listed item"),
        ("clear", "clear the selection"),
        ("bulk-mv <folder|/>", "move the selection"),
        ("bulk-rm [-y]", "delete the selection"),
        ("cat <item>", "preview a file"),
        ("tree", "show the folder tree"),
        ("df", "show storage usage"),
        ("exit", "leave the shell"),
    ];
    for (usage, about) in commands {
        output::print_kv(usage, about);
    }
    println!();
    println!(
        "  Items may be given as an id prefix or a name in the current folder. Categories: {}",
        Category::all()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
}

/// Split a line into words, honouring double quotes.
pub fn split_words(line: &str) -> AppResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }

    if in_quotes {
        return Err(AppError::validation("Unterminated quote"));
    }
    if has_word {
        words.push(current);
    }
    Ok(words)
}
