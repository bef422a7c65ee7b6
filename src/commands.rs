// src/commands.rs
//
// Command-line actions. Each one updates the stored view state or the
// locker itself; `run` then re-renders every screen.

use crate::config::Config;
use crate::db::connection::Database;
use crate::db::guarantees::load_guarantees;
use crate::db::preferences::{
    clear_prefs, record_search, remember_id, remove_pref, set_pref, toggle_theme,
    DISMISSED_REMINDERS_KEY, READ_REMINDERS_KEY, RECENT_SEARCHES_KEY, VIEW_STATE_KEY,
};
use crate::domain::filter::{FilterCriteria, Selection};
use crate::domain::guarantee::{Category, Status};
use crate::domain::reminders::ReminderFilter;
use crate::domain::sort::SortKey;
use crate::domain::upload::{file_extension, DocumentSubmitter, FileDescriptor, GuaranteeForm};
use crate::domain::view::{ViewMode, ViewState};
use crate::errors::LockerError;
use crate::format::file_size;
use crate::snapshot::{load_inbox, load_view_state, render_snapshot, SnapshotSummary};
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub const USAGE: &str = "\
usage: guarantee_locker [command]

  render                      re-render every screen (default)
  search <text>               filter by product or brand, \"\" clears
  forget-searches             clear the recent-search list
  category <label|All>        filter by category
  status <label|All>          filter by status
  filter <text> <category|All> <status|All>
                              set search, category and status at once
  sort <name|expiry|status|value>
                              click a column header
  page <n>                    jump to a page of the list
  mode <list|grid>            switch the list layout
  theme                       toggle light/dark
  reminders <all|unread|expiry|expired>
                              pick the reminders tab
  read <id>                   mark a reminder read
  dismiss <id>                remove a reminder
  add <product> <brand> <category> <purchase-date> <period> <amount> <file>...
                              store a new guarantee
  reset                       forget every saved preference";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Render,
    Search(String),
    ForgetSearches,
    Category(Selection<Category>),
    Status(Selection<Status>),
    Filter(FilterCriteria),
    Sort(SortKey),
    Page(usize),
    Mode(ViewMode),
    Theme,
    Reminders(ReminderFilter),
    Read(i64),
    Dismiss(i64),
    Add(GuaranteeForm),
    Reset,
}

fn arg<'a>(args: &'a [String], idx: usize, what: &str) -> Result<&'a str, LockerError> {
    args.get(idx)
        .map(String::as_str)
        .ok_or_else(|| LockerError::InvalidArgument(format!("missing {what}")))
}

fn number<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T, LockerError> {
    raw.parse()
        .map_err(|_| LockerError::InvalidArgument(format!("{what} must be a number, got '{raw}'")))
}

impl Command {
    /// Parses the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self, LockerError> {
        let Some(name) = args.first() else {
            return Ok(Command::Render);
        };

        match name.as_str() {
            "render" => Ok(Command::Render),
            "search" => Ok(Command::Search(args.get(1).cloned().unwrap_or_default())),
            "forget-searches" => Ok(Command::ForgetSearches),
            "category" => Ok(Command::Category(arg(args, 1, "category")?.parse()?)),
            "status" => Ok(Command::Status(arg(args, 1, "status")?.parse()?)),
            "filter" => Ok(Command::Filter(FilterCriteria::parse(
                arg(args, 1, "search text")?,
                arg(args, 2, "category")?,
                arg(args, 3, "status")?,
            )?)),
            "sort" => Ok(Command::Sort(arg(args, 1, "sort key")?.parse()?)),
            "page" => Ok(Command::Page(number(arg(args, 1, "page")?, "page")?)),
            "mode" => Ok(Command::Mode(arg(args, 1, "view mode")?.parse()?)),
            "theme" => Ok(Command::Theme),
            "reminders" => Ok(Command::Reminders(arg(args, 1, "reminder tab")?.parse()?)),
            "read" => Ok(Command::Read(number(arg(args, 1, "reminder id")?, "reminder id")?)),
            "dismiss" => Ok(Command::Dismiss(number(arg(args, 1, "reminder id")?, "reminder id")?)),
            "add" => parse_add(&args[1..]),
            "reset" => Ok(Command::Reset),
            other => Err(LockerError::InvalidArgument(format!("unknown command '{other}'"))),
        }
    }
}

fn parse_add(args: &[String]) -> Result<Command, LockerError> {
    let form = GuaranteeForm {
        product_name: arg(args, 0, "product name")?.to_string(),
        brand: arg(args, 1, "brand")?.to_string(),
        category: arg(args, 2, "category")?.to_string(),
        purchase_date: arg(args, 3, "purchase date")?.to_string(),
        warranty_period: arg(args, 4, "warranty period")?.to_string(),
        purchase_amount: arg(args, 5, "amount")?.to_string(),
        description: String::new(),
        files: args
            .iter()
            .skip(6)
            .map(|p| describe_file(Path::new(p)))
            .collect::<Result<_, _>>()?,
    };
    Ok(Command::Add(form))
}

/// MIME type by file extension; anything unknown is an octet stream
/// and will be rejected by the upload validation.
pub fn content_type_for(name: &str) -> String {
    match file_extension(name).to_ascii_lowercase().as_str() {
        "pdf" => mime::APPLICATION_PDF.to_string(),
        "png" => mime::IMAGE_PNG.to_string(),
        "jpg" | "jpeg" => mime::IMAGE_JPEG.to_string(),
        "gif" => mime::IMAGE_GIF.to_string(),
        "webp" => "image/webp".to_string(),
        "txt" => mime::TEXT_PLAIN.to_string(),
        "doc" => "application/msword".to_string(),
        "docx" => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_string()
        }
        _ => mime::APPLICATION_OCTET_STREAM.to_string(),
    }
}

fn describe_file(path: &Path) -> Result<FileDescriptor, LockerError> {
    let meta = fs::metadata(path)?;
    let original_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| LockerError::InvalidArgument(format!("'{}' is not a file", path.display())))?;

    Ok(FileDescriptor {
        content_type: content_type_for(&original_name),
        original_name,
        size_bytes: meta.len(),
    })
}

/// Applies `cmd` and re-renders.
pub fn run(
    cmd: Command,
    cfg: &Config,
    db: &Database,
    now: NaiveDateTime,
) -> Result<SnapshotSummary, LockerError> {
    let mut tab = ReminderFilter::All;
    let state = load_view_state(db, cfg)?;

    match cmd {
        Command::Render => {}
        Command::Search(text) => {
            let filter = FilterCriteria { search: text.clone(), ..state.filter.clone() };
            set_pref(db, VIEW_STATE_KEY, &state.with_filter(filter))?;
            record_search(db, &text)?;
        }
        Command::ForgetSearches => remove_pref(db, RECENT_SEARCHES_KEY)?,
        Command::Category(category) => {
            let filter = FilterCriteria { category, ..state.filter.clone() };
            set_pref(db, VIEW_STATE_KEY, &state.with_filter(filter))?;
        }
        Command::Status(status) => {
            let filter = FilterCriteria { status, ..state.filter.clone() };
            set_pref(db, VIEW_STATE_KEY, &state.with_filter(filter))?;
        }
        Command::Filter(filter) => {
            record_search(db, &filter.search)?;
            set_pref(db, VIEW_STATE_KEY, &state.with_filter(filter))?;
        }
        Command::Sort(key) => {
            set_pref(db, VIEW_STATE_KEY, &state.with_sort_click(key))?;
        }
        Command::Page(page) => {
            set_pref(db, VIEW_STATE_KEY, &ViewState { page, ..state })?;
        }
        Command::Mode(mode) => {
            set_pref(db, VIEW_STATE_KEY, &ViewState { mode, ..state })?;
        }
        Command::Theme => {
            let theme = toggle_theme(db)?;
            info!(?theme, "theme toggled");
        }
        Command::Reminders(filter) => tab = filter,
        Command::Read(id) => {
            let records = load_guarantees(db, now, cfg.list_soon_days)?;
            load_inbox(db, &records, now, cfg.list_soon_days)?.mark_read(id)?;
            remember_id(db, READ_REMINDERS_KEY, id)?;
        }
        Command::Dismiss(id) => {
            let records = load_guarantees(db, now, cfg.list_soon_days)?;
            load_inbox(db, &records, now, cfg.list_soon_days)?.remove(id)?;
            remember_id(db, DISMISSED_REMINDERS_KEY, id)?;
        }
        Command::Add(form) => {
            let doc = form.prepare().map_err(|errors| {
                warn!(problems = errors.len(), "upload rejected");
                LockerError::Validation(errors)
            })?;
            let id = db.submit_document(&doc)?;
            let bytes: u64 = doc.files.iter().map(|f| f.size_bytes).sum();
            info!(id, files = doc.files.len(), size = %file_size(bytes), "guarantee added");
        }
        Command::Reset => {
            clear_prefs(db)?;
            info!("preferences cleared");
        }
    }

    render_snapshot(cfg, db, now, tab)
}
