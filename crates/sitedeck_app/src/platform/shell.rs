use std::io::{self, BufRead, Write};

use sitedeck_core::SiteId;
use sitedeck_engine::{Dashboard, KeyValueStore};
use sitedeck_logging::deck_info;

use super::render::{describe_add_error, render_sites, render_status};
use super::viewer::{open_in_browser, TerminalViewer};

pub const HELP: &str = "\
Commands:
  list                    show registered sites
  add <name> | <url>      register a site and view it
  select <n|id>           view a site
  delete <n|id>           remove a site (asks first)
  refresh                 reload the current site
  open                    open the current site in your browser
  help                    show this text
  quit                    leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add { name: String, url: String },
    Select(String),
    Delete(String),
    Refresh,
    Open,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let needs_target = |cmd: fn(String) -> Command| {
        if rest.is_empty() {
            Err(format!("`{word}` needs a site number or id"))
        } else {
            Ok(cmd(rest.to_string()))
        }
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Ok(Command::Empty),
        "list" | "ls" => Ok(Command::List),
        "add" => {
            // Missing parts stay empty so the add flow reports which field is missing.
            let (name, url) = rest.split_once('|').unwrap_or((rest, ""));
            Ok(Command::Add {
                name: name.trim().to_string(),
                url: url.trim().to_string(),
            })
        }
        "select" | "go" => needs_target(Command::Select),
        "delete" | "rm" => needs_target(Command::Delete),
        "refresh" | "reload" => Ok(Command::Refresh),
        "open" => Ok(Command::Open),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`; try `help`")),
    }
}

/// Line-oriented presentation layer over a [`Dashboard`].
pub struct Shell<S: KeyValueStore> {
    dashboard: Dashboard<S>,
    viewer: TerminalViewer,
    confirm_deletes: bool,
}

impl<S: KeyValueStore> Shell<S> {
    pub fn new(dashboard: Dashboard<S>, confirm_deletes: bool) -> Self {
        Self {
            dashboard,
            viewer: TerminalViewer::new(),
            confirm_deletes,
        }
    }

    #[cfg(test)]
    pub fn dashboard(&self) -> &Dashboard<S> {
        &self.dashboard
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.render(out)?;
        let mut line = String::new();
        loop {
            write!(out, "sitedeck> ")?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }
            if self.handle_line(&line, input, out)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Execute one command line. `input` supplies the delete confirmation.
    pub fn handle_line(
        &mut self,
        line: &str,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> io::Result<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Empty => {}
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::List => {
                for line in render_sites(&self.dashboard.view()) {
                    writeln!(out, "{line}")?;
                }
            }
            Command::Add { name, url } => {
                self.dashboard.open_add_form();
                match self.dashboard.add(&name, &url) {
                    Ok(site) => writeln!(out, "Added {} ({})", site.name, site.url)?,
                    Err(err) => writeln!(out, "{}", describe_add_error(&err))?,
                }
            }
            Command::Select(target) => match self.resolve(&target) {
                Some(id) => self.dashboard.select_site(&id),
                None => writeln!(out, "No site matches {target:?}")?,
            },
            Command::Delete(target) => match self.resolve(&target) {
                Some(id) => self.delete(&id, input, out)?,
                None => writeln!(out, "No site matches {target:?}")?,
            },
            Command::Refresh => self.dashboard.refresh(),
            Command::Open => match self.dashboard.active_site() {
                Some(site) => {
                    let url = site.url.clone();
                    match open_in_browser(&url) {
                        Ok(()) => writeln!(out, "Opened {url}")?,
                        Err(err) => writeln!(out, "Could not open {url}: {err}")?,
                    }
                }
                None => writeln!(out, "No site selected")?,
            },
        }

        self.render(out)?;
        Ok(Flow::Continue)
    }

    fn delete(
        &mut self,
        id: &SiteId,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let name = self
            .dashboard
            .sites()
            .iter()
            .find(|site| &site.id == id)
            .map(|site| site.name.clone())
            .unwrap_or_default();

        if self.confirm_deletes {
            write!(out, "Remove {name:?} from your dashboard? [y/N] ")?;
            out.flush()?;
            let mut answer = String::new();
            input.read_line(&mut answer)?;
            if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                writeln!(out, "Kept {name:?}")?;
                return Ok(());
            }
        }

        let remaining = self.dashboard.delete(id).len();
        deck_info!("User removed {:?}; {} sites left", name, remaining);
        writeln!(out, "Removed {name:?}")?;
        Ok(())
    }

    /// A 1-based list position or an exact id.
    fn resolve(&self, target: &str) -> Option<SiteId> {
        let sites = self.dashboard.sites();
        if let Ok(position) = target.parse::<usize>() {
            if let Some(site) = position.checked_sub(1).and_then(|index| sites.get(index)) {
                return Some(site.id.clone());
            }
        }
        sites
            .iter()
            .find(|site| site.id.as_str() == target)
            .map(|site| site.id.clone())
    }

    fn render(&mut self, out: &mut impl Write) -> io::Result<()> {
        if !self.dashboard.consume_dirty() {
            return Ok(());
        }
        let view = self.dashboard.view();
        writeln!(out, "{}", render_status(&view))?;
        self.viewer.present(view.frame.as_ref(), out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitedeck_engine::{MemoryStore, SITES_KEY};

    fn shell() -> Shell<MemoryStore> {
        Shell::new(Dashboard::load(MemoryStore::new()), true)
    }

    fn exec(shell: &mut Shell<MemoryStore>, line: &str, answers: &str) -> String {
        let mut input = answers.as_bytes();
        let mut out = Vec::new();
        shell.handle_line(line, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_add_with_separator() {
        assert_eq!(
            parse_command("add  Docs Site | docs.example.org "),
            Ok(Command::Add {
                name: "Docs Site".to_string(),
                url: "docs.example.org".to_string(),
            })
        );
        assert_eq!(
            parse_command("ADD Docs"),
            Ok(Command::Add {
                name: "Docs".to_string(),
                url: String::new(),
            })
        );
    }

    #[test]
    fn parses_targets_and_rejects_unknown() {
        assert_eq!(parse_command("select 2"), Ok(Command::Select("2".into())));
        assert_eq!(parse_command("rm abc"), Ok(Command::Delete("abc".into())));
        assert!(parse_command("select").is_err());
        assert!(parse_command("frobnicate").is_err());
        assert_eq!(parse_command("   "), Ok(Command::Empty));
    }

    #[test]
    fn add_selects_and_loads_new_site() {
        let mut shell = shell();
        let text = exec(&mut shell, "add Docs | docs.example.org", "");
        assert!(text.contains("Added Docs (https://docs.example.org)"));
        assert!(text.contains("[viewer] loading https://docs.example.org"));
        assert_eq!(
            shell.dashboard().active_site().map(|s| s.name.as_str()),
            Some("Docs")
        );
    }

    #[test]
    fn invalid_add_shows_message() {
        let mut shell = shell();
        let text = exec(&mut shell, "add Docs", "");
        assert!(text.contains("Please enter a site URL."));
        assert_eq!(shell.dashboard().sites().len(), 2);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut shell = shell();
        let text = exec(&mut shell, "delete 1", "n\n");
        assert!(text.contains("Kept"));
        assert_eq!(shell.dashboard().sites().len(), 2);

        let text = exec(&mut shell, "delete 1", "y\n");
        assert!(text.contains("Removed \"Rand'eau Vive\""));
        assert_eq!(shell.dashboard().sites().len(), 1);
        assert_eq!(
            shell.dashboard().active_site().map(|s| s.id.as_str()),
            Some("2")
        );
        assert!(shell.dashboard().store().contains_key(SITES_KEY));
    }

    #[test]
    fn refresh_reloads_viewer() {
        let mut shell = shell();
        exec(&mut shell, "list", "");
        let text = exec(&mut shell, "refresh", "");
        assert!(text.contains("Reloads: 1"));
        assert!(text.contains("[viewer] loading https://www.randeauvive.com"));
    }

    #[test]
    fn unknown_target_is_reported() {
        let mut shell = shell();
        let text = exec(&mut shell, "select 9", "");
        assert!(text.contains("No site matches \"9\""));
    }

    #[test]
    fn quit_stops() {
        let mut shell = shell();
        let mut input = "".as_bytes();
        let mut out = Vec::new();
        assert_eq!(
            shell.handle_line("quit", &mut input, &mut out).unwrap(),
            Flow::Quit
        );
    }
}
