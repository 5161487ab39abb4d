use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, BufRead};

use crossterm::style::Stylize;
use tracing_subscriber::{EnvFilter, fmt};

use blink_focus::page::{self, HostPage, ReadyState};
use blink_focus::storage::{FileStore, resolve_store_path};
use blink_focus::ui::ANIMATE_CLASS;
use blink_focus::widget::{FocusWidget, Startup, start};

/// Terminal stand-in for the host page: elements are text slots redrawn
/// after each change.
struct TerminalPage {
    texts: BTreeMap<String, String>,
    classes: BTreeSet<(String, String)>,
    advance_bound: bool,
}

impl TerminalPage {
    fn new() -> Self {
        let texts = [
            page::FOCUS_WORD,
            page::FOCUS_TAGLINE,
            page::BLINK_BTN,
            page::DATE_LABEL,
            page::BLINK_COUNT,
        ]
        .into_iter()
        .map(|id| (id.to_string(), String::new()))
        .collect();
        Self {
            texts,
            classes: BTreeSet::new(),
            advance_bound: false,
        }
    }

    fn text(&self, id: &str) -> &str {
        self.texts.get(id).map(String::as_str).unwrap_or("")
    }

    fn draw(&self) {
        let word = self.text(page::FOCUS_WORD);
        let animated = self
            .classes
            .contains(&(page::FOCUS_WORD.to_string(), ANIMATE_CLASS.to_string()));
        println!();
        println!("  {}", self.text(page::DATE_LABEL).dim());
        if animated {
            println!("  {}", word.bold().cyan().underlined());
        } else {
            println!("  {}", word.bold().cyan());
        }
        println!("  {}", self.text(page::BLINK_COUNT).dim());
        println!("  {}", self.text(page::FOCUS_TAGLINE).italic().dim());
    }
}

impl HostPage for TerminalPage {
    fn ready_state(&self) -> ReadyState {
        ReadyState::Ready
    }

    fn has_element(&self, id: &str) -> bool {
        self.texts.contains_key(id)
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(slot) = self.texts.get_mut(id) {
            *slot = text.to_string();
        }
    }

    fn add_class(&mut self, id: &str, class: &str) {
        self.classes.insert((id.to_string(), class.to_string()));
    }

    fn remove_class(&mut self, id: &str, class: &str) {
        self.classes.remove(&(id.to_string(), class.to_string()));
    }

    fn force_layout(&mut self, _id: &str) {}

    fn inject_style(&mut self, _css: &str) {}

    fn bind_click(&mut self, id: &str) {
        if id == page::BLINK_BTN {
            self.advance_bound = true;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let store_path = resolve_store_path();
    if let Some(parent) = store_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let store = FileStore::open(store_path);

    let mut page = TerminalPage::new();
    let mut widget = match start(store, &mut page)? {
        Startup::Mounted(widget) => widget,
        Startup::Deferred { store, plan } => FocusWidget::mount(store, plan, &mut page)?,
    };

    page.draw();
    println!();
    println!("  {}", "[enter] blink  [q] quit".dim());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if line?.trim() == "q" {
            break;
        }
        if page.advance_bound {
            widget.advance(&mut page);
            page.draw();
        }
    }

    Ok(())
}
