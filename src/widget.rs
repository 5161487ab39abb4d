use crate::dates::{date_label, storage_key, today};
use crate::errors::InitError;
use crate::models::DailyState;
use crate::page::{BLINK_BTN, BLINK_COUNT, DATE_LABEL, FOCUS_TAGLINE, FOCUS_WORD, HostPage, ReadyState};
use crate::storage::{StateStore, load_state, save_state};
use crate::ui::{ANIMATE_CLASS, TAGLINE, format_count_label, inject_animation};
use crate::words::pick_word;
use chrono::NaiveDate;
use tracing::warn;

const REQUIRED_ELEMENTS: [&str; 3] = [FOCUS_WORD, BLINK_BTN, DATE_LABEL];

/// Output of the pure startup phase: no page involved, no writes performed.
#[derive(Debug)]
pub struct SessionPlan {
    pub key: String,
    pub date_label: String,
    pub restored: Option<DailyState>,
}

pub fn plan_session<S: StateStore>(store: &S, today: NaiveDate) -> SessionPlan {
    let key = storage_key(today);
    let restored = load_state(store, &key);
    SessionPlan {
        date_label: date_label(today),
        key,
        restored,
    }
}

pub enum Startup<S> {
    Mounted(FocusWidget<S>),
    Deferred { store: S, plan: SessionPlan },
}

/// Plans today's session and mounts it if the page is already ready.
/// A still-loading page gets the plan back to mount once its ready signal fires.
pub fn start<S: StateStore, P: HostPage>(store: S, page: &mut P) -> Result<Startup<S>, InitError> {
    let plan = plan_session(&store, today());
    match page.ready_state() {
        ReadyState::Loading => Ok(Startup::Deferred { store, plan }),
        ReadyState::Ready => Ok(Startup::Mounted(FocusWidget::mount(store, plan, page)?)),
    }
}

#[derive(Debug)]
pub struct FocusWidget<S> {
    store: S,
    key: String,
    state: DailyState,
}

impl<S: StateStore> FocusWidget<S> {
    pub fn mount<P: HostPage>(
        mut store: S,
        plan: SessionPlan,
        page: &mut P,
    ) -> Result<Self, InitError> {
        inject_animation(page);

        for id in REQUIRED_ELEMENTS {
            if !page.has_element(id) {
                warn!("focus page element '{id}' missing, widget not mounted");
                return Err(InitError::MissingElement { id });
            }
        }

        page.set_text(DATE_LABEL, &plan.date_label);

        let state = match plan.restored {
            Some(state) => state,
            None => {
                let state = DailyState::fresh();
                save_state(&mut store, &plan.key, &state);
                state
            }
        };

        page.set_text(FOCUS_WORD, &state.word);
        if page.has_element(BLINK_COUNT) {
            page.set_text(BLINK_COUNT, &format_count_label(state.count));
        }
        if page.has_element(FOCUS_TAGLINE) {
            page.set_text(FOCUS_TAGLINE, TAGLINE);
        }
        page.bind_click(BLINK_BTN);

        Ok(Self {
            store,
            key: plan.key,
            state,
        })
    }

    pub fn advance<P: HostPage>(&mut self, page: &mut P) {
        self.state.word = pick_word(Some(&self.state.word));
        self.state.count = self.state.count.saturating_add(1);

        page.set_text(FOCUS_WORD, &self.state.word);
        // restart the entrance animation: drop the class, force a layout
        // read, then re-add it
        page.remove_class(FOCUS_WORD, ANIMATE_CLASS);
        page.force_layout(FOCUS_WORD);
        page.add_class(FOCUS_WORD, ANIMATE_CLASS);
        if page.has_element(BLINK_COUNT) {
            page.set_text(BLINK_COUNT, &format_count_label(self.state.count));
        }

        save_state(&mut self.store, &self.key, &self.state);
    }

    pub fn state(&self) -> &DailyState {
        &self.state
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
