//! Root composition, event dispatch and startup.

pub mod events;
pub mod input;
pub mod telemetry;

use std::ops::ControlFlow;
use std::rc::Rc;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

pub use events::UiEvent;
pub use telemetry::setup_tracing;

use crate::forms::{AddUserForm, FilterForm, FormId};
use crate::store::{FilterStore, UserStore};
use crate::views::{FlatListView, GroupedListView, Renderer};

/// The whole roster, wired once.
///
/// Both stores are created here and handed by reference to the forms that
/// mutate them and the views that read them. Nothing else owns state.
pub struct RosterApp {
    pub users: UserStore,
    pub filter: FilterStore,
    add_user: AddUserForm,
    filter_form: FilterForm,
    flat_list: FlatListView,
    grouped_list: GroupedListView,
    renderer: Rc<dyn Renderer>,
}

impl RosterApp {
    /// Build the stores, forms and views. Both views draw once on mount.
    #[instrument(name = "roster_app", skip_all)]
    pub fn mount(renderer: Rc<dyn Renderer>) -> Self {
        info!("Mounting roster");

        let users = UserStore::new();
        let filter = FilterStore::new();

        let add_user = AddUserForm::new(users.clone());
        let filter_form = FilterForm::new(filter.clone());
        let flat_list = FlatListView::mount(&users, &filter, Rc::clone(&renderer));
        let grouped_list = GroupedListView::mount(&users, &filter, Rc::clone(&renderer));

        Self {
            users,
            filter,
            add_user,
            filter_form,
            flat_list,
            grouped_list,
            renderer,
        }
    }

    pub fn flat_list(&self) -> &FlatListView {
        &self.flat_list
    }

    pub fn grouped_list(&self) -> &GroupedListView {
        &self.grouped_list
    }

    pub fn buffer(&self, form: FormId) -> &str {
        match form {
            FormId::AddUser => self.add_user.buffer(),
            FormId::Filter => self.filter_form.buffer(),
        }
    }

    /// Handle one event to completion. Views have redrawn by the time this returns.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: UiEvent) -> ControlFlow<()> {
        match event {
            UiEvent::Edit { form, text } => self.edit(form, text),
            UiEvent::Submit(form) => self.submit(form),
            UiEvent::Enter { form, text } => {
                self.edit(form, text);
                self.submit(form);
            }
            UiEvent::Show => {
                self.renderer.draw(&self.flat_list.frame());
                self.renderer.draw(&self.grouped_list.frame());
            }
            UiEvent::Help => self.renderer.notice(input::HELP),
            UiEvent::Rejected(e) => self.renderer.notice(&e.to_string()),
            UiEvent::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Drain events until `Quit` or until every sender is gone.
    #[instrument(name = "dispatcher", skip_all)]
    pub async fn run(&mut self, mut events: mpsc::Receiver<UiEvent>) {
        info!("Dispatcher starting");

        while let Some(event) = events.recv().await {
            if self.dispatch(event).is_break() {
                break;
            }
        }

        info!(user_count = self.users.len(), "Dispatcher stopped");
    }

    /// Tear down the views, releasing their subscriptions.
    pub fn unmount(self) {
        drop(self.flat_list);
        drop(self.grouped_list);
        debug!(
            user_listeners = self.users.listener_count(),
            filter_listeners = self.filter.listener_count(),
            "Roster unmounted"
        );
    }

    fn edit(&mut self, form: FormId, text: String) {
        match form {
            FormId::AddUser => self.add_user.input(text),
            FormId::Filter => self.filter_form.input(text),
        }
    }

    fn submit(&mut self, form: FormId) {
        match form {
            FormId::AddUser => {
                self.add_user.submit();
            }
            FormId::Filter => self.filter_form.submit(),
        }
    }
}
