use std::rc::Rc;

use tracing::debug;

use super::{visible_users, Frame, Renderer};
use crate::domain::User;
use crate::store::{FilterStore, Subscription, UserStore};

/// Matching users as a flat list.
///
/// Subscribes to both stores on mount and redraws on every change;
/// dropping the view unsubscribes.
pub struct FlatListView {
    users: UserStore,
    filter: FilterStore,
    _subscriptions: [Subscription; 2],
}

impl FlatListView {
    pub fn mount(users: &UserStore, filter: &FilterStore, renderer: Rc<dyn Renderer>) -> Self {
        let redraw: Rc<dyn Fn()> = {
            let users = users.clone();
            let filter = filter.clone();
            Rc::new(move || {
                let visible = visible_users(&users.users(), &filter.filter());
                debug!(visible = visible.len(), "Rendering user list");
                renderer.draw(&Frame::UserList(visible));
            })
        };

        let subscriptions = [
            users.subscribe({
                let redraw = Rc::clone(&redraw);
                move || redraw()
            }),
            filter.subscribe({
                let redraw = Rc::clone(&redraw);
                move || redraw()
            }),
        ];
        redraw();

        Self {
            users: users.clone(),
            filter: filter.clone(),
            _subscriptions: subscriptions,
        }
    }

    pub fn visible(&self) -> Vec<User> {
        visible_users(&self.users.users(), &self.filter.filter())
    }

    pub fn frame(&self) -> Frame {
        Frame::UserList(self.visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_renderer::RecordingRenderer;

    fn names(frame: Option<Frame>) -> Vec<String> {
        match frame {
            Some(Frame::UserList(users)) => users.into_iter().map(|u| u.name).collect(),
            other => panic!("expected a user list, got {other:?}"),
        }
    }

    #[test]
    fn draws_on_mount_and_on_every_change() {
        let users = UserStore::new();
        let filter = FilterStore::new();
        let renderer = RecordingRenderer::new();
        let view = FlatListView::mount(&users, &filter, renderer.clone());
        assert_eq!(renderer.frames(), vec![Frame::UserList(Vec::new())]);

        users.add_user(User::new("Bob"));
        users.add_user(User::new("bob"));
        users.add_user(User::new("Robert"));
        filter.set_filter("BO");

        assert_eq!(renderer.frames().len(), 5);
        assert_eq!(names(renderer.last_user_list()), ["Bob", "bob"]);
        assert_eq!(view.frame(), renderer.last_user_list().unwrap());
    }

    #[test]
    fn empty_filter_shows_everyone() {
        let users = UserStore::new();
        let filter = FilterStore::new();
        let renderer = RecordingRenderer::new();
        let view = FlatListView::mount(&users, &filter, renderer.clone());

        users.add_user(User::new("Ann"));
        filter.set_filter("zz");
        assert!(view.visible().is_empty());

        filter.set_filter("");
        assert_eq!(view.visible(), vec![User::new("Ann")]);
    }

    #[test]
    fn dropped_view_stops_drawing() {
        let users = UserStore::new();
        let filter = FilterStore::new();
        let renderer = RecordingRenderer::new();
        let view = FlatListView::mount(&users, &filter, renderer.clone());
        drop(view);
        renderer.clear();

        users.add_user(User::new("Cy"));
        filter.set_filter("c");

        assert!(renderer.frames().is_empty());
    }
}
