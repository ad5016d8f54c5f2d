use std::rc::Rc;

use tracing::debug;

use super::{group_by_initial, visible_users, Frame, Renderer, UserGroup};
use crate::store::{FilterStore, Subscription, UserStore};

/// Matching users grouped by initial, groups in first-seen order.
pub struct GroupedListView {
    users: UserStore,
    filter: FilterStore,
    _subscriptions: [Subscription; 2],
}

impl GroupedListView {
    pub fn mount(users: &UserStore, filter: &FilterStore, renderer: Rc<dyn Renderer>) -> Self {
        let redraw: Rc<dyn Fn()> = {
            let users = users.clone();
            let filter = filter.clone();
            Rc::new(move || {
                let groups = group_by_initial(&visible_users(&users.users(), &filter.filter()));
                debug!(group_count = groups.len(), "Rendering grouped user list");
                renderer.draw(&Frame::GroupedUserList(groups));
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

    pub fn groups(&self) -> Vec<UserGroup> {
        group_by_initial(&visible_users(&self.users.users(), &self.filter.filter()))
    }

    pub fn frame(&self) -> Frame {
        Frame::GroupedUserList(self.groups())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::mock_renderer::RecordingRenderer;

    #[test]
    fn regroups_after_each_change() {
        let users = UserStore::new();
        let filter = FilterStore::new();
        let renderer = RecordingRenderer::new();
        let view = GroupedListView::mount(&users, &filter, renderer.clone());

        for name in ["bob", "Bob", "Alice"] {
            users.add_user(User::new(name));
        }

        let expected = vec![
            UserGroup {
                initial: "B".into(),
                members: vec![User::new("bob"), User::new("Bob")],
            },
            UserGroup {
                initial: "A".into(),
                members: vec![User::new("Alice")],
            },
        ];
        assert_eq!(view.groups(), expected);
        assert_eq!(
            renderer.last_grouped_list(),
            Some(Frame::GroupedUserList(expected))
        );
    }

    #[test]
    fn groups_only_filtered_users() {
        let users = UserStore::new();
        let filter = FilterStore::new();
        let renderer = RecordingRenderer::new();
        let view = GroupedListView::mount(&users, &filter, renderer.clone());

        for name in ["Alice", "Malia", "Bob"] {
            users.add_user(User::new(name));
        }
        filter.set_filter("LI");

        let groups = view.groups();
        let keys: Vec<&str> = groups.iter().map(|g| g.initial.as_str()).collect();
        assert_eq!(keys, ["A", "M"]);
        assert_eq!(renderer.frames().len(), 5);
    }
}
