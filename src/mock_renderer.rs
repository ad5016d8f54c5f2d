//! # Mock Renderer
//!
//! Records what views draw so tests can assert on frames instead of terminal text.

use std::cell::RefCell;
use std::rc::Rc;

use crate::views::{Frame, Renderer};

#[derive(Default)]
pub struct RecordingRenderer {
    frames: RefCell<Vec<Frame>>,
    notices: RefCell<Vec<String>>,
}

impl RecordingRenderer {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.frames.borrow().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }

    /// Most recent user-list frame, if any.
    pub fn last_user_list(&self) -> Option<Frame> {
        self.frames
            .borrow()
            .iter()
            .rev()
            .find(|f| matches!(f, Frame::UserList(_)))
            .cloned()
    }

    pub fn last_grouped_list(&self) -> Option<Frame> {
        self.frames
            .borrow()
            .iter()
            .rev()
            .find(|f| matches!(f, Frame::GroupedUserList(_)))
            .cloned()
    }

    pub fn clear(&self) {
        self.frames.borrow_mut().clear();
        self.notices.borrow_mut().clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&self, frame: &Frame) {
        self.frames.borrow_mut().push(frame.clone());
    }

    fn notice(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}
