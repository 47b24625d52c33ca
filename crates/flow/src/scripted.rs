//! Scripted presenter for host tests.

use agreementkit_core::{Presenter, Surface, UserChoice};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A presenter that answers with a queue of scripted choices.
///
/// Records every surface it was asked to show.
/// Panics if more surfaces are presented than choices provided.
pub struct ScriptedPresenter {
    choices: Mutex<VecDeque<UserChoice>>,
    presented: Mutex<Vec<Surface>>,
}

impl ScriptedPresenter {
    pub fn new(choices: impl IntoIterator<Item = UserChoice>) -> Self {
        Self {
            choices: Mutex::new(choices.into_iter().collect()),
            presented: Mutex::new(Vec::new()),
        }
    }

    /// Surfaces shown so far, in order.
    pub fn presented(&self) -> Vec<Surface> {
        self.presented.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.presented.lock().unwrap().len()
    }

    /// Choices not yet consumed.
    pub fn remaining(&self) -> usize {
        self.choices.lock().unwrap().len()
    }
}

#[async_trait]
impl Presenter for ScriptedPresenter {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn present(&self, surface: &Surface) -> UserChoice {
        let mut presented = self.presented.lock().unwrap();
        presented.push(surface.clone());
        match self.choices.lock().unwrap().pop_front() {
            Some(choice) => choice,
            None => panic!(
                "ScriptedPresenter: no more choices (surface #{}, '{}')",
                presented.len(),
                surface.title
            ),
        }
    }
}
