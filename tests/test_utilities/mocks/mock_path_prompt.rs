use std::cell::RefCell;
use std::collections::VecDeque;
use word_counter::prelude::*;

/// Mock PathPrompt that answers from a fixed queue
pub struct MockPathPrompt {
    answers: RefCell<VecDeque<String>>,
    pub prompts: RefCell<Vec<String>>,
    pub should_fail: bool,
}

impl MockPathPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            prompts: RefCell::new(Vec::new()),
            should_fail: false,
        }
    }

    #[allow(dead_code)]
    pub fn with_failure() -> Self {
        Self {
            answers: RefCell::new(VecDeque::new()),
            prompts: RefCell::new(Vec::new()),
            should_fail: true,
        }
    }
}

impl PathPrompt for MockPathPrompt {
    fn prompt_path(&self, message: &str) -> Result<String> {
        self.prompts.borrow_mut().push(message.to_string());
        if self.should_fail {
            anyhow::bail!("Mock prompt read failure");
        }
        Ok(self.answers.borrow_mut().pop_front().unwrap_or_default())
    }
}
