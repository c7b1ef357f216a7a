//! A host that records commands instead of editing anything.

use crate::command::Command;
use crate::host::EditingHost;
use std::collections::HashSet;

pub(crate) struct RecordingHost {
    pub executed: Vec<Command>,
    pub active: HashSet<String>,
    pub block: String,
    pub html: String,
    pub first_child_text: bool,
    pub prompt_reply: Option<String>,
    pub focus_count: usize,
    pub exec_result: bool,
}

impl RecordingHost {
    pub fn with_html(html: &str) -> Self {
        RecordingHost {
            html: html.to_string(),
            ..Default::default()
        }
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        RecordingHost {
            executed: Vec::new(),
            active: HashSet::new(),
            block: String::new(),
            html: String::new(),
            first_child_text: false,
            prompt_reply: None,
            focus_count: 0,
            exec_result: true,
        }
    }
}

impl EditingHost for RecordingHost {
    fn exec(&mut self, command: &Command) -> bool {
        self.executed.push(command.clone());
        self.exec_result
    }

    fn query_state(&self, command: &str) -> bool {
        self.active.contains(command)
    }

    fn query_value(&self, _command: &str) -> String {
        self.block.clone()
    }

    fn inner_html(&self) -> String {
        self.html.clone()
    }

    fn set_inner_html(&mut self, html: &str) {
        self.html = html.to_string();
    }

    fn first_child_is_text(&self) -> bool {
        self.first_child_text
    }

    fn focus(&mut self) {
        self.focus_count += 1;
    }

    fn prompt(&mut self, _message: &str) -> Option<String> {
        self.prompt_reply.clone()
    }
}
