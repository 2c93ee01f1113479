use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub timestamp: u128,
    pub op: String,
    pub detail: String,
}

impl LogEntry {
    fn new(op: &str, detail: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        Self {
            timestamp: ts,
            op: op.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Events recorded during one invocation. Dumped to stderr with `--verbose`.
#[derive(Debug, Default)]
pub struct SessionLog {
    pub events: Vec<LogEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, op: &str, detail: &str) {
        self.events.push(LogEntry::new(op, detail));
    }

    pub fn render(&self) -> String {
        self.events.iter()
            .map(|e| format!("[{}] {}: {}", e.timestamp, e.op, e.detail))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn dump(&self) {
        eprintln!("=== Session Log ===");
        if !self.events.is_empty() {
            eprintln!("{}", self.render());
        }
    }
}
