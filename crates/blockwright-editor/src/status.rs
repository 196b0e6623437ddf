use std::fmt;

/// Human-readable outcome of the last action, shown by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub text: String,
    /// The action was rejected and nothing changed.
    pub rejected: bool,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rejected: false,
        }
    }

    pub fn rejected(reason: impl fmt::Display) -> Self {
        Self {
            text: capitalize(&reason.to_string()),
            rejected: true,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
