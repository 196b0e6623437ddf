pub mod paint;
pub mod place;
pub mod remove;

/// Active tool type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Cube,
    Erase,
    Paint,
}

impl Tool {
    /// Tool bound to a number key.
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Tool::Cube),
            '2' => Some(Tool::Erase),
            '3' => Some(Tool::Paint),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Cube => "cube",
            Tool::Erase => "erase",
            Tool::Paint => "paint",
        }
    }
}
