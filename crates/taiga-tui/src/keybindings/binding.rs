use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::fmt;
use taiga_core::{TaigaError, TaigaResult};

/// A key a controller can bind an action to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding(KeyCode);

impl KeyBinding {
    pub const fn new(code: KeyCode) -> Self {
        Self(code)
    }

    pub const fn char(c: char) -> Self {
        Self(KeyCode::Char(c))
    }

    pub fn code(&self) -> KeyCode {
        self.0
    }

    /// Parses a key name from the config file: a single character, or one of
    /// `enter`, `esc`, `tab`, `backtab`, `up`, `down`, `left`, `right`,
    /// `home`, `end`, `pageup`, `pagedown`, `delete`, `backspace`, `space`,
    /// `f1`..`f12`.
    pub fn parse(name: &str) -> TaigaResult<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Self::char(c));
        }

        let code = match name.trim().to_ascii_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" | "shift-tab" => KeyCode::BackTab,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            "delete" | "del" => KeyCode::Delete,
            "backspace" => KeyCode::Backspace,
            "space" => KeyCode::Char(' '),
            other => match other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                Some(n @ 1..=12) => KeyCode::F(n),
                _ => {
                    return Err(TaigaError::Config(format!("Unknown key name '{}'", name)));
                }
            },
        };
        Ok(Self(code))
    }

    /// The binding for a key press. Releases, repeats and chords with
    /// Ctrl or Alt do not map to a binding.
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        if event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        Some(Self(event.code))
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            KeyCode::Char(' ') => write!(f, "Space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Esc => write!(f, "ESC"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::BackTab => write!(f, "Shift-Tab"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PgUp"),
            KeyCode::PageDown => write!(f, "PgDn"),
            KeyCode::Delete => write!(f, "Del"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::F(n) => write!(f, "F{}", n),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Several keys bound to the same action, e.g. `↓` and `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySet {
    primary: KeyBinding,
    alternates: Vec<KeyBinding>,
}

impl KeySet {
    pub fn new(primary: KeyBinding) -> Self {
        Self {
            primary,
            alternates: Vec::new(),
        }
    }

    pub fn with(mut self, alternate: KeyBinding) -> Self {
        self.alternates.push(alternate);
        self
    }

    /// Parses a list of key names. The list must not be empty.
    pub fn parse<'a>(names: impl IntoIterator<Item = &'a str>) -> TaigaResult<Self> {
        let mut bindings = names.into_iter().map(KeyBinding::parse);
        let primary = bindings
            .next()
            .ok_or_else(|| TaigaError::Config("At least one key is required".to_string()))??;
        let alternates = bindings.collect::<TaigaResult<Vec<_>>>()?;
        Ok(Self {
            primary,
            alternates,
        })
    }

    pub fn primary(&self) -> KeyBinding {
        self.primary
    }

    pub fn contains(&self, key: KeyBinding) -> bool {
        self.iter().any(|k| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = KeyBinding> + '_ {
        std::iter::once(self.primary).chain(self.alternates.iter().copied())
    }
}

impl fmt::Display for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|k| k.to_string()).collect();
        write!(f, "{}", names.join("/"))
    }
}
