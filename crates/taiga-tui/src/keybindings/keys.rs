//! Key bindings resolved from the `[keys.*]` config sections.

use crossterm::event::KeyCode;
use taiga_core::config::{KeyNames, KeysConfig};
use taiga_core::{TaigaError, TaigaResult};

use super::{KeyBinding, KeySet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalKeys {
    pub quit: KeyBinding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectKeys {
    pub backlog: KeyBinding,
    pub milestones: KeyBinding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacklogKeys {
    pub help: KeyBinding,
    pub reload: KeyBinding,
    pub create_user_story: KeyBinding,
    pub edit_user_story: KeyBinding,
    pub move_user_story_to_milestone: KeyBinding,
    pub next: KeySet,
    pub previous: KeySet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneKeys {
    pub help: KeyBinding,
    pub reload: KeyBinding,
    pub change_to_milestone: KeyBinding,
    pub edit_user_story_or_task: KeyBinding,
    pub next: KeySet,
    pub previous: KeySet,
}

/// Keys understood by popups and forms while they have focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayKeys {
    pub cancel: KeyBinding,
    pub activate: KeyBinding,
    pub next_field: KeyBinding,
    pub previous_field: KeyBinding,
    pub up: KeySet,
    pub down: KeySet,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keys {
    pub global: GlobalKeys,
    pub project: ProjectKeys,
    pub backlog: BacklogKeys,
    pub milestone: MilestoneKeys,
    pub overlay: OverlayKeys,
}

fn down_keys() -> KeySet {
    KeySet::new(KeyBinding::new(KeyCode::Down)).with(KeyBinding::char('j'))
}

fn up_keys() -> KeySet {
    KeySet::new(KeyBinding::new(KeyCode::Up)).with(KeyBinding::char('k'))
}

impl Default for GlobalKeys {
    fn default() -> Self {
        Self {
            quit: KeyBinding::char('q'),
        }
    }
}

impl Default for ProjectKeys {
    fn default() -> Self {
        Self {
            backlog: KeyBinding::char('B'),
            milestones: KeyBinding::char('M'),
        }
    }
}

impl Default for BacklogKeys {
    fn default() -> Self {
        Self {
            help: KeyBinding::char('?'),
            reload: KeyBinding::char('r'),
            create_user_story: KeyBinding::char('n'),
            edit_user_story: KeyBinding::char('e'),
            move_user_story_to_milestone: KeyBinding::char('m'),
            next: down_keys(),
            previous: up_keys(),
        }
    }
}

impl Default for MilestoneKeys {
    fn default() -> Self {
        Self {
            help: KeyBinding::char('?'),
            reload: KeyBinding::char('r'),
            change_to_milestone: KeyBinding::char('m'),
            edit_user_story_or_task: KeyBinding::char('e'),
            next: down_keys(),
            previous: up_keys(),
        }
    }
}

impl Default for OverlayKeys {
    fn default() -> Self {
        Self {
            cancel: KeyBinding::new(KeyCode::Esc),
            activate: KeyBinding::new(KeyCode::Enter),
            next_field: KeyBinding::new(KeyCode::Tab),
            previous_field: KeyBinding::new(KeyCode::BackTab),
            up: up_keys(),
            down: down_keys(),
        }
    }
}

fn parse(section: &str, field: &str, name: &str) -> TaigaResult<KeyBinding> {
    KeyBinding::parse(name).map_err(|e| match e {
        TaigaError::Config(msg) => TaigaError::Config(format!("keys.{}.{}: {}", section, field, msg)),
        other => other,
    })
}

fn parse_set(section: &str, field: &str, names: &KeyNames) -> TaigaResult<KeySet> {
    KeySet::parse(names.names()).map_err(|e| match e {
        TaigaError::Config(msg) => TaigaError::Config(format!("keys.{}.{}: {}", section, field, msg)),
        other => other,
    })
}

fn flatten<'a>(bindings: &[(&'a str, &KeySet)]) -> Vec<(&'a str, KeyBinding)> {
    bindings
        .iter()
        .flat_map(|(name, set)| set.iter().map(move |key| (*name, key)))
        .collect()
}

fn ensure_unique(context: &str, bindings: &[(&str, KeyBinding)]) -> TaigaResult<()> {
    for (i, (name, binding)) in bindings.iter().enumerate() {
        if let Some((other, _)) = bindings[..i].iter().find(|(_, b)| b == binding) {
            return Err(TaigaError::Config(format!(
                "{}: '{}' is bound to both {} and {}",
                context, binding, other, name
            )));
        }
    }
    Ok(())
}

impl Keys {
    pub fn from_config(config: &KeysConfig) -> TaigaResult<Self> {
        let global = GlobalKeys {
            quit: parse("global", "quit", &config.global.quit)?,
        };
        let project = ProjectKeys {
            backlog: parse("project", "backlog", &config.project.backlog)?,
            milestones: parse("project", "milestones", &config.project.milestones)?,
        };
        let b = &config.backlog;
        let backlog = BacklogKeys {
            help: parse("backlog", "help", &b.help)?,
            reload: parse("backlog", "reload", &b.reload)?,
            create_user_story: parse("backlog", "create_user_story", &b.create_user_story)?,
            edit_user_story: parse("backlog", "edit_user_story", &b.edit_user_story)?,
            move_user_story_to_milestone: parse(
                "backlog",
                "move_user_story_to_milestone",
                &b.move_user_story_to_milestone,
            )?,
            next: parse_set("backlog", "next", &b.next)?,
            previous: parse_set("backlog", "previous", &b.previous)?,
        };
        let m = &config.milestone;
        let milestone = MilestoneKeys {
            help: parse("milestone", "help", &m.help)?,
            reload: parse("milestone", "reload", &m.reload)?,
            change_to_milestone: parse("milestone", "change_to_milestone", &m.change_to_milestone)?,
            edit_user_story_or_task: parse(
                "milestone",
                "edit_user_story_or_task",
                &m.edit_user_story_or_task,
            )?,
            next: parse_set("milestone", "next", &m.next)?,
            previous: parse_set("milestone", "previous", &m.previous)?,
        };
        let o = &config.overlay;
        let overlay = OverlayKeys {
            cancel: parse("overlay", "cancel", &o.cancel)?,
            activate: parse("overlay", "activate", &o.activate)?,
            next_field: parse("overlay", "next_field", &o.next_field)?,
            previous_field: parse("overlay", "previous_field", &o.previous_field)?,
            up: parse_set("overlay", "up", &o.up)?,
            down: parse_set("overlay", "down", &o.down)?,
        };

        let keys = Self {
            global,
            project,
            backlog,
            milestone,
            overlay,
        };
        keys.validate()?;
        Ok(keys)
    }

    /// Every key a mode sees (its own plus the project and global keys)
    /// must map to a single action.
    fn validate(&self) -> TaigaResult<()> {
        let shared = [
            ("global.quit", self.global.quit),
            ("project.backlog", self.project.backlog),
            ("project.milestones", self.project.milestones),
        ];

        let b = &self.backlog;
        let mut backlog = shared.to_vec();
        backlog.extend([
            ("backlog.help", b.help),
            ("backlog.reload", b.reload),
            ("backlog.create_user_story", b.create_user_story),
            ("backlog.edit_user_story", b.edit_user_story),
            ("backlog.move_user_story_to_milestone", b.move_user_story_to_milestone),
        ]);
        backlog.extend(flatten(&[("backlog.next", &b.next), ("backlog.previous", &b.previous)]));
        ensure_unique("backlog keys", &backlog)?;

        let m = &self.milestone;
        let mut milestone = shared.to_vec();
        milestone.extend([
            ("milestone.help", m.help),
            ("milestone.reload", m.reload),
            ("milestone.change_to_milestone", m.change_to_milestone),
            ("milestone.edit_user_story_or_task", m.edit_user_story_or_task),
        ]);
        milestone.extend(flatten(&[
            ("milestone.next", &m.next),
            ("milestone.previous", &m.previous),
        ]));
        ensure_unique("milestone keys", &milestone)?;

        let o = &self.overlay;
        let mut overlay = vec![
            ("overlay.cancel", o.cancel),
            ("overlay.activate", o.activate),
            ("overlay.next_field", o.next_field),
            ("overlay.previous_field", o.previous_field),
        ];
        overlay.extend(flatten(&[("overlay.up", &o.up), ("overlay.down", &o.down)]));
        ensure_unique("overlay keys", &overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_default_keys() {
        let keys = Keys::from_config(&KeysConfig::default()).unwrap();
        assert_eq!(keys, Keys::default());
    }

    #[test]
    fn test_custom_binding() {
        let mut config = KeysConfig::default();
        config.milestone.reload = "f5".to_string();
        let keys = Keys::from_config(&config).unwrap();
        assert_eq!(keys.milestone.reload, KeyBinding::new(KeyCode::F(5)));
    }

    #[test]
    fn test_unknown_key_names_the_field() {
        let mut config = KeysConfig::default();
        config.backlog.help = "nope".to_string();
        match Keys::from_config(&config) {
            Err(TaigaError::Config(msg)) => assert!(msg.contains("keys.backlog.help")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_within_mode_is_rejected() {
        let mut config = KeysConfig::default();
        config.backlog.reload = "q".to_string();
        assert!(matches!(
            Keys::from_config(&config),
            Err(TaigaError::Config(_))
        ));
    }

    #[test]
    fn test_vi_motion_keys_are_bound_by_default() {
        let keys = Keys::default();
        assert!(keys.milestone.next.contains(KeyBinding::char('j')));
        assert!(keys.milestone.previous.contains(KeyBinding::char('k')));
        assert!(keys.backlog.next.contains(KeyBinding::new(KeyCode::Down)));
        assert!(keys.overlay.down.contains(KeyBinding::char('j')));
    }

    #[test]
    fn test_alternate_navigation_key_clashing_with_action_is_rejected() {
        let mut config = KeysConfig::default();
        config.milestone.next = KeyNames::many(&["down", "r"]);
        match Keys::from_config(&config) {
            Err(TaigaError::Config(msg)) => {
                assert!(msg.contains("milestone.reload"));
                assert!(msg.contains("milestone.next"));
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_navigation_list_names_the_field() {
        let mut config = KeysConfig::default();
        config.overlay.up = KeyNames::Many(vec![]);
        match Keys::from_config(&config) {
            Err(TaigaError::Config(msg)) => assert!(msg.contains("keys.overlay.up")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_same_key_in_different_modes_is_allowed() {
        let mut config = KeysConfig::default();
        config.backlog.reload = "x".to_string();
        config.milestone.reload = "x".to_string();
        assert!(Keys::from_config(&config).is_ok());
    }
}
