//! The scree chart's context-menu vocabulary.
//!
//! Every bar of the chart carries the same menu. Activating an entry yields
//! an [`AxisCommand`] that the host passes, together with the bar's label,
//! to [`AxisController::execute`](super::AxisController::execute).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrdiviewError;

/// An operation a bar's menu can trigger on its dimension.
///
/// Serde serializes as the menu keys (`assign-first`, ..., `flip`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisCommand {
    /// Show the bar's dimension on the first axis.
    AssignFirst,
    /// Show the bar's dimension on the second axis.
    AssignSecond,
    /// Show the bar's dimension on the third axis.
    AssignThird,
    /// Invert the orientation of the bar's dimension.
    Flip,
}

impl AxisCommand {
    /// Every command, in menu order.
    pub const ALL: [Self; 4] = [
        Self::AssignFirst,
        Self::AssignSecond,
        Self::AssignThird,
        Self::Flip,
    ];

    /// Menu key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::AssignFirst => "assign-first",
            Self::AssignSecond => "assign-second",
            Self::AssignThird => "assign-third",
            Self::Flip => "flip",
        }
    }

    /// Menu entry text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AssignFirst => "Set as first axis",
            Self::AssignSecond => "Set as second axis",
            Self::AssignThird => "Set as third axis",
            Self::Flip => "Flip axis orientation",
        }
    }

    /// Axis position an assign command writes to; `None` for
    /// [`Flip`](Self::Flip).
    #[must_use]
    pub fn position(self) -> Option<usize> {
        match self {
            Self::AssignFirst => Some(0),
            Self::AssignSecond => Some(1),
            Self::AssignThird => Some(2),
            Self::Flip => None,
        }
    }
}

impl fmt::Display for AxisCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AxisCommand {
    type Err = OrdiviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.key() == s)
            .ok_or_else(|| OrdiviewError::UnknownCommand(s.to_owned()))
    }
}

/// Pointer action that opens a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuTrigger {
    /// Primary (left) click.
    #[default]
    Primary,
    /// Secondary (right) click.
    Secondary,
}

/// One row of a context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    /// A selectable command.
    Command(AxisCommand),
    /// A visual divider.
    Separator,
}

/// Menu bound to every bar of the scree chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    /// How the menu opens.
    pub trigger: MenuTrigger,
    /// Rows in display order.
    pub entries: Vec<MenuEntry>,
}

impl ContextMenu {
    /// The axis menu: three assign commands, a divider, then flip.
    #[must_use]
    pub fn axis_menu() -> Self {
        Self {
            trigger: MenuTrigger::Primary,
            entries: vec![
                MenuEntry::Command(AxisCommand::AssignFirst),
                MenuEntry::Command(AxisCommand::AssignSecond),
                MenuEntry::Command(AxisCommand::AssignThird),
                MenuEntry::Separator,
                MenuEntry::Command(AxisCommand::Flip),
            ],
        }
    }

    /// Selectable commands, skipping separators.
    pub fn commands(&self) -> impl Iterator<Item = AxisCommand> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Command(cmd) => Some(*cmd),
            MenuEntry::Separator => None,
        })
    }
}

/// Dimension index named by a bar label: `"PC 3"` is dimension 2.
pub fn parse_axis_label(label: &str) -> Result<usize, OrdiviewError> {
    label
        .split_whitespace()
        .nth(1)
        .and_then(|n| n.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| OrdiviewError::InvalidAxisLabel(label.to_owned()))
}
