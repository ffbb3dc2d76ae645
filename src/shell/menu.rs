// src/shell/menu.rs

//! Menu text and selection parsing.

use std::str::FromStr;

/// The fixed menu rendered before every prompt.
pub const MENU: &str = "\
=======================================================================
Please input the number of a menu item:
1. submit a command.
2. submit a command (retry if it fails).
3. submit commands from a file.
4. submit commands from a file (retry if they fail).
5. show running commands.
6. show succeeded commands.
7. show failed commands.
8. show resource usage.
=======================================================================";

/// One parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Options 1 and 2.
    SubmitOne { retry: bool },
    /// Options 3 and 4.
    SubmitFile { retry: bool },
    /// Option 5.
    ShowRunning,
    /// Option 6.
    ShowSucceeded,
    /// Option 7.
    ShowFailed,
    /// Option 8.
    ShowResourceUsage,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid selection: {} (expected a number 1-8)", s.trim()))?;

        match number {
            1 => Ok(MenuChoice::SubmitOne { retry: false }),
            2 => Ok(MenuChoice::SubmitOne { retry: true }),
            3 => Ok(MenuChoice::SubmitFile { retry: false }),
            4 => Ok(MenuChoice::SubmitFile { retry: true }),
            5 => Ok(MenuChoice::ShowRunning),
            6 => Ok(MenuChoice::ShowSucceeded),
            7 => Ok(MenuChoice::ShowFailed),
            8 => Ok(MenuChoice::ShowResourceUsage),
            other => Err(format!("invalid selection: {other} (expected 1-8)")),
        }
    }
}
