//! Menu choices and the dispatcher state machine

use std::fmt;

/// An option of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CalculateExpenses,
    ShowRate,
    ExplainTaxes,
    NetworkAnalysis,
    Exit,
}

impl MenuChoice {
    /// All options in the order they are listed
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::CalculateExpenses,
        MenuChoice::ShowRate,
        MenuChoice::ExplainTaxes,
        MenuChoice::NetworkAnalysis,
        MenuChoice::Exit,
    ];

    /// Map the number typed at the menu prompt to an option
    pub fn from_number(number: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.number() == number)
    }

    pub fn number(&self) -> i64 {
        match self {
            MenuChoice::CalculateExpenses => 1,
            MenuChoice::ShowRate => 2,
            MenuChoice::ExplainTaxes => 3,
            MenuChoice::NetworkAnalysis => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::CalculateExpenses => "Calculate expenses",
            MenuChoice::ShowRate => "Show real-time ICMS rate",
            MenuChoice::ExplainTaxes => "Explain ICMS and ISS",
            MenuChoice::NetworkAnalysis => "Communication network analysis",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Where the dispatcher is between two reads of the menu prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Idle,
    ExpenseFlow,
    RateDisplay,
    ExplanationDisplay,
    NetworkFlow,
    Terminated,
}

impl MenuState {
    /// State entered after reading a choice while idle
    ///
    /// `None` is an out-of-range number and leaves the menu idle. Choices
    /// only move an idle menu.
    pub fn on_choice(self, choice: Option<MenuChoice>) -> Self {
        if self != MenuState::Idle {
            return self;
        }
        match choice {
            Some(MenuChoice::CalculateExpenses) => MenuState::ExpenseFlow,
            Some(MenuChoice::ShowRate) => MenuState::RateDisplay,
            Some(MenuChoice::ExplainTaxes) => MenuState::ExplanationDisplay,
            Some(MenuChoice::NetworkAnalysis) => MenuState::NetworkFlow,
            Some(MenuChoice::Exit) => MenuState::Terminated,
            None => MenuState::Idle,
        }
    }

    /// State after the current flow has run to completion
    pub fn finish(self) -> Self {
        match self {
            MenuState::Terminated => MenuState::Terminated,
            _ => MenuState::Idle,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, MenuState::Terminated)
    }
}

/// The main menu as printed before each prompt
pub fn format_menu() -> String {
    let mut output = String::from("\n-- Main Menu --\n");
    for choice in MenuChoice::ALL {
        output.push_str(&format!("{}\n", choice));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::CalculateExpenses));
        assert_eq!(MenuChoice::from_number(4), Some(MenuChoice::NetworkAnalysis));
        assert_eq!(MenuChoice::from_number(5), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(99), None);
        assert_eq!(MenuChoice::from_number(-1), None);
    }

    #[test]
    fn test_transitions_from_idle() {
        let idle = MenuState::Idle;
        assert_eq!(idle.on_choice(Some(MenuChoice::CalculateExpenses)), MenuState::ExpenseFlow);
        assert_eq!(idle.on_choice(Some(MenuChoice::ShowRate)), MenuState::RateDisplay);
        assert_eq!(
            idle.on_choice(Some(MenuChoice::ExplainTaxes)),
            MenuState::ExplanationDisplay
        );
        assert_eq!(idle.on_choice(Some(MenuChoice::NetworkAnalysis)), MenuState::NetworkFlow);
        assert_eq!(idle.on_choice(Some(MenuChoice::Exit)), MenuState::Terminated);
        assert_eq!(idle.on_choice(None), MenuState::Idle);
    }

    #[test]
    fn test_flows_return_to_idle() {
        for state in [
            MenuState::ExpenseFlow,
            MenuState::RateDisplay,
            MenuState::ExplanationDisplay,
            MenuState::NetworkFlow,
        ] {
            assert_eq!(state.finish(), MenuState::Idle);
        }
        assert!(MenuState::Terminated.finish().is_terminated());
    }

    #[test]
    fn test_terminated_ignores_choices() {
        let state = MenuState::Terminated.on_choice(Some(MenuChoice::ShowRate));
        assert!(state.is_terminated());
    }

    #[test]
    fn test_menu_lists_every_option() {
        let menu = format_menu();
        assert!(menu.contains("-- Main Menu --"));
        assert!(menu.contains("1. Calculate expenses"));
        assert!(menu.contains("5. Exit"));
    }
}
