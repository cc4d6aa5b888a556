//! Interactive console menu
//!
//! Prompts, the expense input collector and the dispatcher loop that ties
//! the calculator, the rate display and the network demo together.

pub mod dispatcher;
pub mod input;
pub mod prompt;
pub mod state;

pub use dispatcher::{MenuDispatcher, SessionContext};
pub use input::{collect_expense_inputs, collect_expense_inputs_for};
pub use prompt::Prompter;
pub use state::{format_menu, MenuChoice, MenuState};
