/// Core functionality modules
///
/// The menu loop and the input parsing it relies on.

pub mod console;
pub mod menu;

pub use console::Console;
pub use menu::MenuChoice;
