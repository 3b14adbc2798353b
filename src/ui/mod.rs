/// Widgets and styles of the voting window

pub mod panels;
pub mod style;
