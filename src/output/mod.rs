mod printer;

pub use printer::{init_colors, print_plan, print_report};
