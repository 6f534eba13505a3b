// Template Method - fixed brewing skeleton with per-beverage steps

pub mod beverages;
pub mod recipe;

pub use beverages::{Coffee, Tea};
pub use recipe::{Recipe, make_drink};
