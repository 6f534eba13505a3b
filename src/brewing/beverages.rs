// Tea and coffee recipe variants

use crate::brewing::recipe::Recipe;

/// Black tea with a slice of lemon
pub struct Tea;

impl Recipe for Tea {
    fn name(&self) -> &str {
        "Tea"
    }

    fn brew(&self) {
        println!("Steeping the tea bag...");
    }

    fn add_condiments(&self) {
        println!("Adding a slice of lemon...");
    }
}

/// Filter coffee with sugar and milk
pub struct Coffee;

impl Recipe for Coffee {
    fn name(&self) -> &str {
        "Coffee"
    }

    fn brew(&self) {
        println!("Brewing the coffee grounds...");
    }

    fn add_condiments(&self) {
        println!("Adding sugar and milk...");
    }
}
