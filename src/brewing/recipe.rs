// Recipe trait and the fixed make_drink skeleton

/// Per-beverage steps called by [`make_drink`].
///
/// `brew` and `add_condiments` are the beverage-specific steps.
/// `wants_condiments` is a hook: a variant can override it to skip the
/// condiment step; the default is to want them.
pub trait Recipe {
    /// Display name of the beverage
    fn name(&self) -> &str;

    /// Brew the beverage itself
    fn brew(&self);

    /// Add the finishing condiments
    fn add_condiments(&self);

    /// Hook: whether the condiment step should run
    fn wants_condiments(&self) -> bool {
        true
    }
}

/// Prepare a drink following the fixed skeleton.
///
/// The step order never varies: boil water, brew, pour into the cup, then
/// condiments only if the recipe's hook asks for them.
pub fn make_drink(recipe: &dyn Recipe) {
    boil_water();
    recipe.brew();
    pour_in_cup();
    if recipe.wants_condiments() {
        recipe.add_condiments();
    }
    println!("{} is ready!\n", recipe.name());
}

fn boil_water() {
    println!("Boiling water...");
}

fn pour_in_cup() {
    println!("Pouring into the cup...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    // Recipe recording which of its steps ran, in order
    struct ScriptedRecipe {
        condiments: bool,
        steps: RefCell<Vec<&'static str>>,
    }

    impl ScriptedRecipe {
        fn new(condiments: bool) -> Self {
            Self {
                condiments,
                steps: RefCell::new(Vec::new()),
            }
        }
    }

    impl Recipe for ScriptedRecipe {
        fn name(&self) -> &str {
            "Scripted"
        }

        fn brew(&self) {
            self.steps.borrow_mut().push("brew");
        }

        fn add_condiments(&self) {
            self.steps.borrow_mut().push("condiments");
        }

        fn wants_condiments(&self) -> bool {
            self.condiments
        }
    }

    #[test]
    fn test_steps_run_in_fixed_order() {
        let recipe = ScriptedRecipe::new(true);
        make_drink(&recipe);
        assert_eq!(*recipe.steps.borrow(), vec!["brew", "condiments"]);
    }

    #[test]
    fn test_hook_skips_condiments() {
        let recipe = ScriptedRecipe::new(false);
        make_drink(&recipe);
        assert_eq!(*recipe.steps.borrow(), vec!["brew"]);
    }
}
