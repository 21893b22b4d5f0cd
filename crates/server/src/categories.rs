use api_types::category::{CategoryNew, CategoryUpdate, CategoryView};
use engine::{Category, CategoryFull, CategoryInput, CategoryPatch};

use crate::named::Resource;

impl Resource for Category {
    const PATH: &'static str = "/category";

    type New = CategoryNew;
    type Update = CategoryUpdate;
    type View = CategoryView;

    fn input(new: CategoryNew) -> CategoryInput {
        CategoryInput {
            name: new.name,
            budget: new.budget,
        }
    }

    fn patch(update: CategoryUpdate) -> CategoryPatch {
        CategoryPatch {
            name: update.name,
            budget: update.budget,
        }
    }

    fn view(full: CategoryFull) -> CategoryView {
        CategoryView {
            id: full.id,
            name: full.name,
            budget: full.budget,
            expenditure: full.expenditure,
            available: full.available,
        }
    }
}
