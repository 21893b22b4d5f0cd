use api_types::payee::{PayeeNew, PayeeUpdate, PayeeView};
use engine::{Payee, PayeeFull, PayeeInput, PayeePatch};

use crate::named::Resource;

impl Resource for Payee {
    const PATH: &'static str = "/payee";

    type New = PayeeNew;
    type Update = PayeeUpdate;
    type View = PayeeView;

    fn input(new: PayeeNew) -> PayeeInput {
        PayeeInput { name: new.name }
    }

    fn patch(update: PayeeUpdate) -> PayeePatch {
        PayeePatch { name: update.name }
    }

    fn view(full: PayeeFull) -> PayeeView {
        PayeeView {
            id: full.id,
            name: full.name,
            expenditure: full.expenditure,
        }
    }
}
