use api_types::account::{AccountNew, AccountUpdate, AccountView};
use engine::{Account, AccountFull, AccountInput, AccountPatch};

use crate::named::Resource;

impl Resource for Account {
    const PATH: &'static str = "/account";

    type New = AccountNew;
    type Update = AccountUpdate;
    type View = AccountView;

    fn input(new: AccountNew) -> AccountInput {
        AccountInput { name: new.name }
    }

    fn patch(update: AccountUpdate) -> AccountPatch {
        AccountPatch { name: update.name }
    }

    fn view(full: AccountFull) -> AccountView {
        AccountView {
            id: full.id,
            name: full.name,
            balance: full.balance,
        }
    }
}
