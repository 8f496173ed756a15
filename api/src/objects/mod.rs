mod activity;
mod collection;
mod nft;
mod user;

pub use activity::CreateNftActivityInput;
pub use collection::{CreateCollectionInput, UpdateCollectionInput};
pub use nft::{
    CreateNftInput, LazyMintUpdateInput, MintedNftUpdateInput, PutOnSaleInput,
    UpdateNftApproveInput,
};
pub use user::{LinkWalletInput, SignUpInput, UpdateUserBadgeInput, UpdateUserInput};
