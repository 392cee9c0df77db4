//! Record types exchanged with the receipts endpoint

pub mod amount;
pub mod lenient;
pub mod receipt;
pub mod supplier;
pub mod user;

pub use amount::Amount;
pub use receipt::{ImageUpload, NewReceipt, Receipt, ReceiptUpdate, UploadedImage};
pub use supplier::{NewSupplier, Supplier, SupplierUpdate};
pub use user::{LoginResult, NewUser, User, UserUpdate};
