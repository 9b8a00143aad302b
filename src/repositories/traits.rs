use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the whole address book.
///
/// Storage is all-or-nothing: the book is read once at startup and written
/// once at shutdown. Implementations decide where the data lives.
pub trait AddressBookRepository {
    /// Load the stored address book.
    ///
    /// Returns an empty book when nothing has been stored yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored address book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
