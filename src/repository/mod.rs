//! Repository layer holding the in-memory stores

pub mod books;

/// Main repository struct, created empty at startup and shared by the services
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }
}
