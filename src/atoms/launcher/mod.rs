mod uri_opener;

pub use uri_opener::{SystemOpener, UriOpener};
