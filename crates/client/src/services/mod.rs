pub mod accounts;
pub mod auth;
pub mod inscriptions;
pub mod tournaments;

pub use accounts::AccountService;
pub use auth::AuthService;
pub use inscriptions::InscriptionService;
pub use tournaments::TournamentService;
