// Núcleo puro de corrección: sin UI y sin acceso directo a disco.
// El almacén llega siempre como colaborador inyectado.

pub mod engine;
pub mod ledger;
pub mod matcher;

pub use engine::{SubmitError, SubmitOutcome, full_text, reveal_blank, submit_final, submit_partial};
pub use matcher::classify;
