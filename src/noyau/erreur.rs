// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau.
///
/// Les éditions refusées (chiffre en trop, opérateur sur entrée vide, etc.)
/// ne passent PAS par ici : elles rendent `Edition::Ignoree`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurNoyau {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("jeton invalide: '{0}'")]
    JetonInvalide(String),

    #[error("expression invalide")]
    ExpressionInvalide,

    /// Division par zéro ou dépassement : la valeur flottante n’est pas finie.
    #[error("résultat non fini ({0}) : division par zéro ?")]
    NonFini(f64),
}
